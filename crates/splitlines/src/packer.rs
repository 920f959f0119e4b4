//! Greedy line packing.
//!
//! Tokens are appended one at a time to the line in progress and the result is
//! measured. As long as the candidate stays within the threshold height it is
//! kept; the first token that makes it grow past the threshold closes the line
//! and is retried on a fresh one.
//!
//! Every overflow closes the line in progress, even an empty one. A token that
//! overflows an empty line would be retried forever, so the packer remembers
//! the candidate of the last overflow in [`Attempt`]; when the retry produces
//! the same candidate again the token is placed alone on a forced line and
//! packing moves on.

use markup::Node;

use crate::error::{MeasurementError, Result};
use crate::format::LineFormatter;
use crate::oracle::{MeasurementOracle, checked_height};
use crate::token::Token;

/// Slack added to the single-line height to absorb sub-pixel rounding.
pub const THRESHOLD_SLACK: f32 = 2.0;

/// Maximum accepted height of one line at `width`.
pub fn threshold<O: MeasurementOracle + ?Sized>(oracle: &mut O, width: f32) -> Result<f32> {
    let baseline = checked_height(oracle.baseline_height(width)?)?;
    if baseline <= 0.0 {
        return Err(MeasurementError::InvalidHeight(baseline).into());
    }
    Ok(baseline + THRESHOLD_SLACK)
}

/// A finished line.
#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    /// Position among emitted lines, starting at 0.
    pub index: usize,
    /// Tokens on this line, in order.
    pub tokens: Vec<Token>,
    /// Serialized tokens, each followed by one space.
    pub content: String,
    /// `content` wrapped in the container tag.
    pub markup: String,
    /// Placed by the repeating-token escape; may exceed the threshold.
    pub forced: bool,
}

impl Line {
    /// Words on this line, breaks excluded.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.tokens
            .iter()
            .filter(|t| !t.is_break())
            .map(Token::word)
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tokens as sibling nodes, each followed by one space.
    pub fn nodes(&self) -> Vec<Node> {
        let mut nodes = Vec::new();
        for token in &self.tokens {
            match token.to_node() {
                Node::Text(word) => push_text(&mut nodes, &word),
                node => nodes.push(node),
            }
            push_text(&mut nodes, " ");
        }
        nodes
    }
}

fn push_text(nodes: &mut Vec<Node>, text: &str) {
    match nodes.last_mut() {
        Some(Node::Text(previous)) => previous.push_str(text),
        _ => nodes.push(Node::Text(text.to_string())),
    }
}

/// Outcome of the previous measurement.
#[derive(Clone, Debug, PartialEq)]
enum Attempt {
    Fresh,
    /// The last candidate overflowed; holds that candidate.
    Overflowed(String),
}

/// Content of the line being built.
#[derive(Debug, Default)]
struct PendingLine {
    content: String,
    tokens: Vec<Token>,
}

impl PendingLine {
    fn candidate(&self, token: &Token) -> String {
        let mut candidate = self.content.clone();
        token.write_html(&mut candidate);
        candidate.push(' ');
        candidate
    }

    fn accept(&mut self, token: &Token, candidate: String) {
        self.content = candidate;
        self.tokens.push(token.clone());
    }

    fn take(&mut self) -> PendingLine {
        std::mem::take(self)
    }
}

/// Packs tokens into lines bounded by a height threshold.
pub struct LinePacker<'a, O: ?Sized> {
    oracle: &'a mut O,
    width: f32,
    threshold: f32,
    formatter: &'a LineFormatter,
}

impl<'a, O: MeasurementOracle + ?Sized> LinePacker<'a, O> {
    pub fn new(oracle: &'a mut O, width: f32, threshold: f32, formatter: &'a LineFormatter) -> Self {
        Self {
            oracle,
            width,
            threshold,
            formatter,
        }
    }

    /// Pack `tokens` into lines.
    ///
    /// Always yields at least one line; the last line is emitted even when
    /// empty.
    pub fn pack(&mut self, tokens: &[Token]) -> Result<Vec<Line>> {
        let mut lines = Vec::new();
        let mut current = PendingLine::default();
        let mut attempt = Attempt::Fresh;
        let mut cursor = 0;

        while let Some(token) = tokens.get(cursor) {
            let candidate = current.candidate(token);

            if token.is_break() {
                current.accept(token, candidate);
                cursor += 1;
                continue;
            }

            let repeating =
                matches!(&attempt, Attempt::Overflowed(previous) if *previous == candidate);
            if repeating {
                log::debug!(
                    "line {}: {:?} never fits within {}, placing it alone",
                    lines.len(),
                    token.word(),
                    self.threshold
                );
                current.accept(token, candidate);
                self.finish_line(&mut lines, current.take(), true)?;
                attempt = Attempt::Fresh;
                cursor += 1;
                continue;
            }

            let height = checked_height(self.oracle.measure_height(&candidate, self.width)?)?;
            log::trace!("candidate height {height} (threshold {})", self.threshold);

            if height <= self.threshold {
                current.accept(token, candidate);
                attempt = Attempt::Fresh;
                cursor += 1;
            } else {
                self.finish_line(&mut lines, current.take(), false)?;
                attempt = Attempt::Overflowed(candidate);
            }
        }

        self.finish_line(&mut lines, current, false)?;
        Ok(lines)
    }

    fn finish_line(&self, lines: &mut Vec<Line>, pending: PendingLine, forced: bool) -> Result<()> {
        let index = lines.len();
        let markup = self.formatter.format(&pending.content, index)?;
        log::debug!("line {index}: {:?}", pending.content);

        lines.push(Line {
            index,
            tokens: pending.tokens,
            content: pending.content,
            markup,
            forced,
        });
        Ok(())
    }
}
