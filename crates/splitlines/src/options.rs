//! Wrapping options.
//!
//! Recognized option keys are `width`, `tag` and `keepHtml` (`keep_html` is
//! accepted as well). Anything else is rejected.

use std::str::FromStr;

use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag, tag_no_case},
    character::complete::{char, digit1},
    combinator::{map, map_res, opt, recognize},
    sequence::{pair, terminated, tuple},
};

use crate::error::ConfigError;

/// Container tag used when none is configured.
pub const DEFAULT_TAG: &str = "<div>";

/// Rendering width lines are wrapped to.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Width {
    /// The target element's own rendered width.
    #[default]
    Auto,
    /// A fixed width in the oracle's units.
    Fixed(f32),
}

impl Width {
    /// Reject fixed widths that are not positive and finite.
    pub fn validate(self) -> Result<Self, ConfigError> {
        match self {
            Width::Fixed(value) if !(value.is_finite() && value > 0.0) => {
                Err(ConfigError::InvalidWidth(value.to_string()))
            }
            width => Ok(width),
        }
    }
}

impl From<f32> for Width {
    fn from(value: f32) -> Self {
        Width::Fixed(value)
    }
}

/// Parse a floating point or integer number.
fn parse_number(input: &str) -> IResult<&str, f64> {
    map_res(
        recognize(tuple((
            opt(char('-')),
            digit1,
            opt(pair(char('.'), digit1)),
        ))),
        |s: &str| s.parse::<f64>(),
    )(input)
}

/// Parse `auto` or a number with an optional `px` suffix.
fn parse_width(input: &str) -> IResult<&str, Width> {
    alt((
        map(tag_no_case("auto"), |_| Width::Auto),
        map(terminated(parse_number, opt(tag("px"))), |value| {
            Width::Fixed(value as f32)
        }),
    ))(input)
}

impl FromStr for Width {
    type Err = ConfigError;

    /// ```
    /// use splitlines::Width;
    ///
    /// assert_eq!("auto".parse::<Width>(), Ok(Width::Auto));
    /// assert_eq!(" 320px ".parse::<Width>(), Ok(Width::Fixed(320.0)));
    /// assert!("wide".parse::<Width>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_width(s.trim()) {
            Ok(("", width)) => width.validate(),
            _ => Err(ConfigError::InvalidWidth(s.to_string())),
        }
    }
}

/// Options for a wrapping call.
#[derive(Clone, Debug, PartialEq)]
pub struct Options {
    pub width: Width,
    /// Container markup for each line.
    pub tag: String,
    /// Keep nested markup on every word; when false only flattened text is
    /// wrapped.
    pub keep_html: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            width: Width::Auto,
            tag: DEFAULT_TAG.to_string(),
            keep_html: true,
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_width(mut self, width: impl Into<Width>) -> Self {
        self.width = width.into();
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_keep_html(mut self, keep_html: bool) -> Self {
        self.keep_html = keep_html;
        self
    }

    /// Set one option from its string form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "width" => self.width = value.parse()?,
            "tag" => self.tag = value.to_string(),
            "keepHtml" | "keep_html" => self.keep_html = parse_bool(value)?,
            other => return Err(ConfigError::UnknownOption(other.to_string())),
        }
        Ok(())
    }

    /// Merge string-keyed overrides on top of these options.
    ///
    /// Nothing is applied unless every pair is valid.
    pub fn with_overrides<'a, I>(self, pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut merged = self;
        for (key, value) in pairs {
            merged.set(key, value)?;
        }
        Ok(merged)
    }

    /// Build options from string-keyed pairs over the defaults.
    ///
    /// ```
    /// use splitlines::{Options, Width};
    ///
    /// let options = Options::from_pairs([("width", "240"), ("keepHtml", "false")]).unwrap();
    /// assert_eq!(options.width, Width::Fixed(240.0));
    /// assert!(!options.keep_html);
    /// assert_eq!(options.tag, "<div>");
    /// ```
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        Self::default().with_overrides(pairs)
    }
}

fn parse_bool(value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ConfigError::InvalidKeepHtml(value.to_string())),
    }
}
