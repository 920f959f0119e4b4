use markup::MarkupParseError;
use thiserror::Error;

/// Errors raised while wrapping an element into lines.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SplitLinesError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigError),

    #[error("Measurement unavailable: {0}")]
    MeasurementUnavailable(#[from] MeasurementError),

    #[error("Markup error: {0}")]
    Markup(#[from] MarkupParseError),
}

/// Unsupported option values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("invalid width `{0}`: expected a positive number or `auto`")]
    InvalidWidth(String),

    #[error("invalid keepHtml value `{0}`: expected `true` or `false`")]
    InvalidKeepHtml(String),

    #[error("invalid container tag `{0}`")]
    InvalidTag(String),

    #[error("unknown option `{0}`")]
    UnknownOption(String),
}

/// Failures reported by a measurement oracle.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeasurementError {
    #[error("rendering width {0} leaves no room for content")]
    ZeroWidth(f32),

    #[error("element has no rendered width to resolve `auto`")]
    NoElementWidth,

    #[error("oracle returned unusable height {0}")]
    InvalidHeight(f32),

    #[error("cannot measure fragment: {0}")]
    Unmeasurable(String),
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, SplitLinesError>;
