use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Render error: {0}")]
    Render(String),
    #[error("Typesetting failed with {status}")]
    Build { status: std::process::ExitStatus },
}

/// Caller-input validation failures. None of these are recoverable.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Unknown length unit: {0:?}")]
    UnknownUnit(String),
    #[error("Invalid length: {0:?}")]
    InvalidLength(String),
    #[error("Unknown paper size: {0:?}")]
    UnknownPaperSize(String),
    #[error("Unknown page orientation: {0:?}")]
    UnknownOrientation(String),
    #[error("Ambiguous or missing size specification: exactly one of width_ratio, height_ratio, width or height is required (got {given})")]
    AmbiguousSize { given: usize },
    #[error("{0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, ReportError>;

impl ReportError {
    /// True for caller-input validation failures
    pub fn is_config(&self) -> bool {
        matches!(self, ReportError::Config(_))
    }
}
