use thiserror::Error;

#[derive(Debug, Error)]
pub enum HighlightError {
    #[error("Failed to compile keyword pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Invalid colour value '{0}': expected #RRGGBB or a colour name")]
    InvalidColor(String),

    #[error("Unknown highlight category '{0}'")]
    UnknownCategory(String),
}
