use thiserror::Error;

/// Errors that can occur while configuring, composing, or rendering an invoice.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InvoiceError {
    /// Invalid configuration value (format pattern, proportions, shareholder count).
    #[error("configuration error: {0}")]
    Config(String),

    /// A referenced file could not be read or the output path written.
    #[error("resource error: {0}")]
    Resource(String),

    /// The rendering backend reported a layout or encoding failure.
    #[error("render error: {0}")]
    Render(String),

    /// Derived results were requested before generation completed.
    #[error("not generated yet: {0}")]
    NotGenerated(String),

    /// External input data could not be interpreted.
    #[error("data error: {0}")]
    Data(String),
}

/// A single configuration validation error with field path and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dot-separated path to the invalid field (e.g. "headerTableProportions").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl InvoiceError {
    /// Collapse a non-empty validation report into a single configuration error.
    pub(crate) fn from_validation(errors: &[ValidationError]) -> Self {
        let msg = errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        Self::Config(msg)
    }
}
