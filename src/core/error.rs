use thiserror::Error;

/// Errors that can occur while fetching, rendering, or delivering a document.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CotizaError {
    /// Record store unreachable. Fatal for the invocation.
    #[error("record store unreachable: {0}")]
    Connection(String),

    /// No record matches the given identifier. The renderer fails fast
    /// instead of producing a partially blank document.
    #[error("missing required record: {collection}/{id}")]
    NotFound { collection: String, id: String },

    /// Bad input at the CLI boundary (unrecognized record type, malformed id).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Markup serialization error.
    #[error("markup error: {0}")]
    Markup(String),

    /// External PDF renderer failed.
    #[error("PDF renderer error: {0}")]
    Pdf(String),

    /// SMTP composition or delivery error.
    #[error("mail error: {0}")]
    Mail(String),

    /// Underlying I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CotizaError {
    /// Process exit code for the CLI. A dead store gets a distinct code so
    /// supervisors can tell infrastructure failures from bad invocations.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Connection(_) => 2,
            _ => 1,
        }
    }
}
