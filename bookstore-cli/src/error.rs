use thiserror::Error;

/// Errors that can end an interactive session.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error on the console
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Opening or initializing the catalog failed
    #[error("Database error: {0}")]
    Schema(#[from] bookstore_db::SchemaError),

    /// A read or write against the catalog failed
    #[error("Database error: {0}")]
    Operation(#[from] bookstore_db::OperationError),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// Standard input reached end of file
    #[error("input closed")]
    InputClosed,
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
