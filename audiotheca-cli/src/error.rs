use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Store operation failed
    #[error("Database error: {0}")]
    Database(String),

    /// User-entered value rejected before reaching the store
    #[error("Invalid input: {0}")]
    Input(String),

    /// Report or listing export failed
    #[error("Export error: {0}")]
    Export(String),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),
}

impl CliError {
    pub(crate) fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub(crate) fn input(msg: impl Into<String>) -> Self {
        Self::Input(msg.into())
    }

    pub(crate) fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

impl From<audiotheca_catalog::InputError> for CliError {
    fn from(e: audiotheca_catalog::InputError) -> Self {
        Self::Input(e.to_string())
    }
}

/// Wrap a store failure as `Failed to <action>: <cause>`.
pub(crate) fn failed(action: &str) -> impl FnOnce(audiotheca_db::OperationError) -> CliError + '_ {
    move |e| CliError::database(format!("Failed to {action}: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use audiotheca_catalog::InputError;

    #[test]
    fn store_failures_name_the_action() {
        let err = failed("add release")(audiotheca_db::OperationError::NotFound {
            entity_type: "artist".to_string(),
            id: "7".to_string(),
        });
        assert!(matches!(err, CliError::Database(_)));
        assert!(err.to_string().starts_with("Database error: Failed to add release: "));
    }

    #[test]
    fn input_errors_convert() {
        let err: CliError = InputError::Missing("Catalog number").into();
        assert_eq!(err.to_string(), "Invalid input: Catalog number is required");
    }
}
