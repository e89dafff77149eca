use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("prompt failed")]
    Prompt(#[from] dialoguer::Error),

    #[error("failed to serialize report")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::CliError;

    #[test]
    fn io_error_converts_via_from() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "test");

        let cli_err: CliError = io_err.into();

        assert!(matches!(cli_err, CliError::Io(_)));
    }

    #[test]
    fn io_error_has_source_chain() {
        let cli_err: CliError = std::io::Error::other("closed").into();

        let source = std::error::Error::source(&cli_err);

        assert!(source.is_some_and(|s| s.to_string() == "closed"));
    }

    #[test]
    fn json_error_converts_via_from() {
        let Err(json_err) = serde_json::from_str::<u8>("not json") else {
            panic!("expected parse failure");
        };

        let cli_err: CliError = json_err.into();

        assert!(matches!(cli_err, CliError::Json(_)));
    }
}
