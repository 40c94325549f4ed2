//! CLI-level errors (wraps infrastructure errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::infrastructure::InfraError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Infra(#[from] InfraError),

    #[error("encode output: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("{0}")]
    Usage(String),
}

impl From<ApplicationError> for CliError {
    fn from(e: ApplicationError) -> Self {
        CliError::Infra(InfraError::Application(e))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) | CliError::Usage(_) => crate::exitcode::USAGE,
            CliError::Encode(_) => crate::exitcode::SOFTWARE,
            CliError::Infra(e) => match e {
                InfraError::NoInput => crate::exitcode::USAGE,
                InfraError::InputNotFound(_) => crate::exitcode::NOINPUT,
                InfraError::Io { .. } => crate::exitcode::IOERR,
                InfraError::Application(ApplicationError::Config { .. }) => {
                    crate::exitcode::CONFIG
                }
                InfraError::Application(ApplicationError::Fetch { source, .. }) => {
                    match source.downcast_ref::<std::io::Error>().map(|io| io.kind()) {
                        Some(std::io::ErrorKind::InvalidData) => crate::exitcode::DATAERR,
                        Some(std::io::ErrorKind::NotFound) => crate::exitcode::NOINPUT,
                        _ => crate::exitcode::IOERR,
                    }
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fetch_error(kind: std::io::ErrorKind) -> CliError {
        CliError::from(ApplicationError::Fetch {
            context: "read categories from test".into(),
            source: Box::new(std::io::Error::new(kind, "boom")),
        })
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            CliError::Usage("x".into()).exit_code(),
            crate::exitcode::USAGE
        );
        assert_eq!(
            CliError::from(InfraError::NoInput).exit_code(),
            crate::exitcode::USAGE
        );
        assert_eq!(
            fetch_error(std::io::ErrorKind::InvalidData).exit_code(),
            crate::exitcode::DATAERR
        );
        assert_eq!(
            fetch_error(std::io::ErrorKind::PermissionDenied).exit_code(),
            crate::exitcode::IOERR
        );
        assert_eq!(
            fetch_error(std::io::ErrorKind::NotFound).exit_code(),
            crate::exitcode::NOINPUT
        );
        assert_eq!(
            CliError::from(ApplicationError::Fetch {
                context: "fetch from test".into(),
                source: "upstream went away".into(),
            })
            .exit_code(),
            crate::exitcode::IOERR
        );
        assert_eq!(
            CliError::from(ApplicationError::Config {
                message: "bad".into()
            })
            .exit_code(),
            crate::exitcode::CONFIG
        );
    }
}
