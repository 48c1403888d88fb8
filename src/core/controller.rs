use std::fmt;
use std::fmt::{Display, Formatter};
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::core::library::LibraryError;

#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Configuration,
}

impl AppState {
    pub fn new(config: Configuration) -> AppState {
        AppState {
            config,
        }
    }
}

// Exit codes of the `biblio` binary, loosely following sysexits.h
pub const EXIT_USAGE: i32 = 64;
pub const EXIT_NOT_FOUND: i32 = 66;
pub const EXIT_UNAVAILABLE: i32 = 69;
pub const EXIT_SOFTWARE: i32 = 70;
pub const EXIT_NO_PERMISSION: i32 = 77;

// CliError is what a controller hands back to the terminal: the process exit code and
// the message shown to the librarian.
#[derive(Debug, PartialEq)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: &str) -> Self {
        Self { code, message: message.to_string() }
    }
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

pub type CliResult = Result<String, CliError>;

impl From<CommandError> for CliError {
    fn from(err: CommandError) -> Self {
        let message = err.message().to_string();
        match err {
            CommandError::Access { .. } => {
                CliError { code: EXIT_NO_PERMISSION, message }
            }
            CommandError::Gateway { .. } => {
                CliError { code: EXIT_UNAVAILABLE, message }
            }
            CommandError::DuplicateKey { .. } => {
                CliError { code: EXIT_USAGE, message }
            }
            CommandError::NotFound { .. } => {
                CliError { code: EXIT_NOT_FOUND, message }
            }
            CommandError::Runtime { retryable: true, .. } => {
                CliError { code: EXIT_UNAVAILABLE, message }
            }
            CommandError::Runtime { .. } => {
                CliError { code: EXIT_SOFTWARE, message }
            }
            CommandError::Serialization { .. } => {
                CliError { code: EXIT_SOFTWARE, message }
            }
            CommandError::Validation { .. } => {
                CliError { code: EXIT_USAGE, message }
            }
        }
    }
}

// factories fail before any command runs
impl From<LibraryError> for CliError {
    fn from(err: LibraryError) -> Self {
        CliError::from(CommandError::from(err))
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::CommandError;
    use crate::core::controller::{CliError, EXIT_NO_PERMISSION, EXIT_NOT_FOUND, EXIT_UNAVAILABLE, EXIT_USAGE};
    use crate::core::library::LibraryError;

    #[tokio::test]
    async fn test_should_map_command_errors() {
        let err = CliError::from(CommandError::Validation { message: "bad cpf".to_string(), reason_code: None });
        assert_eq!(CliError::new(EXIT_USAGE, "bad cpf"), err);
        let err = CliError::from(CommandError::NotFound { message: "gone".to_string() });
        assert_eq!(EXIT_NOT_FOUND, err.code);
        let err = CliError::from(CommandError::Runtime { message: "down".to_string(), reason_code: None, retryable: true });
        assert_eq!(EXIT_UNAVAILABLE, err.code);
    }

    #[tokio::test]
    async fn test_should_map_library_errors() {
        let err = CliError::from(LibraryError::access_denied("invalid credentials", None));
        assert_eq!(CliError::new(EXIT_NO_PERMISSION, "invalid credentials"), err);
    }
}
