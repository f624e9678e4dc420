//! Error types for the CLI application.
//!
//! [`CliError`] is what every command handler returns; [`crate::run`] turns it
//! into a message on stderr and an exit code.

use std::fmt;

use fifty_engine::errors::GameError;

use crate::config::ConfigError;
use crate::session::SessionError;

/// Custom error type for CLI operations.
#[derive(Debug)]
pub enum CliError {
    /// I/O error (stdout/stderr writes, config file reads)
    Io(std::io::Error),

    /// Invalid user input or command-line arguments
    InvalidInput(String),

    /// Configuration error
    Config(String),

    /// Engine-related error
    Engine(String),

    /// Input ended while a game was still running
    Interrupted(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(msg) => write!(f, "Engine error: {}", msg),
            CliError::Interrupted(msg) => write!(f, "Interrupted: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<GameError> for CliError {
    fn from(error: GameError) -> Self {
        match error {
            GameError::InvalidSetup(msg) => CliError::InvalidInput(msg),
            other => CliError::Engine(other.to_string()),
        }
    }
}

impl From<SessionError> for CliError {
    fn from(error: SessionError) -> Self {
        match error {
            SessionError::Game(e) => e.into(),
            other => CliError::Engine(other.to_string()),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(error: ConfigError) -> Self {
        CliError::Config(error.to_string())
    }
}

/// Failure tied to one item of a batch, e.g. one simulated game.
///
/// # Examples
///
/// ```rust
/// use fifty_cli::BatchValidationError;
///
/// let error = BatchValidationError {
///     item_context: 5,
///     message: "51 cards accounted for".to_string(),
/// };
/// assert_eq!(error.to_string(), "5: 51 cards accounted for");
/// ```
#[derive(Debug)]
pub struct BatchValidationError<T> {
    /// Context identifying the item that failed validation
    pub item_context: T,
    pub message: String,
}

impl<T: fmt::Display> fmt::Display for BatchValidationError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.item_context, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fifty_engine::errors::MoveError;

    #[test]
    fn setup_errors_are_user_input_errors() {
        let e: CliError = GameError::InvalidSetup("4 opponents".into()).into();
        assert!(matches!(e, CliError::InvalidInput(_)));
        assert_eq!(e.to_string(), "Invalid input: 4 opponents");
    }

    #[test]
    fn move_errors_map_to_engine_errors() {
        let e: CliError = GameError::InvalidMove(MoveError::AceNeedsValue).into();
        assert!(matches!(e, CliError::Engine(_)));
    }

    #[test]
    fn session_errors_unwrap_the_game_error() {
        let e: CliError = SessionError::Game(GameError::InvalidSetup("x".into())).into();
        assert!(matches!(e, CliError::InvalidInput(_)));
        let e: CliError = SessionError::EnginePoisoned.into();
        assert!(matches!(e, CliError::Engine(_)));
    }

    #[test]
    fn io_errors_keep_their_source() {
        use std::error::Error;
        let e: CliError = std::io::Error::other("pipe closed").into();
        assert!(e.source().is_some());
    }
}
