use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GameError>;

#[derive(Debug, Error)]
pub enum GameError
{
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),

    #[error("Unknown command '{0}'. Run with --help.")]
    UnknownCommand(String),

    #[error("Unknown {game} option '{option}'")]
    UnknownOption {
        game: &'static str,
        option: String,
    },

    #[error("Invalid value for {option}: {reason}")]
    InvalidValue {
        option: &'static str,
        reason: String,
    },

    #[error("Player count must be between 1 and {max}, got {count}")]
    PlayerCount {
        count: usize,
        max: usize,
    },

    #[error("Item pool '{0}' is empty")]
    EmptyPool(&'static str),

    #[error("Item pool '{pool}' lists '{label}' more than once")]
    DuplicateLabel {
        pool: &'static str,
        label: &'static str,
    },

    #[error("No player at position {0}")]
    UnknownPlayer(usize),

    #[error("Failed to open log file {path}: {source}")]
    LogFile {
        path: String,
        source: io::Error,
    },

    #[error("Invalid selection '{0}'")]
    InvalidSelection(String),
}
