use crate::error::{GameError, Result};
use std::env;
use std::fs::File;
use std::sync::Mutex;
use tracing::Level;

// Unset means no logging; the screens own the terminal.
pub const LOG_ENV: &str = "CAR_GAMES_LOG";

pub fn init() -> Result<bool>
{
    let Some(path) = env::var_os(LOG_ENV) else {
        return Ok(false);
    };
    let file = File::create(&path).map_err(|source| GameError::LogFile {
        path: path.to_string_lossy().into_owned(),
        source,
    })?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(Level::DEBUG)
        .init();
    Ok(true)
}
