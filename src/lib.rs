pub mod display;
pub mod engine;
pub mod error;
pub mod games;
pub mod input;
pub mod logging;
pub mod pools;
pub mod terminal;

pub use error::{GameError, Result};
