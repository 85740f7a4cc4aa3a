//! Error types for bubblekit.
//!
//! The sizing core itself has no failure path: degenerate widths clamp to
//! zero and cache misses are the normal first-sizing path. Errors only exist
//! at the edges of the crate, where configuration, logging and input files
//! are read. They compose via `From` so the CLI can use `?` throughout.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error for the `bubblekit` binary
//!   - [`ConfigError`] - Config file reading and parsing
//!   - [`LoggingError`] - Tracing subscriber initialization
//!   - [`InputError`] - Reading the chat item file or stdin
//!   - [`RendezvousError`] - Primary-thread queue gone

use std::path::PathBuf;
use thiserror::Error;

pub use super::view_model::InvalidProgress;
pub use crate::config::ConfigError;
pub use crate::logging::LoggingError;
pub use crate::sizing::rendezvous::RendezvousError;

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Logging could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Input could not be read.
    #[error("Failed to read input: {0}")]
    Input(#[from] InputError),

    /// A measurement could not be marshalled onto the primary thread.
    #[error("Sizing error: {0}")]
    Rendezvous(#[from] RendezvousError),

    /// Writing results failed.
    #[error("Output error: {0}")]
    Output(#[source] std::io::Error),
}

/// Errors encountered when reading chat items.
///
/// `Parse` is non-fatal for a sizing run: the offending line is reported
/// and skipped, the remaining items are still sized.
#[derive(Debug, Error)]
pub enum InputError {
    /// The input file does not exist.
    #[error("File not found: {path}")]
    FileNotFound {
        /// Path that was attempted.
        path: PathBuf,
    },

    /// A line is not a valid chat item.
    #[error("Invalid chat item at line {line}: {reason}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// Parser message.
        reason: String,
    },

    /// Generic I/O failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
