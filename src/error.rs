//! Error types for engine configuration

use thiserror::Error;

/// Configuration errors, surfaced at construction time.
///
/// These are fatal: the caller picked an unsupported setup and there is
/// nothing to retry.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Board size other than the two supported variants
    #[error("unsupported board size: {0} (expected 3 or 5)")]
    UnsupportedSize(usize),
}
