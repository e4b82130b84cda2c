//! CLI error types.

use postie_config::ConfigError;
use postie_oschina::OschinaError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Oschina(#[from] OschinaError),

    #[error("{0}")]
    Validation(String),
}
