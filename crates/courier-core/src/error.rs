use thiserror::Error;

/// Errors shared across the Courier binaries.
///
/// Anything surfacing here before scheduling starts is fatal: the binaries
/// return it from `main` and exit non-zero. Transient runtime failures
/// (send errors, download errors) never reach this type; the adapters log
/// and swallow them so the loops keep running.
#[derive(Debug, Error)]
pub enum CourierError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CourierError>;
