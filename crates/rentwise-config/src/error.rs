use thiserror::Error;

/// Startup-time configuration failure.
///
/// These are never produced while serving requests; `main` reports them
/// and exits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0} environment variable is not defined")]
    Missing(&'static str),

    #[error("{name} has an invalid value: {reason}")]
    Invalid { name: &'static str, reason: String },
}
