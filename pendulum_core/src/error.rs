use thiserror::Error;

/// Errors raised while setting up a pendulum.
#[derive(Error, Debug)]
pub enum PendulumError {
    /// Parameters that would produce a non-real apex height or a degenerate step.
    #[error("config error: {0}")]
    Config(String),

    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("config read error: {0}")]
    Io(#[from] std::io::Error),
}

pub type PendulumResult<T> = Result<T, PendulumError>;
