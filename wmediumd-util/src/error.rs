/// The error kinds shared across the daemon.
///
/// `ConfigError` and `DriverUnavailable` are fatal at startup. `CodecError`
/// and `SendError` are per-message: the caller logs and moves on to the
/// next frame rather than propagating them further.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid topology configuration: {0}")]
    Config(String),

    #[error("driver channel unavailable: {0}")]
    DriverUnavailable(String),

    #[error("malformed driver message: {0}")]
    Codec(String),

    #[error("failed to send message to driver: {0}")]
    Send(String),
}

pub type Result<T> = std::result::Result<T, Error>;
