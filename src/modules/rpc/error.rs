use thiserror::Error;

/// Failure signals of the remote procedure layer.
///
/// Callers treat every variant as "the call did not succeed"; the distinction
/// only matters for logging and for the 404 → `NotFound` mapping.
#[derive(Debug, Error)]
pub enum RpcError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Procedure failed with HTTP {status}: {message}")]
    Status {
        status: u16,
        code: Option<String>,
        message: String,
    },

    #[error("Failed to decode procedure response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for RpcError {
    fn from(err: reqwest::Error) -> Self {
        RpcError::Transport(err.to_string())
    }
}
