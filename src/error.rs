use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// The request never produced a readable response.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Non-2xx response. `message` is the body's `error` field when one was present.
    #[error("HTTP {status}{}", .message.as_deref().map(|m| format!(": {}", m)).unwrap_or_default())]
    Status { status: u16, message: Option<String> },

    #[error("Decode error: {0}")]
    Decode(String),

    /// 2xx response that carried no image payload.
    #[error("No image in response{}", .message.as_deref().map(|m| format!(": {}", m)).unwrap_or_default())]
    MissingImage { message: Option<String> },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ClientError>;
