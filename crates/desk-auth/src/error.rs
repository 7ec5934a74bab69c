use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not authenticated, run `desk auth login`")]
    NotAuthenticated,

    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("auth request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("auth API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("token store error: {0}")]
    TokenStore(String),

    #[error("token decode error: {0}")]
    Decode(String),

    #[error("{0}")]
    Other(String),
}
