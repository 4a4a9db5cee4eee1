// errors.rs
use astra::Response;

/// Errors surfaced by the HTTP layer. Ranking and catalog failures never
/// reach here; they are logged and swallowed where they happen.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Internal Server Error")]
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::InternalError => 500,
        }
    }
}

impl From<serde_json::Error> for ServerError {
    fn from(e: serde_json::Error) -> Self {
        ServerError::BadRequest(format!("invalid JSON body: {e}"))
    }
}

impl From<crate::app::BoardError> for ServerError {
    fn from(e: crate::app::BoardError) -> Self {
        tracing::debug!(error = %e, "board operation rejected");
        ServerError::NotFound
    }
}
