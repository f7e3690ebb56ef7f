use crate::event::GatewayResponse;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("Database connection not configured")]
    NotConfigured,

    #[error("Missing id parameter")]
    MissingId,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Column {0} holds a value that does not fit into a float")]
    Conversion(&'static str),
}

impl HandlerError {
    pub fn status_code(&self) -> u16 {
        match self {
            HandlerError::NotConfigured => 500,
            HandlerError::MissingId => 400,
            HandlerError::InvalidInput(_) => 400,
            HandlerError::MethodNotAllowed => 405,
            HandlerError::Database(_) => 500,
            HandlerError::Conversion(_) => 500,
        }
    }

    /// Message exposed to the caller. Causes of internal failures stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            HandlerError::Database(_) | HandlerError::Conversion(_) => {
                String::from("Internal server error")
            }
            other => other.to_string(),
        }
    }

    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            HandlerError::Database(_) | HandlerError::Conversion(_)
        )
    }
}

impl From<HandlerError> for GatewayResponse {
    fn from(error: HandlerError) -> Self {
        GatewayResponse::json(
            error.status_code(),
            json!({ "error": error.public_message() }),
        )
    }
}
