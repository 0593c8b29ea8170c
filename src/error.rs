//! Errors surfaced by the chat endpoint and their HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use log::error;
use thiserror::Error;

use crate::models::chat::ErrorBody;

pub const MISSING_MESSAGE: &str = "Message content is required.";
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred.";
pub const MESSAGE_TOO_LARGE: &str = "Message content is too large.";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChatError {
    #[error("{}", MISSING_MESSAGE)]
    MissingMessage,

    #[error("{}", MESSAGE_TOO_LARGE)]
    TooLarge,

    /// The detail is logged but never sent to the client.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ChatError {
    pub fn status(&self) -> StatusCode {
        match self {
            ChatError::MissingMessage => StatusCode::BAD_REQUEST,
            ChatError::TooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ChatError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn public_message(&self) -> &'static str {
        match self {
            ChatError::MissingMessage => MISSING_MESSAGE,
            ChatError::TooLarge => MESSAGE_TOO_LARGE,
            ChatError::Internal(_) => UNEXPECTED_ERROR,
        }
    }
}

impl IntoResponse for ChatError {
    fn into_response(self) -> Response {
        if let ChatError::Internal(detail) = &self {
            error!("Chat request failed: {}", detail);
        }
        let body = Json(ErrorBody {
            error: self.public_message().to_string(),
        });
        (self.status(), body).into_response()
    }
}
