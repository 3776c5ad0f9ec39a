use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
};
use chrono::Utc;
use std::collections::HashMap;

use crate::dto::error_dto::ErrorResponse;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Last line of defense before the transport layer: every error raised by
/// the lower layers is classified here, exactly once, into an
/// [`ErrorResponse`] body. Nothing below this formats HTTP responses.
impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        tracing::error!(error = %self, "Request failed");

        let (status, message, details, errors) = match self {
            Error::NotFound(msg) => (StatusCode::NOT_FOUND, msg, None, None),
            Error::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None, None),
            Error::Validation(err) => (
                StatusCode::BAD_REQUEST,
                "One or more validation errors occurred".to_string(),
                None,
                Some(field_errors(&err)),
            ),
            Error::Database(err) => (
                StatusCode::BAD_REQUEST,
                "Database error occurred".to_string(),
                std::error::Error::source(&err).map(|cause| cause.to_string()),
                None,
            ),
            other => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An error occurred while processing your request".to_string(),
                crate::config::is_development().then(|| format!("{:?}", other)),
                None,
            ),
        };

        let body = ErrorResponse {
            message,
            details,
            status_code: status.as_u16(),
            timestamp: Utc::now(),
            errors,
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Error::NotFound("Resource not found".to_string()),
            other => Error::Database(other),
        }
    }
}

fn field_errors(errors: &validator::ValidationErrors) -> HashMap<String, Vec<String>> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            (to_camel_case(field), messages)
        })
        .collect()
}

// Wire field names are lowerCamelCase; validator reports rust field names.
fn to_camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for ch in field.chars() {
        if ch == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}
