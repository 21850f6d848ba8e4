use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use reqwest::Error as REQWEST_ERROR;
use serde_json::Error as JSON_ERROR;
use std::io::Error as IO_ERROR;
use thiserror::Error;
use tokio::task::JoinError;
use tracing::subscriber::SetGlobalDefaultError as TRACING_GLOBAL_DEFAULT_ERROR;
use url::ParseError as URL_ERROR;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Io(#[from] IO_ERROR),

    #[error("{0}")]
    URL(#[from] URL_ERROR),

    #[error("{0}")]
    JsonError(#[from] JSON_ERROR),

    #[error("{0}")]
    ReqwestError(#[from] REQWEST_ERROR),

    #[error("{0}")]
    TokioJoinError(#[from] JoinError),

    #[error("Tracing error: {0}")]
    SetGlobalDefaultError(#[from] TRACING_GLOBAL_DEFAULT_ERROR),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// The remote source could not be reached or refused the session.
    #[error("Connection error: {0}")]
    Connection(String),

    /// A single remote call failed after a session was established.
    #[error("Query {method} failed: {reason}")]
    Query { method: String, reason: String },

    /// A remote call ran past the configured timeout.
    #[error("Request {0} timed out")]
    Timeout(String),

    #[error("Not connected to canister")]
    NotConnected,

    /// A state-changing call failed.
    #[error("Action error: {0}")]
    Action(String),

    #[error("Server end with error: {0}")]
    ServerError(String),
}

impl Error {
    pub fn query(method: &str, reason: impl ToString) -> Self {
        Error::Query {
            method: method.to_owned(),
            reason: reason.to_string(),
        }
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::NotConnected => StatusCode::CONFLICT,

            Error::Connection(_)
            | Error::Query { .. }
            | Error::Action(_)
            | Error::ReqwestError(_) => StatusCode::BAD_GATEWAY,

            Error::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,

            Error::JsonError(_) => StatusCode::BAD_REQUEST,

            Error::Io(_)
            | Error::URL(_)
            | Error::TokioJoinError(_)
            | Error::SetGlobalDefaultError(_)
            | Error::ConfigurationError(_)
            | Error::ServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": self.to_string(),
        }))
    }
}
