//! Error types for the blog data layer.
//!
//! `ClientError` is the only failure the facade surfaces: whatever the client
//! (SeaORM or mock) reports is handed to the caller unchanged. Its `Display`
//! is the underlying message, verbatim.

use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The requested record does not exist.
    #[error("{0}")]
    NotFound(String),
    /// A unique constraint rejected the write.
    #[error("{0}")]
    Conflict(String),
    /// Any other query or execution failure.
    #[error("{0}")]
    Query(String),
    /// The connection could not be acquired or was lost.
    #[error("{0}")]
    Connection(String),
    /// A mocked method was called without any configured resolution.
    #[error("{method} was called without a configured resolution")]
    Unconfigured { method: &'static str },
}

impl ClientError {
    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::NotFound(detail.into())
    }

    pub fn conflict(detail: impl Into<String>) -> Self {
        Self::Conflict(detail.into())
    }

    pub fn query(detail: impl Into<String>) -> Self {
        Self::Query(detail.into())
    }

    pub fn connection(detail: impl Into<String>) -> Self {
        Self::Connection(detail.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

fn mentions_sqlstate(msg: &str, code: &str) -> bool {
    msg.contains(code) || msg.contains(&format!("SQLSTATE({code})"))
}

/// Translate a `DbErr` into a `ClientError`, keeping the driver's message.
pub fn map_db_err(e: sea_orm::DbErr) -> ClientError {
    let error_msg = e.to_string();

    match &e {
        sea_orm::DbErr::RecordNotFound(msg) => {
            debug!(detail = %msg, "Record not found");
            return ClientError::NotFound(msg.clone());
        }
        sea_orm::DbErr::RecordNotUpdated => {
            debug!("Update matched no rows");
            return ClientError::NotFound("Record to update not found.".to_string());
        }
        sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => {
            warn!(raw_error = %error_msg, "Database unavailable");
            return ClientError::Connection(error_msg);
        }
        _ => {}
    }

    if mentions_sqlstate(&error_msg, "23505")
        || error_msg.contains("duplicate key value violates unique constraint")
        || error_msg.contains("UNIQUE constraint failed")
    {
        warn!(raw_error = %error_msg, "Unique constraint violation");
        return ClientError::Conflict(error_msg);
    }

    warn!(raw_error = %error_msg, "Database query failed");
    ClientError::Query(error_msg)
}

impl From<sea_orm::DbErr> for ClientError {
    fn from(e: sea_orm::DbErr) -> Self {
        map_db_err(e)
    }
}

/// Failures while configuring or opening the database.
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("Configuration error: {message}")]
    Config { message: String },
    #[error("Database error: {0}")]
    Db(#[from] sea_orm::DbErr),
}

impl InfraError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
