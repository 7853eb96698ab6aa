//! Error type definitions.
//!
//! This module defines the typed errors of each layer and the failure kinds
//! counted while fetching personal bests.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use reqwest::StatusCode;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Failure of a single person-feed lookup.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request could not be sent or the body could not be read.
    #[error("request failed: {0}")]
    Request(#[from] ReqwestError),

    /// The feed has no record for this person.
    #[error("person not found in feed")]
    NotFound,

    /// The feed answered with a non-success status.
    #[error("unexpected status {0}")]
    Status(StatusCode),

    /// The body was not a person record.
    #[error("invalid person record: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// Maps the error onto the counter it is tracked under.
    pub fn kind(&self) -> FailureKind {
        match self {
            FetchError::Request(e) => super::categorize_reqwest_error(e),
            FetchError::NotFound => FailureKind::NotFound,
            FetchError::Status(status) if status.is_server_error() => FailureKind::ServerError,
            FetchError::Status(_) => FailureKind::OtherStatus,
            FetchError::Decode(_) => FailureKind::Decode,
        }
    }
}

/// Error forwarding a request through the proxy.
#[derive(Error, Debug)]
pub enum ProxyError {
    /// The upstream could not be reached or the exchange broke off.
    #[error("upstream request failed: {0}")]
    Upstream(#[from] ReqwestError),

    /// The incoming request body could not be read.
    #[error("failed to read request body: {0}")]
    Body(#[from] axum::Error),
}

/// Categories of person-feed failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum FailureKind {
    Timeout,
    Connect,
    NotFound,
    ServerError,
    OtherStatus,
    Decode,
    Other,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Timeout => "timeout",
            FailureKind::Connect => "connect error",
            FailureKind::NotFound => "person not found",
            FailureKind::ServerError => "server error",
            FailureKind::OtherStatus => "unexpected status",
            FailureKind::Decode => "invalid record",
            FailureKind::Other => "other error",
        }
    }
}
