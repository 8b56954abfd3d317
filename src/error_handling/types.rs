//! Error type definitions.
//!
//! This module defines the error types used throughout the application and the
//! categories used to count transport failures during a bulk run.

use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error")]
    HttpClientError(#[from] ReqwestError),
}

/// Failure to load the domain list.
#[derive(Error, Debug)]
pub enum InputError {
    /// The input file does not exist.
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The input file exists but could not be read.
    #[error("Failed to read {}", path.display())]
    Read {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },
}

/// Failure to obtain a usable response from the evaluation service.
///
/// Wrapping variants keep the underlying error as `source()` rather than
/// repeating it in their own message; use `error_chain` for the full text.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Timeout, connection failure or non-2xx status.
    #[error(transparent)]
    Transport(#[from] ReqwestError),

    /// The response body is not valid JSON.
    #[error("Invalid JSON response")]
    InvalidJson(#[source] serde_json::Error),

    /// The response body is valid JSON but not shaped like a check result.
    #[error("Unexpected response shape: {0}")]
    UnexpectedShape(String),
}

/// A field required for rendering is absent (or has the wrong type) in the
/// service response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("missing field '{field}'")]
pub struct ResponseShapeError {
    /// Dotted path of the field, e.g. `spf.status`
    pub field: String,
}

impl ResponseShapeError {
    /// Creates an error for the given dotted field path.
    pub fn missing(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }
}

/// Failure while writing a report file.
#[derive(Error, Debug)]
pub enum ReportError {
    /// I/O failure creating or writing the file.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// CSV serialization failure.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// JSON serialization failure.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// A result lacks a field the report needs.
    #[error("Unexpected API response format")]
    Shape(#[from] ResponseShapeError),
}

/// Formats an error and all of its sources, joined by `": "`.
pub fn error_chain(error: &dyn std::error::Error) -> String {
    let mut text = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        text.push_str(": ");
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    text
}

/// Categories of per-domain failures counted during a bulk run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    // HTTP/Network errors
    HttpRequestBuilderError,
    HttpRequestRedirectError,
    HttpRequestStatusError,
    HttpRequestTimeoutError,
    HttpRequestRequestError,
    HttpRequestConnectError,
    HttpRequestBodyError,
    HttpRequestDecodeError,
    HttpRequestOtherError,
    HttpRequestTooManyRequests,
    // Specific HTTP status codes
    HttpRequestBadRequest,          // 400
    HttpRequestUnauthorized,        // 401
    HttpRequestForbidden,           // 403
    HttpRequestNotFound,            // 404
    HttpRequestInternalServerError, // 500
    HttpRequestBadGateway,          // 502
    HttpRequestServiceUnavailable,  // 503
    HttpRequestGatewayTimeout,      // 504
    // Response body errors
    InvalidJsonResponse,
    UnexpectedResponseShape,
    // Error reported by the service in a 2xx body
    ServiceReportedError,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::HttpRequestBuilderError => "HTTP request builder error",
            ErrorType::HttpRequestRedirectError => "HTTP request redirect error",
            ErrorType::HttpRequestStatusError => "HTTP request status error",
            ErrorType::HttpRequestTimeoutError => "HTTP request timeout error",
            ErrorType::HttpRequestRequestError => "HTTP request error",
            ErrorType::HttpRequestConnectError => "HTTP request connect error",
            ErrorType::HttpRequestBodyError => "HTTP request body error",
            ErrorType::HttpRequestDecodeError => "HTTP request decode error",
            ErrorType::HttpRequestOtherError => "HTTP request other error",
            ErrorType::HttpRequestTooManyRequests => "Too many requests (429)",
            ErrorType::HttpRequestBadRequest => "Bad Request (400)",
            ErrorType::HttpRequestUnauthorized => "Unauthorized (401)",
            ErrorType::HttpRequestForbidden => "Forbidden (403)",
            ErrorType::HttpRequestNotFound => "Not Found (404)",
            ErrorType::HttpRequestInternalServerError => "Internal Server Error (500)",
            ErrorType::HttpRequestBadGateway => "Bad Gateway (502)",
            ErrorType::HttpRequestServiceUnavailable => "Service Unavailable (503)",
            ErrorType::HttpRequestGatewayTimeout => "Gateway Timeout (504)",
            ErrorType::InvalidJsonResponse => "Invalid JSON response",
            ErrorType::UnexpectedResponseShape => "Unexpected response shape",
            ErrorType::ServiceReportedError => "Error reported by service",
        }
    }
}
