//! Error categorization.
//!
//! Maps transport and decoding failures onto `ErrorType` buckets for the bulk
//! run statistics.

use reqwest::StatusCode;

use super::types::{ApiError, ErrorType};

/// Categorizes a `reqwest::Error` into an `ErrorType`.
///
/// A response status takes precedence over the error kind, so a 503 is
/// counted as such rather than as a generic status error.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> ErrorType {
    if let Some(kind) = error.status().and_then(categorize_status) {
        return kind;
    }

    let kinds: [(fn(&reqwest::Error) -> bool, ErrorType); 8] = [
        (reqwest::Error::is_builder, ErrorType::HttpRequestBuilderError),
        (reqwest::Error::is_redirect, ErrorType::HttpRequestRedirectError),
        (reqwest::Error::is_status, ErrorType::HttpRequestStatusError),
        (reqwest::Error::is_timeout, ErrorType::HttpRequestTimeoutError),
        (reqwest::Error::is_connect, ErrorType::HttpRequestConnectError),
        (reqwest::Error::is_request, ErrorType::HttpRequestRequestError),
        (reqwest::Error::is_body, ErrorType::HttpRequestBodyError),
        (reqwest::Error::is_decode, ErrorType::HttpRequestDecodeError),
    ];
    kinds
        .iter()
        .find(|(applies, _)| applies(error))
        .map_or(ErrorType::HttpRequestOtherError, |(_, kind)| *kind)
}

fn categorize_status(status: StatusCode) -> Option<ErrorType> {
    let kind = match status {
        StatusCode::BAD_REQUEST => ErrorType::HttpRequestBadRequest,
        StatusCode::UNAUTHORIZED => ErrorType::HttpRequestUnauthorized,
        StatusCode::FORBIDDEN => ErrorType::HttpRequestForbidden,
        StatusCode::NOT_FOUND => ErrorType::HttpRequestNotFound,
        StatusCode::TOO_MANY_REQUESTS => ErrorType::HttpRequestTooManyRequests,
        StatusCode::INTERNAL_SERVER_ERROR => ErrorType::HttpRequestInternalServerError,
        StatusCode::BAD_GATEWAY => ErrorType::HttpRequestBadGateway,
        StatusCode::SERVICE_UNAVAILABLE => ErrorType::HttpRequestServiceUnavailable,
        StatusCode::GATEWAY_TIMEOUT => ErrorType::HttpRequestGatewayTimeout,
        s if s.is_client_error() || s.is_server_error() => ErrorType::HttpRequestStatusError,
        _ => return None,
    };
    Some(kind)
}

/// Categorizes any failure of the API caller.
pub fn categorize_api_error(error: &ApiError) -> ErrorType {
    match error {
        ApiError::Transport(e) => categorize_reqwest_error(e),
        ApiError::InvalidJson(_) => ErrorType::InvalidJsonResponse,
        ApiError::UnexpectedShape(_) => ErrorType::UnexpectedResponseShape,
    }
}
