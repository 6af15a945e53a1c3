//! Client request utilities
//!
//! Common functions for reading the credential and content-type headers
//! every write request must carry.

use axum::http::{HeaderMap, header};

/// Default header carrying the user's credential token
pub const USER_TOKEN_HEADER: &str = "x-user-token";

/// Extract the credential token from request headers
///
/// ## Arguments
/// * `headers` - HTTP request headers
/// * `header_name` - Name of the token header (case-insensitive)
///
/// ## Returns
/// The header value as sent, or `None` when the header is absent or not
/// valid visible ASCII. Validation of the value is left to the caller.
pub fn extract_token<'a>(headers: &'a HeaderMap, header_name: &str) -> Option<&'a str> {
    headers.get(header_name).and_then(|v| v.to_str().ok())
}

/// Extract the media type (without parameters) from the Content-Type header
///
/// `application/json; charset=utf-8` yields `application/json`.
pub fn extract_media_type(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(str::trim)
        .filter(|media_type| !media_type.is_empty())
}

/// Check that the request declares the expected media type
///
/// Comparison is case-insensitive, parameters are ignored.
pub fn has_media_type(headers: &HeaderMap, expected: &str) -> bool {
    extract_media_type(headers).is_some_and(|media_type| media_type.eq_ignore_ascii_case(expected))
}
