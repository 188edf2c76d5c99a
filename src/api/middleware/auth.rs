//! Static bearer-token middleware.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::api::AppState;
use crate::config::BEARER_SCHEME;
use crate::errors::{AppError, AuthFailure};

/// Check an `Authorization` header value against the configured token.
///
/// The header must be exactly two whitespace-separated parts: a scheme equal
/// to `Bearer` (any case) and the token itself.
pub fn verify_bearer(header: Option<&str>, expected: &str) -> Result<(), AuthFailure> {
    let header = header
        .filter(|h| !h.is_empty())
        .ok_or(AuthFailure::MissingHeader)?;

    let mut parts = header.split_whitespace();
    let (Some(scheme), Some(token), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(AuthFailure::MalformedHeader);
    };

    if !scheme.eq_ignore_ascii_case(BEARER_SCHEME) {
        return Err(AuthFailure::MalformedHeader);
    }

    if token != expected {
        return Err(AuthFailure::InvalidToken);
    }

    Ok(())
}

/// Bearer-token authentication middleware.
///
/// Runs before any handler; a rejected request never reaches the services.
pub async fn auth_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let header = match request.headers().get(AUTHORIZATION) {
        Some(value) => Some(value.to_str().map_err(|_| AuthFailure::MalformedHeader)?),
        None => None,
    };

    verify_bearer(header, state.auth_token())?;

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOKEN: &str = "s3cret";

    #[test]
    fn test_accepts_matching_token() {
        assert_eq!(verify_bearer(Some("Bearer s3cret"), TOKEN), Ok(()));
    }

    #[test]
    fn test_scheme_is_case_insensitive() {
        assert_eq!(verify_bearer(Some("bearer s3cret"), TOKEN), Ok(()));
        assert_eq!(verify_bearer(Some("BEARER   s3cret"), TOKEN), Ok(()));
    }

    #[test]
    fn test_missing_header() {
        assert_eq!(verify_bearer(None, TOKEN), Err(AuthFailure::MissingHeader));
        assert_eq!(verify_bearer(Some(""), TOKEN), Err(AuthFailure::MissingHeader));
    }

    #[test]
    fn test_malformed_header() {
        for header in ["s3cret", "Bearer", "Bearer s3cret extra", "Basic s3cret", "   "] {
            assert_eq!(
                verify_bearer(Some(header), TOKEN),
                Err(AuthFailure::MalformedHeader),
                "header {header:?}"
            );
        }
    }

    #[test]
    fn test_wrong_token() {
        assert_eq!(
            verify_bearer(Some("Bearer nope"), TOKEN),
            Err(AuthFailure::InvalidToken)
        );
        // Token comparison is exact
        assert_eq!(
            verify_bearer(Some("Bearer S3CRET"), TOKEN),
            Err(AuthFailure::InvalidToken)
        );
    }
}
