//! Classification of raw Spotify responses.

use reqwest::StatusCode;
use serde_json::Value;

use crate::error::{Result, SpotifyError};

/// Outcome of a successfully classified response.
#[derive(Debug)]
pub(crate) enum ClassifiedResponse {
    /// HTTP 204: nothing to decode. Callers treat this as a valid
    /// "no current state" signal, not an error.
    Empty,
    /// A JSON body ready for the typed decoder.
    Body(String),
}

/// Map final HTTP status, content type and body to an outcome.
pub(crate) fn classify(
    status: StatusCode,
    content_type: &str,
    path: &str,
    body: String,
) -> Result<ClassifiedResponse> {
    if status == StatusCode::NO_CONTENT {
        return Ok(ClassifiedResponse::Empty);
    }

    match status.as_u16() {
        401 | 403 => {
            return Err(SpotifyError::AuthenticationFailed(body));
        }
        404 => {
            return Err(SpotifyError::NotFound {
                path: path.to_string(),
            });
        }
        429 => {
            return Err(SpotifyError::RateLimited);
        }
        _ => {}
    }

    if !status.is_success() {
        return Err(SpotifyError::Api {
            status: status.as_u16(),
            message: body,
        });
    }

    if !content_type.contains("application/json") {
        return Err(SpotifyError::Malformed {
            content_type: content_type.to_string(),
            body,
        });
    }

    // Spotify sometimes reports a 404 inside a 200 body.
    if has_embedded_not_found(&body) {
        return Err(SpotifyError::NotFound {
            path: path.to_string(),
        });
    }

    Ok(ClassifiedResponse::Body(body))
}

/// Best-effort detection of an error envelope carrying status 404 in an
/// otherwise successful response. A cheap substring check gates the parse so
/// ordinary payloads are not parsed twice.
fn has_embedded_not_found(body: &str) -> bool {
    if !body.contains("\"status\"") {
        return false;
    }
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return false;
    };
    let status = value
        .get("error")
        .and_then(|e| e.get("status"))
        .or_else(|| value.get("status"));
    status.and_then(Value::as_u64) == Some(404)
}

#[cfg(test)]
mod tests {
    use super::*;

    const JSON: &str = "application/json; charset=utf-8";

    #[test]
    fn no_content_is_empty() {
        let result = classify(StatusCode::NO_CONTENT, "", "v1/me/player", String::new());
        assert!(matches!(result, Ok(ClassifiedResponse::Empty)));
    }

    #[test]
    fn success_with_json_body_passes_through() {
        let result = classify(
            StatusCode::OK,
            JSON,
            "v1/me",
            r#"{"display_name": "x"}"#.to_string(),
        );
        match result {
            Ok(ClassifiedResponse::Body(body)) => assert!(body.contains("display_name")),
            other => panic!("expected body, got {other:?}"),
        }
    }

    #[test]
    fn non_json_content_type_is_malformed() {
        let result = classify(StatusCode::OK, "plain/text", "v1/me/player", "Yes".to_string());
        match result {
            Err(SpotifyError::Malformed { content_type, body }) => {
                assert_eq!(content_type, "plain/text");
                assert_eq!(body, "Yes");
            }
            other => panic!("expected malformed, got {other:?}"),
        }
    }

    #[test]
    fn embedded_404_in_200_body_is_not_found() {
        let body = r#"{"error": {"status": 404, "message": "Not found."}}"#.to_string();
        let result = classify(StatusCode::OK, JSON, "v1/albums/x", body);
        match result {
            Err(SpotifyError::NotFound { path }) => assert_eq!(path, "v1/albums/x"),
            other => panic!("expected not found, got {other:?}"),
        }
    }

    #[test]
    fn body_mentioning_status_elsewhere_is_not_a_miss() {
        let body = r#"{"name": "status", "status": 200}"#.to_string();
        assert!(matches!(
            classify(StatusCode::OK, JSON, "v1/x", body),
            Ok(ClassifiedResponse::Body(_))
        ));
    }

    #[test]
    fn http_404_is_not_found() {
        let result = classify(StatusCode::NOT_FOUND, JSON, "v1/albums/nope", String::new());
        assert!(matches!(result, Err(SpotifyError::NotFound { .. })));
    }

    #[test]
    fn unauthorized_is_authentication_failure() {
        for status in [StatusCode::UNAUTHORIZED, StatusCode::FORBIDDEN] {
            let result = classify(status, JSON, "v1/me", "bad token".to_string());
            assert!(matches!(result, Err(SpotifyError::AuthenticationFailed(_))));
        }
    }

    #[test]
    fn too_many_requests_is_rate_limited() {
        let result = classify(StatusCode::TOO_MANY_REQUESTS, JSON, "v1/me", String::new());
        assert!(matches!(result, Err(SpotifyError::RateLimited)));
    }

    #[test]
    fn other_statuses_are_api_errors() {
        let result = classify(
            StatusCode::INTERNAL_SERVER_ERROR,
            JSON,
            "v1/me",
            "boom".to_string(),
        );
        match result {
            Err(SpotifyError::Api { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("expected api error, got {other:?}"),
        }
    }
}
