//! Shared HTTP response helpers for the wire modules.
//!
//! Centralizes status-code checks so the wire modules stay focused on query
//! construction and payload mapping. Unlike a generic client, 404 here is a
//! domain outcome — "this record does not exist" — so it gets its own error
//! variant that single-entity lookups translate to `None`.

use crate::error::ApiError;

/// Check an HTTP response for error statuses.
///
/// Returns the response unchanged on success. Handles:
/// - **404 Not Found** → [`ApiError::NotFound`].
/// - **Any other non-success status** → [`ApiError::Api`] with status code
///   and response body.
pub async fn ensure_success(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    if resp.status() == reqwest::StatusCode::NOT_FOUND {
        return Err(ApiError::NotFound);
    }
    if !resp.status().is_success() {
        return Err(ApiError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn success_passes_through() {
        let resp = mock_response(200, "{}");
        assert!(ensure_success(resp).await.is_ok());
    }

    #[tokio::test]
    async fn created_passes_through() {
        let resp = mock_response(201, "{}");
        assert!(ensure_success(resp).await.is_ok());
    }

    #[tokio::test]
    async fn not_found_maps_to_domain_variant() {
        let resp = mock_response(404, r#"{"detail":"Not found."}"#);
        let err = ensure_success(resp).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[tokio::test]
    async fn server_error_carries_status_and_body() {
        let resp = mock_response(500, "boom");
        let err = ensure_success(resp).await.unwrap_err();
        match err {
            ApiError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
