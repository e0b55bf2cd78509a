//! Response status handling for the feed client.

use crate::error::PresetError;

/// Return the response unchanged on success, else [`PresetError::Api`] with
/// the status code and body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, PresetError> {
    if !resp.status().is_success() {
        return Err(PresetError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, body: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body.to_string())
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn server_error_carries_body() {
        let err = check_response(mock_response(503, "down"))
            .await
            .unwrap_err();
        assert!(matches!(err, PresetError::Api { status: 503, ref message } if message == "down"));
    }

    #[tokio::test]
    async fn not_found_is_api_error() {
        let err = check_response(mock_response(404, "")).await.unwrap_err();
        assert!(matches!(err, PresetError::Api { status: 404, .. }));
    }

    #[tokio::test]
    async fn success_passes_through() {
        let resp = check_response(mock_response(200, "[]")).await.unwrap();
        assert_eq!(resp.text().await.unwrap(), "[]");
    }
}
