//! Remote asset loader.

use serde_json::Value;
use url::Url;

use super::error::{AssetError, DecodeError, FetchError};
use super::payload::AssetPayload;
use crate::http_client::HttpClient;
use crate::notice::Notices;

/// Fetch and parse the JSON document at `url` with a single GET.
///
/// Non-2xx statuses and transport failures are `FetchError`s. A 2xx body
/// that is not JSON is a `DecodeError`.
pub async fn load_asset(client: &HttpClient, url: &str) -> Result<AssetPayload, AssetError> {
    let parsed = Url::parse(url).map_err(|source| FetchError::InvalidUrl {
        url: url.to_string(),
        source,
    })?;

    let response = client
        .get(parsed.as_str())
        .await
        .map_err(|source| FetchError::Network {
            url: url.to_string(),
            source,
        })?;

    if !response.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: response.status,
        }
        .into());
    }

    let body = response
        .bytes()
        .await
        .map_err(|source| FetchError::Network {
            url: url.to_string(),
            source,
        })?;

    let value: Value = serde_json::from_slice(&body).map_err(|source| DecodeError {
        url: url.to_string(),
        source,
    })?;

    let payload = AssetPayload::new(value);
    tracing::debug!(
        url,
        kind = payload.kind().as_str(),
        bytes = body.len(),
        "asset loaded"
    );
    Ok(payload)
}

/// Load the asset, degrading to `None` on any failure.
///
/// A failure is logged and recorded as exactly one error notice.
pub async fn fetch_asset(
    client: &HttpClient,
    url: &str,
    notices: &mut Notices,
) -> Option<AssetPayload> {
    match load_asset(client, url).await {
        Ok(payload) => Some(payload),
        Err(e) => {
            tracing::error!(url, error = %e, "failed to load asset");
            notices.error(format!("Failed to load Lottie URL: {}", e));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use axum::http::{header, StatusCode};
    use axum::routing::get;
    use axum::Router;
    use serde_json::json;

    async fn stub_server(status: StatusCode, body: &'static str) -> String {
        let app = Router::new().route(
            "/anim.json",
            get(move || async move { (status, [(header::CONTENT_TYPE, "application/json")], body) }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}/anim.json", addr)
    }

    async fn unreachable_url() -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{}/anim.json", addr)
    }

    fn client() -> HttpClient {
        HttpClient::new(Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_load_asset_ok() {
        let url = stub_server(StatusCode::OK, r#"{"v":"1","layers":[1,2,3]}"#).await;

        let payload = load_asset(&client(), &url).await.unwrap();
        assert_eq!(payload.value(), &json!({"v": "1", "layers": [1, 2, 3]}));
    }

    #[tokio::test]
    async fn test_load_asset_accepts_any_json_shape() {
        let url = stub_server(StatusCode::OK, "[null, true]").await;

        let payload = load_asset(&client(), &url).await.unwrap();
        assert_eq!(payload.into_value(), json!([null, true]));
    }

    #[tokio::test]
    async fn test_load_asset_non_success_status() {
        for status in [
            StatusCode::NOT_FOUND,
            StatusCode::INTERNAL_SERVER_ERROR,
            StatusCode::SERVICE_UNAVAILABLE,
        ] {
            let url = stub_server(status, r#"{"error":"nope"}"#).await;

            match load_asset(&client(), &url).await {
                Err(AssetError::Fetch(e)) => {
                    assert_eq!(e.status(), Some(status));
                    assert!(e.to_string().contains(status.as_str()));
                }
                other => panic!("expected fetch error, got {:?}", other),
            }
        }
    }

    #[tokio::test]
    async fn test_load_asset_connection_refused() {
        let url = unreachable_url().await;

        match load_asset(&client(), &url).await {
            Err(AssetError::Fetch(FetchError::Network { .. })) => {}
            other => panic!("expected network error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_load_asset_invalid_url() {
        match load_asset(&client(), "not a url").await {
            Err(AssetError::Fetch(FetchError::InvalidUrl { .. })) => {}
            other => panic!("expected invalid url, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_load_asset_malformed_json_is_decode_error() {
        let url = stub_server(StatusCode::OK, "{not json").await;

        match load_asset(&client(), &url).await {
            Err(AssetError::Decode(e)) => assert_eq!(e.url, url),
            other => panic!("expected decode error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_load_asset_timeout() {
        let app = Router::new().route(
            "/slow.json",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                "{}"
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let client = HttpClient::new(Duration::from_millis(200)).unwrap();
        let url = format!("http://{}/slow.json", addr);

        match load_asset(&client, &url).await {
            Err(AssetError::Fetch(e)) => assert!(e.is_timeout()),
            other => panic!("expected timeout, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_asset_records_one_notice_on_status() {
        for status in [
            StatusCode::NOT_FOUND,
            StatusCode::INTERNAL_SERVER_ERROR,
            StatusCode::SERVICE_UNAVAILABLE,
        ] {
            let url = stub_server(status, "").await;
            let mut notices = Notices::new();

            let payload = fetch_asset(&client(), &url, &mut notices).await;

            assert!(payload.is_none(), "{} should not yield a payload", status);
            assert_eq!(notices.len(), 1, "{} should record one notice", status);
            let notice = notices.iter().next().unwrap();
            assert!(notice.message.contains(status.as_str()));
            assert!(notice.message.starts_with("Failed to load Lottie URL"));
        }
    }

    #[tokio::test]
    async fn test_fetch_asset_unreachable_degrades() {
        let url = unreachable_url().await;
        let mut notices = Notices::new();

        let payload = fetch_asset(&client(), &url, &mut notices).await;

        assert!(payload.is_none());
        assert_eq!(notices.errors().count(), 1);
    }

    #[tokio::test]
    async fn test_fetch_asset_success_leaves_no_notice() {
        let url = stub_server(StatusCode::OK, r#"{"v":"1"}"#).await;
        let mut notices = Notices::new();

        let payload = fetch_asset(&client(), &url, &mut notices).await;

        assert_eq!(payload.unwrap().value(), &json!({"v": "1"}));
        assert!(notices.is_empty());
    }
}
