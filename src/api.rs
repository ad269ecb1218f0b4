//! Reddit API Client
//!
//! Read-only GETs against the public reddit JSON endpoints.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::models::{InfoResponse, PostsResponse};

/// Default public API host
pub const DEFAULT_API_BASE: &str = "https://www.reddit.com";

#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Request never produced a response
    Network(String),
    /// Response status outside 2xx
    Status(u16),
    /// Body was not the expected JSON shape
    Decode(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {}", msg),
            ApiError::Status(code) => write!(f, "HTTP status {}", code),
            ApiError::Decode(msg) => write!(f, "invalid response body: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

/// Source of subreddit listings
///
/// Futures are `?Send` so the wasm fetch backend can satisfy it.
#[async_trait(?Send)]
pub trait SubredditApi {
    /// Posts listing for a subreddit name
    async fn fetch_posts(&self, subreddit: &str) -> Result<PostsResponse, ApiError>;

    /// Subreddit metadata for an id taken from a posts listing
    async fn fetch_info(&self, subreddit_id: &str) -> Result<InfoResponse, ApiError>;
}

/// `SubredditApi` over HTTP
#[derive(Clone)]
pub struct RedditClient {
    http: reqwest::Client,
    api_base: String,
}

impl RedditClient {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self::with_http(reqwest::Client::new(), api_base)
    }

    pub fn with_http(http: reqwest::Client, api_base: impl Into<String>) -> Self {
        Self {
            http,
            api_base: api_base.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn posts_url(&self, subreddit: &str) -> String {
        format!("{}/r/{}.json", self.api_base, subreddit)
    }

    pub fn info_url(&self, subreddit_id: &str) -> String {
        format!("{}/api/info.json?id={}", self.api_base, subreddit_id)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        log::debug!("[API] GET {}", url);
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

impl Default for RedditClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

#[async_trait(?Send)]
impl SubredditApi for RedditClient {
    async fn fetch_posts(&self, subreddit: &str) -> Result<PostsResponse, ApiError> {
        self.get_json(&self.posts_url(subreddit)).await
    }

    async fn fetch_info(&self, subreddit_id: &str) -> Result<InfoResponse, ApiError> {
        self.get_json(&self.info_url(subreddit_id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve one canned HTTP response on a local port, return its base URL
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });

        format!("http://{}", addr)
    }

    /// Client that ignores proxy env vars so loopback requests stay local
    fn local_client(base: String) -> RedditClient {
        let http = reqwest::Client::builder().no_proxy().build().unwrap();
        RedditClient::with_http(http, base)
    }

    #[test]
    fn test_default_urls() {
        let client = RedditClient::default();
        assert_eq!(client.posts_url("funny"), "https://www.reddit.com/r/funny.json");
        assert_eq!(
            client.info_url("t5_2qh33"),
            "https://www.reddit.com/api/info.json?id=t5_2qh33"
        );
    }

    #[test]
    fn test_custom_base_trailing_slash() {
        let client = RedditClient::new("http://localhost:8080/");
        assert_eq!(client.posts_url("rust"), "http://localhost:8080/r/rust.json");
    }

    #[test]
    fn test_segments_inserted_verbatim() {
        let client = RedditClient::default();
        assert_eq!(
            client.posts_url("Ask Science"),
            "https://www.reddit.com/r/Ask Science.json"
        );
    }

    #[tokio::test]
    async fn test_fetch_posts_decodes_listing() {
        let base = serve_once(
            "HTTP/1.1 200 OK",
            r#"{"data":{"children":[{"data":{"title":"t","author":"a","score":1,"num_comments":0,"subreddit_subscribers":10,"subreddit_id":"t5_x"}}]}}"#,
        )
        .await;
        let posts = local_client(base).fetch_posts("rust").await.unwrap();
        assert_eq!(posts.data.children.len(), 1);
        assert_eq!(posts.data.children[0].data.subreddit_id, "t5_x");
    }

    #[tokio::test]
    async fn test_non_success_status_maps_to_status() {
        let base = serve_once("HTTP/1.1 404 Not Found", "").await;
        let err = local_client(base).fetch_posts("nope").await.unwrap_err();
        assert_eq!(err, ApiError::Status(404));
    }

    #[tokio::test]
    async fn test_wrong_shape_maps_to_decode() {
        let base = serve_once("HTTP/1.1 200 OK", r#"{"data":{"children":[{"data":{}}]}}"#).await;
        let err = local_client(base).fetch_posts("rust").await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_closed_port_maps_to_network() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = local_client(format!("http://{}", addr))
            .fetch_info("t5_x")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Network(_)), "got {:?}", err);
    }
}
