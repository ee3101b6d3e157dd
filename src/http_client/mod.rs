//! HTTP client with a single bounded timeout and no retries.

mod response;
mod user_agent;

pub use response::HttpResponse;
pub use user_agent::{resolve_user_agent, USER_AGENT};

use std::time::{Duration, Instant};

use reqwest::Client;

/// HTTP client used for outbound asset requests.
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: Client,
    timeout: Duration,
}

impl HttpClient {
    /// Create a new HTTP client with the default user agent.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        Self::with_user_agent(timeout, None)
    }

    /// Create a new HTTP client with custom user agent configuration.
    /// - None: Use default basicpage user agent
    /// - Some(custom): Use custom user agent string
    pub fn with_user_agent(
        timeout: Duration,
        user_agent_config: Option<&str>,
    ) -> Result<Self, reqwest::Error> {
        let user_agent = resolve_user_agent(user_agent_config);
        let client = Client::builder()
            .user_agent(&user_agent)
            .timeout(timeout)
            .gzip(true)
            .brotli(true)
            .build()?;

        Ok(Self { client, timeout })
    }

    /// The timeout applied to every request.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Make a single GET request. Non-2xx statuses are returned, not raised.
    pub async fn get(&self, url: &str) -> Result<HttpResponse, reqwest::Error> {
        tracing::debug!(url, "GET");

        let start = Instant::now();
        let response = self.client.get(url).send().await?;
        let duration = start.elapsed();

        tracing::info!(
            url,
            status = response.status().as_u16(),
            duration_ms = duration.as_millis() as u64,
            "response received"
        );

        Ok(HttpResponse {
            status: response.status(),
            response,
        })
    }
}
