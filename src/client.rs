use crate::errors::ClientError;
use crate::models::{ActivityRange, ActivityResponse};
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tracing::{debug, warn};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct ActivityClient {
    client: Client,
    base_url: String,
}

impl ActivityClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `path` relative to the base URL and decode the JSON body.
    ///
    /// Non-2xx responses become [`ClientError::Status`] carrying the response text.
    pub async fn api_get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                path: path.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|source| ClientError::Decode {
            path: path.to_string(),
            source,
        })
    }

    pub async fn fetch_activity(&self, range: ActivityRange) -> Result<ActivityResponse, ClientError> {
        self.api_get(&format!("/api/activity?range={range}")).await
    }
}

/// Remote activity with the last good response kept for `stale_after`.
///
/// A failed refresh is retried once; if it still fails the previous response
/// is served while one exists.
#[derive(Debug, Clone)]
pub struct ActivityFeed {
    client: ActivityClient,
    stale_after: Duration,
    last: Arc<Mutex<Option<FetchedActivity>>>,
}

#[derive(Debug)]
struct FetchedActivity {
    fetched_at: Instant,
    response: ActivityResponse,
}

impl ActivityFeed {
    pub fn new(client: ActivityClient, stale_after: Duration) -> Self {
        Self {
            client,
            stale_after,
            last: Arc::new(Mutex::new(None)),
        }
    }

    pub fn client(&self) -> &ActivityClient {
        &self.client
    }

    pub async fn activity(&self, range: ActivityRange) -> Result<ActivityResponse, ClientError> {
        let mut last = self.last.lock().await;
        if let Some(fetched) = last.as_ref() {
            if fetched.response.range == range && fetched.fetched_at.elapsed() < self.stale_after {
                return Ok(fetched.response.clone());
            }
        }

        let result = match self.client.fetch_activity(range).await {
            Ok(response) => Ok(response),
            Err(err) => {
                debug!("activity fetch failed, retrying once: {err}");
                self.client.fetch_activity(range).await
            }
        };

        match result {
            Ok(response) => {
                *last = Some(FetchedActivity {
                    fetched_at: Instant::now(),
                    response: response.clone(),
                });
                Ok(response)
            }
            Err(err) => match last.as_ref() {
                Some(fetched) if fetched.response.range == range => {
                    warn!("activity refresh failed, serving previous response: {err}");
                    Ok(fetched.response.clone())
                }
                _ => Err(err),
            },
        }
    }
}
