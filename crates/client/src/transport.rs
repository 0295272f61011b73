//! HTTP boundary for the fruit nutrition API.
//!
//! The catalog only ever talks to the [`FruitApi`] trait, so the physical
//! transport can be swapped (direct API access, a local dev proxy, a
//! CORS-bypass proxy that wraps the payload in an envelope, or a test
//! double) without touching the data access contract.

use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;

use fruitdex_core::Fruit;

use crate::config::ApiConfig;
use crate::error::ApiError;

/// Network boundary of the data access layer.
#[async_trait]
pub trait FruitApi: Send + Sync {
    /// Fetch the full fruit collection (`GET {base}/all`).
    async fn fetch_all(&self) -> Result<Vec<Fruit>, ApiError>;

    /// Fetch a single fruit by name (`GET {base}/{name}`).
    ///
    /// A 404 response maps to [`ApiError::NotFound`] carrying `name`.
    async fn fetch_by_name(&self, name: &str) -> Result<Fruit, ApiError>;
}

/// How response bodies are decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseFormat {
    /// The body is the JSON payload itself.
    #[default]
    Raw,
    /// The body is a proxy envelope whose `contents` field holds the JSON
    /// payload as a string, requiring one extra decode step.
    Enveloped,
}

impl ResponseFormat {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Raw => "raw",
            Self::Enveloped => "enveloped",
        }
    }

    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "raw" => Some(Self::Raw),
            "enveloped" => Some(Self::Enveloped),
            _ => None,
        }
    }
}

/// Envelope returned by CORS-bypass proxies.
#[derive(Debug, Deserialize)]
struct ProxyEnvelope {
    contents: String,
}

/// Reqwest-backed transport for the fruit API.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
    format: ResponseFormat,
}

impl HttpTransport {
    /// Create a transport from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            format: config.format,
        })
    }

    /// Build `{base}/{segment}`, percent-encoding the segment.
    fn endpoint(&self, segment: &str) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::Parse("base URL cannot carry path segments".to_string()))?
            .push(segment);
        Ok(url)
    }

    /// GET a JSON payload, unwrapping the proxy envelope when configured.
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            debug!(%url, %status, "fruit API returned non-success status");
            return Err(ApiError::Server {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("unknown").to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let payload = match self.format {
            ResponseFormat::Raw => body,
            ResponseFormat::Enveloped => {
                let envelope: ProxyEnvelope = serde_json::from_str(&body)
                    .map_err(|e| ApiError::Parse(format!("proxy envelope: {e}")))?;
                envelope.contents
            }
        };

        serde_json::from_str(&payload).map_err(|e| ApiError::Parse(e.to_string()))
    }
}

#[async_trait]
impl FruitApi for HttpTransport {
    #[instrument(skip(self))]
    async fn fetch_all(&self) -> Result<Vec<Fruit>, ApiError> {
        let url = self.endpoint("all")?;
        self.get_json(url).await
    }

    #[instrument(skip(self), fields(name = %name))]
    async fn fetch_by_name(&self, name: &str) -> Result<Fruit, ApiError> {
        let url = self.endpoint(name)?;
        self.get_json(url).await.map_err(|err| match err {
            // Only the per-name lookup translates 404 into not-found; the
            // bulk endpoint reports it as a plain server failure.
            ApiError::Server { status: 404, .. } => ApiError::NotFound(name.to_string()),
            other => other,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn transport(format: ResponseFormat) -> HttpTransport {
        let config = ApiConfig {
            format,
            ..ApiConfig::default()
        };
        HttpTransport::new(&config).unwrap()
    }

    #[test]
    fn endpoint_joins_and_encodes_segments() {
        let t = transport(ResponseFormat::Raw);
        assert_eq!(
            t.endpoint("all").unwrap().as_str(),
            "https://fruityvice.com/api/fruit/all"
        );
        assert_eq!(
            t.endpoint("blood orange").unwrap().as_str(),
            "https://fruityvice.com/api/fruit/blood%20orange"
        );
    }

    #[test]
    fn response_format_parse_round_trips() {
        for format in [ResponseFormat::Raw, ResponseFormat::Enveloped] {
            assert_eq!(ResponseFormat::parse(format.as_str()), Some(format));
        }
        assert_eq!(ResponseFormat::parse("jsonp"), None);
    }

    #[test]
    fn proxy_envelope_unwraps_inner_json() {
        let body = r#"{"contents": "[{\"id\":1,\"name\":\"Apple\",\"family\":\"Rosaceae\",\"order\":\"Rosales\",\"genus\":\"Malus\",\"nutritions\":{\"calories\":52,\"fat\":0.4,\"sugar\":10.3,\"carbohydrates\":11.4,\"protein\":0.3}}]"}"#;
        let envelope: ProxyEnvelope = serde_json::from_str(body).unwrap();
        let fruits: Vec<Fruit> = serde_json::from_str(&envelope.contents).unwrap();
        assert_eq!(fruits.len(), 1);
        assert_eq!(fruits.first().unwrap().name, "Apple");
    }
}
