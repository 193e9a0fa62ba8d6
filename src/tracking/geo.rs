use moka::future::Cache;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

const DEFAULT_API_URL: &str = "http://ip-api.com/json";

/// Per-IP cache TTL. The provider's free tier is rate limited.
const CACHE_TTL: Duration = Duration::from_secs(24 * 60 * 60);
const CACHE_CAPACITY: u64 = 10_000;

#[derive(Debug, Error)]
pub enum GeoError {
    #[error("geolocation request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("geolocation provider returned HTTP {0}")]
    Http(reqwest::StatusCode),
    #[error("geolocation provider rejected the lookup: {0}")]
    Provider(String),
}

/// Geolocation fields persisted on a visitor log row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoInfo {
    pub country: Option<String>,
    #[serde(rename = "regionName")]
    pub region: Option<String>,
    pub city: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

/// Wire shape of an ip-api.com response.
#[derive(Debug, Deserialize)]
struct ApiResponse {
    status: String,
    message: Option<String>,
    #[serde(flatten)]
    info: GeoInfo,
}

/// Read-through geolocation cache over a free HTTP provider (no API key).
#[derive(Clone)]
pub struct GeoResolver {
    client: reqwest::Client,
    cache: Arc<Cache<String, GeoInfo>>,
    api_url: String,
}

impl GeoResolver {
    pub fn new(api_url: Option<String>) -> Self {
        let cache = Arc::new(
            Cache::builder()
                .time_to_live(CACHE_TTL)
                .max_capacity(CACHE_CAPACITY)
                .build(),
        );

        Self {
            client: reqwest::Client::new(),
            cache,
            api_url: api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string()),
        }
    }

    pub fn from_env() -> Self {
        Self::new(std::env::var("GEOIP_API_URL").ok())
    }

    /// Resolve geolocation for an IP, hitting the provider only on cache
    /// miss.
    pub async fn resolve(&self, ip: &str) -> Result<GeoInfo, GeoError> {
        if let Some(cached) = self.cache.get(ip).await {
            return Ok(cached);
        }

        let info = self.fetch(ip).await?;
        self.cache.insert(ip.to_string(), info.clone()).await;
        Ok(info)
    }

    async fn fetch(&self, ip: &str) -> Result<GeoInfo, GeoError> {
        let url = format!("{}/{}", self.api_url, ip);
        debug!("Fetching geolocation from {url}");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(GeoError::Http(status));
        }

        let body: ApiResponse = response.json().await?;
        if body.status != "success" {
            return Err(GeoError::Provider(
                body.message.unwrap_or_else(|| "unknown reason".to_string()),
            ));
        }

        Ok(body.info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_success_response() {
        let raw = r#"{
            "status": "success",
            "country": "Indonesia",
            "regionName": "Jawa Timur",
            "city": "Surabaya",
            "lat": -7.2492,
            "lon": 112.7508
        }"#;

        let parsed: ApiResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.status, "success");
        assert_eq!(parsed.info.country.as_deref(), Some("Indonesia"));
        assert_eq!(parsed.info.region.as_deref(), Some("Jawa Timur"));
        assert_eq!(parsed.info.city.as_deref(), Some("Surabaya"));
        assert!(parsed.info.lat.unwrap() < 0.0);
    }

    #[test]
    fn parses_failure_response() {
        let raw = r#"{"status": "fail", "message": "private range", "query": "10.0.0.1"}"#;
        let parsed: ApiResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.status, "fail");
        assert_eq!(parsed.message.as_deref(), Some("private range"));
    }
}
