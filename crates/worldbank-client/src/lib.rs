//! World Bank API client
//!
//! Retrieval collaborator for the flow engine. Fetches the most recent
//! non-empty value of each indicator series for the whole country registry
//! in one request per series, all series concurrently. Failures are isolated
//! per indicator: a failed series is logged and simply missing from the
//! snapshot, never an engine error.

use async_trait::async_trait;
use futures_util::future::join_all;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use wealth_core::{CountryRegistry, FlowError, IndicatorKey, IndicatorSource, IndicatorStore};

const BASE_URL: &str = "https://api.worldbank.org/v2";

/// One data row of an indicator response
#[derive(Debug, Deserialize)]
struct IndicatorRow {
    countryiso3code: String,
    value: Option<f64>,
}

#[derive(Clone)]
pub struct WorldBankClient {
    client: Client,
    base_url: String,
}

impl WorldBankClient {
    pub fn new() -> Self {
        Self::with_base_url(BASE_URL.to_string())
    }

    pub fn with_base_url(base_url: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, base_url }
    }

    /// Fetch one series for every registry country. `mrnev=1` asks for the
    /// most recent non-empty value per country.
    pub async fn fetch_indicator(
        &self,
        registry: &CountryRegistry,
        key: IndicatorKey,
    ) -> Result<Vec<(String, f64)>, FlowError> {
        let codes: Vec<&str> = registry.countries().iter().map(|c| c.code.as_str()).collect();
        let url = format!(
            "{}/country/{}/indicator/{}",
            self.base_url,
            codes.join(";"),
            key.series_code()
        );

        let response = self
            .client
            .get(&url)
            .query(&[("format", "json"), ("per_page", "1000"), ("mrnev", "1")])
            .send()
            .await
            .map_err(|e| FlowError::Http(e.to_string()))?;

        if !response.status().is_success() {
            return Err(FlowError::Http(format!("HTTP {}", response.status())));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FlowError::Http(e.to_string()))?;

        parse_indicator_response(&body)
    }

    /// Fetch every known series concurrently and build the snapshot from
    /// whatever settled successfully.
    pub async fn fetch_all(&self, registry: &CountryRegistry) -> IndicatorStore {
        let fetches = IndicatorKey::all()
            .iter()
            .map(|&key| async move { (key, self.fetch_indicator(registry, key).await) });

        let mut store = IndicatorStore::new();
        for (key, result) in join_all(fetches).await {
            match result {
                Ok(rows) => {
                    for (code, value) in rows {
                        if registry.contains(&code) {
                            store.set(&code, key, value);
                        }
                    }
                }
                Err(e) => {
                    tracing::warn!("fetch of {} failed: {}", key.series_code(), e);
                }
            }
        }

        tracing::debug!("indicator snapshot holds {} values", store.len());
        store
    }
}

impl Default for WorldBankClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IndicatorSource for WorldBankClient {
    async fn fetch_indicators(&self, registry: &CountryRegistry) -> IndicatorStore {
        self.fetch_all(registry).await
    }
}

/// Parse a World Bank indicator payload: a two-element array of metadata
/// followed by data rows. Rows with a null value are absent measurements.
fn parse_indicator_response(body: &str) -> Result<Vec<(String, f64)>, FlowError> {
    let (_meta, rows): (serde_json::Value, Option<Vec<IndicatorRow>>) =
        serde_json::from_str(body).map_err(|e| FlowError::Parse(e.to_string()))?;

    Ok(rows
        .unwrap_or_default()
        .into_iter()
        .filter_map(|row| row.value.map(|v| (row.countryiso3code, v)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_values_and_drops_nulls() {
        let body = r#"[
            {"page": 1, "pages": 1, "per_page": 1000, "total": 3},
            [
                {"countryiso3code": "BRA", "value": 5000000000.0, "date": "2023"},
                {"countryiso3code": "MEX", "value": null, "date": "2023"},
                {"countryiso3code": "KEN", "value": 0.0, "date": "2023"}
            ]
        ]"#;

        let rows = parse_indicator_response(body).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], ("BRA".to_string(), 5_000_000_000.0));
        // zero survives: it is a measurement, not an absence
        assert_eq!(rows[1], ("KEN".to_string(), 0.0));
    }

    #[test]
    fn test_parse_handles_empty_data_element() {
        let body = r#"[{"page": 1}, null]"#;
        let rows = parse_indicator_response(body).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_parse_rejects_error_payload() {
        // The API reports bad requests as a single-element array
        let body = r#"[{"message": [{"id": "120", "value": "Invalid indicator"}]}]"#;
        assert!(parse_indicator_response(body).is_err());
    }
}
