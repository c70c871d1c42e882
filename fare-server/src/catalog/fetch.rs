//! Remote catalog client.

use tracing::debug;

use super::error::CatalogError;
use super::wire::OfferingDto;

/// Configuration for the catalog HTTP client.
#[derive(Debug, Clone)]
pub struct CatalogClientConfig {
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for CatalogClientConfig {
    fn default() -> Self {
        Self { timeout_secs: 30 }
    }
}

/// HTTP client for fetching catalog documents.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
}

impl CatalogClient {
    /// Create a new catalog client.
    pub fn new(config: CatalogClientConfig) -> Result<Self, CatalogError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { http })
    }

    /// Fetch a catalog document: a JSON array of offering records.
    pub async fn fetch(&self, url: &str) -> Result<Vec<OfferingDto>, CatalogError> {
        debug!(url, "fetching catalog");

        let response = self.http.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let dtos: Vec<OfferingDto> =
            serde_json::from_str(&body).map_err(|e| CatalogError::Json {
                message: e.to_string(),
                body: Some(truncate_body(&body)),
            })?;

        debug!(count = dtos.len(), "fetched catalog");
        Ok(dtos)
    }
}

/// Keep error bodies short enough to log.
fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let end = (0..=MAX).rev().find(|&i| body.is_char_boundary(i)).unwrap_or(0);
        format!("{}…", &body[..end])
    }
}
