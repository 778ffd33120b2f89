//! HTTP client for the NASA POWER daily point API.

use crate::power::error::FetchError;
use crate::power::provider::{DailyProvider, FetchRequest};
use crate::power::response::PowerResponse;
use crate::types::parameter::Parameter;
use crate::types::series::ParameterSet;
use bon::Builder;
use log::{info, warn};
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://power.larc.nasa.gov/api/temporal/daily/point";
pub const DEFAULT_COMMUNITY: &str = "RE";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings for [`PowerClient`].
///
/// # Examples
///
/// ```
/// use power_climatology::{Parameter, PowerConfig};
///
/// let config = PowerConfig::builder()
///     .parameters(Parameter::REQUIRED.to_vec())
///     .build();
/// assert_eq!(config.community, "RE");
/// assert_eq!(config.parameters.len(), 3);
/// ```
#[derive(Debug, Clone, Builder)]
pub struct PowerConfig {
    #[builder(into, default = DEFAULT_BASE_URL.to_string())]
    pub base_url: String,

    /// POWER user community, which selects the units returned.
    #[builder(into, default = DEFAULT_COMMUNITY.to_string())]
    pub community: String,

    #[builder(default = Parameter::ALL.to_vec())]
    pub parameters: Vec<Parameter>,

    #[builder(default = DEFAULT_TIMEOUT)]
    pub timeout: Duration,
}

impl Default for PowerConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

pub struct PowerClient {
    config: PowerConfig,
    http: Client,
}

impl PowerClient {
    pub fn new() -> Result<Self, FetchError> {
        Self::with_config(PowerConfig::default())
    }

    pub fn with_config(config: PowerConfig) -> Result<Self, FetchError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(FetchError::ClientBuild)?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &PowerConfig {
        &self.config
    }

    pub(crate) fn request_url(&self, request: &FetchRequest) -> String {
        let parameters = self
            .config
            .parameters
            .iter()
            .map(Parameter::code)
            .collect::<Vec<_>>()
            .join(",");
        format!(
            "{}?parameters={}&community={}&longitude={}&latitude={}&start={}&end={}&format=JSON",
            self.config.base_url,
            parameters,
            self.config.community,
            request.location.lon(),
            request.location.lat(),
            request.start.format("%Y%m%d"),
            request.end.format("%Y%m%d"),
        )
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        info!("Downloading data from {}", url);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::NetworkRequest(url.to_string(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", url, e);
                return Err(if let Some(status) = e.status() {
                    FetchError::HttpStatus {
                        url: url.to_string(),
                        status,
                        source: e,
                    }
                } else {
                    FetchError::NetworkRequest(url.to_string(), e)
                });
            }
        };

        let bytes = response
            .bytes()
            .await
            .map_err(|e| FetchError::NetworkRequest(url.to_string(), e))?;
        Ok(bytes.to_vec())
    }
}

/// Decodes a POWER response body and checks that the pipeline's inputs are present.
pub(crate) fn parse_body(url: &str, body: &[u8]) -> Result<ParameterSet, FetchError> {
    let response: PowerResponse =
        serde_json::from_slice(body).map_err(|e| FetchError::ResponseDecode {
            url: url.to_string(),
            source: e,
        })?;
    let set = response.into_parameter_set()?;
    if let Some(missing) = set.missing_required().first() {
        return Err(FetchError::MissingParameter(missing.code().to_string()));
    }
    Ok(set)
}

impl DailyProvider for PowerClient {
    fn source_name(&self) -> &str {
        "NASA POWER"
    }

    async fn fetch_daily(&self, request: FetchRequest) -> Result<ParameterSet, FetchError> {
        let url = self.request_url(&request);
        let body = self.download(&url).await?;
        let set = parse_body(&url, &body)?;
        info!(
            "Fetched {} parameters for ({}, {}) from {} to {}",
            set.len(),
            request.location.lat(),
            request.location.lon(),
            request.start,
            request.end
        );
        Ok(set)
    }
}
