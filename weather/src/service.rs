// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  config::WeatherConfig,
  constants::{API_BASE_URL, REQUEST_TIMEOUT},
  models::{api::OneCallResponse, moon::MoonSnapshot},
};
use async_trait::async_trait;
use error::Error;
use reqwest::Client;
use tracing::{debug, instrument, warn};
use url::Url;

#[async_trait]
pub trait MoonPhaseProvider: Send + Sync {
  async fn fetch_moon_phase(&self) -> Result<MoonSnapshot, Error>;
}

pub struct WeatherService {
  config: WeatherConfig,
  client: Client,
  base_url: String,
}

impl WeatherService {
  pub fn new(config: WeatherConfig) -> Self {
    Self {
      config,
      client: Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .expect("Failed to create HTTP client"),
      base_url: API_BASE_URL.to_string(),
    }
  }

  #[cfg(test)]
  fn with_base_url(config: WeatherConfig, base_url: &str) -> Self {
    let mut service = Self::new(config);
    service.base_url = base_url.to_string();
    service
  }

  fn build_api_url(&self) -> Result<Url, Error> {
    Url::parse_with_params(
      &self.base_url,
      &[
        ("lat", self.config.lat.as_str()),
        ("lon", self.config.lon.as_str()),
        ("appid", self.config.api_key.as_str()),
        ("exclude", self.config.exclude.as_str()),
      ],
    )
    .map_err(|e| Error::ApiError(format!("Failed to build API URL: {}", e)))
  }
}

#[async_trait]
impl MoonPhaseProvider for WeatherService {
  #[instrument(skip(self))]
  async fn fetch_moon_phase(&self) -> Result<MoonSnapshot, Error> {
    let url = self.build_api_url()?;
    let response = self.client.get(url).send().await?;

    match response.status() {
      reqwest::StatusCode::OK => (),
      reqwest::StatusCode::TOO_MANY_REQUESTS => return Err(Error::RateLimitExceeded),
      status => return Err(Error::ApiError(format!("API request failed: {}", status))),
    }

    let weather_data: OneCallResponse = response.json().await?;

    let moon_phase = weather_data.daily.first().and_then(|day| day.moon_phase);
    if moon_phase.is_none() {
      warn!("Could not find moon phase in API response");
      return Ok(MoonSnapshot::default());
    }

    debug!("Fetched moon phase: {:?}", moon_phase);
    Ok(MoonSnapshot { moon_phase })
  }
}
