// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use error::Error;

#[derive(Debug, Clone)]
pub struct WeatherConfig {
  pub(crate) api_key: String,
  pub(crate) lat: String,
  pub(crate) lon: String,
  pub(crate) exclude: String,
}

impl WeatherConfig {
  pub fn new(
    api_key: impl Into<String>,
    lat: impl Into<String>,
    lon: impl Into<String>,
    exclude: impl Into<String>,
  ) -> Result<Self, Error> {
    let api_key = api_key.into();
    if api_key.trim().is_empty() {
      return Err(Error::InvalidApiKey);
    }

    Ok(Self {
      api_key,
      lat: lat.into(),
      lon: lon.into(),
      exclude: exclude.into(),
    })
  }
}
