// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
pub mod config;
pub mod models;
pub mod service;

pub use config::WeatherConfig;
pub use models::moon::MoonSnapshot;
pub use service::{MoonPhaseProvider, WeatherService};

pub mod constants {
  use std::time::Duration;
  pub(crate) const API_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/onecall";
  pub(crate) const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
}
