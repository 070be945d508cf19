// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct OneCallResponse {
  #[serde(default)]
  pub daily: Vec<DailyForecast>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DailyForecast {
  pub moon_phase: Option<f64>,
}
