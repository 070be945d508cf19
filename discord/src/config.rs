// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use std::time::Duration;

pub(crate) const DISCORD_API_BASE: &str = "https://discord.com/api/v6";
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub(crate) const MAX_STATUS_LENGTH: usize = 128;

#[derive(Clone, Debug)]
pub struct DiscordConfig {
  pub(crate) token: String,
  pub(crate) timeout: Duration,
  pub(crate) api_base: String,
}

impl Default for DiscordConfig {
  fn default() -> Self {
    Self {
      token: String::new(),
      timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
      api_base: DISCORD_API_BASE.to_string(),
    }
  }
}
