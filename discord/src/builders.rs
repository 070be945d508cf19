// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  client::DiscordClient,
  config::{DiscordConfig, MAX_STATUS_LENGTH},
  types::{CustomStatus, PublishOutcome, SettingsPatch},
};
use error::Error;

#[derive(Default)]
pub struct StatusBuilder<'a> {
  pub(crate) text: Option<&'a str>,
  pub(crate) emoji_name: Option<&'a str>,
}

impl<'a> StatusBuilder<'a> {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn text(mut self, text: &'a str) -> Self {
    self.text = Some(text);
    self
  }

  pub fn emoji(mut self, emoji_name: &'a str) -> Self {
    self.emoji_name = Some(emoji_name);
    self
  }

  pub async fn send(self, client: &DiscordClient) -> Result<PublishOutcome, Error> {
    let text = self
      .text
      .ok_or_else(|| Error::ApiError("Status text is required".into()))?;

    let emoji_name = self
      .emoji_name
      .ok_or_else(|| Error::ApiError("Status emoji is required".into()))?;

    if text.len() > MAX_STATUS_LENGTH {
      return Err(Error::ApiError(format!(
        "Status too long: {} characters (max {})",
        text.len(),
        MAX_STATUS_LENGTH
      )));
    }

    let patch = SettingsPatch {
      custom_status: CustomStatus { text, emoji_name },
    };

    client.update_settings(patch).await
  }
}

#[derive(Default)]
pub struct DiscordClientBuilder {
  pub(crate) config: DiscordConfig,
}

impl DiscordClientBuilder {
  pub fn token(mut self, token: impl Into<String>) -> Self {
    self.config.token = token.into();
    self
  }

  pub fn timeout(mut self, timeout: std::time::Duration) -> Self {
    self.config.timeout = timeout;
    self
  }

  #[cfg(test)]
  pub(crate) fn api_base(mut self, api_base: impl Into<String>) -> Self {
    self.config.api_base = api_base.into();
    self
  }

  pub fn build(self) -> Result<DiscordClient, Error> {
    if self.config.token.is_empty() {
      return Err(Error::ConfigError("Discord token cannot be empty".into()));
    }

    let client = reqwest::Client::builder()
      .timeout(self.config.timeout)
      .build()
      .map_err(Error::HttpError)?;

    Ok(DiscordClient {
      config: self.config,
      client,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn build_rejects_empty_token() {
    let result = DiscordClient::builder().build();
    assert!(matches!(result, Err(Error::ConfigError(_))));
  }

  #[tokio::test]
  async fn send_requires_text_and_emoji() {
    let client = DiscordClient::builder().token("token").build().unwrap();

    let missing_text = client.status().emoji("🌑").send(&client).await;
    assert!(matches!(missing_text, Err(Error::ApiError(_))));

    let missing_emoji = client.status().text("Moon phase").send(&client).await;
    assert!(matches!(missing_emoji, Err(Error::ApiError(_))));
  }

  #[tokio::test]
  async fn send_rejects_overlong_text() {
    let client = DiscordClient::builder().token("token").build().unwrap();
    let text = "x".repeat(MAX_STATUS_LENGTH + 1);

    let result = client.status().text(&text).emoji("🌑").send(&client).await;
    assert!(matches!(result, Err(Error::ApiError(_))));
  }
}
