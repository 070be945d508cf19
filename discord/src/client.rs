// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  builders::{DiscordClientBuilder, StatusBuilder},
  config::DiscordConfig,
  types::{PublishOutcome, SettingsPatch, SettingsResponse},
};
use error::Error;
use reqwest::{header::AUTHORIZATION, Client};
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct DiscordClient {
  pub(crate) config: DiscordConfig,
  pub(crate) client: Client,
}

impl DiscordClient {
  pub fn builder() -> DiscordClientBuilder {
    DiscordClientBuilder::default()
  }

  pub fn status(&self) -> StatusBuilder {
    StatusBuilder::new()
  }

  // Error statuses are not surfaced as Err: the settings endpoint reports
  // rejections in the body, which decodes into a Failure outcome.
  #[instrument(skip(self, patch))]
  pub(crate) async fn update_settings(
    &self,
    patch: SettingsPatch<'_>,
  ) -> Result<PublishOutcome, Error> {
    let url = format!("{}/users/@me/settings", self.config.api_base);

    let response = self
      .client
      .patch(&url)
      .header(AUTHORIZATION, self.config.token.as_str())
      .json(&patch)
      .send()
      .await
      .map_err(Error::HttpError)?;

    let status = response.status();
    let settings: SettingsResponse = response.json().await.map_err(Error::HttpError)?;
    debug!("Settings endpoint replied with status {}", status);

    Ok(PublishOutcome::from(settings))
  }
}
