// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use anyhow::{Context, Result};
use chrono::Local;
use config::Config;
use discord::{DiscordClient, PublishOutcome, UNAUTHORIZED_MESSAGE};
use std::env;
use tracing::{error, info, instrument, warn};
use weather::{MoonPhaseProvider, WeatherConfig, WeatherService};

const DEFAULT_CONFIG_PATH: &str = "moonstatus.toml";

pub struct ServiceRunner {
  weather_service: WeatherService,
  discord: DiscordClient,
}

#[cfg(debug_assertions)]
fn setup_logging() {
  tracing_subscriber::fmt()
    .with_file(true)
    .with_line_number(true)
    .with_thread_ids(true)
    .init();
}

#[cfg(not(debug_assertions))]
fn setup_logging() {
  tracing_subscriber::fmt()
    .with_timer(tracing_subscriber::fmt::time::ChronoLocal::new(
      "[%I:%M %p]".to_owned(),
    ))
    .with_target(false)
    .init();
}

#[tokio::main]
async fn main() -> Result<()> {
  setup_logging();

  let config_path =
    env::var("MOONSTATUS_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
  let config = Config::from_file(&config_path)
    .with_context(|| format!("Failed to load configuration from {}", config_path))?;

  if let Err(e) = ServiceRunner::new(config)?.run().await {
    error!("Failed to update custom status: {:?}", e);
    std::process::exit(1);
  }

  Ok(())
}

impl ServiceRunner {
  #[instrument(skip(config))]
  pub fn new(config: Config) -> Result<Self> {
    Ok(Self {
      weather_service: WeatherService::new(WeatherConfig::new(
        config.api_key.clone(),
        config.lat.clone(),
        config.lon.clone(),
        config.exclude.clone(),
      )?),
      discord: DiscordClient::builder()
        .token(config.discord_token.clone())
        .build()?,
    })
  }

  #[instrument(skip(self))]
  pub async fn run(&self) -> Result<()> {
    let snapshot = self.weather_service.fetch_moon_phase().await?;

    let text = snapshot.status_text(Local::now());
    let icon = snapshot.icon();

    let outcome = self
      .discord
      .status()
      .text(&text)
      .emoji(icon)
      .send(&self.discord)
      .await?;

    let summary = outcome_summary(&outcome);
    match outcome {
      PublishOutcome::Success { .. } => info!("{}", summary),
      PublishOutcome::Failure { .. } => warn!("{}", summary),
    }

    Ok(())
  }
}

fn outcome_summary(outcome: &PublishOutcome) -> String {
  match outcome {
    PublishOutcome::Success { .. } => "Successfully updated custom status.".to_string(),
    PublishOutcome::Failure { message } if message == UNAUTHORIZED_MESSAGE => {
      "Seems like your Discord personal access token is invalid...".to_string()
    }
    PublishOutcome::Failure { message } => {
      format!("Something happened. Message is the following: {}", message)
    }
  }
}
