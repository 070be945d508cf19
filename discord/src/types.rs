// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use serde::{Deserialize, Serialize};

pub const UNAUTHORIZED_MESSAGE: &str = "401: Unauthorized";

#[derive(Debug, Serialize)]
pub(crate) struct SettingsPatch<'a> {
  pub custom_status: CustomStatus<'a>,
}

#[derive(Debug, Serialize)]
pub(crate) struct CustomStatus<'a> {
  pub text: &'a str,
  pub emoji_name: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SettingsResponse {
  pub locale: Option<String>,
  pub message: Option<String>,
}

/// Settings responses carry no explicit status flag; a `locale` field marks
/// success, anything else is a rejection. Decoded once here so callers never
/// inspect the raw body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
  Success { locale: String },
  Failure { message: String },
}

impl From<SettingsResponse> for PublishOutcome {
  fn from(response: SettingsResponse) -> Self {
    match response.locale {
      Some(locale) => Self::Success { locale },
      None => Self::Failure {
        message: response
          .message
          .unwrap_or_else(|| "unknown error".to_string()),
      },
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn decode(body: &str) -> PublishOutcome {
    let response: SettingsResponse = serde_json::from_str(body).unwrap();
    PublishOutcome::from(response)
  }

  #[test]
  fn locale_field_marks_success() {
    let outcome = decode(r#"{"locale": "en-US", "theme": "dark"}"#);
    assert_eq!(
      outcome,
      PublishOutcome::Success {
        locale: "en-US".to_string()
      }
    );
  }

  #[test]
  fn message_field_marks_failure() {
    let outcome = decode(r#"{"message": "401: Unauthorized", "code": 0}"#);
    assert_eq!(
      outcome,
      PublishOutcome::Failure {
        message: UNAUTHORIZED_MESSAGE.to_string()
      }
    );
  }

  #[test]
  fn empty_body_becomes_unknown_error_failure() {
    let outcome = decode("{}");
    assert_eq!(
      outcome,
      PublishOutcome::Failure {
        message: "unknown error".to_string()
      }
    );
  }
}
