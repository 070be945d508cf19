// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use chrono::{DateTime, Local};

const NEW_MOON: &str = "🌑";
const WAXING_CRESCENT: &str = "🌒";
const FULL_MOON: &str = "🌕";
const WAXING_GIBBOUS: &str = "🌔";
const CRESCENT_MOON: &str = "🌙";

/// Result of a single moon-phase fetch. `moon_phase`, when present,
/// lies in [0, 1].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoonSnapshot {
  pub moon_phase: Option<f64>,
}

impl MoonSnapshot {
  /// Maps the phase value onto the five status emoji. The ranges are
  /// half-open and checked in order; a missing value falls through to
  /// the default symbol.
  pub fn icon(&self) -> &'static str {
    match self.moon_phase {
      Some(v) if v == 0.0 || v == 1.0 => NEW_MOON,
      Some(v) if v < 0.25 => WAXING_CRESCENT,
      Some(v) if v < 0.5 => FULL_MOON,
      Some(v) if v < 0.75 => WAXING_GIBBOUS,
      _ => CRESCENT_MOON,
    }
  }

  pub fn status_text(&self, now: DateTime<Local>) -> String {
    format!("Moon phase: {} | {}", self.icon(), now.format("%I:%M"))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::TimeZone;

  fn snapshot(value: f64) -> MoonSnapshot {
    MoonSnapshot {
      moon_phase: Some(value),
    }
  }

  #[test]
  fn zero_and_one_resolve_to_new_moon() {
    assert_eq!(snapshot(0.0).icon(), NEW_MOON);
    assert_eq!(snapshot(1.0).icon(), NEW_MOON);
  }

  #[test]
  fn first_range_resolves_to_waxing_crescent() {
    assert_eq!(snapshot(0.1).icon(), WAXING_CRESCENT);
    assert_eq!(snapshot(0.2499).icon(), WAXING_CRESCENT);
  }

  #[test]
  fn quarter_boundary_falls_into_second_range() {
    assert_eq!(snapshot(0.25).icon(), FULL_MOON);
    assert_eq!(snapshot(0.49).icon(), FULL_MOON);
  }

  #[test]
  fn third_range_resolves_to_waxing_gibbous() {
    assert_eq!(snapshot(0.5).icon(), WAXING_GIBBOUS);
    assert_eq!(snapshot(0.74).icon(), WAXING_GIBBOUS);
  }

  #[test]
  fn upper_boundary_and_beyond_resolve_to_default() {
    assert_eq!(snapshot(0.75).icon(), CRESCENT_MOON);
    assert_eq!(snapshot(0.9).icon(), CRESCENT_MOON);
  }

  #[test]
  fn missing_phase_resolves_to_default() {
    assert_eq!(MoonSnapshot::default().icon(), CRESCENT_MOON);
  }

  #[test]
  fn status_text_contains_icon_and_twelve_hour_time() {
    let now = Local.with_ymd_and_hms(2025, 1, 15, 21, 5, 0).unwrap();
    assert_eq!(snapshot(0.3).status_text(now), "Moon phase: 🌕 | 09:05");
  }

  #[test]
  fn status_text_for_empty_snapshot_uses_default_icon() {
    let now = Local.with_ymd_and_hms(2025, 1, 15, 0, 30, 0).unwrap();
    assert_eq!(
      MoonSnapshot::default().status_text(now),
      "Moon phase: 🌙 | 12:30"
    );
  }
}
