use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::warn;

use crate::tracker::compare::ComparisonPolicy;
use crate::tracker::render::FieldRenderer;

/// Environment variable holding the coordinate tolerance in decimal degrees
/// (`none` disables coordinate comparison).
pub const COORDINATE_TOLERANCE_ENV: &str = "MAKEITRAIN_COORDINATE_TOLERANCE";
/// Environment variable holding the `strftime` pattern used for rendered dates.
pub const DATE_FORMAT_ENV: &str = "MAKEITRAIN_DATE_FORMAT";
/// Environment variable holding the number of decimals shown for amounts.
pub const CURRENCY_SCALE_ENV: &str = "MAKEITRAIN_CURRENCY_SCALE";

pub const DEFAULT_DATE_FORMAT: &str = "%b %-d, %Y";
pub const DEFAULT_CURRENCY_SCALE: u32 = 2;
pub const DEFAULT_PLACEHOLDER: &str = "N/A";

/// Largest scale `rust_decimal` can represent.
const MAX_CURRENCY_SCALE: u32 = 28;

/// Settings for change detection and change log rendering.
///
/// - `coordinate_tolerance`: `None` compares owned locations by id only;
///   `Some(t)` additionally flags a location whose latitude or longitude
///   moved by more than `t` degrees
/// - `date_format`: pattern for dates in change log entries
/// - `currency_scale`: decimals shown for amounts, matching the UI
/// - `placeholder`: token written when a value cannot be rendered
#[derive(Debug, Clone, PartialEq)]
pub struct TrackerConfig {
    pub coordinate_tolerance: Option<Decimal>,
    pub date_format: String,
    pub currency_scale: u32,
    pub placeholder: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            coordinate_tolerance: None,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            currency_scale: DEFAULT_CURRENCY_SCALE,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

impl TrackerConfig {
    /// Build a configuration from the process environment, falling back to
    /// defaults for unset or unparsable variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<L>(lookup: L) -> Self
    where
        L: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(COORDINATE_TOLERANCE_ENV) {
            let raw = raw.trim();
            if raw.eq_ignore_ascii_case("none") || raw.is_empty() {
                config.coordinate_tolerance = None;
            } else {
                match Decimal::from_str(raw) {
                    Ok(tolerance) if !tolerance.is_sign_negative() => {
                        config.coordinate_tolerance = Some(tolerance)
                    }
                    _ => warn!(value = raw, "Ignoring invalid {COORDINATE_TOLERANCE_ENV}"),
                }
            }
        }

        if let Some(raw) = lookup(DATE_FORMAT_ENV) {
            if raw.trim().is_empty() {
                warn!("Ignoring empty {DATE_FORMAT_ENV}");
            } else {
                config.date_format = raw;
            }
        }

        if let Some(raw) = lookup(CURRENCY_SCALE_ENV) {
            match raw.trim().parse::<u32>() {
                Ok(scale) if scale <= MAX_CURRENCY_SCALE => config.currency_scale = scale,
                _ => warn!(value = %raw, "Ignoring invalid {CURRENCY_SCALE_ENV}"),
            }
        }

        config
    }

    pub fn with_coordinate_tolerance(mut self, tolerance: Decimal) -> Self {
        self.coordinate_tolerance = Some(tolerance);
        self
    }

    pub fn comparison_policy(&self) -> ComparisonPolicy {
        ComparisonPolicy::new(self.coordinate_tolerance)
    }

    pub fn renderer(&self) -> FieldRenderer {
        FieldRenderer::new(&self.date_format, self.currency_scale, &self.placeholder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = TrackerConfig::from_lookup(|_| None);
        assert_eq!(config, TrackerConfig::default());
        assert_eq!(config.coordinate_tolerance, None);
        assert_eq!(config.currency_scale, 2);
    }

    #[test]
    fn test_reads_all_variables() {
        let config = TrackerConfig::from_lookup(lookup_from(&[
            (COORDINATE_TOLERANCE_ENV, "0.0001"),
            (DATE_FORMAT_ENV, "%Y-%m-%d"),
            (CURRENCY_SCALE_ENV, "3"),
        ]));
        assert_eq!(config.coordinate_tolerance, Some(Decimal::new(1, 4)));
        assert_eq!(config.date_format, "%Y-%m-%d");
        assert_eq!(config.currency_scale, 3);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = TrackerConfig::from_lookup(lookup_from(&[
            (COORDINATE_TOLERANCE_ENV, "-1"),
            (CURRENCY_SCALE_ENV, "ninety"),
            (DATE_FORMAT_ENV, "  "),
        ]));
        assert_eq!(config, TrackerConfig::default());
    }

    #[test]
    fn test_none_disables_tolerance() {
        let config = TrackerConfig::from_lookup(lookup_from(&[(COORDINATE_TOLERANCE_ENV, "none")]));
        assert_eq!(config.coordinate_tolerance, None);
    }
}
