use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::fmt::Write;
use tracing::warn;

use crate::config::{DEFAULT_CURRENCY_SCALE, DEFAULT_DATE_FORMAT, DEFAULT_PLACEHOLDER};
use crate::models::finance::color::Color;

/// Separator between element display strings of a rendered collection
pub const COLLECTION_SEPARATOR: &str = ", ";

/// Converts typed field values into the strings stored in change log entries.
///
/// Rendering never fails: a value that cannot be formatted becomes the
/// placeholder token.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldRenderer {
    date_format: String,
    currency_scale: u32,
    placeholder: String,
}

impl Default for FieldRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_DATE_FORMAT, DEFAULT_CURRENCY_SCALE, DEFAULT_PLACEHOLDER)
    }
}

impl FieldRenderer {
    pub fn new(date_format: &str, currency_scale: u32, placeholder: &str) -> Self {
        Self {
            date_format: date_format.to_string(),
            currency_scale,
            placeholder: placeholder.to_string(),
        }
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn text(&self, value: &str) -> String {
        value.to_string()
    }

    pub fn optional_text(&self, value: Option<&str>) -> Option<String> {
        value.map(|v| self.text(v))
    }

    /// Text that counts as absent when empty
    pub fn non_empty_text(&self, value: &str) -> Option<String> {
        if value.is_empty() {
            None
        } else {
            Some(self.text(value))
        }
    }

    /// Amount rounded to the currency scale and always shown with that many decimals
    pub fn amount(&self, value: Decimal) -> String {
        let mut rounded = value.round_dp(self.currency_scale);
        rounded.rescale(self.currency_scale);
        rounded.to_string()
    }

    pub fn optional_amount(&self, value: Option<Decimal>) -> Option<String> {
        value.map(|v| self.amount(v))
    }

    pub fn date(&self, value: NaiveDate) -> String {
        let mut out = String::new();
        match write!(out, "{}", value.format(&self.date_format)) {
            Ok(()) => out,
            Err(_) => {
                warn!(format = %self.date_format, "Date could not be rendered");
                self.placeholder.clone()
            }
        }
    }

    pub fn optional_date(&self, value: Option<NaiveDate>) -> Option<String> {
        value.map(|v| self.date(v))
    }

    pub fn flag(&self, value: bool) -> String {
        let token = if value { "true" } else { "false" };
        token.to_string()
    }

    pub fn display<D: std::fmt::Display>(&self, value: D) -> String {
        value.to_string()
    }

    pub fn color(&self, value: &Color) -> String {
        value
            .name()
            .map(str::to_string)
            .unwrap_or_else(|| value.hex().to_string())
    }

    /// Join element display strings; an empty collection renders as `None`
    pub fn collection<I>(&self, items: I) -> Option<String>
    where
        I: IntoIterator<Item = String>,
    {
        let parts: Vec<String> = items.into_iter().collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(COLLECTION_SEPARATOR))
        }
    }
}
