//! User settings
//!
//! Pure presentation configuration: the currency code and locale tag only
//! affect how amounts are formatted.

use serde::{Deserialize, Serialize};

/// User settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// ISO currency code (e.g., "USD")
    #[serde(default = "default_currency")]
    pub currency: String,

    /// BCP 47 language tag (e.g., "en-US")
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_language() -> String {
    "en-US".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            language: default_language(),
        }
    }
}

impl Settings {
    /// Display symbol for the configured currency
    pub fn currency_symbol(&self) -> &str {
        match self.currency.as_str() {
            "USD" | "CAD" | "AUD" => "$",
            "EUR" => "€",
            "GBP" => "£",
            "JPY" => "¥",
            _ => "$",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.currency, "USD");
        assert_eq!(settings.language, "en-US");
        assert_eq!(settings.currency_symbol(), "$");
    }

    #[test]
    fn test_currency_symbol() {
        let mut settings = Settings::default();
        settings.currency = "EUR".into();
        assert_eq!(settings.currency_symbol(), "€");

        settings.currency = "XYZ".into();
        assert_eq!(settings.currency_symbol(), "$");
    }

    #[test]
    fn test_partial_json_defaults_missing_fields() {
        let settings: Settings = serde_json::from_str(r#"{"currency": "GBP"}"#).unwrap();
        assert_eq!(settings.currency, "GBP");
        assert_eq!(settings.language, "en-US");
    }
}
