use shared::money::DEFAULT_CURRENCY_SYMBOL;

use crate::services::logging::LogLevel;

const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api/expenses";

/// Build-time settings for the client.
///
/// Values come from `EXPENSE_API_BASE_URL`, `EXPENSE_CURRENCY_SYMBOL` and
/// `EXPENSE_LOG_LEVEL` at compile time; there is nothing to read at runtime in
/// the browser.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub currency_symbol: String,
    pub log_level: LogLevel,
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("EXPENSE_API_BASE_URL"),
            option_env!("EXPENSE_CURRENCY_SYMBOL"),
            option_env!("EXPENSE_LOG_LEVEL"),
        )
    }

    fn from_values(
        api_base_url: Option<&str>,
        currency_symbol: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        let api_base_url = api_base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_string();

        let currency_symbol = currency_symbol
            .filter(|symbol| !symbol.is_empty())
            .unwrap_or(DEFAULT_CURRENCY_SYMBOL)
            .to_string();

        let log_level = log_level
            .and_then(LogLevel::parse)
            .unwrap_or(LogLevel::Info);

        Self {
            api_base_url,
            currency_symbol,
            log_level,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None, None)
    }
}
