use std::env;
use std::time::Duration;

/// Timeout applied to every outbound HTTP call.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub const DEFAULT_TABLE_NAME: &str = "Interview_Rounds";
pub const DEFAULT_RAW_TABLE_NAME: &str = "Raw_Import";
pub const DEFAULT_FROM_NAME: &str = "Weekday Interviews";
pub const DEFAULT_FETCH_LIMIT: u32 = 25;
pub const DEFAULT_AIRTABLE_API_URL: &str = "https://api.airtable.com/v0";
pub const DEFAULT_MAILERSEND_API_URL: &str = "https://api.mailersend.com/v1";

#[derive(Debug, Clone)]
pub struct Config {
    /// Airtable personal access token (`AIRTABLE_PAT`).
    pub token: String,
    /// Airtable base identifier (`AIRTABLE_BASE_ID`).
    pub base_id: String,
    /// Table holding one row per interview round (`AIRTABLE_TABLE_NAME`).
    pub table_name: String,
    /// Table the splitter reads raw CSV imports from (`AIRTABLE_RAW_TABLE_NAME`).
    pub raw_table_name: String,
    /// MailerSend API key (`MAILERSEND_API_KEY`).
    pub api_key: String,
    /// Sender address (`FROM_EMAIL`).
    pub from_email: String,
    /// Sender display name, also used to sign the message (`FROM_NAME`).
    pub from_name: String,
    /// Max pending records per run (`PENDING_FETCH_LIMIT`).
    pub fetch_limit: u32,
    pub airtable_api_url: String,
    pub mailersend_api_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let required = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let fetch_limit = match get("PENDING_FETCH_LIMIT") {
            Some(raw) => raw
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(ConfigError::InvalidFetchLimit(raw))?,
            None => DEFAULT_FETCH_LIMIT,
        };

        Ok(Config {
            token: required("AIRTABLE_PAT")?,
            base_id: required("AIRTABLE_BASE_ID")?,
            table_name: get("AIRTABLE_TABLE_NAME")
                .unwrap_or_else(|| DEFAULT_TABLE_NAME.to_string()),
            raw_table_name: get("AIRTABLE_RAW_TABLE_NAME")
                .unwrap_or_else(|| DEFAULT_RAW_TABLE_NAME.to_string()),
            api_key: required("MAILERSEND_API_KEY")?,
            from_email: required("FROM_EMAIL")?,
            from_name: get("FROM_NAME").unwrap_or_else(|| DEFAULT_FROM_NAME.to_string()),
            fetch_limit,
            airtable_api_url: get("AIRTABLE_API_URL")
                .unwrap_or_else(|| DEFAULT_AIRTABLE_API_URL.to_string()),
            mailersend_api_url: get("MAILERSEND_API_URL")
                .unwrap_or_else(|| DEFAULT_MAILERSEND_API_URL.to_string()),
        })
    }
}

/// Fully populated config pointing at the public endpoints
#[cfg(test)]
pub(crate) fn test_config() -> Config {
    Config {
        token: "pat-test".to_string(),
        base_id: "appTest".to_string(),
        table_name: DEFAULT_TABLE_NAME.to_string(),
        raw_table_name: DEFAULT_RAW_TABLE_NAME.to_string(),
        api_key: "mlsn.test".to_string(),
        from_email: "hiring@example.com".to_string(),
        from_name: DEFAULT_FROM_NAME.to_string(),
        fetch_limit: DEFAULT_FETCH_LIMIT,
        airtable_api_url: DEFAULT_AIRTABLE_API_URL.to_string(),
        mailersend_api_url: DEFAULT_MAILERSEND_API_URL.to_string(),
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} environment variable is required")]
    Missing(&'static str),
    #[error("PENDING_FETCH_LIMIT must be a positive integer, got {0:?}")]
    InvalidFetchLimit(String),
}
