use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// `GOOGLE_API_KEY` is optional at startup: without it the service still
/// boots, and every analysis request reports the missing key in-band.
#[derive(Debug, Clone)]
pub struct Config {
    pub google_api_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            google_api_key: optional_env("GOOGLE_API_KEY"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Reads an env var, treating an empty or whitespace-only value as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_env_missing_is_none() {
        assert_eq!(optional_env("RESUME_ANALYZER_TEST_UNSET_VAR"), None);
    }

    #[test]
    fn test_optional_env_blank_is_none() {
        std::env::set_var("RESUME_ANALYZER_TEST_BLANK_VAR", "   ");
        assert_eq!(optional_env("RESUME_ANALYZER_TEST_BLANK_VAR"), None);
    }

    #[test]
    fn test_optional_env_trims_value() {
        std::env::set_var("RESUME_ANALYZER_TEST_KEY_VAR", " abc123 \n");
        assert_eq!(
            optional_env("RESUME_ANALYZER_TEST_KEY_VAR").as_deref(),
            Some("abc123")
        );
    }
}
