//! BotConfig: Telegram + Gemini + logging + admission limit. Use load() for env-based loading,
//! then validate() to fail fast before init.

use anyhow::{Context, Result};
use gbot_telegram::TelegramConfig;
use gemini_client::GeminiConfig;
use std::env;

const DEFAULT_LOG_FILE: &str = "logs/gbot.log";

/// Full bot configuration.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub telegram: TelegramConfig,
    pub gemini: GeminiConfig,
    /// LOG_FILE
    pub log_file: String,
    /// MAX_IN_FLIGHT; None means unbounded.
    pub max_in_flight: Option<usize>,
}

impl BotConfig {
    /// Load from environment variables. `token` overrides BOT_TOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let telegram = TelegramConfig::load(token)?;
        let gemini = GeminiConfig::from_env()?;
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
        let max_in_flight = match env::var("MAX_IN_FLIGHT") {
            Ok(s) => Some(
                s.parse()
                    .with_context(|| format!("MAX_IN_FLIGHT is not a number: {}", s))?,
            ),
            Err(_) => None,
        };

        Ok(Self {
            telegram,
            gemini,
            log_file,
            max_in_flight,
        })
    }

    /// Validate config. Call after load() to fail fast before init.
    pub fn validate(&self) -> Result<()> {
        self.telegram.validate()?;
        self.gemini.validate()?;
        if self.max_in_flight == Some(0) {
            anyhow::bail!("MAX_IN_FLIGHT must be greater than 0");
        }
        Ok(())
    }

    pub fn bot_token(&self) -> &str {
        &self.telegram.bot_token
    }
    pub fn log_file(&self) -> &str {
        &self.log_file
    }
    pub fn telegram_api_url(&self) -> Option<&str> {
        self.telegram.telegram_api_url.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "BOT_TOKEN",
        "GEMINI_API_KEY",
        "GEMINI_BASE_URL",
        "GEMINI_TEXT_MODEL",
        "GEMINI_IMAGE_MODEL",
        "GEMINI_TIMEOUT_SECS",
        "TELEGRAM_API_URL",
        "TELOXIDE_API_URL",
        "LOG_FILE",
        "MAX_IN_FLIGHT",
    ];

    fn reset_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_load_config_with_defaults() {
        reset_env();
        env::set_var("BOT_TOKEN", "test_token");
        env::set_var("GEMINI_API_KEY", "test_key");

        let config = BotConfig::load(None).unwrap();

        assert_eq!(config.bot_token(), "test_token");
        assert!(config.telegram_api_url().is_none());
        assert_eq!(config.log_file(), "logs/gbot.log");
        assert_eq!(config.gemini.api_key, "test_key");
        assert_eq!(config.gemini.text_model, "gemini-2.0-flash");
        assert!(config.max_in_flight.is_none());
        assert!(config.validate().is_ok());

        reset_env();
    }

    #[test]
    #[serial]
    fn test_load_config_with_custom_values() {
        reset_env();
        env::set_var("BOT_TOKEN", "custom_token");
        env::set_var("GEMINI_API_KEY", "custom_key");
        env::set_var("LOG_FILE", "/tmp/gbot-test.log");
        env::set_var("MAX_IN_FLIGHT", "8");
        env::set_var("TELEGRAM_API_URL", "http://localhost:8081");

        let config = BotConfig::load(None).unwrap();

        assert_eq!(config.log_file(), "/tmp/gbot-test.log");
        assert_eq!(config.max_in_flight, Some(8));
        assert_eq!(config.telegram_api_url(), Some("http://localhost:8081"));
        assert!(config.validate().is_ok());

        reset_env();
    }

    #[test]
    #[serial]
    fn test_load_config_with_override_token() {
        reset_env();
        env::set_var("BOT_TOKEN", "env_token");
        env::set_var("GEMINI_API_KEY", "test_key");

        let config = BotConfig::load(Some("override_token".to_string())).unwrap();
        assert_eq!(config.bot_token(), "override_token");

        reset_env();
    }

    #[test]
    #[serial]
    fn test_missing_secrets_are_fatal() {
        reset_env();
        env::set_var("GEMINI_API_KEY", "test_key");
        assert!(BotConfig::load(None).is_err());

        reset_env();
        env::set_var("BOT_TOKEN", "test_token");
        assert!(BotConfig::load(None).is_err());

        reset_env();
    }

    #[test]
    #[serial]
    fn test_validate_rejects_bad_values() {
        reset_env();
        env::set_var("BOT_TOKEN", "test_token");
        env::set_var("GEMINI_API_KEY", "test_key");
        env::set_var("TELEGRAM_API_URL", "not-a-valid-url");
        assert!(BotConfig::load(None).unwrap().validate().is_err());

        env::remove_var("TELEGRAM_API_URL");
        env::set_var("MAX_IN_FLIGHT", "0");
        assert!(BotConfig::load(None).unwrap().validate().is_err());

        env::set_var("MAX_IN_FLIGHT", "many");
        assert!(BotConfig::load(None).is_err());

        reset_env();
    }
}
