use anyhow::Context;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub tabulate_input_path: PathBuf,
    pub tabulate_output_path: PathBuf,
    pub filter_input_path: PathBuf,
    pub filter_output_path: PathBuf,
    pub target_countries: Vec<String>,
    pub personal_email_domains: Vec<String>,
    pub require_email_at_sign: bool,
    pub log_level: tracing::Level,
}

const TABULATE_INPUT_PATH_KEY: &str = "TABULATE_INPUT_PATH";
const TABULATE_OUTPUT_PATH_KEY: &str = "TABULATE_OUTPUT_PATH";
const FILTER_INPUT_PATH_KEY: &str = "FILTER_INPUT_PATH";
const FILTER_OUTPUT_PATH_KEY: &str = "FILTER_OUTPUT_PATH";
const TARGET_COUNTRIES_KEY: &str = "TARGET_COUNTRIES";
const PERSONAL_EMAIL_DOMAINS_KEY: &str = "PERSONAL_EMAIL_DOMAINS";
const REQUIRE_EMAIL_AT_SIGN_KEY: &str = "REQUIRE_EMAIL_AT_SIGN";
const LOG_LEVEL_KEY: &str = "LOG_LEVEL";

const DEFAULT_TABULATE_INPUT_PATH: &str = "data.txt";
const DEFAULT_TABULATE_OUTPUT_PATH: &str = "output.xlsx";
const DEFAULT_FILTER_INPUT_PATH: &str = "sorted_by_country.xlsx";
const DEFAULT_FILTER_OUTPUT_PATH: &str = "filtered_business_emails.xlsx";

pub const DEFAULT_TARGET_COUNTRIES: &[&str] = &["usa", "united_kingdom"];

pub const DEFAULT_PERSONAL_EMAIL_DOMAINS: &[&str] = &[
    "gmail.com",
    "hotmail.com",
    "outlook.com",
    "yahoo.com",
    "aol.com",
    "icloud.com",
    "mail.com",
    "yandex.com",
];

impl Default for Config {
    fn default() -> Self {
        Self {
            tabulate_input_path: PathBuf::from(DEFAULT_TABULATE_INPUT_PATH),
            tabulate_output_path: PathBuf::from(DEFAULT_TABULATE_OUTPUT_PATH),
            filter_input_path: PathBuf::from(DEFAULT_FILTER_INPUT_PATH),
            filter_output_path: PathBuf::from(DEFAULT_FILTER_OUTPUT_PATH),
            target_countries: to_owned_list(DEFAULT_TARGET_COUNTRIES),
            personal_email_domains: to_owned_list(DEFAULT_PERSONAL_EMAIL_DOMAINS),
            require_email_at_sign: false,
            log_level: tracing::Level::INFO,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let defaults = Self::default();

        let tabulate_input_path = env_path(TABULATE_INPUT_PATH_KEY, defaults.tabulate_input_path);
        let tabulate_output_path =
            env_path(TABULATE_OUTPUT_PATH_KEY, defaults.tabulate_output_path);
        let filter_input_path = env_path(FILTER_INPUT_PATH_KEY, defaults.filter_input_path);
        let filter_output_path = env_path(FILTER_OUTPUT_PATH_KEY, defaults.filter_output_path);
        let target_countries = std::env::var(TARGET_COUNTRIES_KEY)
            .map(|raw| parse_list(&raw))
            .unwrap_or(defaults.target_countries);
        let personal_email_domains = std::env::var(PERSONAL_EMAIL_DOMAINS_KEY)
            .map(|raw| parse_list(&raw))
            .unwrap_or(defaults.personal_email_domains);
        let require_email_at_sign = match std::env::var(REQUIRE_EMAIL_AT_SIGN_KEY) {
            Ok(raw) => parse_bool(&raw)
                .with_context(|| format!("invalid value for {}", REQUIRE_EMAIL_AT_SIGN_KEY))?,
            Err(_) => defaults.require_email_at_sign,
        };
        let log_level = match std::env::var(LOG_LEVEL_KEY) {
            Ok(raw) => raw
                .trim()
                .parse::<tracing::Level>()
                .with_context(|| format!("invalid value for {}: {}", LOG_LEVEL_KEY, raw))?,
            Err(_) => defaults.log_level,
        };

        Ok(Self {
            tabulate_input_path,
            tabulate_output_path,
            filter_input_path,
            filter_output_path,
            target_countries,
            personal_email_domains,
            require_email_at_sign,
            log_level,
        })
    }
}

fn env_path(key: &str, default: PathBuf) -> PathBuf {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or(default)
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Splits a comma-separated list, dropping blank entries.
pub fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_bool(raw: &str) -> anyhow::Result<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => anyhow::bail!("expected a boolean, got '{}'", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_from_env() {
        assert!(Config::from_env().is_ok());
    }

    #[test]
    fn default_config_carries_script_literals() {
        let config = Config::default();
        assert_eq!(config.target_countries, vec!["usa", "united_kingdom"]);
        assert_eq!(config.personal_email_domains.len(), 8);
        assert!(!config.require_email_at_sign);
        assert_eq!(config.filter_output_path, PathBuf::from("filtered_business_emails.xlsx"));
    }

    #[test]
    fn parse_list_skips_blanks() {
        assert_eq!(
            parse_list(" usa, ,united_kingdom ,"),
            vec!["usa".to_string(), "united_kingdom".to_string()]
        );
        assert!(parse_list("").is_empty());
    }

    #[test]
    fn parse_bool_rejects_garbage() {
        assert!(parse_bool("TRUE").unwrap());
        assert!(!parse_bool("off").unwrap());
        assert!(parse_bool("maybe").is_err());
    }
}
