// SPDX-License-Identifier: MIT
// Copyright 2026 The FitTracker Authors

//! Client configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is honored for local development.

use std::env;
use std::time::Duration;

const DEFAULT_API_URL: &str = "http://localhost:8080/api";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const DEFAULT_SUCCESS_NOTICE_MS: u64 = 3000;

/// Client configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the activity backend (gateway), without trailing slash
    pub api_base_url: String,
    /// Transport timeout applied to every backend request
    pub request_timeout: Duration,
    /// How long the form keeps its success acknowledgement visible
    pub success_notice: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            success_notice: Duration::from_millis(DEFAULT_SUCCESS_NOTICE_MS),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let api_base_url = env::var("FITTRACKER_API_URL")
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        if api_base_url.is_empty() {
            return Err(ConfigError::Invalid(
                "FITTRACKER_API_URL",
                "must not be empty".to_string(),
            ));
        }

        Ok(Self {
            api_base_url,
            request_timeout: Duration::from_secs(parse_u64(
                "FITTRACKER_REQUEST_TIMEOUT_SECS",
                DEFAULT_REQUEST_TIMEOUT_SECS,
            )?),
            success_notice: Duration::from_millis(parse_u64(
                "FITTRACKER_SUCCESS_NOTICE_MS",
                DEFAULT_SUCCESS_NOTICE_MS,
            )?),
        })
    }
}

fn parse_u64(name: &'static str, default: u64) -> Result<u64, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| ConfigError::Invalid(name, format!("{:?}: {}", raw, e))),
        Err(_) => Ok(default),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {0}: {1}")]
    Invalid(&'static str, String),
}
