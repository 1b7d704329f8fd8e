//! Configuration management for the frontdesk MCP server.
//!
//! Zendesk credentials come from environment variables. They are read on
//! every tool call rather than once at startup, so a rotated token or a
//! corrected `.env` takes effect without restarting the server.

use std::collections::HashMap;
use std::env;

use crate::error::DeskError;

/// Environment variable holding the Zendesk account URL or subdomain.
pub const URL_VAR: &str = "ZENDESK_URL";

/// Environment variable holding the agent email the API token belongs to.
pub const EMAIL_VAR: &str = "ZENDESK_EMAIL";

/// Environment variable holding the Zendesk API token.
pub const TOKEN_VAR: &str = "ZENDESK_TOKEN";

/// Configuration for connecting to Zendesk.
///
/// The API token is stored but never logged or exposed in error messages.
#[derive(Clone)]
pub struct Config {
    /// Account URL in any accepted form: `https://acme.zendesk.com`,
    /// `acme.zendesk.com` or just `acme`.
    pub base_url: String,

    /// Email of the agent that owns the API token.
    pub email: String,

    /// Zendesk API token.
    /// This value must never be logged or included in error messages.
    pub api_token: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url)
            .field("email", &self.email)
            .field("api_token", &"[REDACTED]")
            .finish()
    }
}

impl Config {
    /// Loads configuration from the process environment.
    ///
    /// # Required Environment Variables
    ///
    /// - `ZENDESK_URL`: the account URL or subdomain
    /// - `ZENDESK_EMAIL`: the agent email for token authentication
    /// - `ZENDESK_TOKEN`: the API token
    ///
    /// # Errors
    ///
    /// Returns `DeskError::Config` naming the first variable that is missing
    /// or blank, or describing a value that fails validation.
    pub fn from_env() -> Result<Self, DeskError> {
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    ///
    /// `from_env` is this function over `std::env::var`.
    pub fn from_vars<F>(lookup: F) -> Result<Self, DeskError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = Self::get_required(&lookup, URL_VAR)?;
        let email = Self::get_required(&lookup, EMAIL_VAR)?;
        let api_token = Self::get_required(&lookup, TOKEN_VAR)?;

        Self::validate_email(&email)?;
        Self::validate_api_token(&api_token)?;

        Ok(Config {
            base_url,
            email,
            api_token,
        })
    }

    /// Gets a required variable, returning an error if missing or blank.
    fn get_required<F>(lookup: &F, name: &str) -> Result<String, DeskError>
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(name) {
            Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
            _ => Err(DeskError::missing_env(name)),
        }
    }

    fn validate_email(email: &str) -> Result<(), DeskError> {
        if !email.contains('@') {
            return Err(DeskError::invalid_config(format!(
                "{} must be an email address",
                EMAIL_VAR
            )));
        }
        Ok(())
    }

    /// Validates the API token is not a placeholder value.
    ///
    /// Only whole values match; a real token that happens to contain one of
    /// these words is accepted.
    fn validate_api_token(token: &str) -> Result<(), DeskError> {
        let placeholder_values = [
            "your_value_here",
            "your_token",
            "your_api_token",
            "placeholder",
            "changeme",
        ];

        if placeholder_values
            .iter()
            .any(|placeholder| token.eq_ignore_ascii_case(placeholder))
        {
            return Err(DeskError::invalid_config(format!(
                "{} appears to be a placeholder value",
                TOKEN_VAR
            )));
        }

        Ok(())
    }
}

/// Where the submitter gets its configuration from on each call.
#[derive(Clone)]
pub enum ConfigSource {
    /// The process environment (production).
    Environment,
    /// A fixed set of variables, looked up by the same names.
    Vars(HashMap<String, String>),
}

impl ConfigSource {
    /// Reads and validates a fresh `Config` from this source.
    pub fn load(&self) -> Result<Config, DeskError> {
        match self {
            ConfigSource::Environment => Config::from_env(),
            ConfigSource::Vars(vars) => Config::from_vars(|name| vars.get(name).cloned()),
        }
    }
}
