//! Run configuration.
//!
//! Validates parsed command-line arguments before any network call is made.

use std::time::Duration;

use regex::Regex;
use thiserror::Error;

use crate::api::{ClientConfig, Endpoint};
use crate::cli::Cli;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("--github-token required.")]
    MissingGithubToken,

    #[error("--github-user required (in order to filter results from the Travis API).")]
    MissingGithubUser,

    #[error("Invalid --include pattern '{pattern}': {source}")]
    InvalidInclude {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Both --skip-pro and --skip-org given; there is nothing to restart.")]
    NoEndpoints,

    #[error("--timeout-secs must be greater than zero.")]
    ZeroTimeout,
}

/// Everything a restart run needs, already validated
#[derive(Clone)]
pub struct RestartConfig {
    pub github_token: String,
    pub github_user: String,
    /// `None` selects every repository
    pub include: Option<Regex>,
    pub dry_run: bool,
    /// Endpoints not skipped, pro first
    pub endpoints: Vec<Endpoint>,
    pub client: ClientConfig,
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToOwned::to_owned)
}

impl RestartConfig {
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let github_token =
            non_empty(cli.github_token.as_deref()).ok_or(ConfigError::MissingGithubToken)?;
        let github_user =
            non_empty(cli.github_user.as_deref()).ok_or(ConfigError::MissingGithubUser)?;

        let include = match cli.include.as_deref().filter(|pattern| !pattern.is_empty()) {
            Some(pattern) => Some(Regex::new(pattern).map_err(|source| {
                ConfigError::InvalidInclude {
                    pattern: pattern.to_string(),
                    source,
                }
            })?),
            None => None,
        };

        let endpoints = Endpoint::selected(cli.skip_pro, cli.skip_org);
        if endpoints.is_empty() {
            return Err(ConfigError::NoEndpoints);
        }

        if cli.timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }

        let defaults = ClientConfig::default();
        let client = ClientConfig {
            pro_base_url: cli.pro_url.clone().unwrap_or(defaults.pro_base_url),
            public_base_url: cli.public_url.clone().unwrap_or(defaults.public_base_url),
            timeout: Duration::from_secs(cli.timeout_secs),
        };

        Ok(Self {
            github_token,
            github_user,
            include,
            dry_run: cli.dry_run,
            endpoints,
            client,
        })
    }

    /// Whether `slug` passes the include filter
    pub fn includes(&self, slug: &str) -> bool {
        self.include
            .as_ref()
            .map_or(true, |pattern| pattern.is_match(slug))
    }
}
