use clap::Parser;

use crate::api::DEFAULT_TIMEOUT_SECS;

/// Restart the newest master build of every repository a GitHub user has
/// access to on travis-ci.com and travis-ci.org
#[derive(Parser)]
#[command(name = "travis-restart")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// GitHub token exchanged for Travis access tokens (required)
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// GitHub username whose repositories are restarted (required)
    #[arg(long, env = "GITHUB_USER")]
    pub github_user: Option<String>,

    /// Regex matched against repo slugs to select which repos to restart, eg. 'plugin-'
    #[arg(long)]
    pub include: Option<String>,

    /// Only report which builds would be restarted
    #[arg(long)]
    pub dry_run: bool,

    /// Skip Travis PRO (travis-ci.com) repos. Use this if you do not have a PRO account
    #[arg(long)]
    pub skip_pro: bool,

    /// Skip public (travis-ci.org) repos. Use this if your user does not exist there
    #[arg(long, alias = "skip-public")]
    pub skip_org: bool,

    /// HTTP request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Custom travis-ci.com API URL (for debugging/staging only)
    #[arg(long, hide = true)]
    pub pro_url: Option<String>,

    /// Custom travis-ci.org API URL (for debugging/staging only)
    #[arg(long, hide = true)]
    pub public_url: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
