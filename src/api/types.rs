//! Wire types for the Travis CI v2 API.
//!
//! Only the fields this tool reads are modelled; everything else the API
//! returns is ignored during deserialization.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Accept an id given as a number or a numeric string; anything else is `None`.
///
/// Entities with an unusable id never match, but they must not fail the
/// whole listing.
fn lenient_id<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(number) => number.as_u64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    })
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        _ => None,
    })
}

// ============================================================================
// Auth exchange
// ============================================================================

/// Body of `POST /auth/github`
#[derive(Debug, Clone, Serialize)]
pub struct GithubAuthRequest {
    pub github_token: String,
}

/// Response of `POST /auth/github`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AccessTokenResponse {
    #[serde(default)]
    pub access_token: Option<String>,
}

// ============================================================================
// Repository listing
// ============================================================================

/// Response of `GET /repos/?member=<name>`
///
/// `repos` is optional: some deployments omit the key entirely when the
/// member has no repositories.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReposResponse {
    #[serde(default)]
    pub repos: Option<Vec<RepoEntry>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RepoEntry {
    #[serde(default)]
    pub slug: Option<String>,
}

// ============================================================================
// Build listing
// ============================================================================

/// Response of `GET /repos/<slug>/builds`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BuildsResponse {
    #[serde(default)]
    pub builds: Option<Vec<Build>>,
    #[serde(default)]
    pub commits: Option<Vec<Commit>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Build {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "lenient_id")]
    pub commit_id: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Commit {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub branch: Option<String>,
}
