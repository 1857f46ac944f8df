//! Authentication, repository discovery and build restarts.
//!
//! `RestartService` owns every decision this tool makes; the transport it
//! drives only moves JSON. Endpoints are handled one after another in
//! [`Endpoint::ALL`] order, and the results are merged here rather than in
//! the client.

mod builds;

pub use builds::{find_latest_build, DEFAULT_BRANCH};

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::api::types::{
    AccessTokenResponse, BuildsResponse, GithubAuthRequest, ReposResponse,
};
use crate::api::{ApiError, Endpoint, Transport};
use crate::domain::{Repository, RestartOutcome};
use crate::report::{Report, Reporter};

/// Errors produced by the restart service
#[derive(Debug, Error)]
pub enum RestartError {
    /// Auth exchange did not yield an access token
    #[error("Authenticating against {endpoint} returned response w/o access_token: {response}")]
    Authentication { endpoint: Endpoint, response: String },

    /// Transport, status or decode failure from the API
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("No builds for repo {slug}")]
    NoBuilds { slug: String },

    #[error("No build on branch '{branch}' found for repo {slug}")]
    NoMatchingBuild { slug: String, branch: String },

    #[error("Build ID cannot be found in entity: {build}")]
    MalformedBuild { build: String },
}

/// Decode a response, treating JSON `null` (empty body) as the default value.
fn decode<D>(value: Value) -> Result<D, RestartError>
where
    D: DeserializeOwned + Default,
{
    if value.is_null() {
        return Ok(D::default());
    }
    serde_json::from_value(value).map_err(|err| RestartError::Api(ApiError::Decode(err)))
}

pub struct RestartService<T: Transport> {
    client: T,
    reporter: Arc<dyn Reporter>,
    dry_run: bool,
}

impl<T: Transport> RestartService<T> {
    pub fn new(client: T, reporter: Arc<dyn Reporter>, dry_run: bool) -> Self {
        Self {
            client,
            reporter,
            dry_run,
        }
    }

    /// Get the underlying transport.
    #[cfg(test)]
    pub fn client(&self) -> &T {
        &self.client
    }

    /// Exchange a GitHub token for a Travis access token on each endpoint.
    ///
    /// Stops at the first endpoint that does not hand back a token; endpoints
    /// already authenticated keep their credential.
    pub async fn authenticate(
        &mut self,
        github_token: &str,
        endpoints: &[Endpoint],
    ) -> Result<(), RestartError> {
        let body = serde_json::to_value(GithubAuthRequest {
            github_token: github_token.to_string(),
        })
        .map_err(ApiError::from)?;

        for &endpoint in endpoints {
            debug!("Authenticating against {}", endpoint);
            let response = self
                .client
                .post(endpoint, "/auth/github", Some(&body))
                .await?;

            let parsed: AccessTokenResponse =
                serde_json::from_value(response.clone()).unwrap_or_default();

            match parsed.access_token.filter(|token| !token.is_empty()) {
                Some(token) => {
                    self.client.set_credential(endpoint, token);
                    info!("Authenticated against {}", endpoint);
                }
                None => {
                    return Err(RestartError::Authentication {
                        endpoint,
                        response: response.to_string(),
                    });
                }
            }
        }

        Ok(())
    }

    /// All repositories `member` belongs to, pro entries first.
    pub async fn list_repositories(
        &self,
        member: &str,
        endpoints: &[Endpoint],
    ) -> Result<Vec<Repository>, RestartError> {
        let member: String = url::form_urlencoded::byte_serialize(member.as_bytes()).collect();
        let path = format!("/repos/?member={}", member);

        let mut repositories = Vec::new();
        for endpoint in Endpoint::ALL {
            if !endpoints.contains(&endpoint) {
                continue;
            }

            let response: ReposResponse = decode(self.client.get(endpoint, &path).await?)?;
            let entries = response.repos.unwrap_or_default();
            debug!("{} returned {} repos", endpoint, entries.len());

            for entry in entries {
                match entry.slug {
                    Some(slug) if !slug.is_empty() => {
                        repositories.push(Repository::new(slug, endpoint))
                    }
                    _ => warn!("Ignoring repo without slug from {}", endpoint),
                }
            }
        }

        Ok(repositories)
    }

    /// Restart the newest `master` build of `slug`, or report it in dry-run mode.
    pub async fn restart_latest_build(
        &self,
        slug: &str,
        endpoint: Endpoint,
    ) -> Result<RestartOutcome, RestartError> {
        let response: BuildsResponse = decode(
            self.client
                .get(endpoint, &format!("/repos/{}/builds", slug))
                .await?,
        )?;

        let builds = response.builds.unwrap_or_default();
        if builds.is_empty() {
            return Err(RestartError::NoBuilds {
                slug: slug.to_string(),
            });
        }
        let commits = response.commits.unwrap_or_default();

        let latest = find_latest_build(&builds, &commits, DEFAULT_BRANCH).ok_or_else(|| {
            RestartError::NoMatchingBuild {
                slug: slug.to_string(),
                branch: DEFAULT_BRANCH.to_string(),
            }
        })?;

        let build_id = latest.id.ok_or_else(|| RestartError::MalformedBuild {
            build: serde_json::to_string(latest).unwrap_or_else(|_| format!("{:?}", latest)),
        })?;

        if self.dry_run {
            self.reporter.report(Report::DryRun {
                slug: slug.to_string(),
                build_id,
            });
            return Ok(RestartOutcome::DryRun(build_id));
        }

        self.client
            .post(endpoint, &format!("/builds/{}/restart", build_id), None)
            .await?;
        info!("Restarted build {} of {} on {}", build_id, slug, endpoint);

        Ok(RestartOutcome::Restarted(build_id))
    }
}
