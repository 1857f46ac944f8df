use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{error, info};

use crate::api::{ApiClient, Transport};
use crate::config::RestartConfig;
use crate::domain::RestartOutcome;
use crate::report::{Report, Reporter};
use crate::service::RestartService;

/// Tally of one run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub restarted: usize,
    /// Builds that would have been restarted in a dry run
    pub dry_run: usize,
    pub failed: usize,
    pub skipped: usize,
}

pub async fn run_restart(config: RestartConfig, reporter: Arc<dyn Reporter>) -> Result<RunSummary> {
    let client = ApiClient::new(config.client.clone()).context("Failed to build HTTP client")?;
    let mut service = RestartService::new(client, reporter.clone(), config.dry_run);

    restart_all(&mut service, &config, reporter.as_ref()).await
}

/// Authenticate, list repositories and restart each one that passes the filter.
///
/// Authentication and listing failures abort the run. A failure for one
/// repository is reported and the loop moves on to the next.
pub async fn restart_all<T: Transport>(
    service: &mut RestartService<T>,
    config: &RestartConfig,
    reporter: &dyn Reporter,
) -> Result<RunSummary> {
    for endpoint in crate::api::Endpoint::ALL {
        if !config.endpoints.contains(&endpoint) {
            reporter.report(Report::SkippingEndpoint(endpoint));
        }
    }

    service
        .authenticate(&config.github_token, &config.endpoints)
        .await
        .context("Authentication failed")?;

    let repositories = service
        .list_repositories(&config.github_user, &config.endpoints)
        .await
        .with_context(|| format!("Failed to list repositories of {}", config.github_user))?;
    info!("Found {} repositories", repositories.len());

    let mut summary = RunSummary::default();
    for repository in repositories {
        if !config.includes(&repository.slug) {
            reporter.report(Report::SkippedRepo {
                slug: repository.slug,
            });
            summary.skipped += 1;
            continue;
        }

        match service
            .restart_latest_build(&repository.slug, repository.endpoint)
            .await
        {
            Ok(RestartOutcome::Restarted(build_id)) => {
                reporter.report(Report::Restarted {
                    slug: repository.slug,
                    build_id,
                });
                summary.restarted += 1;
            }
            // already reported by the service
            Ok(RestartOutcome::DryRun(_)) => summary.dry_run += 1,
            Err(err) => {
                error!(
                    "Restarting {} on {} failed: {}",
                    repository.slug, repository.endpoint, err
                );
                reporter.report(Report::Failed {
                    slug: repository.slug,
                    message: err.to_string(),
                });
                summary.failed += 1;
            }
        }
    }

    reporter.report(Report::Done {
        restarted: summary.restarted,
        dry_run: summary.dry_run,
        failed: summary.failed,
        skipped: summary.skipped,
    });

    Ok(summary)
}
