//! User-facing run report.
//!
//! Diagnostics go to `tracing` on stderr; the lines a user or cron job reads
//! go through a [`Reporter`] so tests can observe them.

use crate::api::Endpoint;

/// One line of run output
#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    SkippingEndpoint(Endpoint),
    SkippedRepo { slug: String },
    DryRun { slug: String, build_id: u64 },
    Restarted { slug: String, build_id: u64 },
    Failed { slug: String, message: String },
    Done {
        restarted: usize,
        dry_run: usize,
        failed: usize,
        skipped: usize,
    },
}

pub trait Reporter: Send + Sync {
    fn report(&self, report: Report);
}

/// Prints reports to stdout
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn report(&self, report: Report) {
        match report {
            Report::SkippingEndpoint(endpoint) => {
                println!("NOTE: Skipping {} repos (if any).", endpoint)
            }
            Report::SkippedRepo { slug } => println!("NOTE: Skipping repo {}.", slug),
            Report::DryRun { slug, build_id } => {
                println!("[Dry Run] Restarting build {} for repo {}.", build_id, slug)
            }
            Report::Restarted { slug, build_id } => {
                println!("✅ Restarted latest build ({}) for repo {}.", build_id, slug)
            }
            Report::Failed { slug, message } => {
                println!("❌ Failed to restart latest build for {}: {}", slug, message)
            }
            Report::Done {
                restarted,
                dry_run,
                failed,
                skipped,
            } => {
                if dry_run > 0 {
                    println!(
                        "Done. {} would be restarted (dry run), {} failed, {} skipped.",
                        dry_run, failed, skipped
                    )
                } else {
                    println!(
                        "Done. {} restarted, {} failed, {} skipped.",
                        restarted, failed, skipped
                    )
                }
            }
        }
    }
}
