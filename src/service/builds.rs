//! Selection of the build to restart.

use crate::api::types::{Build, Commit};

/// Branch whose latest build gets restarted
pub const DEFAULT_BRANCH: &str = "master";

/// First build, in the order the API returned them, whose commit is on `branch`.
///
/// Builds are not re-sorted: the API lists newest first and that order is
/// trusted. A build whose `commit_id` matches no commit never qualifies.
pub fn find_latest_build<'a>(
    builds: &'a [Build],
    commits: &[Commit],
    branch: &str,
) -> Option<&'a Build> {
    builds
        .iter()
        .find(|build| is_build_for_branch(build, commits, branch))
}

fn is_build_for_branch(build: &Build, commits: &[Commit], branch: &str) -> bool {
    let Some(commit_id) = build.commit_id else {
        return false;
    };
    commits
        .iter()
        .any(|commit| commit.id == Some(commit_id) && commit.branch.as_deref() == Some(branch))
}
