use crate::error::{CommandError, ResolveError};
use crate::git::CommandRunner;
use std::path::Path;
use tracing::debug;

use super::branch::find_speculative_base_branch;

/// Commit at the tip of the current branch. Fatal if the repository is
/// unreadable or has no commits.
pub async fn head_commit(runner: &dyn CommandRunner, repo: &Path) -> Result<String, CommandError> {
    runner.run(repo, "git rev-parse HEAD").await
}

/// Resolve the speculative base branch to a commit, or `None` when no base
/// applies (empty candidate list).
///
/// The remote copy is preferred: some CI runners hold a stale local base
/// branch while the remote has advanced. A failed fetch is an expected
/// outcome and falls back to the local ref; only a failure of the local
/// lookup is fatal.
pub async fn base_commit(
    runner: &dyn CommandRunner,
    repo: &Path,
    candidates: &[String],
    remote: &str,
) -> Result<Option<String>, ResolveError> {
    let current_branch = runner.run(repo, "git rev-parse --abbrev-ref HEAD").await?;

    let Some(base_branch) = find_speculative_base_branch(&current_branch, candidates)? else {
        return Ok(None);
    };

    debug!("Speculative base branch: {}", base_branch);

    match fetch_remote_head(runner, repo, remote, &base_branch).await {
        Ok(sha) => Ok(Some(sha)),
        Err(e) => {
            debug!(
                "Failed to fetch {}/{}: {}. Trying local ref {}",
                remote, base_branch, e, base_branch
            );
            let sha = runner
                .run(repo, &format!("git rev-parse {}", base_branch))
                .await?;
            Ok(Some(sha))
        }
    }
}

async fn fetch_remote_head(
    runner: &dyn CommandRunner,
    repo: &Path,
    remote: &str,
    branch: &str,
) -> Result<String, CommandError> {
    runner
        .run(repo, &format!("git fetch {} {}", remote, branch))
        .await?;
    runner.run(repo, "git rev-parse FETCH_HEAD").await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::testing::ScriptedRunner;

    #[tokio::test]
    async fn test_head_commit_passes_through_sha() {
        let runner = ScriptedRunner::new().ok("git rev-parse HEAD", "abc123");
        let sha = head_commit(&runner, Path::new(".")).await.unwrap();
        assert_eq!(sha, "abc123");
    }

    #[tokio::test]
    async fn test_base_commit_prefers_fetched_head() {
        let runner = ScriptedRunner::new()
            .ok("git rev-parse --abbrev-ref HEAD", "feature/x")
            .ok("git fetch origin release/*", "")
            .ok("git rev-parse FETCH_HEAD", "remote-sha");

        let candidates = vec!["release/*".to_string()];
        let sha = base_commit(&runner, Path::new("."), &candidates, "origin")
            .await
            .unwrap();

        assert_eq!(sha, Some("remote-sha".to_string()));
    }

    #[tokio::test]
    async fn test_base_commit_falls_back_to_local_ref_when_fetch_fails() {
        let runner = ScriptedRunner::new()
            .ok("git rev-parse --abbrev-ref HEAD", "feature/x")
            .fail("git fetch origin develop", 128, "could not resolve host")
            .ok("git rev-parse develop", "local-sha");

        let candidates = vec!["develop".to_string()];
        let sha = base_commit(&runner, Path::new("."), &candidates, "origin")
            .await
            .unwrap();

        assert_eq!(sha, Some("local-sha".to_string()));
        assert_eq!(
            runner.calls(),
            vec![
                "git rev-parse --abbrev-ref HEAD",
                "git fetch origin develop",
                "git rev-parse develop",
            ]
        );
    }

    #[tokio::test]
    async fn test_base_commit_fatal_when_local_fallback_also_fails() {
        let runner = ScriptedRunner::new()
            .ok("git rev-parse --abbrev-ref HEAD", "feature/x")
            .fail("git fetch origin develop", 128, "could not resolve host")
            .fail("git rev-parse develop", 128, "unknown revision");

        let candidates = vec!["develop".to_string()];
        let err = base_commit(&runner, Path::new("."), &candidates, "origin")
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ResolveError::Command(CommandError::NonZeroExit { code: 128, .. })
        ));
    }

    #[tokio::test]
    async fn test_base_commit_none_for_empty_candidates() {
        let runner = ScriptedRunner::new().ok("git rev-parse --abbrev-ref HEAD", "feature/x");
        let sha = base_commit(&runner, Path::new("."), &[], "origin")
            .await
            .unwrap();

        assert_eq!(sha, None);
        // no fetch is even attempted
        assert_eq!(runner.calls(), vec!["git rev-parse --abbrev-ref HEAD"]);
    }

    #[tokio::test]
    async fn test_matching_branch_is_fetched_by_its_own_name() {
        let runner = ScriptedRunner::new()
            .ok("git rev-parse --abbrev-ref HEAD", "release/v2")
            .ok("git fetch origin release/v2", "")
            .ok("git rev-parse FETCH_HEAD", "release-sha");

        let candidates = vec!["release/*".to_string()];
        let sha = base_commit(&runner, Path::new("."), &candidates, "origin")
            .await
            .unwrap();

        assert_eq!(sha, Some("release-sha".to_string()));
    }
}
