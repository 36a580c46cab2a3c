mod branch;
mod commit;

pub use branch::find_speculative_base_branch;
pub use commit::{base_commit, head_commit};

use crate::diff::{classify, parse_diff, FileStatuses};
use crate::error::ResolveError;
use crate::git::CommandRunner;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// PR-shaped change description synthesized from a speculative base branch.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct PrInfo {
    /// Always 0; there is no real PR behind this record
    pub id: u64,
    pub meta: PrMeta,
    pub head: Commit,
    pub base: Commit,
    pub files: FileStatuses,
}

/// Title/body placeholders the caller fills from other sources.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct PrMeta {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct Commit {
    pub sha: String,
}

/// Synthesize PR info for the current branch, or `None` when no speculative
/// context can be established (no candidate base, or the branch has not
/// diverged from its base yet).
pub async fn pr_info_for_speculative_branch(
    runner: &dyn CommandRunner,
    repo: &Path,
    candidates: &[String],
    remote: &str,
) -> Result<Option<PrInfo>, ResolveError> {
    debug!("Trying speculative branch resolution");

    let head = head_commit(runner, repo).await?;

    let Some(base) = base_commit(runner, repo, candidates, remote).await? else {
        return Ok(None);
    };

    if base == head {
        // Fresh branch still sitting on the base commit; treat as no PR
        debug!("Base commit equals head commit, no divergent history");
        return Ok(None);
    }

    let raw = runner
        .run(repo, &format!("git diff {}..{}", base, head))
        .await?;
    let files = classify(parse_diff(&raw));

    Ok(Some(PrInfo {
        id: 0,
        meta: PrMeta::default(),
        head: Commit { sha: head },
        base: Commit { sha: base },
        files,
    }))
}
