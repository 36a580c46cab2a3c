mod parser;

pub use parser::{parse_diff, FileChange};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Disjoint file sets describing a diff, shaped like a real PR's file list.
///
/// A path appears in at most one set; a rename contributes its old path to
/// `removed` and its new path to `added`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct FileStatuses {
    pub added: Vec<String>,
    pub changed: Vec<String>,
    pub removed: Vec<String>,
}

/// Classify parsed diff entries into added/changed/removed sets.
pub fn classify(changes: Vec<FileChange>) -> FileStatuses {
    let mut statuses = FileStatuses::default();

    for change in changes {
        match change {
            FileChange::Added { path } => statuses.added.push(path),
            FileChange::Deleted { path } => statuses.removed.push(path),
            FileChange::Renamed { from, to } => {
                // Renamed content is delete+create for downstream consumers
                statuses.removed.push(from);
                statuses.added.push(to);
            }
            FileChange::Modified { path } => statuses.changed.push(path),
        }
    }

    statuses
}
