/// One file's change extracted from a unified diff.
///
/// The variants are mutually exclusive by construction; a rename carries both
/// sides of the move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileChange {
    Added { path: String },
    Deleted { path: String },
    Renamed { from: String, to: String },
    Modified { path: String },
}

#[derive(Default)]
struct FileBlock {
    old_path: Option<String>,
    new_path: Option<String>,
    is_new: bool,
    is_deleted: bool,
    is_rename: bool,
}

impl FileBlock {
    fn finish(self) -> Option<FileChange> {
        if self.is_rename {
            if let (Some(from), Some(to)) = (self.old_path.clone(), self.new_path.clone()) {
                return Some(FileChange::Renamed { from, to });
            }
        }

        if self.is_new {
            let path = self.new_path.or(self.old_path)?;
            Some(FileChange::Added { path })
        } else if self.is_deleted {
            let path = self.old_path.or(self.new_path)?;
            Some(FileChange::Deleted { path })
        } else {
            let path = self.new_path.or(self.old_path)?;
            Some(FileChange::Modified { path })
        }
    }
}

/// Parse raw `git diff` output into ordered per-file changes.
///
/// Only extended header lines are interpreted; everything between the first
/// `@@` hunk marker and the next `diff --git` is skipped, so hunk content
/// that happens to start with `---`/`+++` cannot be misread as a header.
pub fn parse_diff(raw: &str) -> Vec<FileChange> {
    let mut changes = Vec::new();
    let mut current: Option<FileBlock> = None;
    let mut in_hunk = false;

    for line in raw.lines() {
        if let Some(rest) = line.strip_prefix("diff --git ") {
            if let Some(block) = current.take() {
                changes.extend(block.finish());
            }
            let (old_path, new_path) = parse_git_header_paths(rest);
            current = Some(FileBlock {
                old_path,
                new_path,
                ..FileBlock::default()
            });
            in_hunk = false;
            continue;
        }

        let Some(block) = current.as_mut() else {
            continue;
        };

        if in_hunk {
            continue;
        }
        if line.starts_with("@@") {
            in_hunk = true;
            continue;
        }

        if line.starts_with("new file mode") {
            block.is_new = true;
        } else if line.starts_with("deleted file mode") {
            block.is_deleted = true;
        } else if let Some(from) = line.strip_prefix("rename from ") {
            block.is_rename = true;
            block.old_path = Some(from.to_string());
        } else if let Some(to) = line.strip_prefix("rename to ") {
            block.is_rename = true;
            block.new_path = Some(to.to_string());
        } else if let Some(old) = line.strip_prefix("--- ") {
            if old != "/dev/null" {
                block.old_path = Some(strip_side_prefix(old, "a/"));
            }
        } else if let Some(new) = line.strip_prefix("+++ ") {
            if new != "/dev/null" {
                block.new_path = Some(strip_side_prefix(new, "b/"));
            }
        }
    }

    if let Some(block) = current.take() {
        changes.extend(block.finish());
    }

    changes
}

/// Split the `a/<old> b/<new>` tail of a `diff --git` line.
///
/// Ambiguous when a path itself contains ` b/`; the `---`/`+++` lines refine
/// the result for text files, and binary blocks almost never hit the case.
fn parse_git_header_paths(rest: &str) -> (Option<String>, Option<String>) {
    if let Some((left, right)) = rest.split_once(" b/") {
        let old = left.strip_prefix("a/").map(str::to_string);
        return (old, Some(right.to_string()));
    }
    (None, None)
}

fn strip_side_prefix(path: &str, prefix: &str) -> String {
    let path = path.trim_end_matches('\t');
    path.strip_prefix(prefix).unwrap_or(path).to_string()
}
