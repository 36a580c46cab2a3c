use crate::error::CommandError;
use async_trait::async_trait;
use std::path::Path;
use tokio::process::Command;

/// Capability to run a shell command in a git working directory.
///
/// Command lines are handed to the shell verbatim. Callers interpolate branch
/// names and patterns directly into them, so unquoted metacharacters in refs
/// are a caller-owned hazard.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `command_line` in `cwd` and return trimmed stdout.
    async fn run(&self, cwd: &Path, command_line: &str) -> Result<String, CommandError>;
}

/// Production runner: spawns `sh -c <command_line>`.
pub struct ShellRunner;

#[async_trait]
impl CommandRunner for ShellRunner {
    async fn run(&self, cwd: &Path, command_line: &str) -> Result<String, CommandError> {
        let output = Command::new("sh")
            .arg("-c")
            .arg(command_line)
            .current_dir(cwd)
            .output()
            .await
            .map_err(CommandError::Io)?;

        if !output.status.success() {
            return Err(CommandError::NonZeroExit {
                code: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_run_returns_trimmed_stdout() {
        let dir = tempfile::tempdir().unwrap();
        let out = ShellRunner.run(dir.path(), "echo '  hello  '").await.unwrap();
        assert_eq!(out, "hello");
    }

    #[tokio::test]
    async fn test_run_in_working_directory() {
        let dir = tempfile::tempdir().unwrap();
        let out = ShellRunner.run(dir.path(), "pwd").await.unwrap();
        // macOS tempdirs resolve through /private; compare canonical paths
        assert_eq!(
            std::fs::canonicalize(&out).unwrap(),
            std::fs::canonicalize(dir.path()).unwrap()
        );
    }

    #[tokio::test]
    async fn test_non_zero_exit_carries_code_and_stderr() {
        let dir = tempfile::tempdir().unwrap();
        let err = ShellRunner
            .run(dir.path(), "echo boom >&2; exit 3")
            .await
            .unwrap_err();

        match err {
            CommandError::NonZeroExit { code, stderr } => {
                assert_eq!(code, 3);
                assert!(stderr.contains("boom"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
