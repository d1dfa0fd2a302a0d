//! Best-effort version-control initialization.

use std::path::Path;
use std::process::Command;

/// Outcome of the optional `git init` step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GitStatus {
    Initialized,
    Skipped,
    Failed,
}

/// Run `git init` in the project root.
///
/// A missing git binary is a skip, any other failure is reported with
/// the captured output. Neither aborts the run.
pub fn git_init(project_root: &Path) -> GitStatus {
    if which::which("git").is_err() {
        eprintln!("  git init: SKIP (git not found in PATH)");
        return GitStatus::Skipped;
    }

    match Command::new("git")
        .arg("init")
        .current_dir(project_root)
        .output()
    {
        Ok(output) if output.status.success() => {
            eprintln!("  git init: OK");
            GitStatus::Initialized
        }
        Ok(output) => {
            eprintln!("  git init: FAILED");
            let stdout = String::from_utf8_lossy(&output.stdout);
            let stderr = String::from_utf8_lossy(&output.stderr);
            if !stdout.trim().is_empty() {
                eprintln!("{}", stdout.trim());
            }
            if !stderr.trim().is_empty() {
                eprintln!("{}", stderr.trim());
            }
            GitStatus::Failed
        }
        Err(e) => {
            eprintln!("  git init: FAILED ({})", e);
            GitStatus::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    #[test]
    fn test_git_init_never_aborts() {
        let tmp = TempDir::new().unwrap();
        let status = git_init(tmp.path());

        match status {
            GitStatus::Initialized => assert!(tmp.path().join(".git").exists()),
            // Machines without git still get a clean outcome.
            GitStatus::Skipped | GitStatus::Failed => {}
        }
    }
}
