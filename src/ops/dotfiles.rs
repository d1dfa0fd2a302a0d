//! Copying auxiliary dotfiles into the project root.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::ops::check::{report_problems, ProblemList};

/// Auxiliary files copied verbatim into every new project.
pub const DOTFILES: &[&str] = &[".clang-format", ".editorconfig", ".gitignore", "readme.md"];

/// Copy the fixed dotfile set from `dotfiles_dir` into `project_root`.
///
/// Files that exist are copied even when others are missing; there is
/// no rollback. Missing sources are collected and reported, fatal only
/// in strict mode.
pub fn copy_dotfiles(project_root: &Path, dotfiles_dir: &Path, strict: bool) -> Result<()> {
    let mut problems = ProblemList::new();

    for fname in DOTFILES {
        let src = dotfiles_dir.join(fname);
        let dst = project_root.join(fname);

        if !src.exists() {
            problems.push(format!("[dotfile] missing: {}", src.display()));
            continue;
        }

        fs::copy(&src, &dst).with_context(|| {
            format!("failed to copy {} to {}", src.display(), dst.display())
        })?;
        eprintln!("  copied {} -> {}", src.display(), dst.display());
    }

    report_problems("DOTFILES WARNINGS", &problems);

    if strict && !problems.is_empty() {
        bail!(
            "missing dotfiles ({} file(s)); aborting due to --strict",
            problems.len()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    use crate::test_support::fake_dotfiles_dir;

    #[test]
    fn test_copies_all_dotfiles() {
        let tmp = TempDir::new().unwrap();
        let src = fake_dotfiles_dir(&tmp);
        let root = tmp.path().join("proj");
        fs::create_dir(&root).unwrap();

        copy_dotfiles(&root, &src, false).unwrap();

        for fname in DOTFILES {
            assert!(root.join(fname).exists(), "missing {}", fname);
        }
    }

    #[test]
    fn test_partial_copy_without_strict() {
        let tmp = TempDir::new().unwrap();
        let src = fake_dotfiles_dir(&tmp);
        fs::remove_file(src.join("readme.md")).unwrap();

        let root = tmp.path().join("proj");
        fs::create_dir(&root).unwrap();

        copy_dotfiles(&root, &src, false).unwrap();

        // Present files still copied despite the missing one.
        assert!(root.join(".gitignore").exists());
        assert!(!root.join("readme.md").exists());
    }

    #[test]
    fn test_missing_dotfile_is_fatal_in_strict_mode() {
        let tmp = TempDir::new().unwrap();
        let src = fake_dotfiles_dir(&tmp);
        fs::remove_file(src.join(".clang-format")).unwrap();

        let root = tmp.path().join("proj");
        fs::create_dir(&root).unwrap();

        let err = copy_dotfiles(&root, &src, true).unwrap_err();
        assert!(err.to_string().contains("missing dotfiles"));
    }
}
