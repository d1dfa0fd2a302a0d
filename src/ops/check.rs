//! Prerequisite checks for the configured SDL installation.
//!
//! Checks are total: every configured directory, import library, and
//! DLL pattern is evaluated and every miss is collected before the
//! pass/fail decision. The default policy is warn-and-continue; strict
//! mode promotes a non-empty problem list to a fatal error.

use std::fs;
use std::path::Path;

use glob::Pattern;
use thiserror::Error;

use crate::core::config::LinkConfig;

/// Fatal error raised when strict mode is on and prerequisites are missing.
#[derive(Debug, Error)]
#[error("missing required files/dirs ({count} problem(s)); aborting due to --strict")]
pub struct MissingPrerequisites {
    pub count: usize,
}

/// Ordered list of human-readable validation problems.
///
/// Additive during one validation pass, read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProblemList {
    problems: Vec<String>,
}

impl ProblemList {
    pub fn new() -> Self {
        ProblemList::default()
    }

    pub fn push(&mut self, msg: impl Into<String>) {
        self.problems.push(msg.into());
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    pub fn len(&self) -> usize {
        self.problems.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.problems.iter().map(String::as_str)
    }
}

/// Check every configured directory and required library file.
///
/// DLL patterns are only evaluated when their directory exists; a
/// missing directory is already reported by the directory check.
pub fn check_prerequisites(cfg: &LinkConfig) -> ProblemList {
    let mut problems = ProblemList::new();

    for p in &cfg.includes {
        if !Path::new(p).exists() {
            problems.push(format!("[dir] include not found: {}", p));
        }
    }
    for p in &cfg.lib_dirs {
        if !Path::new(p).exists() {
            problems.push(format!("[dir] lib not found: {}", p));
        }
    }
    for p in &cfg.dll_dirs {
        if !Path::new(p).exists() {
            problems.push(format!("[dir] dll not found: {}", p));
        }
    }

    for (base, fname) in &cfg.expected_libs {
        if !Path::new(base).join(fname).exists() {
            problems.push(format!("[lib] {} not found in: {}", fname, base));
        }
    }

    for (base, pattern) in &cfg.expected_dlls {
        let dir = Path::new(base);
        if dir.exists() && !dir_has_match(dir, pattern) {
            problems.push(format!("[dll] {} not found in: {}", pattern, base));
        }
    }

    problems
}

fn dir_has_match(dir: &Path, pattern: &str) -> bool {
    let pat = match Pattern::new(pattern) {
        Ok(pat) => pat,
        Err(e) => {
            tracing::warn!("invalid dll pattern `{}`: {}", pattern, e);
            return false;
        }
    };

    match fs::read_dir(dir) {
        Ok(entries) => entries
            .filter_map(|e| e.ok())
            .any(|e| pat.matches(&e.file_name().to_string_lossy())),
        Err(_) => false,
    }
}

/// Print a delimited warning block listing every problem, in order.
pub fn report_problems(header: &str, problems: &ProblemList) {
    if problems.is_empty() {
        return;
    }

    eprintln!();
    eprintln!("=== {} ===", header);
    for msg in problems.iter() {
        eprintln!(" - {}", msg);
    }
    eprintln!("{}", "=".repeat(header.len() + 8));
    eprintln!();
}

/// Apply the strict-mode policy to a collected problem list.
pub fn enforce(problems: &ProblemList, strict: bool) -> Result<(), MissingPrerequisites> {
    if strict && !problems.is_empty() {
        return Err(MissingPrerequisites {
            count: problems.len(),
        });
    }
    Ok(())
}
