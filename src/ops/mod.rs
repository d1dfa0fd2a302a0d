//! High-level operations.
//!
//! This module contains the implementation of Slipway commands.

pub mod check;
pub mod dotfiles;
pub mod generate;
pub mod git;

pub use check::{check_prerequisites, enforce, report_problems, MissingPrerequisites, ProblemList};
pub use dotfiles::{copy_dotfiles, DOTFILES};
pub use generate::{generate, plan, GenerateOptions, GenerationPlan};
pub use git::{git_init, GitStatus};
