//! Slipway - A Visual Studio 2022 project scaffolder for SDL2 applications
//!
//! This crate provides the core library functionality for Slipway:
//! link-configuration assembly, prerequisite checking, and project
//! materialization (skeleton sources plus MSBuild build descriptors).

pub mod core;
pub mod ops;
pub mod templates;
pub mod util;

/// Test fixtures for Slipway unit tests.
///
/// This module is only available when compiling with `--cfg test` or
/// running tests. It fabricates SDL development trees and dotfile
/// directories inside temporary directories.
#[cfg(test)]
pub mod test_support;

pub use crate::core::{
    config::{assemble, LinkConfig, SdlPaths},
    feature::FeatureSet,
    project::ProjectDescriptor,
};

pub use crate::ops::check::ProblemList;
