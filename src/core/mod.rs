//! Core data structures for Slipway.
//!
//! This module contains the foundational types used throughout Slipway:
//! - Feature-set selection (base vs. extended SDL libraries)
//! - Per-library search paths and the assembled link configuration
//! - The immutable project descriptor consumed by generation

pub mod config;
pub mod feature;
pub mod project;

pub use config::{assemble, LinkConfig, SdlPaths};
pub use feature::FeatureSet;
pub use project::ProjectDescriptor;
