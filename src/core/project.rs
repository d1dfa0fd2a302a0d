//! The immutable project descriptor.

use std::path::{Path, PathBuf};

use serde::Serialize;
use uuid::Uuid;

use crate::core::config::LinkConfig;
use crate::core::feature::FeatureSet;
use crate::util::fs::msbuild_path;

/// GUIDs substituted into the generated build descriptors.
///
/// Derived (v5, name-based) from the project name so regenerating a
/// project produces byte-identical output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectGuids {
    pub solution: String,
    pub project: String,
    pub source_filter: String,
    pub header_filter: String,
    pub asset_filter: String,
}

impl ProjectGuids {
    /// Derive the full GUID set for a project name.
    pub fn derive(name: &str) -> Self {
        ProjectGuids {
            solution: guid_for(name, "solution"),
            project: guid_for(name, "project"),
            source_filter: guid_for(name, "filter:source"),
            header_filter: guid_for(name, "filter:header"),
            asset_filter: guid_for(name, "filter:asset"),
        }
    }
}

fn guid_for(name: &str, role: &str) -> String {
    let seed = format!("slipway:{}:{}", name, role);
    Uuid::new_v5(&Uuid::NAMESPACE_OID, seed.as_bytes())
        .to_string()
        .to_uppercase()
}

/// Everything the materializer needs, assembled once and then only read.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectDescriptor {
    /// Project (and directory) name.
    pub name: String,

    /// Project root: `<out-dir>/<name>`.
    pub root: PathBuf,

    /// Selected feature set.
    pub feature: FeatureSet,

    /// `;`-joined include directories, MSBuild-style separators.
    pub includes: String,

    /// `;`-joined library search directories.
    pub lib_dirs: String,

    /// `;`-joined import-library names.
    pub libs: String,

    /// Wildcard sources for the post-build DLL copy step.
    pub dll_globs: String,

    /// Deterministic GUID set.
    pub guids: ProjectGuids,
}

impl ProjectDescriptor {
    /// Build the descriptor from invocation input and an assembled config.
    pub fn new(name: &str, out_dir: &Path, feature: FeatureSet, cfg: &LinkConfig) -> Self {
        let join = |items: &[String]| {
            items
                .iter()
                .map(|p| msbuild_path(p))
                .collect::<Vec<_>>()
                .join(";")
        };

        ProjectDescriptor {
            name: name.to_string(),
            root: out_dir.join(name),
            feature,
            includes: join(&cfg.includes),
            lib_dirs: join(&cfg.lib_dirs),
            libs: cfg.libs.join(";"),
            dll_globs: cfg.dll_globs.clone(),
            guids: ProjectGuids::derive(name),
        }
    }

    pub fn solution_path(&self) -> PathBuf {
        self.root.join(format!("{}.sln", self.name))
    }

    pub fn vcxproj_path(&self) -> PathBuf {
        self.root.join(format!("{}.vcxproj", self.name))
    }

    pub fn filters_path(&self) -> PathBuf {
        self.root.join(format!("{}.vcxproj.filters", self.name))
    }
}
