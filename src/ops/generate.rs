//! Project generation: validate, materialize, post-steps.
//!
//! The pipeline runs strictly in order: assemble the link configuration,
//! check prerequisites (strict mode aborts here, before anything is
//! written), create the directory tree, copy dotfiles, write the
//! skeleton sources and build descriptors, then optionally `git init`.
//!
//! Directory creation is idempotent; file writes overwrite. A failure
//! partway through leaves a partially-materialized project on disk.

use std::path::PathBuf;

use anyhow::Result;
use serde::Serialize;

use crate::core::config::{assemble, LinkConfig, SdlPaths};
use crate::core::feature::FeatureSet;
use crate::core::project::ProjectDescriptor;
use crate::ops::check::{check_prerequisites, enforce, report_problems};
use crate::ops::dotfiles::copy_dotfiles;
use crate::ops::git::git_init;
use crate::templates;
use crate::util::fs::{ensure_dir, write_text};

/// Options for generating a project.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Project (and directory) name.
    pub name: String,

    /// Directory the project root is created under.
    pub out_dir: PathBuf,

    /// Which SDL libraries to wire up.
    pub feature: FeatureSet,

    /// Promote missing prerequisites to a fatal error.
    pub strict: bool,

    /// Run `git init` in the project root after generation.
    pub git: bool,

    /// Directory holding the auxiliary dotfiles.
    pub dotfiles_dir: PathBuf,
}

/// Generate the project described by `opts`.
pub fn generate(opts: &GenerateOptions, paths: &SdlPaths) -> Result<()> {
    let cfg = assemble(opts.feature, paths);

    // Validation runs before any write; strict mode aborts here.
    let problems = check_prerequisites(&cfg);
    report_problems("CHECK WARNINGS", &problems);
    enforce(&problems, opts.strict)?;

    let desc = ProjectDescriptor::new(&opts.name, &opts.out_dir, opts.feature, &cfg);
    tracing::debug!("project root: {}", desc.root.display());

    ensure_project_dirs(&desc)?;
    copy_dotfiles(&desc.root, &opts.dotfiles_dir, opts.strict)?;
    write_skeleton(&desc)?;
    write_descriptors(&desc)?;

    if opts.git {
        git_init(&desc.root);
    }

    eprintln!();
    eprintln!("Done.");
    eprintln!("Solution: {}", desc.solution_path().display());
    eprintln!("Project:  {}", desc.vcxproj_path().display());
    eprintln!("Full:     {}", opts.feature.is_extended());
    eprintln!("Git:      {}", opts.git);

    Ok(())
}

/// What a `generate` call would produce, without touching the filesystem.
#[derive(Debug, Serialize)]
pub struct GenerationPlan {
    pub project: ProjectDescriptor,
    pub config: LinkConfig,
    pub files: Vec<PathBuf>,
}

/// Assemble the generation plan and serialize it as pretty JSON.
pub fn plan(opts: &GenerateOptions, paths: &SdlPaths) -> Result<String> {
    let cfg = assemble(opts.feature, paths);
    let desc = ProjectDescriptor::new(&opts.name, &opts.out_dir, opts.feature, &cfg);
    let files = generated_files(&desc);

    let plan = GenerationPlan {
        project: desc,
        config: cfg,
        files,
    };
    Ok(serde_json::to_string_pretty(&plan)?)
}

/// Every file a generate run writes, in write order.
fn generated_files(desc: &ProjectDescriptor) -> Vec<PathBuf> {
    vec![
        desc.root.join("assets").join(".keep"),
        desc.root.join("include").join(&desc.name).join("app.h"),
        desc.root.join("src").join("app.cpp"),
        desc.root.join("src").join("main.cpp"),
        desc.solution_path(),
        desc.vcxproj_path(),
        desc.filters_path(),
    ]
}

fn ensure_project_dirs(desc: &ProjectDescriptor) -> Result<()> {
    ensure_dir(&desc.root.join("src"))?;
    ensure_dir(&desc.root.join("assets"))?;
    ensure_dir(&desc.root.join("include").join(&desc.name))?;

    // Placeholder so the assets folder survives version control.
    let keep = desc.root.join("assets").join(".keep");
    if !keep.exists() {
        write_text(&keep, "")?;
    }
    Ok(())
}

fn write_skeleton(desc: &ProjectDescriptor) -> Result<()> {
    let include_dir = desc.root.join("include").join(&desc.name);
    write_text(&include_dir.join("app.h"), templates::app_header())?;
    write_text(
        &desc.root.join("src").join("app.cpp"),
        &templates::render_app_source(&desc.name),
    )?;
    write_text(
        &desc.root.join("src").join("main.cpp"),
        &templates::render_main_source(&desc.name),
    )?;
    Ok(())
}

fn write_descriptors(desc: &ProjectDescriptor) -> Result<()> {
    write_text(&desc.solution_path(), &templates::render_solution(desc))?;
    write_text(&desc.vcxproj_path(), &templates::render_vcxproj(desc))?;
    write_text(&desc.filters_path(), &templates::render_filters(desc))?;
    Ok(())
}
