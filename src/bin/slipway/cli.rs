//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use slipway::core::config::{SdlPaths, DEFAULT_DOTFILES_DIR, DEFAULT_OUT_DIR};

/// Slipway - A Visual Studio 2022 project scaffolder for SDL2 applications
#[derive(Parser)]
#[command(name = "slipway")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scaffold a new VS2022 SDL2 project
    New(NewArgs),

    /// Check the configured SDL directories and required libraries
    Check(CheckArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Per-library directory overrides.
///
/// Every directory defaults to the stock SDL development-tree layout;
/// DLL directories default to the corresponding lib directory.
#[derive(Args, Default)]
pub struct SdlPathArgs {
    /// SDL2 include directory
    #[arg(long, value_name = "DIR")]
    pub sdl2_include: Option<String>,

    /// SDL2 import-library directory
    #[arg(long, value_name = "DIR")]
    pub sdl2_lib_dir: Option<String>,

    /// SDL2 runtime-library directory
    #[arg(long, value_name = "DIR")]
    pub sdl2_dll_dir: Option<String>,

    /// SDL2_image include directory
    #[arg(long, value_name = "DIR")]
    pub image_include: Option<String>,

    /// SDL2_image import-library directory
    #[arg(long, value_name = "DIR")]
    pub image_lib_dir: Option<String>,

    /// SDL2_image runtime-library directory
    #[arg(long, value_name = "DIR")]
    pub image_dll_dir: Option<String>,

    /// SDL2_ttf include directory
    #[arg(long, value_name = "DIR")]
    pub ttf_include: Option<String>,

    /// SDL2_ttf import-library directory
    #[arg(long, value_name = "DIR")]
    pub ttf_lib_dir: Option<String>,

    /// SDL2_ttf runtime-library directory
    #[arg(long, value_name = "DIR")]
    pub ttf_dll_dir: Option<String>,

    /// SDL2_mixer include directory
    #[arg(long, value_name = "DIR")]
    pub mixer_include: Option<String>,

    /// SDL2_mixer import-library directory
    #[arg(long, value_name = "DIR")]
    pub mixer_lib_dir: Option<String>,

    /// SDL2_mixer runtime-library directory
    #[arg(long, value_name = "DIR")]
    pub mixer_dll_dir: Option<String>,
}

impl SdlPathArgs {
    /// Apply the overrides on top of the default path table.
    pub fn to_paths(&self) -> SdlPaths {
        fn set(dst: &mut String, src: &Option<String>) {
            if let Some(s) = src {
                *dst = s.clone();
            }
        }

        let mut paths = SdlPaths::default();

        set(&mut paths.core.include, &self.sdl2_include);
        set(&mut paths.core.lib_dir, &self.sdl2_lib_dir);
        // A lib-dir override moves the DLL dir with it unless the DLL
        // dir is overridden separately.
        set(&mut paths.core.dll_dir, &self.sdl2_lib_dir);
        set(&mut paths.core.dll_dir, &self.sdl2_dll_dir);

        set(&mut paths.image.include, &self.image_include);
        set(&mut paths.image.lib_dir, &self.image_lib_dir);
        set(&mut paths.image.dll_dir, &self.image_lib_dir);
        set(&mut paths.image.dll_dir, &self.image_dll_dir);

        set(&mut paths.ttf.include, &self.ttf_include);
        set(&mut paths.ttf.lib_dir, &self.ttf_lib_dir);
        set(&mut paths.ttf.dll_dir, &self.ttf_lib_dir);
        set(&mut paths.ttf.dll_dir, &self.ttf_dll_dir);

        set(&mut paths.mixer.include, &self.mixer_include);
        set(&mut paths.mixer.lib_dir, &self.mixer_lib_dir);
        set(&mut paths.mixer.dll_dir, &self.mixer_lib_dir);
        set(&mut paths.mixer.dll_dir, &self.mixer_dll_dir);

        paths
    }
}

#[derive(Args)]
pub struct NewArgs {
    /// Project name (and directory)
    pub name: String,

    /// Directory the project root is created under
    #[arg(long, default_value = DEFAULT_OUT_DIR, value_name = "DIR")]
    pub out: PathBuf,

    /// Also wire up SDL2_ttf and SDL2_mixer
    #[arg(long)]
    pub full: bool,

    /// Run `git init` in the project root after generation
    #[arg(long)]
    pub git: bool,

    /// Treat missing prerequisites as fatal
    #[arg(long)]
    pub strict: bool,

    /// Directory holding the auxiliary dotfiles
    #[arg(long, default_value = DEFAULT_DOTFILES_DIR, value_name = "DIR")]
    pub dotfiles_dir: PathBuf,

    /// Print the generation plan as JSON and exit without writing
    #[arg(long)]
    pub plan: bool,

    #[command(flatten)]
    pub paths: SdlPathArgs,
}

#[derive(Args)]
pub struct CheckArgs {
    /// Also check the SDL2_ttf and SDL2_mixer trees
    #[arg(long)]
    pub full: bool,

    #[command(flatten)]
    pub paths: SdlPathArgs,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
