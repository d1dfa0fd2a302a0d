//! `slipway new` command

use anyhow::Result;

use crate::cli::NewArgs;
use slipway::core::feature::FeatureSet;
use slipway::ops::generate::{generate, plan, GenerateOptions};

pub fn execute(args: NewArgs) -> Result<()> {
    let feature = FeatureSet::from_full_flag(args.full);
    let paths = args.paths.to_paths();

    let opts = GenerateOptions {
        name: args.name.clone(),
        out_dir: args.out.clone(),
        feature,
        strict: args.strict,
        git: args.git,
        dotfiles_dir: args.dotfiles_dir.clone(),
    };

    if args.plan {
        println!("{}", plan(&opts, &paths)?);
        return Ok(());
    }

    generate(&opts, &paths)?;

    eprintln!("     Created project `{}`", args.name);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use clap::Parser;

    use crate::cli::NewArgs;
    use slipway::core::config::{DEFAULT_DOTFILES_DIR, DEFAULT_OUT_DIR};

    /// Helper to parse NewArgs from command-line strings.
    fn parse_new_args(args: &[&str]) -> NewArgs {
        #[derive(Parser)]
        struct TestCli {
            #[command(flatten)]
            new: NewArgs,
        }
        let cli = TestCli::parse_from(args);
        cli.new
    }

    #[test]
    fn test_new_args_defaults() {
        let args = parse_new_args(&["test", "Demo"]);

        assert_eq!(args.name, "Demo");
        assert_eq!(args.out, PathBuf::from(DEFAULT_OUT_DIR));
        assert_eq!(args.dotfiles_dir, PathBuf::from(DEFAULT_DOTFILES_DIR));
        assert!(!args.full);
        assert!(!args.git);
        assert!(!args.strict);
        assert!(!args.plan);
    }

    #[test]
    fn test_new_args_flags() {
        let args = parse_new_args(&["test", "Demo", "--full", "--git", "--strict", "--plan"]);

        assert!(args.full);
        assert!(args.git);
        assert!(args.strict);
        assert!(args.plan);
    }

    #[test]
    fn test_new_args_out_override() {
        let args = parse_new_args(&["test", "Demo", "--out", "/tmp/projects"]);
        assert_eq!(args.out, PathBuf::from("/tmp/projects"));
    }

    #[test]
    fn test_feature_selection_from_full_flag() {
        let base = parse_new_args(&["test", "Demo"]);
        assert_eq!(FeatureSet::from_full_flag(base.full), FeatureSet::Base);

        let full = parse_new_args(&["test", "Demo", "--full"]);
        assert_eq!(FeatureSet::from_full_flag(full.full), FeatureSet::Extended);
    }

    #[test]
    fn test_path_overrides_flow_into_table() {
        let args = parse_new_args(&[
            "test",
            "Demo",
            "--sdl2-include",
            "/opt/sdl2/include",
            "--sdl2-lib-dir",
            "/opt/sdl2/lib",
        ]);

        let paths = args.paths.to_paths();
        assert_eq!(paths.core.include, "/opt/sdl2/include");
        assert_eq!(paths.core.lib_dir, "/opt/sdl2/lib");
        // DLL dir follows the lib-dir override by default.
        assert_eq!(paths.core.dll_dir, "/opt/sdl2/lib");
    }

    #[test]
    fn test_dll_dir_override_wins_over_lib_dir() {
        let args = parse_new_args(&[
            "test",
            "Demo",
            "--sdl2-lib-dir",
            "/opt/sdl2/lib",
            "--sdl2-dll-dir",
            "/opt/sdl2/bin",
        ]);

        let paths = args.paths.to_paths();
        assert_eq!(paths.core.lib_dir, "/opt/sdl2/lib");
        assert_eq!(paths.core.dll_dir, "/opt/sdl2/bin");
    }
}
