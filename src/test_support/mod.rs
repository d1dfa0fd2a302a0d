//! Test fixtures for Slipway unit tests.
//!
//! This module is only available when compiling with `--cfg test` or
//! running tests. It fabricates on-disk SDL development trees and
//! dotfile directories inside temporary directories.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use crate::core::config::SdlPaths;
use crate::ops::dotfiles::DOTFILES;

/// Lay out a complete fake SDL tree under `tmp` and return paths to it.
///
/// Every component gets an include dir and a lib dir holding its import
/// library and a DLL; the core tree additionally carries `SDL2main.lib`.
pub fn fake_sdl_tree(tmp: &TempDir) -> SdlPaths {
    let mut paths = SdlPaths::default();

    for (slot, name, lib, dll) in [
        (&mut paths.core, "sdl2", "SDL2.lib", "SDL2.dll"),
        (
            &mut paths.image,
            "image",
            "SDL2_image.lib",
            "SDL2_image-2.8.2.dll",
        ),
        (&mut paths.ttf, "ttf", "SDL2_ttf.lib", "SDL2_ttf.dll"),
        (&mut paths.mixer, "mixer", "SDL2_mixer.lib", "SDL2_mixer.dll"),
    ] {
        let include = tmp.path().join(name).join("include");
        let lib_dir = tmp.path().join(name).join("lib");
        fs::create_dir_all(&include).unwrap();
        fs::create_dir_all(&lib_dir).unwrap();
        fs::write(lib_dir.join(lib), b"").unwrap();
        fs::write(lib_dir.join(dll), b"").unwrap();

        slot.include = include.to_string_lossy().into_owned();
        slot.lib_dir = lib_dir.to_string_lossy().into_owned();
        slot.dll_dir = slot.lib_dir.clone();
    }

    fs::write(
        tmp.path().join("sdl2").join("lib").join("SDL2main.lib"),
        b"",
    )
    .unwrap();

    paths
}

/// Create a directory containing every auxiliary dotfile.
pub fn fake_dotfiles_dir(tmp: &TempDir) -> PathBuf {
    let dir = tmp.path().join("dotfiles");
    fs::create_dir_all(&dir).unwrap();
    for fname in DOTFILES {
        fs::write(dir.join(fname), format!("# {}\n", fname)).unwrap();
    }
    dir
}
