//! SDL search paths and link-configuration assembly.
//!
//! `assemble` is the single source of truth for which directories the
//! generated project searches, which `.lib` files it links, and which
//! files must exist for the build to succeed. It is a pure function of
//! the feature set and the path table; the prerequisite checker and the
//! build-descriptor templates both consume its output.

use serde::Serialize;

use crate::core::feature::FeatureSet;
use crate::util::fs::msbuild_path;

/// Default output directory for new projects.
pub const DEFAULT_OUT_DIR: &str = r"D:\Code\Again";

/// Default directory holding the auxiliary dotfiles copied into new projects.
pub const DEFAULT_DOTFILES_DIR: &str = r"D:\Code\SDL_Dev\dotFiles";

const SDL2_INCLUDE: &str = r"D:\Code\SDL_Dev\SDL2-2.30.0\include";
const SDL2_LIB_X64: &str = r"D:\Code\SDL_Dev\SDL2-2.30.0\lib\x64";

const SDL2_IMAGE_INCLUDE: &str = r"D:\Code\SDL_Dev\SDL2_image-2.8.2\include";
const SDL2_IMAGE_LIB_X64: &str = r"D:\Code\SDL_Dev\SDL2_image-2.8.2\lib\x64";

const SDL2_TTF_INCLUDE: &str = r"D:\Code\SDL_Dev\SDL2_ttf-2.22.0\include";
const SDL2_TTF_LIB_X64: &str = r"D:\Code\SDL_Dev\SDL2_ttf-2.22.0\lib\x64";

const SDL2_MIXER_INCLUDE: &str = r"D:\Code\SDL_Dev\SDL2_mixer-2.8.0\include";
const SDL2_MIXER_LIB_X64: &str = r"D:\Code\SDL_Dev\SDL2_mixer-2.8.0\lib\x64";

/// Directories for one SDL component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LibraryPaths {
    /// Header include directory.
    pub include: String,

    /// Import-library (`.lib`) directory.
    pub lib_dir: String,

    /// Runtime-library (`.dll`) directory.
    pub dll_dir: String,
}

impl LibraryPaths {
    fn new(include: &str, lib_dir: &str) -> Self {
        // DLLs ship in lib\x64 alongside the import libraries
        LibraryPaths {
            include: include.to_string(),
            lib_dir: lib_dir.to_string(),
            dll_dir: lib_dir.to_string(),
        }
    }
}

/// Directory table for every supported SDL component.
///
/// Each field starts from the stock development-tree layout and can be
/// overridden per component from the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SdlPaths {
    pub core: LibraryPaths,
    pub image: LibraryPaths,
    pub ttf: LibraryPaths,
    pub mixer: LibraryPaths,
}

impl Default for SdlPaths {
    fn default() -> Self {
        SdlPaths {
            core: LibraryPaths::new(SDL2_INCLUDE, SDL2_LIB_X64),
            image: LibraryPaths::new(SDL2_IMAGE_INCLUDE, SDL2_IMAGE_LIB_X64),
            ttf: LibraryPaths::new(SDL2_TTF_INCLUDE, SDL2_TTF_LIB_X64),
            mixer: LibraryPaths::new(SDL2_MIXER_INCLUDE, SDL2_MIXER_LIB_X64),
        }
    }
}

/// The assembled link configuration for one invocation.
///
/// List order is declaration order: base entries first, extended entries
/// appended after. Nothing is deduplicated or reordered; the templates
/// rely on this ordering being stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkConfig {
    /// Header include directories, one per enabled component.
    pub includes: Vec<String>,

    /// Import-library search directories.
    pub lib_dirs: Vec<String>,

    /// Runtime-library directories feeding the post-build copy step.
    pub dll_dirs: Vec<String>,

    /// Import-library names passed to the linker.
    pub libs: Vec<String>,

    /// `(directory, filename)` pairs that must exist as files.
    pub expected_libs: Vec<(String, String)>,

    /// `(directory, glob pattern)` pairs; each pattern must match at
    /// least one file when its directory exists.
    pub expected_dlls: Vec<(String, String)>,

    /// `;`-joined wildcard sources for the MSBuild `<Copy>` item group.
    pub dll_globs: String,
}

/// Assemble the link configuration for the given feature set.
///
/// Pure: no filesystem access, identical output for identical input.
pub fn assemble(feature: FeatureSet, paths: &SdlPaths) -> LinkConfig {
    let mut includes = vec![paths.core.include.clone(), paths.image.include.clone()];
    let mut lib_dirs = vec![paths.core.lib_dir.clone(), paths.image.lib_dir.clone()];
    let mut dll_dirs = vec![paths.core.dll_dir.clone(), paths.image.dll_dir.clone()];

    // SDL2main.lib sits beside SDL2.lib, so it is linked but not
    // separately checked.
    let mut libs = vec![
        "SDL2.lib".to_string(),
        "SDL2main.lib".to_string(),
        "SDL2_image.lib".to_string(),
    ];

    let mut expected_libs = vec![
        (paths.core.lib_dir.clone(), "SDL2.lib".to_string()),
        (paths.image.lib_dir.clone(), "SDL2_image.lib".to_string()),
    ];

    let mut expected_dlls = vec![
        (paths.core.dll_dir.clone(), "SDL2.dll".to_string()),
        (paths.image.dll_dir.clone(), "SDL2_image*.dll".to_string()),
    ];

    if feature.is_extended() {
        includes.push(paths.ttf.include.clone());
        includes.push(paths.mixer.include.clone());
        lib_dirs.push(paths.ttf.lib_dir.clone());
        lib_dirs.push(paths.mixer.lib_dir.clone());
        dll_dirs.push(paths.ttf.dll_dir.clone());
        dll_dirs.push(paths.mixer.dll_dir.clone());

        libs.push("SDL2_ttf.lib".to_string());
        libs.push("SDL2_mixer.lib".to_string());

        expected_libs.push((paths.ttf.lib_dir.clone(), "SDL2_ttf.lib".to_string()));
        expected_libs.push((paths.mixer.lib_dir.clone(), "SDL2_mixer.lib".to_string()));

        expected_dlls.push((paths.ttf.dll_dir.clone(), "SDL2_ttf*.dll".to_string()));
        expected_dlls.push((paths.mixer.dll_dir.clone(), "SDL2_mixer*.dll".to_string()));
    }

    let dll_globs = dll_dirs
        .iter()
        .map(|d| format!(r"{}\*.dll", msbuild_path(d)))
        .collect::<Vec<_>>()
        .join(";");

    LinkConfig {
        includes,
        lib_dirs,
        dll_dirs,
        libs,
        expected_libs,
        expected_dlls,
        dll_globs,
    }
}
