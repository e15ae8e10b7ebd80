// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! Build script for `sdl3-sys` FFI crate.
//!
//! This script:
//! 1. Locates the SDL3 headers (`SDL3_INCLUDE_DIR`, `pkg-config`, then the
//!    usual system include directories)
//! 2. Generates Rust FFI bindings using `bindgen`
//! 3. Configures dynamic library loading via `libloading`
//!
//! When the headers cannot be found, or the `bundled-bindings` feature is set,
//! the declarations in `src/bindings.rs` are used instead.

use bindgen::callbacks::ParseCallbacks;
use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Environment variable pointing at the directory that contains `SDL3/SDL.h`.
const INCLUDE_DIR_ENV: &str = "SDL3_INCLUDE_DIR";

/// Include directories searched after the explicit ones.
const SYSTEM_INCLUDE_DIRS: &[&str] = &["/usr/local/include", "/usr/include", "/opt/homebrew/include"];

/// Functions wrapped by the `sdl3` crate.
const FUNCTIONS: &[&str] = &[
    "SDL_Init",
    "SDL_Quit",
    "SDL_GetError",
    "SDL_ClearError",
    "SDL_free",
    "SDL_GetVersion",
    "SDL_GetRevision",
    "SDL_GetPlatform",
    "SDL_Delay",
    "SDL_GetTicks",
    "SDL_SetHint",
    "SDL_GetHint",
    "SDL_SetClipboardText",
    "SDL_GetClipboardText",
    "SDL_HasClipboardText",
    "SDL_GetBasePath",
    "SDL_GetPrefPath",
    "SDL_CreateWindow",
    "SDL_DestroyWindow",
    "SDL_GetWindowID",
    "SDL_SetWindowTitle",
    "SDL_GetWindowTitle",
    "SDL_GetWindowSize",
    "SDL_ShowWindow",
    "SDL_ShowSimpleMessageBox",
    "SDL_GetNumRenderDrivers",
    "SDL_GetRenderDriver",
    "SDL_CreateRenderer",
    "SDL_DestroyRenderer",
    "SDL_GetRendererName",
    "SDL_SetRenderDrawColor",
    "SDL_RenderClear",
    "SDL_RenderFillRect",
    "SDL_RenderRect",
    "SDL_RenderLine",
    "SDL_RenderPoint",
    "SDL_RenderDebugText",
    "SDL_RenderPresent",
    "SDL_PollEvent",
];

/// Constants and macros exported alongside the functions.
const VARS: &[&str] = &[
    "SDL_INIT_.*",
    "SDL_MESSAGEBOX_(ERROR|WARNING|INFORMATION)",
    "SDL_EVENT_.*",
    "SDLK_(RETURN|ESCAPE|SPACE)",
    "SDL_HINT_(APP_NAME|RENDER_VSYNC|VIDEO_DRIVER)",
    "SDL_DEBUG_TEXT_FONT_CHARACTER_SIZE",
];

/// Types not reachable from the function signatures.
const TYPES: &[&str] = &["SDL_FPoint", "SDL_EventType"];

/// Finds the include directories to pass to clang.
///
/// Returns `None` when no `SDL3/SDL.h` is reachable. An empty list means the
/// headers live in a directory clang already searches.
fn find_include_dirs() -> Option<Vec<PathBuf>> {
    println!("cargo:rerun-if-env-changed={INCLUDE_DIR_ENV}");
    let has_header = |dir: &Path| dir.join("SDL3").join("SDL.h").is_file();

    if let Some(dir) = env::var_os(INCLUDE_DIR_ENV).filter(|dir| !dir.is_empty()) {
        let dir = PathBuf::from(dir);
        return has_header(&dir).then(|| vec![dir]);
    }

    // pkg-config leaves out directories the compiler searches by default.
    if let Ok(output) = Command::new("pkg-config")
        .args(["--cflags-only-I", "sdl3"])
        .output()
        && output.status.success()
    {
        let dirs: Vec<PathBuf> = String::from_utf8_lossy(&output.stdout)
            .split_whitespace()
            .filter_map(|flag| flag.strip_prefix("-I"))
            .map(PathBuf::from)
            .collect();
        if dirs.iter().any(|dir| has_header(dir)) {
            return Some(dirs);
        }
    }

    SYSTEM_INCLUDE_DIRS
        .iter()
        .map(PathBuf::from)
        .find(|dir| has_header(dir))
        .map(|dir| vec![dir])
}

/// Main build entry point.
fn main() {
    println!("cargo::rustc-check-cfg=cfg(bundled_bindings)");
    println!("cargo:rerun-if-changed=wrapper.h");

    let include_dirs = if cfg!(feature = "bundled-bindings") {
        None
    } else {
        let dirs = find_include_dirs();
        if dirs.is_none() {
            println!(
                "cargo:warning=SDL3 headers not found (set {INCLUDE_DIR_ENV}), using bundled bindings"
            );
        }
        dirs
    };

    let Some(include_dirs) = include_dirs else {
        println!("cargo:rustc-cfg=bundled_bindings");
        return;
    };

    // Emit include directories for downstream crates
    for include_dir in &include_dirs {
        println!("cargo:include={}", include_dir.display());
    }

    // Generate Rust FFI bindings from C headers
    let mut builder = bindgen::builder()
        .clang_args(include_dirs.iter().map(|dir| format!("-I{}", dir.display())))
        .header("wrapper.h")
        .derive_default(true)
        .derive_debug(true)
        .impl_debug(true)
        .prepend_enum_name(false)
        .dynamic_library_name("Sdl3Lib")
        .dynamic_link_require_all(true)
        .parse_callbacks(Box::new(CB));
    for function in FUNCTIONS {
        builder = builder.allowlist_function(function);
    }
    for var in VARS {
        builder = builder.allowlist_var(var);
    }
    for ty in TYPES {
        builder = builder.allowlist_type(ty);
    }
    let bindings = builder.generate().unwrap();

    let out_path = PathBuf::from(env::var("OUT_DIR").unwrap());
    bindings
        .write_to_file(out_path.join("bindings.rs"))
        .expect("Could not write bindings");
}

/// Custom bindgen callback for name transformations.
#[derive(Debug)]
struct CB;

impl ParseCallbacks for CB {
    /// Transforms C names to idiomatic Rust names.
    ///
    /// - Functions: `SDL_GetWindowID` → `get_window_id`
    /// - Types: `SDL_WindowEvent` → `WindowEvent`
    fn item_name(&self, item_info: bindgen::callbacks::ItemInfo) -> Option<String> {
        let name = item_info.name.strip_prefix("SDL_")?;
        match item_info.kind {
            bindgen::callbacks::ItemKind::Function => Some(to_snake_case(name)),

            bindgen::callbacks::ItemKind::Type => Some(name.to_string()),

            _ => None,
        }
    }
}

/// Converts CamelCase to snake_case for function names.
///
/// Runs of capitals stay together: `GetWindowID` → `get_window_id`.
fn to_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::new();

    for (index, &c) in chars.iter().enumerate() {
        if c.is_uppercase() {
            if index > 0 {
                let previous = chars[index - 1];
                let next_is_lower = chars.get(index + 1).is_some_and(|next| next.is_lowercase());
                if previous.is_lowercase()
                    || previous.is_ascii_digit()
                    || (previous.is_uppercase() && next_is_lower)
                {
                    out.push('_');
                }
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }

    out
}
