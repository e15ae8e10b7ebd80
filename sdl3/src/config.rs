// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! Runtime configuration and library path resolution.
//!
//! This module locates the SDL3 shared library and describes how a context is
//! set up ([`SdlConfig`]): which subsystems to initialize, which hints to apply
//! beforehand and how large the string staging buffer is.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::{DEFAULT_CAPACITY, Error, InitFlags, Result};

/// Environment variable overriding the SDL3 library location.
pub const LIBRARY_PATH_ENV: &str = "SDL3_LIBRARY_PATH";

/// File name of the SDL3 shared library on the target platform.
pub fn default_library_name() -> &'static str {
    if cfg!(target_os = "windows") {
        "SDL3.dll"
    } else if cfg!(target_os = "macos") {
        "libSDL3.dylib"
    } else {
        "libSDL3.so.0"
    }
}

/// Returns the path of the SDL3 shared library to load.
///
/// Uses `SDL3_LIBRARY_PATH` when set, otherwise the platform's library name,
/// which the dynamic loader resolves through its usual search path.
///
/// # Examples
///
/// ```no_run
/// use sdl3::config::get_sdl_library_path;
/// use sdl3::load_api;
///
/// # fn main() -> Result<(), sdl3::Error> {
/// let api = load_api(get_sdl_library_path())?;
/// # Ok(())
/// # }
/// ```
pub fn get_sdl_library_path() -> PathBuf {
    std::env::var_os(LIBRARY_PATH_ENV)
        .filter(|path| !path.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| default_library_name().into())
}

/// Settings used by [`crate::Sdl::with_config`].
///
/// Every field has a default, so an empty JSON object is a valid configuration.
///
/// ```json
/// {
///     "library_path": "/opt/sdl3/lib/libSDL3.so.0",
///     "subsystems": ["video", "audio"],
///     "string_buffer_capacity": 8192,
///     "hints": { "SDL_RENDER_VSYNC": "1" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SdlConfig {
    /// Library to load, see [`SdlConfig::library_path`].
    pub library_path: Option<PathBuf>,
    /// Subsystems to initialize, by [`InitFlags`] name (case-insensitive).
    pub subsystems: Vec<String>,
    /// Size of the string staging buffer in bytes.
    pub string_buffer_capacity: usize,
    /// Hints applied before `SDL_Init`.
    pub hints: BTreeMap<String, String>,
}

impl Default for SdlConfig {
    fn default() -> Self {
        Self {
            library_path: None,
            subsystems: vec!["video".to_string()],
            string_buffer_capacity: DEFAULT_CAPACITY,
            hints: BTreeMap::new(),
        }
    }
}

impl SdlConfig {
    /// Parses and validates a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|error| Error::Config(format!("Invalid configuration: {error}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a JSON configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|error| {
            Error::Config(format!(
                "Error while reading configuration from \"{}\": {}",
                path.display(),
                error
            ))
        })?;
        Self::from_json(&json)
    }

    /// The configured library path, falling back to [`get_sdl_library_path`].
    pub fn library_path(&self) -> PathBuf {
        self.library_path
            .clone()
            .unwrap_or_else(get_sdl_library_path)
    }

    /// Combines the configured subsystem names into [`InitFlags`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for an unknown subsystem name.
    pub fn init_flags(&self) -> Result<InitFlags> {
        self.subsystems.iter().try_fold(InitFlags::empty(), |flags, name| {
            InitFlags::from_name(&name.to_ascii_uppercase())
                .map(|flag| flags | flag)
                .ok_or_else(|| Error::Config(format!("Unknown SDL subsystem \"{name}\".")))
        })
    }

    fn validate(&self) -> Result<()> {
        // Room for at least one character and its terminator.
        if self.string_buffer_capacity < 2 {
            return Err(Error::Config(format!(
                "string_buffer_capacity must be at least 2, got {}.",
                self.string_buffer_capacity
            )));
        }
        self.init_flags().map(|_| ())
    }
}
