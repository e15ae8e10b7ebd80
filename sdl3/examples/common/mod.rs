// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! Common utilities shared across examples.

use std::path::PathBuf;

use sdl3::{Sdl, config::SdlConfig};
use tracing::info;

/// Initializes tracing for examples: INFO by default, overridable with `RUST_LOG`.
pub fn setup_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(tracing::level_filters::LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();
}

/// Builds the SDL context from an optional JSON config file, with an optional
/// library path taking precedence over the one in the file.
pub fn open_sdl(config: Option<PathBuf>, library: Option<PathBuf>) -> Result<Sdl, sdl3::Error> {
    let mut config = match config {
        Some(path) => SdlConfig::from_file(path)?,
        None => SdlConfig::default(),
    };
    if library.is_some() {
        config.library_path = library;
    }
    info!("Loading SDL3 from \"{}\".", config.library_path().display());

    let sdl = Sdl::with_config(&config)?;
    info!(
        "SDL {} ({}) on {}.",
        sdl.version(),
        sdl.revision(),
        sdl.platform()
    );
    Ok(sdl)
}
