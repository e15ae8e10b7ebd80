// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! Tests for configuration parsing and library path resolution.

use std::path::PathBuf;

use sdl3::{
    DEFAULT_CAPACITY, Error, InitFlags,
    config::{SdlConfig, default_library_name, get_sdl_library_path},
};

#[test]
fn empty_object_gives_defaults() {
    let config = SdlConfig::from_json("{}").unwrap();
    assert_eq!(config, SdlConfig::default());
    assert_eq!(config.string_buffer_capacity, DEFAULT_CAPACITY);
    assert_eq!(config.init_flags().unwrap(), InitFlags::VIDEO);
    assert!(config.hints.is_empty());
}

#[test]
fn full_configuration() {
    let config = SdlConfig::from_json(
        r#"{
            "library_path": "/opt/sdl3/lib/libSDL3.so.0",
            "subsystems": ["video", "Audio", "EVENTS"],
            "string_buffer_capacity": 8192,
            "hints": { "SDL_RENDER_VSYNC": "1", "SDL_VIDEO_DRIVER": "dummy" }
        }"#,
    )
    .unwrap();

    assert_eq!(
        config.library_path(),
        PathBuf::from("/opt/sdl3/lib/libSDL3.so.0")
    );
    assert_eq!(
        config.init_flags().unwrap(),
        InitFlags::VIDEO | InitFlags::AUDIO | InitFlags::EVENTS
    );
    assert_eq!(config.string_buffer_capacity, 8192);
    assert_eq!(
        config.hints.get(sdl3::hint::VIDEO_DRIVER).map(String::as_str),
        Some("dummy")
    );
}

#[test]
fn library_path_falls_back_to_environment_or_platform_default() {
    let config = SdlConfig::default();
    assert_eq!(config.library_path(), get_sdl_library_path());

    match std::env::var_os(sdl3::config::LIBRARY_PATH_ENV).filter(|path| !path.is_empty()) {
        Some(path) => assert_eq!(get_sdl_library_path(), PathBuf::from(path)),
        None => assert_eq!(get_sdl_library_path(), PathBuf::from(default_library_name())),
    }
}

#[test]
fn unknown_subsystem_is_rejected() {
    let error = SdlConfig::from_json(r#"{"subsystems": ["video", "teleport"]}"#).unwrap_err();
    match error {
        Error::Config(message) => assert!(message.contains("teleport")),
        other => panic!("expected a configuration error, got {other:?}"),
    }
}

#[test]
fn tiny_string_buffer_is_rejected() {
    assert!(matches!(
        SdlConfig::from_json(r#"{"string_buffer_capacity": 1}"#),
        Err(Error::Config(_))
    ));
}

#[test]
fn malformed_and_unknown_fields_are_rejected() {
    assert!(matches!(
        SdlConfig::from_json("{"),
        Err(Error::Config(_))
    ));
    assert!(matches!(
        SdlConfig::from_json(r#"{"window_title": "nope"}"#),
        Err(Error::Config(_))
    ));
}

#[test]
fn missing_file_is_a_config_error() {
    let error = SdlConfig::from_file("/nonexistent/sdl3-config.json").unwrap_err();
    match error {
        Error::Config(message) => assert!(message.contains("/nonexistent/sdl3-config.json")),
        other => panic!("expected a configuration error, got {other:?}"),
    }
}
