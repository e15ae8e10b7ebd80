// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! Layout and constant checks, valid for both generated and bundled bindings.

use std::mem::{offset_of, size_of};

/// `SDL_Event` is a 128-byte union in every SDL3 release.
#[test]
fn event_union_has_sdl_size() {
    assert_eq!(size_of::<sdl3_sys::Event>(), 128);

    let event = sdl3_sys::Event::default();
    assert_eq!(unsafe { event.type_ }, 0);
    println!("event: {:?}", event);
}

/// Field offsets of the keyboard and mouse events match `SDL_events.h`.
#[test]
fn event_field_offsets() {
    assert_eq!(offset_of!(sdl3_sys::KeyboardEvent, windowID), 16);
    assert_eq!(offset_of!(sdl3_sys::KeyboardEvent, key), 28);
    assert_eq!(offset_of!(sdl3_sys::KeyboardEvent, down), 36);
    assert_eq!(offset_of!(sdl3_sys::MouseButtonEvent, button), 24);
    assert_eq!(offset_of!(sdl3_sys::MouseButtonEvent, x), 28);
    assert_eq!(offset_of!(sdl3_sys::WindowEvent, data2), 24);
}

/// Window events span `SHOWN..=HDR_STATE_CHANGED` in SDL 3.2.
#[test]
fn window_event_range() {
    assert_eq!(sdl3_sys::SDL_EVENT_WINDOW_FIRST, sdl3_sys::SDL_EVENT_WINDOW_SHOWN);
    assert_eq!(sdl3_sys::SDL_EVENT_WINDOW_LAST, 0x21A);
    assert!(sdl3_sys::SDL_EVENT_WINDOW_CLOSE_REQUESTED < sdl3_sys::SDL_EVENT_WINDOW_LAST);
    assert_eq!(sdl3_sys::SDL_WINDOW_HIDDEN, 0x8);
}

#[test]
fn rect_is_plain_floats() {
    let rect = sdl3_sys::FRect {
        x: 160.0,
        y: 160.0,
        ..Default::default()
    };
    assert_eq!(size_of::<sdl3_sys::FRect>(), 16);
    assert_eq!(rect.w, 0.0);
}

/// Loading a path that does not exist surfaces the `libloading` error.
#[test]
fn missing_library_fails_to_load() {
    let result = unsafe { sdl3_sys::Sdl3Lib::new("/nonexistent/libSDL3.so.0") };
    assert!(result.is_err());
}
