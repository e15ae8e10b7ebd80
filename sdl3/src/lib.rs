// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! # SDL3 - safe bindings
//!
//! Safe, idiomatic Rust bindings for the SDL3 C library: windows, renderers,
//! events, message boxes, hints, clipboard and filesystem paths.
//!
//! ## Overview
//!
//! This crate wraps the raw C FFI ([`sdl3_sys`]) with safe Rust abstractions and RAII
//! resource management. The native library is loaded at runtime, so a program built
//! against this crate only needs SDL3 to be installed when it actually runs.
//!
//! ### Key Concepts
//!
//! - **Context**: an initialized SDL library ([`Sdl`]), owner of the string encoder
//! - **Window** / **Renderer**: RAII handles destroyed on drop ([`Window`], [`Renderer`])
//! - **Event**: a typed copy of an `SDL_Event` ([`Event`])
//! - **Strings**: outbound text is staged in a reusable buffer ([`StringEncoder`]);
//!   returned text is either borrowed ([`SdlStr`]) or owned ([`SdlString`])
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐
//! │     Sdl     │  (loaded API + string encoder, SDL_Quit on last drop)
//! └──────┬──────┘
//!        │
//!        ├─► Window ──► Renderer
//!        │
//!        └─► poll_event / message boxes / hints / clipboard / paths
//! ```
//!
//! ## Examples
//!
//! ### Opening a window and drawing a rectangle
//!
//! ```no_run
//! use sdl3::{Color, FRect, InitFlags, Sdl, WindowFlags, load_api};
//!
//! # fn main() -> Result<(), sdl3::Error> {
//! let api = load_api(sdl3::config::get_sdl_library_path())?;
//! let sdl = Sdl::new(api, InitFlags::VIDEO)?;
//!
//! let window = sdl.create_window("Hello World!", 640, 480, WindowFlags::OPENGL)?;
//! let renderer = window.create_renderer(None)?;
//!
//! renderer.set_draw_color(Color::WHITE)?;
//! renderer.clear()?;
//! renderer.set_draw_color(Color::rgb(0x20, 0x80, 0xF0))?;
//! renderer.fill_rect(&FRect { x: 160.0, y: 160.0, w: 320.0, h: 160.0 })?;
//! renderer.present()?;
//! # Ok(())
//! # }
//! ```
//!
//! ### Staging strings for raw calls
//!
//! ```
//! use sdl3::StringEncoder;
//!
//! # fn main() -> Result<(), sdl3::Error> {
//! let mut strings = StringEncoder::new();
//! let title = strings.encode(Some("Hello World!"))?;
//! let no_name = strings.encode(None)?;
//!
//! assert!(no_name.as_ptr().is_null());
//! assert_eq!(strings.get(&title).unwrap().to_str().unwrap(), "Hello World!");
//! # Ok(())
//! # }
//! ```
//!
//! ## Thread Safety
//!
//! - [`Sdl`], [`Window`] and [`Renderer`] are neither `Send` nor `Sync`: SDL's video
//!   and event APIs belong to the thread that initialized them, and the string
//!   encoder they share is unsynchronized
//! - The loaded API handle ([`SdlApiHandle`]) is `Send + Sync`

mod api;
mod context;
mod error;
mod event;
mod message_box;
mod render;
mod system;
mod window;

pub mod config;
pub mod string;

pub use api::{SdlApi, SdlApiHandle, load_api};
pub use context::{InitFlags, Sdl, Version};
pub use error::{Error, Result};
pub use event::{Event, Keycode, PollIter, WindowEventKind};
pub use message_box::MessageBoxFlags;
pub use render::{Color, Renderer};
pub use sdl3_sys::{FPoint, FRect};
pub use string::{
    DEFAULT_CAPACITY, EncodedStr, StringEncoder,
    foreign::{Deallocator, Ownership, SdlStr, SdlString, decode},
};
pub use system::hint;
pub use window::{Window, WindowFlags};
