// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! `SDL_WindowFlags` values.
//!
//! The headers spell these with `SDL_UINT64_C(...)`, a function-like macro
//! that bindgen does not expand, so they are declared here for both the
//! generated and the bundled bindings.

use crate::WindowFlags;

pub const SDL_WINDOW_FULLSCREEN: WindowFlags = 0x0000_0000_0000_0001;
pub const SDL_WINDOW_OPENGL: WindowFlags = 0x0000_0000_0000_0002;
pub const SDL_WINDOW_OCCLUDED: WindowFlags = 0x0000_0000_0000_0004;
pub const SDL_WINDOW_HIDDEN: WindowFlags = 0x0000_0000_0000_0008;
pub const SDL_WINDOW_BORDERLESS: WindowFlags = 0x0000_0000_0000_0010;
pub const SDL_WINDOW_RESIZABLE: WindowFlags = 0x0000_0000_0000_0020;
pub const SDL_WINDOW_MINIMIZED: WindowFlags = 0x0000_0000_0000_0040;
pub const SDL_WINDOW_MAXIMIZED: WindowFlags = 0x0000_0000_0000_0080;
pub const SDL_WINDOW_HIGH_PIXEL_DENSITY: WindowFlags = 0x0000_0000_0000_2000;
pub const SDL_WINDOW_ALWAYS_ON_TOP: WindowFlags = 0x0000_0000_0001_0000;
pub const SDL_WINDOW_VULKAN: WindowFlags = 0x0000_0000_1000_0000;
pub const SDL_WINDOW_METAL: WindowFlags = 0x0000_0000_2000_0000;
pub const SDL_WINDOW_TRANSPARENT: WindowFlags = 0x0000_0000_4000_0000;
