// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! # sdl3-sys: Raw FFI bindings to the SDL3 C library
//!
//! This crate provides low-level, unsafe Rust bindings to SDL3. It is generated
//! from the SDL3 headers using `bindgen`, and the symbol table is resolved at
//! runtime through `libloading`, so nothing links against SDL at build time.
//!
//! ## Overview
//!
//! `sdl3-sys` exposes:
//! - Raw C types (`Window`, `Renderer`, `Event`, `FRect`, etc.)
//! - Raw C functions (prefixed with `SDL_` in C, converted to snake_case in Rust)
//!   as methods on [`Sdl3Lib`]
//! - Constants for subsystem flags, window flags, message box flags and event types
//!
//! ## Usage
//!
//! **Most users should NOT use this crate directly.** Use the safe [`sdl3`] wrapper
//! crate instead, which provides:
//! - Memory safety via RAII types
//! - Rust-idiomatic error handling with `Result`
//! - Staged UTF-8 string marshaling and typed borrowed/owned return strings
//!
//! ## Safety
//!
//! All functions in this crate are `unsafe` and require the caller to uphold SDL's
//! invariants:
//! - `SDL_Init` must succeed before subsystem calls
//! - Video and event calls must happen on the thread that initialized video
//! - String arguments must be null-terminated UTF-8 (or null where SDL allows it)
//! - Strings returned as `*mut c_char` are owned by the caller and must be
//!   released with [`Sdl3Lib::free`]
//!
//! ## Build Process
//!
//! The build script looks for `SDL3/SDL.h` in `SDL3_INCLUDE_DIR`, then through
//! `pkg-config`, then in the usual system include directories. Without headers,
//! or with the `bundled-bindings` feature, it falls back to declarations
//! shipped with the crate that cover the same functions and types.
//!
//! [`sdl3`]: https://docs.rs/sdl3

#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(clippy::missing_safety_doc)]
#![allow(clippy::too_many_arguments)]
#![allow(rustdoc::broken_intra_doc_links)]
#![allow(rustdoc::invalid_html_tags)]
#![allow(unsafe_op_in_unsafe_fn)]
#![allow(deref_nullptr)]

extern crate libloading;

// Include bindgen-generated FFI bindings
#[cfg(not(bundled_bindings))]
include!(concat!(env!("OUT_DIR"), "/bindings.rs"));

#[cfg(bundled_bindings)]
mod bindings;
#[cfg(bundled_bindings)]
pub use bindings::*;

mod window_flags;

pub use window_flags::*;
