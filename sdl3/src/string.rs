// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! String marshaling across the C boundary.
//!
//! # Key Types
//!
//! - [`StringEncoder`]: stages outbound Rust strings as null-terminated UTF-8 in a
//!   fixed, reusable buffer
//! - [`EncodedStr`]: location of one staged string
//! - [`foreign::SdlStr`]: view of a string owned by SDL
//! - [`foreign::SdlString`]: string owned by the caller, released with `SDL_free`

pub mod encoder;
pub mod foreign;

pub use encoder::{DEFAULT_CAPACITY, EncodedStr, StringEncoder};
