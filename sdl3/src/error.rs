// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! Error types for SDL operations.
//!
//! SDL3 reports failure through a `false` return value or a null handle, and
//! leaves a human-readable message behind `SDL_GetError`. This module turns
//! both into [`Error::Sdl`] carrying that message.

use crate::{
    api::SdlApi,
    string::foreign::{Ownership, decode},
};

/// Convenience result type using [`Error`] as the error variant.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur when using the SDL bindings.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A native call failed. Holds the message reported by `SDL_GetError`.
    #[error("SDL error: {0}")]
    Sdl(String),

    /// The text does not fit in the string staging buffer, terminator included.
    #[error("String of {len} byte(s) does not fit in a {capacity}-byte staging buffer")]
    StringTooLong {
        /// UTF-8 length of the rejected text, summed over the strings of one call.
        len: usize,
        /// Capacity of the staging buffer.
        capacity: usize,
    },

    /// The text contains a NUL byte, which C would read as the end of the string.
    #[error("String contains an interior nul byte at position {position}")]
    InteriorNul {
        /// Byte offset of the first NUL.
        position: usize,
    },

    /// The configuration could not be read or is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A generic error for Rust-level failures not reported by SDL itself.
    #[error("Other error: {0}")]
    Other(String),

    /// Failed to load the SDL dynamic library or one of its symbols.
    #[error("Loading library: {0}")]
    LibLoading(#[from] libloading::Error),
}

impl Error {
    /// Builds an [`Error::Sdl`] from the current `SDL_GetError` message.
    pub fn from_sdl(api: &SdlApi) -> Self {
        let message = unsafe { decode(api.get_error(), Ownership::Borrowed) };
        Self::from_message(message)
    }

    /// Converts the boolean status returned by most SDL3 functions to a [`Result`].
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let ok = unsafe { api.render_clear(renderer) };
    /// Error::check(api, ok)?; // Propagate SDL's message if the call failed
    /// ```
    pub fn check(api: &SdlApi, ok: bool) -> Result<()> {
        if ok { Ok(()) } else { Err(Self::from_sdl(api)) }
    }

    pub(crate) fn from_message(message: Option<String>) -> Self {
        match message {
            Some(message) if !message.is_empty() => Error::Sdl(message),
            _ => Error::Sdl("unknown error (SDL did not set a message)".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sdl_message_is_kept() {
        let error = Error::from_message(Some("No available video device".to_string()));
        assert_eq!(error.to_string(), "SDL error: No available video device");
    }

    #[test]
    fn missing_message_gets_a_fallback() {
        for message in [None, Some(String::new())] {
            match Error::from_message(message) {
                Error::Sdl(text) => assert!(text.starts_with("unknown error")),
                other => panic!("unexpected error variant: {other:?}"),
            }
        }
    }

    #[test]
    fn string_errors_describe_the_input() {
        let error = Error::StringTooLong {
            len: 5000,
            capacity: 4096,
        };
        assert_eq!(
            error.to_string(),
            "String of 5000 byte(s) does not fit in a 4096-byte staging buffer"
        );
        assert_eq!(
            Error::InteriorNul { position: 3 }.to_string(),
            "String contains an interior nul byte at position 3"
        );
    }
}
