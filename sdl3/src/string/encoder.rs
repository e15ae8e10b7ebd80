// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! Staging buffer for short-lived outbound strings.

use std::{ffi::CStr, os::raw::c_char};

use tracing::trace;

use crate::{Error, Result};

/// Staging buffer size used by [`StringEncoder::new`].
///
/// Strings passed to SDL are short-lived (titles, hint names, driver names), so a
/// few kilobytes cover many calls before the cursor wraps.
pub const DEFAULT_CAPACITY: usize = 4096;

/// Location of a string staged by a [`StringEncoder`].
///
/// This never owns the bytes. The location stays valid until a later
/// [`StringEncoder::encode`] wraps the cursor over it; use
/// [`StringEncoder::is_live`] to check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodedStr {
    ptr: *const c_char,
    start: usize,
    len: usize,
    generation: u64,
}

impl EncodedStr {
    /// The null sentinel, passed to SDL where a string argument is optional.
    pub const fn null() -> Self {
        Self {
            ptr: std::ptr::null(),
            start: 0,
            len: 0,
            generation: 0,
        }
    }

    /// Raw location to hand to a foreign call.
    pub fn as_ptr(&self) -> *const c_char {
        self.ptr
    }

    pub fn is_null(&self) -> bool {
        self.ptr.is_null()
    }

    /// Offset of the first byte in the staging buffer, `None` for the null sentinel.
    pub fn offset(&self) -> Option<usize> {
        (!self.is_null()).then_some(self.start)
    }

    /// Payload length in bytes, terminator excluded.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Wrap generation the string was written in.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Converts Rust strings into null-terminated UTF-8 without allocating per call.
///
/// Strings are written back to back into a fixed buffer. When the next string
/// would reach the end, the cursor goes back to the start and overwrites the
/// oldest strings, which by then have been consumed by the calls they were
/// staged for. Each reset starts a new *generation*.
///
/// The encoder is not synchronized. [`crate::Sdl`] keeps one per context and is
/// itself confined to a single thread.
///
/// # Examples
///
/// ```
/// use sdl3::StringEncoder;
///
/// # fn main() -> Result<(), sdl3::Error> {
/// let mut strings = StringEncoder::with_capacity(16);
/// let first = strings.encode(Some("0123456789"))?;
/// assert_eq!(first.offset(), Some(0));
///
/// // 11 + 6 bytes do not fit in 16: the cursor wraps and overwrites `first`.
/// let second = strings.encode(Some("hello"))?;
/// assert_eq!(second.offset(), Some(0));
/// assert!(!strings.is_live(&first));
/// assert_eq!(strings.get(&second).unwrap().to_bytes(), b"hello");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct StringEncoder {
    buffer: Box<[u8]>,
    cursor: usize,
    generation: u64,
}

impl Default for StringEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl StringEncoder {
    /// Creates an encoder with a [`DEFAULT_CAPACITY`] byte buffer.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an encoder with a buffer of `capacity` bytes.
    ///
    /// The buffer is allocated once here and never resized.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: vec![0; capacity].into_boxed_slice(),
            cursor: 0,
            generation: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Offset where the next string will be written unless the cursor wraps.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of times the cursor has been reset to the start of the buffer.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Stages `text` as null-terminated UTF-8 and returns its location.
    ///
    /// `None` returns [`EncodedStr::null`] without touching the buffer.
    ///
    /// If `cursor + len + 1` reaches the capacity, the cursor is reset to 0 before
    /// writing, invalidating strings from the previous generation that overlap
    /// the new one.
    ///
    /// # Errors
    ///
    /// - [`Error::StringTooLong`] if `text` plus its terminator exceeds the capacity
    /// - [`Error::InteriorNul`] if `text` contains a NUL byte
    ///
    /// Nothing is written and the cursor does not move when an error is returned.
    pub fn encode(&mut self, text: Option<&str>) -> Result<EncodedStr> {
        let Some(text) = text else {
            return Ok(EncodedStr::null());
        };
        let bytes = text.as_bytes();
        if let Some(position) = bytes.iter().position(|&byte| byte == 0) {
            return Err(Error::InteriorNul { position });
        }

        // `&str` is already UTF-8, so the worst case is the exact length.
        let required = bytes.len() + 1;
        if required > self.capacity() {
            return Err(Error::StringTooLong {
                len: bytes.len(),
                capacity: self.capacity(),
            });
        }
        if self.cursor != 0 && self.cursor + required >= self.capacity() {
            self.wrap();
        }

        let start = self.cursor;
        let end = start + bytes.len();
        self.buffer[start..end].copy_from_slice(bytes);
        self.buffer[end] = 0;
        self.cursor = end + 1;

        Ok(EncodedStr {
            ptr: self.buffer[start..].as_ptr().cast(),
            start,
            len: bytes.len(),
            generation: self.generation,
        })
    }

    /// Stages the string arguments of a single call.
    ///
    /// A later string may wrap the cursor and overwrite an earlier one, even
    /// when each of them fits on its own. Every staged string is checked after
    /// the last write, so the returned locations are all readable together.
    ///
    /// # Errors
    ///
    /// Same as [`StringEncoder::encode`], plus [`Error::StringTooLong`] with the
    /// combined length when the strings do not fit in the buffer at once.
    ///
    /// # Examples
    ///
    /// ```
    /// use sdl3::{Error, StringEncoder};
    ///
    /// let mut strings = StringEncoder::with_capacity(16);
    /// let [name, value] = strings.encode_all([Some("name"), Some("value")]).unwrap();
    /// assert_eq!(strings.get(&name).unwrap().to_bytes(), b"name");
    /// assert_eq!(strings.get(&value).unwrap().to_bytes(), b"value");
    ///
    /// // 10 and 12 bytes fit separately, not together.
    /// strings.reset();
    /// assert!(matches!(
    ///     strings.encode_all([Some("123456789"), Some("abcdefghijk")]),
    ///     Err(Error::StringTooLong { len: 20, capacity: 16 })
    /// ));
    /// ```
    pub fn encode_all<const N: usize>(
        &mut self,
        texts: [Option<&str>; N],
    ) -> Result<[EncodedStr; N]> {
        let mut encoded = [EncodedStr::null(); N];
        for (slot, text) in encoded.iter_mut().zip(texts) {
            *slot = self.encode(text)?;
        }
        if encoded
            .iter()
            .any(|staged| !staged.is_null() && !self.is_live(staged))
        {
            return Err(Error::StringTooLong {
                len: texts.iter().flatten().map(|text| text.len()).sum(),
                capacity: self.capacity(),
            });
        }
        Ok(encoded)
    }

    /// Returns `true` while the bytes behind `encoded` are intact.
    ///
    /// A string is overwritten once the cursor wraps and the new generation
    /// writes past its start. Strings from other encoders and the null sentinel
    /// are never live.
    pub fn is_live(&self, encoded: &EncodedStr) -> bool {
        if encoded.is_null()
            || encoded.start + encoded.len >= self.capacity()
            || !std::ptr::eq(encoded.ptr, self.buffer[encoded.start..].as_ptr().cast())
        {
            return false;
        }
        match self.generation.checked_sub(encoded.generation) {
            Some(0) => true,
            Some(1) => encoded.start >= self.cursor,
            _ => false,
        }
    }

    /// Reads back a staged string if it is still live.
    pub fn get(&self, encoded: &EncodedStr) -> Option<&CStr> {
        if !self.is_live(encoded) {
            return None;
        }
        CStr::from_bytes_with_nul(&self.buffer[encoded.start..=encoded.start + encoded.len]).ok()
    }

    /// Rewinds the cursor to the start, invalidating every staged string.
    pub fn reset(&mut self) {
        self.wrap();
        // Nothing from the previous generation survives an explicit reset.
        self.generation += 1;
    }

    fn wrap(&mut self) {
        trace!(
            "String staging buffer wrapped at offset {} (generation {}).",
            self.cursor, self.generation
        );
        self.cursor = 0;
        self.generation += 1;
    }
}
