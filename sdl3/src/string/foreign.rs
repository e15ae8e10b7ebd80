// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! Strings returned by SDL.
//!
//! SDL hands back two kinds of `char *`: *borrowed* strings that SDL owns and
//! the caller must never release (`SDL_GetError`, `SDL_GetWindowTitle`), and
//! *owned* strings that the caller must release with `SDL_free`
//! (`SDL_GetClipboardText`, `SDL_GetPrefPath`). [`SdlStr`] and [`SdlString`]
//! encode that difference in the type.

use std::{
    ffi::CStr,
    marker::PhantomData,
    os::raw::{c_char, c_void},
    sync::Arc,
};

use tracing::warn;

/// Something that can release memory allocated by the native library.
pub trait Deallocator {
    /// Releases `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must come from the matching allocator and must not be used afterwards.
    unsafe fn free(&self, ptr: *mut c_void);
}

impl<D: Deallocator + ?Sized> Deallocator for &D {
    unsafe fn free(&self, ptr: *mut c_void) {
        unsafe { (**self).free(ptr) }
    }
}

impl<D: Deallocator + ?Sized> Deallocator for Arc<D> {
    unsafe fn free(&self, ptr: *mut c_void) {
        unsafe { (**self).free(ptr) }
    }
}

/// Who is responsible for the memory behind a decoded string.
#[derive(Clone, Copy)]
pub enum Ownership<'a> {
    /// SDL owns the string. Nothing is released.
    Borrowed,
    /// The caller owns the string. It is released through the deallocator once decoded.
    Owned(&'a dyn Deallocator),
}

impl std::fmt::Debug for Ownership<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Ownership::Borrowed => f.write_str("Borrowed"),
            Ownership::Owned(_) => f.write_str("Owned"),
        }
    }
}

/// Copies a null-terminated UTF-8 string from native memory.
///
/// Returns `None` for a null pointer, in which case nothing is released. Invalid
/// UTF-8 sequences are replaced with `U+FFFD`. With [`Ownership::Owned`], the
/// memory is released exactly once, after the copy.
///
/// # Safety
///
/// `ptr` must be null or point to a null-terminated byte sequence. With
/// [`Ownership::Owned`], `ptr` must not be read or released again afterwards.
///
/// # Examples
///
/// ```
/// use sdl3::{Ownership, decode};
///
/// let text = c"Hello World!";
/// let decoded = unsafe { decode(text.as_ptr(), Ownership::Borrowed) };
/// assert_eq!(decoded.as_deref(), Some("Hello World!"));
/// assert_eq!(unsafe { decode(std::ptr::null(), Ownership::Borrowed) }, None);
/// ```
pub unsafe fn decode(ptr: *const c_char, ownership: Ownership<'_>) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    let bytes = unsafe { CStr::from_ptr(ptr) };
    let text = match bytes.to_str() {
        Ok(text) => text.to_owned(),
        Err(error) => {
            warn!("SDL returned a string that is not valid UTF-8: {error}");
            bytes.to_string_lossy().into_owned()
        }
    };
    if let Ownership::Owned(deallocator) = ownership {
        unsafe { deallocator.free(ptr.cast_mut().cast()) };
    }
    Some(text)
}

/// View of a string owned by SDL.
///
/// The lifetime `'a` is tied to whatever SDL object the string came from; the
/// view never releases the memory.
#[derive(Clone, Copy)]
pub struct SdlStr<'a> {
    ptr: *const c_char,
    phantom: PhantomData<&'a CStr>,
}

impl<'a> SdlStr<'a> {
    /// Wraps a borrowed pointer returned by SDL.
    ///
    /// # Safety
    ///
    /// `ptr` must be null or point to a null-terminated string that stays
    /// valid and unmodified for `'a`.
    pub unsafe fn from_ptr(ptr: *const c_char) -> Self {
        Self {
            ptr,
            phantom: PhantomData,
        }
    }

    pub fn is_null(&self) -> bool {
        self.ptr.is_null()
    }

    pub fn as_ptr(&self) -> *const c_char {
        self.ptr
    }

    /// Returns the string as a [`CStr`], `None` if SDL returned null.
    pub fn as_c_str(&self) -> Option<&'a CStr> {
        (!self.ptr.is_null()).then(|| unsafe { CStr::from_ptr(self.ptr) })
    }

    /// Borrows the string as `&str` when it is valid UTF-8.
    pub fn to_str(&self) -> Option<&'a str> {
        self.as_c_str().and_then(|text| text.to_str().ok())
    }

    /// Copies the string into an owned Rust [`String`].
    pub fn to_string_lossy(&self) -> Option<String> {
        unsafe { decode(self.ptr, Ownership::Borrowed) }
    }
}

impl std::fmt::Debug for SdlStr<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.as_c_str() {
            Some(text) => text.fmt(f),
            None => f.write_str("null"),
        }
    }
}

/// Writes the text lossily; null writes nothing.
impl std::fmt::Display for SdlStr<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.as_c_str() {
            Some(text) => f.write_str(&text.to_string_lossy()),
            None => Ok(()),
        }
    }
}

/// String owned by the caller, released through its [`Deallocator`].
///
/// Decoding consumes the handle, so the string can be read only once; dropping
/// the handle without decoding it still releases the memory. Either way the
/// deallocator runs exactly once (never for a null string).
///
/// # Examples
///
/// ```no_run
/// # use sdl3::Sdl;
/// # fn example(sdl: Sdl) -> Result<(), sdl3::Error> {
/// // `clipboard_text` goes through an `SdlString` internally.
/// let text = sdl.clipboard_text()?;
/// println!("Clipboard: {text}");
/// # Ok(())
/// # }
/// ```
pub struct SdlString<D: Deallocator = crate::SdlApiHandle> {
    ptr: *mut c_char,
    deallocator: D,
}

impl<D: Deallocator> SdlString<D> {
    /// Takes ownership of a string allocated by the native library.
    ///
    /// # Safety
    ///
    /// `ptr` must be null or a null-terminated string that `deallocator` can
    /// release, and nothing else may release it.
    pub unsafe fn from_raw(ptr: *mut c_char, deallocator: D) -> Self {
        Self { ptr, deallocator }
    }

    pub fn is_null(&self) -> bool {
        self.ptr.is_null()
    }

    /// Borrows the string without releasing it.
    pub fn as_c_str(&self) -> Option<&CStr> {
        (!self.ptr.is_null()).then(|| unsafe { CStr::from_ptr(self.ptr) })
    }

    /// Copies the string into a Rust [`String`] and releases the native memory.
    pub fn into_string(mut self) -> Option<String> {
        let ptr = std::mem::replace(&mut self.ptr, std::ptr::null_mut());
        unsafe { decode(ptr, Ownership::Owned(&self.deallocator)) }
    }
}

impl<D: Deallocator> Drop for SdlString<D> {
    fn drop(&mut self) {
        if !self.ptr.is_null() {
            unsafe { self.deallocator.free(self.ptr.cast()) };
        }
    }
}

impl<D: Deallocator> std::fmt::Debug for SdlString<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SdlString")
            .field("value", &self.as_c_str())
            .finish()
    }
}
