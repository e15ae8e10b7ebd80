// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! Loading of the SDL3 shared library.

use std::{ffi::OsStr, os::raw::c_void, sync::Arc};

use tracing::debug;

use crate::{Result, string::foreign::Deallocator};

/// The resolved SDL3 function table.
pub type SdlApi = sdl3_sys::Sdl3Lib;

/// Shared handle to a loaded SDL3 library.
///
/// Every safe object keeps a clone, so the library stays mapped until the last
/// window, renderer or owned string is gone.
pub type SdlApiHandle = Arc<SdlApi>;

/// Loads the SDL3 shared library and resolves every function this crate uses.
///
/// # Arguments
///
/// * `path` - Library file name or path, for example the value returned by
///   [`crate::config::get_sdl_library_path`]
///
/// # Errors
///
/// Returns [`crate::Error::LibLoading`] if the library cannot be opened or a
/// required symbol is missing (for example an SDL older than 3.2).
///
/// # Examples
///
/// ```no_run
/// use sdl3::{config::get_sdl_library_path, load_api};
///
/// # fn main() -> Result<(), sdl3::Error> {
/// let api = load_api(get_sdl_library_path())?;
/// # Ok(())
/// # }
/// ```
pub fn load_api(path: impl AsRef<OsStr>) -> Result<SdlApiHandle> {
    let path = path.as_ref();
    debug!("Loading SDL3 from \"{}\".", path.to_string_lossy());
    let api = unsafe { SdlApi::new(path)? };
    Ok(Arc::new(api))
}

impl Deallocator for SdlApi {
    /// Releases memory through `SDL_free`.
    unsafe fn free(&self, ptr: *mut c_void) {
        unsafe { sdl3_sys::Sdl3Lib::free(self, ptr) }
    }
}
