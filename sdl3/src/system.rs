// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! Hints, clipboard and filesystem paths.

use std::path::PathBuf;

use crate::{
    Error, Result, Sdl,
    api::SdlApi,
    string::{
        StringEncoder,
        foreign::{Ownership, SdlStr, SdlString, decode},
    },
};

/// Names of commonly used hints.
pub mod hint {
    /// Application name shown by the desktop environment.
    pub const APP_NAME: &str = "SDL_APP_NAME";
    /// `"1"` to synchronize [`crate::Renderer::present`] with the display refresh.
    pub const RENDER_VSYNC: &str = "SDL_RENDER_VSYNC";
    /// Video driver to use, for example `"x11"`, `"wayland"`, `"offscreen"` or `"dummy"`.
    pub const VIDEO_DRIVER: &str = "SDL_VIDEO_DRIVER";
}

/// Sets a hint through a raw API handle. Usable before `SDL_Init`.
pub(crate) fn set_hint_with(
    api: &SdlApi,
    strings: &mut StringEncoder,
    name: &str,
    value: &str,
) -> Result<()> {
    let [name, value] = strings.encode_all([Some(name), Some(value)])?;
    Error::check(api, unsafe { api.set_hint(name.as_ptr(), value.as_ptr()) })
}

impl Sdl {
    /// Sets a configuration hint, see [`hint`] for common names.
    pub fn set_hint(&self, name: &str, value: &str) -> Result<()> {
        self.context
            .with_strings(|strings| set_hint_with(&self.context.api, strings, name, value))
    }

    /// Returns the current value of a hint, `None` if it is not set.
    ///
    /// The value is copied: SDL frees it when the hint changes, which any clone
    /// of this context can do.
    pub fn hint(&self, name: &str) -> Result<Option<String>> {
        self.context.with_strings(|strings| {
            let name = strings.encode(Some(name))?;
            Ok(unsafe { decode(self.context.api.get_hint(name.as_ptr()), Ownership::Borrowed) })
        })
    }

    /// Puts UTF-8 text on the clipboard. Requires the video subsystem.
    pub fn set_clipboard_text(&self, text: &str) -> Result<()> {
        self.context.with_strings(|strings| {
            let text = strings.encode(Some(text))?;
            self.context
                .check(unsafe { self.context.api.set_clipboard_text(text.as_ptr()) })
        })
    }

    /// Returns the clipboard text, empty if there is none.
    pub fn clipboard_text(&self) -> Result<String> {
        let text = unsafe {
            SdlString::from_raw(
                self.context.api.get_clipboard_text(),
                self.context.api.clone(),
            )
        };
        text.into_string().ok_or_else(|| self.context.error())
    }

    /// Returns `true` if the clipboard holds non-empty text.
    pub fn has_clipboard_text(&self) -> bool {
        unsafe { self.context.api.has_clipboard_text() }
    }

    /// Directory the application was run from, with a trailing separator.
    ///
    /// SDL caches the string until it shuts down.
    pub fn base_path(&self) -> Result<SdlStr<'_>> {
        let path = unsafe { SdlStr::from_ptr(self.context.api.get_base_path()) };
        if path.is_null() {
            return Err(self.context.error());
        }
        Ok(path)
    }

    /// Per-user writable directory for `org`/`app`, created if missing.
    pub fn pref_path(&self, org: &str, app: &str) -> Result<PathBuf> {
        let path = self.context.with_strings(|strings| {
            let [org, app] = strings.encode_all([Some(org), Some(app)])?;
            Ok(unsafe {
                SdlString::from_raw(
                    self.context.api.get_pref_path(org.as_ptr(), app.as_ptr()),
                    self.context.api.clone(),
                )
            })
        })?;
        path.into_string()
            .map(PathBuf::from)
            .ok_or_else(|| self.context.error())
    }
}
