// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! SDL initialization and the shared library context.
//!
//! This module provides [`Sdl`], the main entry point. It initializes the
//! requested subsystems and owns the state every other safe object shares:
//! the loaded API and the string staging buffer.

use std::{cell::RefCell, rc::Rc, time::Duration};

use bitflags::bitflags;
use tracing::debug;

use crate::{
    Error, Result, SdlApiHandle,
    config::SdlConfig,
    load_api,
    string::{
        StringEncoder,
        foreign::{Ownership, SdlStr, decode},
    },
    system::set_hint_with,
};

bitflags! {
    /// Subsystems to initialize (`SDL_InitFlags`).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct InitFlags: u32 {
        const AUDIO = sdl3_sys::SDL_INIT_AUDIO;
        /// Implies `EVENTS`.
        const VIDEO = sdl3_sys::SDL_INIT_VIDEO;
        const JOYSTICK = sdl3_sys::SDL_INIT_JOYSTICK;
        const HAPTIC = sdl3_sys::SDL_INIT_HAPTIC;
        const GAMEPAD = sdl3_sys::SDL_INIT_GAMEPAD;
        const EVENTS = sdl3_sys::SDL_INIT_EVENTS;
        const SENSOR = sdl3_sys::SDL_INIT_SENSOR;
        const CAMERA = sdl3_sys::SDL_INIT_CAMERA;
    }
}

/// Version of the loaded SDL library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub micro: u32,
}

impl Version {
    /// Splits the packed `SDL_VERSIONNUM` value (`major * 1000000 + minor * 1000 + micro`).
    pub fn from_packed(value: i32) -> Self {
        let value = value.max(0) as u32;
        Self {
            major: value / 1_000_000,
            minor: (value / 1_000) % 1_000,
            micro: value % 1_000,
        }
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.micro)
    }
}

/// Internal shared context for an initialized SDL library.
///
/// Windows and renderers keep a reference so that `SDL_Quit` only runs after
/// the last of them is gone.
pub(crate) struct SdlContext {
    pub(crate) api: SdlApiHandle,
    strings: RefCell<StringEncoder>,
}

impl SdlContext {
    /// Converts a boolean SDL status to a [`Result`].
    pub(crate) fn check(&self, ok: bool) -> Result<()> {
        Error::check(&self.api, ok)
    }

    /// Builds an error from the current `SDL_GetError` message.
    pub(crate) fn error(&self) -> Error {
        Error::from_sdl(&self.api)
    }

    /// Gives `f` exclusive use of the string encoder, rewound to the start.
    ///
    /// Strings staged inside `f` stay valid until `f` returns, which covers the
    /// foreign call they were staged for. Calls taking several strings stage
    /// them with [`StringEncoder::encode_all`].
    pub(crate) fn with_strings<R>(
        &self,
        f: impl FnOnce(&mut StringEncoder) -> Result<R>,
    ) -> Result<R> {
        let mut strings = self
            .strings
            .try_borrow_mut()
            .map_err(|_| Error::Other("The string encoder is already in use.".to_string()))?;
        // Nothing staged by an earlier call is still referenced.
        strings.reset();
        f(&mut strings)
    }
}

impl Drop for SdlContext {
    /// Shuts SDL down when the last reference is dropped.
    fn drop(&mut self) {
        debug!("Shutting down SDL.");
        unsafe { self.api.quit() };
    }
}

/// An initialized SDL library.
///
/// `Sdl` is cheaply cloneable. SDL is shut down (`SDL_Quit`) once every clone
/// and every [`crate::Window`] and [`crate::Renderer`] created from it have
/// been dropped.
///
/// # Examples
///
/// ```no_run
/// use sdl3::{InitFlags, Sdl, load_api};
///
/// # fn main() -> Result<(), sdl3::Error> {
/// let api = load_api("libSDL3.so.0")?;
/// let sdl = Sdl::new(api, InitFlags::VIDEO)?;
/// println!("SDL {} on {}", sdl.version(), sdl.platform());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Sdl {
    pub(crate) context: Rc<SdlContext>,
}

impl Sdl {
    /// Initializes the given subsystems with a default-sized string encoder.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Sdl`] with SDL's message if `SDL_Init` fails.
    pub fn new(api: SdlApiHandle, flags: InitFlags) -> Result<Self> {
        Self::with_encoder(api, flags, StringEncoder::new())
    }

    /// Initializes SDL using a string encoder supplied by the caller.
    pub fn with_encoder(api: SdlApiHandle, flags: InitFlags, strings: StringEncoder) -> Result<Self> {
        Error::check(&api, unsafe { api.init(flags.bits()) })?;
        debug!("SDL initialized with {:?}.", flags);
        Ok(Self {
            context: Rc::new(SdlContext {
                api,
                strings: RefCell::new(strings),
            }),
        })
    }

    /// Loads the library, applies the configured hints and initializes SDL.
    ///
    /// Hints are applied before `SDL_Init`, which is required for hints such as
    /// [`crate::hint::VIDEO_DRIVER`].
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use sdl3::{Sdl, config::SdlConfig};
    ///
    /// # fn main() -> Result<(), sdl3::Error> {
    /// let config = SdlConfig::from_json(r#"{"hints": {"SDL_VIDEO_DRIVER": "dummy"}}"#)?;
    /// let sdl = Sdl::with_config(&config)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_config(config: &SdlConfig) -> Result<Self> {
        let api = load_api(config.library_path())?;
        let mut strings = StringEncoder::with_capacity(config.string_buffer_capacity);
        for (name, value) in &config.hints {
            strings.reset();
            set_hint_with(&api, &mut strings, name, value)?;
        }
        Self::with_encoder(api, config.init_flags()?, strings)
    }

    /// Returns the loaded API, for calls this crate does not wrap.
    pub fn api(&self) -> &SdlApiHandle {
        &self.context.api
    }

    /// Returns the last error message set by SDL on this thread, if any.
    ///
    /// Copied, since the next failing call on this thread replaces it.
    pub fn error(&self) -> Option<String> {
        unsafe { decode(self.context.api.get_error(), Ownership::Borrowed) }
            .filter(|message| !message.is_empty())
    }

    /// Clears the last error message.
    pub fn clear_error(&self) {
        unsafe { self.context.api.clear_error() };
    }

    /// Version of the loaded library.
    pub fn version(&self) -> Version {
        Version::from_packed(unsafe { self.context.api.get_version() })
    }

    /// Source revision the loaded library was built from.
    pub fn revision(&self) -> SdlStr<'_> {
        unsafe { SdlStr::from_ptr(self.context.api.get_revision()) }
    }

    /// Name of the platform, for example `"Linux"` or `"Windows"`.
    pub fn platform(&self) -> SdlStr<'_> {
        unsafe { SdlStr::from_ptr(self.context.api.get_platform()) }
    }

    /// Time since SDL was initialized.
    pub fn ticks(&self) -> Duration {
        Duration::from_millis(unsafe { self.context.api.get_ticks() })
    }

    /// Waits at least `duration`, rounded down to whole milliseconds.
    pub fn delay(&self, duration: Duration) {
        let ms = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        unsafe { self.context.api.delay(ms) };
    }

    /// Shuts SDL down now.
    ///
    /// # Errors
    ///
    /// Returns an error if clones of this context, windows or renderers are
    /// still alive.
    pub fn destroy(self) -> Result<()> {
        let context = Rc::into_inner(self.context)
            .ok_or_else(|| Error::Other("SDL context is still in use.".to_string()))?;
        drop(context);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packed_version_is_split() {
        let version = Version::from_packed(3_002_010);
        assert_eq!(
            version,
            Version {
                major: 3,
                minor: 2,
                micro: 10
            }
        );
        assert_eq!(version.to_string(), "3.2.10");
    }

    #[test]
    fn init_flags_match_sdl_values() {
        assert_eq!(InitFlags::VIDEO.bits(), 0x20);
        assert_eq!((InitFlags::VIDEO | InitFlags::AUDIO).bits(), 0x30);
        assert_eq!(InitFlags::from_name("EVENTS"), Some(InitFlags::EVENTS));
    }
}
