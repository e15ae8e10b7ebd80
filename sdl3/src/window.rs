// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! Window creation and management.

use std::{os::raw::c_int, rc::Rc};

use bitflags::bitflags;
use tracing::debug;

use crate::{
    Error, Renderer, Result, Sdl,
    context::SdlContext,
    string::foreign::SdlStr,
};

bitflags! {
    /// Window creation flags (`SDL_WindowFlags`).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct WindowFlags: u64 {
        const FULLSCREEN = sdl3_sys::SDL_WINDOW_FULLSCREEN;
        const OPENGL = sdl3_sys::SDL_WINDOW_OPENGL;
        const OCCLUDED = sdl3_sys::SDL_WINDOW_OCCLUDED;
        const HIDDEN = sdl3_sys::SDL_WINDOW_HIDDEN;
        const BORDERLESS = sdl3_sys::SDL_WINDOW_BORDERLESS;
        const RESIZABLE = sdl3_sys::SDL_WINDOW_RESIZABLE;
        const MINIMIZED = sdl3_sys::SDL_WINDOW_MINIMIZED;
        const MAXIMIZED = sdl3_sys::SDL_WINDOW_MAXIMIZED;
        const HIGH_PIXEL_DENSITY = sdl3_sys::SDL_WINDOW_HIGH_PIXEL_DENSITY;
        const ALWAYS_ON_TOP = sdl3_sys::SDL_WINDOW_ALWAYS_ON_TOP;
        const VULKAN = sdl3_sys::SDL_WINDOW_VULKAN;
        const METAL = sdl3_sys::SDL_WINDOW_METAL;
        const TRANSPARENT = sdl3_sys::SDL_WINDOW_TRANSPARENT;
    }
}

/// Owner of a native window, shared by the [`Window`] and its renderers.
pub(crate) struct WindowContext {
    pub(crate) sdl: Rc<SdlContext>,
    pub(crate) window: *mut sdl3_sys::Window,
}

impl Drop for WindowContext {
    fn drop(&mut self) {
        debug!("Destroying window {:p}.", self.window);
        unsafe { self.sdl.api.destroy_window(self.window) };
    }
}

/// A native window.
///
/// The window is destroyed when the last handle to it is dropped. A
/// [`Renderer`] created from the window keeps it alive.
pub struct Window {
    pub(crate) inner: Rc<WindowContext>,
}

impl Sdl {
    /// Creates a window.
    ///
    /// # Arguments
    ///
    /// * `title` - UTF-8 window title
    /// * `width`, `height` - Size in screen coordinates
    /// * `flags` - Creation flags, for example [`WindowFlags::OPENGL`]
    ///
    /// # Errors
    ///
    /// Returns [`Error::Sdl`] if SDL cannot create the window (for example when the
    /// video subsystem is not initialized), or a string error if `title` cannot be
    /// staged.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use sdl3::{Sdl, WindowFlags};
    /// # fn example(sdl: Sdl) -> Result<(), sdl3::Error> {
    /// let window = sdl.create_window("Hello World!", 640, 480, WindowFlags::RESIZABLE)?;
    /// println!("Created window {}", window.id());
    /// # Ok(())
    /// # }
    /// ```
    pub fn create_window(
        &self,
        title: &str,
        width: i32,
        height: i32,
        flags: WindowFlags,
    ) -> Result<Window> {
        let window = self.context.with_strings(|strings| {
            let title = strings.encode(Some(title))?;
            Ok(unsafe {
                self.context
                    .api
                    .create_window(title.as_ptr(), width, height, flags.bits())
            })
        })?;
        if window.is_null() {
            return Err(self.context.error());
        }
        debug!("Created {}x{} window {:p}.", width, height, window);
        Ok(Window {
            inner: Rc::new(WindowContext {
                sdl: self.context.clone(),
                window,
            }),
        })
    }
}

impl Window {
    /// Raw `SDL_Window` pointer, for calls this crate does not wrap.
    pub fn raw(&self) -> *mut sdl3_sys::Window {
        self.inner.window
    }

    /// Numeric id SDL uses to tag events for this window.
    pub fn id(&self) -> u32 {
        unsafe { self.inner.sdl.api.get_window_id(self.inner.window) }
    }

    /// The window title, owned by SDL until the title changes.
    pub fn title(&self) -> SdlStr<'_> {
        unsafe { SdlStr::from_ptr(self.inner.sdl.api.get_window_title(self.inner.window)) }
    }

    pub fn set_title(&mut self, title: &str) -> Result<()> {
        let sdl = &self.inner.sdl;
        sdl.with_strings(|strings| {
            let title = strings.encode(Some(title))?;
            sdl.check(unsafe { sdl.api.set_window_title(self.inner.window, title.as_ptr()) })
        })
    }

    /// Size of the window's client area in screen coordinates.
    pub fn size(&self) -> Result<(i32, i32)> {
        let (mut width, mut height): (c_int, c_int) = (0, 0);
        self.inner.sdl.check(unsafe {
            self.inner
                .sdl
                .api
                .get_window_size(self.inner.window, &mut width, &mut height)
        })?;
        Ok((width, height))
    }

    /// Shows a window created with [`WindowFlags::HIDDEN`].
    pub fn show(&self) -> Result<()> {
        self.inner
            .sdl
            .check(unsafe { self.inner.sdl.api.show_window(self.inner.window) })
    }

    /// Creates a 2D renderer for this window.
    ///
    /// # Arguments
    ///
    /// * `name` - Render driver to use (see [`Sdl::render_drivers`]), or `None` to
    ///   let SDL pick the best available one
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use sdl3::Window;
    /// # fn example(window: Window) -> Result<(), sdl3::Error> {
    /// let renderer = window.create_renderer(None)?;
    /// println!("Using {}", renderer.name());
    /// # Ok(())
    /// # }
    /// ```
    pub fn create_renderer(&self, name: Option<&str>) -> Result<Renderer> {
        let sdl = &self.inner.sdl;
        let renderer = sdl.with_strings(|strings| {
            let name = strings.encode(name)?;
            Ok(unsafe { sdl.api.create_renderer(self.inner.window, name.as_ptr()) })
        })?;
        if renderer.is_null() {
            return Err(sdl.error());
        }
        debug!("Created renderer {:p} for window {:p}.", renderer, self.inner.window);
        Ok(Renderer::new(self.inner.clone(), renderer))
    }

    /// Explicitly destroys this window, releasing it immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if a renderer created from this window is still alive.
    pub fn destroy(self) -> Result<()> {
        let inner = Rc::into_inner(self.inner)
            .ok_or_else(|| Error::Other("Window is still in use by a renderer.".to_string()))?;
        drop(inner);
        Ok(())
    }
}
