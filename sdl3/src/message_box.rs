// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! Simple modal message boxes.

use bitflags::bitflags;

use crate::{Result, Sdl, Window};

bitflags! {
    /// Message box style (`SDL_MessageBoxFlags`).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct MessageBoxFlags: u32 {
        const ERROR = sdl3_sys::SDL_MESSAGEBOX_ERROR;
        const WARNING = sdl3_sys::SDL_MESSAGEBOX_WARNING;
        const INFORMATION = sdl3_sys::SDL_MESSAGEBOX_INFORMATION;
    }
}

impl Sdl {
    /// Shows a modal message box and blocks until the user dismisses it.
    ///
    /// Works before video is initialized, which makes it usable to report
    /// initialization failures.
    ///
    /// # Arguments
    ///
    /// * `flags` - Style of the box
    /// * `title`, `message` - UTF-8 text
    /// * `parent` - Window the box is modal for, if any
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use sdl3::{MessageBoxFlags, Sdl, Window};
    /// # fn example(sdl: Sdl, window: Window) -> Result<(), sdl3::Error> {
    /// sdl.show_simple_message_box(
    ///     MessageBoxFlags::INFORMATION,
    ///     "Hello World!",
    ///     "Welcome to SDL3 with Rust!",
    ///     Some(&window),
    /// )?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn show_simple_message_box(
        &self,
        flags: MessageBoxFlags,
        title: &str,
        message: &str,
        parent: Option<&Window>,
    ) -> Result<()> {
        let parent = parent.map_or(std::ptr::null_mut(), Window::raw);
        self.context.with_strings(|strings| {
            let [title, message] = strings.encode_all([Some(title), Some(message)])?;
            self.context.check(unsafe {
                self.context.api.show_simple_message_box(
                    flags.bits(),
                    title.as_ptr(),
                    message.as_ptr(),
                    parent,
                )
            })
        })
    }
}
