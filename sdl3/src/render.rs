// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! 2D rendering.

use std::rc::Rc;

use tracing::debug;

use crate::{
    FRect, Result, Sdl,
    string::foreign::{Ownership, SdlStr, decode},
    window::WindowContext,
};

/// An 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);

    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from a `0xRRGGBB` value. Bits above 24 are ignored.
    pub const fn from_rgb24(value: u32) -> Self {
        Self::rgb((value >> 16) as u8, (value >> 8) as u8, value as u8)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb(r, g, b)
    }
}

impl From<(u8, u8, u8, u8)> for Color {
    fn from((r, g, b, a): (u8, u8, u8, u8)) -> Self {
        Self::rgba(r, g, b, a)
    }
}

impl Sdl {
    /// Names of the render drivers compiled into the loaded library, in SDL's
    /// order of preference.
    pub fn render_drivers(&self) -> Vec<String> {
        let api = &self.context.api;
        let count = unsafe { api.get_num_render_drivers() }.max(0);
        (0..count)
            .filter_map(|index| unsafe { decode(api.get_render_driver(index), Ownership::Borrowed) })
            .collect()
    }
}

/// A 2D renderer bound to a [`crate::Window`].
///
/// The renderer keeps its window alive and is destroyed on drop.
///
/// # Examples
///
/// ```no_run
/// # use sdl3::{Color, FRect, Renderer};
/// # fn example(renderer: Renderer) -> Result<(), sdl3::Error> {
/// renderer.set_draw_color(Color::BLACK)?;
/// renderer.clear()?;
/// renderer.set_draw_color(Color::WHITE)?;
/// renderer.draw_line(320.0, 240.0, 400.0, 300.0)?;
/// renderer.debug_text(8.0, 8.0, "Hello World!")?;
/// renderer.present()?;
/// # Ok(())
/// # }
/// ```
pub struct Renderer {
    window: Rc<WindowContext>,
    renderer: *mut sdl3_sys::Renderer,
}

impl Renderer {
    pub(crate) fn new(window: Rc<WindowContext>, renderer: *mut sdl3_sys::Renderer) -> Self {
        Self { window, renderer }
    }

    /// Raw `SDL_Renderer` pointer, for calls this crate does not wrap.
    pub fn raw(&self) -> *mut sdl3_sys::Renderer {
        self.renderer
    }

    /// Name of the render driver in use, for example `"opengl"` or `"software"`.
    ///
    /// The string belongs to the renderer; null if SDL could not report it.
    pub fn name(&self) -> SdlStr<'_> {
        unsafe { SdlStr::from_ptr(self.window.sdl.api.get_renderer_name(self.renderer)) }
    }

    /// Sets the color used by clear and drawing operations.
    pub fn set_draw_color(&self, color: impl Into<Color>) -> Result<()> {
        let Color { r, g, b, a } = color.into();
        self.check(unsafe {
            self.window
                .sdl
                .api
                .set_render_draw_color(self.renderer, r, g, b, a)
        })
    }

    /// Fills the whole target with the draw color.
    pub fn clear(&self) -> Result<()> {
        self.check(unsafe { self.window.sdl.api.render_clear(self.renderer) })
    }

    pub fn fill_rect(&self, rect: &FRect) -> Result<()> {
        self.check(unsafe { self.window.sdl.api.render_fill_rect(self.renderer, rect) })
    }

    /// Draws the outline of `rect`.
    pub fn draw_rect(&self, rect: &FRect) -> Result<()> {
        self.check(unsafe { self.window.sdl.api.render_rect(self.renderer, rect) })
    }

    pub fn draw_line(&self, x1: f32, y1: f32, x2: f32, y2: f32) -> Result<()> {
        self.check(unsafe {
            self.window
                .sdl
                .api
                .render_line(self.renderer, x1, y1, x2, y2)
        })
    }

    pub fn draw_point(&self, x: f32, y: f32) -> Result<()> {
        self.check(unsafe { self.window.sdl.api.render_point(self.renderer, x, y) })
    }

    /// Draws `text` with SDL's built-in 8x8 debug font at (`x`, `y`).
    pub fn debug_text(&self, x: f32, y: f32, text: &str) -> Result<()> {
        let sdl = &self.window.sdl;
        sdl.with_strings(|strings| {
            let text = strings.encode(Some(text))?;
            sdl.check(unsafe { sdl.api.render_debug_text(self.renderer, x, y, text.as_ptr()) })
        })
    }

    /// Shows everything drawn since the last present.
    pub fn present(&self) -> Result<()> {
        self.check(unsafe { self.window.sdl.api.render_present(self.renderer) })
    }

    /// Explicitly destroys this renderer, releasing it and its hold on the window.
    pub fn destroy(self) {
        drop(self);
    }

    fn check(&self, ok: bool) -> Result<()> {
        self.window.sdl.check(ok)
    }
}

impl Drop for Renderer {
    fn drop(&mut self) {
        debug!("Destroying renderer {:p}.", self.renderer);
        unsafe { self.window.sdl.api.destroy_renderer(self.renderer) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb24_is_unpacked() {
        assert_eq!(Color::from_rgb24(0x12_34_56), Color::rgb(0x12, 0x34, 0x56));
        assert_eq!(Color::from_rgb24(0xFF_00_00_01), Color::rgb(0, 0, 1));
    }

    #[test]
    fn tuples_convert_to_colors() {
        assert_eq!(Color::from((1, 2, 3)).a, 0xFF);
        assert_eq!(Color::from((1, 2, 3, 4)), Color::rgba(1, 2, 3, 4));
    }
}
