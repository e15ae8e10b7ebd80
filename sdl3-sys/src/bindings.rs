// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! Bundled declarations, used when the SDL3 headers are not available at
//! build time.
//!
//! Names follow the transformation applied by the build script:
//! `SDL_FooBar` → `foo_bar` (function), `SDL_FooBar` → `FooBar` (type).
//! Layouts match SDL 3.2.

use std::os::raw::{c_char, c_int, c_void};

pub type InitFlags = u32;
pub type WindowFlags = u64;
pub type MessageBoxFlags = u32;
pub type WindowID = u32;
pub type KeyboardID = u32;
pub type MouseID = u32;
pub type MouseButtonFlags = u32;
pub type Keycode = u32;
pub type Scancode = u32;
pub type Keymod = u16;
pub type EventType = u32;

pub const SDL_INIT_AUDIO: InitFlags = 0x0000_0010;
pub const SDL_INIT_VIDEO: InitFlags = 0x0000_0020;
pub const SDL_INIT_JOYSTICK: InitFlags = 0x0000_0200;
pub const SDL_INIT_HAPTIC: InitFlags = 0x0000_1000;
pub const SDL_INIT_GAMEPAD: InitFlags = 0x0000_2000;
pub const SDL_INIT_EVENTS: InitFlags = 0x0000_4000;
pub const SDL_INIT_SENSOR: InitFlags = 0x0000_8000;
pub const SDL_INIT_CAMERA: InitFlags = 0x0001_0000;


pub const SDL_MESSAGEBOX_ERROR: MessageBoxFlags = 0x0000_0010;
pub const SDL_MESSAGEBOX_WARNING: MessageBoxFlags = 0x0000_0020;
pub const SDL_MESSAGEBOX_INFORMATION: MessageBoxFlags = 0x0000_0040;

pub const SDL_EVENT_QUIT: EventType = 0x100;
pub const SDL_EVENT_TERMINATING: EventType = 0x101;
pub const SDL_EVENT_WINDOW_SHOWN: EventType = 0x202;
pub const SDL_EVENT_WINDOW_HIDDEN: EventType = 0x203;
pub const SDL_EVENT_WINDOW_EXPOSED: EventType = 0x204;
pub const SDL_EVENT_WINDOW_MOVED: EventType = 0x205;
pub const SDL_EVENT_WINDOW_RESIZED: EventType = 0x206;
pub const SDL_EVENT_WINDOW_PIXEL_SIZE_CHANGED: EventType = 0x207;
pub const SDL_EVENT_WINDOW_METAL_VIEW_RESIZED: EventType = 0x208;
pub const SDL_EVENT_WINDOW_MINIMIZED: EventType = 0x209;
pub const SDL_EVENT_WINDOW_MAXIMIZED: EventType = 0x20A;
pub const SDL_EVENT_WINDOW_RESTORED: EventType = 0x20B;
pub const SDL_EVENT_WINDOW_MOUSE_ENTER: EventType = 0x20C;
pub const SDL_EVENT_WINDOW_MOUSE_LEAVE: EventType = 0x20D;
pub const SDL_EVENT_WINDOW_FOCUS_GAINED: EventType = 0x20E;
pub const SDL_EVENT_WINDOW_FOCUS_LOST: EventType = 0x20F;
pub const SDL_EVENT_WINDOW_CLOSE_REQUESTED: EventType = 0x210;
pub const SDL_EVENT_WINDOW_HIT_TEST: EventType = 0x211;
pub const SDL_EVENT_WINDOW_ICCPROF_CHANGED: EventType = 0x212;
pub const SDL_EVENT_WINDOW_DISPLAY_CHANGED: EventType = 0x213;
pub const SDL_EVENT_WINDOW_DISPLAY_SCALE_CHANGED: EventType = 0x214;
pub const SDL_EVENT_WINDOW_SAFE_AREA_CHANGED: EventType = 0x215;
pub const SDL_EVENT_WINDOW_OCCLUDED: EventType = 0x216;
pub const SDL_EVENT_WINDOW_ENTER_FULLSCREEN: EventType = 0x217;
pub const SDL_EVENT_WINDOW_LEAVE_FULLSCREEN: EventType = 0x218;
pub const SDL_EVENT_WINDOW_DESTROYED: EventType = 0x219;
pub const SDL_EVENT_WINDOW_HDR_STATE_CHANGED: EventType = 0x21A;
pub const SDL_EVENT_WINDOW_FIRST: EventType = SDL_EVENT_WINDOW_SHOWN;
pub const SDL_EVENT_WINDOW_LAST: EventType = SDL_EVENT_WINDOW_HDR_STATE_CHANGED;
pub const SDL_EVENT_KEY_DOWN: EventType = 0x300;
pub const SDL_EVENT_KEY_UP: EventType = 0x301;
pub const SDL_EVENT_TEXT_INPUT: EventType = 0x303;
pub const SDL_EVENT_MOUSE_MOTION: EventType = 0x400;
pub const SDL_EVENT_MOUSE_BUTTON_DOWN: EventType = 0x401;
pub const SDL_EVENT_MOUSE_BUTTON_UP: EventType = 0x402;

pub const SDLK_RETURN: Keycode = 0x0000_000D;
pub const SDLK_ESCAPE: Keycode = 0x0000_001B;
pub const SDLK_SPACE: Keycode = 0x0000_0020;

pub const SDL_DEBUG_TEXT_FONT_CHARACTER_SIZE: u32 = 8;

pub const SDL_HINT_APP_NAME: &[u8; 13] = b"SDL_APP_NAME\0";
pub const SDL_HINT_RENDER_VSYNC: &[u8; 17] = b"SDL_RENDER_VSYNC\0";
pub const SDL_HINT_VIDEO_DRIVER: &[u8; 17] = b"SDL_VIDEO_DRIVER\0";

/// Opaque `SDL_Window`.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct Window {
    _unused: [u8; 0],
}

/// Opaque `SDL_Renderer`.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct Renderer {
    _unused: [u8; 0],
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct FRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct FPoint {
    pub x: f32,
    pub y: f32,
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct CommonEvent {
    pub type_: u32,
    pub reserved: u32,
    pub timestamp: u64,
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct QuitEvent {
    pub type_: EventType,
    pub reserved: u32,
    pub timestamp: u64,
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct WindowEvent {
    pub type_: EventType,
    pub reserved: u32,
    pub timestamp: u64,
    pub windowID: WindowID,
    pub data1: i32,
    pub data2: i32,
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct KeyboardEvent {
    pub type_: EventType,
    pub reserved: u32,
    pub timestamp: u64,
    pub windowID: WindowID,
    pub which: KeyboardID,
    pub scancode: Scancode,
    pub key: Keycode,
    pub mod_: Keymod,
    pub raw: u16,
    pub down: bool,
    pub repeat: bool,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct TextInputEvent {
    pub type_: EventType,
    pub reserved: u32,
    pub timestamp: u64,
    pub windowID: WindowID,
    pub text: *const c_char,
}

impl Default for TextInputEvent {
    fn default() -> Self {
        Self {
            type_: 0,
            reserved: 0,
            timestamp: 0,
            windowID: 0,
            text: std::ptr::null(),
        }
    }
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct MouseMotionEvent {
    pub type_: EventType,
    pub reserved: u32,
    pub timestamp: u64,
    pub windowID: WindowID,
    pub which: MouseID,
    pub state: MouseButtonFlags,
    pub x: f32,
    pub y: f32,
    pub xrel: f32,
    pub yrel: f32,
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct MouseButtonEvent {
    pub type_: EventType,
    pub reserved: u32,
    pub timestamp: u64,
    pub windowID: WindowID,
    pub which: MouseID,
    pub button: u8,
    pub down: bool,
    pub clicks: u8,
    pub padding: u8,
    pub x: f32,
    pub y: f32,
}

/// `SDL_Event`: every event variant shares the leading `type_` field.
#[repr(C)]
#[derive(Copy, Clone)]
pub union Event {
    pub type_: u32,
    pub common: CommonEvent,
    pub quit: QuitEvent,
    pub window: WindowEvent,
    pub key: KeyboardEvent,
    pub text: TextInputEvent,
    pub motion: MouseMotionEvent,
    pub button: MouseButtonEvent,
    pub padding: [u8; 128],
}

impl Default for Event {
    fn default() -> Self {
        Self { padding: [0; 128] }
    }
}

impl std::fmt::Debug for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Event {{ type_: {:#x} }}", unsafe { self.type_ })
    }
}

/// Declares the dynamically loaded symbol table.
///
/// Every entry produces a private function pointer field resolved from the
/// library at load time and an `unsafe` forwarding method of the same name.
macro_rules! sdl_functions {
    ($(
        $(#[$meta:meta])*
        fn $name:ident = $symbol:literal ($($arg:ident: $ty:ty),* $(,)?) $(-> $ret:ty)?;
    )*) => {
        /// Function table for a loaded SDL3 shared library.
        ///
        /// All symbols are required: loading fails if any of them is missing.
        pub struct Sdl3Lib {
            __library: libloading::Library,
            $($name: unsafe extern "C" fn($($ty),*) $(-> $ret)?,)*
        }

        impl Sdl3Lib {
            /// Opens the shared library at `path` and resolves every symbol.
            pub unsafe fn new<P>(path: P) -> Result<Self, libloading::Error>
            where
                P: AsRef<std::ffi::OsStr>,
            {
                let library = unsafe { libloading::Library::new(path)? };
                unsafe { Self::from_library(library) }
            }

            /// Resolves every symbol from an already opened library.
            pub unsafe fn from_library<L>(library: L) -> Result<Self, libloading::Error>
            where
                L: Into<libloading::Library>,
            {
                let __library = library.into();
                $(
                    let $name = unsafe {
                        __library
                            .get::<unsafe extern "C" fn($($ty),*) $(-> $ret)?>(
                                concat!($symbol, "\0").as_bytes(),
                            )
                            .map(|sym| *sym)?
                    };
                )*
                Ok(Self { __library, $($name,)* })
            }

            $(
                $(#[$meta])*
                pub unsafe fn $name(&self, $($arg: $ty),*) $(-> $ret)? {
                    unsafe { (self.$name)($($arg),*) }
                }
            )*
        }
    };
}

sdl_functions! {
    fn init = "SDL_Init"(flags: InitFlags) -> bool;
    fn quit = "SDL_Quit"();
    /// Returns a library-owned message; never free it.
    fn get_error = "SDL_GetError"() -> *const c_char;
    fn clear_error = "SDL_ClearError"() -> bool;
    fn free = "SDL_free"(mem: *mut c_void);
    fn get_version = "SDL_GetVersion"() -> c_int;
    fn get_revision = "SDL_GetRevision"() -> *const c_char;
    fn get_platform = "SDL_GetPlatform"() -> *const c_char;
    fn delay = "SDL_Delay"(ms: u32);
    fn get_ticks = "SDL_GetTicks"() -> u64;

    fn set_hint = "SDL_SetHint"(name: *const c_char, value: *const c_char) -> bool;
    fn get_hint = "SDL_GetHint"(name: *const c_char) -> *const c_char;

    fn set_clipboard_text = "SDL_SetClipboardText"(text: *const c_char) -> bool;
    /// Returns a caller-owned string; release it with [`Sdl3Lib::free`].
    fn get_clipboard_text = "SDL_GetClipboardText"() -> *mut c_char;
    fn has_clipboard_text = "SDL_HasClipboardText"() -> bool;

    fn get_base_path = "SDL_GetBasePath"() -> *const c_char;
    /// Returns a caller-owned string; release it with [`Sdl3Lib::free`].
    fn get_pref_path = "SDL_GetPrefPath"(org: *const c_char, app: *const c_char) -> *mut c_char;

    fn create_window = "SDL_CreateWindow"(
        title: *const c_char,
        w: c_int,
        h: c_int,
        flags: WindowFlags,
    ) -> *mut Window;
    fn destroy_window = "SDL_DestroyWindow"(window: *mut Window);
    fn get_window_id = "SDL_GetWindowID"(window: *mut Window) -> WindowID;
    fn set_window_title = "SDL_SetWindowTitle"(window: *mut Window, title: *const c_char) -> bool;
    fn get_window_title = "SDL_GetWindowTitle"(window: *mut Window) -> *const c_char;
    fn get_window_size = "SDL_GetWindowSize"(window: *mut Window, w: *mut c_int, h: *mut c_int) -> bool;
    fn show_window = "SDL_ShowWindow"(window: *mut Window) -> bool;

    fn show_simple_message_box = "SDL_ShowSimpleMessageBox"(
        flags: MessageBoxFlags,
        title: *const c_char,
        message: *const c_char,
        window: *mut Window,
    ) -> bool;

    fn get_num_render_drivers = "SDL_GetNumRenderDrivers"() -> c_int;
    fn get_render_driver = "SDL_GetRenderDriver"(index: c_int) -> *const c_char;
    fn create_renderer = "SDL_CreateRenderer"(window: *mut Window, name: *const c_char) -> *mut Renderer;
    fn destroy_renderer = "SDL_DestroyRenderer"(renderer: *mut Renderer);
    fn get_renderer_name = "SDL_GetRendererName"(renderer: *mut Renderer) -> *const c_char;
    fn set_render_draw_color = "SDL_SetRenderDrawColor"(
        renderer: *mut Renderer,
        r: u8,
        g: u8,
        b: u8,
        a: u8,
    ) -> bool;
    fn render_clear = "SDL_RenderClear"(renderer: *mut Renderer) -> bool;
    fn render_fill_rect = "SDL_RenderFillRect"(renderer: *mut Renderer, rect: *const FRect) -> bool;
    fn render_rect = "SDL_RenderRect"(renderer: *mut Renderer, rect: *const FRect) -> bool;
    fn render_line = "SDL_RenderLine"(renderer: *mut Renderer, x1: f32, y1: f32, x2: f32, y2: f32) -> bool;
    fn render_point = "SDL_RenderPoint"(renderer: *mut Renderer, x: f32, y: f32) -> bool;
    fn render_debug_text = "SDL_RenderDebugText"(
        renderer: *mut Renderer,
        x: f32,
        y: f32,
        str_: *const c_char,
    ) -> bool;
    fn render_present = "SDL_RenderPresent"(renderer: *mut Renderer) -> bool;

    fn poll_event = "SDL_PollEvent"(event: *mut Event) -> bool;
}
