// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! Event polling and translation of `SDL_Event` into Rust types.

use crate::{
    Sdl,
    string::foreign::{Ownership, decode},
};

/// Virtual key code (`SDL_Keycode`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Keycode(pub u32);

impl Keycode {
    pub const RETURN: Keycode = Keycode(sdl3_sys::SDLK_RETURN);
    pub const ESCAPE: Keycode = Keycode(sdl3_sys::SDLK_ESCAPE);
    pub const SPACE: Keycode = Keycode(sdl3_sys::SDLK_SPACE);
}

/// What happened to a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEventKind {
    Shown,
    Hidden,
    Exposed,
    Moved { x: i32, y: i32 },
    Resized { width: i32, height: i32 },
    PixelSizeChanged { width: i32, height: i32 },
    Minimized,
    Maximized,
    Restored,
    MouseEnter,
    MouseLeave,
    FocusGained,
    FocusLost,
    CloseRequested,
    Occluded,
    EnterFullscreen,
    LeaveFullscreen,
    /// The window is about to be destroyed.
    Destroyed,
    /// A window event this crate does not model, with its raw type.
    Other(u32),
}

/// A polled event.
///
/// Events carry copies of the native data; they stay valid after the next poll.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The user asked the application to quit (last window closed, Ctrl+C, ...).
    Quit { timestamp: u64 },
    /// The OS is terminating the application.
    Terminating { timestamp: u64 },
    Window {
        timestamp: u64,
        window_id: u32,
        kind: WindowEventKind,
    },
    KeyDown {
        timestamp: u64,
        window_id: u32,
        keycode: Keycode,
        scancode: u32,
        repeat: bool,
    },
    KeyUp {
        timestamp: u64,
        window_id: u32,
        keycode: Keycode,
        scancode: u32,
    },
    TextInput {
        timestamp: u64,
        window_id: u32,
        text: String,
    },
    MouseMotion {
        timestamp: u64,
        window_id: u32,
        x: f32,
        y: f32,
        xrel: f32,
        yrel: f32,
    },
    MouseButtonDown {
        timestamp: u64,
        window_id: u32,
        button: u8,
        clicks: u8,
        x: f32,
        y: f32,
    },
    MouseButtonUp {
        timestamp: u64,
        window_id: u32,
        button: u8,
        clicks: u8,
        x: f32,
        y: f32,
    },
    /// Any event this crate does not model.
    Unknown { event_type: u32, timestamp: u64 },
}

impl Event {
    /// Copies a native event.
    ///
    /// # Safety
    ///
    /// `raw` must be fully initialized for its `type_`, as filled in by
    /// `SDL_PollEvent`. For text input events, `text` must be null or a valid
    /// null-terminated string.
    pub unsafe fn from_raw(raw: &sdl3_sys::Event) -> Self {
        let event_type = unsafe { raw.type_ };
        let timestamp = unsafe { raw.common.timestamp };
        match event_type {
            sdl3_sys::SDL_EVENT_QUIT => Event::Quit { timestamp },
            sdl3_sys::SDL_EVENT_TERMINATING => Event::Terminating { timestamp },
            sdl3_sys::SDL_EVENT_WINDOW_FIRST..=sdl3_sys::SDL_EVENT_WINDOW_LAST => {
                let window = unsafe { raw.window };
                Event::Window {
                    timestamp,
                    window_id: window.windowID,
                    kind: window_event_kind(&window),
                }
            }
            sdl3_sys::SDL_EVENT_KEY_DOWN | sdl3_sys::SDL_EVENT_KEY_UP => {
                let key = unsafe { raw.key };
                if event_type == sdl3_sys::SDL_EVENT_KEY_DOWN {
                    Event::KeyDown {
                        timestamp,
                        window_id: key.windowID,
                        keycode: Keycode(key.key),
                        scancode: key.scancode,
                        repeat: key.repeat,
                    }
                } else {
                    Event::KeyUp {
                        timestamp,
                        window_id: key.windowID,
                        keycode: Keycode(key.key),
                        scancode: key.scancode,
                    }
                }
            }
            sdl3_sys::SDL_EVENT_TEXT_INPUT => {
                let text = unsafe { raw.text };
                Event::TextInput {
                    timestamp,
                    window_id: text.windowID,
                    text: unsafe { decode(text.text, Ownership::Borrowed) }.unwrap_or_default(),
                }
            }
            sdl3_sys::SDL_EVENT_MOUSE_MOTION => {
                let motion = unsafe { raw.motion };
                Event::MouseMotion {
                    timestamp,
                    window_id: motion.windowID,
                    x: motion.x,
                    y: motion.y,
                    xrel: motion.xrel,
                    yrel: motion.yrel,
                }
            }
            sdl3_sys::SDL_EVENT_MOUSE_BUTTON_DOWN => {
                let button = unsafe { raw.button };
                Event::MouseButtonDown {
                    timestamp,
                    window_id: button.windowID,
                    button: button.button,
                    clicks: button.clicks,
                    x: button.x,
                    y: button.y,
                }
            }
            sdl3_sys::SDL_EVENT_MOUSE_BUTTON_UP => {
                let button = unsafe { raw.button };
                Event::MouseButtonUp {
                    timestamp,
                    window_id: button.windowID,
                    button: button.button,
                    clicks: button.clicks,
                    x: button.x,
                    y: button.y,
                }
            }
            event_type => Event::Unknown {
                event_type,
                timestamp,
            },
        }
    }

    /// Returns `true` for events that ask the application to stop: quit,
    /// termination, or a window close request.
    pub fn is_quit(&self) -> bool {
        matches!(
            self,
            Event::Quit { .. }
                | Event::Terminating { .. }
                | Event::Window {
                    kind: WindowEventKind::CloseRequested,
                    ..
                }
        )
    }
}

fn window_event_kind(window: &sdl3_sys::WindowEvent) -> WindowEventKind {
    let (data1, data2) = (window.data1, window.data2);
    match window.type_ {
        sdl3_sys::SDL_EVENT_WINDOW_SHOWN => WindowEventKind::Shown,
        sdl3_sys::SDL_EVENT_WINDOW_HIDDEN => WindowEventKind::Hidden,
        sdl3_sys::SDL_EVENT_WINDOW_EXPOSED => WindowEventKind::Exposed,
        sdl3_sys::SDL_EVENT_WINDOW_MOVED => WindowEventKind::Moved { x: data1, y: data2 },
        sdl3_sys::SDL_EVENT_WINDOW_RESIZED => WindowEventKind::Resized {
            width: data1,
            height: data2,
        },
        sdl3_sys::SDL_EVENT_WINDOW_PIXEL_SIZE_CHANGED => WindowEventKind::PixelSizeChanged {
            width: data1,
            height: data2,
        },
        sdl3_sys::SDL_EVENT_WINDOW_MINIMIZED => WindowEventKind::Minimized,
        sdl3_sys::SDL_EVENT_WINDOW_MAXIMIZED => WindowEventKind::Maximized,
        sdl3_sys::SDL_EVENT_WINDOW_RESTORED => WindowEventKind::Restored,
        sdl3_sys::SDL_EVENT_WINDOW_MOUSE_ENTER => WindowEventKind::MouseEnter,
        sdl3_sys::SDL_EVENT_WINDOW_MOUSE_LEAVE => WindowEventKind::MouseLeave,
        sdl3_sys::SDL_EVENT_WINDOW_FOCUS_GAINED => WindowEventKind::FocusGained,
        sdl3_sys::SDL_EVENT_WINDOW_FOCUS_LOST => WindowEventKind::FocusLost,
        sdl3_sys::SDL_EVENT_WINDOW_CLOSE_REQUESTED => WindowEventKind::CloseRequested,
        sdl3_sys::SDL_EVENT_WINDOW_OCCLUDED => WindowEventKind::Occluded,
        sdl3_sys::SDL_EVENT_WINDOW_ENTER_FULLSCREEN => WindowEventKind::EnterFullscreen,
        sdl3_sys::SDL_EVENT_WINDOW_LEAVE_FULLSCREEN => WindowEventKind::LeaveFullscreen,
        sdl3_sys::SDL_EVENT_WINDOW_DESTROYED => WindowEventKind::Destroyed,
        other => WindowEventKind::Other(other),
    }
}

/// Iterator over pending events, see [`Sdl::poll_iter`].
pub struct PollIter<'a> {
    sdl: &'a Sdl,
}

impl Iterator for PollIter<'_> {
    type Item = Event;

    fn next(&mut self) -> Option<Event> {
        self.sdl.poll_event()
    }
}

impl Sdl {
    /// Takes the next pending event from the queue, `None` if it is empty.
    ///
    /// Must be called from the thread that initialized video.
    pub fn poll_event(&self) -> Option<Event> {
        let mut raw = sdl3_sys::Event::default();
        if unsafe { self.context.api.poll_event(&mut raw) } {
            Some(unsafe { Event::from_raw(&raw) })
        } else {
            None
        }
    }

    /// Drains the pending events.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use sdl3::Sdl;
    /// # fn example(sdl: Sdl) {
    /// let mut running = true;
    /// while running {
    ///     for event in sdl.poll_iter() {
    ///         if event.is_quit() {
    ///             running = false;
    ///         }
    ///     }
    /// }
    /// # }
    /// ```
    pub fn poll_iter(&self) -> PollIter<'_> {
        PollIter { sdl: self }
    }
}
