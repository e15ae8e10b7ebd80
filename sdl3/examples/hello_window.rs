// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! Opens a window, greets the user and animates a rectangle until the window
//! is closed or Escape is pressed.
//!
//! ```text
//! cargo run --example hello_window -- --width 800 --height 600
//! ```

mod common;

use std::{path::PathBuf, time::Duration};

use clap::Parser;
use sdl3::{Color, Event, FRect, Keycode, MessageBoxFlags, WindowFlags};
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(version = clap::crate_version!(), about = "SDL3 window, event and render demo")]
struct Args {
    /// SDL3 shared library to load.
    #[arg(long, env = "SDL3_LIBRARY_PATH")]
    library: Option<PathBuf>,

    /// JSON configuration file (subsystems, hints, string buffer size).
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, default_value_t = 640)]
    width: i32,

    #[arg(long, default_value_t = 480)]
    height: i32,

    /// Render driver to request; SDL picks one when omitted.
    #[arg(long)]
    renderer: Option<String>,

    /// Delay between frames, in milliseconds.
    #[arg(long, default_value_t = 10)]
    frame_delay_ms: u64,

    /// Skip the welcome message box.
    #[arg(long)]
    no_message_box: bool,
}

fn main() {
    common::setup_logging();
    let args = Args::parse();

    if let Err(error) = run(args) {
        error!("{error}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), sdl3::Error> {
    let sdl = common::open_sdl(args.config, args.library)?;

    let window = sdl
        .create_window("Hello World!", args.width, args.height, WindowFlags::OPENGL)
        .inspect_err(|error| error!("Failed to create window! {error}"))?;

    if !args.no_message_box {
        sdl.show_simple_message_box(
            MessageBoxFlags::INFORMATION,
            "Hello World!",
            "Welcome to SDL3 with Rust!",
            Some(&window),
        )?;
    }

    let renderer = window
        .create_renderer(args.renderer.as_deref())
        .inspect_err(|error| error!("Failed to create renderer! {error}"))?;
    info!(
        "Rendering with \"{}\" (available: {:?}).",
        renderer.name(),
        sdl.render_drivers()
    );

    let frame_delay = Duration::from_millis(args.frame_delay_ms);
    let area = FRect {
        x: 160.0,
        y: 160.0,
        w: 320.0,
        h: 160.0,
    };
    let mut color: u32 = 0;
    let mut running = true;

    while running {
        for event in sdl.poll_iter() {
            match event {
                Event::KeyDown {
                    keycode: Keycode::ESCAPE,
                    ..
                } => running = false,
                event if event.is_quit() => running = false,
                _ => {}
            }
        }

        color = (color + 1) & 0xFF_FF_FF;

        renderer.set_draw_color(Color::WHITE)?;
        renderer.clear()?;
        renderer.set_draw_color(Color::from_rgb24(color))?;
        renderer.fill_rect(&area)?;
        renderer.set_draw_color(Color::BLACK)?;
        renderer.debug_text(area.x, area.y - 16.0, &format!("color #{color:06X}"))?;
        renderer.present()?;

        sdl.delay(frame_delay);
    }

    info!("Shutting down after {:?}.", sdl.ticks());
    renderer.destroy();
    window.destroy()?;
    sdl.destroy()
}
