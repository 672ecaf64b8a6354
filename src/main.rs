//! Tactical overlay simulator for Windows/Linux/macOS.
//!
//! Renders the boot overlay from [`overlay_common`] into an
//! `embedded-graphics-simulator` display of the panel's size, then either
//! shows it in a window or writes a PNG preview.
//!
//! # Boot Sequence
//!
//! 1. **Bring-up** - stands in for power-rail and bus initialization; marks the
//!    drawing surface ready
//! 2. **Panel setup** - rotation, brightness, clear to black
//! 3. **Overlay** - rings, reveal pause, arcs, radial lines, crosshair
//!
//! Set `RUST_LOG=debug` to log every descriptor as it is drawn.

mod config;
mod timing;

use std::path::Path;
use std::thread;

use anyhow::Context;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{OutputSettings, OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use log::info;
use overlay_common::colors::TACTICAL_PALETTE;
use overlay_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use overlay_common::{GraphicsSurface, TACTICAL_SCENE};

use crate::config::{SimulatorOptions, WINDOW_TITLE};
use crate::timing::{FRAME_TIME, StdDelay};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = SimulatorOptions::parse(std::env::args().skip(1))?;

    info!("Starting tactical overlay simulator");
    let display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let mut surface = GraphicsSurface::new(display);
    bring_up(&mut surface);

    info!("Booting tactical display...");
    TACTICAL_SCENE
        .boot(&mut surface, &mut StdDelay, &TACTICAL_PALETTE)
        .context("overlay render failed")?;
    info!("Setup complete!");

    let display = surface.into_inner();
    let output_settings = OutputSettingsBuilder::new().scale(options.scale).build();

    match options.png {
        Some(path) => save_png(&display, &output_settings, &path),
        None => {
            show_window(&display, &output_settings);
            Ok(())
        }
    }
}

/// Simulated power and bus bring-up.
///
/// The desktop display needs no rails or bus setup, so this only logs the
/// stages and hands over a ready surface.
fn bring_up<D>(surface: &mut GraphicsSurface<D>)
where
    D: DrawTarget,
{
    info!("Initializing power...");
    info!("Initializing display...");
    surface.mark_ready();
}

/// Write the rendered overlay to a PNG file.
fn save_png(
    display: &SimulatorDisplay<Rgb565>,
    output_settings: &OutputSettings,
    path: &Path,
) -> anyhow::Result<()> {
    display
        .to_rgb_output_image(output_settings)
        .save_png(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!("Preview written to {}", path.display());
    Ok(())
}

/// Keep the overlay on screen until the window is closed.
fn show_window(
    display: &SimulatorDisplay<Rgb565>,
    output_settings: &OutputSettings,
) {
    let mut window = Window::new(WINDOW_TITLE, output_settings);

    loop {
        window.update(display);
        if window.events().any(|ev| matches!(ev, SimulatorEvent::Quit)) {
            return;
        }
        thread::sleep(FRAME_TIME);
    }
}
