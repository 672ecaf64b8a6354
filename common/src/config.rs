//! Display and scene configuration constants.
//!
//! # Pre-computed Layout Constants
//!
//! The overlay is laid out for a square 480x480 panel. Center coordinates are
//! computed at compile time as `i32` so drawing code never casts or divides.
//! [`SceneConfig`] bundles the values the composer needs so tests and other
//! panel sizes can supply their own.

use embedded_graphics::prelude::Point;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels.
pub const SCREEN_WIDTH: u32 = 480;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 480;

/// Screen center X coordinate.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

/// Screen center Y coordinate.
pub const CENTER_Y: i32 = (SCREEN_HEIGHT / 2) as i32;

/// Panel rotation applied during setup (0 = native orientation).
pub const DEFAULT_ROTATION: u8 = 0;

/// Backlight level applied during setup (255 = maximum).
pub const DEFAULT_BRIGHTNESS: u8 = 255;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Pause between the rings and the rest of the overlay, in milliseconds.
pub const REVEAL_PAUSE_MS: u32 = 200;

// =============================================================================
// Scene Configuration
// =============================================================================

/// Per-panel values consumed by the scene composer.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SceneConfig {
    /// Full crosshair width in pixels.
    pub width: i32,
    /// Full crosshair height in pixels.
    pub height: i32,
    /// Center of every ring and arc, and crossing point of the crosshair.
    pub center: Point,
    /// Duration of the staged reveal pause.
    pub reveal_pause_ms: u32,
    /// Rotation value handed to the surface during setup.
    pub rotation: u8,
    /// Brightness value handed to the surface during setup.
    pub brightness: u8,
}

impl SceneConfig {
    /// Configuration for the 480x480 tactical panel.
    pub const fn new() -> Self {
        Self {
            width: SCREEN_WIDTH as i32,
            height: SCREEN_HEIGHT as i32,
            center: Point::new(CENTER_X, CENTER_Y),
            reveal_pause_ms: REVEAL_PAUSE_MS,
            rotation: DEFAULT_ROTATION,
            brightness: DEFAULT_BRIGHTNESS,
        }
    }

    /// Same configuration without the reveal pause.
    #[must_use]
    pub const fn without_pause(self) -> Self {
        Self {
            reveal_pause_ms: 0,
            ..self
        }
    }
}

impl Default for SceneConfig {
    fn default() -> Self { Self::new() }
}

const _: () = assert!(SCREEN_WIDTH == SCREEN_HEIGHT);
const _: () = assert!(SCREEN_WIDTH <= i32::MAX as u32);
const _: () = assert!(CENTER_X > 0 && CENTER_Y > 0);
