//! Color constants for the tactical overlay.
//!
//! All colors are `Rgb565` (5 bits red, 6 bits green, 5 bits blue), the native
//! pixel format of the target panel. The rendering core never looks inside a
//! color; it only forwards these values to the drawing surface.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

/// Pure black. Screen background before the overlay is drawn.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Tactical blue used for every overlay stroke.
/// RGB565: (4, 39, 31), raw `0x24FF`.
pub const TACTICAL_BLUE: Rgb565 = Rgb565::new(4, 39, 31);

/// Stroke and background pair used by the boot overlay.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Palette<C> {
    /// Color the screen is cleared to before composing.
    pub background: C,
    /// Color of every ring, arc, line and crosshair.
    pub stroke: C,
}

/// Default palette: tactical blue on black.
pub const TACTICAL_PALETTE: Palette<Rgb565> = Palette {
    background: BLACK,
    stroke: TACTICAL_BLUE,
};
