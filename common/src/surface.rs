//! Drawing surface capability consumed by the renderer.
//!
//! The renderer never talks to a display directly. It issues primitive calls
//! on a [`DrawingSurface`], which keeps the core independent of panel drivers
//! and lets tests substitute a recorder
//! ([`RecordingSurface`](crate::recording::RecordingSurface)).
//!
//! [`GraphicsSurface`] adapts any `embedded_graphics` [`DrawTarget`] (panel
//! driver, framebuffer, or `SimulatorDisplay`) to the capability.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle};

/// Primitive operations a display must provide to host the overlay.
///
/// All drawing calls are infallible at this layer: a surface writes straight
/// into its framebuffer. Readiness is the only precondition and is checked by
/// the composer before anything is drawn.
pub trait DrawingSurface {
    /// Packed pixel value, passed through untouched.
    type Color: Copy;

    /// Whether the boot sequence has brought the surface up.
    fn is_ready(&self) -> bool { true }

    fn fill_screen(
        &mut self,
        color: Self::Color,
    );

    fn draw_pixel(
        &mut self,
        point: Point,
        color: Self::Color,
    );

    fn draw_line(
        &mut self,
        start: Point,
        end: Point,
        color: Self::Color,
    );

    /// Outline of radius `radius`. Negative radii draw nothing.
    fn draw_circle_outline(
        &mut self,
        center: Point,
        radius: i32,
        color: Self::Color,
    );

    /// Disc of radius `radius`. Negative radii draw nothing.
    fn fill_circle(
        &mut self,
        center: Point,
        radius: i32,
        color: Self::Color,
    );

    /// Setup only: panel rotation.
    fn set_rotation(
        &mut self,
        rotation: u8,
    );

    /// Setup only: backlight level.
    fn set_brightness(
        &mut self,
        level: u8,
    );
}

// =============================================================================
// embedded-graphics Adapter
// =============================================================================

/// [`DrawingSurface`] backed by an `embedded_graphics` draw target.
///
/// Circles of radius `r` are drawn with diameter `2r + 1` so the outline
/// passes through `center ± r`; negative radii are skipped. Rotation and brightness are recorded as panel
/// settings; targets without a backlight (framebuffers, the simulator) have no
/// further use for them.
pub struct GraphicsSurface<D> {
    target: D,
    ready: bool,
    rotation: u8,
    brightness: u8,
}

impl<D> GraphicsSurface<D>
where
    D: DrawTarget,
{
    /// Wrap a draw target. The surface stays unavailable until
    /// [`mark_ready`](Self::mark_ready) is called.
    pub const fn new(target: D) -> Self {
        Self {
            target,
            ready: false,
            rotation: 0,
            brightness: 0,
        }
    }

    /// Signal that power and bus bring-up completed.
    pub fn mark_ready(&mut self) { self.ready = true; }

    pub const fn rotation(&self) -> u8 { self.rotation }

    pub const fn brightness(&self) -> u8 { self.brightness }

    pub const fn target(&self) -> &D { &self.target }

    pub fn into_inner(self) -> D { self.target }
}

/// Bounding diameter of a circle of `radius`, `None` when negative.
#[inline]
fn diameter(radius: i32) -> Option<u32> { u32::try_from(radius).ok().map(|r| 2 * r + 1) }

impl<D> DrawingSurface for GraphicsSurface<D>
where
    D: DrawTarget,
{
    type Color = D::Color;

    fn is_ready(&self) -> bool { self.ready }

    fn fill_screen(
        &mut self,
        color: Self::Color,
    ) {
        self.target.clear(color).ok();
    }

    fn draw_pixel(
        &mut self,
        point: Point,
        color: Self::Color,
    ) {
        Pixel(point, color).draw(&mut self.target).ok();
    }

    fn draw_line(
        &mut self,
        start: Point,
        end: Point,
        color: Self::Color,
    ) {
        Line::new(start, end)
            .into_styled(PrimitiveStyle::with_stroke(color, 1))
            .draw(&mut self.target)
            .ok();
    }

    fn draw_circle_outline(
        &mut self,
        center: Point,
        radius: i32,
        color: Self::Color,
    ) {
        let Some(size) = diameter(radius) else {
            return;
        };
        Circle::with_center(center, size)
            .into_styled(PrimitiveStyle::with_stroke(color, 1))
            .draw(&mut self.target)
            .ok();
    }

    fn fill_circle(
        &mut self,
        center: Point,
        radius: i32,
        color: Self::Color,
    ) {
        let Some(size) = diameter(radius) else {
            return;
        };
        Circle::with_center(center, size)
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(&mut self.target)
            .ok();
    }

    fn set_rotation(
        &mut self,
        rotation: u8,
    ) {
        self.rotation = rotation;
    }

    fn set_brightness(
        &mut self,
        level: u8,
    ) {
        self.brightness = level;
    }
}
