//! Call-recording test doubles.
//!
//! [`RecordingSurface`] implements [`DrawingSurface`] by appending every
//! primitive to a fixed-capacity log instead of touching pixels, so primitive
//! counts, radii and call order can be asserted on the host. [`RecordingDelay`]
//! does the same for the reveal pause.
//!
//! Both are `no_std` and allocation-free (`heapless::Vec`), so they also work as
//! dry-run sinks on the device.

use embedded_graphics::prelude::Point;
use embedded_hal::delay::DelayNs;
use heapless::Vec;

use crate::surface::DrawingSurface;

/// Capacity that fits one full pass of the built-in overlay.
pub const SCENE_CAPACITY: usize = 1024;

/// One primitive issued against a surface.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DrawCall<C> {
    FillScreen(C),
    Pixel { point: Point, color: C },
    Line { start: Point, end: Point, color: C },
    CircleOutline { center: Point, radius: i32, color: C },
    FillCircle { center: Point, radius: i32, color: C },
    Rotation(u8),
    Brightness(u8),
}

impl<C> DrawCall<C> {
    #[inline]
    pub const fn is_pixel(&self) -> bool { matches!(self, Self::Pixel { .. }) }

    #[inline]
    pub const fn is_line(&self) -> bool { matches!(self, Self::Line { .. }) }

    #[inline]
    pub const fn is_circle_outline(&self) -> bool { matches!(self, Self::CircleOutline { .. }) }

    #[inline]
    pub const fn is_fill_circle(&self) -> bool { matches!(self, Self::FillCircle { .. }) }
}

/// Surface that records calls instead of drawing.
///
/// Calls beyond capacity `N` are counted in [`dropped`](Self::dropped) rather
/// than stored.
pub struct RecordingSurface<C, const N: usize> {
    calls: Vec<DrawCall<C>, N>,
    ready: bool,
    dropped: usize,
}

/// Recorder sized for the built-in overlay.
pub type SceneRecorder<C> = RecordingSurface<C, SCENE_CAPACITY>;

impl<C, const N: usize> RecordingSurface<C, N> {
    /// Ready recorder with an empty log.
    pub const fn new() -> Self {
        Self {
            calls: Vec::new(),
            ready: true,
            dropped: 0,
        }
    }

    /// Recorder that reports itself as not yet brought up.
    pub const fn unavailable() -> Self {
        Self {
            calls: Vec::new(),
            ready: false,
            dropped: 0,
        }
    }

    pub fn calls(&self) -> &[DrawCall<C>] { &self.calls }

    pub fn len(&self) -> usize { self.calls.len() }

    pub fn is_empty(&self) -> bool { self.calls.is_empty() }

    /// Calls that did not fit in the log.
    pub const fn dropped(&self) -> usize { self.dropped }

    /// Number of recorded calls matching `pred`.
    pub fn count(
        &self,
        pred: impl Fn(&DrawCall<C>) -> bool,
    ) -> usize {
        self.calls.iter().filter(|call| pred(*call)).count()
    }

    /// Points of every recorded pixel plot, in call order.
    pub fn pixels(&self) -> impl Iterator<Item = Point> + '_ {
        self.calls.iter().filter_map(|call| match call {
            DrawCall::Pixel { point, .. } => Some(*point),
            _ => None,
        })
    }

    /// Radii of every recorded circle outline, in call order.
    pub fn outline_radii(&self) -> impl Iterator<Item = i32> + '_ {
        self.calls.iter().filter_map(|call| match call {
            DrawCall::CircleOutline { radius, .. } => Some(*radius),
            _ => None,
        })
    }

    pub fn clear(&mut self) {
        self.calls.clear();
        self.dropped = 0;
    }

    fn record(
        &mut self,
        call: DrawCall<C>,
    ) {
        if self.calls.push(call).is_err() {
            self.dropped += 1;
        }
    }
}

impl<C, const N: usize> Default for RecordingSurface<C, N> {
    fn default() -> Self { Self::new() }
}

impl<C, const N: usize> DrawingSurface for RecordingSurface<C, N>
where
    C: Copy,
{
    type Color = C;

    fn is_ready(&self) -> bool { self.ready }

    fn fill_screen(
        &mut self,
        color: C,
    ) {
        self.record(DrawCall::FillScreen(color));
    }

    fn draw_pixel(
        &mut self,
        point: Point,
        color: C,
    ) {
        self.record(DrawCall::Pixel { point, color });
    }

    fn draw_line(
        &mut self,
        start: Point,
        end: Point,
        color: C,
    ) {
        self.record(DrawCall::Line { start, end, color });
    }

    fn draw_circle_outline(
        &mut self,
        center: Point,
        radius: i32,
        color: C,
    ) {
        self.record(DrawCall::CircleOutline { center, radius, color });
    }

    fn fill_circle(
        &mut self,
        center: Point,
        radius: i32,
        color: C,
    ) {
        self.record(DrawCall::FillCircle { center, radius, color });
    }

    fn set_rotation(
        &mut self,
        rotation: u8,
    ) {
        self.record(DrawCall::Rotation(rotation));
    }

    fn set_brightness(
        &mut self,
        level: u8,
    ) {
        self.record(DrawCall::Brightness(level));
    }
}

// =============================================================================
// Delay Recorder
// =============================================================================

/// Delay that returns immediately and remembers what was requested.
#[derive(Clone, Copy, Default, Debug)]
pub struct RecordingDelay {
    elapsed_ns: u64,
    pauses: u32,
}

impl RecordingDelay {
    pub const fn new() -> Self {
        Self {
            elapsed_ns: 0,
            pauses: 0,
        }
    }

    /// Number of delay requests.
    pub const fn pauses(&self) -> u32 { self.pauses }

    /// Sum of all requested delays in milliseconds.
    pub const fn elapsed_ms(&self) -> u64 { self.elapsed_ns / 1_000_000 }
}

impl DelayNs for RecordingDelay {
    fn delay_ns(
        &mut self,
        ns: u32,
    ) {
        self.elapsed_ns += u64::from(ns);
        self.pauses += 1;
    }

    fn delay_us(
        &mut self,
        us: u32,
    ) {
        self.elapsed_ns += u64::from(us) * 1_000;
        self.pauses += 1;
    }

    fn delay_ms(
        &mut self,
        ms: u32,
    ) {
        self.elapsed_ns += u64::from(ms) * 1_000_000;
        self.pauses += 1;
    }
}
