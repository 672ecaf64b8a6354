//! Shape catalog: the static geometry of the tactical overlay.
//!
//! Every descriptor is a named, `Copy` record with a `const fn` constructor and
//! a `const fn` validator, so the built-in [`TACTICAL_CATALOG`] is checked at
//! compile time. If an entry is edited into an invalid shape (negative radius,
//! inverted arc, angle outside `[0, 360)`), compilation fails.
//!
//! # Angle Convention
//!
//! Angles are whole degrees measured clockwise from the positive X axis in
//! screen coordinates (Y grows downward). Arc angles may run past 360 to wrap
//! around the 0° mark, e.g. `300..=380`.

use embedded_graphics::prelude::Point;

use crate::config::{CENTER_X, CENTER_Y};
use crate::error::GeometryFault;

// =============================================================================
// Descriptors
// =============================================================================

/// Full concentric ring around the display center.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RingSpec {
    pub radius_px: i32,
    /// Extra outlines drawn on each side of `radius_px`. Ignored when filled.
    /// Inner outlines may fall below radius zero; surfaces skip those.
    pub thickness_px: i32,
    pub filled: bool,
}

impl RingSpec {
    pub const fn new(
        radius_px: i32,
        thickness_px: i32,
        filled: bool,
    ) -> Self {
        Self {
            radius_px,
            thickness_px,
            filled,
        }
    }

    pub const fn validate(&self) -> Result<(), GeometryFault> {
        if self.radius_px < 0 {
            return Err(GeometryFault::NegativeRadius(self.radius_px));
        }
        if self.thickness_px < 0 {
            return Err(GeometryFault::NegativeThickness(self.thickness_px));
        }
        if !self.filled && self.radius_px.checked_add(self.thickness_px).is_none() {
            return Err(GeometryFault::RadiusOverflow {
                radius: self.radius_px,
                thickness: self.thickness_px,
            });
        }
        Ok(())
    }

    pub const fn is_valid(&self) -> bool { self.validate().is_ok() }
}

/// Degree-stepped arc around the display center.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ArcSpec {
    pub start_angle_deg: i32,
    /// Inclusive end angle, `>= start_angle_deg`.
    pub end_angle_deg: i32,
    pub radius_px: i32,
    /// The arc is repeated at every radius in `radius_px ± thickness_px`.
    /// Negative passes plot through the center onto the opposite side.
    pub thickness_px: i32,
}

impl ArcSpec {
    pub const fn new(
        start_angle_deg: i32,
        end_angle_deg: i32,
        radius_px: i32,
        thickness_px: i32,
    ) -> Self {
        Self {
            start_angle_deg,
            end_angle_deg,
            radius_px,
            thickness_px,
        }
    }

    pub const fn validate(&self) -> Result<(), GeometryFault> {
        if self.start_angle_deg > self.end_angle_deg {
            return Err(GeometryFault::InvertedArc {
                start: self.start_angle_deg,
                end: self.end_angle_deg,
            });
        }
        if self.radius_px < 0 {
            return Err(GeometryFault::NegativeRadius(self.radius_px));
        }
        if self.thickness_px < 0 {
            return Err(GeometryFault::NegativeThickness(self.thickness_px));
        }
        if self.radius_px.checked_add(self.thickness_px).is_none() {
            return Err(GeometryFault::RadiusOverflow {
                radius: self.radius_px,
                thickness: self.thickness_px,
            });
        }
        Ok(())
    }

    pub const fn is_valid(&self) -> bool { self.validate().is_ok() }

    /// Number of pixels plotted for a single radius.
    pub const fn steps(&self) -> u32 { self.end_angle_deg.abs_diff(self.start_angle_deg).saturating_add(1) }

    /// Number of radii the arc is drawn at (`2 * thickness + 1`).
    pub const fn passes(&self) -> u32 { 2 * (self.thickness_px as u32) + 1 }
}

/// Straight line leaving `origin` at a compass-style angle.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RadialLineSpec {
    pub origin: Point,
    pub length_px: i32,
    /// Clockwise from the positive X axis, in `[0, 360)`.
    pub angle_deg: i32,
}

impl RadialLineSpec {
    pub const fn new(
        origin_x: i32,
        origin_y: i32,
        length_px: i32,
        angle_deg: i32,
    ) -> Self {
        Self {
            origin: Point::new(origin_x, origin_y),
            length_px,
            angle_deg,
        }
    }

    pub const fn validate(&self) -> Result<(), GeometryFault> {
        if self.length_px < 0 {
            return Err(GeometryFault::NegativeLength(self.length_px));
        }
        if self.angle_deg < 0 || self.angle_deg >= 360 {
            return Err(GeometryFault::AngleOutOfRange(self.angle_deg));
        }
        Ok(())
    }

    pub const fn is_valid(&self) -> bool { self.validate().is_ok() }
}

// =============================================================================
// Catalog
// =============================================================================

/// Immutable set of overlay descriptors, drawn in declaration order.
#[derive(Clone, Copy, Debug)]
pub struct ShapeCatalog {
    pub rings: &'static [RingSpec],
    pub arcs: &'static [ArcSpec],
    pub radial_lines: &'static [RadialLineSpec],
}

impl ShapeCatalog {
    /// Check every descriptor, returning the first fault found.
    ///
    /// Rings are checked first, then arcs, then radial lines.
    pub const fn validate(&self) -> Result<(), GeometryFault> {
        let mut i = 0;
        while i < self.rings.len() {
            if let Err(fault) = self.rings[i].validate() {
                return Err(fault);
            }
            i += 1;
        }
        i = 0;
        while i < self.arcs.len() {
            if let Err(fault) = self.arcs[i].validate() {
                return Err(fault);
            }
            i += 1;
        }
        i = 0;
        while i < self.radial_lines.len() {
            if let Err(fault) = self.radial_lines[i].validate() {
                return Err(fault);
            }
            i += 1;
        }
        Ok(())
    }

    pub const fn is_valid(&self) -> bool { self.validate().is_ok() }

    /// Total pixel plots issued by all arcs, thickening included.
    pub fn arc_pixel_count(&self) -> u32 { self.arcs.iter().map(|arc| arc.steps() * arc.passes()).sum() }
}

// =============================================================================
// Built-in Tactical Overlay
// =============================================================================

/// Outer bezel ring, 34 px inside the panel edge.
pub const BEZEL_RING: RingSpec = RingSpec::new(CENTER_X - 34, 6, false);

/// Inner calibration circle.
pub const CALIBRATION_RING: RingSpec = RingSpec::new(30, 2, false);

/// Rings drawn before the reveal pause, outermost first.
pub const TACTICAL_RINGS: [RingSpec; 2] = [BEZEL_RING, CALIBRATION_RING];

/// Arc segments. The first entry is intentionally repeated.
pub const TACTICAL_ARCS: [ArcSpec; 5] = [
    ArcSpec::new(300, 380, 60, 0),
    ArcSpec::new(300, 380, 60, 0),
    ArcSpec::new(55, 240, 60, 0),
    ArcSpec::new(55, 90, 90, 0),
    ArcSpec::new(180, 380, 90, 0),
];

/// Length shared by every radial line.
pub const RADIAL_LINE_LENGTH: i32 = 134;

/// Angled lines fanning out around the calibration circle.
pub const TACTICAL_RADIAL_LINES: [RadialLineSpec; 6] = [
    RadialLineSpec::new(CENTER_X + 32, CENTER_Y + 36, RADIAL_LINE_LENGTH, 55),
    RadialLineSpec::new(CENTER_X + 42, CENTER_Y + 18, RADIAL_LINE_LENGTH, 15),
    RadialLineSpec::new(CENTER_X + 42, CENTER_Y - 18, RADIAL_LINE_LENGTH, 345),
    RadialLineSpec::new(CENTER_X + 24, CENTER_Y - 36, RADIAL_LINE_LENGTH, 295),
    RadialLineSpec::new(CENTER_X - 24, CENTER_Y - 36, RADIAL_LINE_LENGTH, 240),
    RadialLineSpec::new(CENTER_X - 38, CENTER_Y - 18, RADIAL_LINE_LENGTH, 200),
];

/// The boot overlay catalog.
pub const TACTICAL_CATALOG: ShapeCatalog = ShapeCatalog {
    rings: &TACTICAL_RINGS,
    arcs: &TACTICAL_ARCS,
    radial_lines: &TACTICAL_RADIAL_LINES,
};

// Compile-time validation: the built-in overlay must be drawable
const _: () = assert!(TACTICAL_CATALOG.is_valid());
