//! Error types for overlay rendering.
//!
//! Every check runs before the affected descriptor issues its first primitive,
//! so a rejected shape never leaves partial output on the surface.

use thiserror::Error;

/// Reason a shape descriptor was rejected.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
pub enum GeometryFault {
    /// Ring or arc radius below zero.
    #[error("negative radius {0}")]
    NegativeRadius(i32),
    /// Ring or arc thickness below zero.
    #[error("negative thickness {0}")]
    NegativeThickness(i32),
    /// Outermost thickened radius does not fit in an `i32`.
    #[error("radius {radius} plus thickness {thickness} overflows")]
    RadiusOverflow { radius: i32, thickness: i32 },
    /// Radial line length below zero.
    #[error("negative length {0}")]
    NegativeLength(i32),
    /// Arc ends before it starts.
    #[error("arc end {end} is before start {start}")]
    InvertedArc { start: i32, end: i32 },
    /// Radial line angle outside `[0, 360)`.
    #[error("angle {0} outside [0, 360)")]
    AngleOutOfRange(i32),
}

/// Errors surfaced by the renderer and the scene composer.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
pub enum OverlayError {
    /// The drawing surface has not been brought up yet.
    #[error("drawing surface unavailable")]
    SurfaceUnavailable,
    /// A shape descriptor violates its invariants.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(#[from] GeometryFault),
}
