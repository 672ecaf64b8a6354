//! Geometry renderer: turns shape parameters into primitive draw calls.
//!
//! All functions are stateless. Each one validates its parameters first and
//! returns [`OverlayError::InvalidGeometry`] before touching the surface.
//!
//! # Rasterization Approximations
//!
//! The surface only offers 1 px primitives, so stroke width is faked:
//!
//! - **Ring thickening**: `2 * thickness + 1` concentric outlines at radii
//!   `radius - thickness ..= radius + thickness`.
//! - **Degree-stepped arcs**: one pixel per whole degree. At large radii the arc
//!   length per degree exceeds 1 px and gaps appear between dots. The step is
//!   fixed at 1° so the output stays identical across builds.
//!
//! Offsets from the center or origin are truncated toward zero, which keeps
//! every plotted point within 1 px of the ideal position on each axis. Points
//! beyond the `i32` range saturate at its edge, where any target clips them.
//!
//! Thickening may reach below radius zero. Those ring outlines go to the
//! surface as negative radii, and arc passes plot through the center.

use core::f64::consts::PI;

use embedded_graphics::prelude::Point;

use crate::catalog::{ArcSpec, RadialLineSpec, RingSpec};
use crate::error::{GeometryFault, OverlayError};
use crate::surface::DrawingSurface;

/// Single-precision pi for arc stepping.
const PI_F32: f32 = core::f32::consts::PI;

// =============================================================================
// Pure Point Computation
// =============================================================================

/// End point of a line of `length_px` leaving `origin` at `angle_deg`.
///
/// Angles are clockwise from the positive X axis (screen Y grows downward).
pub fn radial_endpoint(
    origin: Point,
    length_px: i32,
    angle_deg: i32,
) -> Point {
    let radians = f64::from(angle_deg) * PI / 180.0;
    let length = f64::from(length_px);
    let dx = (length * libm::cos(radians)) as i32;
    let dy = (length * libm::sin(radians)) as i32;
    offset_point(origin, dx, dy)
}

/// Point on the circle of `radius_px` around `center` at `angle_deg`.
pub fn arc_point(
    center: Point,
    radius_px: i32,
    angle_deg: i32,
) -> Point {
    let radians = angle_deg as f32 * PI_F32 / 180.0;
    let radius = radius_px as f32;
    let dx = (radius * libm::cosf(radians)) as i32;
    let dy = (radius * libm::sinf(radians)) as i32;
    offset_point(center, dx, dy)
}

#[inline]
const fn offset_point(
    base: Point,
    dx: i32,
    dy: i32,
) -> Point {
    Point::new(base.x.saturating_add(dx), base.y.saturating_add(dy))
}

// =============================================================================
// Primitive Emitters
// =============================================================================

/// Draw one straight line from `origin` to its radial endpoint.
///
/// Issues exactly one line call.
pub fn draw_radial_line<S>(
    surface: &mut S,
    origin: Point,
    length_px: i32,
    angle_deg: i32,
    color: S::Color,
) -> Result<(), OverlayError>
where
    S: DrawingSurface,
{
    RadialLineSpec {
        origin,
        length_px,
        angle_deg,
    }
    .validate()?;

    let end = radial_endpoint(origin, length_px, angle_deg);
    surface.draw_line(origin, end, color);
    Ok(())
}

/// Draw a ring around `center`.
///
/// Filled rings issue one fill call. Outlined rings issue `2 * thickness_px + 1`
/// outline calls, innermost radius first.
pub fn draw_ring<S>(
    surface: &mut S,
    center: Point,
    radius_px: i32,
    filled: bool,
    thickness_px: i32,
    color: S::Color,
) -> Result<(), OverlayError>
where
    S: DrawingSurface,
{
    RingSpec::new(radius_px, thickness_px, filled).validate()?;

    if filled {
        surface.fill_circle(center, radius_px, color);
        return Ok(());
    }

    for offset in -thickness_px..=thickness_px {
        surface.draw_circle_outline(center, radius_px + offset, color);
    }
    Ok(())
}

/// Plot one pixel per degree from `start_deg` to `end_deg` inclusive.
///
/// Issues exactly `end_deg - start_deg + 1` pixel calls. Any radius is
/// accepted; a negative one mirrors the arc through `center`.
pub fn draw_arc_at_radius<S>(
    surface: &mut S,
    center: Point,
    start_deg: i32,
    end_deg: i32,
    radius_px: i32,
    color: S::Color,
) -> Result<(), OverlayError>
where
    S: DrawingSurface,
{
    if start_deg > end_deg {
        return Err(GeometryFault::InvertedArc {
            start: start_deg,
            end: end_deg,
        }
        .into());
    }

    for angle in start_deg..=end_deg {
        surface.draw_pixel(arc_point(center, radius_px, angle), color);
    }
    Ok(())
}

/// Draw an arc at every radius in `radius_px ± thickness_px`, innermost first.
///
/// The whole descriptor is validated before the first pixel.
pub fn draw_thick_arc<S>(
    surface: &mut S,
    center: Point,
    arc: &ArcSpec,
    color: S::Color,
) -> Result<(), OverlayError>
where
    S: DrawingSurface,
{
    arc.validate()?;

    for offset in -arc.thickness_px..=arc.thickness_px {
        draw_arc_at_radius(
            surface,
            center,
            arc.start_angle_deg,
            arc.end_angle_deg,
            arc.radius_px + offset,
            color,
        )?;
    }
    Ok(())
}

/// Draw the full-height vertical and full-width horizontal lines through `center`.
///
/// The vertical line is drawn first. Both run edge to edge inclusive.
pub fn draw_crosshair<S>(
    surface: &mut S,
    center: Point,
    width: i32,
    height: i32,
    color: S::Color,
) where
    S: DrawingSurface,
{
    surface.draw_line(Point::new(center.x, 0), Point::new(center.x, height), color);
    surface.draw_line(Point::new(0, center.y), Point::new(width, center.y), color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::{DrawCall, RecordingSurface, SceneRecorder};

    const CENTER: Point = Point::new(240, 240);

    #[test]
    fn test_radial_endpoint_axes() {
        let origin = Point::new(100, 100);
        assert_eq!(radial_endpoint(origin, 50, 0), Point::new(150, 100));
        assert_eq!(radial_endpoint(origin, 50, 180), Point::new(50, 100));
        // Clockwise in screen space: 90 degrees points down
        assert_eq!(radial_endpoint(origin, 50, 90), Point::new(100, 150));
        assert_eq!(radial_endpoint(origin, 50, 270), Point::new(100, 50));
    }

    #[test]
    fn test_radial_endpoint_zero_length() {
        let origin = Point::new(7, 9);
        for angle in 0..360 {
            assert_eq!(radial_endpoint(origin, 0, angle), origin);
        }
    }

    #[test]
    fn test_radial_endpoint_length_within_tolerance() {
        let origin = Point::new(240, 240);
        for length in [0, 1, 2, 5, 17, 60, 134, 240] {
            for angle in 0..360 {
                let end = radial_endpoint(origin, length, angle);
                let d = end - origin;
                let reached = f64::from(d.x * d.x + d.y * d.y).sqrt();
                let error = f64::from(length) - reached;
                // Truncation never overshoots and loses under 1 px per axis
                assert!(
                    (-1e-9..1.5).contains(&error),
                    "length {length} at {angle} deg reached {reached}"
                );
            }
        }
    }

    #[test]
    fn test_radial_endpoint_small_lengths_square_error() {
        let origin = Point::zero();
        for length in 0..=2 {
            for angle in (0..360).step_by(90) {
                let d = radial_endpoint(origin, length, angle);
                assert_eq!(d.x * d.x + d.y * d.y, length * length);
            }
        }
    }

    #[test]
    fn test_draw_radial_line_issues_single_line() {
        let mut surface: SceneRecorder<u16> = RecordingSurface::new();
        let origin = Point::new(272, 276);
        draw_radial_line(&mut surface, origin, 134, 55, 7).unwrap();
        assert_eq!(surface.len(), 1);
        assert_eq!(
            surface.calls()[0],
            DrawCall::Line {
                start: origin,
                end: radial_endpoint(origin, 134, 55),
                color: 7
            }
        );
    }

    #[test]
    fn test_draw_radial_line_rejects_bad_input() {
        let mut surface: SceneRecorder<u16> = RecordingSurface::new();
        assert_eq!(
            draw_radial_line(&mut surface, CENTER, -1, 10, 7),
            Err(OverlayError::InvalidGeometry(GeometryFault::NegativeLength(-1)))
        );
        assert_eq!(
            draw_radial_line(&mut surface, CENTER, 10, 360, 7),
            Err(OverlayError::InvalidGeometry(GeometryFault::AngleOutOfRange(360)))
        );
        assert!(surface.is_empty());
    }

    #[test]
    fn test_draw_ring_outline_count() {
        for thickness in 0..8 {
            let mut surface: SceneRecorder<u16> = RecordingSurface::new();
            draw_ring(&mut surface, CENTER, 100, false, thickness, 1).unwrap();
            assert_eq!(surface.len(), (2 * thickness + 1) as usize);
            assert_eq!(surface.count(DrawCall::is_circle_outline), surface.len());
        }
    }

    #[test]
    fn test_draw_ring_filled_single_call() {
        for thickness in [0, 2, 6, 50] {
            let mut surface: SceneRecorder<u16> = RecordingSurface::new();
            draw_ring(&mut surface, CENTER, 30, true, thickness, 1).unwrap();
            assert_eq!(
                surface.calls(),
                &[DrawCall::FillCircle {
                    center: CENTER,
                    radius: 30,
                    color: 1
                }]
            );
        }
    }

    #[test]
    fn test_draw_ring_thickness_two_radii() {
        let mut surface: SceneRecorder<u16> = RecordingSurface::new();
        draw_ring(&mut surface, CENTER, 30, false, 2, 1).unwrap();
        assert!(surface.outline_radii().eq([28, 29, 30, 31, 32]));
    }

    #[test]
    fn test_draw_ring_rejects_negative_radius() {
        let mut surface: SceneRecorder<u16> = RecordingSurface::new();
        assert_eq!(
            draw_ring(&mut surface, CENTER, -4, false, 0, 1),
            Err(OverlayError::InvalidGeometry(GeometryFault::NegativeRadius(-4)))
        );
        assert_eq!(
            draw_ring(&mut surface, CENTER, 4, false, -1, 1),
            Err(OverlayError::InvalidGeometry(GeometryFault::NegativeThickness(-1)))
        );
        assert!(surface.is_empty());
    }

    #[test]
    fn test_draw_ring_thicker_than_radius() {
        let mut surface: SceneRecorder<u16> = RecordingSurface::new();
        draw_ring(&mut surface, CENTER, 1, false, 2, 1).unwrap();
        assert_eq!(surface.count(DrawCall::is_circle_outline), 5);
        assert!(surface.outline_radii().eq([-1, 0, 1, 2, 3]));
    }

    #[test]
    fn test_draw_ring_radius_overflow_rejected() {
        let mut surface: SceneRecorder<u16> = RecordingSurface::new();
        assert_eq!(
            draw_ring(&mut surface, CENTER, i32::MAX, false, 1, 1),
            Err(OverlayError::InvalidGeometry(GeometryFault::RadiusOverflow {
                radius: i32::MAX,
                thickness: 1
            }))
        );
        assert!(surface.is_empty());

        draw_ring(&mut surface, CENTER, i32::MAX, false, 0, 1).unwrap();
        draw_ring(&mut surface, CENTER, i32::MAX, true, 9, 1).unwrap();
        assert_eq!(surface.len(), 2);
        assert!(surface.outline_radii().eq([i32::MAX]));
    }

    #[test]
    fn test_arc_pixel_count_matches_range() {
        for (start, end) in [(0, 0), (0, 359), (300, 380), (55, 240), (-45, 45)] {
            let mut surface: SceneRecorder<u16> = RecordingSurface::new();
            draw_arc_at_radius(&mut surface, CENTER, start, end, 75, 1).unwrap();
            assert_eq!(surface.len(), (end - start + 1) as usize);
            assert_eq!(surface.count(DrawCall::is_pixel), surface.len());
        }
    }

    #[test]
    fn test_arc_pixels_near_ideal_circle() {
        let radius = 90;
        let mut surface: SceneRecorder<u16> = RecordingSurface::new();
        draw_arc_at_radius(&mut surface, CENTER, 0, 359, radius, 1).unwrap();

        for (angle, point) in surface.pixels().enumerate() {
            let radians = angle as f64 * core::f64::consts::PI / 180.0;
            let ideal_x = f64::from(CENTER.x) + f64::from(radius) * radians.cos();
            let ideal_y = f64::from(CENTER.y) + f64::from(radius) * radians.sin();
            // Truncation loses under 1 px; allow for single-precision trig
            assert!((f64::from(point.x) - ideal_x).abs() < 1.001, "x off at {angle} deg");
            assert!((f64::from(point.y) - ideal_y).abs() < 1.001, "y off at {angle} deg");
        }
    }

    #[test]
    fn test_arc_point_cardinal_directions() {
        assert_eq!(arc_point(CENTER, 60, 0), Point::new(300, 240));
        assert_eq!(arc_point(CENTER, 60, 90), Point::new(240, 300));
        assert_eq!(arc_point(CENTER, 60, 180), Point::new(180, 240));
        assert_eq!(arc_point(CENTER, 60, 270), Point::new(240, 180));
    }

    #[test]
    fn test_scenario_wrapping_arc() {
        let mut surface: SceneRecorder<u16> = RecordingSurface::new();
        draw_thick_arc(&mut surface, CENTER, &ArcSpec::new(300, 380, 60, 0), 1).unwrap();
        assert_eq!(surface.count(DrawCall::is_pixel), 81);
    }

    #[test]
    fn test_scenario_outer_arc() {
        let mut surface: SceneRecorder<u16> = RecordingSurface::new();
        draw_thick_arc(&mut surface, CENTER, &ArcSpec::new(55, 90, 90, 0), 1).unwrap();
        assert_eq!(surface.count(DrawCall::is_pixel), 36);
        assert_eq!(surface.pixels().next(), Some(arc_point(CENTER, 90, 55)));
        assert_eq!(surface.pixels().last(), Some(Point::new(240, 330)));
    }

    #[test]
    fn test_thick_arc_repeats_per_radius() {
        let arc = ArcSpec::new(0, 9, 40, 2);
        let mut surface: SceneRecorder<u16> = RecordingSurface::new();
        draw_thick_arc(&mut surface, CENTER, &arc, 1).unwrap();
        assert_eq!(surface.len(), 50);
        // First pass runs at the innermost radius
        assert_eq!(surface.pixels().next(), Some(Point::new(278, 240)));
        assert_eq!(surface.pixels().nth(40), Some(Point::new(282, 240)));
    }

    #[test]
    fn test_thick_arc_through_center() {
        let mut surface: SceneRecorder<u16> = RecordingSurface::new();
        draw_thick_arc(&mut surface, CENTER, &ArcSpec::new(0, 9, 0, 1), 1).unwrap();
        assert_eq!(surface.count(DrawCall::is_pixel), 30);
        // Radius -1 lands on the opposite side of the center
        assert_eq!(surface.pixels().next(), Some(Point::new(239, 240)));
        assert_eq!(surface.pixels().nth(10), Some(CENTER));
        assert_eq!(surface.pixels().nth(20), Some(Point::new(241, 240)));
    }

    #[test]
    fn test_huge_radius_saturates() {
        let mut surface: SceneRecorder<u16> = RecordingSurface::new();
        draw_arc_at_radius(&mut surface, CENTER, 0, 0, i32::MAX, 1).unwrap();
        assert_eq!(surface.pixels().next(), Some(Point::new(i32::MAX, 240)));

        let far = Point::new(-10, 7);
        assert_eq!(radial_endpoint(far, i32::MAX, 180), Point::new(i32::MIN, 7));
        let near_edge = Point::new(i32::MAX - 5, 7);
        assert_eq!(radial_endpoint(near_edge, i32::MAX, 0), Point::new(i32::MAX, 7));
    }

    #[test]
    fn test_inverted_arc_draws_nothing() {
        let mut surface: SceneRecorder<u16> = RecordingSurface::new();
        assert_eq!(
            draw_arc_at_radius(&mut surface, CENTER, 90, 55, 60, 1),
            Err(OverlayError::InvalidGeometry(GeometryFault::InvertedArc { start: 90, end: 55 }))
        );
        assert!(surface.is_empty());
    }

    #[test]
    fn test_crosshair_wide_panel() {
        let mut surface: SceneRecorder<u16> = RecordingSurface::new();
        draw_crosshair(&mut surface, Point::new(320, 180), 640, 360, 1);
        assert_eq!(
            surface.calls(),
            &[
                DrawCall::Line {
                    start: Point::new(320, 0),
                    end: Point::new(320, 360),
                    color: 1
                },
                DrawCall::Line {
                    start: Point::new(0, 180),
                    end: Point::new(640, 180),
                    color: 1
                },
            ]
        );
    }

    #[test]
    fn test_crosshair_spans_display() {
        let mut surface: SceneRecorder<u16> = RecordingSurface::new();
        draw_crosshair(&mut surface, CENTER, 480, 480, 1);
        assert_eq!(
            surface.calls(),
            &[
                DrawCall::Line {
                    start: Point::new(240, 0),
                    end: Point::new(240, 480),
                    color: 1
                },
                DrawCall::Line {
                    start: Point::new(0, 240),
                    end: Point::new(480, 240),
                    color: 1
                },
            ]
        );
    }
}
