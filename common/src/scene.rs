//! Scene composer: the fixed boot-time render pass.
//!
//! # Render Sequence
//!
//! 1. **Rings** - every ring in the catalog, thickened by repeated outlines
//! 2. **Reveal pause** - one blocking delay for the staged boot effect
//! 3. **Arcs** - every arc, drawn once per radius in `radius ± thickness`
//! 4. **Radial lines** - every angled line
//! 5. **Crosshair** - full-height vertical line, then full-width horizontal line
//!
//! The pass branches on nothing but the catalog and configuration it was given,
//! so the same inputs always produce the same primitive calls. The composer
//! keeps no state between passes.
//!
//! # Failure Handling
//!
//! Readiness and the whole catalog are checked before the first primitive. A
//! rejected pass leaves the surface untouched.

use embedded_hal::delay::DelayNs;
use log::{debug, info, warn};

use crate::catalog::{ShapeCatalog, TACTICAL_CATALOG};
use crate::colors::Palette;
use crate::config::SceneConfig;
use crate::error::OverlayError;
use crate::geometry::{draw_crosshair, draw_radial_line, draw_ring, draw_thick_arc};
use crate::surface::DrawingSurface;

/// Orchestrates one deterministic overlay pass.
#[derive(Clone, Copy, Debug)]
pub struct SceneComposer<'a> {
    catalog: &'a ShapeCatalog,
    config: SceneConfig,
}

/// Composer for the built-in overlay on the 480x480 panel.
pub const TACTICAL_SCENE: SceneComposer<'static> = SceneComposer::new(&TACTICAL_CATALOG, SceneConfig::new());

impl<'a> SceneComposer<'a> {
    pub const fn new(
        catalog: &'a ShapeCatalog,
        config: SceneConfig,
    ) -> Self {
        Self { catalog, config }
    }

    /// Apply panel settings and clear the screen.
    ///
    /// Issues `set_rotation`, `set_brightness`, then `fill_screen(background)`.
    pub fn prepare<S>(
        &self,
        surface: &mut S,
        background: S::Color,
    ) -> Result<(), OverlayError>
    where
        S: DrawingSurface,
    {
        ensure_ready(surface)?;

        info!(
            "Panel setup: rotation {}, brightness {}",
            self.config.rotation, self.config.brightness
        );
        surface.set_rotation(self.config.rotation);
        surface.set_brightness(self.config.brightness);
        surface.fill_screen(background);
        Ok(())
    }

    /// Run the render sequence with a single stroke color.
    pub fn compose<S, D>(
        &self,
        surface: &mut S,
        delay: &mut D,
        color: S::Color,
    ) -> Result<(), OverlayError>
    where
        S: DrawingSurface,
        D: DelayNs,
    {
        ensure_ready(surface)?;
        if let Err(fault) = self.catalog.validate() {
            warn!("Overlay catalog rejected: {}", fault);
            return Err(fault.into());
        }

        let center = self.config.center;

        info!("Drawing {} rings", self.catalog.rings.len());
        for ring in self.catalog.rings {
            debug!("Ring r={} t={} filled={}", ring.radius_px, ring.thickness_px, ring.filled);
            draw_ring(surface, center, ring.radius_px, ring.filled, ring.thickness_px, color)?;
        }

        info!("Reveal pause {} ms", self.config.reveal_pause_ms);
        delay.delay_ms(self.config.reveal_pause_ms);

        info!("Drawing {} arcs", self.catalog.arcs.len());
        for arc in self.catalog.arcs {
            debug!(
                "Arc {}..={} deg r={} t={}",
                arc.start_angle_deg, arc.end_angle_deg, arc.radius_px, arc.thickness_px
            );
            draw_thick_arc(surface, center, arc, color)?;
        }

        info!("Drawing {} radial lines", self.catalog.radial_lines.len());
        for line in self.catalog.radial_lines {
            debug!(
                "Line from ({}, {}) len={} at {} deg",
                line.origin.x, line.origin.y, line.length_px, line.angle_deg
            );
            draw_radial_line(surface, line.origin, line.length_px, line.angle_deg, color)?;
        }

        info!("Drawing crosshair");
        draw_crosshair(surface, center, self.config.width, self.config.height, color);
        Ok(())
    }

    /// Full boot pass: [`prepare`](Self::prepare) then [`compose`](Self::compose).
    ///
    /// The catalog is validated before setup so an invalid overlay does not
    /// even clear the screen.
    pub fn boot<S, D>(
        &self,
        surface: &mut S,
        delay: &mut D,
        palette: &Palette<S::Color>,
    ) -> Result<(), OverlayError>
    where
        S: DrawingSurface,
        D: DelayNs,
    {
        ensure_ready(surface)?;
        self.catalog.validate()?;

        self.prepare(surface, palette.background)?;
        self.compose(surface, delay, palette.stroke)?;
        info!("Tactical overlay complete");
        Ok(())
    }
}

fn ensure_ready<S>(surface: &S) -> Result<(), OverlayError>
where
    S: DrawingSurface,
{
    if surface.is_ready() {
        Ok(())
    } else {
        warn!("Drawing surface not ready");
        Err(OverlayError::SurfaceUnavailable)
    }
}
