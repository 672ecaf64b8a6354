//! Procedural tactical overlay for the boot display.
//!
//! This crate contains the platform-agnostic rendering core shared between the
//! desktop simulator and device builds:
//!
//! - [`catalog`]: Arc, radial-line and ring descriptors plus the built-in overlay
//! - [`geometry`]: Turns one descriptor into primitive draw calls
//! - [`scene`]: Fixed, deterministic boot render sequence
//! - [`surface`]: Drawing surface capability and `embedded-graphics` adapter
//! - [`recording`]: Call-recording surface and delay for host tests
//! - [`colors`]: RGB565 color constants
//! - [`config`]: Display dimensions and scene configuration
//! - [`error`]: Error types
//!
//! # no_std Compatibility
//!
//! The crate is `no_std` and allocation-free. Trigonometry goes through `libm`,
//! logging through the `log` facade, and the reveal pause through
//! `embedded_hal::delay::DelayNs`.
//!
//! # Testing
//!
//! Run tests on the host with:
//! ```bash
//! cargo test -p overlay-common
//! ```

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod catalog;
pub mod colors;
pub mod config;
pub mod error;
pub mod geometry;
pub mod recording;
pub mod scene;
pub mod surface;

// Re-export commonly used items
pub use catalog::{ArcSpec, RadialLineSpec, RingSpec, ShapeCatalog, TACTICAL_CATALOG};
pub use config::SceneConfig;
pub use error::{GeometryFault, OverlayError};
pub use scene::{SceneComposer, TACTICAL_SCENE};
pub use surface::{DrawingSurface, GraphicsSurface};
