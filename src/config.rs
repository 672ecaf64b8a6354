//! Simulator configuration.
//!
//! Panel geometry comes from [`overlay_common::config`]; this module only holds
//! window settings and the command-line options.
//!
//! ```text
//! tactical-overlay [--scale <n>] [--png <path>]
//! ```
//!
//! Without `--png` the overlay is shown in an SDL window until it is closed.
//! With `--png` the overlay is rendered headless and written to `<path>`.

use std::path::PathBuf;

use anyhow::{Context, bail};

/// Window title.
pub const WINDOW_TITLE: &str = "Tactical Overlay Sim";

/// Default pixel scale of the simulator window and PNG output.
pub const DEFAULT_SCALE: u32 = 1;

/// Options parsed from the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulatorOptions {
    /// Output pixel scale.
    pub scale: u32,
    /// Write a PNG preview here instead of opening a window.
    pub png: Option<PathBuf>,
}

impl Default for SimulatorOptions {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            png: None,
        }
    }
}

impl SimulatorOptions {
    /// Parse options from an argument list (program name excluded).
    pub fn parse<I>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut options = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--scale" => {
                    let value = args.next().context("--scale needs a value")?;
                    options.scale = value
                        .parse()
                        .with_context(|| format!("invalid scale `{value}`"))?;
                    if options.scale == 0 {
                        bail!("scale must be at least 1");
                    }
                }
                "--png" => {
                    let value = args.next().context("--png needs a path")?;
                    options.png = Some(PathBuf::from(value));
                }
                other => bail!("unknown argument `{other}`"),
            }
        }

        Ok(options)
    }
}
