//! Geometry helpers: panel viewport + terminal size plumbing.

use serde::Serialize;
use terminal_size::{Height, Width, terminal_size};

use crate::core::constants::{
    CHAR_HEIGHT_PX, CHAR_WIDTH_PX, DEFAULT_PANEL_HEIGHT_PX, DEFAULT_PANEL_WIDTH_PX,
    MIN_PANEL_HEIGHT_PX, MIN_PANEL_WIDTH_PX, PANEL_HEIGHT_CHROME_PX, PANEL_WIDTH_CHROME_PX,
};

/// Pixel space a heatmap is laid out in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    pub width_px: f64,
    pub height_px: f64,
}

impl Viewport {
    #[inline]
    #[must_use]
    pub const fn new(width_px: f64, height_px: f64) -> Self {
        Self {
            width_px,
            height_px,
        }
    }

    /// Space left for cells once axis chrome is removed, never below the
    /// panel minimum. Unmeasured (zero, negative, non-finite) sizes fall back
    /// to the default panel size first.
    #[must_use]
    pub fn plot_area(self) -> Self {
        let shrink = |px: f64, fallback: f64, chrome: f64, floor: f64| {
            let px = if px.is_finite() && px > 0.0 { px } else { fallback };
            (px - chrome).max(floor)
        };
        Self {
            width_px: shrink(
                self.width_px,
                DEFAULT_PANEL_WIDTH_PX,
                PANEL_WIDTH_CHROME_PX,
                MIN_PANEL_WIDTH_PX,
            ),
            height_px: shrink(
                self.height_px,
                DEFAULT_PANEL_HEIGHT_PX,
                PANEL_HEIGHT_CHROME_PX,
                MIN_PANEL_HEIGHT_PX,
            ),
        }
    }
}

/// Current terminal geometry (80×30 fallback).
#[inline]
#[must_use]
pub fn terminal_geometry() -> (Width, Height) {
    terminal_size().unwrap_or((Width(80), Height(30)))
}

/// Terminal character grid converted to approximate pixels.
#[inline]
#[must_use]
pub fn terminal_viewport((w, h): (Width, Height)) -> Viewport {
    Viewport::new(
        f64::from(w.0) * CHAR_WIDTH_PX,
        f64::from(h.0) * CHAR_HEIGHT_PX,
    )
}
