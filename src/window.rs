//! DICOM display window handling
//!
//! A display window is the medical-imaging convention for "which intensity
//! range should be visible": a center and a width, stored in tags
//! (0028,1050) and (0028,1051). After the pixel data is normalized, the
//! window must be mapped with the same bias/gain pair so that the display
//! range stays expressed in the same units as the pixels.

use crate::normalize::BiasGain;
use std::fmt;

/// Raw window metadata as read from the file
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayWindow {
    pub centre: f32,
    pub width: f32,
}

impl DisplayWindow {
    #[must_use]
    pub fn new(centre: f32, width: f32) -> Self {
        Self { centre, width }
    }

    /// Raw display bounds: `centre - width/2 ..= centre + width/2`
    #[inline]
    #[must_use]
    pub fn bounds(&self) -> (f32, f32) {
        let half = self.width / 2.0;
        (self.centre - half, self.centre + half)
    }

    /// Map both bounds into normalized units with the given bias/gain
    #[must_use]
    pub fn normalized(&self, params: BiasGain) -> WindowBounds {
        let (lo, hi) = self.bounds();
        WindowBounds {
            vmin: params.apply(lo),
            vmax: params.apply(hi),
        }
    }
}

impl fmt::Display for DisplayWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "C={centre} W={width}",
            centre = self.centre,
            width = self.width
        )
    }
}

/// Display range expressed in normalized intensity units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowBounds {
    pub vmin: f32,
    pub vmax: f32,
}

impl WindowBounds {
    #[inline]
    #[must_use]
    pub fn span(&self) -> f32 {
        self.vmax - self.vmin
    }
}

impl fmt::Display for WindowBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{vmin}, {vmax}]", vmin = self.vmin, vmax = self.vmax)
    }
}
