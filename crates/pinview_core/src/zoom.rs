//! Zoom range policy.
//!
//! The lower bound is the fit-to-container scale, never above native size;
//! the upper bound is a fixed policy value.

use crate::constants::{ZOOM_MAX, ZOOM_NATIVE};
use crate::geometry::Size;
use serde::{Deserialize, Serialize};

/// Inclusive zoom bounds for one session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomRange {
    pub min: f32,
    pub max: f32,
}

impl ZoomRange {
    /// Compute the range for an image shown in a container, with the default upper bound.
    pub fn compute(image: Size, container: Size) -> Self {
        Self::compute_with_max(image, container, ZOOM_MAX)
    }

    /// Compute the range with an explicit upper bound.
    ///
    /// An image that already fits is shown at native scale rather than upscaled.
    /// `max` is raised to `min` if it would otherwise fall below it.
    pub fn compute_with_max(image: Size, container: Size, max: f32) -> Self {
        let min = if image.fits_within(&container) {
            ZOOM_NATIVE
        } else {
            (container.width / image.width).min(container.height / image.height)
        };

        Self {
            min,
            max: max.max(min),
        }
    }

    /// Apply one zoom step and clamp the result into the range.
    pub fn step(&self, current: f32, delta: f32) -> f32 {
        self.clamp(current + delta)
    }

    /// Clamp an arbitrary zoom value into the range.
    pub fn clamp(&self, zoom: f32) -> f32 {
        zoom.clamp(self.min, self.max)
    }

    pub fn contains(&self, zoom: f32) -> bool {
        zoom >= self.min && zoom <= self.max
    }
}

impl Default for ZoomRange {
    fn default() -> Self {
        Self {
            min: ZOOM_NATIVE,
            max: ZOOM_MAX,
        }
    }
}
