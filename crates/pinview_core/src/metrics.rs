//! Last-known image and container dimensions.
//!
//! Both values start at `1x1` so that ratio computations stay finite before
//! the image source and the container surface report real sizes.

use crate::geometry::Size;

/// Holds intrinsic image size and container size for one viewer session.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MetricsStore {
    image: Size,
    container: Size,
    image_recorded: bool,
    container_recorded: bool,
}

impl MetricsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the intrinsic size reported by the image source.
    pub fn record_image(&mut self, width: f32, height: f32) {
        self.image = Size::new(width, height);
        self.image_recorded = true;
    }

    /// Store the size reported by the container surface once it is measurable.
    pub fn record_container(&mut self, width: f32, height: f32) {
        self.container = Size::new(width, height);
        self.container_recorded = true;
    }

    /// Intrinsic image size, `1x1` until recorded.
    pub fn image(&self) -> Size {
        self.image
    }

    /// Container size, `1x1` until recorded.
    pub fn container(&self) -> Size {
        self.container
    }

    pub fn has_image(&self) -> bool {
        self.image_recorded
    }

    pub fn has_container(&self) -> bool {
        self.container_recorded
    }
}
