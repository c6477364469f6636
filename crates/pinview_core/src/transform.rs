//! Viewport transform: image-local coordinates to container/screen coordinates and back.
//!
//! The render surface places the image at the container origin, translates it by
//! `-(base + pan)` in unscaled pixels and then scales it by `zoom` about its own
//! centre. Because the base offset moves the image centre onto the container
//! centre, scaling never shifts the centred image.

use crate::geometry::{Point, Size};
use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// Translation that centres the image over the container before zoom/pan.
pub fn base_offset(image: Size, container: Size) -> Point {
    Point::new(
        (image.width - container.width) / 2.0,
        (image.height - container.height) / 2.0,
    )
}

/// Final placement parameters handed to the render surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub translate_x: f32,
    pub translate_y: f32,
    pub scale: f32,
}

impl Placement {
    /// Compose base offset, pan offset and zoom.
    pub fn new(base: Point, pan: Point, zoom: f32) -> Self {
        Self {
            translate_x: -base.x - pan.x,
            translate_y: -base.y - pan.y,
            scale: zoom,
        }
    }

    pub fn translation(&self) -> Point {
        Point::new(self.translate_x, self.translate_y)
    }

    /// Top-left corner of the drawn image relative to the container origin.
    pub fn image_origin(&self, image: Size) -> Point {
        self.translation() + image.center().scale(1.0 - self.scale)
    }

    /// On-screen top-left corner of the drawn image, given where the container sits on screen.
    pub fn surface_origin(&self, image: Size, container_origin: Point) -> Point {
        container_origin + self.image_origin(image)
    }

    /// Map an image-local point to container coordinates.
    pub fn image_to_container(&self, image: Size, local: Point) -> Point {
        image_local_to_screen(local, self.image_origin(image), self.scale)
    }

    /// Column-major matrix mapping image pixels to container pixels.
    pub fn to_uniform(&self, image: Size) -> TransformUniform {
        let origin = self.image_origin(image);
        TransformUniform::from_transform(origin.x, origin.y, self.scale)
    }
}

/// Convert a screen point to zoom-independent image-local coordinates.
///
/// `surface_origin` is the on-screen top-left of the drawn image.
pub fn screen_to_image_local(screen: Point, surface_origin: Point, zoom: f32) -> Point {
    Point::new(
        (screen.x - surface_origin.x) / zoom,
        (screen.y - surface_origin.y) / zoom,
    )
}

/// Inverse of [`screen_to_image_local`] at the given zoom.
pub fn image_local_to_screen(local: Point, surface_origin: Point, zoom: f32) -> Point {
    surface_origin + local.scale(zoom)
}

/// Pin marker parameters for the render surface.
///
/// `x`/`y` are image-local; the marker is drawn inside the scaled image and
/// counter-scaled by `inverse_scale` so it keeps a constant on-screen size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PinMarker {
    pub x: f32,
    pub y: f32,
    pub inverse_scale: f32,
}

impl PinMarker {
    pub fn new(pin: Point, zoom: f32) -> Self {
        Self {
            x: pin.x,
            y: pin.y,
            inverse_scale: 1.0 / zoom,
        }
    }
}

/// GPU uniform holding the image placement as a 4x4 matrix
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct TransformUniform {
    pub matrix: [[f32; 4]; 4],
}

impl TransformUniform {
    pub fn new() -> Self {
        Self {
            matrix: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Create transform from offset and zoom
    pub fn from_transform(offset_x: f32, offset_y: f32, zoom: f32) -> Self {
        Self {
            matrix: [
                [zoom, 0.0, 0.0, 0.0],
                [0.0, zoom, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [offset_x, offset_y, 0.0, 1.0],
            ],
        }
    }

    /// The 16 matrix entries, column by column.
    pub fn as_slice(&self) -> &[f32] {
        bytemuck::cast_slice(&self.matrix)
    }

    /// Raw bytes for a uniform buffer upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Apply the matrix to a 2D point.
    pub fn apply(&self, point: Point) -> Point {
        let m = &self.matrix;
        Point::new(
            m[0][0] * point.x + m[1][0] * point.y + m[3][0],
            m[0][1] * point.x + m[1][1] * point.y + m[3][1],
        )
    }
}

impl Default for TransformUniform {
    fn default() -> Self {
        Self::new()
    }
}
