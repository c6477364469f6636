//! Pan offset clamping.
//!
//! The pan offset may move the scaled image at most half of its overhang in
//! either direction, so the container never shows past an image edge while the
//! image is larger than it.

use crate::geometry::{Point, Size};

/// Amount by which the scaled image exceeds the container along one axis.
#[inline]
pub fn oversize(image_dim: f32, container_dim: f32, zoom: f32) -> f32 {
    (image_dim * zoom - container_dim).max(0.0)
}

/// Largest allowed `|pan|` on each axis at `zoom`.
pub fn max_excursion(image: Size, container: Size, zoom: f32) -> Point {
    Point::new(
        oversize(image.width, container.width, zoom) / 2.0,
        oversize(image.height, container.height, zoom) / 2.0,
    )
}

/// Clamp each axis of `offset` to `[-oversize/2, +oversize/2]`.
pub fn clamp_offset(offset: Point, image: Size, container: Size, zoom: f32) -> Point {
    let limit = max_excursion(image, container, zoom);
    Point::new(
        offset.x.clamp(-limit.x, limit.x),
        offset.y.clamp(-limit.y, limit.y),
    )
}
