//! Image source provider: intrinsic pixel dimensions of an image on disk.

use crate::error::ReplayError;
use pinview_core::Size;
use std::path::Path;

/// Read the width and height of an image without decoding its pixels.
pub fn probe_dimensions(path: &Path) -> Result<Size, ReplayError> {
    let (width, height) = image::image_dimensions(path).map_err(|source| ReplayError::Image {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("Probed {:?}: {}x{}", path, width, height);
    Ok(Size::new(width as f32, height as f32))
}
