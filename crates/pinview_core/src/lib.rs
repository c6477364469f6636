//! pinview_core - Viewport geometry and interaction engine
//!
//! This crate holds everything with real invariants in the pinview image viewer:
//! the zoom range policy, pan offset clamping, the image/screen transform, the drag
//! gesture state machine and the [`Viewer`] controller that ties them together.
//! Rendering, image decoding and input plumbing live outside this crate and talk to
//! it through plain method calls.

mod clamp;
mod constants;
mod controller;
mod drag;
mod geometry;
mod metrics;
mod transform;
mod zoom;

#[cfg(test)]
mod tests;

pub use clamp::{clamp_offset, max_excursion, oversize};
pub use constants::{format_zoom, DEFAULT_METRIC, ZOOM_MAX, ZOOM_NATIVE, ZOOM_STEP};
pub use controller::{RenderFrame, ViewState, Viewer, ViewerSettings};
pub use drag::DragState;
pub use geometry::{Point, Size};
pub use metrics::MetricsStore;
pub use transform::{
    base_offset, image_local_to_screen, screen_to_image_local, PinMarker, Placement,
    TransformUniform,
};
pub use zoom::ZoomRange;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::controller::{RenderFrame, ViewState, Viewer, ViewerSettings};
    pub use crate::geometry::{Point, Size};
    pub use crate::transform::{PinMarker, Placement};
    pub use crate::zoom::ZoomRange;
}
