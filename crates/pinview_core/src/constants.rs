//! Centralized constants for pinview_core
//!
//! Policy values for zooming and the defaults used before real metrics arrive.

// =============================================================================
// Zoom Policy
// =============================================================================

/// Upper zoom bound (3x intrinsic size)
pub const ZOOM_MAX: f32 = 3.0;

/// Change applied by a single zoom-in / zoom-out activation
pub const ZOOM_STEP: f32 = 0.1;

/// Zoom used when the image already fits the container (no upscaling)
pub const ZOOM_NATIVE: f32 = 1.0;

// =============================================================================
// Metrics
// =============================================================================

/// Edge length used for image/container metrics before they are recorded.
/// Keeps ratio computations away from division by zero.
pub const DEFAULT_METRIC: f32 = 1.0;

// =============================================================================
// Formatting
// =============================================================================

/// Format a zoom level for display, e.g. `x1.00`.
pub fn format_zoom(zoom: f32) -> String {
    format!("x{:.2}", zoom)
}
