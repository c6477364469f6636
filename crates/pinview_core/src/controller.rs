//! Interaction controller for one viewer session.
//!
//! [`Viewer`] owns all mutable session state and exposes one method per input
//! event or command. Every method is synchronous and only touches in-memory state;
//! the UI layer reads [`Viewer::frame`] or [`Viewer::state`] after each call.

use crate::clamp::clamp_offset;
use crate::constants::{format_zoom, ZOOM_MAX, ZOOM_NATIVE, ZOOM_STEP};
use crate::drag::DragState;
use crate::geometry::{Point, Size};
use crate::metrics::MetricsStore;
use crate::transform::{
    base_offset, image_local_to_screen, screen_to_image_local, PinMarker, Placement,
    TransformUniform,
};
use crate::zoom::ZoomRange;
use serde::{Deserialize, Serialize};

/// Tunable zoom policy and session behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerSettings {
    /// Upper zoom bound
    pub max_zoom: f32,
    /// Zoom change per zoom-in / zoom-out activation
    pub zoom_step: f32,
    /// Reset zoom, pan and pin when the view is reopened after being closed
    pub reset_on_reopen: bool,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            max_zoom: ZOOM_MAX,
            zoom_step: ZOOM_STEP,
            reset_on_reopen: false,
        }
    }
}

impl ViewerSettings {
    /// Replace values the engine cannot work with by their defaults.
    ///
    /// `max_zoom` must be finite and at least 1, `zoom_step` finite and positive.
    pub fn normalized(self) -> Self {
        let defaults = Self::default();
        let max_zoom = if self.max_zoom.is_finite() && self.max_zoom >= ZOOM_NATIVE {
            self.max_zoom
        } else {
            log::warn!("Ignoring max_zoom {}, using {}", self.max_zoom, defaults.max_zoom);
            defaults.max_zoom
        };
        let zoom_step = if self.zoom_step.is_finite() && self.zoom_step > 0.0 {
            self.zoom_step
        } else {
            log::warn!("Ignoring zoom_step {}, using {}", self.zoom_step, defaults.zoom_step);
            defaults.zoom_step
        };
        Self {
            max_zoom,
            zoom_step,
            reset_on_reopen: self.reset_on_reopen,
        }
    }
}

/// Serializable snapshot of the observable session state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub visible: bool,
    pub zoom: f32,
    pub range: ZoomRange,
    pub base: Point,
    pub pan: Point,
    pub pin: Option<Point>,
    pub dragging: bool,
}

/// Everything the render surface needs to draw the current view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub placement: Placement,
    /// Same placement as a matrix from image pixels to container pixels
    pub transform: TransformUniform,
    pub pin: Option<PinMarker>,
    pub zoom_label: String,
}

/// Pan/zoom/pin engine for a single viewer session.
#[derive(Debug, Clone)]
pub struct Viewer {
    settings: ViewerSettings,
    metrics: MetricsStore,
    range: ZoomRange,
    base: Point,
    zoom: f32,
    pan: Point,
    pin: Option<Point>,
    drag: DragState,
    visible: bool,
    closed_since_open: bool,
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new(ViewerSettings::default())
    }
}

impl Viewer {
    /// Create a closed viewer with no metrics recorded yet.
    pub fn new(settings: ViewerSettings) -> Self {
        let settings = settings.normalized();
        Self {
            settings,
            metrics: MetricsStore::new(),
            range: ZoomRange {
                min: ZOOM_NATIVE,
                max: settings.max_zoom.max(ZOOM_NATIVE),
            },
            base: Point::ZERO,
            zoom: ZOOM_NATIVE,
            pan: Point::ZERO,
            pin: None,
            drag: DragState::Idle,
            visible: false,
            closed_since_open: false,
        }
    }

    // =========================================================================
    // Metrics
    // =========================================================================

    /// Image source finished loading.
    ///
    /// If the container was measured first, the fit is recomputed with the real size.
    pub fn record_image_metrics(&mut self, width: f32, height: f32) {
        self.metrics.record_image(width, height);
        log::debug!("Image metrics: {}x{}", width, height);
        if self.metrics.has_container() {
            log::debug!("Image metrics arrived after container mount, refitting");
            self.initialize();
        }
    }

    /// Container became measurable; derives range, base offset, zoom and pan.
    pub fn record_container_metrics(&mut self, width: f32, height: f32) {
        self.metrics.record_container(width, height);
        log::debug!("Container metrics: {}x{}", width, height);
        if !self.metrics.has_image() {
            log::warn!("Container measured before image load, using placeholder image size");
        }
        self.initialize();
    }

    fn initialize(&mut self) {
        let image = self.metrics.image();
        let container = self.metrics.container();
        self.range = ZoomRange::compute_with_max(image, container, self.settings.max_zoom);
        self.base = base_offset(image, container);
        self.zoom = self.range.min;
        self.pan = Point::ZERO;
        // Image-local coordinates from an earlier fit no longer match the image
        if self.pin.take().is_some() {
            log::debug!("Pin dropped by refit");
        }
        log::debug!(
            "Viewport initialized: zoom range [{:.3}, {:.3}], base ({:.1}, {:.1})",
            self.range.min,
            self.range.max,
            self.base.x,
            self.base.y
        );
    }

    // =========================================================================
    // Visibility
    // =========================================================================

    /// Show the enlarged view.
    pub fn open(&mut self) {
        if self.visible {
            return;
        }
        if self.settings.reset_on_reopen && self.closed_since_open {
            self.reset();
        }
        self.visible = true;
        self.closed_since_open = false;
        log::info!("Viewer opened");
    }

    /// Hide the enlarged view. Zoom, pan and pin are kept.
    pub fn close(&mut self) {
        if !self.visible {
            return;
        }
        self.visible = false;
        self.closed_since_open = true;
        log::info!("Viewer closed");
    }

    /// Flip between open and closed.
    pub fn toggle(&mut self) {
        if self.visible {
            self.close();
        } else {
            self.open();
        }
    }

    /// Back to the fitted view: minimum zoom, centred, no pin, no drag.
    pub fn reset(&mut self) {
        self.zoom = self.range.min;
        self.pan = Point::ZERO;
        self.pin = None;
        self.drag.pointer_up();
        log::debug!("Viewer reset to zoom {:.3}", self.zoom);
    }

    // =========================================================================
    // Zoom
    // =========================================================================

    pub fn zoom_in(&mut self) {
        // Overhang only grows with zoom, so the current pan stays valid
        self.zoom = self.range.step(self.zoom, self.settings.zoom_step);
        log::debug!("Zoom in: {:.3}", self.zoom);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = self.range.step(self.zoom, -self.settings.zoom_step);
        self.pan = clamp_offset(self.pan, self.metrics.image(), self.metrics.container(), self.zoom);
        log::debug!(
            "Zoom out: {:.3}, pan ({:.1}, {:.1})",
            self.zoom,
            self.pan.x,
            self.pan.y
        );
    }

    // =========================================================================
    // Pointer input
    // =========================================================================

    pub fn on_pointer_down(&mut self) {
        self.drag.pointer_down();
        log::debug!("Drag started");
    }

    /// Pan by a relative pointer movement. Ignored unless a drag is active.
    pub fn on_pointer_move(&mut self, dx: f32, dy: f32) {
        if let Some(pan) = self.drag.pointer_move(
            self.pan,
            dx,
            dy,
            self.metrics.image(),
            self.metrics.container(),
            self.zoom,
        ) {
            self.pan = pan;
            log::trace!("Pan: ({:.1}, {:.1})", pan.x, pan.y);
        }
    }

    pub fn on_pointer_up(&mut self) {
        if self.drag.is_dragging() {
            log::debug!("Drag ended");
        }
        self.drag.pointer_up();
    }

    /// Pointer left the tracked surface; ends any drag so a lost pointer-up cannot strand it.
    pub fn on_pointer_leave(&mut self) {
        if self.drag.is_dragging() {
            log::debug!("Drag ended by pointer leave");
        }
        self.drag.pointer_up();
    }

    /// Window lost focus; same effect as [`Viewer::on_pointer_leave`].
    pub fn on_blur(&mut self) {
        if self.drag.is_dragging() {
            log::debug!("Drag ended by blur");
        }
        self.drag.pointer_up();
    }

    /// Place the pin under a double-click.
    ///
    /// `surface_origin` is the on-screen top-left of the drawn image; without it the
    /// click is ignored. Returns the stored image-local pin position.
    pub fn on_double_click(&mut self, screen: Point, surface_origin: Option<Point>) -> Option<Point> {
        let Some(origin) = surface_origin else {
            log::debug!("Double-click ignored: render surface not available");
            return None;
        };
        let pin = screen_to_image_local(screen, origin, self.zoom);
        self.pin = Some(pin);
        log::debug!("Pin placed at ({:.1}, {:.1})", pin.x, pin.y);
        self.pin
    }

    pub fn clear_pin(&mut self) {
        if self.pin.take().is_some() {
            log::debug!("Pin cleared");
        }
    }

    // =========================================================================
    // Output
    // =========================================================================

    pub fn placement(&self) -> Placement {
        Placement::new(self.base, self.pan, self.zoom)
    }

    /// On-screen top-left of the drawn image for a container at `container_origin`.
    pub fn surface_origin(&self, container_origin: Point) -> Point {
        self.placement().surface_origin(self.metrics.image(), container_origin)
    }

    /// Current on-screen pin position for a drawn image at `surface_origin`.
    pub fn pin_screen_position(&self, surface_origin: Point) -> Option<Point> {
        self.pin
            .map(|pin| image_local_to_screen(pin, surface_origin, self.zoom))
    }

    pub fn pin_marker(&self) -> Option<PinMarker> {
        self.pin.map(|pin| PinMarker::new(pin, self.zoom))
    }

    pub fn zoom_label(&self) -> String {
        format_zoom(self.zoom)
    }

    /// Placement as a GPU-ready matrix.
    pub fn transform_uniform(&self) -> TransformUniform {
        self.placement().to_uniform(self.metrics.image())
    }

    pub fn frame(&self) -> RenderFrame {
        RenderFrame {
            placement: self.placement(),
            transform: self.transform_uniform(),
            pin: self.pin_marker(),
            zoom_label: self.zoom_label(),
        }
    }

    pub fn state(&self) -> ViewState {
        ViewState {
            visible: self.visible,
            zoom: self.zoom,
            range: self.range,
            base: self.base,
            pan: self.pan,
            pin: self.pin,
            dragging: self.drag.is_dragging(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn settings(&self) -> &ViewerSettings {
        &self.settings
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn zoom_range(&self) -> ZoomRange {
        self.range
    }

    pub fn pan(&self) -> Point {
        self.pan
    }

    pub fn base_offset(&self) -> Point {
        self.base
    }

    pub fn pin(&self) -> Option<Point> {
        self.pin
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn image_size(&self) -> Size {
        self.metrics.image()
    }

    pub fn container_size(&self) -> Size {
        self.metrics.container()
    }
}
