use wasm_bindgen::prelude::*;

use crate::config::AppConfig;
use pinview_core::{Point, Viewer, ViewerSettings};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // A logger may already be installed by the host page
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("pinview WASM ready");
}

/// Viewer engine handle for the JavaScript render surface.
///
/// Every input method mutates the session; read the placement and pin getters
/// (or `frame_json`) afterwards to redraw.
#[wasm_bindgen]
pub struct PinViewer {
    inner: Viewer,
}

#[wasm_bindgen]
impl PinViewer {
    #[wasm_bindgen(constructor)]
    pub fn new() -> PinViewer {
        PinViewer {
            inner: Viewer::new(ViewerSettings::default()),
        }
    }

    /// Create a viewer from a JSON configuration document.
    pub fn with_config(json: &str) -> Result<PinViewer, JsValue> {
        let config = AppConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(PinViewer {
            inner: Viewer::new(config.viewer),
        })
    }

    pub fn record_image_metrics(&mut self, width: f32, height: f32) {
        self.inner.record_image_metrics(width, height);
    }

    pub fn record_container_metrics(&mut self, width: f32, height: f32) {
        self.inner.record_container_metrics(width, height);
    }

    pub fn open(&mut self) {
        self.inner.open();
    }

    pub fn close(&mut self) {
        self.inner.close();
    }

    pub fn toggle(&mut self) {
        self.inner.toggle();
    }

    pub fn reset(&mut self) {
        self.inner.reset();
    }

    pub fn zoom_in(&mut self) {
        self.inner.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.inner.zoom_out();
    }

    pub fn pointer_down(&mut self) {
        self.inner.on_pointer_down();
    }

    pub fn pointer_move(&mut self, dx: f32, dy: f32) {
        self.inner.on_pointer_move(dx, dy);
    }

    pub fn pointer_up(&mut self) {
        self.inner.on_pointer_up();
    }

    pub fn pointer_leave(&mut self) {
        self.inner.on_pointer_leave();
    }

    pub fn blur(&mut self) {
        self.inner.on_blur();
    }

    /// Place the pin. `origin_x`/`origin_y` is the bounding-box top-left of the drawn image.
    /// Returns false when the pin was not placed.
    pub fn double_click(&mut self, screen_x: f32, screen_y: f32, origin_x: f32, origin_y: f32) -> bool {
        let origin = (origin_x.is_finite() && origin_y.is_finite()).then(|| Point::new(origin_x, origin_y));
        self.inner
            .on_double_click(Point::new(screen_x, screen_y), origin)
            .is_some()
    }

    pub fn clear_pin(&mut self) {
        self.inner.clear_pin();
    }

    pub fn visible(&self) -> bool {
        self.inner.is_visible()
    }

    pub fn zoom(&self) -> f32 {
        self.inner.zoom()
    }

    pub fn zoom_label(&self) -> String {
        self.inner.zoom_label()
    }

    pub fn translate_x(&self) -> f32 {
        self.inner.placement().translate_x
    }

    pub fn translate_y(&self) -> f32 {
        self.inner.placement().translate_y
    }

    pub fn scale(&self) -> f32 {
        self.inner.placement().scale
    }

    /// Column-major 4x4 matrix from image pixels to container pixels, for a uniform buffer.
    pub fn transform_matrix(&self) -> Vec<f32> {
        self.inner.transform_uniform().as_slice().to_vec()
    }

    pub fn has_pin(&self) -> bool {
        self.inner.pin().is_some()
    }

    pub fn pin_x(&self) -> f32 {
        self.inner.pin_marker().map_or(0.0, |marker| marker.x)
    }

    pub fn pin_y(&self) -> f32 {
        self.inner.pin_marker().map_or(0.0, |marker| marker.y)
    }

    pub fn pin_inverse_scale(&self) -> f32 {
        self.inner.pin_marker().map_or(1.0, |marker| marker.inverse_scale)
    }

    /// Full render frame as JSON.
    pub fn frame_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.inner.frame()).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Observable state snapshot as JSON.
    pub fn state_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.inner.state()).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl Default for PinViewer {
    fn default() -> Self {
        Self::new()
    }
}
