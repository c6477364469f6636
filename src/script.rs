//! Event scripts and the replay driver.
//!
//! A script stands in for the collaborating surfaces: it names the image (size or
//! path), the container size and on-screen position, and the ordered input events.
//! [`replay`] feeds them to a [`Viewer`] and records what the render surface would
//! receive after each one.

use crate::error::ReplayError;
use crate::image_source::probe_dimensions;
use pinview_core::{Point, RenderFrame, Size, ViewState, Viewer, ViewerSettings};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Container surface description.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContainerSpec {
    pub width: f32,
    pub height: f32,
    /// On-screen position of the container's top-left corner
    #[serde(default)]
    pub origin: Point,
}

/// One input or lifecycle event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    Open,
    Close,
    ZoomIn,
    ZoomOut,
    PointerDown,
    PointerMove { dx: f32, dy: f32 },
    PointerUp,
    PointerLeave,
    Blur,
    DoubleClick { x: f32, y: f32 },
    ClearPin,
    Reset,
    ImageLoaded { width: f32, height: f32 },
    ContainerMounted { width: f32, height: f32 },
}

impl InputEvent {
    pub fn name(&self) -> &'static str {
        match self {
            InputEvent::Open => "open",
            InputEvent::Close => "close",
            InputEvent::ZoomIn => "zoom_in",
            InputEvent::ZoomOut => "zoom_out",
            InputEvent::PointerDown => "pointer_down",
            InputEvent::PointerMove { .. } => "pointer_move",
            InputEvent::PointerUp => "pointer_up",
            InputEvent::PointerLeave => "pointer_leave",
            InputEvent::Blur => "blur",
            InputEvent::DoubleClick { .. } => "double_click",
            InputEvent::ClearPin => "clear_pin",
            InputEvent::Reset => "reset",
            InputEvent::ImageLoaded { .. } => "image_loaded",
            InputEvent::ContainerMounted { .. } => "container_mounted",
        }
    }
}

/// A scripted viewer session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventScript {
    /// Intrinsic image size, reported before the container mounts
    #[serde(default)]
    pub image: Option<Size>,

    /// Image file whose dimensions are probed when `image` is absent.
    /// Relative paths are resolved against the script's directory.
    #[serde(default)]
    pub image_path: Option<PathBuf>,

    /// Container mounted right after the image is reported
    #[serde(default)]
    pub container: Option<ContainerSpec>,

    #[serde(default)]
    pub events: Vec<InputEvent>,
}

impl EventScript {
    /// Parse a script from JSON.
    pub fn from_json(json: &str) -> Result<Self, ReplayError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a script file. A relative `image_path` is rebased onto the file's directory.
    pub fn load(path: &Path) -> Result<Self, ReplayError> {
        let json = std::fs::read_to_string(path)?;
        let mut script = Self::from_json(&json)?;
        if let (Some(image_path), Some(dir)) = (script.image_path.as_mut(), path.parent()) {
            if image_path.is_relative() {
                *image_path = dir.join(&*image_path);
            }
        }
        log::debug!("Loaded script {:?} with {} events", path, script.events.len());
        Ok(script)
    }

    /// Intrinsic image size: the explicit size, else the probed size of `image_path`.
    pub fn resolve_image(&self) -> Result<Option<Size>, ReplayError> {
        match (self.image, &self.image_path) {
            (Some(size), _) => Ok(Some(size)),
            (None, Some(path)) => probe_dimensions(path).map(Some),
            (None, None) => Ok(None),
        }
    }
}

/// What the render surface receives after one event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameRecord {
    pub index: usize,
    pub event: InputEvent,
    pub frame: RenderFrame,
    pub state: ViewState,
    /// Pin position on screen, when a pin exists and the container is mounted
    pub pin_screen: Option<Point>,
}

impl fmt::Display for FrameRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let placement = &self.frame.placement;
        write!(
            f,
            "#{:<3} {:<17} {} translate ({:.1}, {:.1}) pan ({:.1}, {:.1})",
            self.index,
            self.event.name(),
            self.frame.zoom_label,
            placement.translate_x,
            placement.translate_y,
            self.state.pan.x,
            self.state.pan.y,
        )?;
        match (self.state.pin, self.pin_screen) {
            (Some(pin), Some(screen)) => write!(
                f,
                " pin ({:.1}, {:.1}) @ screen ({:.1}, {:.1})",
                pin.x, pin.y, screen.x, screen.y
            ),
            (Some(pin), None) => write!(f, " pin ({:.1}, {:.1})", pin.x, pin.y),
            (None, _) => write!(f, " pin -"),
        }
    }
}

/// Drives one [`Viewer`] through a script.
pub struct Replay {
    viewer: Viewer,
    container_origin: Point,
    mounted: bool,
}

impl Replay {
    /// Start a session, reporting the image and mounting the container if given.
    pub fn new(settings: ViewerSettings, image: Option<Size>, container: Option<ContainerSpec>) -> Self {
        let mut replay = Self {
            viewer: Viewer::new(settings),
            container_origin: Point::ZERO,
            mounted: false,
        };
        if let Some(image) = image {
            replay.viewer.record_image_metrics(image.width, image.height);
        }
        if let Some(container) = container {
            replay.container_origin = container.origin;
            replay.mount(container.width, container.height);
        }
        replay
    }

    fn mount(&mut self, width: f32, height: f32) {
        self.viewer.record_container_metrics(width, height);
        self.mounted = true;
    }

    /// On-screen top-left of the drawn image, once the container exists.
    fn surface_origin(&self) -> Option<Point> {
        self.mounted
            .then(|| self.viewer.surface_origin(self.container_origin))
    }

    /// Apply a single event.
    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::Open => self.viewer.open(),
            InputEvent::Close => self.viewer.close(),
            InputEvent::ZoomIn => self.viewer.zoom_in(),
            InputEvent::ZoomOut => self.viewer.zoom_out(),
            InputEvent::PointerDown => self.viewer.on_pointer_down(),
            InputEvent::PointerMove { dx, dy } => self.viewer.on_pointer_move(dx, dy),
            InputEvent::PointerUp => self.viewer.on_pointer_up(),
            InputEvent::PointerLeave => self.viewer.on_pointer_leave(),
            InputEvent::Blur => self.viewer.on_blur(),
            InputEvent::DoubleClick { x, y } => {
                let origin = self.surface_origin();
                self.viewer.on_double_click(Point::new(x, y), origin);
            }
            InputEvent::ClearPin => self.viewer.clear_pin(),
            InputEvent::Reset => self.viewer.reset(),
            InputEvent::ImageLoaded { width, height } => {
                self.viewer.record_image_metrics(width, height)
            }
            InputEvent::ContainerMounted { width, height } => self.mount(width, height),
        }
    }

    /// Snapshot what the render surface would draw now.
    pub fn record(&self, index: usize, event: InputEvent) -> FrameRecord {
        FrameRecord {
            index,
            event,
            frame: self.viewer.frame(),
            state: self.viewer.state(),
            pin_screen: self
                .surface_origin()
                .and_then(|origin| self.viewer.pin_screen_position(origin)),
        }
    }

    pub fn viewer(&self) -> &Viewer {
        &self.viewer
    }
}

/// Run every event of `script`, returning one record per event.
///
/// `image` overrides whatever size the script itself would report.
pub fn replay(script: &EventScript, image: Option<Size>, settings: ViewerSettings) -> Vec<FrameRecord> {
    let image = image.or(script.image);
    let mut session = Replay::new(settings, image, script.container);

    let records: Vec<FrameRecord> = script
        .events
        .iter()
        .enumerate()
        .map(|(index, &event)| {
            session.apply(event);
            session.record(index, event)
        })
        .collect();

    log::info!("Replayed {} events", records.len());
    records
}

/// Format records for output: pretty JSON, or one [`FrameRecord`] line each.
pub fn render_records(records: &[FrameRecord], json: bool) -> Result<String, ReplayError> {
    if json {
        return serde_json::to_string_pretty(records).map_err(ReplayError::Output);
    }
    Ok(records
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.01;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    const SCRIPT: &str = r#"{
        "image": { "width": 2000, "height": 1000 },
        "container": { "width": 500, "height": 500, "origin": { "x": 20, "y": 40 } },
        "events": [
            { "type": "open" },
            { "type": "zoom_out" },
            { "type": "zoom_in" },
            { "type": "pointer_down" },
            { "type": "pointer_move", "dx": -400, "dy": 10 },
            { "type": "pointer_up" },
            { "type": "double_click", "x": 270, "y": 290 },
            { "type": "zoom_in" }
        ]
    }"#;

    #[test]
    fn test_parse_script() {
        let script = EventScript::from_json(SCRIPT).unwrap();
        assert_eq!(script.image, Some(Size::new(2000.0, 1000.0)));
        assert_eq!(script.events.len(), 8);
        assert_eq!(script.events[4], InputEvent::PointerMove { dx: -400.0, dy: 10.0 });
    }

    #[test]
    fn test_unknown_event_rejected() {
        let json = r#"{ "events": [ { "type": "pinch", "scale": 2 } ] }"#;
        assert!(matches!(EventScript::from_json(json), Err(ReplayError::Parse(_))));
    }

    #[test]
    fn test_replay_reference_session() {
        let script = EventScript::from_json(SCRIPT).unwrap();
        let records = replay(&script, None, ViewerSettings::default());
        assert_eq!(records.len(), 8);

        assert_eq!(records[1].frame.zoom_label, "x0.25");
        assert_eq!(records[2].frame.zoom_label, "x0.35");
        assert!(records[3].state.dragging);
        assert!(approx_eq(records[4].state.pan.x, 100.0));
        assert_eq!(records[4].state.pan.y, 0.0);
        assert!(!records[5].state.dragging);

        // Pin lands under the click and follows the image after zooming
        let placed = &records[6];
        let screen = placed.pin_screen.unwrap();
        assert!(approx_eq(screen.x, 270.0));
        assert!(approx_eq(screen.y, 290.0));

        let zoomed = &records[7];
        assert_eq!(zoomed.state.pin, placed.state.pin);
        assert!(zoomed.frame.pin.is_some());
    }

    #[test]
    fn test_double_click_before_mount_ignored() {
        let script = EventScript {
            image: Some(Size::new(800.0, 600.0)),
            events: vec![
                InputEvent::Open,
                InputEvent::DoubleClick { x: 10.0, y: 10.0 },
                InputEvent::ContainerMounted { width: 400.0, height: 400.0 },
                InputEvent::DoubleClick { x: 10.0, y: 10.0 },
            ],
            ..EventScript::default()
        };
        let records = replay(&script, None, ViewerSettings::default());
        assert_eq!(records[1].state.pin, None);
        assert!(records[3].state.pin.is_some());
    }

    #[test]
    fn test_image_override() {
        let script = EventScript::from_json(SCRIPT).unwrap();
        let records = replay(&script, Some(Size::new(300.0, 200.0)), ViewerSettings::default());
        assert_eq!(records[1].frame.zoom_label, "x1.00");
    }

    #[test]
    fn test_resolve_image_prefers_explicit_size() {
        let script = EventScript {
            image: Some(Size::new(10.0, 20.0)),
            image_path: Some(PathBuf::from("/missing.png")),
            ..EventScript::default()
        };
        assert_eq!(script.resolve_image().unwrap(), Some(Size::new(10.0, 20.0)));
        assert_eq!(EventScript::default().resolve_image().unwrap(), None);
    }

    #[test]
    fn test_load_demo_script() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/wide_image.json");
        let script = EventScript::load(&path).unwrap();
        let records = replay(&script, None, ViewerSettings::default());

        let last = records.last().unwrap();
        assert!(last.state.visible);
        // Zoomed back to fit: pan collapsed, pin kept across close/open
        assert_eq!(last.frame.zoom_label, "x0.25");
        assert!(approx_eq(last.state.pan.x, 0.0));
        assert!(approx_eq(last.state.pan.y, 0.0));
        assert!(last.state.pin.is_some());
    }

    #[test]
    fn test_replay_late_image_and_drag_interruptions() {
        let json = r#"{
            "events": [
                { "type": "container_mounted", "width": 500, "height": 500 },
                { "type": "open" },
                { "type": "double_click", "x": 10, "y": 10 },
                { "type": "image_loaded", "width": 2000, "height": 1000 },
                { "type": "zoom_in" },
                { "type": "pointer_down" },
                { "type": "pointer_leave" },
                { "type": "pointer_move", "dx": -400, "dy": 0 },
                { "type": "pointer_down" },
                { "type": "blur" },
                { "type": "double_click", "x": 100, "y": 100 },
                { "type": "clear_pin" }
            ]
        }"#;
        let script = EventScript::from_json(json).unwrap();
        let records = replay(&script, None, ViewerSettings::default());

        // Placeholder fit until the image reports its size
        assert_eq!(records[0].frame.zoom_label, "x1.00");
        assert!(records[2].state.pin.is_some());

        let refit = &records[3];
        assert!(approx_eq(refit.state.zoom, 0.25));
        assert!(approx_eq(refit.state.range.min, 0.25));
        assert_eq!(refit.state.base, Point::new(750.0, 250.0));
        assert_eq!(refit.state.pin, None);

        assert!(records[5].state.dragging);
        assert!(!records[6].state.dragging);
        assert_eq!(records[7].state.pan, Point::ZERO);
        assert!(records[8].state.dragging);
        assert!(!records[9].state.dragging);

        assert!(records[10].state.pin.is_some());
        assert!(records[10].pin_screen.is_some());
        assert_eq!(records[11].state.pin, None);
        assert_eq!(records[11].frame.pin, None);
        assert_eq!(records[11].pin_screen, None);
    }

    #[test]
    fn test_render_records_lines() {
        let script = EventScript::from_json(SCRIPT).unwrap();
        let records = replay(&script, None, ViewerSettings::default());
        let text = render_records(&records, false).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 8);
        assert!(lines[0].starts_with("#0"));
        assert!(lines[7].contains("zoom_in"));
    }

    #[test]
    fn test_render_records_json() {
        let script = EventScript::from_json(SCRIPT).unwrap();
        let records = replay(&script, None, ViewerSettings::default());
        let text = render_records(&records, true).unwrap();
        let parsed: Vec<FrameRecord> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.len(), records.len());
        assert_eq!(parsed[6].event, InputEvent::DoubleClick { x: 270.0, y: 290.0 });
        assert_eq!(parsed[6].frame.transform.as_slice().len(), 16);
    }

    #[test]
    fn test_record_display() {
        let script = EventScript::from_json(SCRIPT).unwrap();
        let records = replay(&script, None, ViewerSettings::default());
        let line = records[6].to_string();
        assert!(line.starts_with("#6"));
        assert!(line.contains("double_click"));
        assert!(line.contains("x0.35"));
        assert!(line.contains("@ screen (270.0, 290.0)"));
    }
}
