//! pinview - Interactive pan/zoom/pin image viewer
//!
//! The viewport engine lives in `pinview_core`; this crate adds configuration,
//! the image source provider, the event-script replay driver and the web entry point.

pub mod config;
pub mod error;
pub mod image_source;
pub mod script;

pub use config::{AppConfig, ConfigError, LogLevel};
pub use error::ReplayError;
pub use pinview_core::{Point, RenderFrame, Size, ViewState, Viewer, ViewerSettings};
pub use script::{render_records, replay, EventScript, FrameRecord, InputEvent, Replay};

// WASM entry point
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::*;
