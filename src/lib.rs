//! A small mouse-driven drawing canvas.
//!
//! Left button paints, middle erases with a large eraser, right with a small
//! one. The canvas starts with a set of demo shapes.

pub mod app;
pub mod canvas;
pub mod config;
pub mod demo;
pub mod draw;
pub mod error;
pub mod stroke;
pub mod tool;
pub mod types;

pub use app::{App, Event, Frontend};
pub use canvas::Canvas;
pub use config::Config;
pub use error::Error;
pub use tool::{Tool, ToolConfig, ToolKind};
pub use types::{Button, Buttons, FrameBuffer, Point, PointerState, Rgb};
