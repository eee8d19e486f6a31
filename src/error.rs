// Errors that can stop the sketchpad.
// Every variant states *where* things went wrong; drawing itself never fails.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Creating the window failed (no display, bad size, ...).
    #[error("Window init error: {0}")]
    WindowInit(String),

    /// Pushing a frame to the window failed.
    #[error("Window update error: {0}")]
    WindowUpdate(String),

    /// The off-screen canvas could not be allocated.
    #[error("Canvas init error: cannot allocate {width}x{height} pixmap")]
    CanvasInit { width: u32, height: u32 },
}
