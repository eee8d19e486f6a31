// Window + input sampling on top of minifb.
// The window shows the canvas; the mouse drives the tools.

use crate::app::{Event, Frontend};
use crate::error::Error;
use crate::types::{Buttons, FrameBuffer, Point, PointerState};
use minifb::{MouseButton, MouseMode, Window, WindowOptions};

pub struct Drawer {
    window: Window,       // the on-screen window you see
    last_pointer: Point,  // reused when minifb reports no position
    last_buttons: Buttons,
}

impl Drawer {
    /// Create a fixed-size window whose presentation is capped at `fps`.
    pub fn new(title: &str, width: usize, height: usize, fps: usize) -> Result<Self, Error> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(fps);
        Ok(Self {
            window,
            last_pointer: Point::default(),
            last_buttons: Buttons::NONE,
        })
    }

    /// Returns false once the user closes the window.
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// Current mouse position in window pixel coordinates (clamped to the window).
    pub fn mouse_pos(&self) -> Option<(i32, i32)> {
        self.window
            .get_mouse_pos(MouseMode::Clamp)
            .map(|(x, y)| (x as i32, y as i32))
    }

    pub fn buttons(&self) -> Buttons {
        Buttons {
            left: self.window.get_mouse_down(MouseButton::Left),
            middle: self.window.get_mouse_down(MouseButton::Middle),
            right: self.window.get_mouse_down(MouseButton::Right),
        }
    }
}

impl Frontend for Drawer {
    /// minifb has no event queue; presses are edges between this frame's
    /// button state and the last one seen.
    fn drain_events(&mut self) -> Vec<Event> {
        if !self.is_open() {
            return vec![Event::Close];
        }
        let now = self.buttons();
        let events: Vec<Event> = now.pressed_since(self.last_buttons).map(Event::ButtonPressed).collect();
        self.last_buttons = now;
        events
    }

    fn sample_pointer(&mut self) -> PointerState {
        if let Some((x, y)) = self.mouse_pos() {
            self.last_pointer = Point::new(x, y);
        }
        PointerState { position: self.last_pointer, buttons: self.last_buttons }
    }

    /// Push the pixels for this frame to the screen; blocks to hold the frame cap.
    fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }
}
