// Core value types shared by the canvas, the tools and the frame loop.

/// An opaque color as an RGB byte triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Packs the color as 0x00RRGGBB, the layout minifb expects.
    #[inline]
    pub fn to_u32(self) -> u32 {
        ((self.0 as u32) << 16) | ((self.1 as u32) << 8) | self.2 as u32
    }
}

/// Integer pixel coordinates. May lie outside the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Button {
    Left,
    Middle,
    Right,
}

impl Button {
    pub const ALL: [Button; 3] = [Button::Left, Button::Middle, Button::Right];

    /// What pressing this button starts doing.
    pub fn notice(self) -> &'static str {
        match self {
            Button::Left => "drawing started",
            Button::Middle => "large eraser",
            Button::Right => "small eraser",
        }
    }
}

/// Pressed state of the three mouse buttons for one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Buttons {
    pub left: bool,
    pub middle: bool,
    pub right: bool,
}

impl Buttons {
    pub const NONE: Buttons = Buttons { left: false, middle: false, right: false };
    pub const LEFT: Buttons = Buttons { left: true, middle: false, right: false };
    pub const MIDDLE: Buttons = Buttons { left: false, middle: true, right: false };
    pub const RIGHT: Buttons = Buttons { left: false, middle: false, right: true };

    pub fn is_down(&self, button: Button) -> bool {
        match button {
            Button::Left => self.left,
            Button::Middle => self.middle,
            Button::Right => self.right,
        }
    }

    /// Buttons that are down now but were up in `previous`, in left/middle/right order.
    pub fn pressed_since(self, previous: Buttons) -> impl Iterator<Item = Button> {
        Button::ALL
            .into_iter()
            .filter(move |&b| self.is_down(b) && !previous.is_down(b))
    }
}

/// Everything the frame loop reads from the pointer in one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct PointerState {
    pub position: Point,
    pub buttons: Buttons,
}

impl PointerState {
    pub fn new(x: i32, y: i32, buttons: Buttons) -> Self {
        Self { position: Point::new(x, y), buttons }
    }
}

/// Pixels handed to the window each frame.
#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the frame is on screen (pixels)
    pub height: usize,     // how tall the frame is on screen (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![0u32; width * height] }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_packs_as_xrgb() {
        assert_eq!(Rgb(89, 99, 255).to_u32(), 0x00_59_63_FF);
        assert_eq!(Rgb(0, 0, 0).to_u32(), 0);
    }

    #[test]
    fn pressed_since_reports_only_new_buttons() {
        let prev = Buttons { left: true, middle: false, right: false };
        let now = Buttons { left: true, middle: true, right: true };
        let pressed: Vec<_> = now.pressed_since(prev).collect();
        assert_eq!(pressed, vec![Button::Middle, Button::Right]);
    }

    #[test]
    fn held_or_released_buttons_are_not_presses() {
        assert_eq!(Buttons::LEFT.pressed_since(Buttons::LEFT).count(), 0);
        assert_eq!(Buttons::NONE.pressed_since(Buttons::RIGHT).count(), 0);
    }

    #[test]
    fn notices_name_the_tool() {
        assert_eq!(Button::Left.notice(), "drawing started");
        assert_eq!(Button::Middle.notice(), "large eraser");
        assert_eq!(Button::Right.notice(), "small eraser");
    }
}
