// Which tool the mouse buttons pick this frame.

use crate::config::{Config, BG_COLOR, BRUSH_COLOR};
use crate::types::{Buttons, Rgb};

/// The large eraser is always this many times the small one.
pub const LARGE_ERASER_FACTOR: u32 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToolKind {
    Brush,
    LargeEraser,
    SmallEraser,
}

/// A paint/erase behavior: what color to stamp and how big.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tool {
    pub kind: ToolKind,
    pub color: Rgb,
    pub radius: u32,
}

/// Colors and sizes the selector hands out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToolConfig {
    pub brush_color: Rgb,
    pub brush_radius: u32,
    pub background: Rgb,
    pub eraser_radius: u32,
}

impl ToolConfig {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            brush_color: BRUSH_COLOR,
            brush_radius: cfg.brush_radius,
            background: BG_COLOR,
            eraser_radius: cfg.eraser_radius,
        }
    }

    pub fn large_eraser_radius(&self) -> u32 {
        self.eraser_radius * LARGE_ERASER_FACTOR
    }

    /// Priority is left > middle > right; nothing pressed means no tool.
    pub fn select(&self, buttons: Buttons) -> Option<Tool> {
        let (kind, color, radius) = if buttons.left {
            (ToolKind::Brush, self.brush_color, self.brush_radius)
        } else if buttons.middle {
            (ToolKind::LargeEraser, self.background, self.large_eraser_radius())
        } else if buttons.right {
            (ToolKind::SmallEraser, self.background, self.eraser_radius)
        } else {
            return None;
        };
        Some(Tool { kind, color, radius })
    }
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_pressed_selects_nothing() {
        assert_eq!(ToolConfig::default().select(Buttons::NONE), None);
    }

    #[test]
    fn each_button_maps_to_its_tool() {
        let tools = ToolConfig::default();
        assert_eq!(
            tools.select(Buttons::LEFT),
            Some(Tool { kind: ToolKind::Brush, color: BRUSH_COLOR, radius: 8 })
        );
        assert_eq!(
            tools.select(Buttons::MIDDLE),
            Some(Tool { kind: ToolKind::LargeEraser, color: BG_COLOR, radius: 36 })
        );
        assert_eq!(
            tools.select(Buttons::RIGHT),
            Some(Tool { kind: ToolKind::SmallEraser, color: BG_COLOR, radius: 12 })
        );
    }

    #[test]
    fn left_beats_middle_beats_right() {
        let tools = ToolConfig::default();
        let all = Buttons { left: true, middle: true, right: true };
        assert_eq!(tools.select(all).map(|t| t.kind), Some(ToolKind::Brush));
        let mid_right = Buttons { left: false, middle: true, right: true };
        assert_eq!(tools.select(mid_right).map(|t| t.kind), Some(ToolKind::LargeEraser));
        let left_right = Buttons { left: true, middle: false, right: true };
        assert_eq!(tools.select(left_right).map(|t| t.kind), Some(ToolKind::Brush));
    }

    #[test]
    fn large_eraser_is_three_times_small_for_any_radius() {
        for eraser_radius in [1, 2, 5, 12, 33, 100] {
            let tools = ToolConfig { eraser_radius, ..ToolConfig::default() };
            let large = tools.select(Buttons::MIDDLE).unwrap().radius;
            let small = tools.select(Buttons::RIGHT).unwrap().radius;
            assert_eq!(large, 3 * small);
        }
    }
}
