// Turning per-frame pointer samples into continuous strokes on the canvas.

use crate::canvas::Canvas;
use crate::tool::{Tool, ToolConfig, ToolKind};
use crate::types::{Point, PointerState};

/// Stamp a dot of the tool's radius at `current`, and bridge from `previous`
/// with a segment twice as wide so fast moves leave no gaps.
pub fn paint_stroke(canvas: &mut Canvas, tool: &Tool, current: Point, previous: Option<Point>) {
    canvas.fill_circle(current, tool.radius, tool.color);
    if let Some(prev) = previous.filter(|&p| p != current) {
        canvas.round_line(prev, current, tool.radius * 2, tool.color);
    }
}

/// The stroke in progress, if any.
#[derive(Debug, Default)]
pub struct StrokeState {
    last_pos: Option<Point>,
    last_kind: Option<ToolKind>,
}

impl StrokeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_pos(&self) -> Option<Point> {
        self.last_pos
    }

    /// Process one frame's sample. Returns the tool that painted, if any.
    ///
    /// Releasing every button ends the stroke. Switching tools mid-drag also
    /// starts a new stroke, so brush and eraser paths are never joined.
    pub fn advance(&mut self, canvas: &mut Canvas, tools: &ToolConfig, pointer: PointerState) -> Option<Tool> {
        let Some(tool) = tools.select(pointer.buttons) else {
            self.reset();
            return None;
        };

        let previous = if self.last_kind == Some(tool.kind) { self.last_pos } else { None };
        paint_stroke(canvas, &tool, pointer.position, previous);

        self.last_pos = Some(pointer.position);
        self.last_kind = Some(tool.kind);
        Some(tool)
    }

    pub fn reset(&mut self) {
        self.last_pos = None;
        self.last_kind = None;
    }
}
