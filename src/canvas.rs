// The off-screen canvas: every demo shape and every user stroke lands here,
// and each frame it is copied into the window's framebuffer.
//
// Rasterization is delegated to tiny-skia. Point-like inputs (centers, line
// endpoints, polygon vertices) address pixel centers, so a dot at (x, y) is
// centered on that pixel. Rectangles address pixel edges.

use crate::error::Error;
use crate::types::{FrameBuffer, Point, Rgb};
use tiny_skia::{Color, FillRule, LineCap, LineJoin, Paint, Path, PathBuilder, Pixmap, Rect, Stroke, Transform};

/// Segments used to approximate an elliptical arc.
const ARC_SEGMENTS: usize = 64;

#[derive(Clone)]
pub struct Canvas {
    pixmap: Pixmap,
}

impl Canvas {
    /// Allocate a canvas and flood it with `background`.
    pub fn new(width: u32, height: u32, background: Rgb) -> Result<Self, Error> {
        let mut pixmap = Pixmap::new(width, height).ok_or(Error::CanvasInit { width, height })?;
        pixmap.fill(Color::from_rgba8(background.0, background.1, background.2, 255));
        Ok(Self { pixmap })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Color at (x, y), or `None` outside the canvas.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgb> {
        if x < 0 || y < 0 {
            return None;
        }
        // The canvas is opaque everywhere, so premultiplied == straight RGB.
        self.pixmap
            .pixel(x as u32, y as u32)
            .map(|c| Rgb(c.red(), c.green(), c.blue()))
    }

    /* ---------- Primitives ---------- */

    pub fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Rgb) {
        if let Some(rect) = Rect::from_xywh(x as f32, y as f32, w as f32, h as f32) {
            self.pixmap.fill_rect(rect, &solid(color, false), Transform::identity(), None);
        }
    }

    /// Rectangle outline whose border of `width` pixels lies inside the rectangle.
    pub fn stroke_rect(&mut self, x: i32, y: i32, w: u32, h: u32, width: u32, color: Rgb) {
        let inset = width as f32 / 2.0;
        let (l, t) = (x as f32 + inset, y as f32 + inset);
        let (r, b) = (x as f32 + w as f32 - inset, y as f32 + h as f32 - inset);
        if r <= l || b <= t {
            // Border thicker than the rectangle: it is solid.
            self.fill_rect(x, y, w, h, color);
            return;
        }
        if let Some(path) = closed_path(&[(l, t), (r, t), (r, b), (l, b)]) {
            self.stroke(&path, width as f32, color, LineCap::Butt, false);
        }
    }

    pub fn fill_circle(&mut self, center: Point, radius: u32, color: Rgb) {
        let (cx, cy) = pixel_center(center);
        if let Some(path) = PathBuilder::from_circle(cx, cy, radius as f32) {
            self.fill(&path, color, false);
        }
    }

    /// Filled ellipse inscribed in the given rectangle.
    pub fn fill_ellipse(&mut self, x: i32, y: i32, w: u32, h: u32, color: Rgb) {
        let Some(rect) = Rect::from_xywh(x as f32, y as f32, w as f32, h as f32) else {
            return;
        };
        if let Some(path) = PathBuilder::from_oval(rect) {
            self.fill(&path, color, false);
        }
    }

    pub fn fill_polygon(&mut self, points: &[Point], color: Rgb) {
        let pts: Vec<_> = points.iter().copied().map(pixel_center).collect();
        if let Some(path) = closed_path(&pts) {
            self.fill(&path, color, false);
        }
    }

    /// Closed polygon outline; the last vertex connects back to the first.
    pub fn stroke_polygon(&mut self, points: &[Point], width: u32, color: Rgb) {
        let pts: Vec<_> = points.iter().copied().map(pixel_center).collect();
        if let Some(path) = closed_path(&pts) {
            self.stroke(&path, width as f32, color, LineCap::Butt, false);
        }
    }

    /// Straight line with flat ends.
    pub fn line(&mut self, from: Point, to: Point, width: u32, color: Rgb) {
        if let Some(path) = open_path(&[pixel_center(from), pixel_center(to)]) {
            self.stroke(&path, width as f32, color, LineCap::Butt, false);
        }
    }

    /// Straight line with round ends, so consecutive segments join without notches.
    pub fn round_line(&mut self, from: Point, to: Point, width: u32, color: Rgb) {
        if let Some(path) = open_path(&[pixel_center(from), pixel_center(to)]) {
            self.stroke(&path, width as f32, color, LineCap::Round, false);
        }
    }

    /// One-pixel anti-aliased open polyline.
    pub fn aa_polyline(&mut self, points: &[Point], color: Rgb) {
        let pts: Vec<_> = points.iter().copied().map(pixel_center).collect();
        if let Some(path) = open_path(&pts) {
            self.stroke(&path, 1.0, color, LineCap::Butt, true);
        }
    }

    /// Arc of the ellipse inscribed in the rectangle, from `start` to `stop`
    /// radians (0 = +x, counter-clockwise on screen). The stroke lies inside the rectangle.
    #[allow(clippy::too_many_arguments)]
    pub fn arc(&mut self, x: i32, y: i32, w: u32, h: u32, start: f32, stop: f32, width: u32, color: Rgb) {
        let inset = width as f32 / 2.0;
        let rx = w as f32 / 2.0 - inset;
        let ry = h as f32 / 2.0 - inset;
        if rx <= 0.0 || ry <= 0.0 || stop <= start {
            return;
        }
        let (cx, cy) = (x as f32 + w as f32 / 2.0, y as f32 + h as f32 / 2.0);
        let pts: Vec<_> = (0..=ARC_SEGMENTS)
            .map(|i| {
                let t = start + (stop - start) * i as f32 / ARC_SEGMENTS as f32;
                // Screen y grows downwards.
                (cx + rx * t.cos(), cy - ry * t.sin())
            })
            .collect();
        if let Some(path) = open_path(&pts) {
            self.stroke(&path, width as f32, color, LineCap::Butt, false);
        }
    }

    /* ---------- Composition ---------- */

    /// Copy the canvas into `fb` with its top-left corner at the origin.
    pub fn blit_into(&self, fb: &mut FrameBuffer) {
        let w = (self.width() as usize).min(fb.width);
        let h = (self.height() as usize).min(fb.height);
        let src = self.pixmap.pixels();
        let src_stride = self.width() as usize;
        for y in 0..h {
            let src_row = &src[y * src_stride..y * src_stride + w];
            let dst_row = &mut fb.pixels[y * fb.width..y * fb.width + w];
            for (dst, c) in dst_row.iter_mut().zip(src_row) {
                *dst = Rgb(c.red(), c.green(), c.blue()).to_u32();
            }
        }
    }

    fn fill(&mut self, path: &Path, color: Rgb, anti_alias: bool) {
        self.pixmap
            .fill_path(path, &solid(color, anti_alias), FillRule::Winding, Transform::identity(), None);
    }

    fn stroke(&mut self, path: &Path, width: f32, color: Rgb, line_cap: LineCap, anti_alias: bool) {
        let stroke = Stroke { width, line_cap, line_join: LineJoin::Round, ..Stroke::default() };
        self.pixmap
            .stroke_path(path, &solid(color, anti_alias), &stroke, Transform::identity(), None);
    }
}

fn solid(color: Rgb, anti_alias: bool) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.0, color.1, color.2, 255);
    paint.anti_alias = anti_alias;
    paint
}

#[inline]
fn pixel_center(p: Point) -> (f32, f32) {
    (p.x as f32 + 0.5, p.y as f32 + 0.5)
}

fn open_path(points: &[(f32, f32)]) -> Option<Path> {
    polyline(points, false)
}

fn closed_path(points: &[(f32, f32)]) -> Option<Path> {
    polyline(points, true)
}

fn polyline(points: &[(f32, f32)], close: bool) -> Option<Path> {
    let (&(x0, y0), rest) = points.split_first()?;
    let mut pb = PathBuilder::new();
    pb.move_to(x0, y0);
    for &(x, y) in rest {
        pb.line_to(x, y);
    }
    if close {
        pb.close();
    }
    pb.finish()
}
