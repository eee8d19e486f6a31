// Static demo drawing painted once onto the canvas before the loop starts.
// Users paint and erase on top of it; erasing restores the background, not the demo.

use crate::canvas::Canvas;
use crate::types::{Point, Rgb};
use std::f32::consts::PI;

const WHITE: Rgb = Rgb(255, 255, 255);
const BLACK: Rgb = Rgb(0, 0, 0);
const RED: Rgb = Rgb(220, 50, 50);
const GREEN: Rgb = Rgb(50, 200, 120);
const BLUE: Rgb = Rgb(40, 120, 240);
const YELLOW: Rgb = Rgb(240, 220, 60);
const MAGENTA: Rgb = Rgb(200, 50, 180);

const fn p(x: i32, y: i32) -> Point {
    Point::new(x, y)
}

/// Draw the demo shapes. Not idempotent on the canvas, but deterministic on a fresh one.
pub fn draw_demo(canvas: &mut Canvas) {
    // Rectangles: solid, then a 4px outline.
    canvas.fill_rect(20, 20, 120, 60, RED);
    canvas.stroke_rect(160, 20, 120, 60, 4, WHITE);

    // Circle with a center marker.
    canvas.fill_circle(p(320, 50), 40, GREEN);
    canvas.fill_circle(p(320, 50), 10, WHITE);

    canvas.fill_ellipse(400, 20, 160, 60, YELLOW);

    // Polygons: filled triangle, outlined pentagon.
    canvas.fill_polygon(&[p(60, 120), p(20, 200), p(100, 200)], BLUE);
    canvas.stroke_polygon(
        &[p(180, 120), p(220, 140), p(200, 190), p(160, 190), p(140, 140)],
        3,
        MAGENTA,
    );

    // Lines.
    canvas.line(p(260, 120), p(500, 160), 3, WHITE);
    canvas.aa_polyline(&[p(260, 170), p(300, 210), p(340, 180), p(380, 230)], BLACK);

    // Upper half of an ellipse.
    canvas.arc(420, 140, 140, 80, 0.0, PI, 3, WHITE);

    // Marker dots.
    for (x, y) in [(520, 60), (540, 80), (560, 100)] {
        canvas.fill_circle(p(x, y), 4, WHITE);
    }
}
