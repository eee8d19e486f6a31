// Application state and the frame loop.
//
// Per frame: drain events -> sample pointer -> pick tool -> stroke onto the
// canvas -> blit canvas into the framebuffer -> present (frame-capped).

use crate::canvas::Canvas;
use crate::config::{Config, BG_COLOR};
use crate::demo::draw_demo;
use crate::error::Error;
use crate::stroke::StrokeState;
use crate::tool::{Tool, ToolConfig};
use crate::types::{Button, FrameBuffer, PointerState};
use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// The user asked to close the window.
    Close,
    /// A mouse button went from up to down since the last frame.
    ButtonPressed(Button),
}

/// What the frame loop needs from a window. `Drawer` is the real one.
pub trait Frontend {
    fn drain_events(&mut self) -> Vec<Event>;
    fn sample_pointer(&mut self) -> PointerState;
    fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error>;
}

/// Everything the loop owns: built once at startup, dropped at exit.
pub struct App {
    canvas: Canvas,
    screen: FrameBuffer,
    tools: ToolConfig,
    stroke: StrokeState,
}

impl App {
    pub fn new(config: &Config, width: u32, height: u32) -> Result<Self, Error> {
        let mut canvas = Canvas::new(width, height, BG_COLOR)?;
        if !config.no_demo {
            draw_demo(&mut canvas);
        }
        Ok(Self {
            canvas,
            screen: FrameBuffer::new(width as usize, height as usize),
            tools: ToolConfig::from_config(config),
            stroke: StrokeState::new(),
        })
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn tools(&self) -> &ToolConfig {
        &self.tools
    }

    /// Apply one frame of pointer input to the canvas.
    pub fn step(&mut self, pointer: PointerState) -> Option<Tool> {
        self.stroke.advance(&mut self.canvas, &self.tools, pointer)
    }

    /// Composite the canvas and hand it to the frontend.
    pub fn render<F: Frontend>(&mut self, frontend: &mut F) -> Result<(), Error> {
        self.canvas.blit_into(&mut self.screen);
        frontend.present(&self.screen)
    }

    /// Run until the frontend reports `Close`.
    pub fn run<F: Frontend>(&mut self, frontend: &mut F) -> Result<(), Error> {
        let mut fps = FpsCounter::new();
        loop {
            for event in frontend.drain_events() {
                match event {
                    Event::Close => {
                        log::info!("Window closed");
                        return Ok(());
                    }
                    Event::ButtonPressed(button) => {
                        log::info!("{button:?} button pressed - {}", button.notice());
                    }
                }
            }

            let pointer = frontend.sample_pointer();
            self.step(pointer);
            self.render(frontend)?;
            fps.tick();
        }
    }
}

/// Logs the achieved frame rate once per second.
struct FpsCounter {
    since: Instant,
    frames: u32,
}

impl FpsCounter {
    fn new() -> Self {
        Self { since: Instant::now(), frames: 0 }
    }

    fn tick(&mut self) {
        self.frames += 1;
        let elapsed = self.since.elapsed();
        if elapsed >= Duration::from_secs(1) {
            log::debug!("FPS: {:.1}", self.frames as f32 / elapsed.as_secs_f32());
            self.frames = 0;
            self.since = Instant::now();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BRUSH_COLOR, HEIGHT, WIDTH};
    use crate::types::Buttons;
    use std::collections::VecDeque;

    /// Replays a fixed list of frames, then closes.
    struct Scripted {
        frames: VecDeque<(Vec<Event>, PointerState)>,
        pending: Option<PointerState>,
        presented: usize,
        last_frame: Option<FrameBuffer>,
    }

    impl Scripted {
        fn new(frames: Vec<(Vec<Event>, PointerState)>) -> Self {
            Self { frames: frames.into(), pending: None, presented: 0, last_frame: None }
        }
    }

    impl Frontend for Scripted {
        fn drain_events(&mut self) -> Vec<Event> {
            match self.frames.pop_front() {
                Some((events, pointer)) => {
                    self.pending = Some(pointer);
                    events
                }
                None => vec![Event::Close],
            }
        }

        fn sample_pointer(&mut self) -> PointerState {
            self.pending.take().unwrap_or_default()
        }

        fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
            self.presented += 1;
            self.last_frame = Some(framebuffer.clone());
            Ok(())
        }
    }

    fn blank_app() -> App {
        let cfg = Config { no_demo: true, ..Config::default() };
        App::new(&cfg, WIDTH, HEIGHT).unwrap()
    }

    #[test]
    fn run_presents_every_frame_until_close() {
        let mut app = blank_app();
        let mut fe = Scripted::new(vec![
            (vec![Event::ButtonPressed(Button::Left)], PointerState::new(50, 50, Buttons::LEFT)),
            (vec![], PointerState::new(80, 50, Buttons::LEFT)),
            (vec![], PointerState::new(80, 50, Buttons::NONE)),
        ]);
        app.run(&mut fe).unwrap();
        assert_eq!(fe.presented, 3);
        assert_eq!(app.canvas().pixel(65, 50), Some(BRUSH_COLOR));

        let frame = fe.last_frame.unwrap();
        assert_eq!(frame.pixels[50 * WIDTH as usize + 65], BRUSH_COLOR.to_u32());
        assert_eq!(frame.pixels[0], BG_COLOR.to_u32());
    }

    #[test]
    fn close_stops_before_sampling() {
        let mut app = blank_app();
        let mut fe = Scripted::new(vec![]);
        app.run(&mut fe).unwrap();
        assert_eq!(fe.presented, 0);
    }

    #[test]
    fn present_failure_ends_the_loop() {
        struct Broken;
        impl Frontend for Broken {
            fn drain_events(&mut self) -> Vec<Event> {
                Vec::new()
            }
            fn sample_pointer(&mut self) -> PointerState {
                PointerState::default()
            }
            fn present(&mut self, _: &FrameBuffer) -> Result<(), Error> {
                Err(Error::WindowUpdate("gone".into()))
            }
        }
        let mut app = blank_app();
        assert!(matches!(app.run(&mut Broken), Err(Error::WindowUpdate(_))));
    }

    #[test]
    fn demo_is_drawn_unless_disabled() {
        let with_demo = App::new(&Config::default(), WIDTH, HEIGHT).unwrap();
        assert_ne!(with_demo.canvas().pixel(80, 50), Some(BG_COLOR));
        assert_eq!(blank_app().canvas().pixel(80, 50), Some(BG_COLOR));
    }

    #[test]
    fn tools_follow_config() {
        let cfg = Config { brush_radius: 4, eraser_radius: 5, ..Config::default() };
        let app = App::new(&cfg, WIDTH, HEIGHT).unwrap();
        assert_eq!(app.tools().brush_radius, 4);
        assert_eq!(app.tools().large_eraser_radius(), 15);
    }
}
