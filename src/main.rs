// What you SEE:
// • A 640x320 window with a few demo shapes on a blue background.
// • Hold Left Mouse: paint in black.
// • Hold Middle Mouse: big eraser. Hold Right Mouse: small eraser.
// • Close the window to quit.

use clap::Parser;
use sketchpad::config::{HEIGHT, TARGET_FPS, WIDTH};
use sketchpad::draw::Drawer;
use sketchpad::{App, Config, Error};

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::parse();

    let mut app = App::new(&config, WIDTH, HEIGHT)?;
    let mut drawer = Drawer::new(&config.title, WIDTH as usize, HEIGHT as usize, TARGET_FPS)?;
    log::info!(
        "Canvas ready: brush r={}, eraser r={} (large r={})",
        config.brush_radius,
        config.eraser_radius,
        app.tools().large_eraser_radius()
    );

    app.run(&mut drawer)
}
