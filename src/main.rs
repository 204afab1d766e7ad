use crate::config::{DemoConfig, Mode};
use crate::scene::Scene;
use log::info;
use pane_engine::WindowManager;
use pane_engine::backend::Framebuffer;
use pane_engine::frame;

mod config;
mod scene;

#[cfg(feature = "live")]
mod live;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = DemoConfig::from_env()?;
    info!(
        "Starting {:?} in {:?} mode ({}x{})",
        config.title, config.mode, config.screen_width, config.screen_height
    );

    match config.mode {
        Mode::Headless => run_headless(&config),
        Mode::Live => run_live(config),
    }
}

fn run_headless(config: &DemoConfig) -> anyhow::Result<()> {
    let mut manager = WindowManager::new();
    let mut scene = Scene::build(&mut manager)?;
    let mut input = scene.demo_script();
    let mut framebuffer = Framebuffer::new(config.screen_width, config.screen_height);

    let mut frames = 0usize;
    while !input.is_finished() {
        for event in frame::step(&mut manager, &mut input, &mut framebuffer, config.background) {
            scene.handle(&event);
        }
        frames += 1;
    }

    info!("Replayed {} frames, button clicked {} time(s)", frames, scene.clicks());

    if let Some(path) = &config.snapshot {
        framebuffer.write_ppm(path)?;
        info!("Wrote last frame to {}", path.display());
    }

    Ok(())
}

#[cfg(feature = "live")]
fn run_live(config: DemoConfig) -> anyhow::Result<()> {
    live::run(config)
}

#[cfg(not(feature = "live"))]
fn run_live(_config: DemoConfig) -> anyhow::Result<()> {
    anyhow::bail!("live mode needs the `live` feature (cargo run --features live)")
}
