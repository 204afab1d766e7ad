//! Desktop window driven by macroquad

use crate::config::DemoConfig;
use crate::scene::Scene;
use macroquad::window::{Conf, next_frame};
use pane_engine::WindowManager;
use pane_engine::backend::macroquad::{MacroquadInput, MacroquadRenderer};
use pane_engine::frame;

pub fn run(config: DemoConfig) -> anyhow::Result<()> {
    let conf = Conf {
        window_title: config.title.clone(),
        window_width: config.screen_width as i32,
        window_height: config.screen_height as i32,
        ..Default::default()
    };

    let mut manager = WindowManager::new();
    let scene = Scene::build(&mut manager)?;

    macroquad::Window::from_config(conf, frame_loop(manager, scene, config));

    Ok(())
}

async fn frame_loop(mut manager: WindowManager, mut scene: Scene, config: DemoConfig) {
    let mut input = MacroquadInput;
    let mut renderer = MacroquadRenderer;

    loop {
        for event in frame::step(&mut manager, &mut input, &mut renderer, config.background) {
            scene.handle(&event);
        }

        next_frame().await;
    }
}
