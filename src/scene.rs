//! The demo desktop: two overlapping windows and what happens when they are used

use cgmath::vec2;
use log::{debug, info};
use pane_engine::backend::ScriptedInput;
use pane_engine::{
    Alignment, Button, ButtonConfig, Color, Label, LabelConfig, UiEvent, Window, WindowConfig,
    WindowId, WindowManager,
};

const TITLE_BAR_BLUE: Color = Color::rgb(80, 160, 230);

pub struct Scene {
    pub first: WindowId,
    pub second: WindowId,
    clicks: usize,
}

fn teste_button() -> pane_engine::Result<Button> {
    Button::new(ButtonConfig {
        text: "Teste Button".to_string(),
        offset: vec2(0.0, 200.0),
        ..Default::default()
    })
}

fn base_window(title: &str) -> pane_engine::Result<Window> {
    Window::new(WindowConfig {
        title: Some(title.to_string()),
        position: vec2(100.0, 100.0),
        width: 300.0,
        height: 400.0,
        color: Color::SKY_BLUE,
        title_bar_color: Some(TITLE_BAR_BLUE),
        close_button: Some("X".to_string()),
    })
}

impl Scene {
    /// Register both demo windows with `manager` and show them. The second one ends up on top.
    pub fn build(manager: &mut WindowManager) -> anyhow::Result<Self> {
        let mut first = base_window("Teste 1")?;
        first.add_widget("button", teste_button()?)?;

        let mut second = base_window("Teste 2")?;
        let label = Label::new(LabelConfig {
            text: "Teste Label".to_string(),
            width: 200.0,
            offset: vec2(0.0, 60.0),
            alignment: Alignment::Center,
            ..Default::default()
        })?;
        second.add_widget("label", label)?;
        second.add_widget("button", teste_button()?)?;

        let first = manager.add_window(first);
        let second = manager.add_window(second);
        manager.show_window(first)?;
        manager.show_window(second)?;

        Ok(Self { first, second, clicks: 0 })
    }

    pub fn handle(&mut self, event: &UiEvent) {
        match event {
            UiEvent::ButtonClicked { window, widget } if *window == self.second && widget == "button" => {
                self.clicks += 1;
                info!("Button clicked");
            }
            UiEvent::ButtonClicked { window, widget } => debug!("{widget} clicked in {window:?}"),
            UiEvent::WindowClosed(window) => info!("Window {window:?} closed"),
            other => debug!("{other:?}"),
        }
    }

    /// Clicks on the second window's button so far.
    pub fn clicks(&self) -> usize {
        self.clicks
    }

    /// Pointer session replayed in headless mode: click the top window's button, drag that window
    /// aside by its title bar, click the button revealed underneath, then close the moved window.
    pub fn demo_script(&self) -> ScriptedInput {
        let on_button = vec2(150.0, 310.0);
        let grab = vec2(150.0, 120.0);
        let moved_by = vec2(500.0, 100.0);

        let mut script = ScriptedInput::new().hover(on_button).click(on_button).press(grab);
        for step in 1..=10 {
            script = script.drag(grab + moved_by * (step as f32 / 10.0));
        }
        let close = vec2(880.0, 220.0);

        script
            .release(grab + moved_by)
            .hover(on_button)
            .click(on_button)
            .hover(close)
            .click(close)
    }
}
