use anyhow::{Context, bail};
use pane_engine::Color;
use std::path::PathBuf;
use std::str::FromStr;

/// How the demo is driven.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Mode {
    /// Replay a scripted pointer session into an offscreen framebuffer.
    #[default]
    Headless,

    /// Open a desktop window (requires the `live` feature).
    Live,
}

impl FromStr for Mode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "headless" => Ok(Mode::Headless),
            "live" => Ok(Mode::Live),
            other => bail!("unknown mode {other:?} (expected \"headless\" or \"live\")"),
        }
    }
}

pub struct DemoConfig {
    /// Title of the desktop window in live mode (defaults to `"Hello World"`)
    pub title: String,

    /// Screen size in pixels (default 1280x720)
    pub screen_width: u32,
    pub screen_height: u32,

    /// Cleared behind the windows every frame
    pub background: Color,

    pub mode: Mode,

    /// Where to write the last headless frame as a PPM image, if anywhere
    pub snapshot: Option<PathBuf>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            title: "Hello World".to_string(),
            screen_width: 1280,
            screen_height: 720,
            background: Color::WHITE,
            mode: Mode::Headless,
            snapshot: None,
        }
    }
}

impl DemoConfig {
    /// Defaults overridden by `PANE_MODE`, `PANE_SCREEN` (`WIDTHxHEIGHT`) and `PANE_SNAPSHOT`.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Some(mode) = lookup("PANE_MODE") {
            config.mode = mode.parse().context("PANE_MODE")?;
        }

        if let Some(screen) = lookup("PANE_SCREEN") {
            let (width, height) = parse_screen(&screen).context("PANE_SCREEN")?;
            config.screen_width = width;
            config.screen_height = height;
        }

        if let Some(path) = lookup("PANE_SNAPSHOT") {
            if !path.is_empty() {
                config.snapshot = Some(PathBuf::from(path));
            }
        }

        Ok(config)
    }
}

/// Largest accepted screen edge; keeps sizes representable as `i32` and the headless
/// framebuffer allocation bounded.
const MAX_SCREEN_DIMENSION: u32 = 16_384;

fn parse_screen(value: &str) -> anyhow::Result<(u32, u32)> {
    let Some((width, height)) = value.split_once(|c: char| c == 'x' || c == 'X') else {
        bail!("expected WIDTHxHEIGHT, got {value:?}");
    };

    let width: u32 = width.trim().parse().with_context(|| format!("bad width in {value:?}"))?;
    let height: u32 = height.trim().parse().with_context(|| format!("bad height in {value:?}"))?;

    if width == 0 || height == 0 {
        bail!("screen size must be non-zero, got {value:?}");
    }

    if width > MAX_SCREEN_DIMENSION || height > MAX_SCREEN_DIMENSION {
        bail!("screen size {value:?} exceeds {MAX_SCREEN_DIMENSION}x{MAX_SCREEN_DIMENSION}");
    }

    Ok((width, height))
}
