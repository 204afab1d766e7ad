use crate::window::WindowId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Rejections raised when a window or widget is built or configured with invalid values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("width must be positive (got {0})")]
    InvalidWidth(f32),

    #[error("height must be positive (got {0})")]
    InvalidHeight(f32),

    #[error("width must not be negative (got {0})")]
    NegativeWidth(f32),

    #[error("font size must be positive")]
    InvalidFontSize,

    #[error("text must not be empty")]
    EmptyText,

    #[error("color must not be the default (all-zero) color")]
    DefaultColor,

    #[error("a widget named '{0}' already exists")]
    DuplicateWidget(String),

    #[error("no widget named '{0}' exists")]
    MissingWidget(String),

    #[error("widget '{0}' is not a button")]
    NotAButton(String),

    #[error("no window registered with id {0:?}")]
    UnknownWindow(WindowId),
}
