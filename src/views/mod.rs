pub mod community;
pub mod screens;
pub mod tui;
pub mod widgets;

pub use widgets::{ListCursor, TextInput};
