//! Terminal UI: cursor-driven board view, keyboard handling, paced AI turns,
//! and the sound-effect hook.

mod app;
mod game_view;
mod sound;

pub use app::App;
pub use sound::{SoundKind, SoundPlayer};
