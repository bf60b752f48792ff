//! The components module contains the player bar and the widgets it composes.

mod icons;
mod play_time;
mod player;
mod progress_bar;
mod shortcuts;

pub use icons::*;
pub use play_time::*;
pub use player::*;
pub use progress_bar::*;
pub use shortcuts::*;
