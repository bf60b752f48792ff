//! Playback-position and volume state for the player bar.

mod controller;
mod position;
mod state;
mod volume;

pub use controller::*;
pub use position::*;
pub use state::*;
pub use volume::*;
