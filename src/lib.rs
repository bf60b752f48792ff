//! Player bar for a Dioxus web music player.
//!
//! The bar renders previous / play-pause / next controls, a seek bar, a volume
//! bar and the current track's metadata. Playback commands go to an injected
//! store and the audio itself is driven through an injected media element.

pub mod components;
pub mod config;
pub mod error;
pub mod media;
pub mod playback;
pub mod store;
