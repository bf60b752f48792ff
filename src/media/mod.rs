//! Media-element abstraction the player bar drives.

mod memory;
#[cfg(target_arch = "wasm32")]
mod web;

pub use memory::MemoryMedia;
#[cfg(target_arch = "wasm32")]
pub use web::WebAudioElement;

#[cfg(target_arch = "wasm32")]
use dioxus::logger::tracing::warn;

use crate::config::PlayerSettings;
use crate::error::MediaError;

/// Progress report emitted by a media element. `duration` may be NaN before
/// metadata has loaded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeUpdate {
    pub current_time: f64,
    pub duration: f64,
}

pub type TimeUpdateListener = Box<dyn FnMut(TimeUpdate)>;

/// An audio output the player can command.
///
/// Dropping the element releases its time-update listener.
pub trait MediaElement {
    fn volume(&self) -> f64;
    fn set_volume(&mut self, volume: f64);
    fn current_time(&self) -> f64;
    fn set_current_time(&mut self, seconds: f64);
    fn play(&mut self) -> Result<(), MediaError>;
    fn pause(&mut self) -> Result<(), MediaError>;
    /// Points the element at a new stream; an empty URL unloads it.
    fn set_source(&mut self, url: &str);
    /// Replaces the current time-update listener.
    fn subscribe(&mut self, listener: TimeUpdateListener);
}

impl<T: MediaElement + ?Sized> MediaElement for Box<T> {
    fn volume(&self) -> f64 {
        (**self).volume()
    }

    fn set_volume(&mut self, volume: f64) {
        (**self).set_volume(volume);
    }

    fn current_time(&self) -> f64 {
        (**self).current_time()
    }

    fn set_current_time(&mut self, seconds: f64) {
        (**self).set_current_time(seconds);
    }

    fn play(&mut self) -> Result<(), MediaError> {
        (**self).play()
    }

    fn pause(&mut self) -> Result<(), MediaError> {
        (**self).pause()
    }

    fn set_source(&mut self, url: &str) {
        (**self).set_source(url);
    }

    fn subscribe(&mut self, listener: TimeUpdateListener) {
        (**self).subscribe(listener);
    }
}

/// Acquires the browser `<audio>` element, or a silent in-memory element when
/// none is available.
#[cfg(target_arch = "wasm32")]
pub fn acquire_platform_media(settings: &PlayerSettings) -> Box<dyn MediaElement> {
    match WebAudioElement::acquire(&settings.audio_element_id) {
        Ok(audio) => Box::new(audio),
        Err(err) => {
            warn!("{err}; player bar falls back to silent playback");
            Box::new(MemoryMedia::default())
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn acquire_platform_media(_settings: &PlayerSettings) -> Box<dyn MediaElement> {
    Box::new(MemoryMedia::default())
}
