use std::fmt;

use super::{MediaElement, TimeUpdate, TimeUpdateListener};
use crate::error::MediaError;

/// Media element that keeps its state in memory and produces no sound.
///
/// Used where no browser audio element exists. Progress is reported only when
/// the owner calls [`MemoryMedia::advance_to`].
pub struct MemoryMedia {
    volume: f64,
    current_time: f64,
    duration: f64,
    source: String,
    paused: bool,
    listener: Option<TimeUpdateListener>,
}

impl Default for MemoryMedia {
    fn default() -> Self {
        Self {
            volume: 1.0,
            current_time: 0.0,
            duration: f64::NAN,
            source: String::new(),
            paused: true,
            listener: None,
        }
    }
}

impl fmt::Debug for MemoryMedia {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryMedia")
            .field("volume", &self.volume)
            .field("current_time", &self.current_time)
            .field("duration", &self.duration)
            .field("source", &self.source)
            .field("paused", &self.paused)
            .field("subscribed", &self.listener.is_some())
            .finish()
    }
}

impl MemoryMedia {
    pub fn with_duration(duration: f64) -> Self {
        Self {
            duration,
            ..Self::default()
        }
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Stands in for the element learning the stream's length.
    pub fn set_duration(&mut self, duration: f64) {
        self.duration = duration;
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_subscribed(&self) -> bool {
        self.listener.is_some()
    }

    /// Moves the playhead and reports it to the listener.
    pub fn advance_to(&mut self, seconds: f64) {
        self.current_time = seconds;
        self.emit_time_update();
    }

    fn emit_time_update(&mut self) {
        let update = TimeUpdate {
            current_time: self.current_time,
            duration: self.duration,
        };
        if let Some(listener) = self.listener.as_mut() {
            listener(update);
        }
    }
}

impl MediaElement for MemoryMedia {
    fn volume(&self) -> f64 {
        self.volume
    }

    fn set_volume(&mut self, volume: f64) {
        self.volume = volume;
    }

    fn current_time(&self) -> f64 {
        self.current_time
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.current_time = seconds;
    }

    fn play(&mut self) -> Result<(), MediaError> {
        if self.source.is_empty() {
            return Err(MediaError::Rejected("no source loaded".to_string()));
        }
        self.paused = false;
        Ok(())
    }

    fn pause(&mut self) -> Result<(), MediaError> {
        self.paused = true;
        Ok(())
    }

    fn set_source(&mut self, url: &str) {
        self.source = url.to_string();
        self.current_time = 0.0;
        self.duration = f64::NAN;
        self.paused = true;
    }

    fn subscribe(&mut self, listener: TimeUpdateListener) {
        self.listener = Some(listener);
    }
}
