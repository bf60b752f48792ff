// Browser `<audio>` backend.
use dioxus::logger::tracing::warn;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, Event, HtmlAudioElement};

use super::{MediaElement, TimeUpdate, TimeUpdateListener};
use crate::error::MediaError;

/// Handle to the shared `<audio>` element.
///
/// The element itself outlives the handle so that remounting the player reuses
/// it; only the time-update listener is tied to the handle's lifetime.
pub struct WebAudioElement {
    audio: HtmlAudioElement,
    on_time_update: Option<Closure<dyn FnMut(Event)>>,
}

impl WebAudioElement {
    /// Finds the element with `element_id`, creating and appending it to the
    /// document body if it does not exist yet.
    pub fn acquire(element_id: &str) -> Result<Self, MediaError> {
        let document = window()
            .and_then(|w| w.document())
            .ok_or(MediaError::Unavailable)?;

        let audio = match document.get_element_by_id(element_id) {
            Some(existing) => existing
                .dyn_into::<HtmlAudioElement>()
                .map_err(|_| MediaError::Unavailable)?,
            None => {
                let audio: HtmlAudioElement = document
                    .create_element("audio")
                    .map_err(MediaError::from_js)?
                    .dyn_into()
                    .map_err(|_| MediaError::Unavailable)?;
                audio.set_id(element_id);
                // Stream instead of buffering whole files.
                audio
                    .set_attribute("preload", "metadata")
                    .map_err(MediaError::from_js)?;
                document
                    .body()
                    .ok_or(MediaError::Unavailable)?
                    .append_child(&audio)
                    .map_err(MediaError::from_js)?;
                audio
            }
        };
        // The controller starts streams itself when the store is playing.
        audio.set_autoplay(false);

        Ok(Self {
            audio,
            on_time_update: None,
        })
    }

    fn detach_listener(&mut self) {
        if let Some(listener) = self.on_time_update.take() {
            let _ = self
                .audio
                .remove_event_listener_with_callback("timeupdate", listener.as_ref().unchecked_ref());
        }
    }
}

impl MediaElement for WebAudioElement {
    fn volume(&self) -> f64 {
        self.audio.volume()
    }

    fn set_volume(&mut self, volume: f64) {
        self.audio.set_volume(volume);
    }

    fn current_time(&self) -> f64 {
        self.audio.current_time()
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.audio.set_current_time(seconds);
    }

    fn play(&mut self) -> Result<(), MediaError> {
        // The returned promise may still reject later (autoplay policy); that
        // outcome is not tracked.
        self.audio.play().map(|_| ()).map_err(MediaError::from_js)
    }

    fn pause(&mut self) -> Result<(), MediaError> {
        self.audio.pause().map_err(MediaError::from_js)
    }

    fn set_source(&mut self, url: &str) {
        if url.is_empty() {
            let _ = self.audio.remove_attribute("src");
            self.audio.load();
        } else {
            self.audio.set_src(url);
        }
    }

    fn subscribe(&mut self, mut listener: TimeUpdateListener) {
        self.detach_listener();

        let audio = self.audio.clone();
        let callback = Closure::wrap(Box::new(move |_event: Event| {
            listener(TimeUpdate {
                current_time: audio.current_time(),
                duration: audio.duration(),
            });
        }) as Box<dyn FnMut(Event)>);

        match self
            .audio
            .add_event_listener_with_callback("timeupdate", callback.as_ref().unchecked_ref())
        {
            Ok(()) => self.on_time_update = Some(callback),
            Err(err) => warn!("{}", MediaError::from_js(err)),
        }
    }
}

impl Drop for WebAudioElement {
    fn drop(&mut self) {
        self.detach_listener();
    }
}
