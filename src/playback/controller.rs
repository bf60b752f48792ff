use dioxus::logger::tracing::{debug, warn};

use super::{clamp_percent, finite_or_zero, PlaybackPosition, PlayingState, VolumeLevel};
use crate::config::PlayerSettings;
use crate::media::{MediaElement, TimeUpdate};
use crate::store::{Dispatch, StoreCommand, StoreSnapshot, Track};

/// Everything the player bar renders for one frame.
///
/// Text fields are empty and numbers are `0` when there is nothing to show.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerView {
    pub album_image_url: String,
    pub track_name: String,
    pub artist_name: String,
    pub playing: PlayingState,
    pub current_time: f64,
    pub duration: f64,
    pub percent: f64,
    pub volume: f64,
}

/// Mediates between a media element, the seek/volume bars and the store.
pub struct PlaybackController<M: MediaElement> {
    media: M,
    position: PlaybackPosition,
    volume: VolumeLevel,
    source: String,
}

impl<M: MediaElement> PlaybackController<M> {
    /// Takes ownership of `media` and pushes the configured volume to it.
    pub fn mount(mut media: M, settings: &PlayerSettings) -> Self {
        let volume = VolumeLevel::new(settings.default_volume);
        media.set_volume(volume.percent());
        Self {
            media,
            position: PlaybackPosition::default(),
            volume,
            source: String::new(),
        }
    }

    pub fn position(&self) -> &PlaybackPosition {
        &self.position
    }

    pub fn volume(&self) -> VolumeLevel {
        self.volume
    }

    pub fn media(&self) -> &M {
        &self.media
    }

    pub fn media_mut(&mut self) -> &mut M {
        &mut self.media
    }

    pub fn on_time_update(&mut self, update: TimeUpdate) {
        self.position.apply_time_update(update);
    }

    /// Live seek drag: only the bar moves, the element keeps playing.
    pub fn on_seek_drag(&mut self, percent: f64) {
        self.position.drag_to(percent);
    }

    pub fn on_seek_drag_end(&mut self, percent: f64) {
        let target = self.position.finish_drag(percent);
        self.media.set_current_time(target);
    }

    pub fn on_volume_drag(&mut self, percent: f64) {
        self.commit_volume(percent);
    }

    pub fn on_volume_drag_end(&mut self, percent: f64) {
        self.commit_volume(percent);
    }

    fn commit_volume(&mut self, percent: f64) {
        self.volume = VolumeLevel::new(percent);
        self.media.set_volume(self.volume.percent());
    }

    /// Asks the store for `next`, then commands the element.
    ///
    /// The store is updated first and is not rolled back if the element
    /// rejects the command, so the button can show "playing" over silence.
    pub fn request_play_pause<D: Dispatch + ?Sized>(&mut self, next: PlayingState, store: &mut D) {
        store.dispatch(StoreCommand::SetPlayingStatus(next));
        let result = match next {
            PlayingState::Playing => self.media.play(),
            PlayingState::Paused => self.media.pause(),
        };
        if let Err(err) = result {
            warn!(?next, "media element did not follow play state: {err}");
        }
    }

    pub fn request_prev<D: Dispatch + ?Sized>(&self, store: &mut D) {
        store.dispatch(StoreCommand::AdvanceToPreviousTrack);
    }

    pub fn request_next<D: Dispatch + ?Sized>(&self, store: &mut D) {
        store.dispatch(StoreCommand::AdvanceToNextTrack);
    }

    /// Points the element at `track`'s stream. Returns `false` when that
    /// stream is already loaded.
    pub fn load_track(&mut self, track: Option<&Track>) -> bool {
        let url = track.map(|t| t.stream_url.as_str()).unwrap_or_default();
        if url == self.source {
            return false;
        }
        debug!(url, "loading stream");
        self.source = url.to_string();
        self.media.set_source(url);
        true
    }

    /// Follows the store onto its current track. A newly loaded stream is
    /// started when the store wants audio playing; the element never decides
    /// that by itself. Returns `false` when the stream was already loaded.
    pub fn sync_track(&mut self, snapshot: &StoreSnapshot) -> bool {
        let track = snapshot.current_track.as_ref();
        if !self.load_track(track) {
            return false;
        }
        if track.is_some() && snapshot.playing.is_playing() {
            if let Err(err) = self.media.play() {
                warn!("new stream did not start: {err}");
            }
        }
        true
    }

    pub fn view(&self, snapshot: &StoreSnapshot) -> PlayerView {
        let track = snapshot.current_track.as_ref();
        PlayerView {
            album_image_url: track.map(|t| t.album_image_url.clone()).unwrap_or_default(),
            track_name: track.map(|t| t.name.clone()).unwrap_or_default(),
            artist_name: track
                .map(|t| t.primary_artist().to_string())
                .unwrap_or_default(),
            playing: snapshot.playing,
            current_time: finite_or_zero(self.position.current_time),
            duration: finite_or_zero(self.position.duration),
            percent: clamp_percent(self.position.percent),
            volume: self.volume.percent(),
        }
    }
}
