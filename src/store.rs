//! Command/snapshot boundary between the player bar and the application store.

use dioxus::logger::tracing::debug;
use dioxus::prelude::*;
use serde::Deserialize;

use crate::playback::PlayingState;

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct Artist {
    #[serde(default)]
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct Track {
    pub id: String,
    #[serde(default, alias = "streamUrl")]
    pub stream_url: String,
    #[serde(default, alias = "albumImageUrl")]
    pub album_image_url: String,
    #[serde(default, alias = "trackName")]
    pub name: String,
    #[serde(default)]
    pub artists: Vec<Artist>,
}

impl Track {
    /// Name of the first credited artist, or an empty string.
    pub fn primary_artist(&self) -> &str {
        self.artists
            .first()
            .map(|artist| artist.name.as_str())
            .unwrap_or_default()
    }
}

/// Commands the player bar can submit to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreCommand {
    SetPlayingStatus(PlayingState),
    AdvanceToPreviousTrack,
    AdvanceToNextTrack,
}

/// Read-only projection of the store consumed by the player bar.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StoreSnapshot {
    pub current_track: Option<Track>,
    pub playing: PlayingState,
}

pub trait Dispatch {
    fn dispatch(&mut self, command: StoreCommand);
}

/// State behind the app-shell store.
///
/// Previous/next only step through `tracks` without wrapping; ordering
/// policies (shuffle, repeat) belong to whatever real store replaces this one.
/// With `autoplay` on, moving to another track also marks the store playing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StoreState {
    pub tracks: Vec<Track>,
    pub index: Option<usize>,
    pub playing: PlayingState,
    pub autoplay: bool,
}

impl StoreState {
    /// Starts paused on the first track, whatever `autoplay` says.
    pub fn new(tracks: Vec<Track>, autoplay: bool) -> Self {
        let index = if tracks.is_empty() { None } else { Some(0) };
        Self {
            tracks,
            index,
            playing: PlayingState::Paused,
            autoplay,
        }
    }

    pub fn reduce(&mut self, command: StoreCommand) {
        match command {
            StoreCommand::SetPlayingStatus(state) => self.playing = state,
            StoreCommand::AdvanceToPreviousTrack => {
                if let Some(idx) = self.index {
                    if idx > 0 {
                        self.move_to(idx - 1);
                    }
                }
            }
            StoreCommand::AdvanceToNextTrack => {
                if let Some(idx) = self.index {
                    if idx + 1 < self.tracks.len() {
                        self.move_to(idx + 1);
                    }
                }
            }
        }
    }

    fn move_to(&mut self, idx: usize) {
        self.index = Some(idx);
        if self.autoplay {
            self.playing = PlayingState::Playing;
        }
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            current_track: self.index.and_then(|idx| self.tracks.get(idx)).cloned(),
            playing: self.playing,
        }
    }
}

impl Dispatch for StoreState {
    fn dispatch(&mut self, command: StoreCommand) {
        self.reduce(command);
    }
}

/// Signal-backed store shared through Dioxus context.
#[derive(Clone, Copy, PartialEq)]
pub struct AppStore {
    state: Signal<StoreState>,
}

impl AppStore {
    /// Must be called inside a component scope, usually from
    /// `use_context_provider`.
    pub fn new(tracks: Vec<Track>, autoplay: bool) -> Self {
        Self {
            state: Signal::new(StoreState::new(tracks, autoplay)),
        }
    }

    /// Reading the snapshot subscribes the calling scope to store changes.
    pub fn snapshot(&self) -> StoreSnapshot {
        self.state.read().snapshot()
    }
}

impl Dispatch for AppStore {
    fn dispatch(&mut self, command: StoreCommand) {
        debug!(?command, "store command");
        self.state.write().reduce(command);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(id: &str) -> Track {
        Track {
            id: id.to_string(),
            stream_url: format!("https://cdn.example/{id}.mp3"),
            name: format!("Track {id}"),
            ..Track::default()
        }
    }

    #[test]
    fn empty_store_has_no_current_track() {
        let mut state = StoreState::new(Vec::new(), true);
        state.reduce(StoreCommand::AdvanceToNextTrack);
        state.reduce(StoreCommand::AdvanceToPreviousTrack);
        let snapshot = state.snapshot();
        assert_eq!(snapshot.current_track, None);
        assert_eq!(snapshot.playing, PlayingState::Paused);
    }

    #[test]
    fn next_and_previous_step_without_wrapping() {
        let mut state = StoreState::new(vec![track("a"), track("b")], false);
        assert_eq!(state.snapshot().current_track.unwrap().id, "a");

        state.reduce(StoreCommand::AdvanceToPreviousTrack);
        assert_eq!(state.index, Some(0));

        state.reduce(StoreCommand::AdvanceToNextTrack);
        state.reduce(StoreCommand::AdvanceToNextTrack);
        assert_eq!(state.index, Some(1));
        assert_eq!(state.snapshot().current_track.unwrap().id, "b");

        state.reduce(StoreCommand::AdvanceToPreviousTrack);
        assert_eq!(state.index, Some(0));
    }

    #[test]
    fn playing_status_is_stored() {
        let mut state = StoreState::new(vec![track("a")], false);
        state.reduce(StoreCommand::SetPlayingStatus(PlayingState::Playing));
        assert_eq!(state.snapshot().playing, PlayingState::Playing);
        state.reduce(StoreCommand::SetPlayingStatus(PlayingState::Paused));
        assert_eq!(state.snapshot().playing, PlayingState::Paused);
    }

    #[test]
    fn autoplay_marks_store_playing_on_track_change() {
        let mut state = StoreState::new(vec![track("a"), track("b")], true);
        assert_eq!(state.snapshot().playing, PlayingState::Paused);

        state.reduce(StoreCommand::AdvanceToPreviousTrack);
        assert_eq!(state.snapshot().playing, PlayingState::Paused);

        state.reduce(StoreCommand::AdvanceToNextTrack);
        assert_eq!(state.index, Some(1));
        assert_eq!(state.snapshot().playing, PlayingState::Playing);
    }

    #[test]
    fn without_autoplay_track_change_keeps_playing_status() {
        let mut state = StoreState::new(vec![track("a"), track("b")], false);
        state.reduce(StoreCommand::AdvanceToNextTrack);
        assert_eq!(state.snapshot().playing, PlayingState::Paused);

        state.reduce(StoreCommand::SetPlayingStatus(PlayingState::Playing));
        state.reduce(StoreCommand::AdvanceToPreviousTrack);
        assert_eq!(state.snapshot().playing, PlayingState::Playing);
    }

    #[test]
    fn primary_artist_falls_back_to_empty() {
        let mut solo = track("a");
        assert_eq!(solo.primary_artist(), "");
        solo.artists = vec![
            Artist {
                id: "1".to_string(),
                name: "First".to_string(),
            },
            Artist {
                id: "2".to_string(),
                name: "Second".to_string(),
            },
        ];
        assert_eq!(solo.primary_artist(), "First");
    }
}
