use dioxus::prelude::*;

use crate::playback::PlayingState;

/// Icons used by the player bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconName {
    Play,
    Pause,
    Previous,
    Next,
    Volume,
    Music,
}

impl From<PlayingState> for IconName {
    /// Icon on the play/pause button: the action it will request.
    fn from(state: PlayingState) -> Self {
        match state {
            PlayingState::Playing => Self::Pause,
            PlayingState::Paused => Self::Play,
        }
    }
}

#[component]
pub fn Icon(name: IconName, #[props(default = "w-5 h-5".to_string())] class: String) -> Element {
    match name {
        IconName::Play => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "currentColor",
                polygon { points: "5 3 19 12 5 21 5 3" }
            }
        },
        IconName::Pause => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "currentColor",
                rect {
                    x: "6",
                    y: "4",
                    width: "4",
                    height: "16",
                }
                rect {
                    x: "14",
                    y: "4",
                    width: "4",
                    height: "16",
                }
            }
        },
        IconName::Previous => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "currentColor",
                polygon { points: "19 20 9 12 19 4 19 20" }
                line {
                    x1: "5",
                    y1: "19",
                    x2: "5",
                    y2: "5",
                    stroke: "currentColor",
                    stroke_width: "2",
                }
            }
        },
        IconName::Next => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "currentColor",
                polygon { points: "5 4 15 12 5 20 5 4" }
                line {
                    x1: "19",
                    y1: "5",
                    x2: "19",
                    y2: "19",
                    stroke: "currentColor",
                    stroke_width: "2",
                }
            }
        },
        IconName::Volume => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                polygon { points: "11 5 6 9 2 9 2 15 6 15 11 19 11 5" }
                path { d: "M15.54 8.46a5 5 0 0 1 0 7.07" }
                path { d: "M19.07 4.93a10 10 0 0 1 0 14.14" }
            }
        },
        IconName::Music => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                path { d: "M9 18V5l12-2v13" }
                circle { cx: "6", cy: "18", r: "3" }
                circle { cx: "18", cy: "16", r: "3" }
            }
        },
    }
}
