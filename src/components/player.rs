use dioxus::prelude::*;

use crate::components::{
    install_shortcuts, Icon, IconName, PlayTime, ProgressBar, NEXT_BUTTON_ID,
    PLAY_PAUSE_BUTTON_ID, PREV_BUTTON_ID,
};
use crate::config::PlayerSettings;
use crate::media::{acquire_platform_media, TimeUpdate};
use crate::playback::PlaybackController;
use crate::store::AppStore;

/// Bottom player bar: transport controls, cover, track info, seek bar, play
/// time and volume.
#[component]
pub fn Player() -> Element {
    let settings = use_context::<PlayerSettings>();
    let mut store = use_context::<AppStore>();

    let mut controller = use_signal(|| {
        PlaybackController::mount(acquire_platform_media(&settings), &settings)
    });

    // One-time setup: route element progress into the controller.
    use_effect(move || {
        let mut target = controller;
        controller
            .write()
            .media_mut()
            .subscribe(Box::new(move |update: TimeUpdate| {
                target.write().on_time_update(update);
            }));
        install_shortcuts();
    });

    // Reload the element whenever the store moves to another track.
    use_effect(move || {
        let snapshot = store.snapshot();
        controller.write().sync_track(&snapshot);
    });

    let snapshot = store.snapshot();
    let view = controller.read().view(&snapshot);
    let requested = view.playing.toggled();

    let on_play_pause = move |_| {
        controller
            .write()
            .request_play_pause(requested, &mut store);
    };
    let on_prev = move |_| controller.peek().request_prev(&mut store);
    let on_next = move |_| controller.peek().request_next(&mut store);

    rsx! {
        div { class: "player-bar",
            div { class: "player-bar__left",
                div { class: "player-bar__controls",
                    button {
                        id: PREV_BUTTON_ID,
                        r#type: "button",
                        class: "player-bar__button",
                        aria_label: "Previous track",
                        onclick: on_prev,
                        Icon { name: IconName::Previous }
                    }
                    button {
                        id: PLAY_PAUSE_BUTTON_ID,
                        r#type: "button",
                        class: "player-bar__button player-bar__button--primary",
                        aria_label: view.playing.control_label(),
                        onclick: on_play_pause,
                        Icon { name: IconName::from(view.playing) }
                    }
                    button {
                        id: NEXT_BUTTON_ID,
                        r#type: "button",
                        class: "player-bar__button",
                        aria_label: "Next track",
                        onclick: on_next,
                        Icon { name: IconName::Next }
                    }
                }
                div { class: "player-bar__cover",
                    if view.album_image_url.is_empty() {
                        div { class: "player-bar__cover-placeholder",
                            Icon { name: IconName::Music, class: "w-6 h-6".to_string() }
                        }
                    } else {
                        img { src: "{view.album_image_url}", alt: "" }
                    }
                }
            }
            div { class: "player-bar__middle",
                div { class: "player-bar__info",
                    p { class: "player-bar__track-name", "{view.track_name}" }
                    p { class: "player-bar__artist", "{view.artist_name}" }
                }
                ProgressBar {
                    percent: view.percent,
                    label: "Seek".to_string(),
                    class: "progress-bar--seek".to_string(),
                    on_change: move |percent: f64| controller.write().on_seek_drag(percent),
                    on_change_end: move |percent: f64| controller.write().on_seek_drag_end(percent),
                }
            }
            div { class: "player-bar__right",
                PlayTime { current_time: view.current_time, duration: view.duration }
                div { class: "player-bar__volume",
                    Icon { name: IconName::Volume }
                    ProgressBar {
                        percent: view.volume,
                        label: "Volume".to_string(),
                        class: "progress-bar--volume".to_string(),
                        on_change: move |percent: f64| controller.write().on_volume_drag(percent),
                        on_change_end: move |percent: f64| controller.write().on_volume_drag_end(percent),
                    }
                }
            }
        }
    }
}
