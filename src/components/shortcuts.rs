// Keyboard and media-key shortcuts for the player buttons.
#[cfg(target_arch = "wasm32")]
use std::cell::Cell;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};
#[cfg(target_arch = "wasm32")]
use web_sys::{window, HtmlElement, KeyboardEvent};

pub const PREV_BUTTON_ID: &str = "prev-btn";
pub const PLAY_PAUSE_BUTTON_ID: &str = "play-pause-btn";
pub const NEXT_BUTTON_ID: &str = "next-btn";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    TogglePlay,
    Previous,
    Next,
}

/// The parts of a keydown event the shortcut mapping looks at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyInput {
    pub key: String,
    pub code: String,
    pub key_code: u32,
    pub meta: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl Shortcut {
    pub fn from_key(input: &KeyInput) -> Option<Self> {
        let key = input.key.as_str();
        let code = input.code.as_str();

        if matches!(
            key,
            "MediaTrackNext" | "MediaNextTrack" | "AudioTrackNext" | "AudioNext" | "NextTrack"
        ) || code == "MediaTrackNext"
            || input.key_code == 176
        {
            return Some(Self::Next);
        }
        if matches!(
            key,
            "MediaTrackPrevious"
                | "MediaPreviousTrack"
                | "AudioTrackPrevious"
                | "AudioPrev"
                | "PreviousTrack"
        ) || code == "MediaTrackPrevious"
            || input.key_code == 177
        {
            return Some(Self::Previous);
        }
        if matches!(key, "MediaPlayPause" | "AudioPlay" | "AudioPause")
            || code == "MediaPlayPause"
            || input.key_code == 179
        {
            return Some(Self::TogglePlay);
        }

        if (input.meta || input.ctrl) && !input.alt && !input.shift {
            match key {
                "ArrowRight" => return Some(Self::Next),
                "ArrowLeft" => return Some(Self::Previous),
                _ => {}
            }
        }

        let bare = !input.meta && !input.ctrl && !input.alt;
        if bare && (key == " " || key == "Spacebar" || code == "Space") {
            return Some(Self::TogglePlay);
        }

        None
    }

    /// Id of the player button this shortcut clicks.
    pub fn button_id(self) -> &'static str {
        match self {
            Self::TogglePlay => PLAY_PAUSE_BUTTON_ID,
            Self::Previous => PREV_BUTTON_ID,
            Self::Next => NEXT_BUTTON_ID,
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn is_editable_target(event: &KeyboardEvent) -> bool {
    let Some(target) = event.target() else {
        return false;
    };

    let mut current = target.dyn_into::<web_sys::Element>().ok();
    while let Some(element) = current {
        let tag = element.tag_name().to_ascii_lowercase();
        if tag == "input" || tag == "textarea" || tag == "select" {
            return true;
        }
        if element
            .get_attribute("contenteditable")
            .is_some_and(|value| !value.eq_ignore_ascii_case("false"))
        {
            return true;
        }
        current = element.parent_element();
    }

    false
}

#[cfg(target_arch = "wasm32")]
fn click_button(id: &str) {
    if let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(id))
    {
        if let Ok(button) = element.dyn_into::<HtmlElement>() {
            button.click();
        }
    }
}

/// Installs a document-level keydown listener once per page.
#[cfg(target_arch = "wasm32")]
pub fn install_shortcuts() {
    thread_local! {
        static INSTALLED: Cell<bool> = const { Cell::new(false) };
    }
    if INSTALLED.with(|installed| installed.replace(true)) {
        return;
    }
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };

    let on_keydown = Closure::wrap(Box::new(move |event: KeyboardEvent| {
        if event.default_prevented() || event.is_composing() || is_editable_target(&event) {
            return;
        }
        let input = KeyInput {
            key: event.key(),
            code: event.code(),
            key_code: event.key_code(),
            meta: event.meta_key(),
            ctrl: event.ctrl_key(),
            alt: event.alt_key(),
            shift: event.shift_key(),
        };
        if let Some(shortcut) = Shortcut::from_key(&input) {
            event.prevent_default();
            click_button(shortcut.button_id());
        }
    }) as Box<dyn FnMut(KeyboardEvent)>);

    let _ = document
        .add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
    // Lives for the rest of the page.
    on_keydown.forget();
}

#[cfg(not(target_arch = "wasm32"))]
pub fn install_shortcuts() {}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(key: &str) -> KeyInput {
        KeyInput {
            key: key.to_string(),
            ..KeyInput::default()
        }
    }

    #[test]
    fn media_keys_map_to_buttons() {
        assert_eq!(Shortcut::from_key(&key("MediaTrackNext")), Some(Shortcut::Next));
        assert_eq!(
            Shortcut::from_key(&key("MediaTrackPrevious")),
            Some(Shortcut::Previous)
        );
        assert_eq!(
            Shortcut::from_key(&key("MediaPlayPause")),
            Some(Shortcut::TogglePlay)
        );
        let legacy = KeyInput {
            key_code: 179,
            ..KeyInput::default()
        };
        assert_eq!(Shortcut::from_key(&legacy), Some(Shortcut::TogglePlay));
    }

    #[test]
    fn space_toggles_only_without_modifiers() {
        assert_eq!(Shortcut::from_key(&key(" ")), Some(Shortcut::TogglePlay));
        let with_ctrl = KeyInput {
            ctrl: true,
            ..key(" ")
        };
        assert_eq!(Shortcut::from_key(&with_ctrl), None);
    }

    #[test]
    fn modified_arrows_skip_tracks() {
        let next = KeyInput {
            ctrl: true,
            ..key("ArrowRight")
        };
        let prev = KeyInput {
            meta: true,
            ..key("ArrowLeft")
        };
        assert_eq!(Shortcut::from_key(&next), Some(Shortcut::Next));
        assert_eq!(Shortcut::from_key(&prev), Some(Shortcut::Previous));
        assert_eq!(Shortcut::from_key(&key("ArrowRight")), None);
        let shifted = KeyInput {
            shift: true,
            ..next
        };
        assert_eq!(Shortcut::from_key(&shifted), None);
    }

    #[test]
    fn shortcuts_target_player_buttons() {
        assert_eq!(Shortcut::TogglePlay.button_id(), "play-pause-btn");
        assert_eq!(Shortcut::Previous.button_id(), "prev-btn");
        assert_eq!(Shortcut::Next.button_id(), "next-btn");
        assert_eq!(Shortcut::from_key(&key("a")), None);
    }
}
