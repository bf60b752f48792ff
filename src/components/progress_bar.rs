use dioxus::prelude::*;

use crate::playback::{clamp_percent, PERCENT_RESOLUTION};

/// Converts a raw range-input value (`0..=1000`) to a fraction.
pub fn parse_percent(raw: &str) -> Option<f64> {
    let value = raw.trim().parse::<f64>().ok()?;
    if !value.is_finite() {
        return None;
    }
    Some((value / PERCENT_RESOLUTION).clamp(0.0, 1.0))
}

/// Draggable percentage bar shared by the seek and volume controls.
///
/// `on_change` fires continuously while the thumb moves and `on_change_end`
/// once it is released.
#[component]
pub fn ProgressBar(
    percent: f64,
    on_change: EventHandler<f64>,
    on_change_end: EventHandler<f64>,
    #[props(default)] class: String,
    #[props(default)] label: String,
) -> Element {
    let percent = clamp_percent(percent);
    let value = (percent * PERCENT_RESOLUTION).round() as i32;
    let fill = format!("{:.1}%", percent * 100.0);

    rsx! {
        input {
            r#type: "range",
            min: "0",
            max: "1000",
            step: "1",
            value: "{value}",
            aria_label: "{label}",
            class: "progress-bar {class}",
            style: "--progress-fill: {fill}",
            oninput: move |e: Event<FormData>| {
                if let Some(percent) = parse_percent(&e.value()) {
                    on_change.call(percent);
                }
            },
            onchange: move |e: Event<FormData>| {
                if let Some(percent) = parse_percent(&e.value()) {
                    on_change_end.call(percent);
                }
            },
        }
    }
}
