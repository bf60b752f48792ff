use dioxus::prelude::*;

/// Formats seconds as `m:ss`. Negative or non-finite input renders `0:00`.
pub fn format_time(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    format!("{}:{:02}", total / 60, total % 60)
}

#[component]
pub fn PlayTime(current_time: f64, duration: f64) -> Element {
    let elapsed = format_time(current_time);
    let total = format_time(duration);

    rsx! {
        div { class: "play-time",
            span { class: "play-time__elapsed", "{elapsed}" }
            span { class: "play-time__separator", " / " }
            span { class: "play-time__total", "{total}" }
        }
    }
}
