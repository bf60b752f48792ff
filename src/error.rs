use thiserror::Error;

/// Failures reported by a media element backend.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MediaError {
    /// No audio element could be found or created in this environment.
    #[error("no audio element is available")]
    Unavailable,

    /// The element refused a command (play, pause, listener registration).
    #[error("media element rejected the request: {0}")]
    Rejected(String),
}

#[cfg(target_arch = "wasm32")]
impl MediaError {
    pub(crate) fn from_js(value: wasm_bindgen::JsValue) -> Self {
        Self::Rejected(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

/// Failures while reading player settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid player settings: {0}")]
    Parse(#[from] serde_json::Error),
}
