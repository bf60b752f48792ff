/// Whether the store wants audio playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayingState {
    Playing,
    #[default]
    Paused,
}

impl PlayingState {
    pub fn is_playing(self) -> bool {
        self == Self::Playing
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Playing => Self::Paused,
            Self::Paused => Self::Playing,
        }
    }

    pub fn control_label(self) -> &'static str {
        match self {
            Self::Playing => "Pause",
            Self::Paused => "Play",
        }
    }
}
