use crate::media::TimeUpdate;

/// Bars resolve positions to thousandths.
pub const PERCENT_RESOLUTION: f64 = 1000.0;

/// Played fraction truncated to three decimals.
///
/// Returns `0` whenever the division does not produce a finite number, which
/// covers a zero, NaN or infinite duration.
pub fn played_fraction(current_time: f64, duration: f64) -> f64 {
    let percent = (current_time / duration * PERCENT_RESOLUTION).floor() / PERCENT_RESOLUTION;
    if percent.is_finite() {
        percent
    } else {
        0.0
    }
}

pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Clamps a bar value into `[0, 1]`; NaN becomes `0`.
pub fn clamp_percent(percent: f64) -> f64 {
    if percent.is_nan() {
        0.0
    } else {
        percent.clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging,
}

/// Seek bar state.
///
/// While `drag` is `Dragging`, `percent` follows the user's gesture and
/// `current_time` is stale until the drag ends.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlaybackPosition {
    pub current_time: f64,
    pub duration: f64,
    pub percent: f64,
    pub drag: DragState,
}

impl PlaybackPosition {
    pub fn is_dragging(&self) -> bool {
        self.drag == DragState::Dragging
    }

    /// Applies a progress report from the media element. Returns `false` when
    /// the report was dropped because a drag is in progress.
    pub fn apply_time_update(&mut self, update: TimeUpdate) -> bool {
        if self.is_dragging() {
            return false;
        }
        self.current_time = finite_or_zero(update.current_time);
        self.duration = finite_or_zero(update.duration);
        self.percent = played_fraction(self.current_time, self.duration);
        true
    }

    pub fn drag_to(&mut self, percent: f64) {
        self.drag = DragState::Dragging;
        self.percent = clamp_percent(percent);
    }

    /// Ends a drag at `percent` and returns the time to seek to.
    pub fn finish_drag(&mut self, percent: f64) -> f64 {
        let percent = clamp_percent(percent);
        self.drag = DragState::Idle;
        self.current_time = self.duration * percent;
        self.percent = if self.duration > 0.0 { percent } else { 0.0 };
        self.current_time
    }
}
