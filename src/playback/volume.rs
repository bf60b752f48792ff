use super::position::clamp_percent;

/// Volume applied when no setting overrides it.
pub const DEFAULT_VOLUME: f64 = 0.35;

/// Volume as a fraction in `[0, 1]`, mirroring the media element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeLevel(f64);

impl VolumeLevel {
    pub fn new(percent: f64) -> Self {
        Self(clamp_percent(percent))
    }

    pub fn percent(self) -> f64 {
        self.0
    }
}

impl Default for VolumeLevel {
    fn default() -> Self {
        Self(DEFAULT_VOLUME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_inside_unit_range() {
        assert_eq!(VolumeLevel::new(1.4).percent(), 1.0);
        assert_eq!(VolumeLevel::new(-0.1).percent(), 0.0);
        assert_eq!(VolumeLevel::new(f64::NAN).percent(), 0.0);
        assert_eq!(VolumeLevel::new(0.7).percent(), 0.7);
        assert_eq!(VolumeLevel::default().percent(), DEFAULT_VOLUME);
    }
}
