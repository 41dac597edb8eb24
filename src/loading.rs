use std::time::Duration;

pub const START_DELAY: Duration = Duration::from_millis(500);
pub const TICK: Duration = Duration::from_millis(30);
pub const STEP: u8 = 2;
pub const HOLD: Duration = Duration::from_millis(500);
pub const EXIT: Duration = Duration::from_millis(800);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadingProgress {
    percent: u8,
}

impl LoadingProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn percent(&self) -> u8 {
        self.percent
    }

    pub fn is_complete(&self) -> bool {
        self.percent >= 100
    }

    /// Advances one step; returns `true` once progress has reached 100.
    pub fn tick(&mut self) -> bool {
        self.percent = self.percent.saturating_add(STEP).min(100);
        self.is_complete()
    }

    pub fn label(&self) -> &'static str {
        if self.is_complete() {
            "Ready!"
        } else {
            "Loading portfolio..."
        }
    }

    pub fn width_style(&self) -> String {
        format!("width: {}%", self.percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifty_ticks_to_complete() {
        let mut p = LoadingProgress::new();
        assert_eq!(p.label(), "Loading portfolio...");
        let ticks = std::iter::repeat_with(|| p.tick())
            .take_while(|done| !done)
            .count();
        assert_eq!(ticks, 49);
        assert!(p.is_complete());
        assert_eq!(p.label(), "Ready!");
    }

    #[test]
    fn test_caps_at_hundred() {
        let mut p = LoadingProgress { percent: 99 };
        assert!(p.tick());
        assert!(p.tick());
        assert_eq!(p.percent(), 100);
        assert_eq!(p.width_style(), "width: 100%");
    }
}
