//! Viewport visibility tracking for enter/exit animations.
//!
//! [`VisibilityTracker`] is the browser-independent half of the
//! `use_visibility` hook: the hook feeds it intersection observations and
//! mirrors its output into a signal. Keeping the state machine here means the
//! latch and release rules can be exercised without a DOM.

const DEFAULT_THRESHOLD: f64 = 0.1;
const DEFAULT_ROOT_MARGIN: &str = "0px";

#[derive(Debug, Clone, PartialEq)]
pub struct TrackerOptions {
    /// Fraction of the element that must be on screen, in `[0.0, 1.0]`.
    pub threshold: f64,
    /// CSS margin applied to the viewport before testing, e.g. `"0px 0px -10% 0px"`.
    pub root_margin: String,
    /// Stop observing after the first visible observation and stay visible.
    pub trigger_once: bool,
    /// Drop back to hidden when the element leaves the viewport.
    pub reappear: bool,
}

impl Default for TrackerOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            root_margin: DEFAULT_ROOT_MARGIN.to_string(),
            trigger_once: false,
            reappear: true,
        }
    }
}

impl TrackerOptions {
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = if threshold.is_nan() {
            DEFAULT_THRESHOLD
        } else {
            threshold.clamp(0.0, 1.0)
        };
        self
    }

    pub fn root_margin(mut self, margin: impl Into<String>) -> Self {
        self.root_margin = margin.into();
        self
    }

    pub fn trigger_once(mut self) -> Self {
        self.trigger_once = true;
        self
    }

    pub fn reappear(mut self, reappear: bool) -> Self {
        self.reappear = reappear;
        self
    }

    /// Whether a visible observation is permanent for this configuration.
    fn latches(&self) -> bool {
        self.trigger_once || !self.reappear
    }
}

/// One intersection report for the tracked element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    pub ratio: f64,
    pub intersecting: bool,
}

impl Observation {
    pub fn entered(ratio: f64) -> Self {
        Self {
            ratio,
            intersecting: true,
        }
    }

    pub fn left() -> Self {
        Self {
            ratio: 0.0,
            intersecting: false,
        }
    }
}

/// Outcome of feeding one [`Observation`] to the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reaction {
    pub visible: bool,
    pub changed: bool,
    /// The caller should disconnect its observer now.
    pub release: bool,
}

#[derive(Debug, Clone)]
pub struct VisibilityTracker {
    options: TrackerOptions,
    visible: bool,
    latched: bool,
    subscribed: bool,
}

impl VisibilityTracker {
    pub fn new(options: TrackerOptions) -> Self {
        Self {
            options,
            visible: false,
            latched: false,
            subscribed: true,
        }
    }

    pub fn options(&self) -> &TrackerOptions {
        &self.options
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_latched(&self) -> bool {
        self.latched
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscribed
    }

    fn meets_threshold(&self, obs: Observation) -> bool {
        obs.intersecting && obs.ratio >= self.options.threshold
    }

    pub fn observe(&mut self, obs: Observation) -> Reaction {
        if !self.subscribed || self.latched {
            return Reaction {
                visible: self.visible,
                changed: false,
                release: false,
            };
        }

        let was_visible = self.visible;
        self.visible = self.meets_threshold(obs);

        let mut release = false;
        if self.visible && self.options.latches() {
            self.latched = true;
            if self.options.trigger_once {
                self.subscribed = false;
                release = true;
            }
        }

        Reaction {
            visible: self.visible,
            changed: was_visible != self.visible,
            release,
        }
    }

    /// Drops the subscription; later observations are ignored.
    /// Returns `true` if this call released it.
    pub fn release(&mut self) -> bool {
        std::mem::replace(&mut self.subscribed, false)
    }

    /// Releases the subscription and runs `stop` to tear down whatever
    /// feeds observations in, only if this call did the releasing.
    pub fn release_with(&mut self, stop: impl FnOnce()) -> bool {
        let released = self.release();
        if released {
            stop();
        }
        released
    }
}

/// The two declarative states an animated element moves between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Presence {
    #[default]
    Hidden,
    Visible,
}

impl From<bool> for Presence {
    fn from(visible: bool) -> Self {
        if visible {
            Presence::Visible
        } else {
            Presence::Hidden
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Motion {
    #[default]
    FadeUp,
    FadeDown,
    SlideLeft,
    SlideRight,
    Fade,
}

impl Motion {
    const TRANSITION: &'static str = "transition-all duration-500 ease-out";

    fn hidden(self) -> &'static str {
        match self {
            Motion::FadeUp => "opacity-0 translate-y-8",
            Motion::FadeDown => "opacity-0 -translate-y-5",
            Motion::SlideLeft => "opacity-0 -translate-x-8",
            Motion::SlideRight => "opacity-0 translate-x-8",
            Motion::Fade => "opacity-0",
        }
    }

    fn shown(self) -> &'static str {
        match self {
            Motion::Fade => "opacity-100",
            _ => "opacity-100 translate-x-0 translate-y-0",
        }
    }

    pub fn class(self, presence: Presence) -> String {
        let state = match presence {
            Presence::Hidden => self.hidden(),
            Presence::Visible => self.shown(),
        };
        format!("{} {state}", Self::TRANSITION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visible_sequence(tracker: &mut VisibilityTracker, obs: &[Observation]) -> Vec<bool> {
        obs.iter().map(|o| tracker.observe(*o).visible).collect()
    }

    #[test]
    fn test_starts_hidden() {
        let tracker = VisibilityTracker::new(TrackerOptions::default());
        assert!(!tracker.is_visible());
        assert!(tracker.is_subscribed());
        assert!(!tracker.is_latched());
    }

    #[test]
    fn test_threshold_crossing() {
        let mut tracker = VisibilityTracker::new(TrackerOptions::default().threshold(0.5));

        let below = tracker.observe(Observation::entered(0.49));
        assert!(!below.visible);
        assert!(!below.changed);

        let at = tracker.observe(Observation::entered(0.5));
        assert!(at.visible);
        assert!(at.changed);
        assert!(!at.release);
    }

    #[test]
    fn test_not_intersecting_never_visible() {
        let mut tracker = VisibilityTracker::new(TrackerOptions::default().threshold(0.0));
        let r = tracker.observe(Observation {
            ratio: 0.0,
            intersecting: false,
        });
        assert!(!r.visible);
        let r = tracker.observe(Observation::entered(0.0));
        assert!(r.visible);
    }

    #[test]
    fn test_reappear_toggles() {
        let mut tracker = VisibilityTracker::new(TrackerOptions::default());
        let seq = visible_sequence(
            &mut tracker,
            &[
                Observation::entered(1.0),
                Observation::left(),
                Observation::entered(0.8),
                Observation::left(),
                Observation::entered(0.3),
            ],
        );
        assert_eq!(seq, vec![true, false, true, false, true]);
        assert!(tracker.is_subscribed());
    }

    #[test]
    fn test_no_reappear_latches_on_first_crossing() {
        let mut tracker = VisibilityTracker::new(TrackerOptions::default().reappear(false));

        assert!(!tracker.observe(Observation::entered(0.05)).visible);
        assert!(tracker.observe(Observation::entered(0.2)).visible);
        assert!(tracker.is_latched());

        for obs in [Observation::left(), Observation::entered(0.0), Observation::left()] {
            let r = tracker.observe(obs);
            assert!(r.visible);
            assert!(!r.changed);
        }
        // still observing, only the value is latched
        assert!(tracker.is_subscribed());
    }

    #[test]
    fn test_trigger_once_releases_once() {
        let mut tracker = VisibilityTracker::new(TrackerOptions::default().trigger_once());

        let r = tracker.observe(Observation::left());
        assert!(!r.release);

        let r = tracker.observe(Observation::entered(0.9));
        assert!(r.visible);
        assert!(r.release);
        assert!(!tracker.is_subscribed());

        let r = tracker.observe(Observation::left());
        assert!(r.visible);
        assert!(!r.release);
        assert!(!tracker.release());
    }

    #[test]
    fn test_trigger_once_overrides_reappear() {
        let mut tracker =
            VisibilityTracker::new(TrackerOptions::default().trigger_once().reappear(true));
        tracker.observe(Observation::entered(1.0));
        assert!(tracker.observe(Observation::left()).visible);
    }

    #[test]
    fn test_release_on_unmount() {
        let mut tracker = VisibilityTracker::new(TrackerOptions::default());
        assert!(tracker.release());
        assert!(!tracker.release());

        let r = tracker.observe(Observation::entered(1.0));
        assert!(!r.visible);
        assert!(!r.changed);
    }

    #[test]
    fn test_unmount_stops_observer_once() {
        let mut tracker = VisibilityTracker::new(TrackerOptions::default());
        let mut stops = 0;
        assert!(tracker.release_with(|| stops += 1));
        assert!(!tracker.release_with(|| stops += 1));
        assert_eq!(stops, 1);
        assert!(!tracker.is_subscribed());
    }

    #[test]
    fn test_unmount_after_trigger_once_does_not_stop_again() {
        let mut tracker = VisibilityTracker::new(TrackerOptions::default().trigger_once());
        let r = tracker.observe(Observation::entered(1.0));
        assert!(r.release);

        let mut stops = 0;
        assert!(!tracker.release_with(|| stops += 1));
        assert_eq!(stops, 0);
    }

    #[test]
    fn test_repeated_mounts_release_each() {
        for _ in 0..3 {
            let mut tracker = VisibilityTracker::new(TrackerOptions::default());
            tracker.observe(Observation::entered(1.0));
            assert!(tracker.release());
            assert!(!tracker.is_subscribed());
        }
    }

    #[test]
    fn test_threshold_clamped() {
        assert_eq!(TrackerOptions::default().threshold(1.5).threshold, 1.0);
        assert_eq!(TrackerOptions::default().threshold(-0.2).threshold, 0.0);
        assert_eq!(
            TrackerOptions::default().threshold(f64::NAN).threshold,
            DEFAULT_THRESHOLD
        );
    }

    #[test]
    fn test_defaults() {
        let opts = TrackerOptions::default();
        assert_eq!(opts.threshold, 0.1);
        assert_eq!(opts.root_margin, "0px");
        assert!(!opts.trigger_once);
        assert!(opts.reappear);
    }

    #[test]
    fn test_motion_classes() {
        assert_eq!(Presence::from(false), Presence::Hidden);
        let hidden = Motion::FadeUp.class(Presence::Hidden);
        let shown = Motion::FadeUp.class(Presence::Visible);
        assert!(hidden.contains("opacity-0"));
        assert!(shown.contains("opacity-100"));
        assert!(hidden.starts_with(Motion::TRANSITION));
        assert!(!Motion::Fade.class(Presence::Visible).contains("translate"));
    }
}
