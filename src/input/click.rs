// SPDX-License-Identifier: MPL-2.0
//! Counted-click policy for thumbnail presses.
//!
//! The platform toolkit does not expose a double-click notion for arbitrary
//! widgets, so the detection window is an explicit, configurable policy at
//! the input boundary. The classifier mirrors event-detail counting: the
//! second press on the same target within the window is a double click, a
//! third rapid press counts as a fresh single click.

use crate::app::config::{
    DEFAULT_DOUBLE_CLICK_WINDOW_MS, MAX_DOUBLE_CLICK_WINDOW_MS, MIN_DOUBLE_CLICK_WINDOW_MS,
};
use std::time::{Duration, Instant};

/// Double-click detection window in milliseconds.
///
/// This newtype enforces validity at the type level, clamping the value into
/// the supported range so persisted configs cannot request nonsensical
/// windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoubleClickWindow(u64);

impl DoubleClickWindow {
    /// Creates a new window value, clamping to the valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_DOUBLE_CLICK_WINDOW_MS, MAX_DOUBLE_CLICK_WINDOW_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    /// Returns the window as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for DoubleClickWindow {
    fn default() -> Self {
        Self(DEFAULT_DOUBLE_CLICK_WINDOW_MS)
    }
}

/// Identifies the thumbnail a press landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClickTarget {
    pub gallery: usize,
    pub thumbnail: usize,
}

/// Classification of a single press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickKind {
    Single,
    Double,
}

#[derive(Debug, Clone, Copy)]
struct LastClick {
    target: ClickTarget,
    at: Instant,
    count: u32,
}

/// Stateful press classifier.
///
/// Time is passed in explicitly so the policy stays deterministic under
/// test; callers hand in `Instant::now()`.
#[derive(Debug, Clone, Default)]
pub struct ClickClassifier {
    window: DoubleClickWindow,
    last: Option<LastClick>,
}

impl ClickClassifier {
    #[must_use]
    pub fn new(window: DoubleClickWindow) -> Self {
        Self { window, last: None }
    }

    /// Classifies a press on `target` at time `now`.
    ///
    /// Consecutive presses on the same target within the window increment
    /// the press count; the classification is `Double` exactly when the
    /// count reaches two. A different target or an expired window restarts
    /// the count.
    pub fn classify(&mut self, target: ClickTarget, now: Instant) -> ClickKind {
        let count = match &self.last {
            Some(last)
                if last.target == target
                    && now.duration_since(last.at) <= self.window.as_duration() =>
            {
                last.count + 1
            }
            _ => 1,
        };

        self.last = Some(LastClick { target, at: now, count });

        if count == 2 {
            ClickKind::Double
        } else {
            ClickKind::Single
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(gallery: usize, thumbnail: usize) -> ClickTarget {
        ClickTarget { gallery, thumbnail }
    }

    #[test]
    fn window_clamps_to_valid_range() {
        assert_eq!(
            DoubleClickWindow::new(0).value(),
            MIN_DOUBLE_CLICK_WINDOW_MS
        );
        assert_eq!(
            DoubleClickWindow::new(10_000).value(),
            MAX_DOUBLE_CLICK_WINDOW_MS
        );
        assert_eq!(DoubleClickWindow::new(250).value(), 250);
    }

    #[test]
    fn window_default_matches_config_default() {
        assert_eq!(
            DoubleClickWindow::default().value(),
            DEFAULT_DOUBLE_CLICK_WINDOW_MS
        );
    }

    #[test]
    fn first_press_is_single() {
        let mut clicks = ClickClassifier::default();
        assert_eq!(clicks.classify(target(0, 0), Instant::now()), ClickKind::Single);
    }

    #[test]
    fn second_press_within_window_is_double() {
        let mut clicks = ClickClassifier::default();
        let now = Instant::now();

        assert_eq!(clicks.classify(target(0, 1), now), ClickKind::Single);
        assert_eq!(
            clicks.classify(target(0, 1), now + Duration::from_millis(100)),
            ClickKind::Double
        );
    }

    #[test]
    fn third_rapid_press_is_single_again() {
        let mut clicks = ClickClassifier::default();
        let now = Instant::now();

        clicks.classify(target(0, 1), now);
        clicks.classify(target(0, 1), now + Duration::from_millis(100));
        assert_eq!(
            clicks.classify(target(0, 1), now + Duration::from_millis(200)),
            ClickKind::Single
        );
    }

    #[test]
    fn expired_window_restarts_the_count() {
        let mut clicks = ClickClassifier::new(DoubleClickWindow::new(300));
        let now = Instant::now();

        clicks.classify(target(0, 1), now);
        assert_eq!(
            clicks.classify(target(0, 1), now + Duration::from_millis(301)),
            ClickKind::Single
        );
    }

    #[test]
    fn different_target_restarts_the_count() {
        let mut clicks = ClickClassifier::default();
        let now = Instant::now();

        clicks.classify(target(0, 1), now);
        assert_eq!(
            clicks.classify(target(0, 2), now + Duration::from_millis(50)),
            ClickKind::Single
        );
        // Same thumbnail index in another gallery is a different target.
        assert_eq!(
            clicks.classify(target(1, 2), now + Duration::from_millis(100)),
            ClickKind::Single
        );
    }

    #[test]
    fn press_exactly_on_the_window_edge_counts() {
        let mut clicks = ClickClassifier::new(DoubleClickWindow::new(300));
        let now = Instant::now();

        clicks.classify(target(0, 0), now);
        assert_eq!(
            clicks.classify(target(0, 0), now + Duration::from_millis(300)),
            ClickKind::Double
        );
    }
}
