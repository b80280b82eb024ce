/*
 * Reveal Module
 *
 * Scroll-triggered reveal. Each target is revealed the first time enough of it
 * scrolls into the viewport, and stays revealed. Targets with siblings fade in
 * staggered by their position among them.
 */

use std::time::{Duration, Instant};

use tracing::debug;

use crate::page::Page;

pub const STAGGER_STEP: Duration = Duration::from_millis(100);
pub const FADE_DURATION: Duration = Duration::from_millis(600);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    /// Fraction of the target that must be inside the viewport.
    pub threshold: f32,
    /// Added to the bottom of the viewport; negative values shrink it.
    pub bottom_margin: f32,
}

impl RevealOptions {
    pub fn items() -> Self {
        Self { threshold: 0.1, bottom_margin: -50.0 }
    }

    pub fn sections() -> Self {
        Self { threshold: 0.2, bottom_margin: -100.0 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealTarget {
    pub top: f32,
    pub height: f32,
    pub sibling_index: usize,
    pub sibling_count: usize,
}

impl RevealTarget {
    pub fn stagger(&self) -> Duration {
        if self.sibling_count > 1 {
            STAGGER_STEP * self.sibling_index as u32
        } else {
            Duration::ZERO
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct Revealed {
    at: Instant,
    delay: Duration,
}

/// Fraction of `[top, top + height]` that lies inside `[view_top, view_bottom]`.
pub fn intersection_ratio(top: f32, height: f32, view_top: f32, view_bottom: f32) -> f32 {
    if view_bottom <= view_top {
        return 0.0;
    }
    if height <= 0.0 {
        return if top >= view_top && top <= view_bottom { 1.0 } else { 0.0 };
    }
    let overlap = (top + height).min(view_bottom) - top.max(view_top);
    (overlap / height).clamp(0.0, 1.0)
}

#[derive(Clone, Debug)]
pub struct RevealTracker {
    options: RevealOptions,
    targets: Vec<RevealTarget>,
    revealed: Vec<Option<Revealed>>,
}

impl RevealTracker {
    pub fn new(options: RevealOptions, targets: Vec<RevealTarget>) -> Self {
        let revealed = vec![None; targets.len()];
        Self { options, targets, revealed }
    }

    // One target per page section; sections fade in without stagger
    pub fn for_page(page: &Page) -> Self {
        let targets = page
            .sections()
            .iter()
            .map(|s| RevealTarget { top: s.top, height: s.height, sibling_index: 0, sibling_count: 1 })
            .collect();
        Self::new(RevealOptions::sections(), targets)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Reveal every target that is now visible enough. Returns the indices
    /// revealed by this call.
    pub fn observe(&mut self, scroll: f32, viewport_height: f32, now: Instant) -> Vec<usize> {
        let view_top = scroll;
        let view_bottom = scroll + viewport_height + self.options.bottom_margin;
        let mut newly = Vec::new();

        for (i, target) in self.targets.iter().enumerate() {
            if self.revealed[i].is_some() {
                continue;
            }
            let ratio = intersection_ratio(target.top, target.height, view_top, view_bottom);
            if ratio > 0.0 && ratio >= self.options.threshold {
                self.revealed[i] = Some(Revealed { at: now, delay: target.stagger() });
                debug!(target = i, ratio, "revealed");
                newly.push(i);
            }
        }

        newly
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        matches!(self.revealed.get(index), Some(Some(_)))
    }

    /// Fade progress in `0..=1`; zero until revealed and its stagger has passed.
    pub fn progress(&self, index: usize, now: Instant) -> f32 {
        match self.revealed.get(index) {
            Some(Some(revealed)) => {
                let start = revealed.at + revealed.delay;
                let elapsed = now.saturating_duration_since(start);
                (elapsed.as_secs_f32() / FADE_DURATION.as_secs_f32()).min(1.0)
            }
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(top: f32, height: f32, index: usize, count: usize) -> RevealTarget {
        RevealTarget { top, height, sibling_index: index, sibling_count: count }
    }

    #[test]
    fn ratio_of_partial_overlap() {
        assert_eq!(intersection_ratio(0.0, 100.0, 50.0, 500.0), 0.5);
        assert_eq!(intersection_ratio(600.0, 100.0, 0.0, 500.0), 0.0);
        assert_eq!(intersection_ratio(100.0, 100.0, 0.0, 500.0), 1.0);
        assert_eq!(intersection_ratio(100.0, 100.0, 10.0, 10.0), 0.0);
    }

    #[test]
    fn bottom_margin_delays_reveal() {
        let now = Instant::now();
        // 100 tall, top at 560: 40 units visible in a 600 viewport, none after the -50 margin
        let mut tracker = RevealTracker::new(RevealOptions::items(), vec![target(560.0, 100.0, 0, 1)]);
        assert!(tracker.observe(0.0, 600.0, now).is_empty());

        // Scrolled 30: 20 units (0.2) inside the shrunk viewport
        assert_eq!(tracker.observe(30.0, 600.0, now), vec![0]);
        assert!(tracker.is_revealed(0));
    }

    #[test]
    fn below_threshold_stays_hidden() {
        let now = Instant::now();
        let mut tracker = RevealTracker::new(RevealOptions::sections(), vec![target(0.0, 1000.0, 0, 1)]);
        // 150 of 1000 visible: 0.15 < 0.2
        assert!(tracker.observe(850.0, 250.0, now).is_empty());
        assert_eq!(tracker.observe(700.0, 400.0, now), vec![0]);
    }

    #[test]
    fn reveal_is_one_way() {
        let now = Instant::now();
        let mut tracker = RevealTracker::new(RevealOptions::items(), vec![target(0.0, 100.0, 0, 1)]);
        assert_eq!(tracker.observe(0.0, 600.0, now), vec![0]);
        assert!(tracker.observe(5000.0, 600.0, now).is_empty());
        assert!(tracker.is_revealed(0));
    }

    #[test]
    fn siblings_are_staggered() {
        let now = Instant::now();
        let targets = vec![target(0.0, 100.0, 0, 3), target(100.0, 100.0, 1, 3), target(200.0, 100.0, 2, 3)];
        let mut tracker = RevealTracker::new(RevealOptions::items(), targets);
        assert_eq!(tracker.observe(0.0, 600.0, now), vec![0, 1, 2]);

        let later = now + Duration::from_millis(150);
        assert!((tracker.progress(0, later) - 0.25).abs() < 1e-3);
        assert!((tracker.progress(1, later) - 50.0 / 600.0).abs() < 1e-3);
        assert_eq!(tracker.progress(2, later), 0.0);
        assert_eq!(tracker.progress(2, now + Duration::from_secs(2)), 1.0);
    }

    #[test]
    fn only_child_has_no_stagger() {
        assert_eq!(target(0.0, 1.0, 4, 1).stagger(), Duration::ZERO);
        assert_eq!(target(0.0, 1.0, 4, 5).stagger(), Duration::from_millis(400));
    }

    #[test]
    fn unrevealed_progress_is_zero() {
        let tracker = RevealTracker::new(RevealOptions::items(), vec![target(0.0, 1.0, 0, 1)]);
        assert_eq!(tracker.progress(0, Instant::now()), 0.0);
        assert_eq!(tracker.progress(9, Instant::now()), 0.0);
    }

    #[test]
    fn page_sections_become_targets() {
        let page = Page::portfolio(800.0);
        let mut tracker = RevealTracker::for_page(&page);
        assert_eq!(tracker.len(), page.sections().len());
        let newly = tracker.observe(0.0, 800.0, Instant::now());
        assert!(newly.contains(&0));
        assert!(!newly.contains(&(page.sections().len() - 1)));
    }

    #[test]
    fn page_sections_are_not_staggered() {
        let page = Page::new(&[("a", "A", "", 300.0), ("b", "B", "", 300.0), ("c", "C", "", 300.0)], 1000.0);
        let mut tracker = RevealTracker::for_page(&page);
        let now = Instant::now();
        assert_eq!(tracker.observe(0.0, 1000.0, now), vec![0, 1, 2]);

        let later = now + Duration::from_millis(300);
        assert_eq!(tracker.progress(0, later), tracker.progress(2, later));
        assert!((tracker.progress(2, later) - 0.5).abs() < 1e-3);
    }
}
