/*
 * Typing Module
 *
 * Typewriter headline: types the text one character at a time, holds it,
 * deletes it at double speed, pauses, and starts over.
 */

use std::time::{Duration, Instant};

pub const HOLD_FULL: Duration = Duration::from_millis(2000);
pub const HOLD_EMPTY: Duration = Duration::from_millis(500);
pub const DEFAULT_SPEED: Duration = Duration::from_millis(150);

#[derive(Clone, Debug)]
pub struct TypingAnimation {
    text: Vec<char>,
    speed: Duration,
    index: usize,
    deleting: bool,
    visible: String,
    next_tick: Option<Instant>,
}

impl TypingAnimation {
    pub fn new(text: &str, speed: Duration) -> Self {
        Self {
            text: text.chars().collect(),
            speed,
            index: 0,
            deleting: false,
            visible: String::new(),
            next_tick: None,
        }
    }

    pub fn visible(&self) -> &str {
        &self.visible
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    /// Render the next state and return how long to wait before the next tick.
    pub fn tick(&mut self) -> Duration {
        let len = self.text.len();
        let shown = if self.deleting {
            self.index.saturating_sub(1)
        } else {
            (self.index + 1).min(len)
        };
        self.visible = self.text[..shown].iter().collect();

        if !self.deleting && self.index < len {
            self.index += 1;
            self.speed
        } else if self.deleting && self.index > 0 {
            self.index -= 1;
            self.speed / 2
        } else if !self.deleting {
            self.deleting = true;
            HOLD_FULL
        } else {
            self.deleting = false;
            HOLD_EMPTY
        }
    }

    /// Tick once if the scheduled time has come. Returns whether the visible
    /// text may have changed.
    pub fn update(&mut self, now: Instant) -> bool {
        match self.next_tick {
            Some(due) if now < due => false,
            _ => {
                let delay = self.tick();
                self.next_tick = Some(now + delay);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn types_then_holds_then_deletes() {
        let speed = Duration::from_millis(100);
        let mut typing = TypingAnimation::new("abc", speed);

        assert_eq!(typing.tick(), speed);
        assert_eq!(typing.visible(), "a");
        assert_eq!(typing.tick(), speed);
        assert_eq!(typing.visible(), "ab");
        assert_eq!(typing.tick(), speed);
        assert_eq!(typing.visible(), "abc");

        // Fully typed: hold before deleting
        assert_eq!(typing.tick(), HOLD_FULL);
        assert_eq!(typing.visible(), "abc");
        assert!(typing.is_deleting());

        assert_eq!(typing.tick(), speed / 2);
        assert_eq!(typing.visible(), "ab");
        assert_eq!(typing.tick(), speed / 2);
        assert_eq!(typing.visible(), "a");
        assert_eq!(typing.tick(), speed / 2);
        assert_eq!(typing.visible(), "");

        // Empty: pause before typing again
        assert_eq!(typing.tick(), HOLD_EMPTY);
        assert!(!typing.is_deleting());
        assert_eq!(typing.tick(), speed);
        assert_eq!(typing.visible(), "a");
    }

    #[test]
    fn counts_characters_not_bytes() {
        let mut typing = TypingAnimation::new("héllo", DEFAULT_SPEED);
        typing.tick();
        typing.tick();
        assert_eq!(typing.visible(), "hé");
    }

    #[test]
    fn empty_text_alternates_holds() {
        let mut typing = TypingAnimation::new("", DEFAULT_SPEED);
        assert_eq!(typing.tick(), HOLD_FULL);
        assert_eq!(typing.tick(), HOLD_EMPTY);
        assert_eq!(typing.visible(), "");
    }

    #[test]
    fn update_waits_for_due_time() {
        let start = Instant::now();
        let mut typing = TypingAnimation::new("hi", Duration::from_millis(150));
        assert!(typing.update(start));
        assert_eq!(typing.visible(), "h");
        assert!(!typing.update(start + Duration::from_millis(100)));
        assert_eq!(typing.visible(), "h");
        assert!(typing.update(start + Duration::from_millis(150)));
        assert_eq!(typing.visible(), "hi");
    }
}
