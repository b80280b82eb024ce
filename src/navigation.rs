/*
 * Navigation Module
 *
 * Navigation state: which section link is highlighted, whether the compact
 * menu is open, and how opaque the nav bar is.
 */

use crate::page::Section;

/// Sections count as active this far before their top edge.
pub const ACTIVE_OFFSET: f32 = 100.0;
pub const SOLID_AFTER: f32 = 50.0;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Navigation {
    active: Option<usize>,
    menu_open: bool,
}

impl Navigation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Highlight the section under `scroll`. The last matching section wins;
    /// when none matches the current highlight is kept.
    pub fn on_scroll(&mut self, scroll: f32, sections: &[Section]) -> Option<usize> {
        let matched = sections
            .iter()
            .enumerate()
            .filter(|(_, s)| {
                let top = s.top - ACTIVE_OFFSET;
                scroll >= top && scroll < top + s.height
            })
            .map(|(i, _)| i)
            .last();

        if matched.is_some() {
            self.active = matched;
        }
        self.active
    }

    /// Follow a nav link: highlight it and close the menu. Returns false for
    /// an unknown section, leaving the state untouched.
    pub fn select(&mut self, index: usize, sections: &[Section]) -> bool {
        if index >= sections.len() {
            return false;
        }
        self.active = Some(index);
        self.menu_open = false;
        true
    }

    pub fn background_alpha(scroll: f32) -> f32 {
        if scroll > SOLID_AFTER {
            0.95
        } else {
            0.9
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Page;

    fn page() -> Page {
        Page::new(&[("home", "Home", "", 500.0), ("about", "About", "", 400.0), ("contact", "Contact", "", 300.0)], 600.0)
    }

    #[test]
    fn highlights_section_under_scroll() {
        let page = page();
        let mut nav = Navigation::new();
        assert_eq!(nav.on_scroll(0.0, page.sections()), Some(0));
        // About starts at 500, active from 400
        assert_eq!(nav.on_scroll(399.0, page.sections()), Some(0));
        assert_eq!(nav.on_scroll(400.0, page.sections()), Some(1));
        assert_eq!(nav.on_scroll(850.0, page.sections()), Some(2));
    }

    #[test]
    fn keeps_previous_when_nothing_matches() {
        let page = page();
        let mut nav = Navigation::new();
        nav.on_scroll(450.0, page.sections());
        assert_eq!(nav.on_scroll(5000.0, page.sections()), Some(1));
    }

    #[test]
    fn nothing_active_initially_past_the_end() {
        let page = page();
        let mut nav = Navigation::new();
        assert_eq!(nav.on_scroll(5000.0, page.sections()), None);
    }

    #[test]
    fn select_closes_menu_and_highlights() {
        let page = page();
        let mut nav = Navigation::new();
        nav.toggle_menu();
        assert!(nav.is_menu_open());
        assert!(nav.select(2, page.sections()));
        assert_eq!(nav.active(), Some(2));
        assert!(!nav.is_menu_open());
        assert!(!nav.select(7, page.sections()));
        assert_eq!(nav.active(), Some(2));
    }

    #[test]
    fn nav_turns_solid_after_scrolling() {
        assert_eq!(Navigation::background_alpha(0.0), 0.9);
        assert_eq!(Navigation::background_alpha(50.0), 0.9);
        assert_eq!(Navigation::background_alpha(51.0), 0.95);
    }
}
