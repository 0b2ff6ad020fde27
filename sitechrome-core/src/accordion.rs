//! Footer accordion state
//!
//! Tracks the viewport mode and one expanded flag per footer section.
//! Entering a mode force-resets every section (collapsed on mobile,
//! expanded on desktop); re-entering the current mode re-applies the same
//! reset. Sections toggle independently and only while mobile.

/// Which side of the breakpoint the viewport is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportMode {
    Mobile,
    Desktop,
}

impl ViewportMode {
    /// Derive the mode from a viewport width, matching a
    /// `(max-width: {breakpoint}px)` media condition: the breakpoint itself
    /// is mobile.
    #[must_use]
    pub const fn from_width(width_px: u32, breakpoint_px: u32) -> Self {
        if width_px <= breakpoint_px {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }

    /// Derive the mode from a `(max-width: ...)` media query match flag.
    #[must_use]
    pub const fn from_media_matches(matches: bool) -> Self {
        if matches { Self::Mobile } else { Self::Desktop }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccordionState {
    mode: ViewportMode,
    sections: Vec<bool>,
}

impl AccordionState {
    /// Desktop state with every section expanded, matching the markup the
    /// host page ships before any media evaluation runs.
    #[must_use]
    pub fn new(section_count: usize) -> Self {
        Self {
            mode: ViewportMode::Desktop,
            sections: vec![true; section_count],
        }
    }

    #[must_use]
    pub const fn mode(&self) -> ViewportMode {
        self.mode
    }

    #[must_use]
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    #[must_use]
    pub fn is_expanded(&self, index: usize) -> bool {
        self.sections.get(index).copied().unwrap_or(false)
    }

    /// Enter a viewport mode, force-resetting every section: collapsed on
    /// mobile, expanded on desktop. Idempotent over repeated entries.
    pub fn set_mode(&mut self, mode: ViewportMode) {
        self.mode = mode;
        let expanded = mode == ViewportMode::Desktop;
        self.sections.fill(expanded);
    }

    /// Flip one section's flag. Refused outside mobile mode and for
    /// out-of-range indices; returns the new flag otherwise.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        if self.mode != ViewportMode::Mobile {
            return None;
        }
        let section = self.sections.get_mut(index)?;
        *section = !*section;
        Some(*section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_width_itself_is_mobile() {
        assert_eq!(ViewportMode::from_width(768, 768), ViewportMode::Mobile);
        assert_eq!(ViewportMode::from_width(769, 768), ViewportMode::Desktop);
        assert_eq!(ViewportMode::from_width(320, 768), ViewportMode::Mobile);
    }

    #[test]
    fn media_matches_maps_to_mobile() {
        assert_eq!(
            ViewportMode::from_media_matches(true),
            ViewportMode::Mobile
        );
        assert_eq!(
            ViewportMode::from_media_matches(false),
            ViewportMode::Desktop
        );
    }

    #[test]
    fn starts_desktop_with_all_expanded() {
        let state = AccordionState::new(3);
        assert_eq!(state.mode(), ViewportMode::Desktop);
        assert!((0..3).all(|i| state.is_expanded(i)));
    }

    #[test]
    fn entering_mobile_collapses_everything() {
        let mut state = AccordionState::new(3);
        state.set_mode(ViewportMode::Mobile);
        assert!((0..3).all(|i| !state.is_expanded(i)));
    }

    #[test]
    fn reentering_mobile_resets_toggled_sections() {
        let mut state = AccordionState::new(2);
        state.set_mode(ViewportMode::Mobile);
        state.toggle(0);
        assert!(state.is_expanded(0));
        state.set_mode(ViewportMode::Mobile);
        assert!(!state.is_expanded(0));
        assert!(!state.is_expanded(1));
    }

    #[test]
    fn leaving_mobile_expands_everything() {
        let mut state = AccordionState::new(2);
        state.set_mode(ViewportMode::Mobile);
        state.toggle(1);
        state.set_mode(ViewportMode::Desktop);
        assert!(state.is_expanded(0));
        assert!(state.is_expanded(1));
    }

    #[test]
    fn sections_toggle_independently() {
        let mut state = AccordionState::new(3);
        state.set_mode(ViewportMode::Mobile);
        assert_eq!(state.toggle(1), Some(true));
        assert!(!state.is_expanded(0));
        assert!(state.is_expanded(1));
        assert!(!state.is_expanded(2));
        assert_eq!(state.toggle(1), Some(false));
        assert!(!state.is_expanded(1));
    }

    #[test]
    fn toggle_is_refused_on_desktop() {
        let mut state = AccordionState::new(2);
        assert_eq!(state.toggle(0), None);
        assert!(state.is_expanded(0));
    }

    #[test]
    fn toggle_is_refused_out_of_range() {
        let mut state = AccordionState::new(1);
        state.set_mode(ViewportMode::Mobile);
        assert_eq!(state.toggle(5), None);
    }
}
