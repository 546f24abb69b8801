//! State directory navigation: hover, pin, filter, detail panel.
//!
//! The pointer-driven map becomes a keyboard list. The cursor is the hover:
//! moving it re-targets the detail panel without pinning anything. Enter
//! pins the state under the cursor, and at most one state is ever pinned.

use crate::states::{self, InstitutionKind, StateRecord, STATES};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    All,
    Universities,
    Colleges,
    Institutes,
}

impl Filter {
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Universities => "Universities",
            Self::Colleges => "Colleges",
            Self::Institutes => "Institutes",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::All => Self::Universities,
            Self::Universities => Self::Colleges,
            Self::Colleges => Self::Institutes,
            Self::Institutes => Self::All,
        }
    }

    /// Whether a state stays fully lit under this filter. Non-matching
    /// states are dimmed, not removed.
    pub fn matches(self, record: &StateRecord) -> bool {
        match self {
            Self::All => true,
            Self::Universities => record.has_kind(InstitutionKind::University),
            Self::Colleges => record.has_kind(InstitutionKind::College),
            Self::Institutes => record.has_kind(InstitutionKind::Institute),
        }
    }
}

#[derive(Debug)]
pub struct Explorer {
    cursor: usize,
    selected: Option<usize>,
    panel_visible: bool,
    filter: Filter,
    scroll: u16,
}

impl Explorer {
    pub fn new() -> Self {
        Self {
            cursor: 0,
            selected: None,
            panel_visible: false,
            filter: Filter::All,
            scroll: 0,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn panel_visible(&self) -> bool {
        self.panel_visible
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    pub fn hover_next(&mut self) {
        if self.cursor + 1 < STATES.len() {
            self.cursor += 1;
        }
        self.on_hover();
    }

    pub fn hover_prev(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
        self.on_hover();
    }

    fn on_hover(&mut self) {
        // Hovering shows the panel but never pins.
        self.panel_visible = true;
        self.scroll = 0;
    }

    /// Pins the hovered state. Selection is exclusive by construction.
    pub fn select(&mut self) {
        self.selected = Some(self.cursor);
        self.panel_visible = true;
    }

    /// The close button: hides the panel and clears the pinned mark.
    pub fn close_panel(&mut self) {
        self.panel_visible = false;
        self.selected = None;
    }

    /// Visibility toggle independent of selection.
    pub fn toggle_panel(&mut self) {
        self.panel_visible = !self.panel_visible;
    }

    pub fn cycle_filter(&mut self) {
        self.filter = self.filter.next();
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    /// Render-time clamp, once the panel's content height is known.
    pub fn clamp_scroll(&mut self, max: u16) {
        self.scroll = self.scroll.min(max);
    }

    /// Record the panel is showing, routed through the directory lookup so a
    /// miss surfaces as `None` and the panel can say "no data".
    pub fn panel_record(&self) -> Option<&'static StateRecord> {
        STATES.get(self.cursor).and_then(|s| states::lookup(s.id))
    }
}

impl Default for Explorer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_is_exclusive() {
        let mut explorer = Explorer::new();
        explorer.select();
        assert!(explorer.is_selected(0));

        explorer.hover_next();
        explorer.hover_next();
        explorer.select();
        assert!(explorer.is_selected(2));
        assert!(!explorer.is_selected(0));
        assert_eq!((0..STATES.len()).filter(|&i| explorer.is_selected(i)).count(), 1);
    }

    #[test]
    fn hover_shows_panel_without_pinning() {
        let mut explorer = Explorer::new();
        assert!(!explorer.panel_visible());
        explorer.hover_next();
        assert!(explorer.panel_visible());
        assert!((0..STATES.len()).all(|i| !explorer.is_selected(i)));
    }

    #[test]
    fn close_clears_selection_but_toggle_does_not() {
        let mut explorer = Explorer::new();
        explorer.select();
        explorer.close_panel();
        assert!(!explorer.panel_visible());
        assert!(!explorer.is_selected(0));

        explorer.select();
        explorer.toggle_panel();
        explorer.toggle_panel();
        assert!(explorer.is_selected(0));
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let mut explorer = Explorer::new();
        explorer.hover_prev();
        assert_eq!(explorer.cursor(), 0);
        for _ in 0..STATES.len() + 10 {
            explorer.hover_next();
        }
        assert_eq!(explorer.cursor(), STATES.len() - 1);
        assert!(explorer.panel_record().is_some());
    }

    #[test]
    fn filter_cycles_and_dims() {
        let mut explorer = Explorer::new();
        assert_eq!(explorer.filter(), Filter::All);
        explorer.cycle_filter();
        assert_eq!(explorer.filter(), Filter::Universities);

        // No state in the directory carries a plain college, so the college
        // filter dims everything.
        let college = Filter::Colleges;
        assert!(STATES.iter().all(|s| !college.matches(s)));
        assert!(STATES.iter().all(|s| Filter::All.matches(s)));
    }

    #[test]
    fn hover_resets_panel_scroll() {
        let mut explorer = Explorer::new();
        explorer.scroll_down();
        explorer.scroll_down();
        assert_eq!(explorer.scroll(), 2);
        explorer.clamp_scroll(1);
        assert_eq!(explorer.scroll(), 1);
        explorer.hover_next();
        assert_eq!(explorer.scroll(), 0);
    }
}
