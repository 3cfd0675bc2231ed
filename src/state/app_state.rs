//! Central mutable application state driven by the event loop.

use ratatui::widgets::ListState;

use crate::state::types::{CATEGORIES, Category, Endpoint, LoadPhase, Screen, Story};

/// Per-screen list, request bookkeeping and visible message.
#[derive(Debug, Default)]
pub struct ScreenState {
    /// Stories currently displayed, in API order.
    pub stories: Vec<Story>,
    /// Selection/scroll state for the story list.
    pub list_state: ListState,
    /// Lifecycle of the latest request.
    pub phase: LoadPhase,
    /// Sequence number of the latest triggered request (0 = none yet).
    pub latest_seq: u64,
    /// Message shown instead of the list (prompt, empty or error text).
    pub message: Option<String>,
}

impl ScreenState {
    /// What: Allocate the next request sequence number for this screen.
    ///
    /// Output:
    /// - The new latest sequence number; strictly greater than any previous one.
    pub const fn next_seq(&mut self) -> u64 {
        self.latest_seq += 1;
        self.latest_seq
    }

    /// What: Index of the selected story, if any.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.list_state
            .selected()
            .filter(|&i| i < self.stories.len())
    }

    /// What: Move the selection by `delta` rows, clamped to the list bounds.
    pub fn move_selection(&mut self, delta: isize) {
        if self.stories.is_empty() {
            self.list_state.select(None);
            return;
        }
        let last = self.stories.len() - 1;
        let cur = self.selected().unwrap_or(0);
        let next = cur.saturating_add_signed(delta).min(last);
        self.list_state.select(Some(next));
    }

    /// What: Jump to the first or last story.
    pub fn select_edge(&mut self, end: bool) {
        if self.stories.is_empty() {
            self.list_state.select(None);
        } else if end {
            self.list_state.select(Some(self.stories.len() - 1));
        } else {
            self.list_state.select(Some(0));
        }
    }
}

/// Application state shared by event handlers, controllers and rendering.
#[derive(Debug, Default)]
pub struct AppState {
    /// Currently visible tab.
    pub screen: Screen,
    /// World headlines tab.
    pub world: ScreenState,
    /// Section browse tab.
    pub browse: ScreenState,
    /// Search tab.
    pub search: ScreenState,
    /// Selected Browse category (index into [`CATEGORIES`]).
    pub category: Option<usize>,
    /// Text typed into the search box.
    pub search_input: String,
    /// Search term of the last submitted search.
    pub submitted_search: Option<String>,
    /// Whether keystrokes go to the search box.
    pub search_editing: bool,
    /// Help overlay visibility.
    pub show_help: bool,
    /// API location used when building request URLs.
    pub endpoint: Endpoint,
    /// Short-lived footer notice (e.g. which URL is being opened).
    pub notice: Option<String>,
}

impl AppState {
    /// What: Immutable access to one screen's state.
    #[must_use]
    pub const fn screen_state(&self, screen: Screen) -> &ScreenState {
        match screen {
            Screen::World => &self.world,
            Screen::Browse => &self.browse,
            Screen::Search => &self.search,
        }
    }

    /// What: Mutable access to one screen's state.
    pub const fn screen_state_mut(&mut self, screen: Screen) -> &mut ScreenState {
        match screen {
            Screen::World => &mut self.world,
            Screen::Browse => &mut self.browse,
            Screen::Search => &mut self.search,
        }
    }

    /// What: State of the visible screen.
    #[must_use]
    pub const fn current(&self) -> &ScreenState {
        self.screen_state(self.screen)
    }

    /// What: Mutable state of the visible screen.
    pub const fn current_mut(&mut self) -> &mut ScreenState {
        self.screen_state_mut(self.screen)
    }

    /// What: Story under the cursor on the visible screen.
    #[must_use]
    pub fn selected_story(&self) -> Option<&Story> {
        let st = self.current();
        st.selected().and_then(|i| st.stories.get(i))
    }

    /// What: Selected Browse category, if any.
    #[must_use]
    pub fn selected_category(&self) -> Option<Category> {
        self.category.and_then(|i| CATEGORIES.get(i).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn story(id: &str) -> Story {
        Story {
            id: id.into(),
            section_id: "world".into(),
            section_name: "World news".into(),
            published: "2025-01-01T00:00:00Z".into(),
            title: id.into(),
            headline: String::new(),
            byline: String::new(),
            trail_text: String::new(),
            web_url: format!("https://example.com/{id}"),
            api_url: format!("https://api.example.com/{id}"),
        }
    }

    #[test]
    /// What: Sequence numbers are strictly increasing per screen and independent across screens.
    fn sequence_numbers_are_per_screen() {
        let mut app = AppState::default();
        assert_eq!(app.world.next_seq(), 1);
        assert_eq!(app.world.next_seq(), 2);
        assert_eq!(app.search.next_seq(), 1);
        assert_eq!(app.world.latest_seq, 2);
    }

    #[test]
    fn selection_is_clamped() {
        let mut st = ScreenState {
            stories: vec![story("a"), story("b"), story("c")],
            ..ScreenState::default()
        };
        st.move_selection(1);
        assert_eq!(st.selected(), Some(1));
        st.move_selection(10);
        assert_eq!(st.selected(), Some(2));
        st.move_selection(-10);
        assert_eq!(st.selected(), Some(0));
        st.select_edge(true);
        assert_eq!(st.selected(), Some(2));

        st.stories.clear();
        st.move_selection(1);
        assert_eq!(st.selected(), None);
    }

    #[test]
    fn selected_story_follows_current_screen() {
        let mut app = AppState::default();
        app.world.stories = vec![story("w")];
        app.world.list_state.select(Some(0));
        assert_eq!(app.selected_story().map(|s| s.id.as_str()), Some("w"));
        app.screen = Screen::Search;
        assert!(app.selected_story().is_none());
    }
}
