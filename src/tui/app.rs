use crate::app::Edition;
use crate::domain::{FeedSelector, Source, Story};
use crate::layout::FRONT_PAGE_CAPACITY;

pub struct TuiApp {
    pub sources: Vec<Source>,
    /// The most recently requested selector; may be ahead of `edition`
    pub selector: FeedSelector,
    pub edition: Option<Edition>,
    pub is_loading: bool,
    /// Index into the page's stories
    pub selected: usize,
    pub should_quit: bool,
    pub status_message: Option<String>,
}

impl TuiApp {
    pub fn new(mut sources: Vec<Source>, selector: FeedSelector) -> Self {
        if !sources.contains(&selector.source) {
            sources.insert(0, selector.source.clone());
        }

        Self {
            sources,
            selector,
            edition: None,
            is_loading: true,
            selected: 0,
            should_quit: false,
            status_message: None,
        }
    }

    pub fn stories(&self) -> &[Story] {
        self.edition
            .as_ref()
            .map(|edition| edition.stories.as_slice())
            .unwrap_or_default()
    }

    fn page_len(&self) -> usize {
        self.stories().len().min(FRONT_PAGE_CAPACITY)
    }

    pub fn selected_story(&self) -> Option<&Story> {
        self.stories().get(self.selected)
    }

    pub fn move_down(&mut self) {
        if self.selected + 1 < self.page_len() {
            self.selected += 1;
        }
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn source_index(&self) -> usize {
        self.sources
            .iter()
            .position(|source| *source == self.selector.source)
            .unwrap_or(0)
    }

    /// Switch to the next source and return the selector to load.
    pub fn next_source(&mut self) -> FeedSelector {
        let next = (self.source_index() + 1) % self.sources.len();
        self.navigate(self.selector.with_source(self.sources[next].clone()))
    }

    pub fn prev_source(&mut self) -> FeedSelector {
        let len = self.sources.len();
        let prev = (self.source_index() + len - 1) % len;
        self.navigate(self.selector.with_source(self.sources[prev].clone()))
    }

    pub fn toggle_top(&mut self) -> FeedSelector {
        self.navigate(self.selector.with_rank_mode(self.selector.rank_mode.toggled()))
    }

    /// Re-request the current selector.
    pub fn refresh(&mut self) -> FeedSelector {
        self.navigate(self.selector.clone())
    }

    fn navigate(&mut self, selector: FeedSelector) -> FeedSelector {
        self.selector = selector.clone();
        self.is_loading = true;
        self.status_message = None;
        selector
    }

    /// Show a newly published edition. Selection resets when the edition changes.
    pub fn apply_edition(&mut self, edition: Edition) {
        let is_new = self
            .edition
            .as_ref()
            .is_none_or(|current| current.token != edition.token);
        if is_new {
            self.selected = 0;
            self.edition = Some(edition);
        }
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }
}
