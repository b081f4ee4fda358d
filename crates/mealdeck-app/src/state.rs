//! Application state (Model in TEA pattern)

use crate::config::Settings;
use crate::view::{CategoryListView, Screen, ViewId};

/// Lifecycle phase of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Current input mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Normal navigation
    #[default]
    Browse,

    /// Capturing text for the row filter of the current list
    FilterInput,
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,
    pub ui_mode: UiMode,
    pub settings: Settings,

    /// Navigation stack. Never empty; the bottom entry is the category list.
    nav: Vec<Screen>,

    next_view_id: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        let root = Screen::CategoryList(CategoryListView::new(ViewId(1)));
        Self {
            phase: AppPhase::Running,
            ui_mode: UiMode::Browse,
            settings,
            nav: vec![root],
            next_view_id: 2,
        }
    }

    /// Hand out a fresh id for a view about to be pushed
    pub fn allocate_view_id(&mut self) -> ViewId {
        let id = ViewId(self.next_view_id);
        self.next_view_id += 1;
        id
    }

    // ─────────────────────────────────────────────────────────
    // Navigation stack
    // ─────────────────────────────────────────────────────────

    /// The view on top of the stack
    pub fn current(&self) -> &Screen {
        // `nav` is never empty
        &self.nav[self.nav.len() - 1]
    }

    pub fn current_mut(&mut self) -> &mut Screen {
        let last = self.nav.len() - 1;
        &mut self.nav[last]
    }

    pub fn root_id(&self) -> ViewId {
        self.nav[0].id()
    }

    pub fn stack(&self) -> &[Screen] {
        &self.nav
    }

    pub fn depth(&self) -> usize {
        self.nav.len()
    }

    pub fn push(&mut self, screen: Screen) {
        self.nav.push(screen);
    }

    /// Pop the top view. The root is never popped.
    pub fn pop(&mut self) -> Option<Screen> {
        if self.nav.len() > 1 {
            self.nav.pop()
        } else {
            None
        }
    }

    /// A view that is still on the stack
    pub fn view_mut(&mut self, id: ViewId) -> Option<&mut Screen> {
        self.nav.iter_mut().find(|screen| screen.id() == id)
    }

    pub fn has_view(&self, id: ViewId) -> bool {
        self.nav.iter().any(|screen| screen.id() == id)
    }

    /// Titles from the root to the current view
    pub fn breadcrumb(&self) -> Vec<&str> {
        self.nav.iter().map(Screen::title).collect()
    }

    // ─────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────

    pub fn request_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}
