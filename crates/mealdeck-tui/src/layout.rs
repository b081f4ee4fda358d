//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Top border + breadcrumb row + bottom border
const HEADER_HEIGHT: u16 = 3;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// App title and breadcrumb
    pub header: Rect,

    /// The current view
    pub body: Rect,

    /// Key hints
    pub footer: Rect,
}

/// Split the frame into header, body and a one-line footer
pub fn create(area: Rect) -> ScreenAreas {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(area);

    ScreenAreas {
        header,
        body,
        footer,
    }
}
