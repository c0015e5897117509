use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};

/// Picker layout: query line, results list, status bar
pub struct AppLayout {
    pub input_area: Rect,
    pub results_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Create the stacked layout:
    /// - Query input: top row
    /// - One blank row
    /// - Results list: everything left
    /// - Status bar: bottom row
    ///
    /// A one-column margin is kept on both sides.
    pub fn new(area: Rect) -> Self {
        let inner = area.inner(Margin { horizontal: 1, vertical: 0 });

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Query input
                Constraint::Length(1), // Spacer
                Constraint::Min(1),    // Results list
                Constraint::Length(1), // Status bar
            ])
            .split(inner);

        Self { input_area: chunks[0], results_area: chunks[2], status_area: chunks[3] }
    }
}
