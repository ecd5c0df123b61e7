use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Input box plus the line reserved for its error.
#[derive(Debug, Clone, Copy)]
pub struct FieldLayout {
    pub input: Rect,
    pub error: Rect,
}

pub struct AppLayout {
    pub header: Rect,
    pub fields: [FieldLayout; 4],
    pub submit: Rect,
    pub help: Rect,
    pub results: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect, show_help: bool, show_status_bar: bool) -> AppLayout {
    let mut constraints = vec![Constraint::Length(1)]; // Header
    for _ in 0..4 {
        constraints.push(Constraint::Length(3)); // Input box
        constraints.push(Constraint::Length(1)); // Error line
    }
    constraints.extend([
        Constraint::Length(1),                            // Submit button
        Constraint::Length(if show_help { 1 } else { 0 }), // Key help
        Constraint::Min(3),                               // Results
        Constraint::Length(if show_status_bar { 1 } else { 0 }),
    ]);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let fields = std::array::from_fn(|i| FieldLayout {
        input: chunks[1 + i * 2],
        error: chunks[2 + i * 2],
    });

    AppLayout {
        header: chunks[0],
        fields,
        submit: chunks[9],
        help: chunks[10],
        results: chunks[11],
        status_bar: chunks[12],
    }
}
