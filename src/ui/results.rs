use crate::app::state::AppState;
use crate::form::FormFields;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

/// Lines shown for a submission. The message line only appears when a
/// message was entered.
pub fn submitted_lines(submitted: &FormFields) -> Vec<Line<'_>> {
    let mut rows = vec![
        ("First Name: ", submitted.first_name.as_str()),
        ("Last Name: ", submitted.last_name.as_str()),
        ("Email: ", submitted.email.as_str()),
    ];
    if !submitted.message.is_empty() {
        rows.push(("Message: ", submitted.message.as_str()));
    }
    rows.into_iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(label, Theme::result_label()),
                Span::styled(value, Theme::result_value()),
            ])
        })
        .collect()
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" You Submitted ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border());

    let lines = match state.form.submitted() {
        Some(submitted) => submitted_lines(submitted),
        None => vec![Line::from(Span::styled(
            "Nothing submitted yet",
            Theme::hint(),
        ))],
    };

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
