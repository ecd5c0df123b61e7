use crate::app::state::*;
use crate::form::Field;
use crate::ui::layout::FieldLayout;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(Span::styled("Contact Form", Theme::header()))
        .alignment(Alignment::Center);
    frame.render_widget(header, area);
}

pub fn render_field(frame: &mut Frame, slot: FieldLayout, field: Field, state: &AppState) {
    let focused = state.focus == Focus::Field(field);
    let (border_style, border_type) = if focused {
        (Theme::border_focused(), Theme::border_type_focused())
    } else {
        (Theme::border(), Theme::border_type())
    };

    let block = Block::default()
        .title(format!(" {} ", field.label()))
        .title_style(if focused {
            Theme::title()
        } else {
            Theme::border()
        })
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .padding(Padding::horizontal(1));

    let inner = block.inner(slot.input);
    frame.render_widget(block, slot.input);

    let (visible, cursor_col) = state.input(field).viewport(inner.width as usize);
    frame.render_widget(
        Paragraph::new(visible).style(Theme::input_text()),
        inner,
    );

    if focused && inner.width > 0 {
        let col = u16::try_from(cursor_col).unwrap_or(u16::MAX);
        let cursor_x = inner.x.saturating_add(col).min(inner.right() - 1);
        frame.set_cursor_position((cursor_x, inner.y));
    }

    if let Some(err) = state.form.error(field) {
        let line = Line::from(Span::styled(format!(" {}", err), Theme::error_message()));
        frame.render_widget(Paragraph::new(line), slot.error);
    }
}

pub fn render_submit(frame: &mut Frame, area: Rect, state: &AppState) {
    let style = if state.focus == Focus::Submit {
        Theme::button_focused()
    } else {
        Theme::button()
    };
    let line = Line::from(vec![Span::raw(" "), Span::styled("[ Submit ]", style)]);
    frame.render_widget(Paragraph::new(line), area);
}

pub fn render_help(frame: &mut Frame, area: Rect) {
    let help = Line::from(vec![
        Span::styled(" Tab", Theme::key_hint()),
        Span::styled(" Next  ", Theme::hint()),
        Span::styled("Shift+Tab", Theme::key_hint()),
        Span::styled(" Prev  ", Theme::hint()),
        Span::styled("Ctrl+S", Theme::key_hint()),
        Span::styled(" Submit  ", Theme::hint()),
        Span::styled("Esc", Theme::key_hint()),
        Span::styled(" Quit", Theme::hint()),
    ]);
    frame.render_widget(Paragraph::new(help), area);
}
