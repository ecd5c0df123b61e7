use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const ACCENT_TEAL: Color = Color::Rgb(64, 196, 184);
    pub const ACCENT_AMBER: Color = Color::Rgb(240, 180, 70);
    pub const ACCENT_GREEN: Color = Color::Rgb(120, 200, 110);
    pub const ERROR_RED: Color = Color::Rgb(235, 95, 95);
    pub const TEXT_PRIMARY: Color = Color::White;
    pub const TEXT_SECONDARY: Color = Color::Gray;
    pub const BORDER_DIM: Color = Color::DarkGray;

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT_TEAL)
    }

    pub fn border_type() -> BorderType {
        BorderType::Plain
    }

    pub fn border_type_focused() -> BorderType {
        BorderType::Rounded
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn header() -> Style {
        Style::default()
            .fg(Self::ACCENT_TEAL)
            .add_modifier(Modifier::BOLD)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn error_message() -> Style {
        Style::default().fg(Self::ERROR_RED)
    }

    pub fn button() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn button_focused() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Self::ACCENT_TEAL)
            .add_modifier(Modifier::BOLD)
    }

    pub fn result_label() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn result_value() -> Style {
        Style::default().fg(Self::ACCENT_GREEN)
    }

    pub fn hint() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn key_hint() -> Style {
        Style::default()
            .fg(Self::ACCENT_AMBER)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }
}
