mod form_view;
mod layout;
mod results;
mod status_bar;
mod theme;

use crate::app::state::AppState;
use crate::form::Field;
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let ui = &state.config.ui;
    let app_layout = layout::compute_layout(frame.area(), ui.show_help, ui.show_status_bar);

    form_view::render_header(frame, app_layout.header);
    for field in Field::ALL {
        form_view::render_field(frame, app_layout.fields[field.index()], field, state);
    }
    form_view::render_submit(frame, app_layout.submit, state);
    if ui.show_help {
        form_view::render_help(frame, app_layout.help);
    }
    results::render(frame, app_layout.results, state);
    if ui.show_status_bar {
        status_bar::render(frame, app_layout.status_bar, state);
    }
}
