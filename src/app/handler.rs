use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Global keybindings
    if key.code == KeyCode::Esc || (ctrl && key.code == KeyCode::Char('c')) {
        return vec![Action::Quit];
    }
    if ctrl && key.code == KeyCode::Char('s') {
        return submit(state);
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            state.focus_next();
            return vec![];
        }
        KeyCode::BackTab | KeyCode::Up => {
            state.focus_prev();
            return vec![];
        }
        _ => {}
    }

    match state.focus {
        Focus::Field(field) => {
            if key.code == KeyCode::Enter {
                state.focus_next();
            } else {
                state.edit_field(field, |input| handle_input_key(input, key));
            }
            vec![]
        }
        Focus::Submit => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => submit(state),
            _ => vec![],
        },
    }
}

/// Run the full validation pass. Focus stays where it is and the fields keep
/// their values whatever the outcome.
fn submit(state: &mut AppState) -> Vec<Action> {
    state.dirty = true;
    match state.form.on_submit() {
        Ok(snapshot) => vec![Action::Submitted(snapshot)],
        Err(_) => vec![],
    }
}

/// Returns whether the input text changed. Cursor moves alone are not changes.
fn handle_input_key(input: &mut InputState, key: KeyEvent) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('w') if ctrl => input.delete_word_back(),
        KeyCode::Char('u') if ctrl => input.clear(),
        KeyCode::Char(_) if ctrl || key.modifiers.contains(KeyModifiers::ALT) => false,
        KeyCode::Char(c) => {
            input.insert_char(c);
            true
        }
        KeyCode::Backspace => input.delete_back(),
        KeyCode::Delete => input.delete_forward(),
        KeyCode::Left => {
            input.move_left();
            false
        }
        KeyCode::Right => {
            input.move_right();
            false
        }
        KeyCode::Home => {
            input.move_home();
            false
        }
        KeyCode::End => {
            input.move_end();
            false
        }
        _ => false,
    }
}
