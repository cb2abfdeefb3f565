use crate::ui::app::App;
use crate::ui::directory::DirectoryIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press asks for.
#[derive(Debug, Clone, PartialEq)]
pub enum InputAction {
    None,
    Quit,
    Dispatch(DirectoryIntent),
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    match map_key(key, app.directory().detail_open) {
        InputAction::None => {}
        InputAction::Quit => app.request_quit(),
        InputAction::Dispatch(intent) => app.dispatch(intent),
    }
}

/// Key bindings. Printable characters always go to the search box.
pub fn map_key(key: KeyEvent, detail_open: bool) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    if is_ctrl_char(key, 'c') || is_ctrl_char(key, 'q') {
        return InputAction::Quit;
    }
    if is_ctrl_char(key, 'u') {
        return InputAction::Dispatch(DirectoryIntent::ClearQuery);
    }
    if is_ctrl_char(key, 'n') {
        return InputAction::Dispatch(DirectoryIntent::LoadMore);
    }

    let intent = match key.code {
        KeyCode::Esc if detail_open => DirectoryIntent::CloseDetail,
        KeyCode::Esc => return InputAction::Quit,
        KeyCode::Enter => DirectoryIntent::ToggleDetail,
        KeyCode::PageDown => DirectoryIntent::LoadMore,
        KeyCode::Up => DirectoryIntent::SelectPrevious,
        KeyCode::Down => DirectoryIntent::SelectNext,
        KeyCode::Left | KeyCode::BackTab => DirectoryIntent::PreviousRegion,
        KeyCode::Right | KeyCode::Tab => DirectoryIntent::NextRegion,
        KeyCode::Backspace => DirectoryIntent::DeleteChar,
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            DirectoryIntent::InsertChar(ch)
        }
        _ => return InputAction::None,
    };
    InputAction::Dispatch(intent)
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
