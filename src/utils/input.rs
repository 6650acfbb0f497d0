use crate::slider::input::PointerAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Quit,
    CycleTheme,

    /// Mouse activity in window cells.
    Pointer { col: u16, row: u16, action: PointerAction },

    /// The terminal lost focus or changed size mid-gesture.
    CancelPointer,

    None,
}

pub fn map_key(ev: KeyEvent) -> Action {
    if ev.kind == KeyEventKind::Release {
        return Action::None;
    }

    if ev.modifiers.contains(KeyModifiers::CONTROL) {
        return match ev.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Action::Quit,
            _ => Action::None,
        };
    }

    match ev.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('t') | KeyCode::Char('T') => Action::CycleTheme,
        _ => Action::None,
    }
}

pub fn map_mouse(ev: MouseEvent) -> Action {
    let action = match ev.kind {
        MouseEventKind::Down(MouseButton::Left) => PointerAction::Press,
        MouseEventKind::Drag(MouseButton::Left) => PointerAction::Move,
        MouseEventKind::Up(MouseButton::Left) => PointerAction::Release,
        // hover, scroll and other buttons
        _ => PointerAction::Other,
    };
    Action::Pointer {
        col: ev.column,
        row: ev.row,
        action,
    }
}
