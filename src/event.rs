use crate::geometry::{Position, Size};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// A key press after modifiers have been folded in.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Key {
    Char(char),
    Ctrl(char),
    Alt(char),
    Tab,
    BackTab,
    Esc,
    Enter,
    Up,
    Down,
    Left,
    Right,
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum PointerKind {
    Down,
    Up,
    Drag,
    Move,
    ScrollUp,
    ScrollDown,
}

/// A primary button or wheel event at a cell of the terminal.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct PointerEvent {
    kind: PointerKind,
    position: Position,
}

#[derive(Clone, PartialEq, Debug)]
pub enum InputEvent {
    Key(Key),
    Pointer(PointerEvent),
    Resize(Size),
}

impl PointerEvent {
    pub fn new(kind: PointerKind, position: Position) -> Self {
        return Self { kind, position };
    }

    pub fn kind(&self) -> PointerKind {
        return self.kind;
    }

    pub fn position(&self) -> Position {
        return self.position;
    }
}

impl Key {
    pub fn from_crossterm(event: &KeyEvent) -> Option<Self> {
        if event.kind != KeyEventKind::Press {
            return None;
        }

        return match event.code {
            KeyCode::Char(ch) if event.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Key::Ctrl(ch.to_ascii_lowercase()))
            }
            KeyCode::Char(ch) if event.modifiers.contains(KeyModifiers::ALT) => Some(Key::Alt(ch)),
            KeyCode::Char(ch) => Some(Key::Char(ch)),
            KeyCode::Tab => Some(Key::Tab),
            KeyCode::BackTab => Some(Key::BackTab),
            KeyCode::Esc => Some(Key::Esc),
            KeyCode::Enter => Some(Key::Enter),
            KeyCode::Up => Some(Key::Up),
            KeyCode::Down => Some(Key::Down),
            KeyCode::Left => Some(Key::Left),
            KeyCode::Right => Some(Key::Right),
            _ => None,
        };
    }
}

impl PointerEvent {
    /// Only the left button drives gestures, other buttons are ignored.
    pub fn from_crossterm(event: &MouseEvent) -> Option<Self> {
        let kind = match event.kind {
            MouseEventKind::Down(MouseButton::Left) => PointerKind::Down,
            MouseEventKind::Up(MouseButton::Left) => PointerKind::Up,
            MouseEventKind::Drag(MouseButton::Left) => PointerKind::Drag,
            MouseEventKind::Moved => PointerKind::Move,
            MouseEventKind::ScrollUp => PointerKind::ScrollUp,
            MouseEventKind::ScrollDown => PointerKind::ScrollDown,
            _ => return None,
        };

        return Some(Self::new(
            kind,
            Position::from_cell(event.column, event.row),
        ));
    }
}

impl InputEvent {
    pub fn from_crossterm(event: Event) -> Option<Self> {
        return match event {
            Event::Key(key) => Key::from_crossterm(&key).map(InputEvent::Key),
            Event::Mouse(mouse) => PointerEvent::from_crossterm(&mouse).map(InputEvent::Pointer),
            Event::Resize(cols, rows) => Some(InputEvent::Resize(Size::new(rows, cols))),
            _ => None,
        };
    }
}
