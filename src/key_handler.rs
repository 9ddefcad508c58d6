use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

#[derive(Debug, Clone, PartialEq)]
pub enum KeyAction {
    Quit,
    Back,
    NextView,
    NavigateUp,
    NavigateDown,
    NavigateLeft,
    NavigateRight,
    ScrollPageUp,
    ScrollPageDown,
    Select,
    Help,
    NextCategory,
    PrevCategory,
    /// Digit shortcut; 0 selects "all".
    Category(u8),
    /// Left button pressed at a terminal column.
    PointerDown(u16),
    /// Left button released at a terminal column.
    PointerUp(u16),
    WheelUp,
    WheelDown,
    /// No input before the poll timeout; drives animations.
    Tick,
    None,
}

#[derive(Debug, Default)]
pub struct KeyHandler;

impl KeyHandler {
    pub fn new() -> Self {
        Self
    }

    /// Waits up to `timeout` for an event and maps it to an action.
    pub fn handle_crossterm_events(&mut self, timeout: Duration) -> color_eyre::Result<KeyAction> {
        if !event::poll(timeout)? {
            return Ok(KeyAction::Tick);
        }
        match event::read()? {
            // it's important to check KeyEventKind::Press to avoid handling key release events
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(self.on_key_event(key)),
            Event::Mouse(mouse) => Ok(self.on_mouse_event(mouse)),
            Event::Resize(_, _) => Ok(KeyAction::None),
            _ => Ok(KeyAction::None),
        }
    }

    pub fn on_key_event(&mut self, key: KeyEvent) -> KeyAction {
        match (key.modifiers, key.code) {
            (KeyModifiers::NONE, KeyCode::Esc) => KeyAction::Back,
            (_, KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => KeyAction::Quit,
            (_, KeyCode::Char('?')) => KeyAction::Help,
            (KeyModifiers::NONE, KeyCode::Tab) => KeyAction::NextView,
            (KeyModifiers::NONE, KeyCode::Up | KeyCode::Char('k')) => KeyAction::NavigateUp,
            (KeyModifiers::NONE, KeyCode::Down | KeyCode::Char('j')) => KeyAction::NavigateDown,
            (KeyModifiers::NONE, KeyCode::Left | KeyCode::Char('h')) => KeyAction::NavigateLeft,
            (KeyModifiers::NONE, KeyCode::Right | KeyCode::Char('l')) => KeyAction::NavigateRight,
            (KeyModifiers::NONE, KeyCode::PageUp) => KeyAction::ScrollPageUp,
            (KeyModifiers::NONE, KeyCode::PageDown) => KeyAction::ScrollPageDown,
            (KeyModifiers::NONE, KeyCode::Enter) => KeyAction::Select,
            (_, KeyCode::Char(']')) => KeyAction::NextCategory,
            (_, KeyCode::Char('[')) => KeyAction::PrevCategory,
            (KeyModifiers::NONE, KeyCode::Char(c)) if c.is_ascii_digit() => {
                KeyAction::Category(c as u8 - b'0')
            }
            _ => KeyAction::None,
        }
    }

    pub fn on_mouse_event(&mut self, mouse: MouseEvent) -> KeyAction {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => KeyAction::PointerDown(mouse.column),
            MouseEventKind::Up(MouseButton::Left) => KeyAction::PointerUp(mouse.column),
            MouseEventKind::ScrollUp => KeyAction::WheelUp,
            MouseEventKind::ScrollDown => KeyAction::WheelDown,
            _ => KeyAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn mouse(kind: MouseEventKind, column: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row: 0,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_digits_select_categories() {
        let mut handler = KeyHandler::new();
        assert_eq!(handler.on_key_event(press(KeyCode::Char('0'))), KeyAction::Category(0));
        assert_eq!(handler.on_key_event(press(KeyCode::Char('3'))), KeyAction::Category(3));
    }

    #[test]
    fn test_vim_keys_navigate() {
        let mut handler = KeyHandler::new();
        assert_eq!(handler.on_key_event(press(KeyCode::Char('h'))), KeyAction::NavigateLeft);
        assert_eq!(handler.on_key_event(press(KeyCode::Char('l'))), KeyAction::NavigateRight);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut handler = KeyHandler::new();
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handler.on_key_event(key), KeyAction::Quit);
    }

    #[test]
    fn test_brackets_cycle_categories() {
        let mut handler = KeyHandler::new();
        assert_eq!(handler.on_key_event(press(KeyCode::Char(']'))), KeyAction::NextCategory);
        assert_eq!(handler.on_key_event(press(KeyCode::Char('['))), KeyAction::PrevCategory);
    }

    #[test]
    fn test_left_drag_maps_to_pointer_events() {
        let mut handler = KeyHandler::new();
        assert_eq!(
            handler.on_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 40)),
            KeyAction::PointerDown(40)
        );
        assert_eq!(
            handler.on_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), 10)),
            KeyAction::PointerUp(10)
        );
        assert_eq!(
            handler.on_mouse_event(mouse(MouseEventKind::Down(MouseButton::Right), 10)),
            KeyAction::None
        );
    }

    #[test]
    fn test_wheel_scrolls() {
        let mut handler = KeyHandler::new();
        assert_eq!(
            handler.on_mouse_event(mouse(MouseEventKind::ScrollDown, 0)),
            KeyAction::WheelDown
        );
    }
}
