//! Window events to grid actions.

use std::collections::HashSet;

use winit::event::{ElementState, KeyboardInput, MouseButton, VirtualKeyCode};

use crate::calculator::Point;

pub struct InputHandler {
    pressed_keys: HashSet<VirtualKeyCode>,
    cursor: Option<Point>,
    button_down: bool,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            pressed_keys: HashSet::new(),
            cursor: None,
            button_down: false,
        }
    }

    pub fn cursor(&self) -> Option<Point> {
        self.cursor
    }

    pub fn handle_cursor_moved(&mut self, x: f64, y: f64) -> InputAction {
        let point = Point::new(x, y);
        self.cursor = Some(point);

        if self.button_down {
            InputAction::Drag(point)
        } else {
            InputAction::None
        }
    }

    pub fn handle_cursor_left(&mut self) -> InputAction {
        self.cursor = None;

        if self.button_down {
            self.button_down = false;
            InputAction::Cancel
        } else {
            InputAction::None
        }
    }

    pub fn handle_mouse_input(&mut self, state: ElementState, button: MouseButton) -> InputAction {
        if button != MouseButton::Left {
            return InputAction::None;
        }

        // Without a known cursor position there is no cell to act on.
        let Some(point) = self.cursor else {
            return InputAction::None;
        };

        match state {
            ElementState::Pressed => {
                self.button_down = true;
                InputAction::Press(point)
            }
            ElementState::Released if self.button_down => {
                self.button_down = false;
                InputAction::Release(point)
            }
            ElementState::Released => InputAction::None,
        }
    }

    pub fn handle_keyboard_input(&mut self, input: &KeyboardInput) -> InputAction {
        match input.virtual_keycode {
            Some(key_code) => self.handle_key(key_code, input.state),
            None => InputAction::None,
        }
    }

    pub fn handle_key(&mut self, key_code: VirtualKeyCode, state: ElementState) -> InputAction {
        match state {
            ElementState::Pressed => {
                // Ignore auto-repeat
                if !self.pressed_keys.insert(key_code) {
                    return InputAction::None;
                }
                self.handle_key_press(key_code)
            }
            ElementState::Released => {
                self.pressed_keys.remove(&key_code);
                InputAction::None
            }
        }
    }

    fn handle_key_press(&mut self, key_code: VirtualKeyCode) -> InputAction {
        match key_code {
            VirtualKeyCode::Escape if self.button_down => {
                self.button_down = false;
                InputAction::Cancel
            }
            VirtualKeyCode::Escape => InputAction::Exit,
            VirtualKeyCode::C | VirtualKeyCode::Delete => InputAction::ClearGrid,
            _ => InputAction::None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputAction {
    None,
    Press(Point),
    Drag(Point),
    Release(Point),
    Cancel,
    ClearGrid,
    Exit,
}
