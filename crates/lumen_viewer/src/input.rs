//! Translation from winit window events to session input events.

use lumen_core::{InputEvent, Key, MouseButton};
use lumen_math::Vec2;
use winit::{
    dpi::PhysicalPosition,
    event::{ElementState, KeyEvent, MouseScrollDelta, WindowEvent},
    keyboard::{KeyCode, PhysicalKey},
};

/// Pixels of a touchpad scroll that count as one wheel line.
const PIXELS_PER_LINE: f64 = 40.0;

/// Tracks what winit does not repeat on every event.
#[derive(Debug)]
pub struct InputState {
    scale_factor: f64,
    /// Last cursor position in logical pixels; button events carry none.
    cursor: Vec2,
}

impl InputState {
    pub fn new(scale_factor: f64) -> Self {
        Self {
            scale_factor,
            cursor: Vec2::ZERO,
        }
    }

    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        self.scale_factor = scale_factor;
    }

    /// Map a window event to a session event, if the session cares about it.
    pub fn translate(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::CloseRequested => Some(InputEvent::Quit),
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = to_logical(*position, self.scale_factor);
                Some(InputEvent::MouseMove {
                    position: self.cursor,
                })
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let button = mouse_button(*button);
                let position = self.cursor;
                Some(match state {
                    ElementState::Pressed => InputEvent::MouseDown { button, position },
                    ElementState::Released => InputEvent::MouseUp { button, position },
                })
            }
            WindowEvent::MouseWheel { delta, .. } => match scroll_lines(*delta) {
                0 => None,
                delta => Some(InputEvent::Scroll { delta }),
            },
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key,
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => Some(InputEvent::KeyDown {
                key: key(*physical_key),
            }),
            _ => None,
        }
    }
}

fn to_logical(position: PhysicalPosition<f64>, scale_factor: f64) -> Vec2 {
    let logical = position.to_logical::<f64>(scale_factor);
    Vec2::new(logical.x as f32, logical.y as f32)
}

fn mouse_button(button: winit::event::MouseButton) -> MouseButton {
    match button {
        winit::event::MouseButton::Left => MouseButton::Left,
        winit::event::MouseButton::Right => MouseButton::Right,
        winit::event::MouseButton::Middle => MouseButton::Middle,
        _ => MouseButton::Other,
    }
}

fn key(physical_key: PhysicalKey) -> Key {
    match physical_key {
        PhysicalKey::Code(KeyCode::ArrowUp) => Key::Up,
        PhysicalKey::Code(KeyCode::ArrowDown) => Key::Down,
        PhysicalKey::Code(KeyCode::Escape) => Key::Escape,
        _ => Key::Other,
    }
}

/// Whole wheel lines in a scroll delta, positive away from the user.
pub fn scroll_lines(delta: MouseScrollDelta) -> i32 {
    let lines = match delta {
        MouseScrollDelta::LineDelta(_, y) => f64::from(y),
        MouseScrollDelta::PixelDelta(pos) => pos.y / PIXELS_PER_LINE,
    };
    lines.round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_lines() {
        assert_eq!(scroll_lines(MouseScrollDelta::LineDelta(0.0, 1.0)), 1);
        assert_eq!(scroll_lines(MouseScrollDelta::LineDelta(0.0, -2.0)), -2);
        assert_eq!(
            scroll_lines(MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, 80.0))),
            2
        );
        assert_eq!(
            scroll_lines(MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, 10.0))),
            0
        );
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(key(PhysicalKey::Code(KeyCode::ArrowUp)), Key::Up);
        assert_eq!(key(PhysicalKey::Code(KeyCode::ArrowDown)), Key::Down);
        assert_eq!(key(PhysicalKey::Code(KeyCode::Escape)), Key::Escape);
        assert_eq!(key(PhysicalKey::Code(KeyCode::KeyF)), Key::Other);
    }

    #[test]
    fn test_cursor_to_logical() {
        let p = to_logical(PhysicalPosition::new(200.0, 100.0), 2.0);
        assert_eq!(p, Vec2::new(100.0, 50.0));
    }

    #[test]
    fn test_close_requested_is_quit() {
        let mut input = InputState::new(1.0);
        assert_eq!(input.translate(&WindowEvent::CloseRequested), Some(InputEvent::Quit));
    }
}
