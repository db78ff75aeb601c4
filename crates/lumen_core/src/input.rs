//! Input events as seen by a session, independent of the windowing library.

use lumen_math::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other,
}

/// Keys the session reacts to. Everything else maps to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// One more bounce
    Up,
    /// One bounce fewer
    Down,
    /// Quit
    Escape,
    Other,
}

/// One discrete input event. Positions are logical pixels in scene space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Quit,
    MouseDown { button: MouseButton, position: Vec2 },
    MouseUp { button: MouseButton, position: Vec2 },
    MouseMove { position: Vec2 },
    /// Signed whole wheel lines, positive away from the user.
    Scroll { delta: i32 },
    KeyDown { key: Key },
}
