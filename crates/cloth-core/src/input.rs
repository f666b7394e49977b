//! Host-independent input events.
//!
//! The host translates its own pointer and keyboard events into these
//! variants and hands them to the session once per frame, before physics.

use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Button {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    Space,
    /// Any key the simulation does not react to.
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Pointer moved to `(x, y)` in the cloth's pixel space.
    Moved { x: f32, y: f32 },
    /// A button went down (`pressed`) or up. `ctrl` is the modifier state
    /// at the time of the change.
    ButtonChanged {
        button: Button,
        pressed: bool,
        ctrl: bool,
    },
    /// Vertical scroll delta in pixels.
    Scrolled { dy: f32 },
    KeyPressed(Key),
}

impl InputEvent {
    pub fn moved(pos: Vec2) -> Self {
        Self::Moved { x: pos.x, y: pos.y }
    }

    pub fn press(button: Button) -> Self {
        Self::ButtonChanged {
            button,
            pressed: true,
            ctrl: false,
        }
    }

    pub fn ctrl_press(button: Button) -> Self {
        Self::ButtonChanged {
            button,
            pressed: true,
            ctrl: true,
        }
    }

    pub fn release(button: Button) -> Self {
        Self::ButtonChanged {
            button,
            pressed: false,
            ctrl: false,
        }
    }
}

/// Requests the simulation hands back to the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostCommand {
    /// Re-drop the cloth at its current origin.
    Reset,
    /// Close the window and stop the frame loop.
    Close,
}
