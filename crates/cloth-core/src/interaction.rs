use crate::config::InteractionConfig;
use crate::error::ClothError;
use crate::input::{Button, HostCommand, InputEvent, Key};
use glam::Vec2;

/// What the pointer does to the cloth this frame. Exactly one applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionMode {
    Idle,
    /// Left button: pull nearby particles toward the pointer.
    Drag,
    /// Left button held across frames: drag plus an accumulated push.
    ForcePush,
    /// Left button with ctrl: cut every constraint touching the radius.
    Tear,
    /// Right button: track the selection point only.
    Select,
}

/// Pointer state for the single active pointer.
///
/// Folded from [`InputEvent`]s before each physics step; the cloth only
/// reads it.
#[derive(Clone, Debug)]
pub struct Interaction {
    position: Vec2,
    /// Pointer position at the start of the current frame.
    previous: Vec2,
    /// Set when the pointer moved with the left button down this frame.
    dragging: bool,
    left_down: bool,
    right_down: bool,
    ctrl_down: bool,
    /// Seconds the left button has been held.
    hold_time: f32,
    force: f32,
    radius: f32,
    selection: Option<Vec2>,
    config: InteractionConfig,
}

impl Interaction {
    /// Validate `config` and start idle at the configured radius.
    pub fn new(config: InteractionConfig) -> Result<Self, ClothError> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    fn from_valid(config: InteractionConfig) -> Self {
        Self {
            position: Vec2::ZERO,
            previous: Vec2::ZERO,
            dragging: false,
            left_down: false,
            right_down: false,
            ctrl_down: false,
            hold_time: 0.0,
            force: 0.0,
            radius: config.radius,
            selection: None,
            config,
        }
    }

    /// Fold one event into the state.
    pub fn apply_event(&mut self, event: &InputEvent) -> Option<HostCommand> {
        match *event {
            InputEvent::Moved { x, y } => {
                self.position = Vec2::new(x, y);
                if self.left_down {
                    self.dragging = true;
                }
                if self.right_down {
                    self.selection = Some(self.position);
                }
                None
            }
            InputEvent::ButtonChanged {
                button,
                pressed: true,
                ctrl,
            } => {
                match button {
                    Button::Left => {
                        if !self.left_down {
                            self.hold_time = 0.0;
                            self.force = 0.0;
                        }
                        self.left_down = true;
                        self.ctrl_down = ctrl;
                    }
                    Button::Right => {
                        self.right_down = true;
                        self.selection = Some(self.position);
                    }
                }
                None
            }
            InputEvent::ButtonChanged {
                button,
                pressed: false,
                ..
            } => {
                match button {
                    Button::Left => {
                        self.left_down = false;
                        self.ctrl_down = false;
                        self.dragging = false;
                        self.reset_force();
                    }
                    Button::Right => self.right_down = false,
                }
                None
            }
            InputEvent::Scrolled { dy } => {
                if dy.is_finite() {
                    self.radius = (self.radius + dy).clamp(0.0, self.config.max_radius);
                }
                None
            }
            InputEvent::KeyPressed(Key::Escape) => Some(HostCommand::Close),
            InputEvent::KeyPressed(Key::Space) => Some(HostCommand::Reset),
            InputEvent::KeyPressed(Key::Other) => None,
        }
    }

    /// Bookkeeping after the physics step: grow the hold force while the
    /// left button stays down and start the next frame's pointer delta.
    pub fn end_frame(&mut self, dt: f32) {
        if self.left_down {
            self.hold_time += dt.max(0.0);
            self.force = (self.hold_time * self.config.force_rate).min(self.config.max_force);
        }
        self.previous = self.position;
        self.dragging = false;
    }

    pub fn reset_force(&mut self) {
        self.hold_time = 0.0;
        self.force = 0.0;
    }

    pub fn mode(&self) -> InteractionMode {
        if self.left_down {
            if self.ctrl_down {
                InteractionMode::Tear
            } else if self.force > 0.0 {
                InteractionMode::ForcePush
            } else {
                InteractionMode::Drag
            }
        } else if self.right_down {
            InteractionMode::Select
        } else {
            InteractionMode::Idle
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Pointer movement since the start of the frame.
    pub fn motion(&self) -> Vec2 {
        self.position - self.previous
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn left_down(&self) -> bool {
        self.left_down
    }

    pub fn right_down(&self) -> bool {
        self.right_down
    }

    pub fn ctrl_down(&self) -> bool {
        self.ctrl_down
    }

    pub fn force(&self) -> f32 {
        self.force
    }

    pub fn hold_time(&self) -> f32 {
        self.hold_time
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn max_radius(&self) -> f32 {
        self.config.max_radius
    }

    /// Last point picked with the right button.
    pub fn selection(&self) -> Option<Vec2> {
        self.selection
    }
}

impl Default for Interaction {
    fn default() -> Self {
        Self::from_valid(InteractionConfig::default())
    }
}
