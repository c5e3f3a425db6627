//! Per-tick input latch
//!
//! The binding layer pushes discrete action events and axis values whenever it
//! receives them; the controller takes exactly one [`FrameInput`] snapshot per
//! tick. Look deltas accumulate between ticks and are zeroed when taken, so a
//! tick never sees the same mouse motion twice.

use glam::Vec2;

/// Discrete start/stop events delivered by the binding layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionEvent {
    JumpStarted,
    JumpCanceled,
    SprintStarted,
    SprintCanceled,
    CrouchStarted,
    CrouchCanceled,
}

/// Input consumed by a single tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// Movement axes: x = strafe (right positive), y = forward
    pub move_axis: Vec2,
    /// Look delta accumulated since the previous tick, in degrees
    pub look_delta: Vec2,
    /// Jump went down since the previous tick
    pub jump_pressed: bool,
    /// Jump is currently held
    pub jump_held: bool,
    /// Sprint is currently held
    pub sprint_held: bool,
    /// Crouch went down since the previous tick
    pub crouch_pressed: bool,
    /// Crouch went up since the previous tick
    pub crouch_released: bool,
    /// Crouch is currently held
    pub crouch_held: bool,
}

impl FrameInput {
    /// True when the movement axes are large enough to count as intent.
    #[inline]
    pub fn has_move_intent(&self) -> bool {
        self.move_axis.length_squared() >= 0.01
    }
}

/// Accumulates input between ticks.
///
/// # Example
///
/// ```rust,ignore
/// let mut latch = InputLatch::new();
///
/// // From the binding layer, any number of times per tick:
/// latch.push(ActionEvent::JumpStarted);
/// latch.accumulate_look(Vec2::new(3.0, -1.0));
///
/// // Once per tick:
/// let input = latch.take_frame();
/// ```
#[derive(Debug, Clone, Default)]
pub struct InputLatch {
    move_axis: Vec2,
    look_delta: Vec2,
    jump_held: bool,
    sprint_held: bool,
    crouch_held: bool,
    jump_pressed: bool,
    crouch_pressed: bool,
    crouch_released: bool,
}

impl InputLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a discrete action event.
    pub fn push(&mut self, event: ActionEvent) {
        match event {
            ActionEvent::JumpStarted => {
                self.jump_pressed = true;
                self.jump_held = true;
            }
            ActionEvent::JumpCanceled => self.jump_held = false,
            ActionEvent::SprintStarted => self.sprint_held = true,
            ActionEvent::SprintCanceled => self.sprint_held = false,
            ActionEvent::CrouchStarted => {
                self.crouch_pressed = true;
                self.crouch_held = true;
            }
            ActionEvent::CrouchCanceled => {
                self.crouch_released = true;
                self.crouch_held = false;
            }
        }
    }

    /// Replace the movement axes. Each component is clamped to [-1, 1].
    #[inline]
    pub fn set_move_axis(&mut self, axis: Vec2) {
        self.move_axis = axis.clamp(Vec2::NEG_ONE, Vec2::ONE);
    }

    /// Add raw look motion. Deltas accumulate until the next [`take_frame`](Self::take_frame).
    #[inline]
    pub fn accumulate_look(&mut self, delta: Vec2) {
        self.look_delta += delta;
    }

    /// Current accumulated look delta without consuming it.
    #[inline]
    pub fn peek_look(&self) -> Vec2 {
        self.look_delta
    }

    /// Snapshot this tick's input, then clear edge flags and look delta.
    pub fn take_frame(&mut self) -> FrameInput {
        let frame = FrameInput {
            move_axis: self.move_axis,
            look_delta: self.look_delta,
            jump_pressed: self.jump_pressed,
            jump_held: self.jump_held,
            sprint_held: self.sprint_held,
            crouch_pressed: self.crouch_pressed,
            crouch_released: self.crouch_released,
            crouch_held: self.crouch_held,
        };
        self.look_delta = Vec2::ZERO;
        self.jump_pressed = false;
        self.crouch_pressed = false;
        self.crouch_released = false;
        frame
    }

    /// Drop all held state, e.g. when focus is lost.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
