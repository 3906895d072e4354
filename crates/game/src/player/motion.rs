use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum VerticalMotion {
    #[default]
    Grounded,
    Jumping,
    Falling,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotionSignal {
    /// Per-tick reclassification from the ground check and body velocity.
    Tick {
        grounded: bool,
        vertical_velocity: f32,
    },
    /// The movement component has just launched a jump.
    JumpStarted,
}

impl VerticalMotion {
    /// The only place `Jumping` is entered or left. Ground contact always wins
    /// on a tick, so an eager `JumpStarted` lasts until the body is airborne
    /// or the next tick finds it still on the ground.
    pub fn transition(self, signal: MotionSignal) -> Self {
        match signal {
            MotionSignal::JumpStarted => Self::Jumping,
            MotionSignal::Tick { grounded: true, .. } => Self::Grounded,
            MotionSignal::Tick {
                vertical_velocity, ..
            } if vertical_velocity > 0.0 => Self::Jumping,
            MotionSignal::Tick { .. } => Self::Falling,
        }
    }

    pub fn is_grounded(self) -> bool {
        matches!(self, Self::Grounded)
    }

    pub fn is_jumping(self) -> bool {
        matches!(self, Self::Jumping)
    }

    pub fn is_falling(self) -> bool {
        matches!(self, Self::Falling)
    }
}

pub fn is_user_moving(grounded: bool, horizontal_input: f32, horizontal_velocity: f32) -> bool {
    grounded && horizontal_input != 0.0 && horizontal_velocity != 0.0
}

/// Time left in which a jump still counts as leaving the ground.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GroundTimer {
    remaining: f32,
}

impl GroundTimer {
    pub fn update(&mut self, grounded: bool, window: f32, dt: f32) {
        if grounded {
            self.remaining = window;
        } else {
            self.remaining = (self.remaining - dt).max(0.0);
        }
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    pub fn is_open(&self) -> bool {
        self.remaining > 0.0
    }
}
