use serde::{Deserialize, Serialize};

use super::{Facing, GroundTimer, VerticalMotion};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackKind {
    Normal,
    Heavy,
}

/// Everything other gameplay systems read about the character this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerState {
    pub(crate) facing: Facing,
    pub(crate) can_move: bool,
    pub(crate) is_user_moving: bool,
    pub(crate) is_crouching: bool,
    pub(crate) motion: VerticalMotion,
    pub(crate) is_jump_cut: bool,
    pub(crate) attack: Option<AttackKind>,
    pub(crate) is_grounded: bool,
    pub(crate) ground_timer: GroundTimer,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            facing: Facing::Right,
            can_move: true,
            is_user_moving: false,
            is_crouching: false,
            motion: VerticalMotion::Grounded,
            is_jump_cut: false,
            attack: None,
            is_grounded: false,
            ground_timer: GroundTimer::default(),
        }
    }
}

impl PlayerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn facing_right(&self) -> bool {
        self.facing.is_right()
    }

    pub fn can_move(&self) -> bool {
        self.can_move
    }

    pub fn is_user_moving(&self) -> bool {
        self.is_user_moving
    }

    pub fn is_crouching(&self) -> bool {
        self.is_crouching
    }

    pub fn motion(&self) -> VerticalMotion {
        self.motion
    }

    pub fn is_jumping(&self) -> bool {
        self.motion.is_jumping()
    }

    pub fn is_falling(&self) -> bool {
        self.motion.is_falling()
    }

    pub fn is_jump_cut(&self) -> bool {
        self.is_jump_cut
    }

    pub fn attack(&self) -> Option<AttackKind> {
        self.attack
    }

    pub fn is_normal_attack(&self) -> bool {
        self.attack == Some(AttackKind::Normal)
    }

    pub fn is_heavy_attack(&self) -> bool {
        self.attack == Some(AttackKind::Heavy)
    }

    pub fn is_attacking(&self) -> bool {
        self.attack.is_some()
    }

    pub fn is_grounded(&self) -> bool {
        self.is_grounded
    }

    /// Seconds left in the post-ground jump window.
    pub fn last_on_ground_time(&self) -> f32 {
        self.ground_timer.remaining()
    }

    pub fn can_jump(&self) -> bool {
        self.ground_timer.is_open() && !self.is_jumping()
    }

    pub fn can_jump_cut(&self, vertical_velocity: f32) -> bool {
        vertical_velocity > 0.0 && self.is_jumping()
    }

    pub fn flags(&self) -> StateFlags {
        StateFlags::from(self)
    }
}

/// Flat, serializable view of [`PlayerState`] as seen through its accessors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StateFlags {
    pub facing_right: bool,
    pub can_move: bool,
    pub is_user_moving: bool,
    pub is_crouching: bool,
    pub is_jumping: bool,
    pub is_falling: bool,
    pub is_jump_cut: bool,
    pub is_normal_attack: bool,
    pub is_heavy_attack: bool,
    pub is_grounded: bool,
    pub last_on_ground_time: f32,
}

impl From<&PlayerState> for StateFlags {
    fn from(state: &PlayerState) -> Self {
        Self {
            facing_right: state.facing_right(),
            can_move: state.can_move(),
            is_user_moving: state.is_user_moving(),
            is_crouching: state.is_crouching(),
            is_jumping: state.is_jumping(),
            is_falling: state.is_falling(),
            is_jump_cut: state.is_jump_cut(),
            is_normal_attack: state.is_normal_attack(),
            is_heavy_attack: state.is_heavy_attack(),
            is_grounded: state.is_grounded(),
            last_on_ground_time: state.last_on_ground_time(),
        }
    }
}
