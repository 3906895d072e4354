use serde::{Deserialize, Serialize};

use crate::player::{AttackKind, Facing};

/// Intents raised by the movement, combat and input components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerEvent {
    JumpStarted,
    JumpReleased,
    CrouchStarted,
    CrouchEnded,
    AttackStarted(AttackKind),
    AttackEnded,
}

impl PlayerEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::JumpStarted => "jump-started",
            Self::JumpReleased => "jump-released",
            Self::CrouchStarted => "crouch-started",
            Self::CrouchEnded => "crouch-ended",
            Self::AttackStarted(AttackKind::Normal) => "normal-attack-started",
            Self::AttackStarted(AttackKind::Heavy) => "heavy-attack-started",
            Self::AttackEnded => "attack-ended",
        }
    }
}

/// Changes the tracker reports to its subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StateEvent {
    DirectionChanged { facing: Facing },
    MovementRestored,
}
