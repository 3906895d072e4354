use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    pub fn is_right(self) -> bool {
        matches!(self, Self::Right)
    }

    /// Facing implied by a horizontal axis value. Zero keeps the current one.
    pub fn follow(self, axis: f32) -> Self {
        if axis > 0.0 {
            Self::Right
        } else if axis < 0.0 {
            Self::Left
        } else {
            self
        }
    }
}
