use bitflags::bitflags;
use rapier3d::prelude::{Group, InteractionGroups};
use serde::{Deserialize, Serialize};

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct CollisionLayers: u32 {
        const DEFAULT = 1 << 0;
        const GROUND = 1 << 1;
        const PLAYER = 1 << 2;
        const ENEMY = 1 << 3;
        const PROP = 1 << 4;
    }
}

impl Default for CollisionLayers {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl CollisionLayers {
    pub fn group(self) -> Group {
        Group::from_bits_truncate(self.bits())
    }

    pub fn interaction_groups(self) -> InteractionGroups {
        InteractionGroups {
            memberships: self.group(),
            filter: Group::ALL,
            ..InteractionGroups::all()
        }
    }

    pub fn matches(self, groups: InteractionGroups) -> bool {
        groups.memberships.intersects(self.group())
    }
}
