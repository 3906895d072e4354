use glam::Vec3;
use rapier3d::prelude::ColliderHandle;

use crate::physics::{CharacterPhysics, CollisionLayers};

pub const GROUND_QUERY_CAPACITY: usize = 10;

/// Box overlap probe below the character's feet.
#[derive(Debug, Clone)]
pub struct GroundSensor {
    size: Vec3,
    offset: Vec3,
    layers: CollisionLayers,
    hits: [Option<ColliderHandle>; GROUND_QUERY_CAPACITY],
    last_center: Vec3,
}

impl GroundSensor {
    pub fn new(size: Vec3, offset: Vec3, layers: CollisionLayers) -> Self {
        Self {
            size,
            offset,
            layers,
            hits: [None; GROUND_QUERY_CAPACITY],
            last_center: offset,
        }
    }

    pub fn probe<P>(&mut self, physics: &P, body_position: Vec3) -> bool
    where
        P: CharacterPhysics + ?Sized,
    {
        self.hits.fill(None);

        let center = body_position + self.offset;
        self.last_center = center;
        physics.overlap_box(center, self.size / 2.0, self.layers, &mut self.hits);

        self.hits.iter().any(Option::is_some)
    }

    /// Colliders found by the last probe.
    pub fn hits(&self) -> impl Iterator<Item = ColliderHandle> + '_ {
        self.hits.iter().map_while(|hit| *hit)
    }

    /// Center and full size of the last probed box, for wireframe drawing.
    pub fn debug_bounds(&self) -> (Vec3, Vec3) {
        (self.last_center, self.size)
    }
}
