use glam::Vec3;
use rapier3d::prelude::{ColliderHandle, RigidBodyHandle};

use super::CollisionLayers;

/// Engine services the player state tracker polls once per physics tick.
pub trait CharacterPhysics {
    fn body_position(&self, body: RigidBodyHandle) -> Option<Vec3>;

    fn body_velocity(&self, body: RigidBodyHandle) -> Option<Vec3>;

    fn set_body_velocity(&mut self, body: RigidBodyHandle, velocity: Vec3);

    /// Writes the colliders on `layers` that overlap an axis-aligned box into
    /// `out` and returns how many were written.
    ///
    /// Hits must be packed from index 0 with no gaps; the ground sensor stops
    /// scanning at the first occupied slot and callers treat the returned
    /// count as the prefix length. Hits beyond `out.len()` are dropped.
    fn overlap_box(
        &self,
        center: Vec3,
        half_extents: Vec3,
        layers: CollisionLayers,
        out: &mut [Option<ColliderHandle>],
    ) -> usize;
}
