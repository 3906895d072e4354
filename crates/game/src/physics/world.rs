use glam::Vec3;
use rapier3d::prelude::*;

use super::{CharacterPhysics, CollisionLayers};

pub struct PhysicsWorld {
    pipeline: PhysicsPipeline,
    integration_parameters: IntegrationParameters,
    islands: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    pub bodies: RigidBodySet,
    pub colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
    gravity: Vector,
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl PhysicsWorld {
    const TICK_RATE: Real = 1.0 / 60.0;

    pub fn new() -> Self {
        let mut integration_parameters = IntegrationParameters::default();
        integration_parameters.dt = Self::TICK_RATE;
        integration_parameters.min_ccd_dt = Self::TICK_RATE / 100.0;

        Self {
            pipeline: PhysicsPipeline::new(),
            integration_parameters,
            islands: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            gravity: Vector::new(0.0, -9.81, 0.0),
        }
    }

    pub fn dt(&self) -> Real {
        self.integration_parameters.dt
    }

    pub fn set_dt(&mut self, dt: Real) {
        self.integration_parameters.dt = dt;
        self.integration_parameters.min_ccd_dt = dt / 100.0;
    }

    pub fn step(&mut self) {
        self.pipeline.step(
            self.gravity,
            &self.integration_parameters,
            &mut self.islands,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            &(),
            &(),
        );
    }

    pub fn add_character(&mut self, position: Vec3, half_extents: Vec3) -> RigidBodyHandle {
        let body = RigidBodyBuilder::dynamic()
            .translation(Vector::new(position.x, position.y, position.z))
            .lock_rotations()
            .ccd_enabled(true)
            .build();

        let handle = self.bodies.insert(body);

        let collider = ColliderBuilder::cuboid(half_extents.x, half_extents.y, half_extents.z)
            .friction(0.0)
            .collision_groups(CollisionLayers::PLAYER.interaction_groups())
            .build();

        self.colliders
            .insert_with_parent(collider, handle, &mut self.bodies);

        handle
    }

    pub fn add_static_box(
        &mut self,
        position: Vec3,
        half_extents: Vec3,
        layers: CollisionLayers,
    ) -> ColliderHandle {
        let collider = ColliderBuilder::cuboid(half_extents.x, half_extents.y, half_extents.z)
            .translation(Vector::new(position.x, position.y, position.z))
            .collision_groups(layers.interaction_groups())
            .build();
        self.colliders.insert(collider)
    }

    pub fn add_ground(&mut self, y: Real, half_size: Real) -> ColliderHandle {
        self.add_static_box(
            Vec3::new(0.0, y, 0.0),
            Vec3::new(half_size, 0.1, half_size),
            CollisionLayers::GROUND,
        )
    }

    pub fn remove_body(&mut self, handle: RigidBodyHandle) {
        self.bodies.remove(
            handle,
            &mut self.islands,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            true,
        );
    }

    fn query_pipeline(&self) -> QueryPipeline<'_> {
        self.broad_phase.as_query_pipeline(
            self.narrow_phase.query_dispatcher(),
            &self.bodies,
            &self.colliders,
            QueryFilter::default(),
        )
    }
}

impl CharacterPhysics for PhysicsWorld {
    fn body_position(&self, body: RigidBodyHandle) -> Option<Vec3> {
        self.bodies.get(body).map(|b| {
            let t = b.translation();
            Vec3::new(t.x, t.y, t.z)
        })
    }

    fn body_velocity(&self, body: RigidBodyHandle) -> Option<Vec3> {
        self.bodies.get(body).map(|b| {
            let v = b.linvel();
            Vec3::new(v.x, v.y, v.z)
        })
    }

    fn set_body_velocity(&mut self, body: RigidBodyHandle, velocity: Vec3) {
        if let Some(b) = self.bodies.get_mut(body) {
            b.set_linvel(Vector::new(velocity.x, velocity.y, velocity.z), true);
        }
    }

    fn overlap_box(
        &self,
        center: Vec3,
        half_extents: Vec3,
        layers: CollisionLayers,
        out: &mut [Option<ColliderHandle>],
    ) -> usize {
        if out.is_empty() {
            return 0;
        }

        let query = self.query_pipeline();
        let shape = SharedShape::cuboid(half_extents.x, half_extents.y, half_extents.z);
        let pose = Pose::from_parts(Vector::new(center.x, center.y, center.z), Rotation::IDENTITY);

        let mut written = 0;
        for (handle, collider) in query.intersect_shape(pose, shape.as_ref()) {
            if !layers.matches(collider.collision_groups()) {
                continue;
            }

            out[written] = Some(handle);
            written += 1;
            if written == out.len() {
                break;
            }
        }

        written
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlap_box_respects_layer_mask() {
        let mut physics = PhysicsWorld::new();
        physics.add_ground(0.0, 10.0);
        physics.add_static_box(Vec3::new(3.0, 0.5, 0.0), Vec3::splat(0.5), CollisionLayers::PROP);
        physics.step();

        let mut out = [None; 4];
        let ground_hits = physics.overlap_box(
            Vec3::new(3.0, 0.1, 0.0),
            Vec3::splat(0.2),
            CollisionLayers::GROUND,
            &mut out,
        );
        assert_eq!(ground_hits, 1);
        assert!(out[0].is_some());
        assert!(out[1].is_none());

        let mut out = [None; 4];
        let both = physics.overlap_box(
            Vec3::new(3.0, 0.1, 0.0),
            Vec3::splat(0.2),
            CollisionLayers::GROUND | CollisionLayers::PROP,
            &mut out,
        );
        assert_eq!(both, 2);
    }

    #[test]
    fn overlap_box_finds_nothing_in_open_air() {
        let mut physics = PhysicsWorld::new();
        physics.add_ground(0.0, 10.0);
        physics.step();

        let mut out = [None; 4];
        let hits = physics.overlap_box(
            Vec3::new(0.0, 5.0, 0.0),
            Vec3::splat(0.2),
            CollisionLayers::GROUND,
            &mut out,
        );
        assert_eq!(hits, 0);
        assert!(out.iter().all(Option::is_none));
    }

    #[test]
    fn overlap_box_truncates_to_buffer() {
        let mut physics = PhysicsWorld::new();
        for i in 0..3 {
            physics.add_static_box(
                Vec3::new(i as f32 * 0.1, 0.0, 0.0),
                Vec3::splat(0.5),
                CollisionLayers::GROUND,
            );
        }
        physics.step();

        let mut out = [None; 2];
        let hits = physics.overlap_box(Vec3::ZERO, Vec3::splat(0.5), CollisionLayers::GROUND, &mut out);
        assert_eq!(hits, 2);
        assert!(out.iter().all(Option::is_some));
    }

    #[test]
    fn velocity_roundtrips_through_body() {
        let mut physics = PhysicsWorld::new();
        let handle = physics.add_character(Vec3::new(0.0, 2.0, 0.0), Vec3::new(0.3, 0.9, 0.3));

        physics.set_body_velocity(handle, Vec3::new(1.0, 2.0, 0.0));
        assert_eq!(physics.body_velocity(handle), Some(Vec3::new(1.0, 2.0, 0.0)));
        assert_eq!(physics.body_position(handle), Some(Vec3::new(0.0, 2.0, 0.0)));

        physics.remove_body(handle);
        assert!(physics.body_velocity(handle).is_none());
    }
}
