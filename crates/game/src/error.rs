use glam::Vec3;
use rapier3d::prelude::RigidBodyHandle;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SetupError {
    #[error("no character body was bound to the tracker")]
    MissingBody,
    #[error("character body {0:?} is not present in the physics world")]
    UnknownBody(RigidBodyHandle),
    #[error("ground check size must be finite and positive on every axis, got {0}")]
    InvalidGroundCheckSize(Vec3),
    #[error("ground check offset must be finite, got {0}")]
    InvalidGroundCheckOffset(Vec3),
    #[error("ground layer mask is empty")]
    EmptyGroundLayers,
    #[error("{name} must be finite and non-negative, got {value}")]
    InvalidDuration { name: &'static str, value: f32 },
}
