pub mod error;
pub mod event;
pub mod physics;
pub mod player;
pub mod simulation;

pub use error::SetupError;
pub use event::{PlayerEvent, StateEvent};
pub use physics::{CharacterPhysics, CollisionLayers, PhysicsWorld};
pub use player::{
    AttackKind, Facing, GroundSensor, PlayerState, PlayerStateConfig, PlayerStateTracker,
    StateFlags, TickInput, TrackerBuilder, VerticalMotion,
};
pub use simulation::{FixedTimestep, SimulationLoop, SimulationState};
