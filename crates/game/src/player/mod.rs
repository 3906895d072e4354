mod config;
mod facing;
mod input;
mod motion;
mod sensor;
mod state;
mod timer;
mod tracker;

pub use config::PlayerStateConfig;
pub use facing::Facing;
pub use input::TickInput;
pub use motion::{GroundTimer, MotionSignal, VerticalMotion, is_user_moving};
pub use sensor::{GROUND_QUERY_CAPACITY, GroundSensor};
pub use state::{AttackKind, PlayerState, StateFlags};
pub use timer::{TimerAction, TimerId, Timers};
pub use tracker::{PlayerStateTracker, TrackerBuilder};
