mod tick;

pub use tick::{FixedTimestep, SimulationLoop, SimulationState};
