mod types;

pub use types::{PlayerEvent, StateEvent};
