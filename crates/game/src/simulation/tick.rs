use crate::event::PlayerEvent;
use crate::physics::PhysicsWorld;
use crate::player::{PlayerStateTracker, TickInput};

pub struct FixedTimestep {
    dt: f32,
    accumulator: f32,
}

impl FixedTimestep {
    const MAX_FRAME_DELTA: f32 = 0.25;

    pub fn new(tick_rate: u32) -> Self {
        Self {
            dt: 1.0 / tick_rate.max(1) as f32,
            accumulator: 0.0,
        }
    }

    pub fn dt(&self) -> f32 {
        self.dt
    }

    pub fn accumulate(&mut self, delta: f32) {
        self.accumulator += delta.clamp(0.0, Self::MAX_FRAME_DELTA);
    }

    pub fn should_tick(&self) -> bool {
        self.accumulator >= self.dt
    }

    pub fn consume_tick(&mut self) -> bool {
        if self.accumulator >= self.dt {
            self.accumulator -= self.dt;
            true
        } else {
            false
        }
    }
}

pub struct SimulationState {
    pub physics: PhysicsWorld,
    pub tracker: PlayerStateTracker,
    pub timestep: FixedTimestep,
    tick: u32,
}

impl SimulationState {
    pub fn new(tick_rate: u32, mut physics: PhysicsWorld, tracker: PlayerStateTracker) -> Self {
        let timestep = FixedTimestep::new(tick_rate);
        physics.set_dt(timestep.dt());

        Self {
            physics,
            tracker,
            timestep,
            tick: 0,
        }
    }

    pub fn tick(&self) -> u32 {
        self.tick
    }

    pub fn elapsed(&self) -> f32 {
        self.tick as f32 * self.timestep.dt()
    }

    pub fn handle(&mut self, event: PlayerEvent) {
        self.tracker.handle(event, &mut self.physics);
    }
}

/// Runs physics and the state tracker at a fixed rate. `input_fn` is called
/// at the start of every tick and may raise events or steer the body before
/// the physics step.
pub struct SimulationLoop<F> {
    state: SimulationState,
    input_fn: F,
}

impl<F> SimulationLoop<F>
where
    F: FnMut(&mut SimulationState) -> TickInput,
{
    pub fn new(state: SimulationState, input_fn: F) -> Self {
        Self { state, input_fn }
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut SimulationState {
        &mut self.state
    }

    pub fn update(&mut self, delta: f32) -> u32 {
        self.state.timestep.accumulate(delta);

        let mut ticks_run = 0;
        while self.state.timestep.consume_tick() {
            self.step_once();
            ticks_run += 1;
        }

        ticks_run
    }

    pub fn step_once(&mut self) {
        let input = (self.input_fn)(&mut self.state);

        self.state.physics.step();

        let dt = self.state.timestep.dt();
        self.state.tracker.tick(dt, input, &self.state.physics);
        self.state.tick += 1;
    }
}
