use glam::Vec3;
use rapier3d::prelude::RigidBodyHandle;

use crate::error::SetupError;
use crate::event::{PlayerEvent, StateEvent};
use crate::physics::CharacterPhysics;

use super::{
    GroundSensor, MotionSignal, PlayerState, PlayerStateConfig, TickInput, TimerAction, TimerId,
    Timers, is_user_moving,
};

pub struct TrackerBuilder {
    config: PlayerStateConfig,
    body: Option<RigidBodyHandle>,
}

impl TrackerBuilder {
    pub fn new(config: PlayerStateConfig) -> Self {
        Self { config, body: None }
    }

    pub fn body(mut self, handle: RigidBodyHandle) -> Self {
        self.body = Some(handle);
        self
    }

    pub fn build<P>(self, physics: &P) -> Result<PlayerStateTracker, SetupError>
    where
        P: CharacterPhysics + ?Sized,
    {
        self.config.validate()?;

        let body = self.body.ok_or(SetupError::MissingBody)?;
        if physics.body_position(body).is_none() {
            return Err(SetupError::UnknownBody(body));
        }

        let sensor = GroundSensor::new(
            self.config.ground_check_size,
            self.config.ground_check_offset,
            self.config.ground_layers,
        );

        Ok(PlayerStateTracker {
            config: self.config,
            body,
            sensor,
            state: PlayerState::new(),
            timers: Timers::new(),
            recovery: None,
            events: Vec::new(),
            body_missing: false,
        })
    }
}

/// Derives the character's discrete state from physics, input and intents.
///
/// The host calls [`tick`](Self::tick) once per fixed physics step and
/// forwards intents from the movement and combat components through
/// [`handle`](Self::handle) as they happen.
pub struct PlayerStateTracker {
    config: PlayerStateConfig,
    body: RigidBodyHandle,
    sensor: GroundSensor,
    state: PlayerState,
    timers: Timers,
    recovery: Option<TimerId>,
    events: Vec<StateEvent>,
    body_missing: bool,
}

impl PlayerStateTracker {
    pub fn builder(config: PlayerStateConfig) -> TrackerBuilder {
        TrackerBuilder::new(config)
    }

    pub fn config(&self) -> &PlayerStateConfig {
        &self.config
    }

    pub fn body(&self) -> RigidBodyHandle {
        self.body
    }

    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    pub fn sensor(&self) -> &GroundSensor {
        &self.sensor
    }

    pub fn drain_events(&mut self) -> Vec<StateEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn has_pending_recovery(&self) -> bool {
        self.recovery.is_some_and(|id| self.timers.is_pending(id))
    }

    pub fn can_jump(&self) -> bool {
        self.state.can_jump()
    }

    pub fn can_jump_cut<P>(&self, physics: &P) -> bool
    where
        P: CharacterPhysics + ?Sized,
    {
        self.state.can_jump_cut(self.read_velocity(physics).y)
    }

    pub fn tick<P>(&mut self, dt: f32, input: TickInput, physics: &P)
    where
        P: CharacterPhysics + ?Sized,
    {
        self.tick_timers(dt);

        let axis = input.horizontal_axis();
        self.tick_facing(axis);

        let (position, velocity) = match (
            physics.body_position(self.body),
            physics.body_velocity(self.body),
        ) {
            (Some(position), Some(velocity)) => {
                self.body_missing = false;
                (position, velocity)
            }
            _ => {
                if !self.body_missing {
                    log::warn!("Character body {:?} missing from physics world", self.body);
                    self.body_missing = true;
                }
                self.state.is_grounded = false;
                self.state.is_user_moving = false;
                self.state
                    .ground_timer
                    .update(false, self.config.coyote_time, dt);
                self.apply_motion(MotionSignal::Tick {
                    grounded: false,
                    vertical_velocity: 0.0,
                });
                return;
            }
        };

        let grounded = self.sensor.probe(physics, position);
        if grounded != self.state.is_grounded {
            log::debug!("Grounded: {}", grounded);
        }
        self.state.is_grounded = grounded;
        self.state
            .ground_timer
            .update(grounded, self.config.coyote_time, dt);

        self.state.is_user_moving = is_user_moving(grounded, axis, velocity.x);

        self.apply_motion(MotionSignal::Tick {
            grounded,
            vertical_velocity: velocity.y,
        });
    }

    pub fn handle<P>(&mut self, event: PlayerEvent, physics: &mut P)
    where
        P: CharacterPhysics + ?Sized,
    {
        log::debug!("Player event: {}", event.name());

        match event {
            PlayerEvent::JumpStarted => self.apply_motion(MotionSignal::JumpStarted),
            PlayerEvent::JumpReleased => {
                if self.can_jump_cut(&*physics) {
                    self.state.is_jump_cut = true;
                }
            }
            PlayerEvent::CrouchStarted => {
                if !self.state.is_grounded {
                    return;
                }
                physics.set_body_velocity(self.body, Vec3::ZERO);
                self.state.is_crouching = true;
                self.state.can_move = false;
            }
            PlayerEvent::CrouchEnded => {
                self.state.is_crouching = false;
                self.state.can_move = true;
            }
            PlayerEvent::AttackStarted(kind) => {
                self.cancel_recovery();
                physics.set_body_velocity(self.body, Vec3::ZERO);
                self.state.attack = Some(kind);
                self.state.can_move = false;
            }
            PlayerEvent::AttackEnded => {
                self.cancel_recovery();
                self.recovery = Some(
                    self.timers
                        .schedule(self.config.stunned_after_swing, TimerAction::RestoreMovement),
                );
                self.state.attack = None;
            }
        }
    }

    fn tick_timers(&mut self, dt: f32) {
        for (id, action) in self.timers.advance(dt) {
            if self.recovery == Some(id) {
                self.recovery = None;
            }

            match action {
                TimerAction::RestoreMovement => {
                    self.state.can_move = true;
                    self.events.push(StateEvent::MovementRestored);
                }
            }
        }
    }

    fn tick_facing(&mut self, axis: f32) {
        let previous = self.state.facing;
        self.state.facing = previous.follow(axis);

        if self.state.facing != previous {
            self.events.push(StateEvent::DirectionChanged {
                facing: self.state.facing,
            });
        }
    }

    fn apply_motion(&mut self, signal: MotionSignal) {
        let previous = self.state.motion;
        self.state.motion = previous.transition(signal);

        if self.state.motion.is_grounded() {
            self.state.is_jump_cut = false;
        }

        if self.state.motion != previous {
            log::debug!("Vertical motion: {:?} -> {:?}", previous, self.state.motion);
        }
    }

    fn cancel_recovery(&mut self) {
        if let Some(id) = self.recovery.take() {
            self.timers.cancel(id);
        }
    }

    fn read_velocity<P>(&self, physics: &P) -> Vec3
    where
        P: CharacterPhysics + ?Sized,
    {
        physics.body_velocity(self.body).unwrap_or(Vec3::ZERO)
    }
}
