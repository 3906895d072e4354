mod script;

use anyhow::Result;
use clap::Parser;
use glam::Vec3;
use knightfall::{
    CharacterPhysics, PhysicsWorld, PlayerEvent, PlayerState, PlayerStateConfig,
    PlayerStateTracker, SimulationLoop, SimulationState, StateEvent, StateFlags, TickInput,
};
use serde::Serialize;

use script::{Cue, Script};

const CHARACTER_HALF_EXTENTS: Vec3 = Vec3::new(0.3, 0.9, 0.3);

#[derive(Parser)]
#[command(name = "knightfall-demo")]
#[command(about = "Replays a scripted run through the player state tracker")]
struct Args {
    #[arg(short, long, default_value_t = 60)]
    tick_rate: u32,

    #[arg(long, default_value_t = 7.0, help = "Simulated seconds to run")]
    duration: f32,

    #[arg(long, default_value_t = 0.35, help = "Movement lock after an attack, in seconds")]
    stunned_after_swing: f32,

    #[arg(long, default_value_t = 0.1)]
    coyote_time: f32,

    #[arg(long, default_value_t = 7.0)]
    jump_speed: f32,

    #[arg(long, default_value_t = 5.0)]
    run_speed: f32,

    #[arg(long, default_value_t = 0.5, help = "Vertical speed kept on a jump cut")]
    jump_cut_factor: f32,

    #[arg(long, help = "Print every tick's state as a JSON line")]
    json: bool,
}

#[derive(Serialize)]
struct Frame {
    tick: u32,
    time: f32,
    #[serde(flatten)]
    flags: StateFlags,
}

impl Frame {
    fn capture(tick: u32, time: f32, state: &PlayerState) -> Self {
        Self {
            tick,
            time,
            flags: state.flags(),
        }
    }
}

const FLAGS: [(&str, fn(&PlayerState) -> bool); 10] = [
    ("facing_right", PlayerState::facing_right),
    ("can_move", PlayerState::can_move),
    ("user_moving", PlayerState::is_user_moving),
    ("crouching", PlayerState::is_crouching),
    ("jumping", PlayerState::is_jumping),
    ("falling", PlayerState::is_falling),
    ("jump_cut", PlayerState::is_jump_cut),
    ("normal_attack", PlayerState::is_normal_attack),
    ("heavy_attack", PlayerState::is_heavy_attack),
    ("grounded", PlayerState::is_grounded),
];

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let config = PlayerStateConfig {
        stunned_after_swing: args.stunned_after_swing,
        coyote_time: args.coyote_time,
        ..Default::default()
    };

    let mut physics = PhysicsWorld::new();
    physics.add_ground(0.0, 50.0);
    let body = physics.add_character(Vec3::new(0.0, 2.0, 0.0), CHARACTER_HALF_EXTENTS);

    let tracker = PlayerStateTracker::builder(config).body(body).build(&physics)?;
    let state = SimulationState::new(args.tick_rate, physics, tracker);

    let mut script = Script::showcase();
    let mut axis = 0.0_f32;
    let run_speed = args.run_speed;
    let jump_speed = args.jump_speed;
    let jump_cut_factor = args.jump_cut_factor;

    let mut sim = SimulationLoop::new(state, move |state: &mut SimulationState| {
        for cue in script.due(state.elapsed()) {
            apply_cue(state, cue, &mut axis, jump_speed, jump_cut_factor);
        }
        steer(state, axis, run_speed);
        TickInput::new(axis)
    });

    log::info!(
        "Running {:.1}s at {} Hz (recovery {:.2}s)",
        args.duration,
        args.tick_rate,
        args.stunned_after_swing
    );

    let total_ticks = (args.duration * args.tick_rate as f32).ceil() as u32;
    let mut previous = *sim.state().tracker.state();

    for _ in 0..total_ticks {
        sim.step_once();

        let state = sim.state_mut();
        let current = *state.tracker.state();
        let tick = state.tick();
        let time = state.elapsed();

        for event in state.tracker.drain_events() {
            match event {
                StateEvent::DirectionChanged { facing } => {
                    log::info!("[{:>4}] direction changed: {:?}", tick, facing);
                }
                StateEvent::MovementRestored => {
                    log::info!("[{:>4}] movement restored", tick);
                }
            }
        }

        for (name, flag) in FLAGS {
            if flag(&previous) != flag(&current) {
                log::info!("[{:>4}] {} -> {}", tick, name, flag(&current));
            }
        }

        if args.json {
            let frame = Frame::capture(tick, time, &current);
            println!("{}", serde_json::to_string(&frame)?);
        }

        previous = current;
    }

    log::info!("Finished after {} ticks", sim.state().tick());

    Ok(())
}

fn apply_cue(
    state: &mut SimulationState,
    cue: Cue,
    axis: &mut f32,
    jump_speed: f32,
    jump_cut_factor: f32,
) {
    let body = state.tracker.body();

    match cue {
        Cue::Steer(value) => *axis = value,
        Cue::JumpPressed => {
            if !state.tracker.can_jump() || !state.tracker.state().can_move() {
                log::info!("Jump refused");
                return;
            }
            let velocity = state.physics.body_velocity(body).unwrap_or(Vec3::ZERO);
            state
                .physics
                .set_body_velocity(body, Vec3::new(velocity.x, jump_speed, velocity.z));
            state.handle(PlayerEvent::JumpStarted);
        }
        Cue::JumpReleased => {
            state.handle(PlayerEvent::JumpReleased);
            if state.tracker.state().is_jump_cut() {
                let velocity = state.physics.body_velocity(body).unwrap_or(Vec3::ZERO);
                state.physics.set_body_velocity(
                    body,
                    Vec3::new(velocity.x, velocity.y * jump_cut_factor, velocity.z),
                );
            }
        }
        Cue::Intent(event) => state.handle(event),
    }
}

fn steer(state: &mut SimulationState, axis: f32, run_speed: f32) {
    if !state.tracker.state().can_move() {
        return;
    }

    let body = state.tracker.body();
    let velocity = state.physics.body_velocity(body).unwrap_or(Vec3::ZERO);
    state
        .physics
        .set_body_velocity(body, Vec3::new(axis * run_speed, velocity.y, velocity.z));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_json_is_flat_flags() {
        let frame = Frame::capture(3, 0.05, &PlayerState::new());
        let value = serde_json::to_value(&frame).unwrap();

        assert_eq!(value["tick"], 3);
        assert_eq!(value["facing_right"], true);
        assert_eq!(value["can_move"], true);
        assert_eq!(value["is_jumping"], false);
        assert!(value.get("motion").is_none());
        assert!(value.get("attack").is_none());
        assert!(value.get("ground_timer").is_none());
    }
}
