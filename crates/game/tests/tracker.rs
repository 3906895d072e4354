use glam::Vec3;
use knightfall::{
    AttackKind, CharacterPhysics, CollisionLayers, PhysicsWorld, PlayerEvent, PlayerStateConfig,
    PlayerStateTracker, SimulationLoop, SimulationState, StateEvent, TickInput,
};

const CHARACTER_HALF_EXTENTS: Vec3 = Vec3::new(0.3, 0.9, 0.3);

fn drop_character(mut physics: PhysicsWorld, height: f32) -> SimulationState {
    let body = physics.add_character(Vec3::new(0.0, height, 0.0), CHARACTER_HALF_EXTENTS);
    let tracker = PlayerStateTracker::builder(PlayerStateConfig::default())
        .body(body)
        .build(&physics)
        .unwrap();

    SimulationState::new(60, physics, tracker)
}

fn run_idle(sim: &mut SimulationLoop<impl FnMut(&mut SimulationState) -> TickInput>, ticks: u32) {
    for _ in 0..ticks {
        sim.step_once();
    }
}

#[test]
fn falls_then_lands_on_ground() {
    let mut physics = PhysicsWorld::new();
    physics.add_ground(0.0, 20.0);
    let mut sim = SimulationLoop::new(drop_character(physics, 2.0), |_| TickInput::idle());

    sim.step_once();
    let state = *sim.state().tracker.state();
    assert!(!state.is_grounded());
    assert!(state.is_falling());
    assert!(!state.is_jumping());

    run_idle(&mut sim, 120);
    let state = *sim.state().tracker.state();
    assert!(state.is_grounded());
    assert!(!state.is_falling());
    assert!(!state.is_jumping());
    assert!(sim.state().tracker.sensor().hits().count() >= 1);
    assert!(sim.state().tracker.can_jump());
}

#[test]
fn non_ground_layers_do_not_ground() {
    let mut physics = PhysicsWorld::new();
    physics.add_static_box(Vec3::ZERO, Vec3::new(20.0, 0.1, 20.0), CollisionLayers::PROP);
    let mut sim = SimulationLoop::new(drop_character(physics, 2.0), |_| TickInput::idle());

    run_idle(&mut sim, 120);
    assert!(!sim.state().tracker.state().is_grounded());
}

#[test]
fn jump_cut_latches_until_landing() {
    let mut physics = PhysicsWorld::new();
    physics.add_ground(0.0, 20.0);
    let mut sim = SimulationLoop::new(drop_character(physics, 1.2), |_| TickInput::idle());
    run_idle(&mut sim, 90);
    assert!(sim.state().tracker.state().is_grounded());

    let state = sim.state_mut();
    let body = state.tracker.body();
    state.physics.set_body_velocity(body, Vec3::new(0.0, 6.0, 0.0));
    state.handle(PlayerEvent::JumpStarted);
    assert!(state.tracker.state().is_jumping());

    sim.step_once();
    let state = sim.state_mut();
    assert!(!state.tracker.state().is_grounded());
    assert!(state.tracker.state().is_jumping());

    state.handle(PlayerEvent::JumpReleased);
    assert!(state.tracker.state().is_jump_cut());

    run_idle(&mut sim, 180);
    let state = sim.state().tracker.state();
    assert!(state.is_grounded());
    assert!(!state.is_jump_cut());
    assert!(!state.is_jumping());
}

#[test]
fn attack_stops_body_and_locks_until_recovery() {
    let mut physics = PhysicsWorld::new();
    physics.add_ground(0.0, 20.0);
    let mut sim = SimulationLoop::new(drop_character(physics, 1.2), |_| TickInput::idle());
    run_idle(&mut sim, 90);

    let state = sim.state_mut();
    let body = state.tracker.body();
    state.physics.set_body_velocity(body, Vec3::new(4.0, 0.0, 0.0));
    state.handle(PlayerEvent::AttackStarted(AttackKind::Heavy));
    assert_eq!(state.physics.body_velocity(body), Some(Vec3::ZERO));
    assert!(state.tracker.state().is_heavy_attack());
    assert!(!state.tracker.state().can_move());

    state.handle(PlayerEvent::AttackEnded);
    assert!(!state.tracker.state().can_move());
    state.tracker.drain_events();

    // Default recovery is 0.35 s, exactly 21 ticks at 60 Hz.
    run_idle(&mut sim, 20);
    assert!(!sim.state().tracker.state().can_move());
    assert!(sim.state_mut().tracker.drain_events().is_empty());

    run_idle(&mut sim, 1);
    let state = sim.state_mut();
    assert!(state.tracker.state().can_move());
    assert_eq!(state.tracker.drain_events(), vec![StateEvent::MovementRestored]);
}

#[test]
fn setup_fails_fast_for_unknown_body() {
    let mut physics = PhysicsWorld::new();
    let body = physics.add_character(Vec3::ZERO, CHARACTER_HALF_EXTENTS);
    physics.remove_body(body);

    let result = PlayerStateTracker::builder(PlayerStateConfig::default())
        .body(body)
        .build(&physics);
    assert!(result.is_err());
}
