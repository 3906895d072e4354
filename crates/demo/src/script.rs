use knightfall::{AttackKind, PlayerEvent};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cue {
    Steer(f32),
    JumpPressed,
    JumpReleased,
    Intent(PlayerEvent),
}

#[derive(Debug, Clone, Copy)]
struct Step {
    at: f32,
    cue: Cue,
}

/// Timed list of player actions replayed against the simulation.
pub struct Script {
    steps: Vec<Step>,
    next: usize,
}

impl Script {
    pub fn new(mut steps: Vec<(f32, Cue)>) -> Self {
        steps.sort_by(|a, b| a.0.total_cmp(&b.0));
        Self {
            steps: steps.into_iter().map(|(at, cue)| Step { at, cue }).collect(),
            next: 0,
        }
    }

    /// Land, run right, jump with an early release, turn, crouch, then two
    /// attacks where the second starts inside the first one's recovery.
    pub fn showcase() -> Self {
        Self::new(vec![
            (0.8, Cue::Steer(1.0)),
            (1.4, Cue::JumpPressed),
            (1.6, Cue::JumpReleased),
            (2.6, Cue::Steer(-1.0)),
            (3.2, Cue::Steer(0.0)),
            (3.4, Cue::Intent(PlayerEvent::CrouchStarted)),
            (3.9, Cue::Intent(PlayerEvent::CrouchEnded)),
            (4.2, Cue::Intent(PlayerEvent::AttackStarted(AttackKind::Normal))),
            (4.5, Cue::Intent(PlayerEvent::AttackEnded)),
            (4.6, Cue::Intent(PlayerEvent::AttackStarted(AttackKind::Heavy))),
            (5.1, Cue::Intent(PlayerEvent::AttackEnded)),
            (5.8, Cue::Steer(1.0)),
        ])
    }

    pub fn due(&mut self, elapsed: f32) -> Vec<Cue> {
        let mut cues = Vec::new();
        while let Some(step) = self.steps.get(self.next) {
            if step.at > elapsed {
                break;
            }
            cues.push(step.cue);
            self.next += 1;
        }
        cues
    }

    pub fn is_finished(&self) -> bool {
        self.next >= self.steps.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cues_come_out_in_time_order() {
        let mut script = Script::new(vec![
            (1.0, Cue::JumpPressed),
            (0.5, Cue::Steer(1.0)),
            (1.0, Cue::JumpReleased),
        ]);

        assert!(script.due(0.25).is_empty());
        assert_eq!(script.due(0.5), vec![Cue::Steer(1.0)]);
        assert_eq!(script.due(2.0), vec![Cue::JumpPressed, Cue::JumpReleased]);
        assert!(script.is_finished());
        assert!(script.due(3.0).is_empty());
    }
}
