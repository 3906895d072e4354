#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerAction {
    RestoreMovement,
}

#[derive(Debug, Clone)]
struct PendingTimer {
    id: TimerId,
    remaining: f32,
    action: TimerAction,
}

/// Fraction of a tick below which a timer counts as expired. Repeatedly
/// subtracting `1/60` in f32 leaves a residue a few ulps above zero.
const EXPIRY_TOLERANCE: f32 = 1e-3;

/// One-shot timers advanced by the fixed tick rather than a wall clock.
#[derive(Debug, Default)]
pub struct Timers {
    pending: Vec<PendingTimer>,
    next_id: u32,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, delay: f32, action: TimerAction) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);

        self.pending.push(PendingTimer {
            id,
            remaining: delay.max(0.0),
            action,
        });

        id
    }

    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|t| t.id != id);
        self.pending.len() != before
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.iter().any(|t| t.id == id)
    }

    pub fn remaining(&self, id: TimerId) -> Option<f32> {
        self.pending.iter().find(|t| t.id == id).map(|t| t.remaining)
    }

    /// Returns the timers that expired during `dt`, in scheduling order. A
    /// delay that is a whole number of ticks fires on exactly that tick.
    pub fn advance(&mut self, dt: f32) -> Vec<(TimerId, TimerAction)> {
        let mut fired = Vec::new();
        let tolerance = dt * EXPIRY_TOLERANCE;

        self.pending.retain_mut(|t| {
            t.remaining -= dt;
            if t.remaining <= tolerance {
                fired.push((t.id, t.action));
                false
            } else {
                true
            }
        });

        fired
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
