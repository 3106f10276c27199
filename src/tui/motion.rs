//! Cosmetic scene-transition timing.
//!
//! Transitions are purely presentational: they fade/slide the incoming scene
//! over a fixed number of ticks and have no effect on reachable states. The
//! reducer starts one on every scene change; the render layer samples its
//! progress. Reduced motion collapses every transition to a single step.

#![allow(missing_docs)]

/// Which scene is animating in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    /// Returning to the corkboard.
    BoardIn,
    /// Entering the covered detail scene.
    DetailIn,
    /// The cover lifting off the description.
    RevealIn,
}

impl TransitionKind {
    /// Transition length in ticks at the default ~33 ms cadence.
    ///
    /// Derived from the original presentation timings (0.4/0.5/0.6 s).
    #[must_use]
    pub const fn steps(self) -> u64 {
        match self {
            Self::BoardIn => 12,
            Self::DetailIn => 15,
            Self::RevealIn => 18,
        }
    }
}

/// An in-flight transition, sampled against the model's tick counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub kind: TransitionKind,
    pub started_tick: u64,
    pub steps: u64,
}

impl Transition {
    /// Start a transition at the given tick.
    #[must_use]
    pub const fn begin(kind: TransitionKind, now_tick: u64, reduced_motion: bool) -> Self {
        Self {
            kind,
            started_tick: now_tick,
            steps: if reduced_motion { 1 } else { kind.steps() },
        }
    }

    /// Linear progress in `0.0..=1.0`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self, now_tick: u64) -> f32 {
        let elapsed = now_tick.saturating_sub(self.started_tick);
        if self.steps == 0 {
            return 1.0;
        }
        (elapsed as f32 / self.steps as f32).clamp(0.0, 1.0)
    }

    /// True once the transition has played out.
    #[must_use]
    pub fn is_done(&self, now_tick: u64) -> bool {
        now_tick.saturating_sub(self.started_tick) >= self.steps
    }
}

/// Cubic ease-out, matching the original's easing family.
#[must_use]
pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Remaining slide offset in rows for a panel easing into place.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn slide_rows(progress: f32, max_rows: u16) -> u16 {
    let remaining = (1.0 - ease_out(progress)) * f32::from(max_rows);
    remaining.round() as u16
}
