//! Intro coordinator
//!
//! Runs once at startup: the splash title is displayed full-screen, then
//! travels and shrinks until it sits exactly where the hero title lives,
//! the hero title is revealed, and a single completion event unblocks
//! the rest of the page.
//!
//! The coordinator is tick-driven. The owning surface calls
//! [`IntroCoordinator::update`] from its frame loop with the elapsed
//! delta and receives any phase-boundary events that fired. This keeps
//! teardown structural: stop ticking (or drop the coordinator) and
//! nothing can fire afterwards. The hero reveal is chained off the
//! travel's own clock rather than a second free-running timer, so the
//! two can never race.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::animation::{CubicBezier, SPLASH_TRAVEL};
use crate::geometry::{GeometrySnapshot, RectF};

/// Where the splash and hero titles currently sit on screen.
///
/// Measurement is injected so the coordinator never reaches into the
/// rendering environment. `hero_rect` may legitimately be unknown (the
/// page too small to place a hero title); the coordinator then skips the
/// travel and completes immediately rather than hanging the page.
pub trait IntroStage {
    fn splash_rect(&self) -> RectF;
    fn hero_rect(&self) -> Option<RectF>;
}

/// Timing for the intro sequence. All values are configuration; the
/// defaults are the polished variant (3.5 s display, 1 s travel, done at
/// 4.5 s). `complete_ms` must not be earlier than the travel end; it is
/// clamped up at construction if a config file says otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntroTiming {
    /// How long the splash holds before the travel starts
    pub display_ms: u64,
    /// Duration of the title's travel to the hero slot
    pub travel_ms: u64,
    /// Total time from start until the completion event
    pub complete_ms: u64,
}

impl Default for IntroTiming {
    fn default() -> Self {
        Self {
            display_ms: 3500,
            travel_ms: 1000,
            complete_ms: 4500,
        }
    }
}

impl IntroTiming {
    fn display(&self) -> Duration {
        Duration::from_millis(self.display_ms)
    }

    fn travel(&self) -> Duration {
        Duration::from_millis(self.travel_ms)
    }

    fn complete(&self) -> Duration {
        Duration::from_millis(self.complete_ms.max(self.display_ms + self.travel_ms))
    }
}

/// Forward-only phase progression. There is no backward transition and
/// no cancellation pathway once the sequence starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntroPhase {
    Idle,
    Displaying,
    Transitioning,
    Complete,
}

/// Phase-boundary events, returned in firing order from `update`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntroEvent {
    /// The travel started; the merge geometry has been captured.
    TravelStarted,
    /// The title has visually arrived; show the hero title now.
    HeroRevealed,
    /// The sequence is over. Fired exactly once per coordinator.
    Completed,
}

/// The intro state machine.
pub struct IntroCoordinator {
    timing: IntroTiming,
    curve: CubicBezier,
    phase: IntroPhase,
    elapsed: Duration,
    snapshot: Option<GeometrySnapshot>,
    hero_revealed: bool,
    completed: bool,
}

impl IntroCoordinator {
    #[must_use]
    pub fn new(timing: IntroTiming) -> Self {
        Self {
            timing,
            curve: SPLASH_TRAVEL,
            phase: IntroPhase::Idle,
            elapsed: Duration::ZERO,
            snapshot: None,
            hero_revealed: false,
            completed: false,
        }
    }

    #[must_use]
    pub fn phase(&self) -> IntroPhase {
        self.phase
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed
    }

    /// Whether the hero title should currently be drawn.
    #[must_use]
    pub fn hero_revealed(&self) -> bool {
        self.hero_revealed
    }

    /// Time since the coordinator started ticking.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Advance the sequence. Returns every phase boundary crossed during
    /// this tick, in order; a single oversized delta may cross several.
    pub fn update(&mut self, delta: Duration, stage: &dyn IntroStage) -> Vec<IntroEvent> {
        let mut events = Vec::new();

        if self.completed {
            return events;
        }

        if self.phase == IntroPhase::Idle {
            self.phase = IntroPhase::Displaying;
        }

        self.elapsed += delta;

        if self.phase == IntroPhase::Displaying && self.elapsed >= self.timing.display() {
            match stage.hero_rect() {
                Some(hero) => {
                    let splash = stage.splash_rect();
                    self.snapshot = Some(GeometrySnapshot::between(&splash, &hero));
                    self.phase = IntroPhase::Transitioning;
                    events.push(IntroEvent::TravelStarted);
                    tracing::debug!(?splash, ?hero, "splash travel started");
                }
                None => {
                    // Destination never mounted; degrade to an immediate
                    // finish instead of hanging the page.
                    tracing::warn!("hero title not measurable, skipping splash travel");
                    self.hero_revealed = true;
                    self.completed = true;
                    self.phase = IntroPhase::Complete;
                    events.push(IntroEvent::HeroRevealed);
                    events.push(IntroEvent::Completed);
                    return events;
                }
            }
        }

        if self.phase == IntroPhase::Transitioning {
            if !self.hero_revealed && self.travel_progress() >= 1.0 {
                self.hero_revealed = true;
                events.push(IntroEvent::HeroRevealed);
            }

            if self.elapsed >= self.timing.complete() {
                self.phase = IntroPhase::Complete;
                self.completed = true;
                events.push(IntroEvent::Completed);
            }
        }

        events
    }

    /// Raw travel progress in [0, 1], before easing.
    fn travel_progress(&self) -> f32 {
        let into = self.elapsed.saturating_sub(self.timing.display());
        let travel = self.timing.travel();
        if travel.is_zero() {
            return 1.0;
        }
        (into.as_secs_f32() / travel.as_secs_f32()).min(1.0)
    }

    /// The splash title's current transform, eased along the travel
    /// curve. `None` until the travel has started (or when it was
    /// skipped), identity-through-final afterwards.
    #[must_use]
    pub fn transform(&self) -> Option<GeometrySnapshot> {
        let snapshot = self.snapshot?;
        let eased = self.curve.eval(self.travel_progress());
        Some(snapshot.at(eased))
    }
}
