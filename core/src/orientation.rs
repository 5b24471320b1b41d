//! Orientation controller
//!
//! Maintains the cube's two-axis orientation. When idle the cube spins
//! on its own; a pointer drag takes over immediately and the auto spin
//! only resumes after a quiet period (or an explicit resume request).
//!
//! Exactly one driver mutates the orientation at any instant: the auto
//! ticker is gated off whenever the mode is Manual, and pointer motion
//! is ignored unless a drag is in progress. The drag uses incremental
//! deltas against the last observed pointer position, so arbitrarily
//! long drags stay well-conditioned.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Orientation at construction: a pleasant three-quarter view.
pub const INITIAL_PITCH: f32 = 15.0;
pub const INITIAL_YAW: f32 = 45.0;

/// Which driver currently owns the orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriveMode {
    /// The fixed-period ticker increments yaw
    Auto,
    /// The pointer steers; the ticker is suspended
    Manual,
}

/// Whether pitch is held inside a viewing band. The clamped variant
/// keeps the cube from flipping upside down under an enthusiastic drag;
/// the free variant lets it tumble.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "mode")]
pub enum PitchPolicy {
    Clamped { min_deg: f32, max_deg: f32 },
    Free,
}

impl Default for PitchPolicy {
    fn default() -> Self {
        Self::Clamped {
            min_deg: -30.0,
            max_deg: 30.0,
        }
    }
}

impl PitchPolicy {
    fn apply(&self, pitch: f32) -> f32 {
        match *self {
            Self::Clamped { min_deg, max_deg } => pitch.clamp(min_deg, max_deg),
            Self::Free => pitch,
        }
    }
}

/// Tuning for both drivers. All values are configuration with the
/// observed defaults.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrientationConfig {
    /// Degrees of rotation per pointer-unit of drag
    pub sensitivity: f32,
    /// Yaw added per auto tick, in degrees
    pub auto_step_deg: f32,
    /// Auto tick period in milliseconds
    pub auto_period_ms: u64,
    /// Quiet time after a drag before the auto spin resumes
    pub idle_timeout_ms: u64,
    /// Pitch clamping policy
    pub pitch: PitchPolicy,
}

impl Default for OrientationConfig {
    fn default() -> Self {
        Self {
            sensitivity: 0.5,
            auto_step_deg: 0.3,
            auto_period_ms: 30,
            idle_timeout_ms: 5000,
            pitch: PitchPolicy::default(),
        }
    }
}

/// The orientation state machine.
#[derive(Debug)]
pub struct OrientationController {
    config: OrientationConfig,
    pitch: f32,
    yaw: f32,
    mode: DriveMode,
    dragging: bool,
    last_pointer: Option<(f32, f32)>,
    /// Quiet time accumulated since the drag ended (Manual mode only)
    idle: Duration,
    /// Fractional tick accumulator (Auto mode only)
    accumulator: Duration,
}

impl OrientationController {
    #[must_use]
    pub fn new(config: OrientationConfig) -> Self {
        Self {
            config,
            pitch: config.pitch.apply(INITIAL_PITCH),
            yaw: INITIAL_YAW,
            mode: DriveMode::Auto,
            dragging: false,
            last_pointer: None,
            idle: Duration::ZERO,
            accumulator: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Yaw as accumulated; unbounded.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Yaw folded into [0, 360) for rendering.
    #[must_use]
    pub fn yaw_wrapped(&self) -> f32 {
        self.yaw.rem_euclid(360.0)
    }

    #[must_use]
    pub fn mode(&self) -> DriveMode {
        self.mode
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Pointer pressed on the cube: capture the start coordinate and
    /// suspend the auto spin.
    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.mode = DriveMode::Manual;
        self.dragging = true;
        self.last_pointer = Some((x, y));
        self.idle = Duration::ZERO;
        self.accumulator = Duration::ZERO;
    }

    /// Pointer moved while held: steer by the delta since the last
    /// observed position. Ignored when no drag is in progress.
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        if !self.dragging {
            return;
        }
        let Some((lx, ly)) = self.last_pointer else {
            self.last_pointer = Some((x, y));
            return;
        };

        let k = self.config.sensitivity;
        self.yaw += (x - lx) * k;
        self.pitch = self.config.pitch.apply(self.pitch - (y - ly) * k);
        self.last_pointer = Some((x, y));
    }

    /// Pointer released: the drag ends and the quiet period begins.
    pub fn pointer_up(&mut self) {
        if self.dragging {
            self.dragging = false;
            self.last_pointer = None;
            self.idle = Duration::ZERO;
        }
    }

    /// Pointer left the cube's surface mid-drag; same as a release.
    pub fn pointer_leave(&mut self) {
        self.pointer_up();
    }

    /// Explicit resume affordance: hand control back to the ticker now.
    pub fn resume_auto(&mut self) {
        self.dragging = false;
        self.last_pointer = None;
        self.mode = DriveMode::Auto;
        self.accumulator = Duration::ZERO;
    }

    /// Advance the auto driver by a frame delta.
    ///
    /// In Manual mode this only accumulates quiet time; once the idle
    /// timeout elapses control reverts to Auto, and any excess beyond
    /// the timeout counts toward the first auto ticks so the spin
    /// resumes without a stutter.
    pub fn advance(&mut self, delta: Duration) {
        match self.mode {
            DriveMode::Manual => {
                if self.dragging {
                    return;
                }
                self.idle += delta;
                let timeout = Duration::from_millis(self.config.idle_timeout_ms);
                if self.idle >= timeout {
                    let excess = self.idle - timeout;
                    self.mode = DriveMode::Auto;
                    self.idle = Duration::ZERO;
                    self.accumulator = excess;
                    self.step_auto();
                }
            }
            DriveMode::Auto => {
                self.accumulator += delta;
                self.step_auto();
            }
        }
    }

    fn step_auto(&mut self) {
        let period = Duration::from_millis(self.config.auto_period_ms.max(1));
        while self.accumulator >= period {
            self.accumulator -= period;
            self.yaw += self.config.auto_step_deg;
        }
    }
}

impl Default for OrientationController {
    fn default() -> Self {
        Self::new(OrientationConfig::default())
    }
}
