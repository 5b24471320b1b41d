//! folio-core - Headless choreography core
//!
//! All state and animation logic for the folio terminal portfolio lives
//! here, free of any rendering dependency. The surface crate ticks these
//! controllers from its frame loop and paints whatever they report.
//!
//! - **Intro**: the splash-to-hero title merge (measure two rectangles,
//!   travel along an eased path, reveal the destination, complete once)
//! - **Orientation**: the two-axis cube rotation, auto-spinning when
//!   idle and pointer-steerable, with an idle-timeout handback
//! - **Cube**: face geometry, rotation, culling and projection math
//! - **Backdrop**: the seeded decorative icon field
//! - **Settings**: persisted theme preference behind a get/set/subscribe
//!   store abstraction
//! - **Content**: the page copy as plain data
//!
//! Controllers are tick-driven (`update(delta)` / `advance(delta)`), not
//! timer-driven: dropping one cancels everything it scheduled, so no
//! completion can ever be observed after its owner is gone.

pub mod animation;
pub mod backdrop;
pub mod config;
pub mod content;
pub mod cube;
pub mod error;
pub mod geometry;
pub mod intro;
pub mod orientation;
pub mod settings;

pub use animation::{CubicBezier, EasingFunction};
pub use backdrop::{IconField, IconSpec};
pub use config::Config;
pub use content::Content;
pub use error::CoreError;
pub use geometry::{GeometrySnapshot, RectF};
pub use intro::{IntroCoordinator, IntroEvent, IntroPhase, IntroStage, IntroTiming};
pub use orientation::{DriveMode, OrientationConfig, OrientationController, PitchPolicy};
pub use settings::{FileStore, MemoryStore, Settings, SettingsStore, ThemeMode};
