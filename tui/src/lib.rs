//! folio TUI - a single-page portfolio in your terminal
//!
//! The surface is a thin client over `folio-core`: it ticks the core
//! controllers from its frame loop and paints whatever they report.
//!
//! - **Compositor**: z-ordered layers with per-layer opacity, used for
//!   the splash overlay and the post-intro content fade-in
//! - **Intro**: the splash screen and the traveling title
//! - **Sections**: the scrollable page document (hero, skills,
//!   projects, about, contact)
//! - **Cube**: rasterizes the core's cube geometry into cells
//! - **Backdrop**: the seeded decorative icon field
//!
//! ## Event flow
//!
//! ```text
//! Terminal events -> App -> core controllers -> layer buffers -> composite
//! ```

pub mod app;
pub mod backdrop;
pub mod compositor;
pub mod cube;
pub mod glyphs;
pub mod icons;
pub mod intro;
pub mod sections;
pub mod theme;

pub use app::App;
pub use compositor::{Compositor, LayerId};
pub use theme::Palette;
