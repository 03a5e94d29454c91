//! Portfolio Core Library
//!
//! Framework-free state and content for the single-page portfolio.
//!
//! ## Overview
//!
//! The page itself is declarative markup; the pieces that change over time
//! live here so they can be tested without a renderer:
//!
//! - **Scroll tracking**: which [`Section`] spans the 100px reference line
//! - **Caption cycling**: the hero subtitle, advanced by a repeating timer
//! - **Particle field**: a fixed point cloud rotated as one rigid body
//! - **Hover flags**: per-card pointer state
//!
//! Timers and frame loops are driven by [`ticker`], which the UI spawns on
//! mount and cancels on unmount.
//!
//! ## Quick Start
//!
//! ```
//! use portfolio_core::{ScrollTracker, Section, SectionBounds};
//!
//! let mut tracker = ScrollTracker::new();
//! let changed = tracker.observe([
//!     (Section::Home, Some(SectionBounds::new(-900.0, -100.0))),
//!     (Section::Projects, Some(SectionBounds::new(50.0, 800.0))),
//! ]);
//! assert!(changed);
//! assert_eq!(tracker.active(), Section::Projects);
//! ```

pub mod caption;
pub mod content;
pub mod error;
pub mod hover;
pub mod particles;
pub mod section;
pub mod ticker;

// Re-exports
pub use caption::{CaptionCycle, CaptionFrame, CAPTION_INTERVAL, CAPTION_TRANSITION};
pub use content::{Content, Education, Experience, Profile, Project, Skill, SkillGroup};
pub use error::{PortfolioError, PortfolioResult};
pub use hover::HoverFlag;
pub use particles::{
    ParticleField, Point3, Rotation, SkillOrbit, PARTICLE_COUNT, ROTATION_SPEED,
};
pub use section::{
    section_at_line, MeasureSequence, ScrollTracker, Section, SectionBounds, REFERENCE_LINE_PX,
};
pub use ticker::{run_captions, run_frames, FRAME_PERIOD};
