//! Portfolio UI Components
//!
//! Stateless Dioxus components for the portfolio page. Each one renders a
//! single record or form control; page-level state lives in the app crate.
//!
//! ## Palette
//!
//! - **Blood red (#8b0000)**: accents, active links, skill bars, particles
//! - **Near black (#000000 / #111827)**: page and card backgrounds
//! - **White / gray-300**: body text
//!
//! Class names match the global stylesheet in the app crate.

pub mod components;

pub use components::*;
