//! Page configuration context.
//!
//! Command-line options are resolved in `main` into a [`PageConfig`], which
//! the root component provides to every component via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let config = use_page_config();
//! for project in &config.content.projects { /* ... */ }
//! ```

use std::rc::Rc;

use dioxus::prelude::*;
use portfolio_core::Content;

/// Whether the decorative 3D background is mounted.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Background {
    /// No rendering surface for the background; the page renders without it.
    Disabled,
    /// Rotating particle field, optionally with a fixed layout seed.
    Particles { seed: Option<u64> },
}

impl Default for Background {
    fn default() -> Self {
        Background::Particles { seed: None }
    }
}

/// Everything the page needs that is decided before launch.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct PageConfig {
    pub content: Content,
    pub background: Background,
}

/// Get the page configuration resolved from the command line.
pub fn get_page_config() -> PageConfig {
    crate::get_page_config()
}

/// Hook to access the page configuration from context.
pub fn use_page_config() -> Rc<PageConfig> {
    use_context::<Rc<PageConfig>>()
}
