//! Color constants for the portfolio palette.
//!
//! Mirrored as CSS custom properties in the global stylesheet.

#![allow(dead_code)]

// === BACKGROUNDS ===
pub const PAGE_BLACK: &str = "#000000";
pub const CARD_GRAY: &str = "#111827";
pub const TRACK_GRAY: &str = "#374151";

// === ACCENT (links, bars, particles) ===
pub const ACCENT: &str = "#8b0000";
pub const ACCENT_HOVER: &str = "#a50000";
pub const ACCENT_DEEP: &str = "#991b1b";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#ffffff";
pub const TEXT_SECONDARY: &str = "#d1d5db";
pub const TEXT_MUTED: &str = "#9ca3af";
pub const LINK_BLUE: &str = "#60a5fa";
