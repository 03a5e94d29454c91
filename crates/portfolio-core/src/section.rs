//! Page sections and scroll-driven navigation highlighting.
//!
//! The page is one long scroll container split into seven sections. After
//! every scroll event the UI measures each section's client rectangle and
//! feeds them, in document order, to [`ScrollTracker::observe`]. The first
//! section spanning the reference line 100px below the viewport top becomes
//! the active one; if none spans it, the previous value is kept.

use std::fmt;

/// Distance from the viewport top, in CSS pixels, of the line that decides
/// which section is active.
pub const REFERENCE_LINE_PX: f64 = 100.0;

/// A named, scroll-addressable region of the page.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Section {
    #[default]
    Home,
    About,
    Education,
    Experience,
    Projects,
    Skills,
    Contact,
}

impl Section {
    /// All sections in document order.
    pub const ALL: [Section; 7] = [
        Section::Home,
        Section::About,
        Section::Education,
        Section::Experience,
        Section::Projects,
        Section::Skills,
        Section::Contact,
    ];

    /// Element id, also used as the in-page anchor (`#projects`).
    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Education => "education",
            Section::Experience => "experience",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Contact => "contact",
        }
    }

    /// Label shown in the navigation bar.
    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Education => "Education",
            Section::Experience => "Experience",
            Section::Projects => "Projects",
            Section::Skills => "Skills",
            Section::Contact => "Contact",
        }
    }

    /// Anchor href for the navigation link.
    pub fn href(&self) -> String {
        format!("#{}", self.id())
    }

    /// Position in document order.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Vertical extent of a section relative to the viewport top.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SectionBounds {
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// Whether the section spans the horizontal line `line` px below the
    /// viewport top. Both edges are inclusive.
    pub fn spans(&self, line: f64) -> bool {
        self.top <= line && self.bottom >= line
    }
}

/// Pick the first section, in the given order, whose bounds span the
/// reference line. Sections without bounds (not mounted, not measurable)
/// are skipped.
pub fn section_at_line<I>(measurements: I) -> Option<Section>
where
    I: IntoIterator<Item = (Section, Option<SectionBounds>)>,
{
    measurements
        .into_iter()
        .find(|(_, bounds)| bounds.is_some_and(|b| b.spans(REFERENCE_LINE_PX)))
        .map(|(section, _)| section)
}

/// Holds the active section for navigation highlighting.
///
/// Starts at [`Section::Home`]. Only [`observe`](Self::observe) mutates it.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct ScrollTracker {
    active: Section,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently highlighted section.
    pub fn active(&self) -> Section {
        self.active
    }

    /// Apply one scroll event's measurements.
    ///
    /// Returns `true` if the active section changed. When no section spans
    /// the reference line the last known value is kept.
    pub fn observe<I>(&mut self, measurements: I) -> bool
    where
        I: IntoIterator<Item = (Section, Option<SectionBounds>)>,
    {
        match section_at_line(measurements) {
            Some(section) if section != self.active => {
                tracing::debug!(from = %self.active, to = %section, "Active section changed");
                self.active = section;
                true
            }
            _ => false,
        }
    }
}

/// Orders asynchronous section measurements.
///
/// Each scroll event takes a ticket before measuring. Measuring is async, so
/// results can come back out of order; a result is applied only if no newer
/// result has been applied already.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct MeasureSequence {
    issued: u64,
    applied: u64,
}

impl MeasureSequence {
    /// Ticket for a measurement that is about to start.
    pub fn issue(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Whether the measurement holding `ticket` may be applied. Accepting a
    /// ticket retires it and every older one.
    pub fn accept(&mut self, ticket: u64) -> bool {
        if ticket <= self.applied || ticket > self.issued {
            return false;
        }
        self.applied = ticket;
        true
    }
}
