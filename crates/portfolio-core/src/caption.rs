//! Hero subtitle captions.
//!
//! A [`CaptionCycle`] owns an ordered list of captions and the index of the
//! one being shown. A repeating timer calls [`CaptionCycle::advance`] every
//! [`CAPTION_INTERVAL`]. Changes use "wait" ordering: the previous caption is
//! kept as the outgoing caption while it plays its exit transition, and the
//! new one is only presented after [`CaptionCycle::complete_exit`].

use std::time::Duration;

/// Time between caption changes.
pub const CAPTION_INTERVAL: Duration = Duration::from_millis(3000);

/// Length of both the exit and the enter transition.
pub const CAPTION_TRANSITION: Duration = Duration::from_millis(500);

/// What the subtitle slot should render right now.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CaptionFrame<'a> {
    /// Old caption fading out and moving up; the new one waits.
    Exiting(&'a str),
    /// Current caption fading in from below (or at rest).
    Entering(&'a str),
    /// No captions configured.
    Empty,
}

#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct CaptionCycle {
    captions: Vec<String>,
    index: usize,
    outgoing: Option<usize>,
}

impl CaptionCycle {
    pub fn new(captions: Vec<String>) -> Self {
        if captions.is_empty() {
            tracing::warn!("No subtitle captions configured; subtitle stays blank");
        }
        Self {
            captions,
            index: 0,
            outgoing: None,
        }
    }

    /// Index of the current caption.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The current caption, `None` when the list is empty.
    pub fn current(&self) -> Option<&str> {
        self.captions.get(self.index).map(String::as_str)
    }

    /// Whether an exit transition is still pending.
    pub fn is_exiting(&self) -> bool {
        self.outgoing.is_some()
    }

    /// Move to the next caption, wrapping after the last one.
    ///
    /// The caption being replaced becomes the outgoing caption. A no-op for
    /// an empty list.
    pub fn advance(&mut self) {
        if self.captions.is_empty() {
            return;
        }
        let next = (self.index + 1) % self.captions.len();
        self.outgoing = Some(self.index);
        self.index = next;
    }

    /// The outgoing caption finished its exit; present the current one.
    pub fn complete_exit(&mut self) {
        self.outgoing = None;
    }

    pub fn frame(&self) -> CaptionFrame<'_> {
        if let Some(caption) = self.outgoing.and_then(|i| self.captions.get(i)) {
            return CaptionFrame::Exiting(caption);
        }
        match self.current() {
            Some(caption) => CaptionFrame::Entering(caption),
            None => CaptionFrame::Empty,
        }
    }
}
