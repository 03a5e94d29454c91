//! Animated Subtitle Component
//!
//! Cycles the hero subtitle through the configured captions every three
//! seconds. The outgoing caption fades up and out before the next one
//! fades in from below; the two are never on screen together.

use dioxus::prelude::*;
use portfolio_core::{run_captions, CaptionCycle, CaptionFrame, CAPTION_INTERVAL, CAPTION_TRANSITION};

/// Class and text for one caption frame.
fn frame_view(frame: CaptionFrame<'_>) -> (&'static str, String) {
    match frame {
        CaptionFrame::Exiting(text) => ("subtitle subtitle--exit", text.to_string()),
        CaptionFrame::Entering(text) => ("subtitle subtitle--enter", text.to_string()),
        CaptionFrame::Empty => ("subtitle subtitle--empty", String::new()),
    }
}

/// Hero subtitle driven by a repeating timer.
///
/// The timer task is acquired on mount and cancelled on unmount.
#[component]
pub fn AnimatedSubtitle(captions: Vec<String>) -> Element {
    let mut cycle = use_signal(|| CaptionCycle::new(captions.clone()));

    let timer = use_hook(|| {
        spawn(async move {
            run_captions(
                CAPTION_INTERVAL,
                CAPTION_TRANSITION,
                move || {
                    cycle.write().advance();
                    cycle.peek().is_exiting()
                },
                move || cycle.write().complete_exit(),
            )
            .await;
        })
    });

    use_drop(move || {
        tracing::debug!("Subtitle unmounted, cancelling caption timer");
        timer.cancel();
    });

    let index = cycle.read().index();
    let (class, text) = frame_view(cycle.read().frame());
    let phase = if cycle.read().is_exiting() { "out" } else { "in" };

    rsx! {
        div { class: "subtitle-slot",
            // Keyed so the CSS animation restarts for every caption change
            h2 { key: "{index}-{phase}", class: "{class}", "{text}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_map_to_transition_classes() {
        assert_eq!(
            frame_view(CaptionFrame::Exiting("Data Engineer")),
            ("subtitle subtitle--exit", "Data Engineer".to_string())
        );
        assert_eq!(
            frame_view(CaptionFrame::Entering("Problem Solver")),
            ("subtitle subtitle--enter", "Problem Solver".to_string())
        );
        assert_eq!(frame_view(CaptionFrame::Empty).1, "");
    }
}
