//! End-to-end scenarios for the page's time- and scroll-driven state.
//!
//! Timer scenarios run on tokio's paused clock so firings land exactly on
//! their scheduled instants.

use std::cell::RefCell;
use std::time::Duration;

use portfolio_core::{
    run_captions, run_frames, CaptionCycle, CaptionFrame, Content, MeasureSequence,
    ParticleField, ScrollTracker, Section, SectionBounds, CAPTION_INTERVAL, CAPTION_TRANSITION,
    FRAME_PERIOD, PARTICLE_COUNT,
};
use tokio::time::{self, Instant};

/// Stack the seven sections top to bottom, each `height` px tall, with the
/// page scrolled by `scroll` px.
fn layout(scroll: f64, height: f64) -> Vec<(Section, Option<SectionBounds>)> {
    Section::ALL
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let top = i as f64 * height - scroll;
            (*s, Some(SectionBounds::new(top, top + height)))
        })
        .collect()
}

// ============================================================================
// Subtitle timer
// ============================================================================

/// Drive `cycle` with the caption timer until `limit` has elapsed, then drop
/// the driver the way unmounting the subtitle does.
async fn drive_captions(cycle: &RefCell<CaptionCycle>, limit: Duration) -> usize {
    let mut fired = 0;
    let _ = time::timeout(
        limit,
        run_captions(
            CAPTION_INTERVAL,
            CAPTION_TRANSITION,
            || {
                fired += 1;
                let mut cycle = cycle.borrow_mut();
                cycle.advance();
                cycle.is_exiting()
            },
            || cycle.borrow_mut().complete_exit(),
        ),
    )
    .await;
    fired
}

#[tokio::test(start_paused = true)]
async fn two_captions_alternate_every_three_seconds() {
    let cycle = RefCell::new(CaptionCycle::new(vec![
        "Data Engineer".to_string(),
        "Problem Solver".to_string(),
    ]));
    assert_eq!(cycle.borrow().index(), 0);

    drive_captions(&cycle, Duration::from_millis(3600)).await;
    assert_eq!(cycle.borrow().index(), 1);

    drive_captions(&cycle, Duration::from_millis(3600)).await;
    assert_eq!(cycle.borrow().index(), 0);
}

#[tokio::test(start_paused = true)]
async fn new_caption_enters_only_after_old_one_exits() {
    let cycle = RefCell::new(CaptionCycle::new(vec![
        "Data Engineer".to_string(),
        "Problem Solver".to_string(),
    ]));
    let start = Instant::now();

    let driver = run_captions(
        CAPTION_INTERVAL,
        CAPTION_TRANSITION,
        || {
            let mut cycle = cycle.borrow_mut();
            cycle.advance();
            cycle.is_exiting()
        },
        || cycle.borrow_mut().complete_exit(),
    );

    // Sample just off the 3.0s and 3.5s deadlines so ordering against the
    // driver's own timers is unambiguous
    let samples = async {
        let mut seen = Vec::new();
        for ms in [2990, 3010, 3400, 3490, 3510, 6010, 6510] {
            time::sleep_until(start + Duration::from_millis(ms)).await;
            seen.push(format!("{:?}", cycle.borrow().frame()));
        }
        seen
    };

    let seen = tokio::select! {
        _ = driver => unreachable!("caption driver runs until cancelled"),
        seen = samples => seen,
    };

    assert_eq!(
        seen,
        vec![
            format!("{:?}", CaptionFrame::Entering("Data Engineer")),
            format!("{:?}", CaptionFrame::Exiting("Data Engineer")),
            format!("{:?}", CaptionFrame::Exiting("Data Engineer")),
            format!("{:?}", CaptionFrame::Exiting("Data Engineer")),
            format!("{:?}", CaptionFrame::Entering("Problem Solver")),
            format!("{:?}", CaptionFrame::Exiting("Problem Solver")),
            format!("{:?}", CaptionFrame::Entering("Data Engineer")),
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn empty_caption_list_survives_timer() {
    let cycle = RefCell::new(CaptionCycle::new(Vec::new()));

    let fired = drive_captions(&cycle, Duration::from_secs(10)).await;

    assert_eq!(fired, 3);
    assert_eq!(cycle.borrow().frame(), CaptionFrame::Empty);
}

#[tokio::test(start_paused = true)]
async fn cancelling_the_timer_stops_updates() {
    let cycle = RefCell::new(CaptionCycle::new(vec!["a".into(), "b".into(), "c".into()]));

    // Unmount after 4s: dropping the future is the cancellation
    drive_captions(&cycle, Duration::from_secs(4)).await;
    time::sleep(Duration::from_secs(30)).await;

    assert_eq!(cycle.borrow().index(), 1);
    assert!(!cycle.borrow().is_exiting());
}

// ============================================================================
// Particle field
// ============================================================================

#[tokio::test(start_paused = true)]
async fn rotation_matches_elapsed_time() {
    let mut field = ParticleField::from_seed(2024);

    let _ = time::timeout(
        Duration::from_secs(10),
        run_frames(FRAME_PERIOD, |dt| field.advance(dt)),
    )
    .await;

    let rotation = field.rotation();
    assert_eq!(field.len(), PARTICLE_COUNT);
    // Last frame lands a few ms short of the timeout
    assert!((rotation.x - 1.0).abs() < 0.01, "x = {}", rotation.x);
    assert_eq!(rotation.x, rotation.y);
}

// ============================================================================
// Scroll tracking
// ============================================================================

#[test]
fn projects_section_across_reference_line() {
    let mut tracker = ScrollTracker::new();
    let mut bounds: Vec<_> = Section::ALL.iter().map(|s| (*s, None)).collect();
    bounds[Section::Experience.index()].1 = Some(SectionBounds::new(-700.0, 49.0));
    bounds[Section::Projects.index()].1 = Some(SectionBounds::new(50.0, 800.0));
    bounds[Section::Skills.index()].1 = Some(SectionBounds::new(800.0, 1600.0));

    assert!(tracker.observe(bounds));
    assert_eq!(tracker.active(), Section::Projects);
}

#[test]
fn scrolling_down_walks_through_every_section() {
    let mut tracker = ScrollTracker::new();
    let height = 900.0;
    let mut visited = vec![tracker.active()];

    let mut scroll = 0.0;
    while scroll < height * 7.0 {
        if tracker.observe(layout(scroll, height)) {
            visited.push(tracker.active());
        }
        scroll += 37.0;
    }

    assert_eq!(visited, Section::ALL.to_vec());
}

#[test]
fn overscroll_keeps_last_section() {
    let mut tracker = ScrollTracker::new();
    tracker.observe(layout(6.0 * 900.0, 900.0));
    assert_eq!(tracker.active(), Section::Contact);

    // Past the end nothing spans the line
    assert!(!tracker.observe(layout(20_000.0, 900.0)));
    assert_eq!(tracker.active(), Section::Contact);
}

#[test]
fn slow_measurement_never_overrides_newer_one() {
    let mut tracker = ScrollTracker::new();
    let mut sequence = MeasureSequence::default();

    // Two scroll events; the second one's measurement finishes first
    let at_projects = sequence.issue();
    let at_skills = sequence.issue();

    if sequence.accept(at_skills) {
        tracker.observe(layout(5.0 * 900.0, 900.0));
    }
    assert_eq!(tracker.active(), Section::Skills);

    if sequence.accept(at_projects) {
        tracker.observe(layout(4.0 * 900.0, 900.0));
    }
    assert_eq!(tracker.active(), Section::Skills);
}

// ============================================================================
// Content
// ============================================================================

#[test]
fn content_file_roundtrip_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("content.json");
    let mut content = Content::builtin();
    content.captions = vec!["Data Engineer".to_string(), "Problem Solver".to_string()];
    std::fs::write(&path, serde_json::to_string_pretty(&content).unwrap()).unwrap();

    let loaded = Content::load(&path).unwrap();
    assert_eq!(loaded, content);
}

#[test]
fn missing_content_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Content::load(dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, portfolio_core::PortfolioError::Io(_)));
}

#[test]
fn invalid_content_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("content.json");
    let mut content = Content::builtin();
    content.skill_groups[0].skills[0].level = 101;
    std::fs::write(&path, serde_json::to_string(&content).unwrap()).unwrap();

    let err = Content::load(&path).unwrap_err();
    assert!(matches!(err, portfolio_core::PortfolioError::InvalidContent(_)));
}
