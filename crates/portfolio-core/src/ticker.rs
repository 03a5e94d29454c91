//! Timer and frame drivers.
//!
//! Both drivers are plain futures that never complete. The UI spawns them as
//! tasks when a component mounts and cancels the task when it unmounts;
//! dropping the future is the only way to stop them. The callbacks are
//! `FnMut` without a `Send` bound so they can write directly into
//! single-threaded UI state.

use std::time::Duration;

use tokio::time::{self, Instant, MissedTickBehavior};

/// Target frame period for the background animation (~60 Hz).
pub const FRAME_PERIOD: Duration = Duration::from_millis(16);

/// Drive a caption cycle with "wait" ordering.
///
/// Every `period`, starting one full period after start, the driver calls
/// `on_advance`, which moves to the next caption and returns whether an exit
/// transition started. If one did, the driver waits `transition` and then
/// calls `on_exit_complete`; the new caption enters only from that point on.
pub async fn run_captions<A, E>(
    period: Duration,
    transition: Duration,
    mut on_advance: A,
    mut on_exit_complete: E,
) where
    A: FnMut() -> bool,
    E: FnMut(),
{
    let mut interval = time::interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
        interval.tick().await;
        if on_advance() {
            time::sleep(transition).await;
            on_exit_complete();
        }
    }
}

/// Call `on_frame` once per frame with the seconds elapsed since the
/// previous frame.
///
/// Frames that fall behind are skipped rather than replayed; the next delta
/// covers the whole gap, so accumulated time stays equal to wall time.
pub async fn run_frames<F>(frame_period: Duration, mut on_frame: F)
where
    F: FnMut(f32),
{
    let mut interval = time::interval(frame_period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    interval.tick().await;
    let mut last = Instant::now();
    loop {
        interval.tick().await;
        let now = Instant::now();
        on_frame(now.duration_since(last).as_secs_f32());
        last = now;
    }
}
