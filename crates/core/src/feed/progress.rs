//! Fixed-duration progress timer used by image items.
//!
//! Elapsed time is wall-clock time since start minus accumulated paused time,
//! so pausing freezes the percentage and resuming continues from it. The
//! timer never schedules anything itself; the host samples it via
//! [`ProgressTimer::tick`] at [`TICK_INTERVAL_MS`].

use crate::types::Millis;

/// How long an image stays on screen before the feed advances.
pub const IMAGE_DURATION_MS: Millis = 5000;

/// Sampling interval for smooth progress rendering (~60Hz).
pub const TICK_INTERVAL_MS: Millis = 16;

/// Proof that a timer finished, bound to the run it finished in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    pub generation: u64,
}

#[derive(Debug, Clone)]
pub struct ProgressTimer {
    duration_ms: Millis,
    started_at: Option<Millis>,
    paused_total: Millis,
    paused_since: Option<Millis>,
    completed: bool,
    generation: u64,
}

impl Default for ProgressTimer {
    fn default() -> Self {
        Self::new(IMAGE_DURATION_MS)
    }
}

impl ProgressTimer {
    pub fn new(duration_ms: Millis) -> Self {
        Self {
            duration_ms: duration_ms.max(1),
            started_at: None,
            paused_total: 0,
            paused_since: None,
            completed: false,
            generation: 0,
        }
    }

    pub fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn is_paused(&self) -> bool {
        self.paused_since.is_some()
    }

    pub fn is_running(&self) -> bool {
        self.is_started() && !self.is_paused() && !self.completed
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Start the timer, or resume it if it was paused.
    pub fn start(&mut self, now: Millis) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        } else {
            self.resume(now);
        }
    }

    pub fn pause(&mut self, now: Millis) {
        if self.is_running() {
            self.paused_since = Some(now);
        }
    }

    pub fn resume(&mut self, now: Millis) {
        if let Some(since) = self.paused_since.take() {
            self.paused_total += now.saturating_sub(since);
        }
    }

    /// Zero progress and invalidate any completion from the previous run.
    pub fn reset(&mut self) {
        self.started_at = None;
        self.paused_total = 0;
        self.paused_since = None;
        self.completed = false;
        self.generation += 1;
    }

    pub fn elapsed(&self, now: Millis) -> Millis {
        let Some(start) = self.started_at else {
            return 0;
        };
        let effective_now = self.paused_since.unwrap_or(now);
        effective_now
            .saturating_sub(start)
            .saturating_sub(self.paused_total)
            .min(self.duration_ms)
    }

    /// Progress in percent, clamped to `0..=100`.
    pub fn percent(&self, now: Millis) -> f64 {
        if self.completed {
            return 100.0;
        }
        (self.elapsed(now) as f64 / self.duration_ms as f64 * 100.0).min(100.0)
    }

    /// Sample the timer. Returns a completion exactly once per run.
    pub fn tick(&mut self, now: Millis) -> Option<Completion> {
        if !self.is_running() || self.elapsed(now) < self.duration_ms {
            return None;
        }
        self.completed = true;
        Some(Completion {
            generation: self.generation,
        })
    }

    /// Whether a completion belongs to the current run.
    pub fn is_current(&self, completion: Completion) -> bool {
        completion.generation == self.generation
    }
}

/// Playback position of a video as a percentage.
///
/// Returns 0 while the duration is unknown.
pub fn video_percent(current_time: f64, duration: f64) -> f64 {
    if !duration.is_finite() || duration <= 0.0 || !current_time.is_finite() {
        return 0.0;
    }
    (current_time / duration * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progresses_linearly() {
        let mut timer = ProgressTimer::new(5000);
        timer.start(1000);
        assert_eq!(timer.percent(1000), 0.0);
        assert_eq!(timer.percent(2250), 25.0);
        assert_eq!(timer.percent(3500), 50.0);
    }

    #[test]
    fn pause_freezes_and_resume_continues() {
        let mut timer = ProgressTimer::new(5000);
        timer.start(0);
        timer.pause(2500);
        assert_eq!(timer.percent(2500), 50.0);
        assert_eq!(timer.percent(9000), 50.0);

        timer.resume(9000);
        assert_eq!(timer.percent(9000), 50.0);
        assert_eq!(timer.percent(10250), 75.0);
    }

    #[test]
    fn paused_timer_never_completes() {
        let mut timer = ProgressTimer::new(5000);
        timer.start(0);
        timer.pause(1000);
        assert!(timer.tick(60_000).is_none());
    }

    #[test]
    fn completes_once() {
        let mut timer = ProgressTimer::new(5000);
        timer.start(0);
        assert!(timer.tick(4984).is_none());
        let completion = timer.tick(5000).unwrap();
        assert!(timer.is_current(completion));
        assert!(timer.tick(5016).is_none());
        assert_eq!(timer.percent(5016), 100.0);
    }

    #[test]
    fn reset_zeroes_and_invalidates_completion() {
        let mut timer = ProgressTimer::new(5000);
        timer.start(0);
        let completion = timer.tick(5000).unwrap();

        timer.reset();
        assert_eq!(timer.percent(6000), 0.0);
        assert!(!timer.is_started());
        assert!(!timer.is_current(completion));
    }

    #[test]
    fn unstarted_timer_reports_zero() {
        let timer = ProgressTimer::default();
        assert_eq!(timer.percent(10_000), 0.0);
        assert!(!timer.is_running());
    }

    #[test]
    fn start_on_paused_timer_resumes() {
        let mut timer = ProgressTimer::new(1000);
        timer.start(0);
        timer.pause(500);
        timer.start(800);
        assert!(timer.is_running());
        assert_eq!(timer.percent(800), 50.0);
    }

    #[test]
    fn video_percent_handles_unknown_duration() {
        assert_eq!(video_percent(3.0, 0.0), 0.0);
        assert_eq!(video_percent(3.0, f64::NAN), 0.0);
        assert_eq!(video_percent(5.0, 10.0), 50.0);
        assert_eq!(video_percent(12.0, 10.0), 100.0);
    }
}
