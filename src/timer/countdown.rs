use chrono::{DateTime, Duration, Local};

/// Result of polling the countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Poll {
    /// No deadline is set
    Stopped,
    /// Still counting; whole seconds left, rounded up
    Ticking(u32),
    /// The deadline passed on this poll. Reported once.
    Expired,
}

/// Deadline-driven countdown.
///
/// While running only the absolute deadline is stored; remaining time is
/// always derived as `deadline - now`, so late or skipped polls never drift.
#[derive(Debug, Clone, PartialEq)]
pub struct Countdown {
    remaining_secs: u32,
    deadline: Option<DateTime<Local>>,
}

/// Whole seconds from `now` to `deadline`, rounded up, never negative
fn ceil_secs(deadline: DateTime<Local>, now: DateTime<Local>) -> u32 {
    let millis = (deadline - now).num_milliseconds();
    if millis <= 0 {
        0
    } else {
        ((millis + 999) / 1000) as u32
    }
}

impl Countdown {
    pub fn new(total_secs: u32) -> Self {
        Self {
            remaining_secs: total_secs,
            deadline: None,
        }
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn deadline(&self) -> Option<DateTime<Local>> {
        self.deadline
    }

    pub fn is_ticking(&self) -> bool {
        self.deadline.is_some()
    }

    /// Set the deadline from the remaining time
    pub fn start(&mut self, now: DateTime<Local>) {
        self.deadline = Some(now + Duration::seconds(self.remaining_secs as i64));
    }

    /// Capture what is left and drop the deadline
    pub fn pause(&mut self, now: DateTime<Local>) {
        if let Some(deadline) = self.deadline.take() {
            self.remaining_secs = ceil_secs(deadline, now);
        }
    }

    /// Re-derive a fresh deadline from the captured remaining time
    pub fn resume(&mut self, now: DateTime<Local>) {
        self.start(now);
    }

    /// Restore the full duration and stop
    pub fn reset(&mut self, total_secs: u32) {
        self.remaining_secs = total_secs;
        self.deadline = None;
    }

    pub fn poll(&mut self, now: DateTime<Local>) -> Poll {
        let Some(deadline) = self.deadline else {
            return Poll::Stopped;
        };
        let left = ceil_secs(deadline, now);
        self.remaining_secs = left;
        if left == 0 {
            self.deadline = None;
            Poll::Expired
        } else {
            Poll::Ticking(left)
        }
    }

    /// Fraction of `total_secs` already used, 0.0..=1.0
    pub fn progress(&self, total_secs: u32) -> f64 {
        if total_secs == 0 {
            return 0.0;
        }
        let used = total_secs.saturating_sub(self.remaining_secs);
        (used as f64 / total_secs as f64).clamp(0.0, 1.0)
    }
}

/// Format seconds as "MM:SS" (minutes may exceed 59)
pub fn format_clock(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t0() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 10, 9, 0, 0).unwrap()
    }

    #[test]
    fn test_remaining_is_ceil_of_elapsed() {
        let mut countdown = Countdown::new(1500);
        countdown.start(t0());

        let cases = [(0, 1500), (1, 1500), (999, 1500), (1000, 1499), (1001, 1499), (61_500, 1439), (1_499_001, 1)];
        for (elapsed_ms, expected) in cases {
            let now = t0() + Duration::milliseconds(elapsed_ms);
            assert_eq!(countdown.poll(now), Poll::Ticking(expected), "elapsed {}ms", elapsed_ms);
        }
    }

    #[test]
    fn test_poll_frequency_does_not_matter() {
        let mut sparse = Countdown::new(300);
        let mut dense = Countdown::new(300);
        sparse.start(t0());
        dense.start(t0());

        for step in 0..=600 {
            dense.poll(t0() + Duration::milliseconds(step * 200));
        }
        // Repeated polls at the same instant are idempotent
        sparse.poll(t0() + Duration::seconds(120));
        sparse.poll(t0() + Duration::seconds(120));

        assert_eq!(dense.poll(t0() + Duration::seconds(120)), Poll::Ticking(180));
        assert_eq!(sparse.poll(t0() + Duration::seconds(120)), Poll::Ticking(180));
    }

    #[test]
    fn test_expires_exactly_once() {
        let mut countdown = Countdown::new(60);
        countdown.start(t0());
        assert_eq!(countdown.poll(t0() + Duration::seconds(60)), Poll::Expired);
        assert_eq!(countdown.remaining_secs(), 0);
        assert!(!countdown.is_ticking());
        assert_eq!(countdown.poll(t0() + Duration::seconds(61)), Poll::Stopped);
    }

    #[test]
    fn test_late_poll_expires() {
        let mut countdown = Countdown::new(60);
        countdown.start(t0());
        assert_eq!(countdown.poll(t0() + Duration::hours(3)), Poll::Expired);
    }

    #[test]
    fn test_pause_resume_without_elapsed_time() {
        let mut countdown = Countdown::new(1500);
        countdown.start(t0());
        let at = t0() + Duration::milliseconds(42_300);
        countdown.poll(at);
        let before = countdown.remaining_secs();

        countdown.pause(at);
        countdown.resume(at);
        assert_eq!(countdown.poll(at), Poll::Ticking(before));
    }

    #[test]
    fn test_paused_time_is_not_counted() {
        let mut countdown = Countdown::new(600);
        countdown.start(t0());
        countdown.pause(t0() + Duration::seconds(100));
        assert_eq!(countdown.remaining_secs(), 500);
        assert_eq!(countdown.poll(t0() + Duration::seconds(400)), Poll::Stopped);

        let resumed = t0() + Duration::seconds(1000);
        countdown.resume(resumed);
        assert_eq!(countdown.deadline(), Some(resumed + Duration::seconds(500)));
        assert_eq!(countdown.poll(resumed + Duration::seconds(10)), Poll::Ticking(490));
    }

    #[test]
    fn test_reset_and_progress() {
        let mut countdown = Countdown::new(100);
        countdown.start(t0());
        countdown.poll(t0() + Duration::seconds(25));
        assert!((countdown.progress(100) - 0.25).abs() < f64::EPSILON);

        countdown.reset(300);
        assert_eq!(countdown.remaining_secs(), 300);
        assert!(!countdown.is_ticking());
        assert_eq!(countdown.progress(300), 0.0);
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(1500), "25:00");
        assert_eq!(format_clock(61), "01:01");
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(5400), "90:00");
    }
}
