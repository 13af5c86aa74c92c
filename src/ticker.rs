use std::time::Duration;

/// Poll interval for the countdown, in milliseconds
pub const DEFAULT_TICK_MS: u64 = 200;

/// Get tick duration
pub fn tick_duration() -> Duration {
    Duration::from_millis(DEFAULT_TICK_MS)
}
