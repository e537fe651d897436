//! Delay — suspends the calling task between retry attempts.
//!
//! Thin wrapper over `tokio::time::sleep` with one extra guarantee: the
//! returned future is never ready on its first poll, even for a zero
//! duration, so callers always yield at least once to the scheduler.

use std::time::Duration;

/// Suspend the calling task for `duration`. No cancellation surface, no
/// payload; resolves exactly once.
pub async fn delay(duration: Duration) {
    if duration.is_zero() {
        tokio::task::yield_now().await;
    } else {
        tokio::time::sleep(duration).await;
    }
}

/// Suspend the calling task for `ms` milliseconds.
pub async fn delay_ms(ms: u64) {
    delay(Duration::from_millis(ms)).await;
}
