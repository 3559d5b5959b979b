//! Status command - remaining free lookups for today.

use quota_store::QuotaTracker;

pub async fn run(tracker: &QuotaTracker) -> String {
    let remaining = tracker.remaining().await;

    format!(
        "{} of {} free lookups remaining today\nResets in {}",
        remaining,
        tracker.daily_limit(),
        tracker.time_until_reset()
    )
}
