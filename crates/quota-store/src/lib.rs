//! Client-local persisted state for the phone lookup tool.
//!
//! Holds the daily free-lookup counter and the premium waitlist as JSON
//! values in a data directory. The quota is a soft limit: it lives entirely
//! in storage the user controls, so deleting the data directory resets it.
//! It is not a security control.

mod error;
mod quota;
mod storage;
mod waitlist;

pub use error::{StoreError, WaitlistError};
pub use quota::{
    date_key, time_until_midnight, today, QuotaRecord, QuotaTracker, DEFAULT_DAILY_LIMIT,
    QUOTA_KEY,
};
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use waitlist::{validate_email, Waitlist, WaitlistEntry, WAITLIST_KEY};

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[tokio::test]
    async fn test_quota_persists_in_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let now = NaiveDate::from_ymd_opt(2024, 6, 5)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();

        let tracker = QuotaTracker::new(Storage::file(dir.path()));
        tracker.record_lookup_at(&now).await;
        tracker.record_lookup_at(&now).await;

        // A new process sees the same count
        let reopened = QuotaTracker::new(Storage::file(dir.path()));
        assert_eq!(reopened.remaining_at(&now).await, 1);

        let raw = std::fs::read_to_string(dir.path().join("quicklookup_daily_count.json")).unwrap();
        assert_eq!(raw, r#"{"count":2,"date":"2024-06-05"}"#);
    }

    #[tokio::test]
    async fn test_quota_and_waitlist_share_storage() {
        let storage = Storage::memory();
        let tracker = QuotaTracker::new(storage.clone());
        let waitlist = Waitlist::new(storage.clone());

        tracker.record_lookup().await;
        waitlist.join("a@example.com").await.unwrap();

        assert!(storage.read_raw(QUOTA_KEY).await.unwrap().is_some());
        assert!(storage.read_raw(WAITLIST_KEY).await.unwrap().is_some());
        assert_eq!(tracker.remaining().await, 2);
    }

    #[tokio::test]
    async fn test_missing_data_dir_reads_as_fresh() {
        let dir = tempfile::tempdir().unwrap();
        let tracker = QuotaTracker::new(Storage::file(dir.path().join("missing")));

        assert_eq!(tracker.record().await, QuotaRecord::fresh(today()));
        assert!(tracker.can_lookup().await);
    }
}
