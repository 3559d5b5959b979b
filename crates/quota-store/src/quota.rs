//! Daily free-lookup quota with date rollover.

use crate::storage::Storage;
use chrono::{DateTime, Duration, Local, NaiveDateTime, NaiveTime, TimeZone};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Storage key of the daily quota record.
pub const QUOTA_KEY: &str = "quicklookup_daily_count";

/// Free lookups per calendar day.
pub const DEFAULT_DAILY_LIMIT: u32 = 3;

/// Lookups recorded on a single calendar day.
///
/// `count` only applies to `date`; on any other day it reads as zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotaRecord {
    pub count: u32,
    /// Local calendar date, `YYYY-MM-DD`
    pub date: String,
}

impl QuotaRecord {
    /// A zero record for `date`.
    pub fn fresh(date: impl Into<String>) -> Self {
        Self {
            count: 0,
            date: date.into(),
        }
    }

    /// Whether this record belongs to `today`.
    pub fn is_current(&self, today: &str) -> bool {
        self.date == today
    }
}

/// Current local calendar date as `YYYY-MM-DD`.
pub fn today() -> String {
    date_key(&Local::now().naive_local())
}

/// Calendar date key for a local wall-clock time.
pub fn date_key(now: &NaiveDateTime) -> String {
    now.format("%Y-%m-%d").to_string()
}

/// Elapsed time from `now` until the next midnight in its own time zone,
/// floored to `Hh Mm`.
///
/// Both instants are resolved in the zone before subtracting, so days with a
/// DST change count 23 or 25 hours. If midnight falls in a DST gap, the reset
/// happens at the first valid hour after it.
pub fn time_until_midnight<Tz: TimeZone>(now: &DateTime<Tz>) -> String {
    let tz = now.timezone();
    let midnight = now
        .date_naive()
        .succ_opt()
        .map(|d| d.and_time(NaiveTime::MIN))
        .and_then(|local| {
            tz.from_local_datetime(&local)
                .earliest()
                .or_else(|| tz.from_local_datetime(&(local + Duration::hours(1))).earliest())
        });

    let Some(midnight) = midnight else {
        return "0h 0m".into();
    };

    let diff = midnight.signed_duration_since(now.clone());
    format!("{}h {}m", diff.num_hours(), diff.num_minutes() % 60)
}

/// Tracks free lookups per day in client-local storage.
///
/// Every operation comes in two forms: the plain one reads the local clock,
/// the `_at` one takes the local wall-clock time explicitly.
///
/// Reads and writes are not synchronized across processes. Two processes
/// sharing a data directory can both read the same count before either
/// writes, granting more than the daily limit.
#[derive(Debug, Clone)]
pub struct QuotaTracker {
    storage: Storage,
    daily_limit: u32,
}

impl QuotaTracker {
    /// Create a tracker with the default limit of three lookups per day.
    pub fn new(storage: Storage) -> Self {
        Self::with_limit(storage, DEFAULT_DAILY_LIMIT)
    }

    pub fn with_limit(storage: Storage, daily_limit: u32) -> Self {
        Self {
            storage,
            daily_limit,
        }
    }

    pub fn daily_limit(&self) -> u32 {
        self.daily_limit
    }

    /// Whether another lookup is allowed today.
    pub async fn can_lookup(&self) -> bool {
        self.can_lookup_at(&Local::now().naive_local()).await
    }

    /// Like [`Self::can_lookup`]; persists a reset record on rollover.
    #[instrument(skip(self))]
    pub async fn can_lookup_at(&self, now: &NaiveDateTime) -> bool {
        let today = date_key(now);
        let record = self.load(&today).await;

        if !record.is_current(&today) {
            debug!(stored = %record.date, %today, "Quota rolled over");
            self.save(&QuotaRecord::fresh(today)).await;
            return self.daily_limit > 0;
        }

        record.count < self.daily_limit
    }

    /// Count one successful lookup against today's quota.
    pub async fn record_lookup(&self) {
        self.record_lookup_at(&Local::now().naive_local()).await
    }

    #[instrument(skip(self))]
    pub async fn record_lookup_at(&self, now: &NaiveDateTime) {
        let today = date_key(now);
        let record = self.load(&today).await;

        let updated = if record.is_current(&today) {
            QuotaRecord {
                count: record.count.saturating_add(1),
                date: record.date,
            }
        } else {
            QuotaRecord {
                count: 1,
                date: today,
            }
        };

        debug!(count = updated.count, "Recorded lookup");
        self.save(&updated).await;
    }

    /// Lookups left today, never below zero.
    pub async fn remaining(&self) -> u32 {
        self.remaining_at(&Local::now().naive_local()).await
    }

    pub async fn remaining_at(&self, now: &NaiveDateTime) -> u32 {
        let today = date_key(now);
        let record = self.load(&today).await;

        if !record.is_current(&today) {
            return self.daily_limit;
        }

        self.daily_limit.saturating_sub(record.count)
    }

    /// Time until the quota resets at local midnight, as `Hh Mm`.
    pub fn time_until_reset(&self) -> String {
        time_until_midnight(&Local::now())
    }

    /// The stored record, or a fresh one for today if none is readable.
    pub async fn record(&self) -> QuotaRecord {
        self.load(&today()).await
    }

    async fn load(&self, today: &str) -> QuotaRecord {
        match self.storage.load::<QuotaRecord>(QUOTA_KEY).await {
            Ok(Some(record)) => record,
            Ok(None) => QuotaRecord::fresh(today),
            Err(e) => {
                debug!("Unreadable quota record, using a fresh one: {}", e);
                QuotaRecord::fresh(today)
            }
        }
    }

    async fn save(&self, record: &QuotaRecord) {
        if let Err(e) = self.storage.save(QUOTA_KEY, record).await {
            warn!("Failed to save lookup data: {}", e);
        }
    }
}
