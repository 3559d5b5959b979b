//! Premium waitlist sign-ups.

use crate::error::WaitlistError;
use crate::storage::Storage;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Storage key of the waitlist sequence.
pub const WAITLIST_KEY: &str = "premiumWaitlist";

/// An email address that asked for premium access.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitlistEntry {
    pub email: String,
    /// RFC 3339 UTC timestamp with millisecond precision
    pub timestamp: String,
}

/// Ordered, append-only list of waitlist entries.
///
/// Entries are never deduplicated: signing up twice stores two entries.
#[derive(Debug, Clone)]
pub struct Waitlist {
    storage: Storage,
}

impl Waitlist {
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    /// Validate `email` and append it to the waitlist.
    pub async fn join(&self, email: &str) -> Result<WaitlistEntry, WaitlistError> {
        validate_email(email)?;

        let entry = WaitlistEntry {
            email: email.to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        };

        let mut entries = self.entries().await;
        entries.push(entry.clone());
        self.storage.save(WAITLIST_KEY, &entries).await?;

        info!("Waitlist now has {} entries", entries.len());
        Ok(entry)
    }

    /// All stored entries in sign-up order. Unreadable storage reads as empty.
    pub async fn entries(&self) -> Vec<WaitlistEntry> {
        match self.storage.load::<Vec<WaitlistEntry>>(WAITLIST_KEY).await {
            Ok(entries) => entries.unwrap_or_default(),
            Err(e) => {
                debug!("Unreadable waitlist, starting empty: {}", e);
                Vec::new()
            }
        }
    }
}

/// Minimal shape check: non-blank and containing both `@` and `.`.
pub fn validate_email(email: &str) -> Result<(), WaitlistError> {
    if email.trim().is_empty() {
        return Err(WaitlistError::EmptyEmail);
    }

    if !email.contains('@') || !email.contains('.') {
        return Err(WaitlistError::InvalidEmail);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(matches!(validate_email("  "), Err(WaitlistError::EmptyEmail)));
        assert!(matches!(validate_email("user"), Err(WaitlistError::InvalidEmail)));
        assert!(matches!(validate_email("user@host"), Err(WaitlistError::InvalidEmail)));
        assert!(validate_email("user@example.com").is_ok());
    }

    #[test]
    fn test_validation_messages() {
        assert_eq!(WaitlistError::EmptyEmail.to_string(), "Please enter your email");
        assert_eq!(
            WaitlistError::InvalidEmail.to_string(),
            "Please enter a valid email address"
        );
    }

    #[tokio::test]
    async fn test_join_appends_in_order() {
        let waitlist = Waitlist::new(Storage::memory());

        waitlist.join("a@example.com").await.unwrap();
        waitlist.join("b@example.com").await.unwrap();

        let emails: Vec<_> = waitlist.entries().await.into_iter().map(|e| e.email).collect();
        assert_eq!(emails, vec!["a@example.com", "b@example.com"]);
    }

    #[tokio::test]
    async fn test_join_keeps_duplicates() {
        let waitlist = Waitlist::new(Storage::memory());

        waitlist.join("a@example.com").await.unwrap();
        waitlist.join("a@example.com").await.unwrap();

        assert_eq!(waitlist.entries().await.len(), 2);
    }

    #[tokio::test]
    async fn test_invalid_email_not_stored() {
        let waitlist = Waitlist::new(Storage::memory());

        assert!(waitlist.join("nope").await.is_err());
        assert!(waitlist.entries().await.is_empty());
    }

    #[tokio::test]
    async fn test_entry_timestamp_is_rfc3339() {
        let waitlist = Waitlist::new(Storage::memory());
        let entry = waitlist.join("a@example.com").await.unwrap();

        assert!(chrono::DateTime::parse_from_rfc3339(&entry.timestamp).is_ok());
        assert!(entry.timestamp.ends_with('Z'));
    }

    #[tokio::test]
    async fn test_unreadable_waitlist_reads_empty() {
        let storage = Storage::memory();
        storage.write_raw(WAITLIST_KEY, "[{").await.unwrap();

        let waitlist = Waitlist::new(storage);
        assert!(waitlist.entries().await.is_empty());

        waitlist.join("a@example.com").await.unwrap();
        assert_eq!(waitlist.entries().await.len(), 1);
    }
}
