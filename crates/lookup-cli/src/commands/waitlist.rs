//! Waitlist commands - premium interest sign-up.

use crate::error::AppResult;
use quota_store::Waitlist;
use tracing::info;

pub async fn join(waitlist: &Waitlist, email: &str) -> AppResult<String> {
    let entry = waitlist.join(email).await?;
    info!("Waitlist sign-up recorded at {}", entry.timestamp);

    Ok(format!(
        "You're on the list! We'll email {} when Premium launches.",
        entry.email
    ))
}

pub async fn list(waitlist: &Waitlist) -> String {
    let entries = waitlist.entries().await;
    if entries.is_empty() {
        return "No waitlist sign-ups yet.".into();
    }

    entries
        .iter()
        .map(|e| format!("{}  {}", e.timestamp, e.email))
        .collect::<Vec<_>>()
        .join("\n")
}
