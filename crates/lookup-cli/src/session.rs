//! Quota-gated lookup flow.

use lookup_client::{phone, LookupError, LookupResult, RelayClient};
use quota_store::QuotaTracker;
use tracing::{info, instrument};

/// What a lookup attempt produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// The relay returned a result; `remaining` is left for today.
    Found {
        result: LookupResult,
        remaining: u32,
    },
    /// Daily quota used up; no request was sent.
    QuotaExhausted { resets_in: String },
}

/// Ties the quota tracker to the relay client.
pub struct LookupSession {
    tracker: QuotaTracker,
    client: RelayClient,
}

impl LookupSession {
    pub fn new(tracker: QuotaTracker, client: RelayClient) -> Self {
        Self { tracker, client }
    }

    pub fn tracker(&self) -> &QuotaTracker {
        &self.tracker
    }

    /// Check the quota, call the relay, and count the lookup only if it succeeded.
    #[instrument(skip(self))]
    pub async fn lookup(&self, phone_number: &str) -> Result<LookupOutcome, LookupError> {
        if !self.tracker.can_lookup().await {
            info!("Daily lookup limit reached");
            return Ok(LookupOutcome::QuotaExhausted {
                resets_in: self.tracker.time_until_reset(),
            });
        }

        let result = self.client.lookup(&phone::clean(phone_number)).await?;

        self.tracker.record_lookup().await;
        let remaining = self.tracker.remaining().await;
        info!(remaining, "Lookup succeeded");

        Ok(LookupOutcome::Found { result, remaining })
    }
}
