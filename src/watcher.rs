use chrono::{DateTime, Utc};
use tracing::{debug, error, info};

use crate::error::Result;
use crate::models::Purpose;
use crate::notify::{format_message, Notifier};
use crate::sources::ListingSource;
use crate::store::SeenStore;

/// Counters for one pass over all purposes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub fetched: usize,
    pub sent: usize,
    pub failed: usize,
    pub skipped: usize,
}

/// Runs a single fetch, filter, notify and persist pass
pub struct Watcher<'a> {
    source: &'a dyn ListingSource,
    notifier: &'a dyn Notifier,
    store: &'a SeenStore,
    location_ids: &'a [u32],
    persist: bool,
}

impl<'a> Watcher<'a> {
    pub fn new(
        source: &'a dyn ListingSource,
        notifier: &'a dyn Notifier,
        store: &'a SeenStore,
        location_ids: &'a [u32],
    ) -> Self {
        Self {
            source,
            notifier,
            store,
            location_ids,
            persist: true,
        }
    }

    /// Leave the state file untouched (dry run)
    pub fn without_persist(mut self) -> Self {
        self.persist = false;
        self
    }

    /// Poll every purpose once.
    ///
    /// Listings are filtered against the set loaded at the start of the run.
    /// The working set is written after each purpose so a failed fetch later
    /// in the run keeps earlier deliveries recorded.
    pub async fn run(&self) -> Result<RunSummary> {
        let seen = self.store.load().await?;
        let mut working = seen.clone();
        let mut summary = RunSummary::default();

        info!(
            "Polling {} for {} locations",
            self.source.source_name(),
            self.location_ids.len()
        );

        for purpose in Purpose::ALL {
            let listings = self.source.fetch(purpose, self.location_ids).await?;
            summary.fetched += listings.len();

            for listing in &listings {
                let id = match listing.id() {
                    Some(id) if !seen.contains(&id) => id,
                    other => {
                        debug!("Skipping listing {:?}", other);
                        summary.skipped += 1;
                        continue;
                    }
                };

                let message = format_message(listing, purpose, Utc::now());
                match self.notifier.send(&message).await {
                    Ok(()) => {
                        info!("Sent alert for {}", id);
                        working.insert(id);
                        summary.sent += 1;
                    }
                    Err(e) => {
                        error!("Failed to send for {}: {}", id, e);
                        summary.failed += 1;
                    }
                }
            }

            if self.persist {
                self.store.save(&working).await?;
            }
        }

        info!(
            "Watch complete at {}: {} fetched, {} sent, {} failed, {} skipped",
            timestamp(Utc::now()),
            summary.fetched,
            summary.sent,
            summary.failed,
            summary.skipped
        );
        Ok(summary)
    }
}

fn timestamp(at: DateTime<Utc>) -> String {
    at.format(crate::notify::message::TIMESTAMP_FORMAT).to_string()
}
