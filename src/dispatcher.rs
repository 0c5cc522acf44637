//! Pending invite pipeline: fetch, validate, send, record.
//!
//! Records are handled strictly one at a time. A failed send is recorded on
//! the row and the run moves on; a failed store read or write aborts the run.
//! An abort on write-back can leave a row `Pending` even though its email
//! already went out, and the next run will email that candidate again.

use async_trait::async_trait;

use crate::error::Result;
use crate::mail::SendOutcome;
use crate::models::{truncate_chars, Delivery, InviteRecord, MAX_ERROR_CHARS, MISSING_FIELDS_ERROR};

/// Where invite rows are read from and their outcome written back to
#[async_trait]
pub trait InviteStore: Send + Sync {
    async fn fetch_pending(&self, limit: u32) -> Result<Vec<InviteRecord>>;

    async fn record_outcome(&self, record_id: &str, delivery: &Delivery) -> Result<()>;
}

/// Sends one invitation email per call
#[async_trait]
pub trait InviteMailer: Send + Sync {
    async fn send_invite(&self, record: &InviteRecord) -> SendOutcome;
}

/// Counts for one run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub fetched: usize,
    pub sent: usize,
    pub failed: usize,
}

/// Whether `record` has everything needed to be emailed
pub fn validate(record: &InviteRecord) -> bool {
    record.is_sendable()
}

/// Map a send attempt onto the terminal state of the row
pub fn delivery_for(outcome: SendOutcome) -> Delivery {
    match outcome {
        SendOutcome::Delivered => Delivery::sent_now(),
        SendOutcome::Rejected { status, body } => {
            Delivery::failed(format!("{}: {}", status, truncate_chars(&body, MAX_ERROR_CHARS)))
        }
        SendOutcome::Transport(reason) => Delivery::failed(reason),
    }
}

pub struct Dispatcher<S, M> {
    store: S,
    mailer: M,
    limit: u32,
}

impl<S: InviteStore, M: InviteMailer> Dispatcher<S, M> {
    pub fn new(store: S, mailer: M, limit: u32) -> Self {
        Self {
            store,
            mailer,
            limit,
        }
    }

    /// Process every pending row once
    pub async fn run(&self) -> Result<RunSummary> {
        let records = self.store.fetch_pending(self.limit).await?;
        if records.is_empty() {
            println!("No pending emails.");
            return Ok(RunSummary::default());
        }

        let mut summary = RunSummary {
            fetched: records.len(),
            ..RunSummary::default()
        };

        for record in &records {
            match self.process(record).await? {
                Delivery::Sent { .. } => summary.sent += 1,
                Delivery::Failed { .. } => summary.failed += 1,
            }
        }

        tracing::info!(
            fetched = summary.fetched,
            sent = summary.sent,
            failed = summary.failed,
            "Dispatch run complete"
        );
        Ok(summary)
    }

    async fn process(&self, record: &InviteRecord) -> Result<Delivery> {
        let delivery = if validate(record) {
            delivery_for(self.mailer.send_invite(record).await)
        } else {
            tracing::warn!(record_id = %record.id, "Skipping row without email or scheduling link");
            Delivery::failed(MISSING_FIELDS_ERROR)
        };

        self.store.record_outcome(&record.id, &delivery).await?;

        match &delivery {
            Delivery::Sent { .. } => println!("Sent → {}", record.candidate_email),
            Delivery::Failed { error } => {
                tracing::warn!(record_id = %record.id, error = %error, "Invite failed")
            }
        }

        Ok(delivery)
    }
}
