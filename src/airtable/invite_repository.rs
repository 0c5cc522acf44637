use async_trait::async_trait;

use super::{AirtableClient, ListQuery};
use crate::dispatcher::InviteStore;
use crate::error::Result;
use crate::models::{Delivery, InviteFields, InviteRecord, InviteUpdate};

/// Selects rows still waiting for their invitation
pub const PENDING_FORMULA: &str = "{Mail Status}='Pending'";

/// Interview round rows backed by an Airtable table
#[derive(Clone)]
pub struct InviteRepository {
    client: AirtableClient,
    table: String,
}

impl InviteRepository {
    pub fn new(client: AirtableClient, table: impl Into<String>) -> Self {
        Self {
            client,
            table: table.into(),
        }
    }

    /// Read at most `limit` rows whose `Mail Status` is `Pending`, in store order
    pub async fn fetch_pending(&self, limit: u32) -> Result<Vec<InviteRecord>> {
        let query = ListQuery {
            filter_by_formula: Some(PENDING_FORMULA),
            max_records: Some(limit),
            offset: None,
        };

        let page = self.client.list::<InviteFields>(&self.table, &query).await?;
        let records: Vec<InviteRecord> = page.records.into_iter().map(InviteRecord::from).collect();

        tracing::debug!(table = %self.table, count = records.len(), "Fetched pending rows");
        Ok(records)
    }

    /// Write the terminal status of one row
    pub async fn record_outcome(&self, record_id: &str, delivery: &Delivery) -> Result<()> {
        let update = InviteUpdate::from(delivery);
        self.client.update(&self.table, record_id, &update).await?;

        tracing::info!(
            record_id = %record_id,
            status = delivery.status().as_str(),
            "Recorded delivery outcome"
        );
        Ok(())
    }
}

#[async_trait]
impl InviteStore for InviteRepository {
    async fn fetch_pending(&self, limit: u32) -> Result<Vec<InviteRecord>> {
        InviteRepository::fetch_pending(self, limit).await
    }

    async fn record_outcome(&self, record_id: &str, delivery: &Delivery) -> Result<()> {
        InviteRepository::record_outcome(self, record_id, delivery).await
    }
}
