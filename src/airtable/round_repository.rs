use super::{AirtableClient, MAX_RECORDS_PER_WRITE};
use crate::error::Result;
use crate::models::{AirtableRecord, RawImportFields, RoundFields};

/// Raw import rows in, one interview round row per scheduling link out
#[derive(Clone)]
pub struct RoundRepository {
    client: AirtableClient,
    raw_table: String,
    rounds_table: String,
}

impl RoundRepository {
    pub fn new(
        client: AirtableClient,
        raw_table: impl Into<String>,
        rounds_table: impl Into<String>,
    ) -> Self {
        Self {
            client,
            raw_table: raw_table.into(),
            rounds_table: rounds_table.into(),
        }
    }

    /// Every row of the raw import table
    pub async fn list_raw_imports(&self) -> Result<Vec<AirtableRecord<RawImportFields>>> {
        let rows = self.client.list_all::<RawImportFields>(&self.raw_table).await?;
        tracing::info!(table = %self.raw_table, count = rows.len(), "Loaded raw import rows");
        Ok(rows)
    }

    /// Create round rows in chunks of [`MAX_RECORDS_PER_WRITE`]; returns how many were created
    pub async fn create_rounds(&self, rounds: &[RoundFields]) -> Result<usize> {
        for chunk in rounds.chunks(MAX_RECORDS_PER_WRITE) {
            self.client.create(&self.rounds_table, chunk).await?;
            tracing::debug!(table = %self.rounds_table, count = chunk.len(), "Created round rows");
        }

        Ok(rounds.len())
    }
}
