use invite_dispatcher::airtable::{AirtableClient, RoundRepository};
use invite_dispatcher::config::Config;
use invite_dispatcher::split::split_rounds;
use invite_dispatcher::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init();

    let config = Config::from_env()?;
    tracing::info!(
        base_id = %config.base_id,
        raw_table = %config.raw_table_name,
        rounds_table = %config.table_name,
        "Configuration loaded"
    );

    let airtable = AirtableClient::new(&config)?;
    let repo = RoundRepository::new(airtable, config.raw_table_name.clone(), config.table_name.clone());

    let created = split_rounds(&repo).await?;
    println!(
        "Split complete: created {} row(s) in {}.",
        created, config.table_name
    );

    Ok(())
}
