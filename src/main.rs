use invite_dispatcher::airtable::{AirtableClient, InviteRepository};
use invite_dispatcher::config::Config;
use invite_dispatcher::dispatcher::Dispatcher;
use invite_dispatcher::mail::Mailer;
use invite_dispatcher::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init();

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!(
        base_id = %config.base_id,
        table = %config.table_name,
        limit = config.fetch_limit,
        "Configuration loaded"
    );

    let airtable = AirtableClient::new(&config)?;
    let store = InviteRepository::new(airtable, config.table_name.clone());
    let mailer = Mailer::new(&config)?;

    let dispatcher = Dispatcher::new(store, mailer, config.fetch_limit);
    dispatcher.run().await?;

    Ok(())
}
