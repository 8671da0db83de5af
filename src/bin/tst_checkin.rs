//! Check in every account in `tst_tk_env` and send one summary.

use tst_api::TastienClient;
use tst_checkin::config::accounts_from_env;
use tst_checkin::notify::sink_from_config;
use tst_checkin::{AppConfig, run_batch};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Users can override with RUST_LOG=debug to see retry backoff.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("tst_checkin=info,tst_api=info")),
        )
        .init();

    let config = AppConfig::load()?;
    let client = TastienClient::new(config.api.clone())?;
    let sink = sink_from_config(&config.notify);

    run_batch(
        &accounts_from_env(),
        &client,
        sink.as_ref(),
        &config.notify.title,
    )
    .await;
    Ok(())
}
