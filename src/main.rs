use std::sync::Arc;

use minicat::config::Config;
use minicat::{app, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load()?;
    let context = Arc::new(app::bootstrap(&cfg)?);

    tokio::select! {
        res = server::listener::run(&cfg, context) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
