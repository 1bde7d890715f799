use anyhow::Context;
use troubleshootings::{server, telemetry, Variant};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init();

    server::run(Variant::Crashloop)
        .await
        .context("crashloop-app failed")?;

    Ok(())
}
