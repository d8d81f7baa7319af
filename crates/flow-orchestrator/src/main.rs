use flow_orchestrator::{build_snapshot, FlowPipeline};
use tracing_subscriber::EnvFilter;
use wealth_core::{CountryRegistry, IndicatorStore};
use worldbank_client::WorldBankClient;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args: Vec<String> = std::env::args().collect();
    let offline = args.iter().any(|a| a == "--offline");

    let snapshot = if offline {
        // Full-fallback map, no network
        build_snapshot(&CountryRegistry::standard(), &IndicatorStore::new())
    } else {
        tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?
            .block_on(FlowPipeline::new(WorldBankClient::new()).run())
    };

    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
