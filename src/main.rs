use clap::Parser;
use watchlist_etl::utils::logger;
use watchlist_etl::{CliConfig, EtlEngine, LocalStorage, WatchlistPipeline};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // 缺少 URL 參數時 clap 直接結束程式
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger();

    tracing::info!("Starting watchlist-etl");
    tracing::debug!("CLI config: {:?}", config);

    let storage = LocalStorage::current_dir();
    let pipeline = WatchlistPipeline::new(storage, config);
    let engine = EtlEngine::new(pipeline);

    match engine.run().await {
        Ok(summary) => {
            tracing::info!(
                "✅ Watchlist export completed ({} records, {} skipped)",
                summary.records,
                summary.skipped
            );
        }
        Err(e) => {
            tracing::error!("❌ Watchlist export failed: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
