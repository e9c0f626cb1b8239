use crate::adapters::http;
use crate::core::{extract, persist};
use crate::core::{ConfigProvider, Pipeline, Storage, TransformResult};
use crate::utils::error::Result;

/// 抓取片單頁面 → 擷取 hydration payload → 寫出 CSV
pub struct WatchlistPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> WatchlistPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for WatchlistPipeline<S, C> {
    async fn extract(&self) -> Result<String> {
        tracing::debug!("Fetching watchlist page: {}", self.config.watchlist_url());
        Ok(http::fetch_page(self.config.watchlist_url()).await)
    }

    async fn transform(&self, markup: String) -> Result<TransformResult> {
        Ok(extract::extract_records(&markup))
    }

    async fn load(&self, result: TransformResult) -> Result<Option<String>> {
        Ok(persist::save_records(&self.storage, &result.records, self.config.output_file()).await)
    }
}
