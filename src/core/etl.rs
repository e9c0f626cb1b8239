use crate::core::{Pipeline, RunSummary};
use crate::utils::error::Result;

const PREVIEW_LEN: usize = 5;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// 依序執行 fetch → extract → persist。
    ///
    /// 各階段的失敗都在階段內吸收，最後只反映在 `RunSummary` 的數量上。
    pub async fn run(&self) -> Result<RunSummary> {
        tracing::info!("🚀 Starting watchlist export");

        let markup = self.pipeline.extract().await?;
        if markup.is_empty() {
            tracing::warn!("Failed to fetch watchlist data");
            return Ok(RunSummary::default());
        }
        tracing::debug!("Fetched {} bytes of markup", markup.len());

        let result = self.pipeline.transform(markup).await?;
        let mut summary = RunSummary {
            fetched: true,
            records: result.records.len(),
            skipped: result.failures.len(),
            output: None,
        };

        if summary.skipped > 0 {
            tracing::warn!("Skipped {} unreadable hydration payloads", summary.skipped);
        }

        if result.records.is_empty() {
            tracing::info!("No movies found in watchlist");
            return Ok(summary);
        }

        tracing::info!("Found {} movies in watchlist", summary.records);
        for (i, record) in result.records.iter().take(PREVIEW_LEN).enumerate() {
            match record.year {
                Some(year) => tracing::debug!("{}. {} ({})", i + 1, record.title, year),
                None => tracing::debug!("{}. {}", i + 1, record.title),
            }
        }

        summary.output = self.pipeline.load(result).await?;
        if let Some(output) = &summary.output {
            tracing::info!("📁 Output saved to: {}", output);
        }

        Ok(summary)
    }
}
