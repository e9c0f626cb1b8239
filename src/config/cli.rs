use crate::core::persist::DEFAULT_OUTPUT_FILE;
use crate::core::ConfigProvider;
use clap::Parser;

/// 只接受一個位置參數：片單頁面網址
#[derive(Debug, Clone, Parser)]
#[command(name = "watchlist-etl")]
#[command(about = "Export a public IMDb watchlist page to CSV")]
pub struct CliConfig {
    #[arg(value_name = "URL", help = "Public watchlist page URL")]
    pub url: String,
}

impl ConfigProvider for CliConfig {
    fn watchlist_url(&self) -> &str {
        &self.url
    }

    fn output_file(&self) -> &str {
        DEFAULT_OUTPUT_FILE
    }
}
