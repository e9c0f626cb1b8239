use crate::domain::model::TransformResult;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn watchlist_url(&self) -> &str;
    fn output_file(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    /// 取得頁面原始 HTML；失敗時為空字串
    async fn extract(&self) -> Result<String>;
    async fn transform(&self, markup: String) -> Result<TransformResult>;
    /// 回傳輸出檔路徑；沒有寫檔時為 `None`
    async fn load(&self, result: TransformResult) -> Result<Option<String>>;
}
