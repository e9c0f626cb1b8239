use crate::utils::error::Result;
use reqwest::header::USER_AGENT;
use reqwest::{Client, StatusCode};

/// 模擬一般桌面瀏覽器，避免被最簡單的 bot 阻擋
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 \
    (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 \
    (KHTML, like Gecko) \
    Chrome/91.0.4472.124 Safari/537.36";

/// 對 `url` 發出單一 GET 請求並回傳頁面內容。
///
/// 不會回傳錯誤：非 200 狀態、連線失敗、讀取內容失敗都只記錄日誌，
/// 並以空字串表示「沒有內容」。HTTP client 只在這次請求期間存在。
pub async fn fetch_page(url: &str) -> String {
    let client = match Client::builder().build() {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Error creating HTTP client: {}", e);
            return String::new();
        }
    };

    match fetch_with(&client, url).await {
        Ok(body) => body,
        Err(e) => {
            tracing::error!("Error fetching data: {}", e);
            String::new()
        }
    }
}

async fn fetch_with(client: &Client, url: &str) -> Result<String> {
    tracing::debug!("Making request to: {}", url);
    let response = client
        .get(url)
        .header(USER_AGENT, BROWSER_USER_AGENT)
        .send()
        .await?;

    let status = response.status();
    tracing::debug!("Response status: {}", status);

    if status != StatusCode::OK {
        tracing::error!("Error: Received status code {}", status.as_u16());
        return Ok(String::new());
    }

    Ok(response.text().await?)
}
