//! 從頁面內嵌的 hydration payload（`__NEXT_DATA__`）擷取片單項目。
//!
//! 頁面沒有 payload、payload 不是合法 JSON、或路徑上的結構不符，都只會讓結果變少，
//! 不會讓擷取失敗。

use crate::domain::model::{Record, TransformResult};
use crate::utils::error::ExtractError;
use crate::utils::json_path::{get_array, get_i64, get_str};
use scraper::{Html, Selector};
use serde_json::Value;
use std::sync::LazyLock;

pub const HYDRATION_SELECTOR: &str = r#"script[id="__NEXT_DATA__"][type="application/json"]"#;

/// props.pageProps.mainColumnData.predefinedList.titleListItemSearch.edges
pub const EDGES_PATH: &[&str] = &[
    "props",
    "pageProps",
    "mainColumnData",
    "predefinedList",
    "titleListItemSearch",
    "edges",
];

pub const TITLE_PATH: &[&str] = &["listItem", "titleText", "text"];
pub const YEAR_PATH: &[&str] = &["listItem", "releaseYear", "year"];

static HYDRATION_SCRIPT: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(HYDRATION_SELECTOR).expect("hydration selector is valid CSS"));

/// 取出所有 hydration payload 的原始文字，依文件順序
pub fn hydration_payloads(markup: &str) -> Vec<String> {
    let document = Html::parse_document(markup);
    document
        .select(&HYDRATION_SCRIPT)
        .map(|script| script.text().collect::<String>())
        .collect()
}

/// 解析 HTML 並擷取所有項目。
///
/// 每個 payload 各自解析，結果依文件順序串接；無法解析的 payload
/// 會記錄日誌並放進 `failures`，其餘照常處理。
pub fn extract_records(markup: &str) -> TransformResult {
    let payloads = hydration_payloads(markup);
    if payloads.is_empty() {
        tracing::debug!("No hydration payload found in page");
        return TransformResult::default();
    }

    let mut result = TransformResult::default();

    for (index, payload) in payloads.iter().enumerate() {
        let data: Value = match serde_json::from_str(payload) {
            Ok(data) => data,
            Err(source) => {
                let err = ExtractError::InvalidPayload { index, source };
                tracing::error!("err while deserializing __NEXT_DATA__: {}", err);
                result.failures.push(err);
                continue;
            }
        };

        collect_payload(index, &data, &mut result);
    }

    result
}

/// 走訪單一 payload 的 edge 清單，依序加入有標題的項目
pub fn collect_payload(payload: usize, data: &Value, result: &mut TransformResult) {
    let edges = get_array(data, EDGES_PATH);
    tracing::debug!("Hydration payload #{} has {} edges", payload, edges.len());

    result
        .records
        .extend(edges.iter().filter_map(record_from_edge));
}

/// 沒有標題（包含 edge 本身不是物件）時回傳 `None`，屬於路徑缺漏而非錯誤
pub fn record_from_edge(edge: &Value) -> Option<Record> {
    let title = get_str(edge, TITLE_PATH).filter(|title| !title.is_empty())?;
    Some(Record::new(title, get_i64(edge, YEAR_PATH)))
}
