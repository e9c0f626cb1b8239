use crate::utils::error::ExtractError;
use serde::{Deserialize, Serialize};

/// 片單中的一部作品。欄位順序即 CSV 欄位順序
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub title: String,
    pub year: Option<i64>,
}

impl Record {
    pub fn new(title: impl Into<String>, year: Option<i64>) -> Self {
        Self {
            title: title.into(),
            year,
        }
    }
}

#[derive(Debug, Default)]
pub struct TransformResult {
    pub records: Vec<Record>,
    /// 已記錄並略過的項目
    pub failures: Vec<ExtractError>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub fetched: bool,
    pub records: usize,
    pub skipped: usize,
    pub output: Option<String>,
}
