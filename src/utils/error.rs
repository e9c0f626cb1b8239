use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

pub type Result<T> = std::result::Result<T, EtlError>;

/// 單一 hydration payload 的擷取失敗，記錄後略過，不中斷整體擷取
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("hydration payload #{index} is not valid JSON: {source}")]
    InvalidPayload {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}
