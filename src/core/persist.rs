use crate::domain::model::Record;
use crate::domain::ports::Storage;
use crate::utils::error::{EtlError, Result};

pub const DEFAULT_OUTPUT_FILE: &str = "imdb_watchlist.csv";

/// 將記錄編碼為 CSV（UTF-8、逗號分隔、`\n` 換行），標題列取自 `Record` 欄位名稱
pub fn encode_csv(records: &[Record]) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for record in records {
        writer.serialize(record)?;
    }

    writer.into_inner().map_err(|e| EtlError::ProcessingError {
        message: format!("Failed to flush CSV buffer: {}", e.error()),
    })
}

/// 寫出 CSV 檔並回傳檔名。
///
/// 沒有記錄時不建立也不覆寫檔案；寫檔失敗只記錄錯誤，不往上傳遞。
pub async fn save_records<S: Storage>(
    storage: &S,
    records: &[Record],
    filename: &str,
) -> Option<String> {
    if records.is_empty() {
        tracing::info!("No movie data to save");
        return None;
    }

    match write_csv(storage, records, filename).await {
        Ok(()) => {
            tracing::info!(
                "Successfully saved {} movies to {}",
                records.len(),
                filename
            );
            Some(filename.to_string())
        }
        Err(e) => {
            tracing::error!("Error saving to CSV: {}", e);
            None
        }
    }
}

async fn write_csv<S: Storage>(storage: &S, records: &[Record], filename: &str) -> Result<()> {
    let data = encode_csv(records)?;
    tracing::debug!("Writing CSV file ({} bytes) to storage", data.len());
    storage.write_file(filename, &data).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::LocalStorage;
    use crate::utils::logger::line_layer;
    use crate::utils::logger::test_support::CapturedLogs;
    use tempfile::TempDir;
    use tracing_subscriber::layer::SubscriberExt;

    struct FailingStorage;

    impl Storage for FailingStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            Err(EtlError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("File not found: {}", path),
            )))
        }

        async fn write_file(&self, _path: &str, _data: &[u8]) -> Result<()> {
            Err(EtlError::IoError(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only filesystem",
            )))
        }
    }

    fn sample_records() -> Vec<Record> {
        vec![
            Record::new("Alpha", Some(2001)),
            Record::new("Beta", None),
            Record::new("Gamma, Part II", Some(2010)),
        ]
    }

    fn temp_storage(temp_dir: &TempDir) -> LocalStorage {
        LocalStorage::new(temp_dir.path().to_str().unwrap().to_string())
    }

    #[test]
    fn test_encode_csv_layout() {
        let data = encode_csv(&sample_records()).unwrap();

        assert_eq!(
            String::from_utf8(data).unwrap(),
            "title,year\nAlpha,2001\nBeta,\n\"Gamma, Part II\",2010\n"
        );
    }

    #[test]
    fn test_encode_csv_keeps_unicode() {
        let data = encode_csv(&[Record::new("千と千尋の神隠し", Some(2001))]).unwrap();
        assert_eq!(
            String::from_utf8(data).unwrap(),
            "title,year\n千と千尋の神隠し,2001\n"
        );
    }

    #[tokio::test]
    async fn test_round_trip_through_local_storage() {
        let temp_dir = TempDir::new().unwrap();
        let storage = temp_storage(&temp_dir);
        let records = sample_records();

        let saved = save_records(&storage, &records, DEFAULT_OUTPUT_FILE).await;
        assert_eq!(saved.as_deref(), Some(DEFAULT_OUTPUT_FILE));

        let data = storage.read_file(DEFAULT_OUTPUT_FILE).await.unwrap();
        let mut reader = csv::Reader::from_reader(data.as_slice());
        let headers: Vec<&str> = reader.headers().unwrap().iter().collect();
        assert_eq!(headers, vec!["title", "year"]);

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), records.len());
        for (row, record) in rows.iter().zip(&records) {
            assert_eq!(&row[0], record.title);
            assert_eq!(
                row[1].to_string(),
                record.year.map(|y| y.to_string()).unwrap_or_default()
            );
        }

        let mut reader = csv::Reader::from_reader(data.as_slice());
        let decoded: Vec<Record> = reader.deserialize().map(|r| r.unwrap()).collect();
        assert_eq!(decoded, records);
    }

    #[tokio::test]
    async fn test_saving_twice_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let storage = temp_storage(&temp_dir);
        let records = sample_records();

        save_records(&storage, &records, DEFAULT_OUTPUT_FILE).await;
        save_records(&storage, &records, DEFAULT_OUTPUT_FILE).await;

        let content = std::fs::read_to_string(temp_dir.path().join(DEFAULT_OUTPUT_FILE)).unwrap();
        // header + N rows
        assert_eq!(content.lines().count(), records.len() + 1);
    }

    #[tokio::test]
    async fn test_empty_records_do_not_touch_file() {
        let temp_dir = TempDir::new().unwrap();
        let storage = temp_storage(&temp_dir);

        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::registry().with(line_layer(logs.clone()));
        let _guard = tracing::subscriber::set_default(subscriber);

        assert!(save_records(&storage, &[], DEFAULT_OUTPUT_FILE).await.is_none());
        assert!(!temp_dir.path().join(DEFAULT_OUTPUT_FILE).exists());

        let output = logs.contents();
        assert!(
            output
                .lines()
                .any(|line| line.contains(" INFO ") && line.contains("No movie data to save")),
            "missing info line in logs:\n{}",
            output
        );

        std::fs::write(temp_dir.path().join(DEFAULT_OUTPUT_FILE), "previous run").unwrap();
        assert!(save_records(&storage, &[], DEFAULT_OUTPUT_FILE).await.is_none());
        assert_eq!(
            std::fs::read_to_string(temp_dir.path().join(DEFAULT_OUTPUT_FILE)).unwrap(),
            "previous run"
        );
    }

    #[tokio::test]
    async fn test_write_failure_is_absorbed() {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::registry().with(line_layer(logs.clone()));
        let _guard = tracing::subscriber::set_default(subscriber);

        let saved = save_records(&FailingStorage, &sample_records(), DEFAULT_OUTPUT_FILE).await;
        assert!(saved.is_none());
        assert!(logs
            .contents()
            .lines()
            .any(|line| line.contains(" ERROR ") && line.contains("Error saving to CSV")));
    }

    #[tokio::test]
    async fn test_target_is_a_directory() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::create_dir(temp_dir.path().join("taken")).unwrap();
        let storage = temp_storage(&temp_dir);

        assert!(save_records(&storage, &sample_records(), "taken").await.is_none());
    }
}
