use std::fmt;
use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::{self, DefaultFields};
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields, MakeWriter};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOGGER_NAME: &str = "watchlist";
pub const LOG_FILE: &str = "logs.txt";
pub const LOG_FILTER: &str = "watchlist_etl=info";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// 每行格式：`<timestamp> <logger-name> <level> <message>`
#[derive(Debug, Clone)]
pub struct LineFormat {
    name: &'static str,
}

impl Default for LineFormat {
    fn default() -> Self {
        Self { name: LOGGER_NAME }
    }
}

impl<S, N> FormatEvent<S, N> for LineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: format::Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        write!(
            writer,
            "{} {} {} ",
            chrono::Local::now().format(TIMESTAMP_FORMAT),
            self.name,
            event.metadata().level()
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// 以 `LineFormat` 輸出到指定 writer 的 fmt layer，stdout 與檔案共用
pub fn line_layer<S, W>(make_writer: W) -> tracing_subscriber::fmt::Layer<S, DefaultFields, LineFormat, W>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + 'static,
{
    tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .event_format(LineFormat::default())
        .with_writer(make_writer)
}

pub fn open_log_file(path: &Path) -> std::io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// 固定的日誌過濾條件，不讀取環境變數
pub fn default_filter() -> EnvFilter {
    EnvFilter::new(LOG_FILTER)
}

/// 初始化全域日誌：同時寫到 stdout 與 append 模式的 `logs.txt`
pub fn init_cli_logger() {
    let log_file = Path::new(LOG_FILE);
    let (file_layer, open_error) = match open_log_file(log_file) {
        Ok(file) => (Some(line_layer(Mutex::new(file))), None),
        Err(e) => (None, Some(e)),
    };

    tracing_subscriber::registry()
        .with(default_filter())
        .with(line_layer(std::io::stdout))
        .with(file_layer)
        .init();

    if let Some(e) = open_error {
        tracing::warn!(
            "Could not open log file {}, logging to stdout only: {}",
            log_file.display(),
            e
        );
    }
}
