pub mod error;
pub mod json_path;
pub mod logger;
