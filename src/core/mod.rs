pub mod etl;
pub mod extract;
pub mod persist;
pub mod pipeline;

pub use crate::domain::model::{Record, RunSummary, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
