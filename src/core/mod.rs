pub mod codec;
pub mod engine;
pub mod summary;

pub use crate::domain::model::{Record, Schema, Summary};
pub use crate::domain::ports::{ConfigProvider, RecordStore};
pub use crate::utils::error::Result;
