use crate::domain::model::{Record, Schema};
use crate::utils::error::Result;
use std::path::Path;

/// Backing storage for the ordered record sequence.
pub trait RecordStore {
    /// Creates or truncates the store.
    fn init(&self) -> Result<()>;
    /// All records in stored order; an absent store yields none.
    fn load(&self) -> Result<Vec<Record>>;
    fn append(&self, record: &Record) -> Result<()>;
}

pub trait ConfigProvider {
    fn store_path(&self) -> &Path;
    fn schema(&self) -> &Schema;
}
