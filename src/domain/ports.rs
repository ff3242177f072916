use crate::domain::model::{LocationRecord, SeedRow};
use crate::utils::error::Result;

/// Three-phase seed pipeline: catalog in, SQL text out.
///
/// `transform` takes `&mut self` because coordinate jitter draws from the
/// pipeline's random generator.
pub trait Pipeline {
    fn extract(&self) -> Result<Vec<LocationRecord>>;
    fn transform(&mut self, records: Vec<LocationRecord>) -> Result<Vec<SeedRow>>;
    fn load(&mut self, rows: Vec<SeedRow>) -> Result<String>;
}

/// Destination for the rendered SQL statement. Returns a human-readable
/// description of where the text went.
pub trait SqlSink {
    fn write_sql(&mut self, sql: &str) -> Result<String>;
}

pub trait ConfigProvider {
    fn table_name(&self) -> &str;
    fn seed(&self) -> Option<u64>;
}
