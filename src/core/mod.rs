pub mod catalog;
pub mod classifier;
pub mod engine;
pub mod geo;
pub mod pipeline;
pub mod sink;
pub mod sql;

pub use crate::domain::model::{LocationRecord, Region, SeedRow, WaterType};
pub use crate::domain::ports::{ConfigProvider, Pipeline, SqlSink};
pub use crate::utils::error::Result;
