pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::CliConfig;
pub use core::engine::SeedEngine;
pub use core::pipeline::SeedPipeline;
pub use core::sink::{FileSink, StdoutSink};
pub use utils::error::{Result, SeedError};
