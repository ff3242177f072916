use crate::domain::ports::Pipeline;
use crate::utils::error::Result;

/// Drives the three pipeline phases in order and reports progress.
pub struct SeedEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> SeedEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs extract, transform and load once; returns a description of where
    /// the statement was written.
    pub fn run(&mut self) -> Result<String> {
        tracing::info!("Extracting catalog...");
        let records = self.pipeline.extract()?;
        tracing::info!("Extracted {} locations", records.len());

        tracing::info!("Deriving seed rows...");
        let rows = self.pipeline.transform(records)?;
        tracing::info!("Derived {} seed rows", rows.len());

        tracing::info!("Rendering and writing SQL...");
        let destination = self.pipeline.load(rows)?;
        tracing::info!("Statement written to: {}", destination);

        Ok(destination)
    }
}
