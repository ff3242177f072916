use crate::core::{catalog, classifier, geo, sql};
use crate::domain::model::{LocationRecord, SeedRow};
use crate::domain::ports::{ConfigProvider, Pipeline, SqlSink};
use crate::utils::error::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Pipeline over the embedded catalog: extract the records, derive one
/// [`SeedRow`] per record, render and write the seed statement.
pub struct SeedPipeline<S: SqlSink, C: ConfigProvider> {
    sink: S,
    config: C,
    rng: StdRng,
}

impl<S: SqlSink, C: ConfigProvider> SeedPipeline<S, C> {
    /// Jitter randomness comes from the configured seed when one is given,
    /// otherwise from system entropy. Seeded runs are byte-reproducible.
    pub fn new(sink: S, config: C) -> Self {
        let rng = match config.seed() {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { sink, config, rng }
    }
}

impl<S: SqlSink, C: ConfigProvider> Pipeline for SeedPipeline<S, C> {
    fn extract(&self) -> Result<Vec<LocationRecord>> {
        let records = catalog::load()?;
        tracing::debug!("Catalog parsed: {} records", records.len());
        Ok(records)
    }

    fn transform(&mut self, records: Vec<LocationRecord>) -> Result<Vec<SeedRow>> {
        let rows = records
            .into_iter()
            .map(|record| {
                let water_type = classifier::classify(&record);
                let county = geo::county_from_subtitle(&record.subtitle);
                let region = geo::region_for_county(county);
                let (latitude, longitude) = geo::synthesize_coordinates(county, &mut self.rng);

                SeedRow {
                    name: record.name,
                    water_type,
                    county,
                    region,
                    latitude,
                    longitude,
                    subtitle: record.subtitle,
                    administrare: record.administrare,
                }
            })
            .collect();
        Ok(rows)
    }

    fn load(&mut self, rows: Vec<SeedRow>) -> Result<String> {
        let statement = sql::render_statement(self.config.table_name(), &rows);
        tracing::debug!("Rendered statement: {} bytes", statement.len());
        self.sink.write_sql(&statement)
    }
}
