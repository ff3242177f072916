use clap::Parser;
use fishing_locations_etl::core::{ConfigProvider, SqlSink};
use fishing_locations_etl::utils::{logger, validation::Validate};
use fishing_locations_etl::{CliConfig, FileSink, Result, SeedEngine, SeedPipeline, StdoutSink};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting fishing-locations-etl");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        tracing::error!("Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let result = match config.output.clone() {
        Some(path) => run(SeedPipeline::new(FileSink::new(path), config)),
        None => run(SeedPipeline::new(StdoutSink, config)),
    };

    match result {
        Ok(destination) => {
            tracing::info!("✅ Seed SQL generated successfully");
            tracing::info!("📁 Written to: {}", destination);
        }
        Err(e) => {
            tracing::error!("❌ Seed generation failed: {} (severity: {:?})", e, e.severity());
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());

            let exit_code = e.severity().exit_code();
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }
}

fn run<S: SqlSink, C: ConfigProvider>(pipeline: SeedPipeline<S, C>) -> Result<String> {
    let mut engine = SeedEngine::new(pipeline);
    engine.run()
}
