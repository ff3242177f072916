use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "fishing-locations-etl")]
#[command(about = "Generates the fishing_locations seed SQL from the embedded location catalog")]
pub struct CliConfig {
    /// Target table for the INSERT statement
    #[arg(long, default_value = "public.fishing_locations")]
    pub table: String,

    /// Write the statement to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Seed for the coordinate jitter generator; entropy-seeded when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn table_name(&self) -> &str {
        &self.table
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("table", &self.table)?;
        if let Some(output) = &self.output {
            validate_path("output", output)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> CliConfig {
        CliConfig {
            table: "public.fishing_locations".to_string(),
            output: None,
            seed: None,
            verbose: false,
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn test_empty_table_is_rejected() {
        let mut c = config();
        c.table = "  ".to_string();
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_empty_output_path_is_rejected() {
        let mut c = config();
        c.output = Some(String::new());
        assert!(c.validate().is_err());
    }
}
