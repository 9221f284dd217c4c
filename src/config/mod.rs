pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::principles::KNOWN_PRINCIPLES;
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_principle_names, Validate,
};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "solid-kata")]
#[command(about = "Annotated demonstrations of the five SOLID principles")]
pub struct CliConfig {
    /// Principles to run; empty means all five.
    #[arg(long, value_delimiter = ',')]
    pub principles: Vec<String>,

    #[arg(long, default_value = "Ana")]
    pub student_name: String,

    /// When set, a transcript.json is written under this directory.
    #[arg(long)]
    pub output_path: Option<String>,

    /// Load the run settings from a TOML file instead of the flags above.
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn principles(&self) -> &[String] {
        &self.principles
    }

    fn student_name(&self) -> &str {
        &self.student_name
    }

    fn output_path(&self) -> Option<&str> {
        self.output_path.as_deref()
    }

    fn verbose(&self) -> bool {
        self.verbose
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validate_principle_names(&self.principles, &KNOWN_PRINCIPLES)?;
        validate_non_empty_string("student_name", &self.student_name)?;
        if let Some(path) = &self.output_path {
            validate_path("output_path", path)?;
        }
        Ok(())
    }
}
