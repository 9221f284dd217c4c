use crate::domain::ports::ConfigProvider;
use crate::principles::KNOWN_PRINCIPLES;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_principle_names, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub demo: DemoSection,
    pub run: RunSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoSection {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSection {
    #[serde(default)]
    pub principles: Vec<String>,
    #[serde(default = "default_student_name")]
    pub student_name: String,
    pub output_path: Option<String>,
    #[serde(default)]
    pub verbose: bool,
}

fn default_student_name() -> String {
    "Ana".to_string()
}

impl TomlConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: TomlConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }
}

impl ConfigProvider for TomlConfig {
    fn principles(&self) -> &[String] {
        &self.run.principles
    }

    fn student_name(&self) -> &str {
        &self.run.student_name
    }

    fn output_path(&self) -> Option<&str> {
        self.run.output_path.as_deref()
    }

    fn verbose(&self) -> bool {
        self.run.verbose
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("demo.name", &self.demo.name)?;
        validate_principle_names(&self.run.principles, &KNOWN_PRINCIPLES)?;
        validate_non_empty_string("run.student_name", &self.run.student_name)?;
        if let Some(path) = &self.run.output_path {
            validate_path("run.output_path", path)?;
        }
        Ok(())
    }
}
