pub mod config;
pub mod core;
pub mod domain;
pub mod principles;
pub mod utils;

pub use config::{toml_config::TomlConfig, CliConfig};
pub use core::engine::DemoEngine;
pub use domain::model::DemoReport;
pub use domain::ports::{ConfigProvider, Demonstration};
pub use utils::error::{DemoError, Result};
