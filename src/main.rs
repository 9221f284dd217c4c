use clap::Parser;
use solid_kata::utils::{logger, validation::Validate};
use solid_kata::{CliConfig, ConfigProvider, DemoEngine, DemoReport, Result, TomlConfig};
use std::path::Path;

// The binary itself follows the pattern it demonstrates: the run only sees
// the ConfigProvider port, never which config source is behind it.
async fn run_with_config<C: ConfigProvider>(config: &C) -> Result<Vec<DemoReport>> {
    let demos = solid_kata::principles::build(config.principles(), config.student_name())?;
    let engine = DemoEngine::new(demos);
    let reports = engine.run().await?;

    if let Some(output_path) = config.output_path() {
        let transcript = serde_json::to_string_pretty(&reports)?;
        std::fs::create_dir_all(output_path)?;
        let path = Path::new(output_path).join("transcript.json");
        std::fs::write(&path, transcript)?;
        tracing::info!(path = %path.display(), "transcript written");
        println!("Transcript saved to: {}", path.display());
    }

    Ok(reports)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::info!("Starting solid-kata");

    let reports = if let Some(config_path) = &cli.config {
        let config = match TomlConfig::from_file(config_path) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!("Configuration loading failed: {}", e);
                eprintln!("Configuration loading failed: {}", e);
                std::process::exit(1);
            }
        };
        run_with_config(&config).await
    } else {
        if let Err(e) = cli.validate() {
            tracing::error!("Configuration validation failed: {}", e);
            eprintln!("Configuration validation failed: {}", e);
            std::process::exit(1);
        }
        run_with_config(&cli).await
    };

    match reports {
        Ok(reports) => {
            tracing::info!(count = reports.len(), "all demonstrations completed");
            Ok(())
        }
        Err(e) => {
            tracing::error!("Demonstration run failed: {}", e);
            eprintln!("Demonstration run failed: {}", e);
            std::process::exit(2);
        }
    }
}
