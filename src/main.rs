use clap::Parser;
use quakemap::core::ConfigProvider;
use quakemap::utils::{logger, validation::Validate};
use quakemap::{CliConfig, LocalStorage, MapEngine, QuakeMapPipeline, TomlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::info!("Starting quakemap");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Some(path) = cli.config.clone() {
        let config = TomlConfig::from_file(&path)?;
        run(config).await
    } else {
        run(cli).await
    }
}

async fn run<C: ConfigProvider + Validate + 'static>(config: C) -> anyhow::Result<()> {
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = QuakeMapPipeline::new(storage, config);
    let engine = MapEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Map build completed successfully!");
            println!("✅ Map build completed successfully!");
            println!("📁 Map written to: {}", output_path);
            Ok(())
        }
        Err(e) => {
            tracing::error!("❌ Map build failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}
