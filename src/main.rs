use clap::Parser;
use venue_sweep::domain::ports::ConfigProvider;
use venue_sweep::utils::{logger, validation::Validate};
use venue_sweep::{
    CliConfig, FilePage, HttpPage, ListingSweep, Result, SweepEngine, SweepReport, TomlConfig,
};

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting venue-sweep");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let verbose = cli.verbose;
    let outcome = match &cli.config {
        Some(path) => {
            let config = match TomlConfig::from_file(path) {
                Ok(config) => config,
                Err(e) => {
                    tracing::error!("❌ Could not load config file {}: {}", path, e);
                    eprintln!("❌ {}", e);
                    std::process::exit(1);
                }
            };
            if let Err(e) = config.validate() {
                tracing::error!("❌ Configuration validation failed: {}", e);
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }

            let from_file = config.source_file().map(str::to_string);
            run(config, from_file.as_deref()).await
        }
        None => {
            if let Err(e) = cli.validate() {
                tracing::error!("❌ Configuration validation failed: {}", e);
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }

            let from_file = cli.from_file.clone();
            run(cli.clone(), from_file.as_deref()).await
        }
    };

    match outcome {
        Ok(report) => {
            println!(
                "✅ Sweep completed: {} controls, {} delivered, {} skipped, {} failed",
                report.scanned,
                report.delivered(),
                report.skipped(),
                report.failed()
            );
            if verbose {
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            if report.failed() > 0 {
                std::process::exit(2);
            }
        }
        Err(e) => {
            tracing::error!("❌ Sweep failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

async fn run<C>(config: C, from_file: Option<&str>) -> Result<SweepReport>
where
    C: ConfigProvider + Clone,
{
    match from_file {
        Some(path) => {
            let source = FilePage::new(path);
            SweepEngine::new(ListingSweep::new(source, config)).run().await
        }
        None => {
            let source = HttpPage::new(config.base_url(), config.listing_path());
            SweepEngine::new(ListingSweep::new(source, config)).run().await
        }
    }
}
