use clap::Parser;
use poll_intake::config::Command;
use poll_intake::core::ConfigProvider;
use poll_intake::utils::error::{ErrorSeverity, IntakeError};
use poll_intake::utils::{logger, validation::Validate};
use poll_intake::{open_store, CliConfig, FormFields, FormNormalizer, IntakeConfig, IntakeService};
use std::path::Path;

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // initialize logging
    if config.logging.json {
        logger::init_json_logger(cli.verbose, config.log_level());
    } else {
        logger::init_cli_logger(cli.verbose, config.log_level());
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let result = match &cli.command {
        Command::Serve { .. } => run_server(&config).await,
        Command::Normalize { input, pretty } => run_normalize(&config, input, *pretty),
    };

    if let Err(e) = result {
        tracing::error!(
            "poll-intake failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 2,
            ErrorSeverity::Medium | ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }
}

async fn run_server(config: &IntakeConfig) -> Result<(), IntakeError> {
    tracing::info!("Starting poll-intake server");
    tracing::debug!("Config: {:?}", config);

    let store = open_store(config).await?;
    let service = IntakeService::new(store, config.normalizer_options());

    poll_intake::app::web::serve(
        service,
        config.bind_addr(),
        config.server.static_dir.as_deref(),
    )
    .await
}

fn run_normalize(config: &IntakeConfig, input: &Path, pretty: bool) -> Result<(), IntakeError> {
    tracing::info!("Normalizing submission from {}", input.display());

    let content = std::fs::read_to_string(input)?;
    let pairs: Vec<(String, String)> = serde_json::from_str(&content)?;
    let fields = FormFields::from_pairs(pairs);

    let record = FormNormalizer::new(config.normalizer_options()).normalize(&fields)?;
    let output = if pretty {
        serde_json::to_string_pretty(&record)?
    } else {
        serde_json::to_string(&record)?
    };
    println!("{}", output);
    Ok(())
}
