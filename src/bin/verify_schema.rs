use admin_verify::utils::{logger, validation::Validate};
use admin_verify::{AdminApiClient, CliConfig, SchemaVerificationScenario, VerificationRunner};
use clap::Parser;

#[derive(Parser)]
#[command(name = "verify-schema")]
#[command(about = "Verifies the integer is_verified field through the admin API")]
struct Cli {
    #[command(flatten)]
    config: CliConfig,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.config.verbose);

    if let Err(e) = cli.config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let profiles = match cli.config.load_profiles() {
        Ok(profiles) => profiles,
        Err(e) => {
            eprintln!("❌ Failed to load config file: {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let client = match AdminApiClient::from_config(&cli.config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let scenario = SchemaVerificationScenario::new(client, profiles.schema_verification());
    let report = VerificationRunner::new(scenario).run().await;

    if report.records.iter().any(|r| !r.status.is_pass()) {
        tracing::warn!("Functionality check needs a manual look");
    }
}
