use admin_verify::utils::{logger, validation::Validate};
use admin_verify::{AdminApiClient, AdminVerificationScenario, CliConfig, VerificationRunner};
use clap::Parser;

#[derive(Parser)]
#[command(name = "admin-verify")]
#[command(about = "Checks that new admin accounts stay locked until verified")]
struct Cli {
    #[command(flatten)]
    config: CliConfig,

    /// Also check unknown-user and wrong-password logins
    #[arg(long)]
    extended: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.config.verbose);
    tracing::debug!("CLI config: {:?}", cli.config);

    // 設定錯誤是唯一會讓程式以非零結束的情況
    if let Err(e) = cli.config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let profiles = match cli.config.load_profiles() {
        Ok(profiles) => profiles,
        Err(e) => {
            tracing::error!("❌ Failed to load profiles: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let client = match AdminApiClient::from_config(&cli.config) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("❌ Failed to build HTTP client: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };
    tracing::info!("Target API: {}", client.base_url());

    let scenario = AdminVerificationScenario::new(client, profiles.admin_verification())
        .with_extended(cli.extended);
    VerificationRunner::new(scenario).run().await;
}
