use catalog_admin::core::ConfigProvider;
use catalog_admin::utils::logger::{self, LogFormat};
use catalog_admin::utils::validation::Validate;
use catalog_admin::{CliConfig, ConsoleReplier, JsonFileStore, ServiceCommandHandler};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    logger::init_logger(cli.verbose, LogFormat::from_json_flag(cli.json_logs));

    tracing::debug!("CLI config: {:?}", cli);

    let config = match cli.load_bot_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Failed to load configuration: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let is_owner = cli.is_owner(&config);
    tracing::info!(
        "📁 Catalog: {} (owner: {})",
        config.catalog_path(),
        is_owner
    );

    let store = JsonFileStore::new(config.catalog_path());
    let handler = ServiceCommandHandler::from_config(store, &config);
    let replier = ConsoleReplier::new();

    match cli.command_body() {
        Some(body) => {
            let outcome = handler.handle(&replier, is_owner, &body).await?;
            tracing::debug!("Outcome: {:?}", outcome);
        }
        None => {
            // One command per line, handled in order like the bot's message loop.
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            while let Some(line) = lines.next_line().await? {
                if line.trim().is_empty() {
                    continue;
                }
                let outcome = handler.handle(&replier, is_owner, &line).await?;
                tracing::debug!("Outcome: {:?}", outcome);
            }
        }
    }

    Ok(())
}
