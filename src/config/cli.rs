use crate::config::toml_config::BotConfig;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "catalog-admin")]
#[command(about = "Owner-only editor for the bot's service catalog")]
pub struct CliConfig {
    /// TOML configuration file (catalog path, command prefixes, owners)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override the catalog file path from the configuration
    #[arg(long)]
    pub catalog: Option<String>,

    /// Sender id, checked against the configured owners
    #[arg(long)]
    pub sender: Option<String>,

    /// Treat the sender as the owner
    #[arg(long)]
    pub owner: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    /// Command body, e.g. `!deleteservice PERFILES TIKTOK|tiktok1`. Read from stdin when omitted.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

impl CliConfig {
    /// Configuration file (or defaults) with command-line overrides applied.
    pub fn load_bot_config(&self) -> Result<BotConfig> {
        let mut config = match &self.config {
            Some(path) => BotConfig::from_file(path)?,
            None => BotConfig::default(),
        };

        if let Some(catalog) = &self.catalog {
            config.catalog.path = catalog.clone();
        }

        Ok(config)
    }

    pub fn command_body(&self) -> Option<String> {
        if self.command.is_empty() {
            None
        } else {
            Some(self.command.join(" "))
        }
    }

    pub fn is_owner<C: ConfigProvider>(&self, config: &C) -> bool {
        self.owner
            || self
                .sender
                .as_deref()
                .is_some_and(|sender| config.is_owner(sender))
    }
}
