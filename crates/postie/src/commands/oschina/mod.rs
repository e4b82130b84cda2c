//! `postie oschina` commands.

mod draft;

use std::path::Path;

use clap::{Args, Subcommand};
use postie_config::{CliSettings, Config, OschinaConfig};
use postie_oschina::OschinaClient;

use crate::error::CliError;
use crate::output::Output;

use draft::DraftCommand;

/// Arguments shared by all OSChina commands.
#[derive(Args)]
pub(crate) struct OschinaArgs {
    /// Session cookie (overrides config).
    #[arg(long, env = "OSCHINA_COOKIE", global = true, hide_env_values = true)]
    cookie: Option<String>,

    /// Personal space URL, e.g. https://my.oschina.net/u/1234567 (overrides config).
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: OschinaCommand,
}

#[derive(Subcommand)]
enum OschinaCommand {
    /// Manage drafts.
    #[command(subcommand)]
    Draft(DraftCommand),
    /// List blog categories.
    Categories,
}

impl OschinaArgs {
    /// Execute the selected OSChina command.
    pub(crate) fn execute(self, config_path: Option<&Path>, output: &Output) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            base_url: self.base_url,
            cookie: self.cookie,
        };
        let config = Config::load(config_path, Some(&cli_settings))?;
        let client = create_client(require_oschina_config(&config, output)?);

        match self.command {
            OschinaCommand::Draft(cmd) => cmd.execute(&client, output),
            OschinaCommand::Categories => {
                let categories = client.list_categories()?;
                if categories.is_empty() {
                    output.warning("No categories found.");
                }
                for category in &categories {
                    output.category_row(category);
                }
                Ok(())
            }
        }
    }
}

/// Printed before the missing-section error, which `main` reports itself.
const CONFIG_HINT: &[&str] = &[
    "Add the following to your postie.toml:",
    "",
    "[oschina]",
    r#"base_url = "https://my.oschina.net/u/<your-id>""#,
    r#"cookie = "${OSCHINA_COOKIE}""#,
    "",
];

fn require_oschina_config<'a>(
    config: &'a Config,
    output: &Output,
) -> Result<&'a OschinaConfig, CliError> {
    if config.oschina.is_none() {
        output.hint(CONFIG_HINT);
    }
    Ok(config.require_oschina()?)
}

fn create_client(conf: &OschinaConfig) -> OschinaClient {
    let default_agent = format!("postie/{}", env!("CARGO_PKG_VERSION"));
    OschinaClient::from_config(
        &conf.base_url,
        &conf.cookie,
        conf.user_agent.as_deref().unwrap_or(&default_agent),
        conf.timeout_secs,
    )
}
