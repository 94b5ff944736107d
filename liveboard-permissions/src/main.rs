//! Liveboard permissions binary entry point

use std::path::PathBuf;

use clap::Parser;

use liveboard_permissions::{liveboard_access, show_access, PermissionsResult};
use shared::{create_api_client, logging, ConnectionOverrides, ConnectionSettings, Tool};

const TOOL: Tool = Tool::LiveboardPermissions;

#[derive(Parser, Debug)]
#[command(name = "liveboard-permissions")]
#[command(about = "List the users and groups that can access a ThoughtSpot liveboard")]
struct Args {
    /// Liveboard name to look up
    #[arg(long, default_value = "Sales Performance")]
    liveboard: String,

    /// Server URL (overrides TS_URL)
    #[arg(long)]
    server_url: Option<String>,

    /// Username (overrides TS_USERNAME)
    #[arg(long)]
    username: Option<String>,

    /// Org ID (overrides TS_ORG_ID)
    #[arg(long)]
    org_id: Option<i64>,

    /// Trusted authentication token server (overrides TS_TOKEN_SERVER)
    #[arg(long)]
    token_server: Option<String>,

    /// Read settings from this env file instead of ./.env
    #[arg(long)]
    env_file: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    fn settings(&self) -> PermissionsResult<ConnectionSettings> {
        let overrides = ConnectionOverrides {
            server_url: self.server_url.clone(),
            username: self.username.clone(),
            org_id: self.org_id,
            token_server: self.token_server.clone(),
        };
        let settings = match &self.env_file {
            Some(path) => ConnectionSettings::from_env_file(path, &overrides)?,
            None => ConnectionSettings::from_env(&overrides)?,
        };
        Ok(settings)
    }
}

async fn run(args: Args) -> PermissionsResult<()> {
    let settings = args.settings()?;
    let client = create_api_client(&settings).await?;

    logging::log_progress(TOOL, "Looking up access", &args.liveboard);
    let permissions = liveboard_access(&client, &args.liveboard).await?;
    show_access(&permissions)?;

    logging::log_success(TOOL, &format!("Listed access for {} object(s)", permissions.len()));
    Ok(())
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    logging::init_tracing_with_level(TOOL, Some(&args.log_level));
    logging::log_startup(TOOL, "liveboard permissions lookup");

    if let Err(error) = run(args).await {
        logging::show_error_and_exit(TOOL, &error, error.response_body(), error.is_api_error());
    }
}
