//! Liveboard SQL binary entry point

use std::path::PathBuf;

use clap::Parser;

use liveboard_sql::{print_sql, Extractor, LiveboardSqlResult, LiveboardTarget};
use shared::{
    create_api_client, logging, ConnectionOverrides, ConnectionSettings, LiveboardGuid, Tool,
};

const TOOL: Tool = Tool::LiveboardSql;

#[derive(Parser, Debug)]
#[command(name = "liveboard-sql")]
#[command(about = "Print the SQL behind each visualization of a ThoughtSpot liveboard")]
struct Args {
    /// Liveboard name to look up
    #[arg(long, default_value = "Sales Performance")]
    liveboard: String,

    /// Liveboard GUID (skips the name lookup)
    #[arg(long, conflicts_with = "liveboard")]
    liveboard_id: Option<String>,

    /// Only print these visualization GUIDs (repeatable)
    #[arg(long = "visualization")]
    visualizations: Vec<String>,

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
    fn target(&self) -> LiveboardSqlResult<LiveboardTarget> {
        match &self.liveboard_id {
            Some(id) => Ok(LiveboardTarget::Guid(LiveboardGuid::parse(id)?)),
            None => Ok(LiveboardTarget::Name(self.liveboard.clone())),
        }
    }

    fn overrides(&self) -> ConnectionOverrides {
        ConnectionOverrides {
            server_url: self.server_url.clone(),
            username: self.username.clone(),
            org_id: self.org_id,
            token_server: self.token_server.clone(),
        }
    }

    fn settings(&self) -> LiveboardSqlResult<ConnectionSettings> {
        let overrides = self.overrides();
        let settings = match &self.env_file {
            Some(path) => ConnectionSettings::from_env_file(path, &overrides)?,
            None => ConnectionSettings::from_env(&overrides)?,
        };
        Ok(settings)
    }
}

async fn run(args: Args) -> LiveboardSqlResult<()> {
    let target = args.target()?;
    let settings = args.settings()?;

    let client = create_api_client(&settings).await?;
    let extractor = Extractor::new(client).with_visualizations(args.visualizations);

    logging::log_progress(TOOL, "Extracting SQL", &target.to_string());
    let queries = extractor.extract(&target).await?;
    print_sql(&queries)?;

    logging::log_success(TOOL, &format!("Printed SQL for {} visualization(s)", queries.len()));
    Ok(())
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    logging::init_tracing_with_level(TOOL, Some(&args.log_level));
    logging::log_startup(TOOL, "liveboard SQL extraction");

    if let Err(error) = run(args).await {
        logging::show_error_and_exit(TOOL, &error, error.response_body(), error.is_api_error());
    }
}
