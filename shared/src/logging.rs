//! Shared logging utilities for consistent tracing across the tools
//!
//! Log output goes to stderr so that stdout only carries results.

use chrono::{DateTime, Utc};
use tracing::{error, info};

use crate::types::Tool;

/// Filter directives for a tool at the given base level
pub fn filter_directives(tool: Tool, log_level: Option<&str>) -> String {
    let base_level = log_level.unwrap_or("info");
    format!("{}={base_level},shared={base_level},reqwest=warn,hyper=warn", tool.target())
}

/// Initialize the tracing subscriber for `tool`
pub fn init_tracing_with_level(tool: Tool, log_level: Option<&str>) {
    use tracing_subscriber::{EnvFilter, fmt};

    let directives = filter_directives(tool, log_level);

    // A second init (e.g. from tests) keeps the first subscriber
    let _ = fmt()
        .with_env_filter(EnvFilter::new(&directives))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .try_init();
}

/// Get formatted timestamp for consistent logging
pub fn format_timestamp() -> String {
    let now: DateTime<Utc> = Utc::now();
    now.format("%H:%M:%S%.3f").to_string()
}

/// Contextual logging helper for startup messages
pub fn log_startup(tool: Tool, details: &str) {
    info!(
        tool = %tool,
        timestamp = format_timestamp(),
        "🚀 Starting {}",
        details
    );
}

/// Contextual logging helper for error conditions
pub fn log_error(tool: Tool, context: &str, error: &dyn std::fmt::Display) {
    error!(
        tool = %tool,
        timestamp = format_timestamp(),
        error = %error,
        "❌ {} failed: {}",
        context,
        error
    );
}

/// Text printed for a failed run; the API header is reserved for server side failures
pub fn error_report(error: &dyn std::fmt::Display, body: Option<&str>, from_api: bool) -> String {
    let header = if from_api { "Error from the API: " } else { "Error: " };

    let mut report = format!("{header}\n{error}\n");
    if let Some(body) = body {
        report.push_str(body);
        report.push('\n');
    }
    report
}

/// Print the details of a failed run and exit with status 1
pub fn show_error_and_exit(
    tool: Tool,
    error: &dyn std::fmt::Display,
    body: Option<&str>,
    from_api: bool,
) -> ! {
    log_error(tool, "Run", error);
    eprint!("{}", error_report(error, body, from_api));
    std::process::exit(1);
}

/// Contextual logging helper for success conditions
pub fn log_success(tool: Tool, message: &str) {
    info!(
        tool = %tool,
        timestamp = format_timestamp(),
        "✅ {}",
        message
    );
}

/// Contextual logging helper for progress updates
pub fn log_progress(tool: Tool, action: &str, details: &str) {
    info!(
        tool = %tool,
        timestamp = format_timestamp(),
        "📋 {}: {}",
        action,
        details
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directives_per_tool() {
        let sql = filter_directives(Tool::LiveboardSql, Some("debug"));
        assert_eq!(sql, "liveboard_sql=debug,shared=debug,reqwest=warn,hyper=warn");

        let permissions = filter_directives(Tool::LiveboardPermissions, None);
        assert!(permissions.starts_with("liveboard_permissions=info,shared=info"));
    }

    #[test]
    fn test_api_failure_report_carries_body() {
        let report = error_report(&"API request to metadata/search failed with status 401", Some("{\"error\":\"denied\"}"), true);
        assert_eq!(
            report,
            "Error from the API: \nAPI request to metadata/search failed with status 401\n{\"error\":\"denied\"}\n"
        );
    }

    #[test]
    fn test_local_failure_report_has_plain_header() {
        let report = error_report(&"Missing configuration: TS_USERNAME", None, false);
        assert_eq!(report, "Error: \nMissing configuration: TS_USERNAME\n");
    }

    #[test]
    fn test_timestamp_format() {
        let ts = format_timestamp();
        // HH:MM:SS.mmm
        assert_eq!(ts.len(), 12);
        assert_eq!(&ts[2..3], ":");
        assert_eq!(&ts[8..9], ".");
    }
}
