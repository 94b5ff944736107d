//! Fetching generated SQL for liveboard visualizations

use tracing::{debug, info};

use shared::{LiveboardGuid, LiveboardSqlRequest, RestApi, VisualizationQuery};
use crate::error::LiveboardSqlResult;

/// Fetch the SQL of every visualization on a liveboard.
///
/// An empty GUID yields an empty list without calling the server. Passing
/// visualization GUIDs restricts the result to those visualizations.
pub async fn fetch_liveboard_sql(
    api: &dyn RestApi,
    guid: &LiveboardGuid,
    visualizations: &[String],
) -> LiveboardSqlResult<Vec<VisualizationQuery>> {
    if guid.is_empty() {
        debug!("No liveboard GUID, skipping SQL fetch");
        return Ok(Vec::new());
    }

    info!("📥 Getting SQL for liveboard with GUID {guid}");

    let request = LiveboardSqlRequest::new(guid, visualizations);
    let response = api.liveboard_sql(&request).await?;

    debug!(
        liveboard = response.metadata_name.as_deref().unwrap_or_default(),
        count = response.sql_queries.len(),
        "Received visualization SQL"
    );

    Ok(response.sql_queries)
}
