//! Liveboard SQL extractor with dependency injection

use tracing::info;

use shared::{resolve_liveboard_guid, LiveboardGuid, RestApi, VisualizationQuery};
use crate::core::fetch_liveboard_sql;
use crate::error::LiveboardSqlResult;
use crate::types::LiveboardTarget;

/// Resolves a liveboard and pulls the SQL behind its visualizations
pub struct Extractor<A>
where
    A: RestApi,
{
    pub api: A,
    pub visualizations: Vec<String>,
}

impl<A> Extractor<A>
where
    A: RestApi,
{
    /// Create new extractor over an authenticated API
    pub fn new(api: A) -> Self {
        Self {
            api,
            visualizations: Vec::new(),
        }
    }

    /// Only extract the given visualization GUIDs
    pub fn with_visualizations(mut self, visualizations: Vec<String>) -> Self {
        self.visualizations = visualizations;
        self
    }

    /// Turn the target into a GUID, empty when no liveboard matches
    pub async fn resolve(&self, target: &LiveboardTarget) -> LiveboardSqlResult<LiveboardGuid> {
        match target {
            LiveboardTarget::Guid(guid) => Ok(guid.clone()),
            LiveboardTarget::Name(name) => Ok(resolve_liveboard_guid(&self.api, name).await?),
        }
    }

    /// Resolve the target and fetch the SQL of its visualizations
    pub async fn extract(&self, target: &LiveboardTarget) -> LiveboardSqlResult<Vec<VisualizationQuery>> {
        let guid = self.resolve(target).await?;
        info!("📋 Getting the SQL for {target} ({guid})");

        fetch_liveboard_sql(&self.api, &guid, &self.visualizations).await
    }
}
