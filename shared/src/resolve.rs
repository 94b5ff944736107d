//! Liveboard name resolution

use tracing::{debug, info, warn};

use crate::errors::SharedResult;
use crate::messages::SearchMetadataRequest;
use crate::traits::RestApi;
use crate::types::LiveboardGuid;

/// Look up the GUID of the liveboard called `liveboard_name`.
///
/// Returns an empty GUID when nothing matches. When several liveboards share
/// the name the first one returned by the server wins.
pub async fn resolve_liveboard_guid(api: &dyn RestApi, liveboard_name: &str) -> SharedResult<LiveboardGuid> {
    info!("🔍 Getting GUID for {liveboard_name}");

    let request = SearchMetadataRequest::liveboard_by_name(liveboard_name);
    let results = api.search_metadata(&request).await?;

    if results.len() > 1 {
        warn!(matches = results.len(), "Multiple liveboards named '{liveboard_name}', using the first");
    }

    let guid = results
        .into_iter()
        .next()
        .and_then(|header| header.metadata_id)
        .map(LiveboardGuid::from)
        .unwrap_or_else(LiveboardGuid::empty);

    if guid.is_empty() {
        warn!("No liveboard named '{liveboard_name}'");
    } else {
        debug!(%guid, "Resolved liveboard");
    }

    Ok(guid)
}
