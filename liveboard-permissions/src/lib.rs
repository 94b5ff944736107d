//! Liveboard permissions library
//!
//! Resolves a liveboard by name and lists the users and groups that can
//! access it.

pub mod core;
pub mod error;
pub mod types;

pub use error::{PermissionsError, PermissionsResult};
pub use types::*;
pub use crate::core::{extract_permissions, fetch_permissions, show_access, write_access};

use shared::{resolve_liveboard_guid, RestApi};

/// Resolve `liveboard_name` and collect who can access it
pub async fn liveboard_access(
    api: &dyn RestApi,
    liveboard_name: &str,
) -> PermissionsResult<Vec<MetadataPermissionInfo>> {
    let guid = resolve_liveboard_guid(api, liveboard_name).await?;
    let response = fetch_permissions(api, &guid).await?;
    Ok(extract_permissions(&response))
}
