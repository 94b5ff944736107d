//! Security messages
//!
//! Bodies for `POST /api/rest/2.0/security/principals/fetch-permissions`.

use serde::{Deserialize, Serialize};

use super::metadata::MetadataIdentifier;
use crate::types::{LiveboardGuid, PrincipalType};

/// Permission lookup for one or more metadata objects
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct FetchPermissionsRequest {
    pub metadata: Vec<MetadataIdentifier>,
    pub include_dependent_objects: bool,
    pub record_offset: i64,
    pub record_size: i64,
}

impl FetchPermissionsRequest {
    /// All principals for a single liveboard, without dependents
    pub fn liveboard(guid: &LiveboardGuid) -> Self {
        Self {
            metadata: vec![MetadataIdentifier::liveboard(guid.as_str())],
            include_dependent_objects: false,
            record_offset: 0,
            record_size: -1,
        }
    }
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct PermissionsResponse {
    #[serde(default)]
    pub metadata_permission_details: Vec<MetadataPermissionDetail>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct MetadataPermissionDetail {
    pub metadata_id: String,
    #[serde(default)]
    pub metadata_name: String,
    #[serde(default)]
    pub principal_permission_info: Vec<PrincipalPermissionInfo>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct PrincipalPermissionInfo {
    pub principal_type: PrincipalType,
    #[serde(default)]
    pub principal_permissions: Vec<PrincipalPermission>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct PrincipalPermission {
    pub principal_name: String,
    pub permission: String,
}
