//! Liveboard permission types

/// A principal and the access it holds on an object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrincipalAccess {
    pub name: String,
    pub permission: String,
}

impl PrincipalAccess {
    pub fn new(name: impl Into<String>, permission: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            permission: permission.into(),
        }
    }
}

/// Who can access one metadata object, split by principal kind
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MetadataPermissionInfo {
    pub metadata_id: String,
    pub metadata_name: String,
    pub users: Vec<PrincipalAccess>,
    pub groups: Vec<PrincipalAccess>,
}
