//! Fetching and flattening principal permissions

use tracing::{debug, info};

use shared::{
    FetchPermissionsRequest, LiveboardGuid, PermissionsResponse, PrincipalType, RestApi,
};
use crate::error::PermissionsResult;
use crate::types::{MetadataPermissionInfo, PrincipalAccess};

/// Fetch the principal permissions of a liveboard.
///
/// An empty GUID yields an empty response without calling the server.
pub async fn fetch_permissions(
    api: &dyn RestApi,
    guid: &LiveboardGuid,
) -> PermissionsResult<PermissionsResponse> {
    if guid.is_empty() {
        debug!("No liveboard GUID, skipping permissions fetch");
        return Ok(PermissionsResponse::default());
    }

    info!("📥 Getting permissions for {guid}");

    let request = FetchPermissionsRequest::liveboard(guid);
    Ok(api.fetch_permissions(&request).await?)
}

/// Split each object's principals into users and groups.
///
/// Principals of any other type are skipped.
pub fn extract_permissions(response: &PermissionsResponse) -> Vec<MetadataPermissionInfo> {
    response
        .metadata_permission_details
        .iter()
        .map(|detail| {
            let mut info = MetadataPermissionInfo {
                metadata_id: detail.metadata_id.clone(),
                metadata_name: detail.metadata_name.clone(),
                ..Default::default()
            };

            for principal in &detail.principal_permission_info {
                let bucket = match principal.principal_type {
                    PrincipalType::User => &mut info.users,
                    PrincipalType::UserGroup => &mut info.groups,
                    PrincipalType::Other => continue,
                };
                bucket.extend(
                    principal
                        .principal_permissions
                        .iter()
                        .map(|p| PrincipalAccess::new(&p.principal_name, &p.permission)),
                );
            }

            info
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::MockRestApi;

    fn response() -> PermissionsResponse {
        serde_json::from_value(serde_json::json!({
            "metadata_permission_details": [{
                "metadata_id": "d084c256-e284-4fc4-b80c-111cb606449a",
                "metadata_name": "Sales Performance",
                "metadata_type": "LIVEBOARD",
                "principal_permission_info": [
                    {
                        "principal_type": "USER",
                        "principal_permissions": [
                            {"principal_id": "u1", "principal_name": "alice", "permission": "MODIFY"},
                            {"principal_id": "u2", "principal_name": "bob", "permission": "READ_ONLY"}
                        ]
                    },
                    {
                        "principal_type": "USER_GROUP",
                        "principal_permissions": [
                            {"principal_id": "g1", "principal_name": "Sales", "permission": "READ_ONLY"}
                        ]
                    },
                    {
                        "principal_type": "ORG",
                        "principal_permissions": [
                            {"principal_id": "o1", "principal_name": "Primary", "permission": "READ_ONLY"}
                        ]
                    }
                ]
            }]
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_empty_guid_skips_network_call() {
        let mut api = MockRestApi::new();
        api.expect_fetch_permissions().times(0);

        let response = fetch_permissions(&api, &LiveboardGuid::empty()).await.unwrap();
        assert!(extract_permissions(&response).is_empty());
    }

    #[tokio::test]
    async fn test_request_targets_the_liveboard() {
        let mut api = MockRestApi::new();
        api.expect_fetch_permissions()
            .withf(|request| {
                request.metadata[0].identifier == "d084c256-e284-4fc4-b80c-111cb606449a"
                    && !request.include_dependent_objects
                    && request.record_offset == 0
                    && request.record_size == -1
            })
            .times(1)
            .returning(|_| Ok(response()));

        let guid = LiveboardGuid::from("d084c256-e284-4fc4-b80c-111cb606449a");
        let response = fetch_permissions(&api, &guid).await.unwrap();
        assert_eq!(response.metadata_permission_details.len(), 1);
    }

    #[test]
    fn test_users_and_groups_are_split() {
        let infos = extract_permissions(&response());
        assert_eq!(infos.len(), 1);

        let info = &infos[0];
        assert_eq!(info.metadata_name, "Sales Performance");
        assert_eq!(
            info.users,
            vec![
                PrincipalAccess::new("alice", "MODIFY"),
                PrincipalAccess::new("bob", "READ_ONLY"),
            ]
        );
        assert_eq!(info.groups, vec![PrincipalAccess::new("Sales", "READ_ONLY")]);
    }

    #[test]
    fn test_empty_response_yields_nothing() {
        assert!(extract_permissions(&PermissionsResponse::default()).is_empty());
    }
}
