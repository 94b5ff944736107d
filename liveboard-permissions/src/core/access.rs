//! Console rendering of liveboard access

use std::io::{self, Write};

use crate::types::MetadataPermissionInfo;

/// Write a header per object, then its user lines, then its group lines
pub fn write_access<W: Write>(out: &mut W, permissions: &[MetadataPermissionInfo]) -> io::Result<()> {
    for info in permissions {
        writeln!(out, "Permissions for {}: ", info.metadata_name)?;
        for user in &info.users {
            writeln!(out, "user {}: {}", user.name, user.permission)?;
        }
        for group in &info.groups {
            writeln!(out, "group {}: {}", group.name, group.permission)?;
        }
    }
    out.flush()
}

/// Print access to stdout
pub fn show_access(permissions: &[MetadataPermissionInfo]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_access(&mut handle, permissions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PrincipalAccess;

    #[test]
    fn test_users_print_before_groups() {
        let permissions = vec![MetadataPermissionInfo {
            metadata_id: "lb-1".to_string(),
            metadata_name: "Sales Performance".to_string(),
            users: vec![PrincipalAccess::new("alice", "MODIFY")],
            groups: vec![PrincipalAccess::new("Sales", "READ_ONLY")],
        }];

        let mut out = Vec::new();
        write_access(&mut out, &permissions).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Permissions for Sales Performance: \nuser alice: MODIFY\ngroup Sales: READ_ONLY\n"
        );
    }

    #[test]
    fn test_object_without_principals_prints_header_only() {
        let permissions = vec![MetadataPermissionInfo {
            metadata_name: "Empty Board".to_string(),
            ..Default::default()
        }];

        let mut out = Vec::new();
        write_access(&mut out, &permissions).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Permissions for Empty Board: \n");
    }
}
