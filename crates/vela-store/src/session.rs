//! # Session
//!
//! The authenticated user on whose behalf the store operates.
//!
//! Sessions are produced by an external authentication layer (login,
//! token validation, tenant resolution all happen elsewhere) and arrive
//! here fully built. This crate only reads them: the username goes onto
//! committed transactions and the permission set gates catalog writes.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// =============================================================================
// Permission
// =============================================================================

/// A catalog action a role can grant.
///
/// Serialized with the wire names the permission service issues
/// (`"Create_Item"`, `"Read_Item"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Permission {
    #[serde(rename = "Create_Item")]
    CreateItem,
    #[serde(rename = "Read_Item")]
    ReadItem,
    #[serde(rename = "Update_Item")]
    UpdateItem,
    #[serde(rename = "Delete_Item")]
    DeleteItem,
}

impl Permission {
    /// The wire name of this permission.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Permission::CreateItem => "Create_Item",
            Permission::ReadItem => "Read_Item",
            Permission::UpdateItem => "Update_Item",
            Permission::DeleteItem => "Delete_Item",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = UnknownPermission;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Create_Item" => Ok(Permission::CreateItem),
            "Read_Item" => Ok(Permission::ReadItem),
            "Update_Item" => Ok(Permission::UpdateItem),
            "Delete_Item" => Ok(Permission::DeleteItem),
            other => Err(UnknownPermission(other.to_string())),
        }
    }
}

/// Returned when a permission string from the session provider is not
/// one this store understands.
#[derive(Debug, Clone, thiserror::Error)]
#[error("Unknown permission: {0}")]
pub struct UnknownPermission(pub String);

// =============================================================================
// Session
// =============================================================================

/// An authenticated user session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Login name; recorded on every transaction this session commits.
    pub username: String,

    /// Display name of the tenant the user belongs to.
    pub tenant_name: String,

    /// Role names as issued ("Admin", "Cashier", ...).
    pub roles: Vec<String>,

    /// Granted permissions.
    pub permissions: HashSet<Permission>,
}

impl Session {
    /// The permission gate: checks a single permission.
    #[inline]
    pub fn has_permission(&self, permission: Permission) -> bool {
        self.permissions.contains(&permission)
    }

    /// Checks for the "Admin" role (admin-only dashboard panels).
    pub fn is_admin(&self) -> bool {
        self.roles.iter().any(|role| role == "Admin")
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_round_trip() {
        for p in [
            Permission::CreateItem,
            Permission::ReadItem,
            Permission::UpdateItem,
            Permission::DeleteItem,
        ] {
            assert_eq!(p.as_str().parse::<Permission>().unwrap(), p);
        }

        assert!("Launch_Missiles".parse::<Permission>().is_err());
    }

    #[test]
    fn test_permission_wire_names() {
        let json = serde_json::to_string(&Permission::CreateItem).unwrap();
        assert_eq!(json, "\"Create_Item\"");
    }

    #[test]
    fn test_session_gate_and_roles() {
        let session = Session {
            username: "mustafa".to_string(),
            tenant_name: "Acme Retail".to_string(),
            roles: vec!["Cashier".to_string()],
            permissions: [Permission::ReadItem].into_iter().collect(),
        };

        assert!(session.has_permission(Permission::ReadItem));
        assert!(!session.has_permission(Permission::DeleteItem));
        assert!(!session.is_admin());
    }
}
