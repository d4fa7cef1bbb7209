use serde::{Deserialize, Serialize};

/// Tenant role of a console user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Role {
    Admin,
    Dealer,
    Franchisee,
    DealerManager,
    FranchiseeManager,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Admin,
        Role::Dealer,
        Role::Franchisee,
        Role::DealerManager,
        Role::FranchiseeManager,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Dealer => "dealer",
            Role::Franchisee => "franchisee",
            Role::DealerManager => "dealerManager",
            Role::FranchiseeManager => "franchiseeManager",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Dealer => "Dealer",
            Role::Franchisee => "Franchisee",
            Role::DealerManager => "Dealer Manager",
            Role::FranchiseeManager => "Franchisee Manager",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

/// Module reference inside a department grant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleRef {
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Module granted to a department. Only `status == "active"` grants access.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignedModule {
    pub module: ModuleRef,
    #[serde(default)]
    pub status: String,
}

impl AssignedModule {
    pub const ACTIVE: &'static str = "active";

    pub fn is_active(&self) -> bool {
        self.status == Self::ACTIVE
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub assigned_modules: Vec<AssignedModule>,
}

/// The logged-in user as returned by `/auth/me`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<Department>,
    #[serde(default)]
    pub delegated_departments: Vec<Department>,
}

impl UserInfo {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Own department first, then delegated ones.
    pub fn departments(&self) -> impl Iterator<Item = &Department> {
        self.department.iter().chain(self.delegated_departments.iter())
    }

    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            self.email.as_deref().unwrap_or(&self.id)
        } else {
            &self.name
        }
    }
}

/// `/auth/me` payload: `{ "user": { ... } }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUserResponse {
    pub user: UserInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_info_from_api() {
        let json = r#"{
            "_id": "u1",
            "name": "Ravi Patel",
            "role": "dealerManager",
            "department": {
                "_id": "d1",
                "name": "Operations",
                "assignedModules": [
                    { "module": { "key": "settings_hr", "name": "HR" }, "status": "active" }
                ]
            },
            "delegatedDepartments": []
        }"#;
        let user: UserInfo = serde_json::from_str(json).unwrap();
        assert_eq!(user.role, Role::DealerManager);
        assert!(!user.is_admin());
        assert_eq!(user.departments().count(), 1);
        assert!(user.department.unwrap().assigned_modules[0].is_active());
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let json = r#"{ "_id": "u1", "role": "superuser" }"#;
        assert!(serde_json::from_str::<UserInfo>(json).is_err());
    }

    #[test]
    fn test_role_wire_names() {
        for role in Role::ALL {
            let encoded = serde_json::to_string(&role).unwrap();
            assert_eq!(encoded, format!("\"{}\"", role.as_str()));
        }
    }
}
