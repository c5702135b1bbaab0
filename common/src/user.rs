use serde::{Deserialize, Serialize};

/// Platform role as the API spells it. Role strings gate the admin area:
/// anything other than `Usuario` counts as staff, but each section also
/// checks its own manager role.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    UserManager,
    FoodManager,
    EmployeeManager,
    #[default]
    Client,
    Other(String),
}

impl Role {
    /// Roles assignable to employees, in form display order.
    pub fn staff_roles() -> &'static [Role] {
        &[
            Role::Admin,
            Role::UserManager,
            Role::FoodManager,
            Role::EmployeeManager,
        ]
    }

    pub fn label(&self) -> &str {
        match self {
            Role::Admin => "Administrador",
            Role::UserManager => "Gestor de usuarios",
            Role::FoodManager => "Gestor de alimentos",
            Role::EmployeeManager => "Gestor de empleados",
            Role::Client => "Usuario",
            Role::Other(raw) => raw,
        }
    }

    pub fn parse(raw: &str) -> Role {
        match raw.trim() {
            "Administrador" => Role::Admin,
            "Gestor de usuarios" => Role::UserManager,
            "Gestor de alimentos" => Role::FoodManager,
            "Gestor de empleados" => Role::EmployeeManager,
            "Usuario" => Role::Client,
            other => Role::Other(other.to_string()),
        }
    }

    pub fn is_staff(&self) -> bool {
        !matches!(self, Role::Client)
    }

    pub fn can_manage_products(&self) -> bool {
        matches!(self, Role::Admin | Role::FoodManager)
    }

    pub fn can_manage_clients(&self) -> bool {
        matches!(self, Role::Admin | Role::UserManager)
    }

    pub fn can_manage_employees(&self) -> bool {
        matches!(self, Role::Admin | Role::EmployeeManager)
    }
}

impl From<String> for Role {
    fn from(raw: String) -> Self {
        Role::parse(&raw)
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.label().to_string()
    }
}

/// Account status for both clients and employees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AccountStatus {
    #[default]
    Active,
    Blocked,
    Inactive,
}

impl AccountStatus {
    pub fn all() -> &'static [AccountStatus] {
        &[
            AccountStatus::Active,
            AccountStatus::Blocked,
            AccountStatus::Inactive,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            AccountStatus::Active => "Activo",
            AccountStatus::Blocked => "Bloqueado",
            AccountStatus::Inactive => "Inactivo",
        }
    }

    /// Lowercase form the filter endpoint expects.
    pub fn filter_value(&self) -> &'static str {
        match self {
            AccountStatus::Active => "activo",
            AccountStatus::Blocked => "bloqueado",
            AccountStatus::Inactive => "inactivo",
        }
    }

    /// Stable hook for per-status styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            AccountStatus::Active => "account-active",
            AccountStatus::Blocked => "account-blocked",
            AccountStatus::Inactive => "account-inactive",
        }
    }

    pub fn parse(raw: &str) -> AccountStatus {
        match raw.trim().to_lowercase().as_str() {
            "bloqueado" => AccountStatus::Blocked,
            "inactivo" => AccountStatus::Inactive,
            _ => AccountStatus::Active,
        }
    }
}

impl From<String> for AccountStatus {
    fn from(raw: String) -> Self {
        AccountStatus::parse(&raw)
    }
}

impl From<AccountStatus> for String {
    fn from(status: AccountStatus) -> Self {
        status.label().to_string()
    }
}

/// A platform account (client or employee) as the API serves it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub middle_name: String,
    /// Wire format `DD/MM/YYYY`, same as product expiration dates.
    #[serde(default)]
    pub birth_date: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub status: AccountStatus,
}

impl User {
    /// "Nombre Apellido paterno Apellido materno", skipping empty parts.
    pub fn full_name(&self) -> String {
        [&self.first_name, &self.last_name, &self.middle_name]
            .iter()
            .map(|part| part.trim())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Initials shown in the table avatar, e.g. "MG".
    pub fn initials(&self) -> String {
        [&self.first_name, &self.last_name]
            .iter()
            .filter_map(|part| part.trim().chars().next())
            .collect()
    }
}

/// Query parameters for `GET /api/users/filter`. An empty filter means the
/// caller should hit the section's `/all` endpoint instead.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserFilter {
    pub name: Option<String>,
    pub role: Option<Role>,
    pub status: Option<AccountStatus>,
}

impl UserFilter {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.role.is_none() && self.status.is_none()
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(name) = &self.name {
            pairs.push(("name", name.clone()));
        }
        if let Some(role) = &self.role {
            pairs.push(("role", role.label().to_string()));
        }
        if let Some(status) = &self.status {
            pairs.push(("status", status.filter_value().to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dummy_user() -> User {
        User {
            id: "u1".to_string(),
            first_name: "María".to_string(),
            last_name: "García".to_string(),
            middle_name: "López".to_string(),
            birth_date: "12/04/1990".to_string(),
            email: "maria@ejemplo.com".to_string(),
            role: Role::Client,
            phone: "722 123 4567".to_string(),
            address: "Calle 1".to_string(),
            status: AccountStatus::Active,
        }
    }

    #[test]
    fn test_role_round_trip() {
        for role in Role::staff_roles() {
            assert_eq!(&Role::parse(role.label()), role);
        }
        assert_eq!(Role::parse("Usuario"), Role::Client);
    }

    #[test]
    fn unknown_role_is_staff_without_section_access() {
        let role = Role::parse("Auditor");
        assert_eq!(role, Role::Other("Auditor".to_string()));
        assert!(role.is_staff());
        assert!(!role.can_manage_products());
        assert!(!role.can_manage_clients());
        assert!(!role.can_manage_employees());
    }

    #[test]
    fn test_section_gates() {
        assert!(Role::Admin.can_manage_products());
        assert!(Role::Admin.can_manage_clients());
        assert!(Role::Admin.can_manage_employees());
        assert!(Role::FoodManager.can_manage_products());
        assert!(!Role::FoodManager.can_manage_clients());
        assert!(Role::UserManager.can_manage_clients());
        assert!(!Role::UserManager.can_manage_employees());
        assert!(Role::EmployeeManager.can_manage_employees());
        assert!(!Role::Client.is_staff());
    }

    #[test]
    fn test_account_status_parse() {
        assert_eq!(AccountStatus::parse("Bloqueado"), AccountStatus::Blocked);
        assert_eq!(AccountStatus::parse("inactivo"), AccountStatus::Inactive);
        assert_eq!(AccountStatus::parse("Activo"), AccountStatus::Active);
        assert_eq!(AccountStatus::parse(""), AccountStatus::Active);
        assert_eq!(AccountStatus::Blocked.css_class(), "account-blocked");
    }

    #[test]
    fn test_full_name_skips_empty_parts() {
        let mut user = dummy_user();
        assert_eq!(user.full_name(), "María García López");
        user.middle_name = String::new();
        assert_eq!(user.full_name(), "María García");
        assert_eq!(user.initials(), "MG");
    }

    #[test]
    fn test_user_deserializes_with_defaults() {
        let user: User = serde_json::from_str(
            r#"{"id":"7","first_name":"Ana","last_name":"Ruiz","email":"ana@e.com","role":"Gestor de alimentos"}"#,
        )
        .unwrap();
        assert_eq!(user.role, Role::FoodManager);
        assert_eq!(user.status, AccountStatus::Active);
        assert_eq!(user.middle_name, "");
    }

    #[test]
    fn test_filter_query_pairs() {
        let filter = UserFilter {
            name: Some("ana".to_string()),
            role: Some(Role::EmployeeManager),
            status: Some(AccountStatus::Blocked),
        };
        assert_eq!(
            filter.query_pairs(),
            vec![
                ("name", "ana".to_string()),
                ("role", "Gestor de empleados".to_string()),
                ("status", "bloqueado".to_string()),
            ]
        );
        assert!(UserFilter::default().is_empty());
    }
}
