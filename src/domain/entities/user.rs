use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::entities::record::{format_instant, DomainKind, FieldValue, Record, TableRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    QualityManager,
    Technician,
    Auditor,
    Viewer,
}

impl UserRole {
    pub const ALL: [UserRole; 5] = [
        UserRole::Admin,
        UserRole::QualityManager,
        UserRole::Technician,
        UserRole::Auditor,
        UserRole::Viewer,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::QualityManager => "quality_manager",
            UserRole::Technician => "technician",
            UserRole::Auditor => "auditor",
            UserRole::Viewer => "viewer",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            UserRole::Admin => "Administrator",
            UserRole::QualityManager => "Quality manager",
            UserRole::Technician => "Technician",
            UserRole::Auditor => "Auditor",
            UserRole::Viewer => "Viewer",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub department_id: String,
    pub active: bool,
    #[serde(default)]
    pub last_login: Option<NaiveDateTime>,
}

impl User {
    pub fn state_str(&self) -> &'static str {
        if self.active {
            "active"
        } else {
            "inactive"
        }
    }
}

impl Record for User {
    const KIND: DomainKind = DomainKind::User;

    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str()]
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        let value = match name {
            "id" => FieldValue::text(&self.id),
            "name" => FieldValue::text(&self.name),
            "email" => FieldValue::text(&self.email),
            "role" => FieldValue::text(self.role.as_str()),
            "department_id" => FieldValue::text(&self.department_id),
            "state" => FieldValue::text(self.state_str()),
            "last_login" => FieldValue::Instant(self.last_login?),
            _ => return None,
        };
        Some(value)
    }
}

impl TableRow for User {
    fn columns() -> &'static [&'static str] {
        &["Name", "Email", "Role", "Department", "State", "Last login"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.email.clone(),
            self.role.label().to_string(),
            self.department_id.clone(),
            self.state_str().to_string(),
            self.last_login.map(format_instant).unwrap_or_default(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub id: String,
    pub code: String,
    pub name: String,
    pub manager: String,
}

impl Record for Department {
    const KIND: DomainKind = DomainKind::Department;

    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.code.as_str(), self.manager.as_str()]
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        let value = match name {
            "id" => FieldValue::text(&self.id),
            "code" => FieldValue::text(&self.code),
            "name" => FieldValue::text(&self.name),
            "manager" => FieldValue::text(&self.manager),
            _ => return None,
        };
        Some(value)
    }
}
