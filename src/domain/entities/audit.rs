use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::entities::record::{format_date, DomainKind, FieldValue, Record, TableRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditType {
    Internal,
    External,
}

impl AuditType {
    pub const ALL: [AuditType; 2] = [AuditType::Internal, AuditType::External];

    pub fn as_str(self) -> &'static str {
        match self {
            AuditType::Internal => "internal",
            AuditType::External => "external",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AuditType::Internal => "Internal",
            AuditType::External => "External",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditStatus {
    Planned,
    InProgress,
    Completed,
}

impl AuditStatus {
    pub const ALL: [AuditStatus; 3] = [
        AuditStatus::Planned,
        AuditStatus::InProgress,
        AuditStatus::Completed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AuditStatus::Planned => "planned",
            AuditStatus::InProgress => "in_progress",
            AuditStatus::Completed => "completed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AuditStatus::Planned => "Planned",
            AuditStatus::InProgress => "In progress",
            AuditStatus::Completed => "Completed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Audit {
    pub id: String,
    pub code: String,
    pub title: String,
    pub audit_type: AuditType,
    pub lead_auditor: String,
    pub department_id: String,
    pub status: AuditStatus,
    pub scheduled_date: NaiveDate,
    pub findings: u32,
}

impl Record for Audit {
    const KIND: DomainKind = DomainKind::Audit;

    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.code.as_str(),
            self.lead_auditor.as_str(),
        ]
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        let value = match name {
            "id" => FieldValue::text(&self.id),
            "code" => FieldValue::text(&self.code),
            "title" => FieldValue::text(&self.title),
            "audit_type" => FieldValue::text(self.audit_type.as_str()),
            "lead_auditor" => FieldValue::text(&self.lead_auditor),
            "department_id" => FieldValue::text(&self.department_id),
            "status" => FieldValue::text(self.status.as_str()),
            "scheduled_date" => FieldValue::date(self.scheduled_date),
            "findings" => FieldValue::Number(f64::from(self.findings)),
            _ => return None,
        };
        Some(value)
    }
}

impl TableRow for Audit {
    fn columns() -> &'static [&'static str] {
        &[
            "Code",
            "Title",
            "Type",
            "Lead auditor",
            "Department",
            "Status",
            "Scheduled",
            "Findings",
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.code.clone(),
            self.title.clone(),
            self.audit_type.label().to_string(),
            self.lead_auditor.clone(),
            self.department_id.clone(),
            self.status.label().to_string(),
            format_date(self.scheduled_date),
            self.findings.to_string(),
        ]
    }
}
