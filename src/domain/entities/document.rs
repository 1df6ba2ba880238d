use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::entities::record::{format_instant, DomainKind, FieldValue, Record, TableRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    Draft,
    Review,
    Approved,
    Rejected,
    Archived,
}

impl DocumentStatus {
    pub const ALL: [DocumentStatus; 5] = [
        DocumentStatus::Draft,
        DocumentStatus::Review,
        DocumentStatus::Approved,
        DocumentStatus::Rejected,
        DocumentStatus::Archived,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DocumentStatus::Draft => "draft",
            DocumentStatus::Review => "review",
            DocumentStatus::Approved => "approved",
            DocumentStatus::Rejected => "rejected",
            DocumentStatus::Archived => "archived",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DocumentStatus::Draft => "Draft",
            DocumentStatus::Review => "In review",
            DocumentStatus::Approved => "Approved",
            DocumentStatus::Rejected => "Rejected",
            DocumentStatus::Archived => "Archived",
        }
    }
}

/// A controlled document: procedure, form, instruction, policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub code: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub status: DocumentStatus,
    pub department_id: String,
    pub author: String,
    pub version: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub file_size_kb: u64,
    pub created_at: NaiveDate,
    pub updated_at: NaiveDateTime,
}

impl Record for Document {
    const KIND: DomainKind = DomainKind::Document;

    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.title.as_str(),
            self.code.as_str(),
            self.description.as_str(),
            self.author.as_str(),
        ];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        let value = match name {
            "id" => FieldValue::text(&self.id),
            "code" => FieldValue::text(&self.code),
            "title" => FieldValue::text(&self.title),
            "category" => FieldValue::text(&self.category),
            "status" => FieldValue::text(self.status.as_str()),
            "department_id" => FieldValue::text(&self.department_id),
            "author" => FieldValue::text(&self.author),
            "version" => FieldValue::text(&self.version),
            "file_size_kb" => FieldValue::Number(self.file_size_kb as f64),
            "created_at" => FieldValue::date(self.created_at),
            "updated_at" => FieldValue::Instant(self.updated_at),
            _ => return None,
        };
        Some(value)
    }
}

impl TableRow for Document {
    fn columns() -> &'static [&'static str] {
        &[
            "Code",
            "Title",
            "Category",
            "Status",
            "Department",
            "Author",
            "Version",
            "Size (KB)",
            "Updated",
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.code.clone(),
            self.title.clone(),
            self.category.clone(),
            self.status.label().to_string(),
            self.department_id.clone(),
            self.author.clone(),
            self.version.clone(),
            self.file_size_kb.to_string(),
            format_instant(self.updated_at),
        ]
    }
}
