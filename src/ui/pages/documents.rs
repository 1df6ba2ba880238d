use dioxus::prelude::*;

use crate::domain::entities::document::{Document, DocumentStatus};
use crate::domain::entities::user::Department;
use crate::ui::pages::list_page::{department_filter, enum_options, list_view, FilterDef, ListPage};
use crate::ui::state::list_state::RangeDef;
use crate::usecase::ports::repo::BulkOperation;

const RANGES: [RangeDef; 2] = [
    RangeDef::date("updated_at", "Updated"),
    RangeDef::number("file_size_kb", "Size (KB)"),
];

impl ListPage for Document {
    fn filters(departments: &[Department]) -> Vec<FilterDef> {
        vec![
            FilterDef {
                field: "status",
                label: "Status",
                options: enum_options(&DocumentStatus::ALL, DocumentStatus::as_str, DocumentStatus::label),
            },
            department_filter(departments),
        ]
    }

    fn ranges() -> &'static [RangeDef] {
        &RANGES
    }

    fn sort_fields() -> &'static [(&'static str, &'static str)] {
        &[
            ("updated_at", "Updated"),
            ("created_at", "Created"),
            ("title", "Title"),
            ("code", "Code"),
            ("file_size_kb", "Size"),
            ("status", "Status"),
        ]
    }

    fn bulk_operations() -> &'static [BulkOperation] {
        &[
            BulkOperation::Approve,
            BulkOperation::Reject,
            BulkOperation::Archive,
            BulkOperation::Delete,
            BulkOperation::Export,
        ]
    }
}

#[component]
pub fn DocumentsPage() -> Element {
    list_view::<Document>()
}
