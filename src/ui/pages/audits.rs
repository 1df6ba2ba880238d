use dioxus::prelude::*;

use crate::domain::entities::audit::{Audit, AuditStatus, AuditType};
use crate::domain::entities::user::Department;
use crate::ui::pages::list_page::{department_filter, enum_options, list_view, FilterDef, ListPage};
use crate::ui::state::list_state::RangeDef;

const RANGES: [RangeDef; 2] = [
    RangeDef::date("scheduled_date", "Scheduled"),
    RangeDef::number("findings", "Findings"),
];

impl ListPage for Audit {
    fn filters(departments: &[Department]) -> Vec<FilterDef> {
        vec![
            FilterDef {
                field: "audit_type",
                label: "Type",
                options: enum_options(&AuditType::ALL, AuditType::as_str, AuditType::label),
            },
            FilterDef {
                field: "status",
                label: "Status",
                options: enum_options(&AuditStatus::ALL, AuditStatus::as_str, AuditStatus::label),
            },
            department_filter(departments),
        ]
    }

    fn ranges() -> &'static [RangeDef] {
        &RANGES
    }

    fn sort_fields() -> &'static [(&'static str, &'static str)] {
        &[
            ("scheduled_date", "Scheduled"),
            ("findings", "Findings"),
            ("title", "Title"),
            ("lead_auditor", "Lead auditor"),
        ]
    }
}

#[component]
pub fn AuditsPage() -> Element {
    list_view::<Audit>()
}
