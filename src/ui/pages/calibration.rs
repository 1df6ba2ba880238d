use dioxus::prelude::*;

use crate::domain::entities::equipment::{CalibrationProgram, CalibrationStatus};
use crate::domain::entities::user::Department;
use crate::ui::pages::list_page::{enum_options, list_view, FilterDef, ListPage};
use crate::ui::state::list_state::RangeDef;

const RANGES: [RangeDef; 2] = [
    RangeDef::date("planned_date", "Planned"),
    RangeDef::number("frequency_months", "Frequency (months)"),
];

impl ListPage for CalibrationProgram {
    // Programs hang off equipment, not departments.
    fn filters(_departments: &[Department]) -> Vec<FilterDef> {
        vec![FilterDef {
            field: "status",
            label: "Status",
            options: enum_options(&CalibrationStatus::ALL, CalibrationStatus::as_str, CalibrationStatus::label),
        }]
    }

    fn ranges() -> &'static [RangeDef] {
        &RANGES
    }

    fn sort_fields() -> &'static [(&'static str, &'static str)] {
        &[
            ("planned_date", "Planned"),
            ("completed_date", "Completed"),
            ("title", "Title"),
            ("provider", "Provider"),
        ]
    }
}

#[component]
pub fn CalibrationPage() -> Element {
    list_view::<CalibrationProgram>()
}
