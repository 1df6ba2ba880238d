use dioxus::prelude::*;

use crate::domain::entities::equipment::{Equipment, EquipmentStatus};
use crate::domain::entities::user::Department;
use crate::ui::pages::list_page::{department_filter, enum_options, list_view, FilterDef, ListPage};
use crate::ui::state::list_state::RangeDef;

const RANGES: [RangeDef; 2] = [
    RangeDef::date("next_calibration", "Next calibration"),
    RangeDef::number("purchase_cost", "Cost"),
];

impl ListPage for Equipment {
    fn filters(departments: &[Department]) -> Vec<FilterDef> {
        vec![
            FilterDef {
                field: "status",
                label: "Status",
                options: enum_options(&EquipmentStatus::ALL, EquipmentStatus::as_str, EquipmentStatus::label),
            },
            department_filter(departments),
        ]
    }

    fn ranges() -> &'static [RangeDef] {
        &RANGES
    }

    fn sort_fields() -> &'static [(&'static str, &'static str)] {
        &[
            ("next_calibration", "Next calibration"),
            ("last_calibration", "Last calibration"),
            ("name", "Name"),
            ("code", "Code"),
            ("purchase_cost", "Cost"),
        ]
    }
}

#[component]
pub fn EquipmentPage() -> Element {
    list_view::<Equipment>()
}
