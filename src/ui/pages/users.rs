use dioxus::prelude::*;

use crate::domain::entities::user::{Department, User, UserRole};
use crate::ui::components::dropdown::DropdownOption;
use crate::ui::pages::list_page::{department_filter, enum_options, list_view, FilterDef, ListPage};
use crate::ui::state::list_state::RangeDef;

const RANGES: [RangeDef; 1] = [RangeDef::date("last_login", "Last login")];

impl ListPage for User {
    fn filters(departments: &[Department]) -> Vec<FilterDef> {
        vec![
            FilterDef {
                field: "role",
                label: "Role",
                options: enum_options(&UserRole::ALL, UserRole::as_str, UserRole::label),
            },
            FilterDef {
                field: "state",
                label: "State",
                options: vec![
                    DropdownOption::new("active", "Active"),
                    DropdownOption::new("inactive", "Inactive"),
                ],
            },
            department_filter(departments),
        ]
    }

    fn ranges() -> &'static [RangeDef] {
        &RANGES
    }

    fn sort_fields() -> &'static [(&'static str, &'static str)] {
        &[("name", "Name"), ("email", "Email"), ("last_login", "Last login")]
    }
}

#[component]
pub fn UsersPage() -> Element {
    list_view::<User>()
}
