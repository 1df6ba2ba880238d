use dioxus::prelude::*;

use crate::usecase::services::query_service::{DashboardSummary, CALIBRATION_DUE_DAYS};

#[component]
fn SummaryTile(label: String, value: usize) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; padding: 8px 14px; border: 1px solid #ddd; border-radius: 8px; background: #fafafa; min-width: 110px;",
            span { style: "font-size: 12px; color: #666;", "{label}" }
            span { style: "font-size: 20px; font-weight: 600;", "{value}" }
        }
    }
}

#[component]
pub fn SummaryBar(summary: DashboardSummary) -> Element {
    let by_status = summary
        .documents_by_status
        .iter()
        .filter(|(_, count)| *count > 0)
        .map(|(status, count)| format!("{} {count}", status.label()))
        .collect::<Vec<_>>()
        .join(" · ");

    rsx! {
        div {
            style: "display: flex; gap: 10px; flex-wrap: wrap; align-items: stretch; margin-bottom: 8px;",
            SummaryTile { label: "Documents".to_string(), value: summary.documents_total }
            SummaryTile { label: "Equipment".to_string(), value: summary.equipment_total }
            SummaryTile {
                label: format!("Calibration due ({CALIBRATION_DUE_DAYS}d)"),
                value: summary.calibration_due,
            }
            SummaryTile { label: "Overdue programs".to_string(), value: summary.overdue_programs }
            SummaryTile { label: "Active users".to_string(), value: summary.active_users }
            SummaryTile { label: "Open audits".to_string(), value: summary.open_audits }
        }
        if !by_status.is_empty() {
            p { style: "margin: 0 0 8px; color: #555; font-size: 13px;", "{by_status}" }
        }
    }
}
