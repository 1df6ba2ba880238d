use std::sync::Arc;

use chrono::Local;
use dioxus::prelude::*;

use crate::config::{AppConfig, Backend};
use crate::platform::desktop::blocking::run_blocking;
use crate::ui::components::summary_bar::SummaryBar;
use crate::ui::pages::audits::AuditsPage;
use crate::ui::pages::calibration::CalibrationPage;
use crate::ui::pages::documents::DocumentsPage;
use crate::ui::pages::equipment::EquipmentPage;
use crate::ui::pages::users::UsersPage;
use crate::usecase::ports::repo::RecordRepository;
use crate::usecase::services::bulk_service::BulkService;
use crate::usecase::services::query_service::QueryService;

/// Services shared by every page, provided as root context.
#[derive(Clone)]
pub struct Services {
    pub query: Arc<QueryService>,
    pub bulk: Arc<BulkService>,
    pub config: Arc<AppConfig>,
}

impl Services {
    pub fn new(repo: Arc<dyn RecordRepository>, config: AppConfig) -> Self {
        Self {
            query: Arc::new(QueryService::new(repo.clone())),
            bulk: Arc::new(BulkService::new(repo)),
            config: Arc::new(config),
        }
    }
}

/// Bumped after every successful mutation so views reload their records.
#[derive(Clone, Copy)]
pub struct Revision(pub Signal<u64>);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
    Documents,
    Equipment,
    Calibration,
    Users,
    Audits,
}

impl Tab {
    const ALL: [Tab; 5] = [
        Tab::Documents,
        Tab::Equipment,
        Tab::Calibration,
        Tab::Users,
        Tab::Audits,
    ];

    fn label(self) -> &'static str {
        match self {
            Tab::Documents => "Documents",
            Tab::Equipment => "Equipment",
            Tab::Calibration => "Calibration",
            Tab::Users => "Users",
            Tab::Audits => "Audits",
        }
    }
}

#[component]
pub fn App() -> Element {
    let services = use_context::<Services>();
    let Revision(revision) = use_context_provider(|| Revision(Signal::new(0_u64)));
    let mut active_tab = use_signal(|| Tab::Documents);

    let query_for_summary = services.query.clone();
    let summary = use_memo(move || {
        let _ = revision();
        let today = Local::now().date_naive();
        run_blocking("summary", || query_for_summary.summary(today)).map_err(|err| err.to_string())
    });

    let backend_label = match services.config.backend {
        Backend::Mock => "mock data",
        Backend::Sqlite => "sqlite",
    };
    let title = services.config.window_title.clone();

    rsx! {
        div {
            style: "font-family: system-ui, sans-serif; padding: 12px 16px; color: #222;",
            div {
                style: "display: flex; align-items: baseline; gap: 12px;",
                h2 { style: "margin: 0 0 8px;", "{title}" }
                span { style: "color: #888; font-size: 12px;", "backend: {backend_label}" }
            }

            {match summary() {
                Ok(summary) => rsx! { SummaryBar { summary } },
                Err(err) => rsx! {
                    p { style: "color: #b00020;", "Failed to load summary: {err}" }
                },
            }}

            div {
                style: "display: flex; gap: 4px; border-bottom: 1px solid #ccc; margin-bottom: 8px;",
                for tab in Tab::ALL {
                    button {
                        key: "{tab.label()}",
                        style: if active_tab() == tab {
                            "border: 1px solid #bbb; border-bottom: 2px solid #2a5db0; background: #fff; padding: 6px 14px; cursor: pointer; font-weight: 600;"
                        } else {
                            "border: 1px solid transparent; background: transparent; padding: 6px 14px; cursor: pointer;"
                        },
                        onclick: move |_| active_tab.set(tab),
                        "{tab.label()}"
                    }
                }
            }

            {match active_tab() {
                Tab::Documents => rsx! { DocumentsPage {} },
                Tab::Equipment => rsx! { EquipmentPage {} },
                Tab::Calibration => rsx! { CalibrationPage {} },
                Tab::Users => rsx! { UsersPage {} },
                Tab::Audits => rsx! { AuditsPage {} },
            }}
        }
    }
}
