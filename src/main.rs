mod app;
mod config;
mod domain;
mod infra;
mod platform;
mod ui;
mod usecase;

#[cfg(test)]
mod tests;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::app::{App, Services};
use crate::config::{project_dirs, AppConfig, Backend};
use crate::infra::mock::repo::MockRepo;
use crate::infra::sqlite::repo::SqliteRepo;
use crate::usecase::ports::repo::RecordRepository;

/// Overrides `log_filter` from the config when set.
const LOG_ENV: &str = "LABQMS_LOG";

fn main() -> Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;
    init_tracing(&config);

    let repo = build_repository(&config)?;
    let webview_data_dir = default_webview_data_dir()?;
    let window_title = config.window_title.clone();
    let services = Services::new(repo, config);

    info!(title = %window_title, "launching desktop window");
    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(dioxus::desktop::WindowBuilder::new().with_title(window_title))
                .with_data_directory(webview_data_dir),
        )
        .with_context(services)
        .launch(App);

    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    // A subscriber may already be installed when embedded in tests.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

fn build_repository(config: &AppConfig) -> Result<Arc<dyn RecordRepository>> {
    let repo: Arc<dyn RecordRepository> = match config.backend {
        Backend::Mock => Arc::new(MockRepo::embedded()?),
        Backend::Sqlite => {
            let db_path = config.resolved_db_path()?;
            info!(path = %db_path.display(), "using sqlite backend");
            Arc::new(SqliteRepo::new(db_path))
        }
    };
    repo.init().context("failed to initialise record repository")?;
    Ok(repo)
}

fn ensure_webview_data_dir(base_data_dir: &Path) -> Result<PathBuf> {
    let webview_data_dir = base_data_dir.join("webview");
    std::fs::create_dir_all(&webview_data_dir).with_context(|| {
        format!(
            "failed to create webview dir: {}",
            webview_data_dir.display()
        )
    })?;
    Ok(webview_data_dir)
}

fn default_webview_data_dir() -> Result<PathBuf> {
    ensure_webview_data_dir(project_dirs()?.data_local_dir())
}
