use std::sync::Arc;

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

use crate::domain::entities::document::{Document, DocumentStatus};
use crate::domain::entities::equipment::Equipment;
use crate::domain::entities::record::{DomainKind, Record, TableRow};
use crate::domain::query::{QuerySpec, SortDirection};
use crate::infra::mock::repo::MockRepo;
use crate::infra::sqlite::queries::count_records;
use crate::infra::sqlite::repo::SqliteRepo;
use crate::usecase::ports::repo::{BulkAck, BulkOperation, RecordRepository, RepoError};
use crate::usecase::services::bulk_service::BulkService;
use crate::usecase::services::query_service::QueryService;

fn mock_repo() -> Arc<dyn RecordRepository> {
    Arc::new(MockRepo::embedded().expect("embedded dataset should load"))
}

fn sqlite_repo() -> (TempDir, SqliteRepo) {
    let temp_dir = tempfile::tempdir().expect("should create temp dir");
    let repo = SqliteRepo::new(temp_dir.path().join("nested").join("labqms.sqlite"));
    repo.init().expect("sqlite init should succeed");
    (temp_dir, repo)
}

fn ids(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[test]
fn first_page_of_documents_holds_page_size_items() {
    let service = QueryService::new(mock_repo());

    let result = service
        .query::<Document>(&QuerySpec::new().with_page_size(10))
        .expect("query should succeed");

    assert_eq!(result.items.len(), 10);
    assert_eq!(result.total_count, 12);
    assert_eq!(result.total_pages, 2);
    assert_eq!(result.page_label(), "1 / 2");
}

#[test]
fn draft_filter_returns_only_drafts() {
    let service = QueryService::new(mock_repo());

    let result = service
        .query::<Document>(&QuerySpec::new().with_filter("status", "draft"))
        .expect("query should succeed");

    let found: Vec<&str> = result.items.iter().map(|doc| doc.id()).collect();
    assert_eq!(found, vec!["doc-003", "doc-007", "doc-011"]);
    assert!(result
        .items
        .iter()
        .all(|doc| doc.status == DocumentStatus::Draft));
}

#[test]
fn search_is_case_insensitive() {
    let service = QueryService::new(mock_repo());

    let result = service
        .query::<Document>(&QuerySpec::new().with_search("kalite"))
        .expect("query should succeed");

    assert_eq!(result.total_count, 1);
    assert_eq!(result.items[0].title, "Kalite Politikası");
}

#[test]
fn page_past_the_end_is_empty() {
    let service = QueryService::new(mock_repo());

    let result = service
        .query::<Document>(&QuerySpec::new().with_page_size(10).with_page(4))
        .expect("query should succeed");

    assert!(result.items.is_empty());
    assert_eq!(result.total_count, 12);
    assert_eq!(result.total_pages, 2);
    assert!(!result.has_next());
}

#[test]
fn updated_at_descending_orders_newest_first() {
    let service = QueryService::new(mock_repo());

    let result = service
        .query::<Document>(
            &QuerySpec::new()
                .sorted_by("updated_at", SortDirection::Desc)
                .with_page_size(50),
        )
        .expect("query should succeed");

    assert_eq!(result.items[0].id, "doc-007");
    assert!(result
        .items
        .windows(2)
        .all(|pair| pair[0].updated_at >= pair[1].updated_at));
}

#[test]
fn summary_counts_dashboard_figures() {
    let service = QueryService::new(mock_repo());
    let today = NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date");

    let summary = service.summary(today).expect("summary should succeed");

    assert_eq!(summary.documents_total, 12);
    assert_eq!(
        summary.documents_by_status,
        vec![
            (DocumentStatus::Draft, 3),
            (DocumentStatus::Review, 2),
            (DocumentStatus::Approved, 5),
            (DocumentStatus::Rejected, 1),
            (DocumentStatus::Archived, 1),
        ]
    );
    assert_eq!(summary.equipment_total, 8);
    assert_eq!(summary.calibration_due, 5);
    assert_eq!(summary.overdue_programs, 4);
    assert_eq!(summary.active_users, 6);
    assert_eq!(summary.open_audits, 3);
}

#[test]
fn sqlite_init_seeds_once() {
    let (_temp_dir, repo) = sqlite_repo();
    let seeded = count_records(&repo.db_path).expect("count should succeed");

    repo.init().expect("second init should succeed");

    assert_eq!(count_records(&repo.db_path).expect("count should succeed"), seeded);
    assert_eq!(repo.list_documents().expect("list documents").len(), 12);
    assert_eq!(repo.list_departments().expect("list departments").len(), 4);
}

#[test]
fn sqlite_lists_in_insertion_order() {
    let (_temp_dir, repo) = sqlite_repo();
    let mock = MockRepo::embedded().expect("embedded dataset should load");

    assert_eq!(
        repo.list_equipment().expect("sqlite equipment"),
        mock.list_equipment().expect("mock equipment")
    );
}

#[test]
fn sqlite_approve_updates_document_status() {
    let (_temp_dir, repo) = sqlite_repo();

    let ack = repo
        .bulk_mutate(
            DomainKind::Document,
            BulkOperation::Approve,
            &ids(&["doc-003", "doc-007", "doc-999"]),
        )
        .expect("approve should succeed");

    assert_eq!(
        ack,
        BulkAck {
            kind: DomainKind::Document,
            operation: BulkOperation::Approve,
            requested: 3,
            affected: 2,
        }
    );
    let doc = repo
        .get_document("doc-003")
        .expect("get should succeed")
        .expect("doc-003 should exist");
    assert_eq!(doc.status, DocumentStatus::Approved);

    let service = QueryService::new(Arc::new(repo));
    let drafts = service
        .query::<Document>(&QuerySpec::new().with_filter("status", "draft"))
        .expect("query should succeed");
    assert_eq!(drafts.total_count, 1);
}

#[test]
fn sqlite_delete_hides_records() {
    let (_temp_dir, repo) = sqlite_repo();

    let ack = repo
        .bulk_mutate(DomainKind::Equipment, BulkOperation::Delete, &ids(&["eq-008"]))
        .expect("delete should succeed");

    assert_eq!(ack.affected, 1);
    assert!(repo.get_equipment("eq-008").expect("get should succeed").is_none());
    let remaining = repo.list_equipment().expect("list should succeed");
    assert_eq!(remaining.len(), 7);
    assert!(remaining.iter().all(|eq| eq.id != "eq-008"));

    let again = repo
        .bulk_mutate(DomainKind::Equipment, BulkOperation::Delete, &ids(&["eq-008"]))
        .expect("repeat delete should succeed");
    assert_eq!(again.affected, 0);
}

#[test]
fn sqlite_rejects_status_change_outside_documents() {
    let (_temp_dir, repo) = sqlite_repo();

    let err = repo
        .bulk_mutate(DomainKind::Equipment, BulkOperation::Archive, &ids(&["eq-001"]))
        .expect_err("archive on equipment should fail");

    assert!(matches!(
        err,
        RepoError::Unsupported {
            kind: DomainKind::Equipment,
            operation: BulkOperation::Archive,
        }
    ));
}

#[test]
fn export_writes_selected_rows_as_csv() {
    let temp_dir = tempfile::tempdir().expect("should create temp dir");
    let csv_path = temp_dir.path().join("documents.csv");
    let repo = mock_repo();
    let documents = QueryService::new(repo.clone())
        .list::<Document>()
        .expect("list should succeed");
    let service = BulkService::new(repo);

    let ack = service
        .export(&documents, &ids(&["doc-003", "doc-001"]), &csv_path)
        .expect("export should succeed");

    assert_eq!(ack.operation, BulkOperation::Export);
    assert_eq!(ack.affected, 2);

    let mut reader = csv::Reader::from_path(&csv_path).expect("csv should open");
    let headers: Vec<String> = reader
        .headers()
        .expect("headers should parse")
        .iter()
        .map(str::to_string)
        .collect();
    assert_eq!(headers, Document::columns());

    let codes: Vec<String> = reader
        .records()
        .map(|record| record.expect("row should parse")[0].to_string())
        .collect();
    assert_eq!(codes, vec!["QP-001", "PR-012"]);
}

#[test]
fn export_without_selection_writes_everything() {
    let temp_dir = tempfile::tempdir().expect("should create temp dir");
    let csv_path = temp_dir.path().join("equipment.csv");
    let repo = mock_repo();
    let equipment = QueryService::new(repo.clone())
        .list::<Equipment>()
        .expect("list should succeed");

    let ack = BulkService::new(repo)
        .export(&equipment, &[], &csv_path)
        .expect("export should succeed");

    assert_eq!(ack.requested, 8);
    let rows = csv::Reader::from_path(&csv_path)
        .expect("csv should open")
        .records()
        .count();
    assert_eq!(rows, 8);
}

#[test]
fn ensure_webview_data_dir_creates_subdir() {
    let temp_dir = tempfile::tempdir().expect("should create temp dir");

    let webview_dir =
        crate::ensure_webview_data_dir(temp_dir.path()).expect("webview dir should be created");

    assert_eq!(webview_dir, temp_dir.path().join("webview"));
    assert!(webview_dir.is_dir());
}
