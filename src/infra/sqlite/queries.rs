use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use rusqlite::{params, OptionalExtension};
use serde::Serialize;

use crate::domain::entities::document::DocumentStatus;
use crate::domain::entities::record::{DomainKind, Record};
use crate::infra::mock::dataset::MockDataset;
use crate::infra::sqlite::schema::open_connection;

pub fn count_records(db_path: &Path) -> Result<i64> {
    let conn = open_connection(db_path)?;
    conn.query_row("SELECT COUNT(*) FROM record", [], |row| row.get(0))
        .context("failed to count records")
}

fn insert_records<T>(tx: &rusqlite::Transaction<'_>, records: &[T]) -> Result<usize>
where
    T: Record + Serialize,
{
    let mut insert = tx
        .prepare("INSERT INTO record(kind, id, payload) VALUES (?1, ?2, ?3)")
        .context("failed to prepare record insert")?;

    for record in records {
        let payload = serde_json::to_string(record)
            .with_context(|| format!("failed to encode {} {}", T::KIND, record.id()))?;
        insert
            .execute(params![T::KIND.as_str(), record.id(), payload])
            .with_context(|| format!("failed to insert {} {}", T::KIND, record.id()))?;
    }

    Ok(records.len())
}

/// Loads every collection of `dataset` in one transaction.
pub fn seed_dataset(db_path: &Path, dataset: &MockDataset) -> Result<usize> {
    let mut conn = open_connection(db_path)?;
    let tx = conn.transaction().context("failed to start seed transaction")?;

    let mut inserted = 0;
    inserted += insert_records(&tx, &dataset.departments)?;
    inserted += insert_records(&tx, &dataset.documents)?;
    inserted += insert_records(&tx, &dataset.equipment)?;
    inserted += insert_records(&tx, &dataset.calibration_programs)?;
    inserted += insert_records(&tx, &dataset.users)?;
    inserted += insert_records(&tx, &dataset.audits)?;

    tx.commit().context("failed to commit seed transaction")?;
    Ok(inserted)
}

/// JSON payloads of live records of `kind`, in insertion order.
pub fn load_payloads(db_path: &Path, kind: DomainKind) -> Result<Vec<String>> {
    let conn = open_connection(db_path)?;
    let mut stmt = conn
        .prepare(
            "SELECT payload
             FROM record
             WHERE kind = ?1 AND deleted_at IS NULL
             ORDER BY seq ASC",
        )
        .context("failed to prepare record list query")?;

    let payloads = stmt
        .query_map([kind.as_str()], |row| row.get::<_, String>(0))
        .with_context(|| format!("failed to query {kind} records"))?
        .collect::<rusqlite::Result<Vec<_>>>()
        .with_context(|| format!("failed to collect {kind} records"))?;

    Ok(payloads)
}

pub fn load_payload(db_path: &Path, kind: DomainKind, id: &str) -> Result<Option<String>> {
    let conn = open_connection(db_path)?;
    conn.query_row(
        "SELECT payload FROM record WHERE kind = ?1 AND id = ?2 AND deleted_at IS NULL",
        params![kind.as_str(), id],
        |row| row.get::<_, String>(0),
    )
    .optional()
    .with_context(|| format!("failed to load {kind} {id}"))
}

/// Rewrites the `status` of live documents; returns the number changed.
pub fn set_document_status(db_path: &Path, ids: &[String], status: DocumentStatus) -> Result<usize> {
    let mut conn = open_connection(db_path)?;
    let tx = conn
        .transaction()
        .context("failed to start status transaction")?;

    let now = Local::now().naive_local().format("%Y-%m-%dT%H:%M:%S").to_string();
    let mut changed = 0;
    {
        let mut update = tx
            .prepare(
                "UPDATE record
                 SET payload = json_set(payload, '$.status', ?1, '$.updated_at', ?2),
                     updated_at = datetime('now')
                 WHERE kind = ?3 AND id = ?4 AND deleted_at IS NULL",
            )
            .context("failed to prepare status update")?;

        for id in ids {
            changed += update
                .execute(params![
                    status.as_str(),
                    now,
                    DomainKind::Document.as_str(),
                    id
                ])
                .with_context(|| format!("failed to set status of document {id}"))?;
        }
    }

    tx.commit().context("failed to commit status transaction")?;
    Ok(changed)
}

pub fn soft_delete_records(db_path: &Path, kind: DomainKind, ids: &[String]) -> Result<usize> {
    let mut conn = open_connection(db_path)?;
    let tx = conn
        .transaction()
        .context("failed to start delete transaction")?;

    let mut changed = 0;
    {
        let mut delete = tx
            .prepare(
                "UPDATE record
                 SET deleted_at = datetime('now')
                 WHERE kind = ?1 AND id = ?2 AND deleted_at IS NULL",
            )
            .context("failed to prepare soft delete")?;

        for id in ids {
            changed += delete
                .execute(params![kind.as_str(), id])
                .with_context(|| format!("failed to soft-delete {kind} {id}"))?;
        }
    }

    tx.commit().context("failed to commit delete transaction")?;
    Ok(changed)
}

pub fn count_live(db_path: &Path, kind: DomainKind, ids: &[String]) -> Result<usize> {
    let conn = open_connection(db_path)?;
    let mut stmt = conn
        .prepare("SELECT COUNT(*) FROM record WHERE kind = ?1 AND id = ?2 AND deleted_at IS NULL")
        .context("failed to prepare live count")?;

    let mut found = 0;
    for id in ids {
        let count: i64 = stmt
            .query_row(params![kind.as_str(), id], |row| row.get(0))
            .with_context(|| format!("failed to look up {kind} {id}"))?;
        if count > 0 {
            found += 1;
        }
    }
    Ok(found)
}
