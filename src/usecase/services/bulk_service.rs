use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};

use crate::domain::entities::record::{DomainKind, Record, TableRow};
use crate::infra::export::csv::export_csv;
use crate::usecase::ports::repo::{BulkAck, BulkOperation, RecordRepository, RepoError};

pub struct BulkService {
    repo: Arc<dyn RecordRepository>,
}

impl BulkService {
    pub fn new(repo: Arc<dyn RecordRepository>) -> Self {
        Self { repo }
    }

    pub fn apply(
        &self,
        kind: DomainKind,
        operation: BulkOperation,
        ids: &[String],
    ) -> Result<BulkAck, RepoError> {
        match self.repo.bulk_mutate(kind, operation, ids) {
            Ok(ack) => {
                info!(%kind, %operation, requested = ack.requested, affected = ack.affected, "bulk operation applied");
                Ok(ack)
            }
            Err(err) => {
                warn!(%kind, %operation, error = %err, "bulk operation failed");
                Err(err)
            }
        }
    }

    /// Writes the records whose ids are in `ids` to `csv_path`; an empty
    /// selection exports all of `records`.
    pub fn export<T>(&self, records: &[T], ids: &[String], csv_path: &Path) -> Result<BulkAck>
    where
        T: Record + TableRow,
    {
        let selected: Vec<&T> = if ids.is_empty() {
            records.iter().collect()
        } else {
            records
                .iter()
                .filter(|record| ids.iter().any(|id| id == record.id()))
                .collect()
        };

        let written = export_csv(csv_path, selected.iter().copied())?;
        let exported_ids: Vec<String> = selected.iter().map(|record| record.id().to_string()).collect();
        let ack = self.apply(T::KIND, BulkOperation::Export, &exported_ids)?;

        info!(kind = %T::KIND, rows = written, path = %csv_path.display(), "exported csv");
        Ok(ack)
    }
}
