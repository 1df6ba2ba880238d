use std::path::PathBuf;

use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::domain::entities::audit::Audit;
use crate::domain::entities::document::{Document, DocumentStatus};
use crate::domain::entities::equipment::{CalibrationProgram, Equipment};
use crate::domain::entities::record::{DomainKind, Record};
use crate::domain::entities::user::{Department, User};
use crate::infra::mock::dataset::MockDataset;
use crate::infra::sqlite::queries::{
    count_live, count_records, load_payload, load_payloads, seed_dataset, set_document_status,
    soft_delete_records,
};
use crate::infra::sqlite::schema::init_db;
use crate::usecase::ports::repo::{BulkAck, BulkOperation, RecordRepository, RepoError};

/// Records persisted as JSON rows in a local SQLite file.
///
/// `init` creates the schema and, if the store is empty, seeds it from the
/// embedded dataset.
pub struct SqliteRepo {
    pub db_path: PathBuf,
}

impl SqliteRepo {
    pub fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    fn list<T>(&self) -> Result<Vec<T>, RepoError>
    where
        T: Record + DeserializeOwned,
    {
        load_payloads(&self.db_path, T::KIND)
            .map_err(|err| RepoError::storage(format!("{err:#}")))?
            .iter()
            .map(|payload| decode::<T>(payload))
            .collect()
    }

    fn get<T>(&self, id: &str) -> Result<Option<T>, RepoError>
    where
        T: Record + DeserializeOwned,
    {
        load_payload(&self.db_path, T::KIND, id)
            .map_err(|err| RepoError::storage(format!("{err:#}")))?
            .map(|payload| decode::<T>(&payload))
            .transpose()
    }
}

fn decode<T>(payload: &str) -> Result<T, RepoError>
where
    T: Record + DeserializeOwned,
{
    serde_json::from_str(payload).map_err(|err| RepoError::Decode {
        kind: T::KIND,
        message: err.to_string(),
    })
}

impl RecordRepository for SqliteRepo {
    fn init(&self) -> Result<(), RepoError> {
        init_db(&self.db_path).map_err(|err| RepoError::storage(format!("{err:#}")))?;

        let existing =
            count_records(&self.db_path).map_err(|err| RepoError::storage(format!("{err:#}")))?;
        if existing > 0 {
            info!(db = %self.db_path.display(), records = existing, "sqlite store ready");
            return Ok(());
        }

        let dataset = MockDataset::embedded().map_err(|err| RepoError::storage(format!("{err:#}")))?;
        let inserted = seed_dataset(&self.db_path, &dataset)
            .map_err(|err| RepoError::storage(format!("{err:#}")))?;
        info!(db = %self.db_path.display(), records = inserted, "seeded sqlite store");
        Ok(())
    }

    fn list_departments(&self) -> Result<Vec<Department>, RepoError> {
        self.list()
    }

    fn list_documents(&self) -> Result<Vec<Document>, RepoError> {
        self.list()
    }

    fn list_equipment(&self) -> Result<Vec<Equipment>, RepoError> {
        self.list()
    }

    fn list_calibration_programs(&self) -> Result<Vec<CalibrationProgram>, RepoError> {
        self.list()
    }

    fn list_users(&self) -> Result<Vec<User>, RepoError> {
        self.list()
    }

    fn list_audits(&self) -> Result<Vec<Audit>, RepoError> {
        self.list()
    }

    fn get_document(&self, id: &str) -> Result<Option<Document>, RepoError> {
        self.get(id)
    }

    fn get_equipment(&self, id: &str) -> Result<Option<Equipment>, RepoError> {
        self.get(id)
    }

    fn get_calibration_program(
        &self,
        id: &str,
    ) -> Result<Option<CalibrationProgram>, RepoError> {
        self.get(id)
    }

    fn get_user(&self, id: &str) -> Result<Option<User>, RepoError> {
        self.get(id)
    }

    fn get_audit(&self, id: &str) -> Result<Option<Audit>, RepoError> {
        self.get(id)
    }

    fn bulk_mutate(
        &self,
        kind: DomainKind,
        operation: BulkOperation,
        ids: &[String],
    ) -> Result<BulkAck, RepoError> {
        let status = match operation {
            BulkOperation::Approve => Some(DocumentStatus::Approved),
            BulkOperation::Reject => Some(DocumentStatus::Rejected),
            BulkOperation::Archive => Some(DocumentStatus::Archived),
            BulkOperation::Delete | BulkOperation::Export => None,
        };

        let affected = match (operation, status) {
            (_, Some(status)) => {
                if kind != DomainKind::Document {
                    warn!(%kind, %operation, "status change requested for non-document records");
                    return Err(RepoError::Unsupported { kind, operation });
                }
                set_document_status(&self.db_path, ids, status)
            }
            (BulkOperation::Delete, None) => soft_delete_records(&self.db_path, kind, ids),
            _ => count_live(&self.db_path, kind, ids),
        }
        .map_err(|err| RepoError::storage(format!("{err:#}")))?;

        Ok(BulkAck {
            kind,
            operation,
            requested: ids.len(),
            affected,
        })
    }
}
