use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::entities::audit::Audit;
use crate::domain::entities::document::Document;
use crate::domain::entities::equipment::{CalibrationProgram, Equipment};
use crate::domain::entities::record::{DomainKind, Record};
use crate::domain::entities::user::{Department, User};

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("storage error: {0}")]
    Storage(String),

    #[error("failed to decode {kind} record: {message}")]
    Decode { kind: DomainKind, message: String },

    #[error("{operation} is not supported for {kind}")]
    Unsupported {
        kind: DomainKind,
        operation: BulkOperation,
    },
}

impl RepoError {
    pub fn storage(err: impl fmt::Display) -> Self {
        RepoError::Storage(err.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BulkOperation {
    Approve,
    Reject,
    Archive,
    Delete,
    Export,
}

impl BulkOperation {
    pub fn as_str(self) -> &'static str {
        match self {
            BulkOperation::Approve => "approve",
            BulkOperation::Reject => "reject",
            BulkOperation::Archive => "archive",
            BulkOperation::Delete => "delete",
            BulkOperation::Export => "export",
        }
    }

    /// Whether the operation changes stored records.
    pub fn is_mutation(self) -> bool {
        !matches!(self, BulkOperation::Export)
    }
}

impl fmt::Display for BulkOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Acknowledgement of a bulk request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkAck {
    pub kind: DomainKind,
    pub operation: BulkOperation,
    pub requested: usize,
    /// Records the backend actually touched (or found, for backends that
    /// only acknowledge).
    pub affected: usize,
}

impl fmt::Display for BulkAck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: {} of {} record(s)",
            self.operation, self.kind, self.affected, self.requested
        )
    }
}

/// Source of dashboard records. The mock dataset and the SQLite store both
/// implement it, so list views never depend on where records come from.
pub trait RecordRepository: Send + Sync {
    fn init(&self) -> Result<(), RepoError>;

    fn list_departments(&self) -> Result<Vec<Department>, RepoError>;
    fn list_documents(&self) -> Result<Vec<Document>, RepoError>;
    fn list_equipment(&self) -> Result<Vec<Equipment>, RepoError>;
    fn list_calibration_programs(&self) -> Result<Vec<CalibrationProgram>, RepoError>;
    fn list_users(&self) -> Result<Vec<User>, RepoError>;
    fn list_audits(&self) -> Result<Vec<Audit>, RepoError>;

    fn get_document(&self, id: &str) -> Result<Option<Document>, RepoError>;
    fn get_equipment(&self, id: &str) -> Result<Option<Equipment>, RepoError>;
    fn get_calibration_program(&self, id: &str)
        -> Result<Option<CalibrationProgram>, RepoError>;
    fn get_user(&self, id: &str) -> Result<Option<User>, RepoError>;
    fn get_audit(&self, id: &str) -> Result<Option<Audit>, RepoError>;

    fn bulk_mutate(
        &self,
        kind: DomainKind,
        operation: BulkOperation,
        ids: &[String],
    ) -> Result<BulkAck, RepoError>;
}

/// A record type the repository can list as a whole collection.
pub trait Collection: Record + Clone + Sized {
    fn list_from(repo: &dyn RecordRepository) -> Result<Vec<Self>, RepoError>;

    fn get_from(repo: &dyn RecordRepository, id: &str) -> Result<Option<Self>, RepoError>;
}

impl Collection for Department {
    fn list_from(repo: &dyn RecordRepository) -> Result<Vec<Self>, RepoError> {
        repo.list_departments()
    }

    fn get_from(repo: &dyn RecordRepository, id: &str) -> Result<Option<Self>, RepoError> {
        Ok(repo
            .list_departments()?
            .into_iter()
            .find(|department| department.id == id))
    }
}

impl Collection for Document {
    fn list_from(repo: &dyn RecordRepository) -> Result<Vec<Self>, RepoError> {
        repo.list_documents()
    }

    fn get_from(repo: &dyn RecordRepository, id: &str) -> Result<Option<Self>, RepoError> {
        repo.get_document(id)
    }
}

impl Collection for Equipment {
    fn list_from(repo: &dyn RecordRepository) -> Result<Vec<Self>, RepoError> {
        repo.list_equipment()
    }

    fn get_from(repo: &dyn RecordRepository, id: &str) -> Result<Option<Self>, RepoError> {
        repo.get_equipment(id)
    }
}

impl Collection for CalibrationProgram {
    fn list_from(repo: &dyn RecordRepository) -> Result<Vec<Self>, RepoError> {
        repo.list_calibration_programs()
    }

    fn get_from(repo: &dyn RecordRepository, id: &str) -> Result<Option<Self>, RepoError> {
        repo.get_calibration_program(id)
    }
}

impl Collection for User {
    fn list_from(repo: &dyn RecordRepository) -> Result<Vec<Self>, RepoError> {
        repo.list_users()
    }

    fn get_from(repo: &dyn RecordRepository, id: &str) -> Result<Option<Self>, RepoError> {
        repo.get_user(id)
    }
}

impl Collection for Audit {
    fn list_from(repo: &dyn RecordRepository) -> Result<Vec<Self>, RepoError> {
        repo.list_audits()
    }

    fn get_from(repo: &dyn RecordRepository, id: &str) -> Result<Option<Self>, RepoError> {
        repo.get_audit(id)
    }
}
