use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::entities::audit::Audit;
use crate::domain::entities::document::Document;
use crate::domain::entities::equipment::{CalibrationProgram, Equipment};
use crate::domain::entities::record::{DomainKind, Record};
use crate::domain::entities::user::{Department, User};
use crate::infra::mock::dataset::{find_by_id, MockDataset};
use crate::usecase::ports::repo::{BulkAck, BulkOperation, RecordRepository, RepoError};

/// Serves the embedded dataset. Reads hand out clones; bulk requests are
/// acknowledged without touching the data.
#[derive(Debug, Clone)]
pub struct MockRepo {
    data: Arc<MockDataset>,
}

impl MockRepo {
    pub fn new(data: MockDataset) -> Self {
        Self {
            data: Arc::new(data),
        }
    }

    pub fn embedded() -> Result<Self, RepoError> {
        MockDataset::embedded()
            .map(Self::new)
            .map_err(|err| RepoError::storage(format!("{err:#}")))
    }

    fn count_known(&self, kind: DomainKind, ids: &[String]) -> usize {
        fn known<T: Record>(records: &[T], ids: &[String]) -> usize {
            ids.iter()
                .filter(|id| records.iter().any(|record| record.id() == id.as_str()))
                .count()
        }

        match kind {
            DomainKind::Department => known(&self.data.departments, ids),
            DomainKind::Document => known(&self.data.documents, ids),
            DomainKind::Equipment => known(&self.data.equipment, ids),
            DomainKind::CalibrationProgram => known(&self.data.calibration_programs, ids),
            DomainKind::User => known(&self.data.users, ids),
            DomainKind::Audit => known(&self.data.audits, ids),
        }
    }
}

impl RecordRepository for MockRepo {
    fn init(&self) -> Result<(), RepoError> {
        info!(
            documents = self.data.documents.len(),
            equipment = self.data.equipment.len(),
            users = self.data.users.len(),
            "mock dataset ready"
        );
        Ok(())
    }

    fn list_departments(&self) -> Result<Vec<Department>, RepoError> {
        Ok(self.data.departments.clone())
    }

    fn list_documents(&self) -> Result<Vec<Document>, RepoError> {
        Ok(self.data.documents.clone())
    }

    fn list_equipment(&self) -> Result<Vec<Equipment>, RepoError> {
        Ok(self.data.equipment.clone())
    }

    fn list_calibration_programs(&self) -> Result<Vec<CalibrationProgram>, RepoError> {
        Ok(self.data.calibration_programs.clone())
    }

    fn list_users(&self) -> Result<Vec<User>, RepoError> {
        Ok(self.data.users.clone())
    }

    fn list_audits(&self) -> Result<Vec<Audit>, RepoError> {
        Ok(self.data.audits.clone())
    }

    fn get_document(&self, id: &str) -> Result<Option<Document>, RepoError> {
        Ok(find_by_id(&self.data.documents, id))
    }

    fn get_equipment(&self, id: &str) -> Result<Option<Equipment>, RepoError> {
        Ok(find_by_id(&self.data.equipment, id))
    }

    fn get_calibration_program(
        &self,
        id: &str,
    ) -> Result<Option<CalibrationProgram>, RepoError> {
        Ok(find_by_id(&self.data.calibration_programs, id))
    }

    fn get_user(&self, id: &str) -> Result<Option<User>, RepoError> {
        Ok(find_by_id(&self.data.users, id))
    }

    fn get_audit(&self, id: &str) -> Result<Option<Audit>, RepoError> {
        Ok(find_by_id(&self.data.audits, id))
    }

    fn bulk_mutate(
        &self,
        kind: DomainKind,
        operation: BulkOperation,
        ids: &[String],
    ) -> Result<BulkAck, RepoError> {
        let affected = self.count_known(kind, ids);
        debug!(%kind, %operation, requested = ids.len(), affected, "mock bulk request acknowledged");
        Ok(BulkAck {
            kind,
            operation,
            requested: ids.len(),
            affected,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bulk_request_leaves_data_untouched() {
        let repo = MockRepo::embedded().expect("embedded repo");
        let before = repo.list_documents().expect("list documents");

        let ack = repo
            .bulk_mutate(
                DomainKind::Document,
                BulkOperation::Archive,
                &["doc-003".to_string(), "doc-404".to_string()],
            )
            .expect("bulk ack");

        assert_eq!(ack.requested, 2);
        assert_eq!(ack.affected, 1);
        assert_eq!(repo.list_documents().expect("list documents"), before);
    }

    #[test]
    fn get_returns_none_for_unknown_id() {
        let repo = MockRepo::embedded().expect("embedded repo");

        assert!(repo.get_user("usr-001").expect("get user").is_some());
        assert!(repo.get_user("usr-999").expect("get user").is_none());
        assert!(repo.get_audit("aud-003").expect("get audit").is_some());
    }
}
