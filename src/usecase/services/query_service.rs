use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;

use crate::domain::entities::audit::{Audit, AuditStatus};
use crate::domain::entities::document::{Document, DocumentStatus};
use crate::domain::entities::equipment::{CalibrationProgram, CalibrationStatus, Equipment};
use crate::domain::entities::record::Record;
use crate::domain::entities::user::User;
use crate::domain::query::{query, QueryResult, QuerySpec};
use crate::usecase::ports::repo::{Collection, RecordRepository, RepoError};

/// Equipment whose next calibration is this close counts as due.
pub const CALIBRATION_DUE_DAYS: i64 = 30;

/// Counts shown in the dashboard header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSummary {
    pub documents_total: usize,
    pub documents_by_status: Vec<(DocumentStatus, usize)>,
    pub equipment_total: usize,
    pub calibration_due: usize,
    pub overdue_programs: usize,
    pub active_users: usize,
    pub open_audits: usize,
}

pub struct QueryService {
    repo: Arc<dyn RecordRepository>,
}

impl QueryService {
    pub fn new(repo: Arc<dyn RecordRepository>) -> Self {
        Self { repo }
    }

    pub fn list<T: Collection>(&self) -> Result<Vec<T>, RepoError> {
        let records = T::list_from(self.repo.as_ref())?;
        debug!(kind = %T::KIND, count = records.len(), "listed records");
        Ok(records)
    }

    pub fn get<T: Collection>(&self, id: &str) -> Result<Option<T>, RepoError> {
        let record = T::get_from(self.repo.as_ref(), id)?;
        debug!(kind = %T::KIND, id, found = record.is_some(), "fetched record");
        Ok(record)
    }

    /// Lists the collection and runs `spec` over it in one step.
    pub fn query<T: Collection>(&self, spec: &QuerySpec) -> Result<QueryResult<T>, RepoError> {
        let records = self.list::<T>()?;
        Ok(run_query(&records, spec))
    }

    pub fn summary(&self, today: NaiveDate) -> Result<DashboardSummary, RepoError> {
        let documents = self.list::<Document>()?;
        let equipment = self.list::<Equipment>()?;
        let programs = self.list::<CalibrationProgram>()?;
        let users = self.list::<User>()?;
        let audits = self.list::<Audit>()?;

        let documents_by_status = DocumentStatus::ALL
            .iter()
            .map(|status| {
                let count = documents.iter().filter(|doc| doc.status == *status).count();
                (*status, count)
            })
            .collect();

        Ok(DashboardSummary {
            documents_total: documents.len(),
            documents_by_status,
            equipment_total: equipment.len(),
            calibration_due: equipment
                .iter()
                .filter(|eq| eq.calibration_due_within(today, CALIBRATION_DUE_DAYS))
                .count(),
            overdue_programs: programs
                .iter()
                .filter(|program| is_overdue(program, today))
                .count(),
            active_users: users.iter().filter(|user| user.active).count(),
            open_audits: audits
                .iter()
                .filter(|audit| audit.status != AuditStatus::Completed)
                .count(),
        })
    }
}

/// Marked overdue, or still open with its planned date in the past.
fn is_overdue(program: &CalibrationProgram, today: NaiveDate) -> bool {
    match program.status {
        CalibrationStatus::Overdue => true,
        CalibrationStatus::Completed => false,
        CalibrationStatus::Planned | CalibrationStatus::InProgress => program.planned_date < today,
    }
}

/// Engine call used by list views on every render.
pub fn run_query<T: Record + Clone>(records: &[T], spec: &QuerySpec) -> QueryResult<T> {
    let result = query(records, spec);
    debug!(
        kind = %T::KIND,
        search = %spec.search_term,
        filters = spec.filters.len(),
        ranges = spec.ranges.len(),
        total = result.total_count,
        page = spec.page_index,
        "query evaluated"
    );
    result
}
