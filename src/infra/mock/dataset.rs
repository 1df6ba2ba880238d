use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::domain::entities::audit::Audit;
use crate::domain::entities::document::Document;
use crate::domain::entities::equipment::{CalibrationProgram, Equipment};
use crate::domain::entities::record::Record;
use crate::domain::entities::user::{Department, User};

const EMBEDDED_DATASET: &str = include_str!("dataset.json");

/// The static laboratory dataset shipped with the binary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MockDataset {
    #[serde(default)]
    pub departments: Vec<Department>,
    #[serde(default)]
    pub documents: Vec<Document>,
    #[serde(default)]
    pub equipment: Vec<Equipment>,
    #[serde(default)]
    pub calibration_programs: Vec<CalibrationProgram>,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub audits: Vec<Audit>,
}

impl MockDataset {
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_DATASET).context("failed to parse embedded dataset")
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let dataset = serde_json::from_str(json).context("invalid dataset json")?;
        Ok(dataset)
    }
}

pub fn find_by_id<T: Record + Clone>(records: &[T], id: &str) -> Option<T> {
    records.iter().find(|record| record.id() == id).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_dataset_parses() {
        let dataset = MockDataset::embedded().expect("embedded dataset should parse");

        assert_eq!(dataset.documents.len(), 12);
        assert_eq!(dataset.departments.len(), 4);
        assert!(!dataset.equipment.is_empty());
        assert!(!dataset.calibration_programs.is_empty());
        assert!(!dataset.users.is_empty());
        assert!(!dataset.audits.is_empty());
    }

    #[test]
    fn every_record_references_a_known_department() {
        let dataset = MockDataset::embedded().expect("embedded dataset should parse");
        let known = |id: &str| dataset.departments.iter().any(|dep| dep.id == id);

        assert!(dataset.documents.iter().all(|doc| known(&doc.department_id)));
        assert!(dataset.equipment.iter().all(|eq| known(&eq.department_id)));
        assert!(dataset.users.iter().all(|user| known(&user.department_id)));
        assert!(dataset.audits.iter().all(|audit| known(&audit.department_id)));
    }

    #[test]
    fn missing_collections_default_to_empty() {
        let dataset = MockDataset::from_json("{}").expect("empty object should parse");
        assert_eq!(dataset, MockDataset::default());
    }

    #[test]
    fn find_by_id_returns_clone_or_none() {
        let dataset = MockDataset::embedded().expect("embedded dataset should parse");

        let found = find_by_id(&dataset.documents, "doc-001").expect("doc-001 exists");
        assert_eq!(found.title, "Kalite Politikası");
        assert!(find_by_id(&dataset.documents, "doc-999").is_none());
    }
}
