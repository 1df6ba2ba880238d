use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::entities::record::{format_date, DomainKind, FieldValue, Record, TableRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentStatus {
    Active,
    Maintenance,
    OutOfService,
    Retired,
}

impl EquipmentStatus {
    pub const ALL: [EquipmentStatus; 4] = [
        EquipmentStatus::Active,
        EquipmentStatus::Maintenance,
        EquipmentStatus::OutOfService,
        EquipmentStatus::Retired,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EquipmentStatus::Active => "active",
            EquipmentStatus::Maintenance => "maintenance",
            EquipmentStatus::OutOfService => "out_of_service",
            EquipmentStatus::Retired => "retired",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EquipmentStatus::Active => "Active",
            EquipmentStatus::Maintenance => "Maintenance",
            EquipmentStatus::OutOfService => "Out of service",
            EquipmentStatus::Retired => "Retired",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub id: String,
    pub code: String,
    pub name: String,
    pub manufacturer: String,
    pub model: String,
    pub serial_number: String,
    pub location: String,
    pub department_id: String,
    pub status: EquipmentStatus,
    pub last_calibration: NaiveDate,
    pub next_calibration: NaiveDate,
    pub purchase_cost: f64,
}

impl Equipment {
    /// Next calibration falls within `days` of `today`, overdue included.
    /// Retired units are never due.
    pub fn calibration_due_within(&self, today: NaiveDate, days: i64) -> bool {
        self.status != EquipmentStatus::Retired
            && (self.next_calibration - today).num_days() <= days
    }
}

impl Record for Equipment {
    const KIND: DomainKind = DomainKind::Equipment;

    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.code.as_str(),
            self.manufacturer.as_str(),
            self.model.as_str(),
            self.serial_number.as_str(),
            self.location.as_str(),
        ]
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        let value = match name {
            "id" => FieldValue::text(&self.id),
            "code" => FieldValue::text(&self.code),
            "name" => FieldValue::text(&self.name),
            "manufacturer" => FieldValue::text(&self.manufacturer),
            "location" => FieldValue::text(&self.location),
            "department_id" => FieldValue::text(&self.department_id),
            "status" => FieldValue::text(self.status.as_str()),
            "last_calibration" => FieldValue::date(self.last_calibration),
            "next_calibration" => FieldValue::date(self.next_calibration),
            "purchase_cost" => FieldValue::Number(self.purchase_cost),
            _ => return None,
        };
        Some(value)
    }
}

impl TableRow for Equipment {
    fn columns() -> &'static [&'static str] {
        &[
            "Code",
            "Name",
            "Manufacturer",
            "Model",
            "Serial",
            "Location",
            "Status",
            "Last calibration",
            "Next calibration",
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.code.clone(),
            self.name.clone(),
            self.manufacturer.clone(),
            self.model.clone(),
            self.serial_number.clone(),
            self.location.clone(),
            self.status.label().to_string(),
            format_date(self.last_calibration),
            format_date(self.next_calibration),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalibrationStatus {
    Planned,
    InProgress,
    Completed,
    Overdue,
}

impl CalibrationStatus {
    pub const ALL: [CalibrationStatus; 4] = [
        CalibrationStatus::Planned,
        CalibrationStatus::InProgress,
        CalibrationStatus::Completed,
        CalibrationStatus::Overdue,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CalibrationStatus::Planned => "planned",
            CalibrationStatus::InProgress => "in_progress",
            CalibrationStatus::Completed => "completed",
            CalibrationStatus::Overdue => "overdue",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CalibrationStatus::Planned => "Planned",
            CalibrationStatus::InProgress => "In progress",
            CalibrationStatus::Completed => "Completed",
            CalibrationStatus::Overdue => "Overdue",
        }
    }
}

/// A scheduled calibration of one piece of equipment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalibrationProgram {
    pub id: String,
    pub code: String,
    pub equipment_id: String,
    pub title: String,
    pub provider: String,
    pub frequency_months: u32,
    pub status: CalibrationStatus,
    pub planned_date: NaiveDate,
    #[serde(default)]
    pub completed_date: Option<NaiveDate>,
    #[serde(default)]
    pub certificate_no: Option<String>,
}

impl Record for CalibrationProgram {
    const KIND: DomainKind = DomainKind::CalibrationProgram;

    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.title.as_str(),
            self.code.as_str(),
            self.equipment_id.as_str(),
            self.provider.as_str(),
        ];
        if let Some(certificate_no) = &self.certificate_no {
            fields.push(certificate_no.as_str());
        }
        fields
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        let value = match name {
            "id" => FieldValue::text(&self.id),
            "code" => FieldValue::text(&self.code),
            "equipment_id" => FieldValue::text(&self.equipment_id),
            "title" => FieldValue::text(&self.title),
            "provider" => FieldValue::text(&self.provider),
            "frequency_months" => FieldValue::Number(f64::from(self.frequency_months)),
            "status" => FieldValue::text(self.status.as_str()),
            "planned_date" => FieldValue::date(self.planned_date),
            "completed_date" => FieldValue::date(self.completed_date?),
            "certificate_no" => FieldValue::text(self.certificate_no.as_deref()?),
            _ => return None,
        };
        Some(value)
    }
}

impl TableRow for CalibrationProgram {
    fn columns() -> &'static [&'static str] {
        &[
            "Code",
            "Title",
            "Equipment",
            "Provider",
            "Every (months)",
            "Status",
            "Planned",
            "Completed",
            "Certificate",
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.code.clone(),
            self.title.clone(),
            self.equipment_id.clone(),
            self.provider.clone(),
            self.frequency_months.to_string(),
            self.status.label().to_string(),
            format_date(self.planned_date),
            self.completed_date.map(format_date).unwrap_or_default(),
            self.certificate_no.clone().unwrap_or_default(),
        ]
    }
}
