use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shared_models::listing::{Acknowledgement, SortDirection};
use shared_utils::listing::{
    compare_number, compare_text, facet_matches, ListQuery, RecordFilter, Searchable, SortKey,
};

pub const MAX_RATING: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DoctorStatus {
    Active,
    Pending,
    Blocked,
    Suspended,
}

impl DoctorStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DoctorStatus::Active => "active",
            DoctorStatus::Pending => "pending",
            DoctorStatus::Blocked => "blocked",
            DoctorStatus::Suspended => "suspended",
        }
    }
}

impl fmt::Display for DoctorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub license_number: String,
    pub specialty: String,
    pub sub_specialty: String,
    pub city: String,
    pub hospital: String,
    pub status: DoctorStatus,
    pub rating: f64,
    pub total_consults: u32,
    pub joined_date: NaiveDate,
    pub last_active: DateTime<Utc>,
    pub experience_years: u32,
    pub consultation_fee: f64,
    pub is_verified: bool,
}

impl Doctor {
    pub fn validate(&self) -> Result<(), DoctorError> {
        if !(0.0..=MAX_RATING).contains(&self.rating) {
            return Err(DoctorError::ValidationError(format!(
                "Rating {} for doctor {} is outside 0-{}",
                self.rating, self.id, MAX_RATING
            )));
        }
        if self.consultation_fee < 0.0 {
            return Err(DoctorError::ValidationError(format!(
                "Consultation fee for doctor {} cannot be negative",
                self.id
            )));
        }
        Ok(())
    }
}

impl Searchable for Doctor {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.email.as_str(),
            self.hospital.as_str(),
            self.license_number.as_str(),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DoctorFilter {
    pub status: Option<DoctorStatus>,
    pub specialty: Option<String>,
    pub city: Option<String>,
}

impl RecordFilter for DoctorFilter {
    type Record = Doctor;

    fn matches(&self, doctor: &Doctor) -> bool {
        self.status.map_or(true, |status| doctor.status == status)
            && facet_matches(self.specialty.as_deref(), &doctor.specialty)
            && facet_matches(self.city.as_deref(), &doctor.city)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DoctorSortKey {
    Name,
    Email,
    Specialty,
    City,
    Hospital,
    Status,
    Rating,
    TotalConsults,
    Experience,
    ConsultationFee,
    JoinedDate,
    LastActive,
}

impl SortKey for DoctorSortKey {
    type Record = Doctor;

    fn compare(&self, a: &Doctor, b: &Doctor) -> Ordering {
        match self {
            DoctorSortKey::Name => compare_text(&a.name, &b.name),
            DoctorSortKey::Email => compare_text(&a.email, &b.email),
            DoctorSortKey::Specialty => compare_text(&a.specialty, &b.specialty),
            DoctorSortKey::City => compare_text(&a.city, &b.city),
            DoctorSortKey::Hospital => compare_text(&a.hospital, &b.hospital),
            DoctorSortKey::Status => compare_text(a.status.as_str(), b.status.as_str()),
            DoctorSortKey::Rating => compare_number(a.rating, b.rating),
            DoctorSortKey::TotalConsults => a.total_consults.cmp(&b.total_consults),
            DoctorSortKey::Experience => a.experience_years.cmp(&b.experience_years),
            DoctorSortKey::ConsultationFee => {
                compare_number(a.consultation_fee, b.consultation_fee)
            }
            DoctorSortKey::JoinedDate => a.joined_date.cmp(&b.joined_date),
            DoctorSortKey::LastActive => a.last_active.cmp(&b.last_active),
        }
    }

    fn default_direction() -> SortDirection {
        SortDirection::Asc
    }
}

pub type DoctorQuery = ListQuery<DoctorFilter, DoctorSortKey>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DoctorActionKind {
    View,
    Edit,
    Suspend,
    Activate,
    Delete,
}

impl DoctorActionKind {
    /// Every action except delete can be retried without changing the outcome.
    pub fn is_retry_safe(&self) -> bool {
        !matches!(self, DoctorActionKind::Delete)
    }

    pub fn past_tense(&self) -> &'static str {
        match self {
            DoctorActionKind::View => "viewed",
            DoctorActionKind::Edit => "opened for editing",
            DoctorActionKind::Suspend => "suspended",
            DoctorActionKind::Activate => "activated",
            DoctorActionKind::Delete => "deleted",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BulkActionKind {
    Message,
    Export,
    Suspend,
}

impl BulkActionKind {
    pub fn past_tense(&self) -> &'static str {
        match self {
            BulkActionKind::Message => "messaged",
            BulkActionKind::Export => "exported",
            BulkActionKind::Suspend => "suspended",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkActionFailure {
    pub id: Uuid,
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkActionReport {
    pub action: BulkActionKind,
    pub succeeded: Vec<Uuid>,
    pub failures: Vec<BulkActionFailure>,
}

impl BulkActionReport {
    pub fn new(action: BulkActionKind) -> Self {
        Self {
            action,
            succeeded: Vec::new(),
            failures: Vec::new(),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoctorActionRequest {
    pub action: DoctorActionKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkActionRequest {
    pub ids: Vec<Uuid>,
    pub action: BulkActionKind,
}

/// Result of a confirmed row action. `doctor` is the record after the action, absent once deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoctorActionResponse {
    pub doctor_id: Uuid,
    pub action: DoctorActionKind,
    pub doctor: Option<Doctor>,
    pub retry_safe: bool,
    pub acknowledgement: Acknowledgement,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkActionResponse {
    pub report: BulkActionReport,
    pub acknowledgement: Acknowledgement,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DoctorStats {
    pub total: usize,
    pub active: usize,
    pub pending: usize,
    pub blocked: usize,
    pub suspended: usize,
    pub verified: usize,
    pub average_rating: f64,
}

impl DoctorStats {
    pub fn from_doctors(doctors: &[Doctor]) -> Self {
        let count = |status: DoctorStatus| doctors.iter().filter(|d| d.status == status).count();

        let rated: Vec<f64> = doctors.iter().map(|d| d.rating).filter(|r| *r > 0.0).collect();
        let average_rating = if rated.is_empty() {
            0.0
        } else {
            rated.iter().sum::<f64>() / rated.len() as f64
        };

        Self {
            total: doctors.len(),
            active: count(DoctorStatus::Active),
            pending: count(DoctorStatus::Pending),
            blocked: count(DoctorStatus::Blocked),
            suspended: count(DoctorStatus::Suspended),
            verified: doctors.iter().filter(|d| d.is_verified).count(),
            average_rating,
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DoctorError {
    #[error("Doctor {0} not found")]
    NotFound(Uuid),

    #[error("No doctors selected")]
    EmptySelection,

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Doctor storage unavailable: {0}")]
    Storage(String),
}
