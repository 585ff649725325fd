use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shared_models::listing::{Acknowledgement, SortDirection};
use shared_utils::listing::{
    compare_text, facet_matches, ListQuery, RecordFilter, Searchable, SortKey,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReasonCategory {
    Behavior,
    Compliance,
    Violation,
    Complaint,
    Other,
}

impl ReasonCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReasonCategory::Behavior => "behavior",
            ReasonCategory::Compliance => "compliance",
            ReasonCategory::Violation => "violation",
            ReasonCategory::Complaint => "complaint",
            ReasonCategory::Other => "other",
        }
    }
}

impl fmt::Display for ReasonCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockedDoctor {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub specialty: String,
    pub hospital: String,
    pub blocked_date: NaiveDate,
    pub blocked_by: String,
    pub reason: String,
    pub reason_category: ReasonCategory,
    pub details: String,
    pub previous_warnings: u32,
    pub can_reactivate: bool,
}

impl Searchable for BlockedDoctor {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.email.as_str(),
            self.specialty.as_str(),
            self.reason.as_str(),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockedFilter {
    pub reason_category: Option<ReasonCategory>,
    pub specialty: Option<String>,
}

impl RecordFilter for BlockedFilter {
    type Record = BlockedDoctor;

    fn matches(&self, doctor: &BlockedDoctor) -> bool {
        self.reason_category
            .map_or(true, |category| doctor.reason_category == category)
            && facet_matches(self.specialty.as_deref(), &doctor.specialty)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockedSortKey {
    Name,
    Specialty,
    BlockedDate,
    BlockedBy,
    ReasonCategory,
    PreviousWarnings,
}

impl SortKey for BlockedSortKey {
    type Record = BlockedDoctor;

    fn compare(&self, a: &BlockedDoctor, b: &BlockedDoctor) -> Ordering {
        match self {
            BlockedSortKey::Name => compare_text(&a.name, &b.name),
            BlockedSortKey::Specialty => compare_text(&a.specialty, &b.specialty),
            BlockedSortKey::BlockedDate => a.blocked_date.cmp(&b.blocked_date),
            BlockedSortKey::BlockedBy => compare_text(&a.blocked_by, &b.blocked_by),
            BlockedSortKey::ReasonCategory => {
                compare_text(a.reason_category.as_str(), b.reason_category.as_str())
            }
            BlockedSortKey::PreviousWarnings => a.previous_warnings.cmp(&b.previous_warnings),
        }
    }

    /// Most recent block first.
    fn default_direction() -> SortDirection {
        SortDirection::Desc
    }
}

pub type BlockedQuery = ListQuery<BlockedFilter, BlockedSortKey>;

/// `total_blocked` always counts the whole collection; the per-category counts follow
/// the active search and filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockedStats {
    pub total_blocked: usize,
    pub behavior: usize,
    pub compliance: usize,
    pub violation: usize,
    pub complaint: usize,
    pub other: usize,
}

impl BlockedStats {
    pub fn compute<'a>(
        total_blocked: usize,
        matching: impl IntoIterator<Item = &'a BlockedDoctor>,
    ) -> Self {
        let mut stats = Self {
            total_blocked,
            ..Self::default()
        };

        for doctor in matching {
            match doctor.reason_category {
                ReasonCategory::Behavior => stats.behavior += 1,
                ReasonCategory::Compliance => stats.compliance += 1,
                ReasonCategory::Violation => stats.violation += 1,
                ReasonCategory::Complaint => stats.complaint += 1,
                ReasonCategory::Other => stats.other += 1,
            }
        }
        stats
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReactivationRequest {
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReactivationResponse {
    pub doctor: BlockedDoctor,
    pub reason: String,
    pub acknowledgement: Acknowledgement,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BlockedDoctorError {
    #[error("Blocked doctor {0} not found")]
    NotFound(Uuid),

    #[error("Doctor {0} cannot be reactivated")]
    NotReactivatable(Uuid),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Blocked doctor storage unavailable: {0}")]
    Storage(String),
}

/// Trims the operator's reason, rejecting blank input.
pub fn normalize_reason(reason: &str) -> Result<String, BlockedDoctorError> {
    let reason = reason.trim();
    if reason.is_empty() {
        return Err(BlockedDoctorError::ValidationError(
            "A reactivation reason is required".to_string(),
        ));
    }
    Ok(reason.to_string())
}
