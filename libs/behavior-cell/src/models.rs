// =====================================================================================
// BEHAVIOR CELL MODELS
// =====================================================================================

use std::cmp::Ordering;
use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shared_models::listing::SortDirection;
use shared_utils::listing::{
    compare_number, compare_text, facet_matches, ListQuery, RecordFilter, Searchable, SortKey,
};

pub const HIGH_RISK_THRESHOLD: f64 = 70.0;
pub const MEDIUM_RISK_THRESHOLD: f64 = 40.0;
pub const MAX_RISK_SCORE: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

impl RiskLevel {
    /// `[70, 100]` high, `[40, 70)` medium, below 40 low.
    pub fn from_score(score: f64) -> Self {
        if score >= HIGH_RISK_THRESHOLD {
            RiskLevel::High
        } else if score >= MEDIUM_RISK_THRESHOLD {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::High => "High Risk",
            RiskLevel::Medium => "Medium Risk",
            RiskLevel::Low => "Low Risk",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BehaviorStatus {
    Active,
    Warned,
    Flagged,
}

impl BehaviorStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BehaviorStatus::Active => "active",
            BehaviorStatus::Warned => "warned",
            BehaviorStatus::Flagged => "flagged",
        }
    }

    /// Risk band the stored status would suggest on its own.
    pub fn implied_risk(&self) -> RiskLevel {
        match self {
            BehaviorStatus::Active => RiskLevel::Low,
            BehaviorStatus::Warned => RiskLevel::Medium,
            BehaviorStatus::Flagged => RiskLevel::High,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoctorBehavior {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub specialty: String,
    pub hospital: String,
    pub delayed_appointments: u32,
    pub no_shows: u32,
    pub complaints: u32,
    pub average_rating: f64,
    pub total_appointments: u32,
    pub join_delay_minutes: f64,
    pub consult_duration_minutes: f64,
    pub response_time_minutes: f64,
    pub warnings_issued: u32,
    pub risk_score: f64,
    pub status: BehaviorStatus,
}

impl DoctorBehavior {
    pub fn risk_level(&self) -> RiskLevel {
        RiskLevel::from_score(self.risk_score)
    }

    pub fn validate(&self) -> Result<(), BehaviorError> {
        if !(0.0..=MAX_RISK_SCORE).contains(&self.risk_score) {
            return Err(BehaviorError::ValidationError(format!(
                "Risk score {} for doctor {} is outside 0-100",
                self.risk_score, self.id
            )));
        }
        if !(0.0..=5.0).contains(&self.average_rating) {
            return Err(BehaviorError::ValidationError(format!(
                "Average rating {} for doctor {} is outside 0-5",
                self.average_rating, self.id
            )));
        }
        Ok(())
    }
}

impl Searchable for DoctorBehavior {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str(), self.specialty.as_str()]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BehaviorFilter {
    pub status: Option<BehaviorStatus>,
    /// Matched against the band derived from the score, not the stored status.
    pub risk_level: Option<RiskLevel>,
    pub specialty: Option<String>,
}

impl RecordFilter for BehaviorFilter {
    type Record = DoctorBehavior;

    fn matches(&self, behavior: &DoctorBehavior) -> bool {
        self.status.map_or(true, |status| behavior.status == status)
            && self.risk_level.map_or(true, |level| behavior.risk_level() == level)
            && facet_matches(self.specialty.as_deref(), &behavior.specialty)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BehaviorSortKey {
    Name,
    Specialty,
    RiskScore,
    DelayedAppointments,
    NoShows,
    Complaints,
    AverageRating,
    TotalAppointments,
    JoinDelay,
    ConsultDuration,
    ResponseTime,
    WarningsIssued,
}

impl SortKey for BehaviorSortKey {
    type Record = DoctorBehavior;

    fn compare(&self, a: &DoctorBehavior, b: &DoctorBehavior) -> Ordering {
        match self {
            BehaviorSortKey::Name => compare_text(&a.name, &b.name),
            BehaviorSortKey::Specialty => compare_text(&a.specialty, &b.specialty),
            BehaviorSortKey::RiskScore => compare_number(a.risk_score, b.risk_score),
            BehaviorSortKey::DelayedAppointments => {
                a.delayed_appointments.cmp(&b.delayed_appointments)
            }
            BehaviorSortKey::NoShows => a.no_shows.cmp(&b.no_shows),
            BehaviorSortKey::Complaints => a.complaints.cmp(&b.complaints),
            BehaviorSortKey::AverageRating => compare_number(a.average_rating, b.average_rating),
            BehaviorSortKey::TotalAppointments => a.total_appointments.cmp(&b.total_appointments),
            BehaviorSortKey::JoinDelay => {
                compare_number(a.join_delay_minutes, b.join_delay_minutes)
            }
            BehaviorSortKey::ConsultDuration => {
                compare_number(a.consult_duration_minutes, b.consult_duration_minutes)
            }
            BehaviorSortKey::ResponseTime => {
                compare_number(a.response_time_minutes, b.response_time_minutes)
            }
            BehaviorSortKey::WarningsIssued => a.warnings_issued.cmp(&b.warnings_issued),
        }
    }

    /// Riskiest first.
    fn default_direction() -> SortDirection {
        SortDirection::Desc
    }
}

pub type BehaviorQuery = ListQuery<BehaviorFilter, BehaviorSortKey>;

/// One chart point per calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BehaviorTrend {
    pub month: String,
    pub delays: u32,
    pub no_shows: u32,
    pub rating: f64,
    pub complaints: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Completed,
    NoShow,
    Delayed,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentHistory {
    pub id: Uuid,
    pub doctor_id: Uuid,
    pub date: NaiveDate,
    pub patient_name: String,
    pub scheduled_time: NaiveTime,
    pub joined_time: Option<NaiveTime>,
    pub duration_minutes: u32,
    pub status: AppointmentStatus,
    pub patient_rating: Option<u8>,
    pub feedback: Option<String>,
    pub issues: Vec<String>,
}

impl AppointmentHistory {
    /// Minutes between the scheduled start and the doctor joining; negative when early.
    pub fn join_delay_minutes(&self) -> Option<i64> {
        self.joined_time
            .map(|joined| (joined - self.scheduled_time).num_minutes())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BehaviorMetrics {
    pub doctor_id: Uuid,
    pub trend: Vec<BehaviorTrend>,
    pub appointments: Vec<AppointmentHistory>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BehaviorSummary {
    pub monitored: usize,
    pub high_risk: usize,
    pub medium_risk: usize,
    pub low_risk: usize,
    pub flagged: usize,
    pub warned: usize,
    pub total_delays: u32,
    pub total_no_shows: u32,
    pub total_complaints: u32,
    pub average_rating: f64,
}

impl BehaviorSummary {
    pub fn from_behaviors(behaviors: &[DoctorBehavior]) -> Self {
        let band = |level: RiskLevel| {
            behaviors.iter().filter(|b| b.risk_level() == level).count()
        };
        let status = |status: BehaviorStatus| {
            behaviors.iter().filter(|b| b.status == status).count()
        };

        let average_rating = if behaviors.is_empty() {
            0.0
        } else {
            behaviors.iter().map(|b| b.average_rating).sum::<f64>() / behaviors.len() as f64
        };

        Self {
            monitored: behaviors.len(),
            high_risk: band(RiskLevel::High),
            medium_risk: band(RiskLevel::Medium),
            low_risk: band(RiskLevel::Low),
            flagged: status(BehaviorStatus::Flagged),
            warned: status(BehaviorStatus::Warned),
            total_delays: behaviors.iter().map(|b| b.delayed_appointments).sum(),
            total_no_shows: behaviors.iter().map(|b| b.no_shows).sum(),
            total_complaints: behaviors.iter().map(|b| b.complaints).sum(),
            average_rating,
        }
    }
}

/// A record whose stored status and score-derived band point at different risk levels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusDisagreement {
    pub doctor_id: Uuid,
    pub name: String,
    pub status: BehaviorStatus,
    pub risk_score: f64,
    pub risk_level: RiskLevel,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BehaviorError {
    #[error("No behavior record for doctor {0}")]
    NotFound(Uuid),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Behavior storage unavailable: {0}")]
    Storage(String),
}
