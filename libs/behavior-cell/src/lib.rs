// =====================================================================================
// BEHAVIOR CELL - DOCTOR BEHAVIOR MONITORING
// =====================================================================================
//
// Risk-ranked listing of doctor conduct metrics, dashboard summary cards, monthly
// trends and appointment history per doctor.
//
// =====================================================================================

pub mod fixtures;
pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::{
    AppointmentHistory, AppointmentStatus, BehaviorError, BehaviorFilter, BehaviorMetrics,
    BehaviorQuery, BehaviorSortKey, BehaviorStatus, BehaviorSummary, BehaviorTrend,
    DoctorBehavior, RiskLevel, StatusDisagreement,
};
pub use router::behavior_routes;
pub use services::{BehaviorMonitoringService, BehaviorRepository, InMemoryBehaviorRepository};
