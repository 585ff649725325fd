use std::collections::HashMap;

use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use shared_models::listing::Page;
use shared_utils::listing::apply_query;

use crate::models::{
    AppointmentHistory, BehaviorError, BehaviorMetrics, BehaviorQuery, BehaviorTrend,
    DoctorBehavior,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BehaviorRepository: Send + Sync {
    async fn list_behaviors(
        &self,
        query: &BehaviorQuery,
    ) -> Result<Page<DoctorBehavior>, BehaviorError>;

    async fn all_behaviors(&self) -> Result<Vec<DoctorBehavior>, BehaviorError>;

    async fn get_behavior(&self, doctor_id: Uuid) -> Result<DoctorBehavior, BehaviorError>;

    /// Monthly trend plus appointment history, newest appointment first.
    async fn list_behavior_metrics(
        &self,
        doctor_id: Uuid,
    ) -> Result<BehaviorMetrics, BehaviorError>;
}

/// Read-only snapshot; behavior records are produced upstream and never edited here.
#[derive(Debug)]
pub struct InMemoryBehaviorRepository {
    behaviors: Vec<DoctorBehavior>,
    trends: HashMap<Uuid, Vec<BehaviorTrend>>,
    appointments: Vec<AppointmentHistory>,
}

impl InMemoryBehaviorRepository {
    pub fn new(
        behaviors: Vec<DoctorBehavior>,
        trends: HashMap<Uuid, Vec<BehaviorTrend>>,
        appointments: Vec<AppointmentHistory>,
    ) -> Result<Self, BehaviorError> {
        for behavior in &behaviors {
            behavior.validate()?;
        }

        if let Some(orphan) = appointments
            .iter()
            .find(|a| !behaviors.iter().any(|b| b.id == a.doctor_id))
        {
            return Err(BehaviorError::ValidationError(format!(
                "Appointment {} references unmonitored doctor {}",
                orphan.id, orphan.doctor_id
            )));
        }

        Ok(Self {
            behaviors,
            trends,
            appointments,
        })
    }

    pub fn empty() -> Self {
        Self {
            behaviors: Vec::new(),
            trends: HashMap::new(),
            appointments: Vec::new(),
        }
    }
}

#[async_trait]
impl BehaviorRepository for InMemoryBehaviorRepository {
    async fn list_behaviors(
        &self,
        query: &BehaviorQuery,
    ) -> Result<Page<DoctorBehavior>, BehaviorError> {
        Ok(apply_query(&self.behaviors, query))
    }

    async fn all_behaviors(&self) -> Result<Vec<DoctorBehavior>, BehaviorError> {
        Ok(self.behaviors.clone())
    }

    async fn get_behavior(&self, doctor_id: Uuid) -> Result<DoctorBehavior, BehaviorError> {
        self.behaviors
            .iter()
            .find(|b| b.id == doctor_id)
            .cloned()
            .ok_or(BehaviorError::NotFound(doctor_id))
    }

    async fn list_behavior_metrics(
        &self,
        doctor_id: Uuid,
    ) -> Result<BehaviorMetrics, BehaviorError> {
        if !self.behaviors.iter().any(|b| b.id == doctor_id) {
            return Err(BehaviorError::NotFound(doctor_id));
        }

        let mut appointments: Vec<AppointmentHistory> = self
            .appointments
            .iter()
            .filter(|a| a.doctor_id == doctor_id)
            .cloned()
            .collect();
        appointments.sort_by(|a, b| {
            b.date
                .cmp(&a.date)
                .then_with(|| b.scheduled_time.cmp(&a.scheduled_time))
        });

        let trend = self.trends.get(&doctor_id).cloned().unwrap_or_default();
        debug!(
            "Loaded {} trend points and {} appointments for doctor {}",
            trend.len(),
            appointments.len(),
            doctor_id
        );

        Ok(BehaviorMetrics {
            doctor_id,
            trend,
            appointments,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{self, doctor_id};
    use assert_matches::assert_matches;

    fn seeded() -> InMemoryBehaviorRepository {
        InMemoryBehaviorRepository::new(
            fixtures::behaviors(),
            fixtures::trends(),
            fixtures::appointments(),
        )
            .unwrap()
    }

    #[test]
    fn test_rejects_out_of_range_score() {
        let mut behaviors = fixtures::behaviors();
        behaviors[0].risk_score = 101.0;
        assert_matches!(
            InMemoryBehaviorRepository::new(behaviors, HashMap::new(), Vec::new()),
            Err(BehaviorError::ValidationError(_))
        );
    }

    #[test]
    fn test_rejects_orphan_appointment() {
        let mut appointments = fixtures::appointments();
        appointments[0].doctor_id = doctor_id(404);
        assert_matches!(
            InMemoryBehaviorRepository::new(
                fixtures::behaviors(),
                fixtures::trends(),
                appointments,
            ),
            Err(BehaviorError::ValidationError(_))
        );
    }

    #[tokio::test]
    async fn test_metrics_are_scoped_to_doctor_and_newest_first() {
        let repository = seeded();
        let metrics = repository.list_behavior_metrics(doctor_id(12)).await.unwrap();

        assert_eq!(metrics.trend.len(), 6);
        assert!(!metrics.appointments.is_empty());
        assert!(metrics.appointments.iter().all(|a| a.doctor_id == doctor_id(12)));
        assert!(metrics.appointments.windows(2).all(|w| w[0].date >= w[1].date));
    }

    #[test]
    fn test_get_behavior_keeps_stored_status() {
        let repository = seeded();
        let behavior = tokio_test::block_on(repository.get_behavior(doctor_id(10))).unwrap();
        assert_eq!(behavior.name, "Dr. Omar Hassan");
        assert_eq!(behavior.status, crate::models::BehaviorStatus::Warned);
        assert_eq!(behavior.risk_level(), crate::models::RiskLevel::High);
    }

    #[tokio::test]
    async fn test_metrics_for_unmonitored_doctor() {
        let repository = seeded();
        assert_eq!(
            repository.list_behavior_metrics(doctor_id(6)).await,
            Err(BehaviorError::NotFound(doctor_id(6)))
        );
    }
}
