use std::sync::Arc;

use tracing::{debug, instrument, warn};
use uuid::Uuid;

use shared_config::AppConfig;
use shared_models::listing::Page;

use crate::models::{
    AppointmentStatus, BehaviorError, BehaviorMetrics, BehaviorQuery, BehaviorSummary,
    DoctorBehavior, StatusDisagreement,
};
use crate::services::repository::BehaviorRepository;

pub struct BehaviorMonitoringService {
    repository: Arc<dyn BehaviorRepository>,
    max_page_size: usize,
}

impl BehaviorMonitoringService {
    pub fn new(config: &AppConfig, repository: Arc<dyn BehaviorRepository>) -> Self {
        Self {
            repository,
            max_page_size: config.max_page_size,
        }
    }

    #[instrument(skip(self, query), fields(search = %query.search, page = query.page.page))]
    pub async fn list(&self, query: &BehaviorQuery) -> Result<Page<DoctorBehavior>, BehaviorError> {
        if query.page.page_size == 0 || query.page.page_size > self.max_page_size {
            return Err(BehaviorError::ValidationError(format!(
                "Page size must be between 1 and {}",
                self.max_page_size
            )));
        }

        let page = self.repository.list_behaviors(query).await?;
        debug!("Listed {} of {} behavior records", page.items.len(), page.total_count);
        Ok(page)
    }

    pub async fn get(&self, doctor_id: Uuid) -> Result<DoctorBehavior, BehaviorError> {
        self.repository.get_behavior(doctor_id).await
    }

    /// Dashboard cards over every monitored doctor, independent of any filter.
    pub async fn summary(&self) -> Result<BehaviorSummary, BehaviorError> {
        let behaviors = self.repository.all_behaviors().await?;
        Ok(BehaviorSummary::from_behaviors(&behaviors))
    }

    /// `status` narrows the appointment history; the monthly trend is always returned whole.
    #[instrument(skip(self))]
    pub async fn metrics(
        &self,
        doctor_id: Uuid,
        status: Option<AppointmentStatus>,
    ) -> Result<BehaviorMetrics, BehaviorError> {
        let mut metrics = self.repository.list_behavior_metrics(doctor_id).await?;
        if let Some(status) = status {
            metrics.appointments.retain(|a| a.status == status);
        }
        Ok(metrics)
    }

    /// Records whose stored status suggests a different band than their score.
    /// Reported as-is; neither side is rewritten.
    pub async fn status_disagreements(&self) -> Result<Vec<StatusDisagreement>, BehaviorError> {
        let behaviors = self.repository.all_behaviors().await?;

        let disagreements: Vec<StatusDisagreement> = behaviors
            .into_iter()
            .filter(|b| b.status.implied_risk() != b.risk_level())
            .map(|b| StatusDisagreement {
                doctor_id: b.id,
                risk_level: b.risk_level(),
                risk_score: b.risk_score,
                status: b.status,
                name: b.name,
            })
            .collect();

        if !disagreements.is_empty() {
            warn!("{} behavior records disagree with their risk band", disagreements.len());
        }
        Ok(disagreements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{self, doctor_id};
    use crate::models::{BehaviorFilter, BehaviorSortKey, BehaviorStatus, RiskLevel};
    use crate::services::repository::{InMemoryBehaviorRepository, MockBehaviorRepository};
    use assert_matches::assert_matches;
    use shared_models::listing::PageRequest;
    use shared_utils::listing::{ListQuery, SortSpec};

    fn seeded() -> BehaviorMonitoringService {
        let repository = InMemoryBehaviorRepository::new(
            fixtures::behaviors(),
            fixtures::trends(),
            fixtures::appointments(),
        )
        .unwrap();
        BehaviorMonitoringService::new(&AppConfig::default(), Arc::new(repository))
    }

    fn query(page_size: usize) -> BehaviorQuery {
        ListQuery {
            search: String::new(),
            filter: BehaviorFilter::default(),
            sort: SortSpec::with_default_direction(BehaviorSortKey::RiskScore),
            page: PageRequest::new(1, page_size),
        }
    }

    #[tokio::test]
    async fn test_list_rejects_zero_page_size() {
        let service = seeded();
        assert_matches!(service.list(&query(0)).await, Err(BehaviorError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_default_order_is_riskiest_first() {
        let service = seeded();
        let page = service.list(&query(3)).await.unwrap();
        let scores: Vec<f64> = page.items.iter().map(|b| b.risk_score).collect();
        assert_eq!(scores, vec![91.0, 88.0, 72.0]);
    }

    #[tokio::test]
    async fn test_summary_counts() {
        let summary = seeded().summary().await.unwrap();
        assert_eq!(summary.monitored, 9);
        assert_eq!(summary.high_risk, 4);
        assert_eq!(summary.medium_risk, 3);
        assert_eq!(summary.low_risk, 2);
        assert_eq!(summary.flagged, 3);
        assert_eq!(summary.warned, 3);
        assert_eq!(summary.total_delays, 120);
        assert_eq!(summary.total_no_shows, 39);
        assert_eq!(summary.total_complaints, 33);
        assert!((summary.average_rating - 35.2 / 9.0).abs() < 0.01);
    }

    #[tokio::test]
    async fn test_summary_of_empty_snapshot() {
        let service = BehaviorMonitoringService::new(
            &AppConfig::default(),
            Arc::new(InMemoryBehaviorRepository::empty()),
        );
        assert_eq!(service.summary().await.unwrap(), BehaviorSummary::default());
    }

    #[tokio::test]
    async fn test_metrics_filtered_by_appointment_status() {
        let service = seeded();
        let metrics = service
            .metrics(doctor_id(12), Some(AppointmentStatus::Delayed))
            .await
            .unwrap();

        assert_eq!(metrics.appointments.len(), 2);
        assert!(metrics.appointments.iter().all(|a| a.status == AppointmentStatus::Delayed));
        assert_eq!(metrics.trend.len(), 6);
    }

    #[tokio::test]
    async fn test_disagreements_are_reported_not_reconciled() {
        let service = seeded();
        let disagreements = service.status_disagreements().await.unwrap();

        let ids: Vec<Uuid> = disagreements.iter().map(|d| d.doctor_id).collect();
        assert_eq!(ids, vec![doctor_id(5), doctor_id(10)]);
        assert_eq!(disagreements[0].status, BehaviorStatus::Active);
        assert_eq!(disagreements[0].risk_level, RiskLevel::Medium);
        assert_eq!(disagreements[1].risk_level, RiskLevel::High);

        let priya = service.get(doctor_id(5)).await.unwrap();
        assert_eq!(priya.status, BehaviorStatus::Active);
    }

    #[tokio::test]
    async fn test_storage_failure_is_propagated() {
        let mut repository = MockBehaviorRepository::new();
        repository
            .expect_all_behaviors()
            .returning(|| Err(BehaviorError::Storage("snapshot unavailable".to_string())));

        let service = BehaviorMonitoringService::new(&AppConfig::default(), Arc::new(repository));
        assert_matches!(service.summary().await, Err(BehaviorError::Storage(_)));
    }
}
