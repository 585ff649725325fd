use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use shared_config::AppConfig;
use shared_models::listing::{Acknowledgement, Page};

use crate::models::{
    BulkActionKind, BulkActionResponse, Doctor, DoctorActionKind, DoctorActionResponse,
    DoctorError, DoctorQuery, DoctorStats,
};
use crate::services::repository::DoctorRepository;

pub struct DoctorDirectoryService {
    repository: Arc<dyn DoctorRepository>,
    max_page_size: usize,
}

impl DoctorDirectoryService {
    pub fn new(config: &AppConfig, repository: Arc<dyn DoctorRepository>) -> Self {
        Self {
            repository,
            max_page_size: config.max_page_size,
        }
    }

    #[instrument(skip(self, query), fields(search = %query.search, page = query.page.page))]
    pub async fn list(&self, query: &DoctorQuery) -> Result<Page<Doctor>, DoctorError> {
        if query.page.page_size == 0 || query.page.page_size > self.max_page_size {
            return Err(DoctorError::ValidationError(format!(
                "Page size must be between 1 and {}",
                self.max_page_size
            )));
        }

        let page = self.repository.list_doctors(query).await?;
        debug!("Listed {} of {} doctors", page.items.len(), page.total_count);
        Ok(page)
    }

    pub async fn get(&self, id: Uuid) -> Result<Doctor, DoctorError> {
        self.repository.get_doctor(id).await
    }

    /// Summary cards, always computed over the full roster.
    pub async fn stats(&self) -> Result<DoctorStats, DoctorError> {
        let doctors = self.repository.all_doctors().await?;
        Ok(DoctorStats::from_doctors(&doctors))
    }

    #[instrument(skip(self))]
    pub async fn apply_action(
        &self,
        id: Uuid,
        action: DoctorActionKind,
    ) -> Result<DoctorActionResponse, DoctorError> {
        let name = self.repository.get_doctor(id).await?.name;
        let doctor = self.repository.apply_doctor_action(id, action).await?;

        info!("Doctor {} {}", id, action.past_tense());

        Ok(DoctorActionResponse {
            doctor_id: id,
            action,
            doctor,
            retry_safe: action.is_retry_safe(),
            acknowledgement: Acknowledgement::new(format!(
                "{} has been {}",
                name,
                action.past_tense()
            )),
        })
    }

    /// Duplicate ids are collapsed, keeping first-seen order.
    #[instrument(skip(self, ids), fields(count = ids.len()))]
    pub async fn apply_bulk_action(
        &self,
        ids: &[Uuid],
        action: BulkActionKind,
    ) -> Result<BulkActionResponse, DoctorError> {
        if ids.is_empty() {
            return Err(DoctorError::EmptySelection);
        }

        let mut seen = HashSet::new();
        let unique: Vec<Uuid> = ids.iter().copied().filter(|id| seen.insert(*id)).collect();

        let report = self.repository.apply_bulk_action(&unique, action).await?;

        if !report.is_complete() {
            warn!(
                "Bulk {:?} partially failed: {} of {} doctors",
                action,
                report.failures.len(),
                unique.len()
            );
        }

        let message = if report.is_complete() {
            format!("{} doctor(s) {}", report.succeeded.len(), action.past_tense())
        } else {
            format!(
                "{} doctor(s) {}, {} failed",
                report.succeeded.len(),
                action.past_tense(),
                report.failures.len()
            )
        };

        Ok(BulkActionResponse {
            report,
            acknowledgement: Acknowledgement::new(message),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{doctor_id, doctors};
    use crate::models::{BulkActionReport, DoctorFilter, DoctorSortKey};
    use crate::services::repository::{InMemoryDoctorRepository, MockDoctorRepository};
    use assert_matches::assert_matches;
    use shared_models::listing::{PageRequest, SortDirection};
    use shared_utils::listing::{ListQuery, SortSpec};

    fn query(page_size: usize) -> DoctorQuery {
        ListQuery {
            search: String::new(),
            filter: DoctorFilter::default(),
            sort: SortSpec::new(DoctorSortKey::Name, SortDirection::Asc),
            page: PageRequest::new(1, page_size),
        }
    }

    fn service_with(repository: Arc<dyn DoctorRepository>) -> DoctorDirectoryService {
        DoctorDirectoryService::new(&AppConfig::default(), repository)
    }

    #[tokio::test]
    async fn test_list_rejects_invalid_page_size() {
        let service = service_with(Arc::new(InMemoryDoctorRepository::empty()));
        assert_matches!(service.list(&query(0)).await, Err(DoctorError::ValidationError(_)));
        assert_matches!(service.list(&query(101)).await, Err(DoctorError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_storage_failure_is_propagated() {
        let mut repository = MockDoctorRepository::new();
        repository
            .expect_list_doctors()
            .returning(|_| Err(DoctorError::Storage("connection reset".to_string())));

        let service = service_with(Arc::new(repository));
        assert_matches!(service.list(&query(10)).await, Err(DoctorError::Storage(_)));
    }

    #[tokio::test]
    async fn test_action_on_unknown_doctor_is_not_found() {
        let mut repository = MockDoctorRepository::new();
        repository
            .expect_get_doctor()
            .returning(|id| Err(DoctorError::NotFound(id)));
        repository.expect_apply_doctor_action().never();

        let service = service_with(Arc::new(repository));
        let id = doctor_id(77);
        assert_eq!(
            service.apply_action(id, DoctorActionKind::Suspend).await,
            Err(DoctorError::NotFound(id))
        );
    }

    #[tokio::test]
    async fn test_action_acknowledgement_names_doctor() {
        let repository = Arc::new(InMemoryDoctorRepository::new(doctors()).unwrap());
        let service = service_with(repository);

        let response = service
            .apply_action(doctor_id(1), DoctorActionKind::Suspend)
            .await
            .unwrap();
        assert_eq!(response.acknowledgement.message, "Dr. Sarah Johnson has been suspended");
        assert!(response.doctor.is_some());
        assert!(response.retry_safe);

        let response = service
            .apply_action(doctor_id(1), DoctorActionKind::Delete)
            .await
            .unwrap();
        assert!(response.doctor.is_none());
        assert!(!response.retry_safe);
    }

    #[tokio::test]
    async fn test_bulk_action_requires_selection() {
        let mut repository = MockDoctorRepository::new();
        repository.expect_apply_bulk_action().never();

        let service = service_with(Arc::new(repository));
        assert_eq!(
            service.apply_bulk_action(&[], BulkActionKind::Message).await,
            Err(DoctorError::EmptySelection)
        );
    }

    #[tokio::test]
    async fn test_bulk_action_deduplicates_ids() {
        let mut repository = MockDoctorRepository::new();
        repository
            .expect_apply_bulk_action()
            .withf(|ids, _| ids.to_vec() == vec![doctor_id(1), doctor_id(2)])
            .returning(|ids, action| {
                let mut report = BulkActionReport::new(action);
                report.succeeded = ids.to_vec();
                Ok(report)
            });

        let service = service_with(Arc::new(repository));
        let response = service
            .apply_bulk_action(&[doctor_id(1), doctor_id(2), doctor_id(1)], BulkActionKind::Export)
            .await
            .unwrap();
        assert_eq!(response.acknowledgement.message, "2 doctor(s) exported");
    }

    #[tokio::test]
    async fn test_stats_cover_full_roster() {
        let service = service_with(Arc::new(InMemoryDoctorRepository::new(doctors()).unwrap()));
        let stats = service.stats().await.unwrap();
        assert_eq!(stats.total, 12);
        assert_eq!(stats.active, 6);
        assert_eq!(stats.pending, 2);
        assert_eq!(stats.blocked, 2);
        assert_eq!(stats.suspended, 2);
        assert_eq!(stats.verified, 10);
    }
}
