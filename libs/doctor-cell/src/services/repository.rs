use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use shared_models::listing::Page;
use shared_utils::listing::apply_query;

use crate::models::{
    BulkActionFailure, BulkActionKind, BulkActionReport, Doctor, DoctorActionKind, DoctorError,
    DoctorQuery, DoctorStatus,
};

/// Storage behind the doctor listing. Swap implementations to change where records live.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DoctorRepository: Send + Sync {
    /// Idempotent read of one filtered, sorted page.
    async fn list_doctors(&self, query: &DoctorQuery) -> Result<Page<Doctor>, DoctorError>;

    async fn all_doctors(&self) -> Result<Vec<Doctor>, DoctorError>;

    async fn get_doctor(&self, id: Uuid) -> Result<Doctor, DoctorError>;

    /// Returns the record after the action, or `None` once it has been deleted.
    async fn apply_doctor_action(
        &self,
        id: Uuid,
        action: DoctorActionKind,
    ) -> Result<Option<Doctor>, DoctorError>;

    async fn apply_bulk_action(
        &self,
        ids: &[Uuid],
        action: BulkActionKind,
    ) -> Result<BulkActionReport, DoctorError>;
}

#[derive(Debug)]
pub struct InMemoryDoctorRepository {
    doctors: RwLock<Vec<Doctor>>,
}

impl InMemoryDoctorRepository {
    pub fn new(doctors: Vec<Doctor>) -> Result<Self, DoctorError> {
        for doctor in &doctors {
            doctor.validate()?;
        }

        Ok(Self {
            doctors: RwLock::new(doctors),
        })
    }

    pub fn empty() -> Self {
        Self {
            doctors: RwLock::new(Vec::new()),
        }
    }

    fn apply_to(
        doctors: &mut Vec<Doctor>,
        id: Uuid,
        action: DoctorActionKind,
    ) -> Result<Option<Doctor>, DoctorError> {
        let index = doctors
            .iter()
            .position(|d| d.id == id)
            .ok_or(DoctorError::NotFound(id))?;

        match action {
            DoctorActionKind::View | DoctorActionKind::Edit => {}
            DoctorActionKind::Suspend => doctors[index].status = DoctorStatus::Suspended,
            DoctorActionKind::Activate => doctors[index].status = DoctorStatus::Active,
            DoctorActionKind::Delete => {
                let removed = doctors.remove(index);
                info!("Deleted doctor {} ({})", removed.id, removed.name);
                return Ok(None);
            }
        }

        Ok(Some(doctors[index].clone()))
    }
}

#[async_trait]
impl DoctorRepository for InMemoryDoctorRepository {
    async fn list_doctors(&self, query: &DoctorQuery) -> Result<Page<Doctor>, DoctorError> {
        let doctors = self.doctors.read().await;
        Ok(apply_query(&doctors, query))
    }

    async fn all_doctors(&self) -> Result<Vec<Doctor>, DoctorError> {
        Ok(self.doctors.read().await.clone())
    }

    async fn get_doctor(&self, id: Uuid) -> Result<Doctor, DoctorError> {
        let doctors = self.doctors.read().await;
        doctors
            .iter()
            .find(|d| d.id == id)
            .cloned()
            .ok_or(DoctorError::NotFound(id))
    }

    async fn apply_doctor_action(
        &self,
        id: Uuid,
        action: DoctorActionKind,
    ) -> Result<Option<Doctor>, DoctorError> {
        let mut doctors = self.doctors.write().await;
        debug!("Applying {:?} to doctor {}", action, id);
        Self::apply_to(&mut doctors, id, action)
    }

    async fn apply_bulk_action(
        &self,
        ids: &[Uuid],
        action: BulkActionKind,
    ) -> Result<BulkActionReport, DoctorError> {
        let mut doctors = self.doctors.write().await;
        let mut report = BulkActionReport::new(action);

        for id in ids {
            match doctors.iter_mut().find(|d| d.id == *id) {
                Some(doctor) => {
                    if action == BulkActionKind::Suspend {
                        doctor.status = DoctorStatus::Suspended;
                    }
                    report.succeeded.push(*id);
                }
                None => report.failures.push(BulkActionFailure {
                    id: *id,
                    error: DoctorError::NotFound(*id).to_string(),
                }),
            }
        }

        debug!(
            "Bulk {:?}: {} succeeded, {} failed",
            action,
            report.succeeded.len(),
            report.failures.len()
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{doctor_id, doctors};
    use crate::models::{DoctorFilter, DoctorSortKey};
    use shared_models::listing::{PageRequest, SortDirection};
    use shared_utils::listing::{ListQuery, SortSpec};

    fn repository() -> InMemoryDoctorRepository {
        InMemoryDoctorRepository::new(doctors()).unwrap()
    }

    #[tokio::test]
    async fn test_rejects_out_of_range_rating() {
        let mut roster = doctors();
        roster[0].rating = 5.1;
        let result = InMemoryDoctorRepository::new(roster);
        assert!(matches!(result, Err(DoctorError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_list_applies_query() {
        let repo = repository();
        let query = ListQuery {
            search: String::new(),
            filter: DoctorFilter {
                city: Some("Chicago".to_string()),
                ..Default::default()
            },
            sort: SortSpec::new(DoctorSortKey::Rating, SortDirection::Desc),
            page: PageRequest::new(1, 10),
        };
        let page = repo.list_doctors(&query).await.unwrap();
        let names: Vec<&str> = page.items.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Dr. Michael Chen", "Dr. Aisha Mohammed"]);
    }

    #[tokio::test]
    async fn test_suspend_and_activate_are_repeatable() {
        let repo = repository();
        let id = doctor_id(1);

        for _ in 0..2 {
            let doctor = repo
                .apply_doctor_action(id, DoctorActionKind::Suspend)
                .await
                .unwrap()
                .unwrap();
            assert_eq!(doctor.status, DoctorStatus::Suspended);
        }
        let doctor = repo
            .apply_doctor_action(id, DoctorActionKind::Activate)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(doctor.status, DoctorStatus::Active);
    }

    #[tokio::test]
    async fn test_second_delete_is_not_found() {
        let repo = repository();
        let id = doctor_id(2);

        assert_eq!(repo.apply_doctor_action(id, DoctorActionKind::Delete).await.unwrap(), None);
        assert_eq!(
            repo.apply_doctor_action(id, DoctorActionKind::Delete).await,
            Err(DoctorError::NotFound(id))
        );
        assert_eq!(repo.all_doctors().await.unwrap().len(), 11);
    }

    #[tokio::test]
    async fn test_bulk_action_reports_unknown_ids() {
        let repo = repository();
        let missing = doctor_id(404);
        let report = repo
            .apply_bulk_action(&[doctor_id(3), missing], BulkActionKind::Suspend)
            .await
            .unwrap();

        assert_eq!(report.succeeded, vec![doctor_id(3)]);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].id, missing);
        assert!(!report.is_complete());
        assert_eq!(repo.get_doctor(doctor_id(3)).await.unwrap().status, DoctorStatus::Suspended);
    }

    #[tokio::test]
    async fn test_export_does_not_mutate() {
        let repo = repository();
        let before = repo.all_doctors().await.unwrap();
        let report = repo
            .apply_bulk_action(&[doctor_id(1), doctor_id(2)], BulkActionKind::Export)
            .await
            .unwrap();
        assert!(report.is_complete());
        assert_eq!(repo.all_doctors().await.unwrap(), before);
    }
}
