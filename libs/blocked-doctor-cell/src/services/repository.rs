use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use shared_models::listing::Page;
use shared_utils::listing::apply_query;

use crate::models::{normalize_reason, BlockedDoctor, BlockedDoctorError, BlockedQuery};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlockedDoctorRepository: Send + Sync {
    async fn list_blocked(
        &self,
        query: &BlockedQuery,
    ) -> Result<Page<BlockedDoctor>, BlockedDoctorError>;

    async fn all_blocked(&self) -> Result<Vec<BlockedDoctor>, BlockedDoctorError>;

    async fn get_blocked(&self, id: Uuid) -> Result<BlockedDoctor, BlockedDoctorError>;

    /// Lifts the block and returns the record as it was. Not retry-safe: a second call
    /// for the same id fails with `NotFound`.
    async fn reactivate(&self, id: Uuid, reason: &str) -> Result<BlockedDoctor, BlockedDoctorError>;
}

#[derive(Debug)]
pub struct InMemoryBlockedDoctorRepository {
    blocked: RwLock<Vec<BlockedDoctor>>,
}

impl InMemoryBlockedDoctorRepository {
    pub fn new(blocked: Vec<BlockedDoctor>) -> Self {
        Self {
            blocked: RwLock::new(blocked),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl BlockedDoctorRepository for InMemoryBlockedDoctorRepository {
    async fn list_blocked(
        &self,
        query: &BlockedQuery,
    ) -> Result<Page<BlockedDoctor>, BlockedDoctorError> {
        let blocked = self.blocked.read().await;
        Ok(apply_query(&blocked, query))
    }

    async fn all_blocked(&self) -> Result<Vec<BlockedDoctor>, BlockedDoctorError> {
        Ok(self.blocked.read().await.clone())
    }

    async fn get_blocked(&self, id: Uuid) -> Result<BlockedDoctor, BlockedDoctorError> {
        let blocked = self.blocked.read().await;
        blocked
            .iter()
            .find(|d| d.id == id)
            .cloned()
            .ok_or(BlockedDoctorError::NotFound(id))
    }

    async fn reactivate(
        &self,
        id: Uuid,
        reason: &str,
    ) -> Result<BlockedDoctor, BlockedDoctorError> {
        let reason = normalize_reason(reason)?;
        let mut blocked = self.blocked.write().await;

        let index = blocked
            .iter()
            .position(|d| d.id == id)
            .ok_or(BlockedDoctorError::NotFound(id))?;

        if !blocked[index].can_reactivate {
            return Err(BlockedDoctorError::NotReactivatable(id));
        }

        let doctor = blocked.remove(index);
        info!("Reactivated doctor {} ({}): {}", doctor.id, doctor.name, reason);
        Ok(doctor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{blocked_doctors, doctor_id};
    use assert_matches::assert_matches;

    #[tokio::test]
    async fn test_reactivate_removes_record() {
        let repository = InMemoryBlockedDoctorRepository::new(blocked_doctors());
        let doctor = repository.reactivate(doctor_id(12), "Appeal approved").await.unwrap();

        assert_eq!(doctor.name, "Dr. Thomas Anderson");
        assert_eq!(repository.all_blocked().await.unwrap().len(), 7);
        assert_eq!(
            repository.reactivate(doctor_id(12), "Appeal approved").await,
            Err(BlockedDoctorError::NotFound(doctor_id(12)))
        );
    }

    #[tokio::test]
    async fn test_non_reactivatable_record_is_kept() {
        let repository = InMemoryBlockedDoctorRepository::new(blocked_doctors());
        assert_matches!(
            repository.reactivate(doctor_id(8), "Served suspension").await,
            Err(BlockedDoctorError::NotReactivatable(_))
        );
        assert!(repository.get_blocked(doctor_id(8)).await.is_ok());
    }

    #[tokio::test]
    async fn test_blank_reason_checked_before_lookup() {
        let repository = InMemoryBlockedDoctorRepository::empty();
        assert_matches!(
            repository.reactivate(doctor_id(404), " \t").await,
            Err(BlockedDoctorError::ValidationError(_))
        );
    }
}
