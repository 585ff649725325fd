use std::sync::Arc;

use tracing::{debug, info, instrument};
use uuid::Uuid;

use shared_config::AppConfig;
use shared_models::listing::{Acknowledgement, Page};
use shared_utils::listing::filter_records;

use crate::models::{
    normalize_reason, BlockedDoctor, BlockedDoctorError, BlockedFilter, BlockedQuery,
    BlockedStats, ReactivationResponse,
};
use crate::services::repository::BlockedDoctorRepository;

pub struct BlockedDoctorService {
    repository: Arc<dyn BlockedDoctorRepository>,
    max_page_size: usize,
}

impl BlockedDoctorService {
    pub fn new(config: &AppConfig, repository: Arc<dyn BlockedDoctorRepository>) -> Self {
        Self {
            repository,
            max_page_size: config.max_page_size,
        }
    }

    #[instrument(skip(self, query), fields(search = %query.search, page = query.page.page))]
    pub async fn list(
        &self,
        query: &BlockedQuery,
    ) -> Result<Page<BlockedDoctor>, BlockedDoctorError> {
        if query.page.page_size == 0 || query.page.page_size > self.max_page_size {
            return Err(BlockedDoctorError::ValidationError(format!(
                "Page size must be between 1 and {}",
                self.max_page_size
            )));
        }

        let page = self.repository.list_blocked(query).await?;
        debug!("Listed {} of {} blocked doctors", page.items.len(), page.total_count);
        Ok(page)
    }

    pub async fn get(&self, id: Uuid) -> Result<BlockedDoctor, BlockedDoctorError> {
        self.repository.get_blocked(id).await
    }

    pub async fn stats(
        &self,
        search: &str,
        filter: &BlockedFilter,
    ) -> Result<BlockedStats, BlockedDoctorError> {
        let blocked = self.repository.all_blocked().await?;
        let matching = filter_records(&blocked, search, filter);
        Ok(BlockedStats::compute(blocked.len(), matching))
    }

    #[instrument(skip(self, reason))]
    pub async fn reactivate(
        &self,
        id: Uuid,
        reason: &str,
    ) -> Result<ReactivationResponse, BlockedDoctorError> {
        let reason = normalize_reason(reason)?;
        let doctor = self.repository.reactivate(id, &reason).await?;

        info!("Doctor {} reactivated", id);

        Ok(ReactivationResponse {
            acknowledgement: Acknowledgement::new(format!("{} has been reactivated", doctor.name)),
            doctor,
            reason,
        })
    }
}
