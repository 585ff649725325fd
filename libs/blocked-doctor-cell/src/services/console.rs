// Operator session over the blocked list: listing state, category cards and the
// reactivation dialog with its reason box.

use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use shared_models::listing::Page;
use shared_utils::{Confirmation, ListView};

use crate::models::{
    BlockedDoctor, BlockedDoctorError, BlockedFilter, BlockedSortKey, BlockedStats,
    ReactivationResponse, ReasonCategory,
};
use crate::services::registry::BlockedDoctorService;

/// The only row action on this page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reactivate;

pub struct ReactivationConsole {
    service: Arc<BlockedDoctorService>,
    view: ListView<BlockedFilter, BlockedSortKey>,
    confirmation: Confirmation<BlockedDoctor, Reactivate>,
    reason: String,
    current: Page<BlockedDoctor>,
    stats: BlockedStats,
}

impl ReactivationConsole {
    pub async fn open(
        service: Arc<BlockedDoctorService>,
        page_size: usize,
    ) -> Result<Self, BlockedDoctorError> {
        let view = ListView::new(BlockedFilter::default(), BlockedSortKey::BlockedDate, page_size);
        let current = service.list(&view.query()).await?;
        let stats = service.stats(view.search(), view.filter()).await?;

        Ok(Self {
            service,
            view,
            confirmation: Confirmation::Idle,
            reason: String::new(),
            current,
            stats,
        })
    }

    pub fn page(&self) -> &Page<BlockedDoctor> {
        &self.current
    }

    pub fn stats(&self) -> &BlockedStats {
        &self.stats
    }

    pub fn view(&self) -> &ListView<BlockedFilter, BlockedSortKey> {
        &self.view
    }

    pub fn confirmation(&self) -> &Confirmation<BlockedDoctor, Reactivate> {
        &self.confirmation
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub async fn refresh(&mut self) -> Result<&Page<BlockedDoctor>, BlockedDoctorError> {
        self.current = self.service.list(&self.view.query()).await?;
        self.view.go_to_page(self.current.page, self.current.total_count);
        self.stats = self.service.stats(self.view.search(), self.view.filter()).await?;

        debug!(
            "Blocked list showing {} of {} ({} blocked in total)",
            self.current.items.len(),
            self.current.total_count,
            self.stats.total_blocked
        );
        Ok(&self.current)
    }

    pub async fn set_search(
        &mut self,
        search: &str,
    ) -> Result<&Page<BlockedDoctor>, BlockedDoctorError> {
        self.view.set_search(search);
        self.refresh().await
    }

    pub async fn set_category_filter(
        &mut self,
        category: Option<ReasonCategory>,
    ) -> Result<&Page<BlockedDoctor>, BlockedDoctorError> {
        self.view.update_filter(|filter| filter.reason_category = category);
        self.refresh().await
    }

    pub async fn set_specialty_filter(
        &mut self,
        specialty: Option<String>,
    ) -> Result<&Page<BlockedDoctor>, BlockedDoctorError> {
        self.view.update_filter(|filter| filter.specialty = specialty);
        self.refresh().await
    }

    pub async fn sort_by(
        &mut self,
        key: BlockedSortKey,
    ) -> Result<&Page<BlockedDoctor>, BlockedDoctorError> {
        self.view.sort_by(key);
        self.refresh().await
    }

    pub async fn set_page_size(
        &mut self,
        page_size: usize,
    ) -> Result<&Page<BlockedDoctor>, BlockedDoctorError> {
        self.view.set_page_size(page_size);
        self.refresh().await
    }

    pub async fn go_to_page(
        &mut self,
        page: usize,
    ) -> Result<&Page<BlockedDoctor>, BlockedDoctorError> {
        self.view.go_to_page(page, self.current.total_count);
        self.refresh().await
    }

    pub async fn next_page(&mut self) -> Result<&Page<BlockedDoctor>, BlockedDoctorError> {
        self.view.next_page(self.current.total_count);
        self.refresh().await
    }

    pub async fn previous_page(&mut self) -> Result<&Page<BlockedDoctor>, BlockedDoctorError> {
        self.view.previous_page();
        self.refresh().await
    }

    /// Opens the dialog for a visible, reactivatable row with an empty reason box.
    pub fn request_reactivation(&mut self, id: Uuid) -> Result<(), BlockedDoctorError> {
        let doctor = self
            .current
            .items
            .iter()
            .find(|d| d.id == id)
            .cloned()
            .ok_or(BlockedDoctorError::NotFound(id))?;

        if !doctor.can_reactivate {
            return Err(BlockedDoctorError::NotReactivatable(id));
        }

        self.reason.clear();
        self.confirmation.request(doctor, Reactivate);
        Ok(())
    }

    pub fn set_reason(&mut self, reason: impl Into<String>) {
        self.reason = reason.into();
    }

    /// The confirm control stays disabled until a reason is typed.
    pub fn can_confirm(&self) -> bool {
        self.confirmation.is_pending() && !self.reason.trim().is_empty()
    }

    pub fn cancel(&mut self) {
        self.confirmation.cancel();
        self.reason.clear();
    }

    /// A blank reason leaves the dialog open. Any other outcome closes it.
    pub async fn confirm(&mut self) -> Result<Option<ReactivationResponse>, BlockedDoctorError> {
        if !self.confirmation.is_pending() {
            return Ok(None);
        }
        if !self.can_confirm() {
            return Err(BlockedDoctorError::ValidationError(
                "A reactivation reason is required".to_string(),
            ));
        }

        let Some((doctor, Reactivate)) = self.confirmation.confirm() else {
            return Ok(None);
        };
        let reason = std::mem::take(&mut self.reason);

        let response = self.service.reactivate(doctor.id, &reason).await?;
        info!("{}", response.acknowledgement.message);

        self.refresh().await?;
        Ok(Some(response))
    }
}
