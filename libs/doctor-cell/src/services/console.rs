// Single-operator session over the doctor listing: the state a console page keeps
// between clicks, recomputed after every input.

use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use shared_models::listing::Page;
use shared_utils::{Confirmation, ListView, Selection};

use crate::models::{
    BulkActionKind, BulkActionResponse, Doctor, DoctorActionKind, DoctorActionResponse,
    DoctorError, DoctorFilter, DoctorSortKey, DoctorStatus,
};
use crate::services::directory::DoctorDirectoryService;

pub struct DoctorConsole {
    directory: Arc<DoctorDirectoryService>,
    view: ListView<DoctorFilter, DoctorSortKey>,
    selection: Selection<Uuid>,
    confirmation: Confirmation<Doctor, DoctorActionKind>,
    current: Page<Doctor>,
}

impl DoctorConsole {
    pub async fn open(
        directory: Arc<DoctorDirectoryService>,
        page_size: usize,
    ) -> Result<Self, DoctorError> {
        let view = ListView::new(DoctorFilter::default(), DoctorSortKey::Name, page_size);
        let current = directory.list(&view.query()).await?;

        Ok(Self {
            directory,
            view,
            selection: Selection::new(),
            confirmation: Confirmation::Idle,
            current,
        })
    }

    pub fn page(&self) -> &Page<Doctor> {
        &self.current
    }

    pub fn view(&self) -> &ListView<DoctorFilter, DoctorSortKey> {
        &self.view
    }

    pub fn selection(&self) -> &Selection<Uuid> {
        &self.selection
    }

    pub fn confirmation(&self) -> &Confirmation<Doctor, DoctorActionKind> {
        &self.confirmation
    }

    pub fn visible_ids(&self) -> Vec<Uuid> {
        self.current.items.iter().map(|d| d.id).collect()
    }

    /// Re-runs the listing and scopes the selection to what is now on screen.
    pub async fn refresh(&mut self) -> Result<&Page<Doctor>, DoctorError> {
        self.current = self.directory.list(&self.view.query()).await?;
        self.view.go_to_page(self.current.page, self.current.total_count);

        let visible = self.visible_ids();
        self.selection.retain_visible(&visible);

        debug!(
            "Console showing page {} of {} ({} selected)",
            self.current.page,
            self.current.total_pages,
            self.selection.len()
        );
        Ok(&self.current)
    }

    pub async fn set_search(&mut self, search: &str) -> Result<&Page<Doctor>, DoctorError> {
        self.view.set_search(search);
        self.refresh().await
    }

    pub async fn set_status_filter(
        &mut self,
        status: Option<DoctorStatus>,
    ) -> Result<&Page<Doctor>, DoctorError> {
        self.view.update_filter(|filter| filter.status = status);
        self.refresh().await
    }

    pub async fn set_specialty_filter(
        &mut self,
        specialty: Option<String>,
    ) -> Result<&Page<Doctor>, DoctorError> {
        self.view.update_filter(|filter| filter.specialty = specialty);
        self.refresh().await
    }

    pub async fn set_city_filter(
        &mut self,
        city: Option<String>,
    ) -> Result<&Page<Doctor>, DoctorError> {
        self.view.update_filter(|filter| filter.city = city);
        self.refresh().await
    }

    pub async fn sort_by(&mut self, key: DoctorSortKey) -> Result<&Page<Doctor>, DoctorError> {
        self.view.sort_by(key);
        self.refresh().await
    }

    pub async fn set_page_size(&mut self, page_size: usize) -> Result<&Page<Doctor>, DoctorError> {
        self.view.set_page_size(page_size);
        self.refresh().await
    }

    pub async fn go_to_page(&mut self, page: usize) -> Result<&Page<Doctor>, DoctorError> {
        self.view.go_to_page(page, self.current.total_count);
        self.refresh().await
    }

    pub async fn next_page(&mut self) -> Result<&Page<Doctor>, DoctorError> {
        self.view.next_page(self.current.total_count);
        self.refresh().await
    }

    pub async fn previous_page(&mut self) -> Result<&Page<Doctor>, DoctorError> {
        self.view.previous_page();
        self.refresh().await
    }

    /// Rows outside the current page cannot be selected.
    pub fn toggle_select(&mut self, id: Uuid) -> bool {
        if !self.current.items.iter().any(|d| d.id == id) {
            return false;
        }
        self.selection.toggle(id)
    }

    pub fn toggle_select_all(&mut self) {
        let visible = self.visible_ids();
        self.selection.toggle_all(&visible);
    }

    pub fn is_all_selected(&self) -> bool {
        self.selection.is_all_selected(&self.visible_ids())
    }

    pub fn request_action(
        &mut self,
        id: Uuid,
        action: DoctorActionKind,
    ) -> Result<(), DoctorError> {
        let doctor = self
            .current
            .items
            .iter()
            .find(|d| d.id == id)
            .cloned()
            .ok_or(DoctorError::NotFound(id))?;

        self.confirmation.request(doctor, action);
        Ok(())
    }

    pub fn cancel_action(&mut self) {
        self.confirmation.cancel();
    }

    /// Performs the pending action, if any. The pending state is cleared even when the
    /// action fails; filters and selection are left untouched on failure.
    pub async fn confirm_action(&mut self) -> Result<Option<DoctorActionResponse>, DoctorError> {
        let Some((doctor, action)) = self.confirmation.confirm() else {
            return Ok(None);
        };

        let response = self.directory.apply_action(doctor.id, action).await?;
        info!("{}", response.acknowledgement.message);

        self.refresh().await?;
        Ok(Some(response))
    }

    /// Consumes the selection. On failure the selection is kept so the operator can retry.
    pub async fn run_bulk_action(
        &mut self,
        action: BulkActionKind,
    ) -> Result<BulkActionResponse, DoctorError> {
        if self.selection.is_empty() {
            return Err(DoctorError::EmptySelection);
        }

        let ids = self.selection.ids();
        let response = self.directory.apply_bulk_action(&ids, action).await?;
        self.selection.clear();
        info!("{}", response.acknowledgement.message);

        self.refresh().await?;
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{doctor_id, doctors};
    use crate::services::repository::InMemoryDoctorRepository;
    use shared_config::AppConfig;
    use shared_models::listing::SortDirection;

    async fn console(page_size: usize) -> DoctorConsole {
        let repository = Arc::new(InMemoryDoctorRepository::new(doctors()).unwrap());
        let directory = Arc::new(DoctorDirectoryService::new(&AppConfig::default(), repository));
        DoctorConsole::open(directory, page_size).await.unwrap()
    }

    fn ratings(page: &Page<Doctor>) -> Vec<f64> {
        page.items.iter().map(|d| d.rating).collect()
    }

    #[tokio::test]
    async fn test_search_sarah_matches_by_name() {
        let mut console = console(10).await;
        let page = console.set_search("sarah").await.unwrap();
        assert_eq!(page.total_count, 1);
        assert_eq!(page.items[0].name, "Dr. Sarah Johnson");
    }

    #[tokio::test]
    async fn test_rating_header_toggles_direction() {
        let mut console = console(5).await;

        console.sort_by(DoctorSortKey::Rating).await.unwrap();
        assert_eq!(console.view().sort().direction, SortDirection::Asc);

        let page = console.sort_by(DoctorSortKey::Rating).await.unwrap();
        assert_eq!(ratings(page), vec![4.9, 4.8, 4.7, 4.6, 4.5]);

        let page = console.sort_by(DoctorSortKey::Rating).await.unwrap();
        assert_eq!(ratings(page), vec![0.0, 2.9, 3.2, 3.8, 4.2]);
    }

    #[tokio::test]
    async fn test_select_all_then_grow_page_keeps_original_rows_only() {
        let mut console = console(10).await;
        console.toggle_select_all();
        assert_eq!(console.selection().len(), 10);

        console.set_page_size(25).await.unwrap();
        assert_eq!(console.page().items.len(), 12);
        assert_eq!(console.selection().len(), 10);
        assert!(!console.is_all_selected());
    }

    #[tokio::test]
    async fn test_selection_dropped_when_page_changes() {
        let mut console = console(5).await;
        console.toggle_select_all();
        console.next_page().await.unwrap();
        assert!(console.selection().is_empty());
    }

    #[tokio::test]
    async fn test_cannot_select_row_on_other_page() {
        let mut console = console(5).await;
        let off_page = doctor_id(12);
        assert!(!console.visible_ids().contains(&off_page));
        assert!(!console.toggle_select(off_page));
        assert!(console.selection().is_empty());
    }

    #[tokio::test]
    async fn test_confirm_suspend_updates_listing() {
        let mut console = console(25).await;
        let id = doctor_id(1);

        console.request_action(id, DoctorActionKind::Suspend).unwrap();
        assert!(console.confirmation().is_pending());

        let response = console.confirm_action().await.unwrap().unwrap();
        assert_eq!(response.action, DoctorActionKind::Suspend);
        assert!(!console.confirmation().is_pending());

        let sarah = console.page().items.iter().find(|d| d.id == id).unwrap();
        assert_eq!(sarah.status, DoctorStatus::Suspended);

        assert!(console.confirm_action().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_cancel_leaves_record_untouched() {
        let mut console = console(25).await;
        console.request_action(doctor_id(2), DoctorActionKind::Delete).unwrap();
        console.cancel_action();

        assert!(console.confirm_action().await.unwrap().is_none());
        assert_eq!(console.page().total_count, 12);
    }

    #[tokio::test]
    async fn test_bulk_suspend_clears_selection() {
        let mut console = console(10).await;
        console.set_status_filter(Some(DoctorStatus::Pending)).await.unwrap();
        console.toggle_select_all();
        assert_eq!(console.selection().len(), 2);

        let response = console.run_bulk_action(BulkActionKind::Suspend).await.unwrap();
        assert_eq!(response.report.succeeded.len(), 2);
        assert!(console.selection().is_empty());
        assert_eq!(console.page().total_count, 0);
    }

    #[tokio::test]
    async fn test_bulk_action_without_selection_fails() {
        let mut console = console(10).await;
        assert_eq!(
            console.run_bulk_action(BulkActionKind::Message).await,
            Err(DoctorError::EmptySelection)
        );
    }
}
