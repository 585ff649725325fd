use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use shared_config::AppConfig;
use shared_models::error::AppError;
use shared_models::listing::{PageRequest, SortDirection};
use shared_utils::listing::{ListQuery, SortSpec};

use crate::models::{
    BlockedDoctorError, BlockedFilter, BlockedQuery, BlockedSortKey, ReactivationRequest,
    ReasonCategory,
};
use crate::services::{BlockedDoctorRepository, BlockedDoctorService};

pub struct BlockedDoctorHandlers {
    service: Arc<BlockedDoctorService>,
    config: Arc<AppConfig>,
}

impl BlockedDoctorHandlers {
    pub fn new(config: Arc<AppConfig>, repository: Arc<dyn BlockedDoctorRepository>) -> Self {
        Self {
            service: Arc::new(BlockedDoctorService::new(&config, repository)),
            config,
        }
    }
}

impl From<BlockedDoctorError> for AppError {
    fn from(error: BlockedDoctorError) -> Self {
        match error {
            BlockedDoctorError::NotFound(_) => AppError::NotFound(error.to_string()),
            BlockedDoctorError::NotReactivatable(_) => AppError::Conflict(error.to_string()),
            BlockedDoctorError::ValidationError(_) => AppError::ValidationError(error.to_string()),
            BlockedDoctorError::Storage(_) => AppError::Internal(error.to_string()),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BlockedListQuery {
    pub search: Option<String>,
    pub reason_category: Option<ReasonCategory>,
    pub specialty: Option<String>,
    pub sort: Option<BlockedSortKey>,
    pub direction: Option<SortDirection>,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

impl BlockedListQuery {
    fn filter(&self) -> BlockedFilter {
        BlockedFilter {
            reason_category: self.reason_category,
            specialty: self.specialty.clone(),
        }
    }

    fn into_query(self, default_page_size: usize) -> BlockedQuery {
        let key = self.sort.unwrap_or(BlockedSortKey::BlockedDate);
        let sort = match self.direction {
            Some(direction) => SortSpec::new(key, direction),
            None => SortSpec::with_default_direction(key),
        };

        ListQuery {
            filter: self.filter(),
            search: self.search.unwrap_or_default(),
            sort,
            page: PageRequest::new(
                self.page.unwrap_or(1),
                self.page_size.unwrap_or(default_page_size),
            ),
        }
    }
}

#[axum::debug_handler]
pub async fn list_blocked_doctors(
    State(handlers): State<Arc<BlockedDoctorHandlers>>,
    Query(query): Query<BlockedListQuery>,
) -> Result<Json<Value>, AppError> {
    let query = query.into_query(handlers.config.default_page_size);
    let page = handlers.service.list(&query).await?;

    Ok(Json(json!(page)))
}

/// Accepts the listing's search and facet parameters; paging and sort are ignored.
#[axum::debug_handler]
pub async fn get_blocked_stats(
    State(handlers): State<Arc<BlockedDoctorHandlers>>,
    Query(query): Query<BlockedListQuery>,
) -> Result<Json<Value>, AppError> {
    let search = query.search.clone().unwrap_or_default();
    let stats = handlers.service.stats(&search, &query.filter()).await?;

    Ok(Json(json!(stats)))
}

#[axum::debug_handler]
pub async fn reactivate_doctor(
    State(handlers): State<Arc<BlockedDoctorHandlers>>,
    Path(doctor_id): Path<Uuid>,
    Json(request): Json<ReactivationRequest>,
) -> Result<Json<Value>, AppError> {
    let response = handlers.service.reactivate(doctor_id, &request.reason).await?;

    Ok(Json(json!(response)))
}
