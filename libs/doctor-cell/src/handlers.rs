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
    BulkActionRequest, DoctorActionRequest, DoctorError, DoctorFilter, DoctorQuery,
    DoctorSortKey, DoctorStatus,
};
use crate::services::{DoctorDirectoryService, DoctorRepository};

pub struct DoctorHandlers {
    directory: Arc<DoctorDirectoryService>,
    config: Arc<AppConfig>,
}

impl DoctorHandlers {
    pub fn new(config: Arc<AppConfig>, repository: Arc<dyn DoctorRepository>) -> Self {
        Self {
            directory: Arc::new(DoctorDirectoryService::new(&config, repository)),
            config,
        }
    }
}

impl From<DoctorError> for AppError {
    fn from(error: DoctorError) -> Self {
        match error {
            DoctorError::NotFound(_) => AppError::NotFound(error.to_string()),
            DoctorError::EmptySelection => AppError::BadRequest(error.to_string()),
            DoctorError::ValidationError(_) => AppError::ValidationError(error.to_string()),
            DoctorError::Storage(_) => AppError::Internal(error.to_string()),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DoctorListQuery {
    pub search: Option<String>,
    pub status: Option<DoctorStatus>,
    pub specialty: Option<String>,
    pub city: Option<String>,
    pub sort: Option<DoctorSortKey>,
    pub direction: Option<SortDirection>,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

impl DoctorListQuery {
    fn into_query(self, default_page_size: usize) -> DoctorQuery {
        let key = self.sort.unwrap_or(DoctorSortKey::Name);
        let sort = match self.direction {
            Some(direction) => SortSpec::new(key, direction),
            None => SortSpec::with_default_direction(key),
        };

        ListQuery {
            search: self.search.unwrap_or_default(),
            filter: DoctorFilter {
                status: self.status,
                specialty: self.specialty,
                city: self.city,
            },
            sort,
            page: PageRequest::new(
                self.page.unwrap_or(1),
                self.page_size.unwrap_or(default_page_size),
            ),
        }
    }
}

#[axum::debug_handler]
pub async fn list_doctors(
    State(handlers): State<Arc<DoctorHandlers>>,
    Query(query): Query<DoctorListQuery>,
) -> Result<Json<Value>, AppError> {
    let query = query.into_query(handlers.config.default_page_size);
    let page = handlers.directory.list(&query).await?;

    Ok(Json(json!(page)))
}

#[axum::debug_handler]
pub async fn get_doctor_stats(
    State(handlers): State<Arc<DoctorHandlers>>,
) -> Result<Json<Value>, AppError> {
    let stats = handlers.directory.stats().await?;

    Ok(Json(json!(stats)))
}

#[axum::debug_handler]
pub async fn get_doctor(
    State(handlers): State<Arc<DoctorHandlers>>,
    Path(doctor_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let doctor = handlers.directory.get(doctor_id).await?;

    Ok(Json(json!(doctor)))
}

#[axum::debug_handler]
pub async fn apply_doctor_action(
    State(handlers): State<Arc<DoctorHandlers>>,
    Path(doctor_id): Path<Uuid>,
    Json(request): Json<DoctorActionRequest>,
) -> Result<Json<Value>, AppError> {
    let response = handlers.directory.apply_action(doctor_id, request.action).await?;

    Ok(Json(json!(response)))
}

#[axum::debug_handler]
pub async fn apply_bulk_action(
    State(handlers): State<Arc<DoctorHandlers>>,
    Json(request): Json<BulkActionRequest>,
) -> Result<Json<Value>, AppError> {
    let response = handlers.directory.apply_bulk_action(&request.ids, request.action).await?;

    Ok(Json(json!(response)))
}
