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
    AppointmentStatus, BehaviorError, BehaviorFilter, BehaviorQuery, BehaviorSortKey,
    BehaviorStatus, RiskLevel,
};
use crate::services::{BehaviorMonitoringService, BehaviorRepository};

pub struct BehaviorHandlers {
    monitoring: Arc<BehaviorMonitoringService>,
    config: Arc<AppConfig>,
}

impl BehaviorHandlers {
    pub fn new(config: Arc<AppConfig>, repository: Arc<dyn BehaviorRepository>) -> Self {
        Self {
            monitoring: Arc::new(BehaviorMonitoringService::new(&config, repository)),
            config,
        }
    }
}

impl From<BehaviorError> for AppError {
    fn from(error: BehaviorError) -> Self {
        match error {
            BehaviorError::NotFound(_) => AppError::NotFound(error.to_string()),
            BehaviorError::ValidationError(_) => AppError::ValidationError(error.to_string()),
            BehaviorError::Storage(_) => AppError::Internal(error.to_string()),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BehaviorListQuery {
    pub search: Option<String>,
    pub status: Option<BehaviorStatus>,
    pub risk_level: Option<RiskLevel>,
    pub specialty: Option<String>,
    pub sort: Option<BehaviorSortKey>,
    pub direction: Option<SortDirection>,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

impl BehaviorListQuery {
    fn into_query(self, default_page_size: usize) -> BehaviorQuery {
        let key = self.sort.unwrap_or(BehaviorSortKey::RiskScore);
        let sort = match self.direction {
            Some(direction) => SortSpec::new(key, direction),
            None => SortSpec::with_default_direction(key),
        };

        ListQuery {
            search: self.search.unwrap_or_default(),
            filter: BehaviorFilter {
                status: self.status,
                risk_level: self.risk_level,
                specialty: self.specialty,
            },
            sort,
            page: PageRequest::new(
                self.page.unwrap_or(1),
                self.page_size.unwrap_or(default_page_size),
            ),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct MetricsQuery {
    pub status: Option<AppointmentStatus>,
}

#[axum::debug_handler]
pub async fn list_behaviors(
    State(handlers): State<Arc<BehaviorHandlers>>,
    Query(query): Query<BehaviorListQuery>,
) -> Result<Json<Value>, AppError> {
    let query = query.into_query(handlers.config.default_page_size);
    let page = handlers.monitoring.list(&query).await?;

    Ok(Json(json!(page)))
}

#[axum::debug_handler]
pub async fn get_behavior_summary(
    State(handlers): State<Arc<BehaviorHandlers>>,
) -> Result<Json<Value>, AppError> {
    let summary = handlers.monitoring.summary().await?;

    Ok(Json(json!(summary)))
}

#[axum::debug_handler]
pub async fn get_status_disagreements(
    State(handlers): State<Arc<BehaviorHandlers>>,
) -> Result<Json<Value>, AppError> {
    let disagreements = handlers.monitoring.status_disagreements().await?;

    Ok(Json(json!({
        "disagreements": disagreements,
        "count": disagreements.len()
    })))
}

#[axum::debug_handler]
pub async fn get_behavior_metrics(
    State(handlers): State<Arc<BehaviorHandlers>>,
    Path(doctor_id): Path<Uuid>,
    Query(query): Query<MetricsQuery>,
) -> Result<Json<Value>, AppError> {
    let metrics = handlers.monitoring.metrics(doctor_id, query.status).await?;

    Ok(Json(json!(metrics)))
}
