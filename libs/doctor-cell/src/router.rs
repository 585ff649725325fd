use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use shared_config::AppConfig;

use crate::handlers::{self, DoctorHandlers};
use crate::services::DoctorRepository;

pub fn doctor_routes(config: Arc<AppConfig>, repository: Arc<dyn DoctorRepository>) -> Router {
    let handlers = Arc::new(DoctorHandlers::new(config, repository));

    Router::new()
        .route("/", get(handlers::list_doctors))
        .route("/stats", get(handlers::get_doctor_stats))
        .route("/bulk-actions", post(handlers::apply_bulk_action))
        .route("/{doctor_id}", get(handlers::get_doctor))
        .route("/{doctor_id}/actions", post(handlers::apply_doctor_action))
        .with_state(handlers)
}
