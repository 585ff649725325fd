use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use shared_config::AppConfig;

use crate::handlers::{self, BlockedDoctorHandlers};
use crate::services::BlockedDoctorRepository;

pub fn blocked_doctor_routes(
    config: Arc<AppConfig>,
    repository: Arc<dyn BlockedDoctorRepository>,
) -> Router {
    let handlers = Arc::new(BlockedDoctorHandlers::new(config, repository));

    Router::new()
        .route("/", get(handlers::list_blocked_doctors))
        .route("/stats", get(handlers::get_blocked_stats))
        .route("/{doctor_id}/reactivate", post(handlers::reactivate_doctor))
        .with_state(handlers)
}
