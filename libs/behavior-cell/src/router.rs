use std::sync::Arc;

use axum::{routing::get, Router};

use shared_config::AppConfig;

use crate::handlers::{self, BehaviorHandlers};
use crate::services::BehaviorRepository;

pub fn behavior_routes(config: Arc<AppConfig>, repository: Arc<dyn BehaviorRepository>) -> Router {
    let handlers = Arc::new(BehaviorHandlers::new(config, repository));

    Router::new()
        .route("/", get(handlers::list_behaviors))
        .route("/summary", get(handlers::get_behavior_summary))
        .route("/disagreements", get(handlers::get_status_disagreements))
        .route("/{doctor_id}/metrics", get(handlers::get_behavior_metrics))
        .with_state(handlers)
}
