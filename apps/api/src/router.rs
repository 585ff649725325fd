use std::sync::Arc;

use axum::{
    Router,
    routing::get,
};

use behavior_cell::{behavior_routes, BehaviorRepository, InMemoryBehaviorRepository};
use blocked_doctor_cell::{
    blocked_doctor_routes, BlockedDoctorRepository, InMemoryBlockedDoctorRepository,
};
use doctor_cell::{doctor_routes, DoctorRepository, InMemoryDoctorRepository};
use shared_config::AppConfig;

/// Storage handed to each cell's router. Nothing here is process-global.
pub struct Repositories {
    pub doctors: Arc<dyn DoctorRepository>,
    pub behavior: Arc<dyn BehaviorRepository>,
    pub blocked: Arc<dyn BlockedDoctorRepository>,
}

impl Repositories {
    pub fn seeded() -> anyhow::Result<Self> {
        let doctors = InMemoryDoctorRepository::new(doctor_cell::fixtures::doctors())?;
        let behavior = InMemoryBehaviorRepository::new(
            behavior_cell::fixtures::behaviors(),
            behavior_cell::fixtures::trends(),
            behavior_cell::fixtures::appointments(),
        )?;
        let blocked =
            InMemoryBlockedDoctorRepository::new(blocked_doctor_cell::fixtures::blocked_doctors());

        Ok(Self {
            doctors: Arc::new(doctors),
            behavior: Arc::new(behavior),
            blocked: Arc::new(blocked),
        })
    }

    pub fn empty() -> Self {
        Self {
            doctors: Arc::new(InMemoryDoctorRepository::empty()),
            behavior: Arc::new(InMemoryBehaviorRepository::empty()),
            blocked: Arc::new(InMemoryBlockedDoctorRepository::empty()),
        }
    }
}

pub fn create_router(state: Arc<AppConfig>, repositories: Repositories) -> Router {
    Router::new()
        .route("/", get(|| async { "Doctor admin API is running!" }))
        .nest("/doctors", doctor_routes(state.clone(), repositories.doctors))
        .nest("/behavior", behavior_routes(state.clone(), repositories.behavior))
        .nest("/blocked-doctors", blocked_doctor_routes(state, repositories.blocked))
}
