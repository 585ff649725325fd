pub mod monitoring;
pub mod repository;

pub use monitoring::BehaviorMonitoringService;
pub use repository::{BehaviorRepository, InMemoryBehaviorRepository};
