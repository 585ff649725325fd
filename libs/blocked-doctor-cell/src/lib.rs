// =====================================================================================
// BLOCKED DOCTOR CELL
// =====================================================================================
//
// Listing of blocked doctors with per-category statistics and the reactivation flow.
// Reactivation needs a written reason and is refused for records marked
// non-reactivatable.
//
// =====================================================================================

pub mod fixtures;
pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::*;
pub use router::blocked_doctor_routes;
pub use services::{
    BlockedDoctorRepository, BlockedDoctorService, InMemoryBlockedDoctorRepository,
    ReactivationConsole,
};
