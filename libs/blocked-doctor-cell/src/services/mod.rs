pub mod console;
pub mod registry;
pub mod repository;

pub use console::ReactivationConsole;
pub use registry::BlockedDoctorService;
pub use repository::{BlockedDoctorRepository, InMemoryBlockedDoctorRepository};
