pub mod console;
pub mod directory;
pub mod repository;

pub use console::DoctorConsole;
pub use directory::DoctorDirectoryService;
pub use repository::{DoctorRepository, InMemoryDoctorRepository};
