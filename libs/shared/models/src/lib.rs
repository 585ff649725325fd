pub mod error;
pub mod listing;

pub use error::AppError;
pub use listing::{Acknowledgement, Page, PageRequest, SortDirection};
