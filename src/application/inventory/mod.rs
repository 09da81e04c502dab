mod checkable_service;
mod errors;
mod library_service;

pub use checkable_service::CheckableService;
pub use errors::{ApplicationError, ErrorKind, Result};
pub use library_service::LibraryService;
