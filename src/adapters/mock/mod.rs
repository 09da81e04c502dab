pub mod checkable_repository;
pub mod clock;
pub mod library_repository;

pub use checkable_repository::CheckableRepository;
pub use clock::Clock as FixedClock;
pub use library_repository::LibraryRepository;
