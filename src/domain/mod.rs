pub mod checkable;
pub mod library;
pub mod value_objects;
pub mod views;

pub use checkable::*;
pub use library::*;
pub use value_objects::*;
pub use views::*;
