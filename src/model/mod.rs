pub mod catalog;
pub mod change;

pub use catalog::{Catalog, ID_FIELD};
pub use change::ChangeRecord;
