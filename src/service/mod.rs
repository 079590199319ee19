//! Record access layer and request validation.

mod memory;
mod records;
mod validation;
pub use memory::MemoryStudentStore;
pub use records::{PgStudentStore, StudentStore};
pub use validation::RequestValidator;
