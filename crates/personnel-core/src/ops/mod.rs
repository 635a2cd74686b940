pub mod context;
pub mod department_ops;
pub mod employee_ops;
pub mod relation_ops;
pub mod store;

pub use context::{DanglingDependents, DeleteReport, StoreContext};
pub use store::{Entity, EntityStore};
