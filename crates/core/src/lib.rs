//! Framework-free domain logic shared by the persistence and HTTP layers.

pub mod error;
pub mod forms;
pub mod pagination;
pub mod types;
