// Port Layer - Interfaces for external dependencies

pub mod repository;

// Re-exports
pub use repository::{CreateOrUpdateStatus, Repository};
