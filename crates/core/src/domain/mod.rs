// Domain Layer - Entities and typed column access

pub mod employer;
pub mod entity;
pub mod error;
pub mod field;
pub mod job;

// Re-exports
pub use employer::{Employer, EmployerColumn};
pub use entity::{Column, Entity};
pub use error::DomainError;
pub use field::{ColumnKind, EntityId, FieldValue};
pub use job::{Job, JobColumn};
