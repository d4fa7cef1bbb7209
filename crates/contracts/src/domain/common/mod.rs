//! Common types and traits for all settings aggregates

pub mod aggregate_root;
pub mod crud_list;
pub mod entity_metadata;
pub mod entity_ref;
pub mod record_status;
pub mod validation;

// Re-exports
pub use aggregate_root::{AggregateRoot, FormDto};
pub use crud_list::CrudList;
pub use entity_metadata::EntityMetadata;
pub use entity_ref::EntityRef;
pub use record_status::RecordStatus;
pub use validation::ValidationError;
