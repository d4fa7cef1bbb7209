use serde::{de::DeserializeOwned, Serialize};

use super::{RecordStatus, ValidationError};

/// A settings record the console lists and edits
///
/// Every settings record the console edits implements this: instance access
/// to id/name/status plus static metadata describing the REST resource and
/// the UI labels.
pub trait AggregateRoot:
    Clone + std::fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Form/DTO type used for create and update requests
    type Dto: FormDto;

    // ============================================================================
    // Per record
    // ============================================================================

    /// Server id (`_id`)
    fn id(&self) -> &str;

    /// Human readable name of the record (used in confirms and toasts)
    fn description(&self) -> String;

    fn status(&self) -> RecordStatus;

    /// Build the edit form from a loaded record
    fn to_dto(&self) -> Self::Dto;

    /// Text the list search matches against (lowercased by the caller)
    fn search_text(&self) -> String {
        self.description()
    }

    // ============================================================================
    // Per collection
    // ============================================================================

    /// Index used in keys and page ids (e.g. "a001")
    fn aggregate_index() -> &'static str;

    /// Collection name (e.g. "installer")
    fn collection_name() -> &'static str;

    /// REST collection path relative to the API base (e.g. "/installer/installers")
    fn resource_path() -> &'static str;

    /// Singular UI name
    fn element_name() -> &'static str;

    /// Plural UI name
    fn list_name() -> &'static str;

    // ============================================================================
    // Derived
    // ============================================================================

    /// "a001_installer"; doubles as the tab key
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }

    /// Path of a single record
    fn item_path(id: &str) -> String {
        format!("{}/{}", Self::resource_path(), id)
    }
}

/// Create/update form bound to a details view.
pub trait FormDto:
    Clone + Default + std::fmt::Debug + Serialize + PartialEq + Send + Sync + 'static
{
    /// `Some` when editing an existing record
    fn id(&self) -> Option<&str>;

    /// Required-field and range checks, run before any request is sent
    fn validate(&self) -> Result<(), ValidationError>;

    fn status(&self) -> RecordStatus;

    fn set_status(&mut self, status: RecordStatus);

    fn is_edit_mode(&self) -> bool {
        self.id().is_some()
    }
}
