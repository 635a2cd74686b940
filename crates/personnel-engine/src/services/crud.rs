use personnel_core::model::EntityId;
use personnel_core::DeleteReport;
use personnel_core_types::RequestContext;
use personnel_store::errors::Result;

/// Create/read/list/update/delete over one record kind
///
/// Reads report absence as `None`. Update and delete report absence as a
/// `NotFound` error and leave the store untouched.
pub trait CrudService {
    /// Read shape, with derived counts
    type Dto;

    /// Create/update shape, without identity or relationships
    type Input;

    /// # Errors
    /// `Concurrency` if the shared context is unavailable
    fn create(&self, request: &RequestContext, input: Self::Input) -> Result<EntityId>;

    /// # Errors
    /// `Concurrency` if the shared context is unavailable
    fn get(&self, request: &RequestContext, id: EntityId) -> Result<Option<Self::Dto>>;

    /// # Errors
    /// `Concurrency` if the shared context is unavailable
    fn list(&self, request: &RequestContext) -> Result<Vec<Self::Dto>>;

    /// Replace the record, keeping its relationship collections
    ///
    /// # Errors
    /// `NotFound` if no record has identity `id`
    fn update(&self, request: &RequestContext, id: EntityId, input: Self::Input) -> Result<()>;

    /// Remove the record without cascading
    ///
    /// # Errors
    /// `NotFound` if no record has identity `id`
    fn delete(&self, request: &RequestContext, id: EntityId) -> Result<DeleteReport>;
}
