use chrono::NaiveDate;
use personnel_core_types::{RequestId, TraceId};
use thiserror::Error;

use crate::model::{EntityId, EntityKind};

/// Result type alias using PersonnelError
pub type Result<T> = std::result::Result<T, PersonnelError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that outer layers (CLI, a future
/// transport) can translate into their own status conventions without
/// matching on individual domain variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Structural/Validation
    InvalidInput,
    NotFound,
    AlreadyExists,
    MissingOwner,

    // Integration/IO
    Io,
    Serialization,
    Concurrency,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::AlreadyExists => "ERR_ALREADY_EXISTS",
            ExErrorKind::MissingOwner => "ERR_MISSING_OWNER",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Concurrency => "ERR_CONCURRENCY",
        }
    }
}

/// Canonical structured error type
///
/// Carries the classification plus whatever context the failing layer could
/// attach: the operation name, the entity involved and the request it served.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_kind: Option<EntityKind>,
    entity_id: Option<String>,
    request_id: Option<RequestId>,
    trace_id: Option<TraceId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_kind: None,
            entity_id: None,
            request_id: None,
            trace_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity kind context
    pub fn with_entity_kind(mut self, kind: EntityKind) -> Self {
        self.entity_kind = Some(kind);
        self
    }

    /// Add entity ID context
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add trace ID context
    pub fn with_trace_id(mut self, trace_id: TraceId) -> Self {
        self.trace_id = Some(trace_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_kind(&self) -> Option<EntityKind> {
        self.entity_kind
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn trace_id(&self) -> Option<&TraceId> {
        self.trace_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// True when the failure means "nothing with that identity exists"
    pub fn is_not_found(&self) -> bool {
        self.kind == ExErrorKind::NotFound
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(kind) = self.entity_kind {
            write!(f, " (entity_kind: {})", kind)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request_id: {})", request_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain error taxonomy for personnel operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PersonnelError {
    // ===== Structural Errors =====
    /// No entity of this kind has the identity
    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: EntityId },

    /// Identity is already taken within its kind
    #[error("{kind} already exists: {id}")]
    AlreadyExists { kind: EntityKind, id: EntityId },

    /// A child record names an owner that does not exist at creation time
    #[error("Cannot create {kind}: owning {owner_kind} {owner_id} does not exist")]
    MissingOwner {
        kind: EntityKind,
        owner_kind: EntityKind,
        owner_id: EntityId,
    },

    /// Employee already holds a union membership record
    #[error("Employee {employee_id} already has union membership {membership_id}")]
    MembershipAlreadyExists {
        employee_id: EntityId,
        membership_id: EntityId,
    },

    // ===== Validation Errors =====
    /// Termination date precedes hire date
    #[error("Invalid employment period: terminated {termination_date} before hire {hire_date}")]
    InvalidEmploymentPeriod {
        hire_date: NaiveDate,
        termination_date: NaiveDate,
    },

    // ===== Runtime Errors =====
    /// Shared context lock was poisoned by a panicking writer
    #[error("Store context unavailable: {message}")]
    ContextUnavailable { message: String },
}

impl PersonnelError {
    /// Shorthand for the not-found case
    pub fn not_found(kind: EntityKind, id: EntityId) -> Self {
        PersonnelError::NotFound { kind, id }
    }
}

/// Conversion from PersonnelError to ExError
impl From<PersonnelError> for ExError {
    fn from(err: PersonnelError) -> Self {
        match err {
            PersonnelError::NotFound { kind, id } => ExError::new(ExErrorKind::NotFound)
                .with_entity_kind(kind)
                .with_entity_id(id.to_string())
                .with_message(format!("{} not found", kind)),

            PersonnelError::AlreadyExists { kind, id } => {
                ExError::new(ExErrorKind::AlreadyExists)
                    .with_entity_kind(kind)
                    .with_entity_id(id.to_string())
                    .with_message(format!("{} identity already taken", kind))
            }

            PersonnelError::MissingOwner {
                kind,
                owner_kind,
                owner_id,
            } => ExError::new(ExErrorKind::MissingOwner)
                .with_entity_kind(owner_kind)
                .with_entity_id(owner_id.to_string())
                .with_message(format!("Owning {} missing for new {}", owner_kind, kind)),

            PersonnelError::MembershipAlreadyExists {
                employee_id,
                membership_id,
            } => ExError::new(ExErrorKind::AlreadyExists)
                .with_entity_kind(EntityKind::UnionMembership)
                .with_entity_id(membership_id.to_string())
                .with_message(format!(
                    "Employee {} already has a union membership",
                    employee_id
                )),

            e @ PersonnelError::InvalidEmploymentPeriod { .. } => {
                ExError::new(ExErrorKind::InvalidInput).with_message(e.to_string())
            }

            PersonnelError::ContextUnavailable { message } => {
                ExError::new(ExErrorKind::Concurrency).with_message(message)
            }
        }
    }
}
