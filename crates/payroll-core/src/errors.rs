use rust_decimal::Decimal;
use thiserror::Error;

/// Result type alias using PayrollError
pub type Result<T> = std::result::Result<T, PayrollError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and log correlation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Structural/Validation
    InvalidInput,
    InvalidName,
    InvalidAmount,
    NotFound,

    // Integration/IO
    Io,
    Serialization,
    Persistence,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::InvalidName => "ERR_INVALID_NAME",
            ExErrorKind::InvalidAmount => "ERR_INVALID_AMOUNT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification kind for programmatic handling plus optional
/// context (operation name, entity id, message, cause) for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity ID context, if any
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
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
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Domain error taxonomy for payroll operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PayrollError {
    /// No employee row with the given id
    #[error("No employee found with the given ID.")]
    EmployeeNotFound { employee_id: i64 },

    /// Clock-in targeted an employee who is not paid by the hour
    #[error("Employee {employee_id} is not a part-time employee.")]
    NotPartTime { employee_id: i64 },

    /// Employee name failed validation
    #[error("Invalid name: {reason}")]
    InvalidName { reason: String },

    /// A salary or hourly rate was below zero
    #[error("{field} cannot be negative (got {value})")]
    NegativeAmount { field: String, value: Decimal },

    /// An amount does not fit a DECIMAL(10, 2) column
    #[error("{field} cannot exceed {max} (got {value})")]
    AmountOutOfRange {
        field: String,
        value: Decimal,
        max: Decimal,
    },

    /// Clock-in would push accumulated hours outside the column range
    #[error("Adding {delta} hours would put employee {employee_id} outside the recordable range")]
    HoursOutOfRange { employee_id: i64, delta: Decimal },

    /// Persisted employee_type column holds an unrecognised label
    #[error("Unknown employee type: {value}")]
    UnknownEmployeeType { value: String },
}

impl From<PayrollError> for ExError {
    fn from(err: PayrollError) -> Self {
        let message = err.to_string();
        match err {
            PayrollError::EmployeeNotFound { employee_id } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(employee_id.to_string())
                .with_message(message),
            PayrollError::NotPartTime { employee_id } => ExError::new(ExErrorKind::InvalidInput)
                .with_entity_id(employee_id.to_string())
                .with_message(message),
            PayrollError::InvalidName { .. } => {
                ExError::new(ExErrorKind::InvalidName).with_message(message)
            }
            PayrollError::NegativeAmount { .. } | PayrollError::AmountOutOfRange { .. } => {
                ExError::new(ExErrorKind::InvalidAmount).with_message(message)
            }
            PayrollError::HoursOutOfRange { employee_id, .. } => {
                ExError::new(ExErrorKind::InvalidAmount)
                    .with_entity_id(employee_id.to_string())
                    .with_message(message)
            }
            PayrollError::UnknownEmployeeType { .. } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}
