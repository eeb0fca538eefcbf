use thiserror::Error;

/// Rejected drone physics parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpecError {
    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f32 },

    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },

    /// Gravity is a signed acceleration along world Y and must pull down.
    #[error("gravity must be negative (world -Y), got {0}")]
    GravityNotDownward(f32),
}

/// Rejected course layouts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CourseError {
    #[error("course has no checkpoints")]
    Empty,

    #[error("checkpoint {id} has invalid radius {radius}")]
    InvalidRadius { id: String, radius: f32 },

    #[error("checkpoint {id} has a non-finite position")]
    NonFinitePosition { id: String },

    #[error("duplicate checkpoint id {0}")]
    DuplicateId(String),

    #[error("checkpoint {id} is flagged as finish but is not the last checkpoint")]
    FinishNotLast { id: String },

    #[error("course has no finish checkpoint")]
    MissingFinish,
}
