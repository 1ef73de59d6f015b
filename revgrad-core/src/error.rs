use thiserror::Error;

/// Custom error type for the RevGrad engine.
///
/// Every failure is a deterministic consequence of shape or graph misuse and
/// is surfaced immediately to the caller; the engine performs no retries and
/// no partial-failure recovery.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RevGradError {
    #[error("Cannot broadcast shapes: {shape1:?} and {shape2:?}")]
    BroadcastError {
        shape1: Vec<usize>,
        shape2: Vec<usize>,
    },

    #[error("Incompatible shapes for matrix multiplication: {shape1:?} and {shape2:?}")]
    IncompatibleShapes {
        shape1: Vec<usize>,
        shape2: Vec<usize>,
    },

    #[error("Shape mismatch: expected {expected:?}, got {actual:?} during operation {operation}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
        operation: String,
    },

    #[error("Tensor creation error: data length {data_len} does not match shape {shape:?}")]
    TensorCreationError { data_len: usize, shape: Vec<usize> },

    #[error("Tensors belong to different graphs during operation {operation}")]
    GraphMismatch { operation: String },

    #[error("Gradient of length {grad_len} cannot be applied to parameter of shape {shape:?}")]
    GradientShapeMismatch { grad_len: usize, shape: Vec<usize> },

    #[error("Internal error: {0}")]
    InternalError(String),
}
