use std::fmt;
use std::ops::Deref;

use crate::tensor::Tensor;

/// A wrapper around a [`Tensor`] marking it as a learnable parameter of a
/// module. Parameters are always leaf tensors owned by their module; the
/// optimizer reads their gradients and writes their data between passes.
pub struct Parameter(Tensor);

impl Parameter {
    /// Creates a new Parameter from a leaf tensor.
    pub fn new(tensor: Tensor) -> Self {
        Parameter(tensor)
    }

    /// Consumes the Parameter and returns the underlying Tensor.
    pub fn into_inner(self) -> Tensor {
        self.0
    }
}

// Allow accessing the underlying Tensor immutably via Deref.
impl Deref for Parameter {
    type Target = Tensor;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Debug for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parameter({:?})", self.0)
    }
}

impl Clone for Parameter {
    /// Cloning a Parameter clones the underlying handle; the stored data and
    /// gradient are shared.
    fn clone(&self) -> Self {
        Parameter(self.0.clone())
    }
}
