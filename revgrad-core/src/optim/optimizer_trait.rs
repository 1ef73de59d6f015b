use crate::error::RevGradError;

/// Trait defining the common interface for all optimizers.
///
/// Optimizers consume a module's parameter set, read the gradients a backward
/// pass accumulated, and mutate parameter data accordingly.
pub trait Optimizer {
    /// Performs a single optimization step over all managed parameters.
    fn step(&mut self) -> Result<(), RevGradError>;

    /// Clears the gradients of all managed parameters.
    ///
    /// Typically called after each step so the next backward pass starts
    /// from zeros instead of accumulating onto stale gradients.
    fn zero_grad(&mut self);
}
