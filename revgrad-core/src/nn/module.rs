use crate::error::RevGradError;
use crate::nn::Parameter;
use crate::tensor::Tensor;

/// The base trait for all neural network modules (layers, containers, etc.).
///
/// A module composes tensors and operation constructors into a parametrized
/// forward computation. It owns its parameters as leaf tensors and exposes
/// them as a flat set so optimizers can read gradients and apply updates.
pub trait Module: std::fmt::Debug {
    /// Performs a forward pass of the module.
    fn forward(&self, input: &Tensor) -> Result<Tensor, RevGradError>;

    /// Returns the flat set of learnable parameters this module owns,
    /// including those of any sub-modules.
    fn parameters(&self) -> Vec<Parameter>;

    /// Resets the gradient of each owned parameter independently.
    ///
    /// Internal graph nodes created during forward passes are not touched;
    /// they are discarded with their graph between training cycles.
    fn zero_grad(&self) {
        for param in self.parameters() {
            param.zero_grad();
        }
    }
}
