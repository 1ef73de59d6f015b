use crate::error::RevGradError;
use crate::ops::arithmetic::{mul_op, pow_op, sub_op};
use crate::tensor::Tensor;

/// Specifies the reduction applied to the squared errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reduction {
    Mean,
    Sum,
}

/// Computes the squared-error loss between prediction and target tensors.
///
/// The loss is assembled entirely from core operations (`sub`, `pow`, `sum`,
/// plus one scalar multiply for the mean), so its gradient falls out of the
/// regular backward sweep with no dedicated rule. Note the gradient also
/// flows into the target tensor, which is harmless for leaf targets.
#[derive(Debug, Clone)]
pub struct MseLoss {
    reduction: Reduction,
}

impl MseLoss {
    pub fn new(reduction: Reduction) -> Self {
        MseLoss { reduction }
    }

    /// Builds the scalar loss node for a prediction/target pair.
    ///
    /// The shapes must match exactly; broadcasting a target against a
    /// prediction is almost always a bug in loss computation.
    pub fn forward(&self, prediction: &Tensor, target: &Tensor) -> Result<Tensor, RevGradError> {
        if prediction.shape() != target.shape() {
            return Err(RevGradError::ShapeMismatch {
                expected: target.shape(),
                actual: prediction.shape(),
                operation: "MseLoss::forward".to_string(),
            });
        }

        let diff = sub_op(prediction, target)?;
        let squared = pow_op(&diff, 2.0)?;
        let total = squared.sum()?;

        match self.reduction {
            Reduction::Sum => Ok(total),
            Reduction::Mean => {
                let numel = prediction.numel();
                if numel == 0 {
                    return Err(RevGradError::InternalError(
                        "cannot take the mean of an empty prediction".to_string(),
                    ));
                }
                let scale = prediction.graph().scalar(1.0 / numel as f32);
                mul_op(&total, &scale)
            }
        }
    }
}

// --- Tests ---

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
