use thiserror::Error;

use crate::error::RevGradError;
use crate::graph::Graph;
use crate::tensor::Tensor;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}, element {element_index}: analytical {analytical_grad} != numerical {numerical_grad} (difference {difference})")]
    GradientMismatch {
        input_index: usize,
        element_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(RevGradError),

    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(RevGradError),

    #[error("Gradient check requires a scalar output, got shape {0:?}")]
    NonScalarOutput(Vec<usize>),

    #[error("Numerical gradient is NaN or infinite for input {input_index}, element {element_index}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        element_index: usize,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}, element {element_index}")]
    AnalyticalGradNaNOrInfinite {
        input_index: usize,
        element_index: usize,
    },

    #[error("Tensor error during gradient check: {0}")]
    TensorError(RevGradError),
}

impl From<RevGradError> for GradCheckError {
    fn from(err: RevGradError) -> Self {
        GradCheckError::TensorError(err)
    }
}

/// Checks analytical gradients against central finite differences.
///
/// `func` must build a scalar-valued computation from the given leaf tensors.
/// It is invoked once on a fresh graph for the analytic pass, and then twice
/// per input element on further fresh graphs for the `f(x + eps)` and
/// `f(x - eps)` evaluations, so the closure must be a pure function of the
/// leaf values.
///
/// Differences are accumulated in `f64` and compared with an absolute check
/// first, falling back to a relative check for large gradients.
pub fn check_grad<F>(
    func: F,
    inputs: &[(Vec<f32>, Vec<usize>)],
    epsilon: f32,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&Graph, &[Tensor]) -> Result<Tensor, RevGradError>,
{
    // --- Analytic pass ---
    let graph = Graph::new();
    let tensors = build_leaves(&graph, inputs)?;
    let output = func(&graph, &tensors).map_err(GradCheckError::ForwardPassError)?;
    if output.numel() != 1 {
        return Err(GradCheckError::NonScalarOutput(output.shape()));
    }
    output.backward().map_err(GradCheckError::BackwardPassError)?;
    let analytical_grads: Vec<Vec<f32>> = tensors.iter().map(|t| t.grad()).collect();

    // --- Numerical pass, one element at a time ---
    for (input_index, (data, _)) in inputs.iter().enumerate() {
        for element_index in 0..data.len() {
            let loss_plus = eval_perturbed(&func, inputs, input_index, element_index, epsilon)?;
            let loss_minus = eval_perturbed(&func, inputs, input_index, element_index, -epsilon)?;
            let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon as f64);
            let analytical_grad = analytical_grads[input_index][element_index] as f64;

            if numerical_grad.is_nan() || numerical_grad.is_infinite() {
                return Err(GradCheckError::NumericalGradNaNOrInfinite {
                    input_index,
                    element_index,
                });
            }
            if analytical_grad.is_nan() || analytical_grad.is_infinite() {
                return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                    input_index,
                    element_index,
                });
            }

            let difference = (analytical_grad - numerical_grad).abs();
            if difference > tolerance
                && (difference / (analytical_grad.abs() + epsilon as f64)) > tolerance
            {
                return Err(GradCheckError::GradientMismatch {
                    input_index,
                    element_index,
                    analytical_grad,
                    numerical_grad,
                    difference,
                });
            }
        }
    }

    Ok(())
}

fn build_leaves(
    graph: &Graph,
    inputs: &[(Vec<f32>, Vec<usize>)],
) -> Result<Vec<Tensor>, GradCheckError> {
    inputs
        .iter()
        .map(|(data, shape)| {
            graph
                .tensor(data.clone(), shape.clone())
                .map_err(GradCheckError::TensorError)
        })
        .collect()
}

/// Evaluates `func` on a fresh graph with one input element nudged by `delta`
/// and returns the scalar output.
fn eval_perturbed<F>(
    func: &F,
    inputs: &[(Vec<f32>, Vec<usize>)],
    input_index: usize,
    element_index: usize,
    delta: f32,
) -> Result<f64, GradCheckError>
where
    F: Fn(&Graph, &[Tensor]) -> Result<Tensor, RevGradError>,
{
    let graph = Graph::new();
    let tensors: Vec<Tensor> = inputs
        .iter()
        .enumerate()
        .map(|(i, (data, shape))| {
            let mut data = data.clone();
            if i == input_index {
                data[element_index] += delta;
            }
            graph
                .tensor(data, shape.clone())
                .map_err(GradCheckError::TensorError)
        })
        .collect::<Result<_, _>>()?;

    let output = func(&graph, &tensors).map_err(GradCheckError::ForwardPassError)?;
    if output.numel() != 1 {
        return Err(GradCheckError::NonScalarOutput(output.shape()));
    }
    Ok(output.data()[0] as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::arithmetic::{add_op, mul_op};

    #[test]
    fn test_check_grad_accepts_correct_gradients() {
        let inputs = vec![
            (vec![1.3, -0.4, 2.1], vec![3]),
            (vec![0.7, 0.2, -1.5], vec![3]),
        ];
        check_grad(
            |_, ts| {
                let prod = mul_op(&ts[0], &ts[1])?;
                let shifted = add_op(&prod, &ts[0])?;
                shifted.sum()
            },
            &inputs,
            1e-2,
            1e-3,
        )
        .expect("gradient check should pass");
    }

    #[test]
    fn test_check_grad_rejects_non_scalar_output() {
        let inputs = vec![(vec![1.0, 2.0], vec![2])];
        let result = check_grad(|_, ts| add_op(&ts[0], &ts[0]), &inputs, 1e-2, 1e-3);
        assert!(matches!(result, Err(GradCheckError::NonScalarOutput(_))));
    }
}
