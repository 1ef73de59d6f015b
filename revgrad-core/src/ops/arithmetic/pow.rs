use crate::autograd::op::Op;
use crate::error::RevGradError;
use crate::graph::{GraphInner, NodeId};
use crate::tensor::Tensor;

// --- Forward operation ---

/// Raises each element of the tensor to the power of a constant exponent.
///
/// The exponent is a plain number baked into the recorded operation, not a
/// differentiable tensor. IEEE semantics apply for awkward bases (a negative
/// base with a fractional exponent yields NaN, `0^0` yields 1), matching
/// what the element-wise `powf` produces.
pub fn pow_op(base: &Tensor, exponent: f32) -> Result<Tensor, RevGradError> {
    let graph = base.graph().clone();

    let (result_data, result_shape) = {
        let inner = graph.inner.borrow();
        let base_node = inner.node(base.id());
        let result_data: Vec<f32> = base_node.data.iter().map(|&x| x.powf(exponent)).collect();
        (result_data, base_node.shape.clone())
    };

    Ok(graph.push_op(
        result_data,
        result_shape,
        Op::PowScalar {
            base: base.id(),
            exponent,
        },
    ))
}

// --- Backward rule ---

/// d(x^p)/dx = p * x^(p-1).
///
/// A zero exponent short-circuits to an exact zero gradient: the factor
/// `p * x^(p-1)` would otherwise evaluate `0 * inf` at `x == 0` and poison
/// the gradient with NaN even though the function is constant.
pub(crate) fn backward(
    inner: &GraphInner,
    base: NodeId,
    exponent: f32,
    grad_out: &[f32],
) -> Vec<(NodeId, Vec<f32>)> {
    let base_node = inner.node(base);
    if exponent == 0.0 {
        return vec![(base, vec![0.0; base_node.numel()])];
    }
    let grad: Vec<f32> = base_node
        .data
        .iter()
        .zip(grad_out.iter())
        .map(|(&x, &g)| exponent * x.powf(exponent - 1.0) * g)
        .collect();
    vec![(base, grad)]
}

// --- Tests ---

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
