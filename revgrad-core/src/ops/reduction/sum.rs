use crate::autograd::op::Op;
use crate::error::RevGradError;
use crate::graph::{GraphInner, NodeId};
use crate::tensor::Tensor;

// --- Forward operation ---

/// Sums all elements of the tensor into a rank-0 scalar.
pub fn sum_op(a: &Tensor) -> Result<Tensor, RevGradError> {
    let graph = a.graph().clone();
    let total: f32 = {
        let inner = graph.inner.borrow();
        inner.node(a.id()).data.iter().sum()
    };
    Ok(graph.push_op(vec![total], vec![], Op::Sum { input: a.id() }))
}

// --- Backward rule ---

/// Every element contributed equally, so the single upstream gradient value
/// is broadcast to the operand's full shape.
pub(crate) fn backward(
    inner: &GraphInner,
    input: NodeId,
    grad_out: &[f32],
) -> Vec<(NodeId, Vec<f32>)> {
    let g = grad_out[0];
    vec![(input, vec![g; inner.node(input).numel()])]
}

// --- Tests ---

#[cfg(test)]
#[path = "sum_test.rs"]
mod tests;
