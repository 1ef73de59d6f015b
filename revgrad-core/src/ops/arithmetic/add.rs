use crate::autograd::op::Op;
use crate::error::RevGradError;
use crate::graph::{GraphInner, NodeId};
use crate::tensor::utils::{broadcast_shapes, broadcast_zip, reduce_broadcast_grad};
use crate::tensor::Tensor;

// --- Forward operation ---

/// Performs element-wise addition of two tensors with broadcasting.
///
/// Both operands must live in the same graph. Fails before any node is
/// created if the shapes are not broadcast-compatible.
pub fn add_op(a: &Tensor, b: &Tensor) -> Result<Tensor, RevGradError> {
    let graph = a.same_graph(b, "add")?;

    let (result_data, result_shape) = {
        let inner = graph.inner.borrow();
        let a_node = inner.node(a.id());
        let b_node = inner.node(b.id());

        let result_shape = broadcast_shapes(&a_node.shape, &b_node.shape).map_err(|_| {
            RevGradError::BroadcastError {
                shape1: a_node.shape.clone(),
                shape2: b_node.shape.clone(),
            }
        })?;

        let result_data = broadcast_zip(
            &a_node.data,
            &a_node.shape,
            &b_node.data,
            &b_node.shape,
            &result_shape,
            |x, y| x + y,
        );
        (result_data, result_shape)
    };

    Ok(graph.push_op(
        result_data,
        result_shape,
        Op::Add {
            lhs: a.id(),
            rhs: b.id(),
        },
    ))
}

// --- Backward rule ---

/// d(a + b)/da = 1, d(a + b)/db = 1: the upstream gradient passes through
/// unchanged, reduced back onto each operand's shape where broadcasting
/// expanded it.
pub(crate) fn backward(
    inner: &GraphInner,
    lhs: NodeId,
    rhs: NodeId,
    out_shape: &[usize],
    grad_out: &[f32],
) -> Vec<(NodeId, Vec<f32>)> {
    let grad_lhs = reduce_broadcast_grad(grad_out, out_shape, &inner.node(lhs).shape);
    let grad_rhs = reduce_broadcast_grad(grad_out, out_shape, &inner.node(rhs).shape);
    vec![(lhs, grad_lhs), (rhs, grad_rhs)]
}

// --- Tests ---

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
