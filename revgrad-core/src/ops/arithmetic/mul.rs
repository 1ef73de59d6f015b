use crate::autograd::op::Op;
use crate::error::RevGradError;
use crate::graph::{GraphInner, NodeId};
use crate::tensor::utils::{broadcast_shapes, broadcast_zip, reduce_broadcast_grad};
use crate::tensor::Tensor;

// --- Forward operation ---

/// Performs element-wise multiplication of two tensors with broadcasting.
pub fn mul_op(a: &Tensor, b: &Tensor) -> Result<Tensor, RevGradError> {
    let graph = a.same_graph(b, "mul")?;

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
            |x, y| x * y,
        );
        (result_data, result_shape)
    };

    Ok(graph.push_op(
        result_data,
        result_shape,
        Op::Mul {
            lhs: a.id(),
            rhs: b.id(),
        },
    ))
}

// --- Backward rule ---

/// d(a * b)/da = b, d(a * b)/db = a. The products are formed over the output
/// shape and then reduced back onto each operand's own shape.
pub(crate) fn backward(
    inner: &GraphInner,
    lhs: NodeId,
    rhs: NodeId,
    out_shape: &[usize],
    grad_out: &[f32],
) -> Vec<(NodeId, Vec<f32>)> {
    let a_node = inner.node(lhs);
    let b_node = inner.node(rhs);

    let grad_lhs_full = broadcast_zip(
        grad_out,
        out_shape,
        &b_node.data,
        &b_node.shape,
        out_shape,
        |g, y| g * y,
    );
    let grad_lhs = reduce_broadcast_grad(&grad_lhs_full, out_shape, &a_node.shape);

    let grad_rhs_full = broadcast_zip(
        grad_out,
        out_shape,
        &a_node.data,
        &a_node.shape,
        out_shape,
        |g, x| g * x,
    );
    let grad_rhs = reduce_broadcast_grad(&grad_rhs_full, out_shape, &b_node.shape);

    vec![(lhs, grad_lhs), (rhs, grad_rhs)]
}

// --- Tests ---

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
