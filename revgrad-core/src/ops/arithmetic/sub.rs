use crate::error::RevGradError;
use crate::ops::arithmetic::{add_op, neg_op};
use crate::tensor::utils::broadcast_shapes;
use crate::tensor::Tensor;

/// Element-wise subtraction with broadcasting, composed as `a + (-b)`.
///
/// The composition halves the number of backward rules the engine has to
/// carry, at the cost of one extra intermediate node per subtraction. The
/// broadcast check runs first so that an incompatible pair fails before the
/// intermediate negation node is created.
pub fn sub_op(a: &Tensor, b: &Tensor) -> Result<Tensor, RevGradError> {
    let graph = a.same_graph(b, "sub")?;

    {
        let inner = graph.inner.borrow();
        let a_node = inner.node(a.id());
        let b_node = inner.node(b.id());
        broadcast_shapes(&a_node.shape, &b_node.shape).map_err(|_| {
            RevGradError::BroadcastError {
                shape1: a_node.shape.clone(),
                shape2: b_node.shape.clone(),
            }
        })?;
    }

    let negated = neg_op(b)?;
    add_op(a, &negated)
}

// --- Tests ---

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
