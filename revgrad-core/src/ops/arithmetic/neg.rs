use crate::autograd::op::Op;
use crate::error::RevGradError;
use crate::graph::NodeId;
use crate::tensor::Tensor;

// --- Forward operation ---

/// Element-wise negation.
pub fn neg_op(a: &Tensor) -> Result<Tensor, RevGradError> {
    let graph = a.graph().clone();

    let (result_data, result_shape) = {
        let inner = graph.inner.borrow();
        let a_node = inner.node(a.id());
        let result_data: Vec<f32> = a_node.data.iter().map(|&x| -x).collect();
        (result_data, a_node.shape.clone())
    };

    Ok(graph.push_op(result_data, result_shape, Op::Neg { input: a.id() }))
}

// --- Backward rule ---

/// d(-a)/da = -1.
pub(crate) fn backward(input: NodeId, grad_out: &[f32]) -> Vec<(NodeId, Vec<f32>)> {
    vec![(input, grad_out.iter().map(|&g| -g).collect())]
}

// --- Tests ---

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
