use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::autograd::graph::topological_sort;
use crate::autograd::op::Op;
use crate::error::RevGradError;
use crate::graph::{Graph, GraphInner, NodeId};
use crate::ops;

/// Runs a full backward pass rooted at `root`.
///
/// The sweep works with two kinds of gradient storage:
///
/// - a transient per-pass *flow* map, keyed by node id, holding the gradient
///   of the root with respect to each node as it is being assembled;
/// - the persistent per-node `grad` buffers, into which each node's total
///   flow is added once the node is popped in reverse topological order.
///
/// The root's persistent gradient is overwritten with ones of its own shape
/// (the seed); every other reachable node accumulates additively, so a
/// second pass without an intervening gradient reset adds an identical
/// contribution on top of the first. Nodes with no path to the root are
/// never touched.
///
/// Reverse topological order guarantees that when a node is popped, every
/// consumer has already pushed its share into the node's flow entry, which
/// keeps fan-out gradients correct regardless of sibling visitation order.
pub(crate) fn run_backward(graph: &Graph, root: NodeId) -> Result<(), RevGradError> {
    let mut inner = graph.inner.borrow_mut();

    let order = topological_sort(&inner, root);
    log::debug!(
        "backward: {} of {} nodes reachable from root {:?}",
        order.len(),
        inner.len(),
        root
    );

    // Seed: the gradient of the root with respect to itself.
    let root_numel = inner.node(root).numel();
    inner.node_mut(root).grad = vec![1.0; root_numel];

    let mut flows: HashMap<NodeId, Vec<f32>> = HashMap::new();
    flows.insert(root, vec![1.0; root_numel]);

    for &id in order.iter().rev() {
        let flow = match flows.remove(&id) {
            Some(flow) => flow,
            None => continue,
        };

        if id != root {
            let node = inner.node_mut(id);
            for (g, f) in node.grad.iter_mut().zip(flow.iter()) {
                *g += *f;
            }
        }

        for (parent, contribution) in dispatch(&inner, id, &flow) {
            match flows.entry(parent) {
                Entry::Occupied(mut entry) => {
                    for (acc, c) in entry.get_mut().iter_mut().zip(contribution.iter()) {
                        *acc += *c;
                    }
                }
                Entry::Vacant(entry) => {
                    entry.insert(contribution);
                }
            }
        }
    }

    Ok(())
}

/// Maps a node's operation kind to its gradient rule and returns the local
/// contribution for each parent, in operand order.
///
/// Each rule reads only the node's own flow and its direct parents' data,
/// never anything further up the graph.
fn dispatch(inner: &GraphInner, id: NodeId, grad_out: &[f32]) -> Vec<(NodeId, Vec<f32>)> {
    let node = inner.node(id);
    match node.op {
        Op::Leaf => Vec::new(),
        Op::Add { lhs, rhs } => ops::arithmetic::add::backward(inner, lhs, rhs, &node.shape, grad_out),
        Op::Neg { input } => ops::arithmetic::neg::backward(input, grad_out),
        Op::Mul { lhs, rhs } => ops::arithmetic::mul::backward(inner, lhs, rhs, &node.shape, grad_out),
        Op::MatMul { lhs, rhs } => ops::linalg::matmul::backward(inner, lhs, rhs, grad_out),
        Op::PowScalar { base, exponent } => ops::arithmetic::pow::backward(inner, base, exponent, grad_out),
        Op::Sum { input } => ops::reduction::sum::backward(inner, input, grad_out),
    }
}
