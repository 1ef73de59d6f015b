pub mod create;
mod traits;
pub mod utils;

pub use create::{full, ones, ones_like, randn, zeros, zeros_like};

use crate::error::RevGradError;
use crate::graph::{Graph, NodeId};

/// A handle to one node of a computation graph.
///
/// A `Tensor` is a lightweight pair of a [`Graph`] handle and a node index;
/// cloning it is cheap and never copies the stored buffers. All numeric state
/// (the forward value and the accumulated gradient) lives in the graph arena,
/// so two clones of the same tensor observe the same data.
///
/// Forward values are immutable after construction. The only mutation entry
/// points are [`Tensor::zero_grad`] (gradient reset), the backward pass
/// (gradient accumulation) and [`Tensor::sub_inplace`] (the optimizer update
/// step).
pub struct Tensor {
    pub(crate) graph: Graph,
    pub(crate) id: NodeId,
}

impl Tensor {
    pub(crate) fn from_parts(graph: Graph, id: NodeId) -> Self {
        Tensor { graph, id }
    }

    /// The graph this tensor belongs to.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// The arena id of this tensor's node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns a clone of the tensor's shape.
    pub fn shape(&self) -> Vec<usize> {
        self.graph.inner.borrow().node(self.id).shape.clone()
    }

    /// Total number of elements.
    pub fn numel(&self) -> usize {
        self.graph.inner.borrow().node(self.id).numel()
    }

    /// Returns a clone of the forward value buffer.
    pub fn data(&self) -> Vec<f32> {
        self.graph.inner.borrow().node(self.id).data.clone()
    }

    /// Returns a clone of the accumulated gradient buffer.
    ///
    /// Zero-filled until a backward pass reaches this node.
    pub fn grad(&self) -> Vec<f32> {
        self.graph.inner.borrow().node(self.id).grad.clone()
    }

    /// Debug tag of the operation that produced this node (empty for leaves).
    pub fn op_label(&self) -> &'static str {
        self.graph.inner.borrow().node(self.id).op.label()
    }

    /// Resets this tensor's gradient to zeros.
    ///
    /// Only touches this node. Other graph nodes keep whatever gradient a
    /// previous backward pass left behind.
    pub fn zero_grad(&self) {
        let mut inner = self.graph.inner.borrow_mut();
        for g in inner.node_mut(self.id).grad.iter_mut() {
            *g = 0.0;
        }
    }

    /// Runs a backward pass rooted at this tensor.
    ///
    /// Seeds this node's gradient with ones of its own shape (overwriting any
    /// previous value, which is only mathematically meaningful for scalar
    /// roots; reduce with [`Tensor::sum`] first otherwise), then propagates
    /// gradients to every node reachable through parent edges in reverse
    /// topological order, accumulating additively into each node's gradient.
    ///
    /// Calling backward again without zeroing gradients adds a second, equal
    /// contribution on top of the first.
    pub fn backward(&self) -> Result<(), RevGradError> {
        crate::autograd::backward::run_backward(&self.graph, self.id)
    }

    /// In-place update `data -= delta`, the optimizer entry point.
    ///
    /// `delta` must have exactly as many elements as the tensor; otherwise
    /// the update fails with [`RevGradError::GradientShapeMismatch`] and the
    /// data is left untouched.
    pub fn sub_inplace(&self, delta: &[f32]) -> Result<(), RevGradError> {
        let mut inner = self.graph.inner.borrow_mut();
        let node = inner.node_mut(self.id);
        if delta.len() != node.data.len() {
            return Err(RevGradError::GradientShapeMismatch {
                grad_len: delta.len(),
                shape: node.shape.clone(),
            });
        }
        for (d, u) in node.data.iter_mut().zip(delta.iter()) {
            *d -= *u;
        }
        Ok(())
    }

    /// Matrix multiplication, see [`crate::ops::linalg::matmul_op`].
    pub fn matmul(&self, other: &Tensor) -> Result<Tensor, RevGradError> {
        crate::ops::linalg::matmul_op(self, other)
    }

    /// Element-wise power with a constant exponent, see
    /// [`crate::ops::arithmetic::pow_op`].
    pub fn pow(&self, exponent: f32) -> Result<Tensor, RevGradError> {
        crate::ops::arithmetic::pow_op(self, exponent)
    }

    /// Full reduction to a rank-0 scalar, see
    /// [`crate::ops::reduction::sum_op`].
    pub fn sum(&self) -> Result<Tensor, RevGradError> {
        crate::ops::reduction::sum_op(self)
    }

    /// Verifies that `other` lives in the same graph and returns a handle to
    /// it, failing with [`RevGradError::GraphMismatch`] otherwise.
    pub(crate) fn same_graph(&self, other: &Tensor, operation: &str) -> Result<Graph, RevGradError> {
        if !self.graph.same_graph(&other.graph) {
            return Err(RevGradError::GraphMismatch {
                operation: operation.to_string(),
            });
        }
        Ok(self.graph.clone())
    }
}
