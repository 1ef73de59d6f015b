use std::cell::RefCell;
use std::rc::Rc;

use crate::autograd::op::Op;
use crate::error::RevGradError;
use crate::tensor::Tensor;

/// Index of a node inside a [`Graph`]'s arena.
///
/// Node ids are only meaningful relative to the graph that issued them, and
/// they are the identity used throughout the backward machinery (visited
/// tables, gradient flow maps), never value equality of the stored data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub(crate) fn index(self) -> usize {
        self.0
    }
}

/// A single node of the computation graph.
///
/// Holds the forward value, the accumulated gradient (always the same length
/// as `data`, zero-filled at construction) and the operation that produced
/// the node. Parent links live inside the [`Op`] variant as node indices.
#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) data: Vec<f32>,
    pub(crate) shape: Vec<usize>,
    pub(crate) grad: Vec<f32>,
    pub(crate) op: Op,
}

impl Node {
    pub(crate) fn numel(&self) -> usize {
        self.data.len()
    }
}

/// Arena storage for one computation graph.
#[derive(Debug, Default)]
pub(crate) struct GraphInner {
    pub(crate) nodes: Vec<Node>,
}

impl GraphInner {
    /// Appends a node and returns its id. Parents referenced by `op` must
    /// already be in the arena, which keeps the parent relation acyclic.
    pub(crate) fn push(&mut self, data: Vec<f32>, shape: Vec<usize>, op: Op) -> NodeId {
        let id = NodeId(self.nodes.len());
        let grad = vec![0.0; data.len()];
        self.nodes.push(Node { data, shape, grad, op });
        id
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }
}

/// An explicit computation-graph context.
///
/// `Graph` is a cheaply clonable handle (`Rc` semantics): every [`Tensor`]
/// produced from it keeps the arena alive, and the whole graph is torn down
/// deterministically when the last handle drops. Multiple independent graphs
/// can coexist; combining tensors from different graphs is an error.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    pub(crate) inner: Rc<RefCell<GraphInner>>,
}

impl Graph {
    /// Creates a new, empty graph.
    pub fn new() -> Self {
        Graph {
            inner: Rc::new(RefCell::new(GraphInner::default())),
        }
    }

    /// Creates a leaf tensor from raw data and a shape.
    ///
    /// The data length must equal the product of the shape dimensions.
    /// The new node starts with a zero-filled gradient and no parents.
    pub fn tensor(&self, data: Vec<f32>, shape: Vec<usize>) -> Result<Tensor, RevGradError> {
        let numel: usize = shape.iter().product();
        if data.len() != numel {
            return Err(RevGradError::TensorCreationError {
                data_len: data.len(),
                shape,
            });
        }
        let id = self.inner.borrow_mut().push(data, shape, Op::Leaf);
        Ok(Tensor::from_parts(self.clone(), id))
    }

    /// Creates a rank-0 leaf tensor holding a single value.
    ///
    /// This is the promotion target for plain-number operands, so that every
    /// edge in the graph is tensor-to-tensor.
    pub fn scalar(&self, value: f32) -> Tensor {
        let id = self.inner.borrow_mut().push(vec![value], vec![], Op::Leaf);
        Tensor::from_parts(self.clone(), id)
    }

    /// Number of nodes currently stored in the graph.
    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    /// Whether the graph holds no nodes yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends an operation result node. Used by the operation constructors.
    pub(crate) fn push_op(&self, data: Vec<f32>, shape: Vec<usize>, op: Op) -> Tensor {
        let id = self.inner.borrow_mut().push(data, shape, op);
        Tensor::from_parts(self.clone(), id)
    }

    /// Whether two handles point at the same underlying arena.
    pub(crate) fn same_graph(&self, other: &Graph) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tensor_creation() {
        let graph = Graph::new();
        let t = graph
            .tensor(vec![1.0, 2.0, 3.0, 4.0], vec![2, 2])
            .expect("creation failed");
        assert_eq!(t.shape(), vec![2, 2]);
        assert_eq!(t.data(), vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(t.grad(), vec![0.0; 4]);
        assert_eq!(t.op_label(), "");
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn test_tensor_creation_length_mismatch() {
        let graph = Graph::new();
        let result = graph.tensor(vec![1.0, 2.0, 3.0], vec![2, 2]);
        match result {
            Err(RevGradError::TensorCreationError { data_len, shape }) => {
                assert_eq!(data_len, 3);
                assert_eq!(shape, vec![2, 2]);
            }
            other => panic!("expected TensorCreationError, got {:?}", other),
        }
        assert!(graph.is_empty());
    }

    #[test]
    fn test_scalar_is_rank_zero() {
        let graph = Graph::new();
        let s = graph.scalar(5.0);
        assert_eq!(s.shape(), Vec::<usize>::new());
        assert_eq!(s.numel(), 1);
        assert_eq!(s.data(), vec![5.0]);
    }

    #[test]
    fn test_independent_graphs_coexist() {
        let g1 = Graph::new();
        let g2 = Graph::new();
        let a = g1.tensor(vec![1.0], vec![1]).unwrap();
        let b = g2.tensor(vec![2.0], vec![1]).unwrap();
        assert_eq!(g1.len(), 1);
        assert_eq!(g2.len(), 1);
        assert!(!a.graph().same_graph(b.graph()));
    }

    #[test]
    fn test_node_ids_are_construction_ordered() {
        let graph = Graph::new();
        let a = graph.tensor(vec![1.0], vec![1]).unwrap();
        let b = graph.tensor(vec![2.0], vec![1]).unwrap();
        assert!(a.id().index() < b.id().index());
    }
}
