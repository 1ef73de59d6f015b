use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Neg, Sub};
use std::rc::Rc;

use crate::ops::arithmetic::{add_op, mul_op, neg_op, sub_op};
use crate::tensor::Tensor;

impl Clone for Tensor {
    /// Clones the handle. The underlying node is shared, not copied.
    fn clone(&self) -> Self {
        Tensor {
            graph: self.graph.clone(),
            id: self.id,
        }
    }
}

impl fmt::Debug for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.graph.inner.borrow();
        let node = inner.node(self.id);
        f.debug_struct("Tensor")
            .field("data", &node.data)
            .field("shape", &node.shape)
            .field("grad", &node.grad)
            .field("op", &node.op.label())
            .finish()
    }
}

/// Equality is identity: two tensors are equal only when they are handles to
/// the same node of the same graph. Nodes holding numerically equal data are
/// still distinct graph entities.
impl PartialEq for Tensor {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.graph.inner, &other.graph.inner) && self.id == other.id
    }
}

impl Eq for Tensor {}

impl Hash for Tensor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Rc::as_ptr(&self.graph.inner).hash(state);
        self.id.hash(state);
    }
}

// Operator sugar. The `_op` functions are the fallible primary API; the
// operators panic on shape or graph mismatch, like an out-of-bounds index.

impl Add for &Tensor {
    type Output = Tensor;

    fn add(self, rhs: &Tensor) -> Tensor {
        add_op(self, rhs).unwrap_or_else(|e| panic!("tensor addition failed: {e}"))
    }
}

impl Sub for &Tensor {
    type Output = Tensor;

    fn sub(self, rhs: &Tensor) -> Tensor {
        sub_op(self, rhs).unwrap_or_else(|e| panic!("tensor subtraction failed: {e}"))
    }
}

impl Mul for &Tensor {
    type Output = Tensor;

    fn mul(self, rhs: &Tensor) -> Tensor {
        mul_op(self, rhs).unwrap_or_else(|e| panic!("tensor multiplication failed: {e}"))
    }
}

impl Neg for &Tensor {
    type Output = Tensor;

    fn neg(self) -> Tensor {
        neg_op(self).unwrap_or_else(|e| panic!("tensor negation failed: {e}"))
    }
}

// Plain-number operands are promoted to rank-0 leaf tensors in the same
// graph, so every edge stays tensor-to-tensor.

impl Add<f32> for &Tensor {
    type Output = Tensor;

    fn add(self, rhs: f32) -> Tensor {
        let rhs = self.graph.scalar(rhs);
        add_op(self, &rhs).unwrap_or_else(|e| panic!("tensor addition failed: {e}"))
    }
}

impl Sub<f32> for &Tensor {
    type Output = Tensor;

    fn sub(self, rhs: f32) -> Tensor {
        let rhs = self.graph.scalar(rhs);
        sub_op(self, &rhs).unwrap_or_else(|e| panic!("tensor subtraction failed: {e}"))
    }
}

impl Mul<f32> for &Tensor {
    type Output = Tensor;

    fn mul(self, rhs: f32) -> Tensor {
        let rhs = self.graph.scalar(rhs);
        mul_op(self, &rhs).unwrap_or_else(|e| panic!("tensor multiplication failed: {e}"))
    }
}
