use crate::graph::NodeId;

/// Closed enumeration of every operation the graph can record.
///
/// Each non-leaf variant carries the ids of the parent nodes consumed by the
/// forward pass, plus whatever constants the gradient rule needs (only the
/// exponent for [`Op::PowScalar`]). The backward sweep dispatches on this
/// enum, so the set of differentiable operations is exhaustively checked at
/// compile time.
///
/// Subtraction has no variant of its own: it is composed from negation and
/// addition at construction time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    /// A leaf node created directly from user data (input or parameter).
    Leaf,
    /// Element-wise addition with broadcasting.
    Add { lhs: NodeId, rhs: NodeId },
    /// Element-wise negation.
    Neg { input: NodeId },
    /// Element-wise multiplication with broadcasting.
    Mul { lhs: NodeId, rhs: NodeId },
    /// 2-D matrix multiplication.
    MatMul { lhs: NodeId, rhs: NodeId },
    /// Element-wise power with a constant (non-differentiable) exponent.
    PowScalar { base: NodeId, exponent: f32 },
    /// Full reduction of all elements to a rank-0 scalar.
    Sum { input: NodeId },
}

impl Op {
    /// Ids of the nodes consumed by the forward pass, in operand order.
    pub(crate) fn parents(&self) -> Vec<NodeId> {
        match *self {
            Op::Leaf => Vec::new(),
            Op::Add { lhs, rhs } | Op::Mul { lhs, rhs } | Op::MatMul { lhs, rhs } => {
                vec![lhs, rhs]
            }
            Op::Neg { input } | Op::Sum { input } => vec![input],
            Op::PowScalar { base, .. } => vec![base],
        }
    }

    /// Debug tag naming the operation. Not used for computation.
    pub(crate) fn label(&self) -> &'static str {
        match self {
            Op::Leaf => "",
            Op::Add { .. } => "+",
            Op::Neg { .. } => "neg",
            Op::Mul { .. } => "*",
            Op::MatMul { .. } => "@",
            Op::PowScalar { .. } => "**",
            Op::Sum { .. } => "sum",
        }
    }
}
