//! Operation constructors.
//!
//! Each operation lives in its own file with a fallible forward constructor
//! (`xxx_op`) that validates its operands, computes the result buffer, and
//! records the corresponding [`crate::autograd::Op`] variant in the graph.
//! The matching gradient rule sits next to it and is invoked by the backward
//! sweep's dispatcher.

pub mod arithmetic;
pub mod linalg;
pub mod reduction;

pub use arithmetic::{add_op, mul_op, neg_op, pow_op, sub_op};
pub use linalg::matmul_op;
pub use reduction::sum_op;
