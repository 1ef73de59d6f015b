use crate::autograd::op::Op;
use crate::error::RevGradError;
use crate::graph::{GraphInner, NodeId};
use crate::tensor::Tensor;

// --- Forward operation ---

/// Performs matrix multiplication `C = A @ B`.
///
/// Only 2-D operands are supported: `A: [m, k]`, `B: [k, n]` gives
/// `C: [m, n]`. Rank or inner-dimension mismatches fail with
/// [`RevGradError::IncompatibleShapes`] before any node is created.
pub fn matmul_op(a: &Tensor, b: &Tensor) -> Result<Tensor, RevGradError> {
    let graph = a.same_graph(b, "matmul")?;

    let (result_data, result_shape) = {
        let inner = graph.inner.borrow();
        let a_node = inner.node(a.id());
        let b_node = inner.node(b.id());

        if a_node.shape.len() != 2 || b_node.shape.len() != 2 {
            return Err(RevGradError::IncompatibleShapes {
                shape1: a_node.shape.clone(),
                shape2: b_node.shape.clone(),
            });
        }
        if a_node.shape[1] != b_node.shape[0] {
            return Err(RevGradError::IncompatibleShapes {
                shape1: a_node.shape.clone(),
                shape2: b_node.shape.clone(),
            });
        }

        let m = a_node.shape[0];
        let k = a_node.shape[1];
        let n = b_node.shape[1];
        (
            matmul_kernel(&a_node.data, &b_node.data, m, k, n),
            vec![m, n],
        )
    };

    Ok(graph.push_op(
        result_data,
        result_shape,
        Op::MatMul {
            lhs: a.id(),
            rhs: b.id(),
        },
    ))
}

/// Naive row-major kernel: `[m, k] @ [k, n] -> [m, n]`.
fn matmul_kernel(a: &[f32], b: &[f32], m: usize, k: usize, n: usize) -> Vec<f32> {
    let mut out = vec![0.0f32; m * n];
    for i in 0..m {
        for j in 0..n {
            let mut acc = 0.0;
            for l in 0..k {
                acc += a[i * k + l] * b[l * n + j];
            }
            out[i * n + j] = acc;
        }
    }
    out
}

fn transpose(data: &[f32], rows: usize, cols: usize) -> Vec<f32> {
    let mut out = vec![0.0f32; rows * cols];
    for r in 0..rows {
        for c in 0..cols {
            out[c * rows + r] = data[r * cols + c];
        }
    }
    out
}

// --- Backward rule ---

/// dC/dA = grad @ B^T and dC/dB = A^T @ grad.
pub(crate) fn backward(
    inner: &GraphInner,
    lhs: NodeId,
    rhs: NodeId,
    grad_out: &[f32],
) -> Vec<(NodeId, Vec<f32>)> {
    let a_node = inner.node(lhs);
    let b_node = inner.node(rhs);
    let m = a_node.shape[0];
    let k = a_node.shape[1];
    let n = b_node.shape[1];

    // grad: [m, n], B^T: [n, k] -> dA: [m, k]
    let b_t = transpose(&b_node.data, k, n);
    let grad_lhs = matmul_kernel(grad_out, &b_t, m, n, k);

    // A^T: [k, m], grad: [m, n] -> dB: [k, n]
    let a_t = transpose(&a_node.data, m, k);
    let grad_rhs = matmul_kernel(&a_t, grad_out, k, m, n);

    vec![(lhs, grad_lhs), (rhs, grad_rhs)]
}

// --- Tests ---

#[cfg(test)]
#[path = "matmul_test.rs"]
mod tests;
