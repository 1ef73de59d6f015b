use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::error::RevGradError;
use crate::graph::Graph;
use crate::tensor::Tensor;

/// Creates a leaf tensor with values drawn from `N(0, std^2)`.
///
/// The usual weight initialization for small linear stacks, e.g.
/// `scaled_normal(&graph, &[in, out], 0.01)`.
pub fn scaled_normal(graph: &Graph, shape: &[usize], std: f32) -> Result<Tensor, RevGradError> {
    let normal = Normal::new(0.0f32, std)
        .map_err(|e| RevGradError::InternalError(format!("invalid normal distribution: {e}")))?;
    let numel = shape.iter().product();
    let mut rng = rand::thread_rng();
    let data: Vec<f32> = (0..numel).map(|_| normal.sample(&mut rng)).collect();
    graph.tensor(data, shape.to_vec())
}

/// Creates a leaf tensor with values drawn uniformly from `[low, high)`.
pub fn uniform(
    graph: &Graph,
    shape: &[usize],
    low: f32,
    high: f32,
) -> Result<Tensor, RevGradError> {
    if low >= high {
        return Err(RevGradError::InternalError(format!(
            "invalid uniform bounds: [{low}, {high})"
        )));
    }
    let numel = shape.iter().product();
    let mut rng = rand::thread_rng();
    let data: Vec<f32> = (0..numel).map(|_| rng.gen_range(low..high)).collect();
    graph.tensor(data, shape.to_vec())
}

// --- Tests ---

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
