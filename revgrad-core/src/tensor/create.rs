use rand::Rng;
use rand_distr::StandardNormal;

use crate::error::RevGradError;
use crate::graph::Graph;
use crate::tensor::Tensor;

/// Creates a new leaf tensor filled with zeros.
pub fn zeros(graph: &Graph, shape: &[usize]) -> Result<Tensor, RevGradError> {
    let numel = shape.iter().product();
    graph.tensor(vec![0.0; numel], shape.to_vec())
}

/// Creates a new leaf tensor filled with ones.
pub fn ones(graph: &Graph, shape: &[usize]) -> Result<Tensor, RevGradError> {
    let numel = shape.iter().product();
    graph.tensor(vec![1.0; numel], shape.to_vec())
}

/// Creates a new leaf tensor filled with a specific value.
pub fn full(graph: &Graph, shape: &[usize], value: f32) -> Result<Tensor, RevGradError> {
    let numel = shape.iter().product();
    graph.tensor(vec![value; numel], shape.to_vec())
}

/// Creates a zero-filled leaf with the same shape and graph as `tensor`.
pub fn zeros_like(tensor: &Tensor) -> Result<Tensor, RevGradError> {
    zeros(tensor.graph(), &tensor.shape())
}

/// Creates a one-filled leaf with the same shape and graph as `tensor`.
pub fn ones_like(tensor: &Tensor) -> Result<Tensor, RevGradError> {
    ones(tensor.graph(), &tensor.shape())
}

/// Creates a new leaf tensor sampled from the standard normal distribution.
pub fn randn(graph: &Graph, shape: &[usize]) -> Result<Tensor, RevGradError> {
    let numel = shape.iter().product();
    let mut rng = rand::thread_rng();
    let data: Vec<f32> = (0..numel).map(|_| rng.sample(StandardNormal)).collect();
    graph.tensor(data, shape.to_vec())
}
