use super::{scaled_normal, uniform};
use crate::graph::Graph;

#[test]
fn test_scaled_normal_shape() {
    let graph = Graph::new();
    let t = scaled_normal(&graph, &[4, 3], 0.01).unwrap();
    assert_eq!(t.shape(), vec![4, 3]);
    assert!(t.data().iter().all(|v| v.is_finite()));
}

#[test]
fn test_scaled_normal_zero_std_is_zeros() {
    let graph = Graph::new();
    let t = scaled_normal(&graph, &[5], 0.0).unwrap();
    assert_eq!(t.data(), vec![0.0; 5]);
}

#[test]
fn test_uniform_bounds() {
    let graph = Graph::new();
    let t = uniform(&graph, &[100], -0.5, 0.5).unwrap();
    assert!(t.data().iter().all(|&v| (-0.5..0.5).contains(&v)));
}

#[test]
fn test_uniform_rejects_inverted_bounds() {
    let graph = Graph::new();
    assert!(uniform(&graph, &[2], 1.0, -1.0).is_err());
}
