use super::add_op;
use crate::autograd::check_grad;
use crate::error::RevGradError;
use crate::graph::Graph;

#[test]
fn test_add_forward() {
    let graph = Graph::new();
    let a = graph.tensor(vec![1.0, 2.0, 3.0, 4.0], vec![2, 2]).unwrap();
    let b = graph.tensor(vec![5.0, 6.0, 7.0, 8.0], vec![2, 2]).unwrap();

    let result = add_op(&a, &b).unwrap();
    assert_eq!(result.data(), vec![6.0, 8.0, 10.0, 12.0]);
    assert_eq!(result.shape(), vec![2, 2]);
    assert_eq!(result.op_label(), "+");
}

#[test]
fn test_add_forward_broadcast_row() {
    let graph = Graph::new();
    let a = graph
        .tensor(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], vec![2, 3])
        .unwrap();
    let b = graph.tensor(vec![10.0, 20.0, 30.0], vec![3]).unwrap();

    let result = add_op(&a, &b).unwrap();
    assert_eq!(result.shape(), vec![2, 3]);
    assert_eq!(result.data(), vec![11.0, 22.0, 33.0, 14.0, 25.0, 36.0]);
}

#[test]
fn test_add_shape_mismatch_creates_no_node() {
    let graph = Graph::new();
    let a = graph.tensor(vec![1.0, 2.0, 3.0, 4.0], vec![2, 2]).unwrap();
    let b = graph
        .tensor(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], vec![2, 3])
        .unwrap();
    let len_before = graph.len();

    let result = add_op(&a, &b);
    match result {
        Err(RevGradError::BroadcastError { shape1, shape2 }) => {
            assert_eq!(shape1, vec![2, 2]);
            assert_eq!(shape2, vec![2, 3]);
        }
        other => panic!("expected BroadcastError, got {:?}", other),
    }
    assert_eq!(graph.len(), len_before);
}

#[test]
fn test_add_graph_mismatch() {
    let g1 = Graph::new();
    let g2 = Graph::new();
    let a = g1.tensor(vec![1.0], vec![1]).unwrap();
    let b = g2.tensor(vec![2.0], vec![1]).unwrap();

    let result = add_op(&a, &b);
    assert!(matches!(
        result,
        Err(RevGradError::GraphMismatch { .. })
    ));
}

#[test]
fn test_add_backward_is_ones() {
    let graph = Graph::new();
    let a = graph.tensor(vec![1.0, 2.0, 3.0], vec![3]).unwrap();
    let b = graph.tensor(vec![4.0, 5.0, 6.0], vec![3]).unwrap();

    let loss = add_op(&a, &b).unwrap().sum().unwrap();
    loss.backward().unwrap();
    assert_eq!(a.grad(), vec![1.0, 1.0, 1.0]);
    assert_eq!(b.grad(), vec![1.0, 1.0, 1.0]);
}

#[test]
fn test_add_backward_reduces_broadcast_operand() {
    let graph = Graph::new();
    let a = graph
        .tensor(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], vec![2, 3])
        .unwrap();
    let b = graph.tensor(vec![10.0, 20.0, 30.0], vec![3]).unwrap();

    let loss = add_op(&a, &b).unwrap().sum().unwrap();
    loss.backward().unwrap();
    // b was broadcast over the leading axis; its gradient sums it back down,
    // keeping grad and data shapes identical.
    assert_eq!(a.grad(), vec![1.0; 6]);
    assert_eq!(b.grad(), vec![2.0, 2.0, 2.0]);
}

#[test]
fn test_add_backward_scalar_operand() {
    let graph = Graph::new();
    let a = graph.tensor(vec![1.0, 2.0, 3.0, 4.0], vec![2, 2]).unwrap();
    let s = graph.scalar(5.0);

    let loss = add_op(&a, &s).unwrap().sum().unwrap();
    loss.backward().unwrap();
    assert_eq!(s.grad(), vec![4.0]);
}

#[test]
fn test_add_grad_check() {
    use rand::{rngs::StdRng, Rng, SeedableRng};
    let mut rng = StdRng::seed_from_u64(17);
    let a: Vec<f32> = (0..6).map(|_| rng.gen_range(-2.0..2.0)).collect();
    let b: Vec<f32> = (0..3).map(|_| rng.gen_range(-2.0..2.0)).collect();
    let inputs = vec![(a, vec![2, 3]), (b, vec![3])];

    check_grad(
        |_, ts| add_op(&ts[0], &ts[1])?.sum(),
        &inputs,
        1e-2,
        1e-3,
    )
    .expect("add gradient check failed");
}
