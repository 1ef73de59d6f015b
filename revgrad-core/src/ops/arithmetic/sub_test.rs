use super::sub_op;
use crate::error::RevGradError;
use crate::graph::Graph;

#[test]
fn test_sub_forward() {
    let graph = Graph::new();
    let a = graph.tensor(vec![5.0, 6.0, 7.0, 8.0], vec![2, 2]).unwrap();
    let b = graph.tensor(vec![1.0, 2.0, 3.0, 4.0], vec![2, 2]).unwrap();
    let result = sub_op(&a, &b).unwrap();
    assert_eq!(result.data(), vec![4.0, 4.0, 4.0, 4.0]);
    assert_eq!(result.shape(), vec![2, 2]);
}

#[test]
fn test_sub_adds_one_intermediate_node() {
    let graph = Graph::new();
    let a = graph.tensor(vec![1.0], vec![1]).unwrap();
    let b = graph.tensor(vec![2.0], vec![1]).unwrap();
    let len_before = graph.len();

    let _ = sub_op(&a, &b).unwrap();
    // The negation node plus the addition node.
    assert_eq!(graph.len(), len_before + 2);
}

#[test]
fn test_sub_backward() {
    let graph = Graph::new();
    let a = graph.tensor(vec![5.0, 6.0], vec![2]).unwrap();
    let b = graph.tensor(vec![1.0, 2.0], vec![2]).unwrap();
    let loss = sub_op(&a, &b).unwrap().sum().unwrap();
    loss.backward().unwrap();
    assert_eq!(a.grad(), vec![1.0, 1.0]);
    assert_eq!(b.grad(), vec![-1.0, -1.0]);
}

#[test]
fn test_sub_shape_mismatch_creates_no_node() {
    let graph = Graph::new();
    let a = graph.tensor(vec![1.0, 2.0], vec![2]).unwrap();
    let b = graph.tensor(vec![1.0, 2.0, 3.0], vec![3]).unwrap();
    let len_before = graph.len();

    let result = sub_op(&a, &b);
    assert!(matches!(result, Err(RevGradError::BroadcastError { .. })));
    // The up-front check fires before the intermediate negation is pushed.
    assert_eq!(graph.len(), len_before);
}

#[test]
fn test_sub_broadcast_backward() {
    let graph = Graph::new();
    let a = graph
        .tensor(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], vec![2, 3])
        .unwrap();
    let b = graph.tensor(vec![1.0, 1.0, 1.0], vec![3]).unwrap();
    let loss = sub_op(&a, &b).unwrap().sum().unwrap();
    loss.backward().unwrap();
    assert_eq!(a.grad(), vec![1.0; 6]);
    assert_eq!(b.grad(), vec![-2.0, -2.0, -2.0]);
}
