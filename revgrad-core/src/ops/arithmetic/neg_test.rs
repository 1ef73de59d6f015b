use super::neg_op;
use crate::graph::Graph;

#[test]
fn test_neg_forward() {
    let graph = Graph::new();
    let t = graph
        .tensor(vec![1.0, -2.0, 3.0, -4.0], vec![2, 2])
        .unwrap();
    let result = neg_op(&t).unwrap();
    assert_eq!(result.data(), vec![-1.0, 2.0, -3.0, 4.0]);
    assert_eq!(result.shape(), vec![2, 2]);
    assert_eq!(result.op_label(), "neg");
}

#[test]
fn test_neg_backward() {
    let graph = Graph::new();
    let t = graph.tensor(vec![2.0, -3.0], vec![2]).unwrap();
    let loss = neg_op(&t).unwrap().sum().unwrap();
    loss.backward().unwrap();
    assert_eq!(t.grad(), vec![-1.0, -1.0]);
}

#[test]
fn test_double_neg_backward() {
    let graph = Graph::new();
    let t = graph.tensor(vec![2.0, -3.0], vec![2]).unwrap();
    let loss = neg_op(&neg_op(&t).unwrap()).unwrap().sum().unwrap();
    loss.backward().unwrap();
    assert_eq!(t.grad(), vec![1.0, 1.0]);
}

#[test]
fn test_neg_operator() {
    let graph = Graph::new();
    let t = graph.tensor(vec![1.5], vec![1]).unwrap();
    assert_eq!((-&t).data(), vec![-1.5]);
}
