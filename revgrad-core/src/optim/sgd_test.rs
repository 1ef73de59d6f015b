use super::Sgd;
use crate::graph::Graph;
use crate::nn::parameter::Parameter;
use crate::ops::arithmetic::mul_op;
use crate::optim::optimizer_trait::Optimizer;
use approx::assert_relative_eq;

#[test]
fn test_sgd_step_applies_update() {
    let graph = Graph::new();
    let p = Parameter::new(graph.tensor(vec![1.0, 2.0], vec![2]).unwrap());
    let c = graph.tensor(vec![3.0, 4.0], vec![2]).unwrap();

    // loss = sum(p * c), so p.grad = c after backward.
    let loss = mul_op(&p, &c).unwrap().sum().unwrap();
    loss.backward().unwrap();
    assert_eq!(p.grad(), vec![3.0, 4.0]);

    let mut optimizer = Sgd::new(vec![p.clone()], 0.1);
    optimizer.step().unwrap();

    let data = p.data();
    assert_relative_eq!(data[0], 1.0 - 0.1 * 3.0, epsilon = 1e-6);
    assert_relative_eq!(data[1], 2.0 - 0.1 * 4.0, epsilon = 1e-6);
}

#[test]
fn test_sgd_zero_grad_resets_parameters() {
    let graph = Graph::new();
    let p = Parameter::new(graph.tensor(vec![1.0], vec![1]).unwrap());
    let loss = mul_op(&p, &graph.scalar(5.0)).unwrap().sum().unwrap();
    loss.backward().unwrap();
    assert_eq!(p.grad(), vec![5.0]);

    let mut optimizer = Sgd::new(vec![p.clone()], 0.1);
    optimizer.zero_grad();
    assert_eq!(p.grad(), vec![0.0]);
}

#[test]
fn test_sgd_step_with_zero_grad_is_noop() {
    let graph = Graph::new();
    let p = Parameter::new(graph.tensor(vec![1.0, 2.0], vec![2]).unwrap());
    let mut optimizer = Sgd::new(vec![p.clone()], 0.5);
    optimizer.step().unwrap();
    assert_eq!(p.data(), vec![1.0, 2.0]);
}

#[test]
fn test_sgd_accumulated_grads_double_the_update() {
    let graph = Graph::new();
    let p = Parameter::new(graph.tensor(vec![0.0], vec![1]).unwrap());
    let c = graph.tensor(vec![2.0], vec![1]).unwrap();

    let loss = mul_op(&p, &c).unwrap().sum().unwrap();
    loss.backward().unwrap();
    loss.backward().unwrap(); // no reset in between: gradient doubles
    assert_eq!(p.grad(), vec![4.0]);

    let mut optimizer = Sgd::new(vec![p.clone()], 1.0);
    optimizer.step().unwrap();
    assert_eq!(p.data(), vec![-4.0]);
}

#[test]
fn test_sgd_set_lr() {
    let graph = Graph::new();
    let p = Parameter::new(graph.tensor(vec![1.0], vec![1]).unwrap());
    let mut optimizer = Sgd::new(vec![p], 0.1);
    assert_relative_eq!(optimizer.lr(), 0.1);
    optimizer.set_lr(0.01);
    assert_relative_eq!(optimizer.lr(), 0.01);
}
