//! Fits a one-dimensional linear regression with the full stack:
//! `Linear` module, squared-error loss, SGD updates.
//!
//! Run with: `cargo run --example train_linear`

use revgrad_core::nn::{Linear, Module, MseLoss, Reduction};
use revgrad_core::optim::{Optimizer, Sgd};
use revgrad_core::Graph;

fn main() {
    let graph = Graph::new();

    // Noise-free samples of y = 2x + 1.
    let xs: Vec<f32> = vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
    let ys: Vec<f32> = xs.iter().map(|x| 2.0 * x + 1.0).collect();
    let n = xs.len();

    let inputs = graph.tensor(xs, vec![n, 1]).expect("inputs");
    let targets = graph.tensor(ys, vec![n, 1]).expect("targets");

    let model = Linear::new(&graph, 1, 1, true).expect("model");
    let loss_fn = MseLoss::new(Reduction::Mean);
    let mut optimizer = Sgd::new(model.parameters(), 0.02);

    for epoch in 0..200 {
        let predictions = model.forward(&inputs).expect("forward");
        let loss = loss_fn.forward(&predictions, &targets).expect("loss");
        loss.backward().expect("backward");
        optimizer.step().expect("step");
        optimizer.zero_grad();

        if epoch % 20 == 0 {
            println!("epoch {epoch:3}  loss {:.6}", loss.data()[0]);
        }
    }

    let weight = model.weight().data()[0];
    let bias = model.bias().expect("bias").data()[0];
    println!("learned: y = {weight:.3}x + {bias:.3}  (true: y = 2x + 1)");
}
