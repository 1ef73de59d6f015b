use crate::error::RevGradError;
use crate::nn::parameter::Parameter;
use crate::optim::optimizer_trait::Optimizer;

/// Plain stochastic gradient descent: `data -= lr * grad` per parameter.
#[derive(Debug)]
pub struct Sgd {
    params: Vec<Parameter>,
    lr: f32,
}

impl Sgd {
    /// Creates a new optimizer over the given parameter set.
    pub fn new(params: Vec<Parameter>, lr: f32) -> Self {
        Sgd { params, lr }
    }

    pub fn lr(&self) -> f32 {
        self.lr
    }

    /// Adjusts the learning rate for subsequent steps.
    pub fn set_lr(&mut self, lr: f32) {
        self.lr = lr;
    }
}

impl Optimizer for Sgd {
    fn step(&mut self) -> Result<(), RevGradError> {
        for param in &self.params {
            let grad = param.grad();
            let delta: Vec<f32> = grad.iter().map(|g| g * self.lr).collect();
            param.sub_inplace(&delta)?;
        }
        log::trace!("sgd: stepped {} parameters (lr={})", self.params.len(), self.lr);
        Ok(())
    }

    fn zero_grad(&mut self) {
        for param in &self.params {
            param.zero_grad();
        }
    }
}

// --- Tests ---

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
