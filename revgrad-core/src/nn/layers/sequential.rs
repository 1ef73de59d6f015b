use crate::error::RevGradError;
use crate::nn::module::Module;
use crate::nn::parameter::Parameter;
use crate::tensor::Tensor;

/// An ordered container that pipes its input through each layer in turn.
#[derive(Debug, Default)]
pub struct Sequential {
    layers: Vec<Box<dyn Module>>,
}

impl Sequential {
    pub fn new(layers: Vec<Box<dyn Module>>) -> Self {
        Sequential { layers }
    }

    /// Appends a layer to the end of the stack.
    pub fn push(&mut self, layer: Box<dyn Module>) {
        self.layers.push(layer);
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl Module for Sequential {
    fn forward(&self, input: &Tensor) -> Result<Tensor, RevGradError> {
        let mut current = input.clone();
        for layer in &self.layers {
            current = layer.forward(&current)?;
        }
        Ok(current)
    }

    fn parameters(&self) -> Vec<Parameter> {
        let mut params = Vec::new();
        for layer in &self.layers {
            params.extend(layer.parameters());
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;
    use crate::nn::layers::Linear;

    #[test]
    fn test_sequential_forward_composes_layers() {
        let graph = Graph::new();
        // First layer doubles, second adds one, both as 1x1 linear maps.
        let w1 = graph.tensor(vec![2.0], vec![1, 1]).unwrap();
        let w2 = graph.tensor(vec![1.0], vec![1, 1]).unwrap();
        let b2 = graph.tensor(vec![1.0], vec![1]).unwrap();
        let model = Sequential::new(vec![
            Box::new(Linear::from_parameters(w1, None).unwrap()),
            Box::new(Linear::from_parameters(w2, Some(b2)).unwrap()),
        ]);

        let input = graph.tensor(vec![3.0], vec![1, 1]).unwrap();
        let output = model.forward(&input).unwrap();
        assert_eq!(output.data(), vec![7.0]);
    }

    #[test]
    fn test_sequential_collects_all_parameters() {
        let graph = Graph::new();
        let model = Sequential::new(vec![
            Box::new(Linear::new(&graph, 3, 2, true).unwrap()),
            Box::new(Linear::new(&graph, 2, 1, false).unwrap()),
        ]);
        assert_eq!(model.parameters().len(), 3);
        assert_eq!(model.len(), 2);
    }

    #[test]
    fn test_sequential_zero_grad_resets_every_layer() {
        let graph = Graph::new();
        let w1 = graph.tensor(vec![1.0], vec![1, 1]).unwrap();
        let w2 = graph.tensor(vec![1.0], vec![1, 1]).unwrap();
        let model = Sequential::new(vec![
            Box::new(Linear::from_parameters(w1, None).unwrap()),
            Box::new(Linear::from_parameters(w2, None).unwrap()),
        ]);

        let input = graph.tensor(vec![2.0], vec![1, 1]).unwrap();
        let loss = model.forward(&input).unwrap().sum().unwrap();
        loss.backward().unwrap();
        assert!(model.parameters().iter().any(|p| p.grad() != vec![0.0]));

        model.zero_grad();
        assert!(model.parameters().iter().all(|p| p.grad() == vec![0.0]));
    }

    #[test]
    fn test_empty_sequential_is_identity() {
        let graph = Graph::new();
        let model = Sequential::default();
        let input = graph.tensor(vec![1.0, 2.0], vec![2]).unwrap();
        let output = model.forward(&input).unwrap();
        assert_eq!(output, input);
    }
}
