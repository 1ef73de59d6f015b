use crate::error::RevGradError;
use crate::nn::init;
use crate::nn::module::Module;
use crate::nn::parameter::Parameter;
use crate::tensor::{create, Tensor};

/// Applies a linear transformation to the incoming data: `y = x @ W + b`.
///
/// The weight has shape `[in_features, out_features]` and the optional bias
/// `[out_features]`, broadcast over the batch dimension during the addition.
#[derive(Debug)]
pub struct Linear {
    weight: Parameter,
    bias: Option<Parameter>,
    in_features: usize,
    out_features: usize,
}

impl Linear {
    /// Creates a new Linear layer with small scaled-normal weights and a
    /// zero bias.
    pub fn new(
        graph: &crate::graph::Graph,
        in_features: usize,
        out_features: usize,
        has_bias: bool,
    ) -> Result<Self, RevGradError> {
        let weight_tensor = init::scaled_normal(graph, &[in_features, out_features], 0.01)?;
        let bias = if has_bias {
            Some(Parameter::new(create::zeros(graph, &[out_features])?))
        } else {
            None
        };
        Ok(Linear {
            weight: Parameter::new(weight_tensor),
            bias,
            in_features,
            out_features,
        })
    }

    /// Builds a layer from existing weight (and optional bias) tensors.
    ///
    /// The weight must be 2-D and the bias, when present, must match the
    /// weight's output dimension.
    pub fn from_parameters(weight: Tensor, bias: Option<Tensor>) -> Result<Self, RevGradError> {
        let weight_shape = weight.shape();
        if weight_shape.len() != 2 {
            return Err(RevGradError::InternalError(format!(
                "Linear weight must be 2-D, got shape {:?}",
                weight_shape
            )));
        }
        let in_features = weight_shape[0];
        let out_features = weight_shape[1];

        if let Some(ref bias) = bias {
            let bias_shape = bias.shape();
            if bias_shape != [out_features] {
                return Err(RevGradError::ShapeMismatch {
                    expected: vec![out_features],
                    actual: bias_shape,
                    operation: "Linear::from_parameters bias".to_string(),
                });
            }
        }

        Ok(Linear {
            weight: Parameter::new(weight),
            bias: bias.map(Parameter::new),
            in_features,
            out_features,
        })
    }

    pub fn in_features(&self) -> usize {
        self.in_features
    }

    pub fn out_features(&self) -> usize {
        self.out_features
    }

    pub fn weight(&self) -> &Parameter {
        &self.weight
    }

    pub fn bias(&self) -> Option<&Parameter> {
        self.bias.as_ref()
    }
}

impl Module for Linear {
    fn forward(&self, input: &Tensor) -> Result<Tensor, RevGradError> {
        let output = input.matmul(&self.weight)?;
        match self.bias {
            Some(ref bias) => crate::ops::arithmetic::add_op(&output, bias),
            None => Ok(output),
        }
    }

    fn parameters(&self) -> Vec<Parameter> {
        let mut params = Vec::with_capacity(2);
        params.push(self.weight.clone());
        if let Some(ref bias) = self.bias {
            params.push(bias.clone());
        }
        params
    }
}

// --- Tests ---

#[cfg(test)]
#[path = "linear_test.rs"]
mod tests;
