//! RevGrad: a minimal reverse-mode automatic differentiation engine over
//! dense `f32` tensors.
//!
//! Operations executed on [`Tensor`] handles record themselves into an
//! explicit [`Graph`] as they run; calling [`Tensor::backward`] then walks
//! the recorded graph once in reverse topological order and accumulates the
//! gradient of the root with respect to every upstream tensor.
//!
//! ```
//! use revgrad_core::Graph;
//!
//! let graph = Graph::new();
//! let x = graph.tensor(vec![2.0], vec![1]).unwrap();
//! let y = graph.tensor(vec![3.0], vec![1]).unwrap();
//! let z = (&x * &y).sum().unwrap();
//! z.backward().unwrap();
//! assert_eq!(x.grad(), vec![3.0]);
//! assert_eq!(y.grad(), vec![2.0]);
//! ```

pub mod autograd;
pub mod error;
pub mod graph;
pub mod nn;
pub mod ops;
pub mod optim;
pub mod tensor;

pub use error::RevGradError;
pub use graph::{Graph, NodeId};
pub use tensor::Tensor;
