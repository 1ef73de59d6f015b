// Layer implementations.
pub mod linear;
pub mod sequential;

pub use linear::Linear;
pub use sequential::Sequential;
