mod algorithm;
mod hyperparams;
mod iter;
mod json;
mod node;

pub use algorithm::*;
pub use hyperparams::*;
pub use iter::*;
pub use node::Node;
