mod expander;
mod normalize;
pub mod tree;

pub use expander::PathExpander;
pub use normalize::normalize;
