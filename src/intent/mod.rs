pub mod classifier;

pub use classifier::{classify, ClassifyContext, Intent};
