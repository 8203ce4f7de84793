pub mod cli;
pub mod engine;
pub mod error;
pub mod graph;
pub mod loader;
pub mod render;

pub use error::{GraphError, Result};
pub use graph::FollowGraph;
