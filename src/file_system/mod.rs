pub mod build;
pub mod node;
