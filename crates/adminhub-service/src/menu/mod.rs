//! Menu administration and tree construction.

pub mod service;
pub mod tree;

pub use service::MenuService;
pub use tree::{build_tree, route_from_node};
