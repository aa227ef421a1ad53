//! Role domain entities.

pub mod model;

pub use model::{CreateRole, Role, RolePatch};
