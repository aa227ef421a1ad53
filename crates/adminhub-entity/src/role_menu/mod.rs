//! Role↔menu association entities.

pub mod model;

pub use model::RoleMenu;
