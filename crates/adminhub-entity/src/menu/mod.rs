//! Menu domain entities and the derived tree/route shapes.

pub mod model;
pub mod route;
pub mod tree;

pub use model::{CreateMenu, Menu, MenuPatch};
pub use route::{RouteItem, RouteMeta};
pub use tree::{MenuNode, MenuTree};
