//! # adminhub-service
//!
//! Business-rule layer for AdminHub. Services own cross-record checks
//! (uniqueness, reference existence, delete blocking) and the pure
//! menu-tree / route-tree construction; persistence stays in the
//! repository layer.

pub mod department;
pub mod menu;
pub mod role;
pub mod user;

pub use department::DepartmentService;
pub use menu::{MenuService, build_tree};
pub use role::{RoleService, RouteResolver};
pub use user::UserService;
