//! Role administration and route resolution.

pub mod routes;
pub mod service;

pub use routes::RouteResolver;
pub use service::RoleService;
