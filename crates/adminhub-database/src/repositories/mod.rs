//! Concrete repository implementations, one per entity.

pub mod department;
pub mod menu;
pub mod role;
pub mod role_menu;
pub mod user;

pub use department::DepartmentRepository;
pub use menu::MenuRepository;
pub use role::RoleRepository;
pub use role_menu::RoleMenuRepository;
pub use user::UserRepository;
