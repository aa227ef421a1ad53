//! Department administration service.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use adminhub_core::error::AppError;
use adminhub_core::result::AppResult;
use adminhub_core::types::pagination::{PageRequest, PageResponse};
use adminhub_database::repositories::department::DepartmentRepository;
use adminhub_database::repositories::user::UserRepository;
use adminhub_entity::department::{CreateDepartment, Department, DepartmentPatch};

/// Business rules around department CRUD.
#[derive(Debug, Clone)]
pub struct DepartmentService {
    /// Department repository.
    departments: Arc<DepartmentRepository>,
    /// User repository, for delete blocking.
    users: Arc<UserRepository>,
}

impl DepartmentService {
    /// Creates a new department service.
    pub fn new(departments: Arc<DepartmentRepository>, users: Arc<UserRepository>) -> Self {
        Self { departments, users }
    }

    /// Creates a department after a parent-existence check.
    pub async fn create_department(&self, department: CreateDepartment) -> AppResult<Department> {
        if let Some(parent_id) = department.parent_id
            && self.departments.find_by_id(parent_id).await?.is_none()
        {
            return Err(AppError::validation("Parent department does not exist"));
        }

        let created = self.departments.create(&department).await?;
        info!(department_id = %created.id, name = %created.department_name, "Department created");
        Ok(created)
    }

    /// Lists departments with pagination.
    pub async fn list_departments(
        &self,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Department>> {
        self.departments.find_all(page).await
    }

    /// Fetches a department by primary key.
    pub async fn get_department(&self, id: Uuid) -> AppResult<Department> {
        self.departments
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Department not found"))
    }

    /// Applies a typed patch to a department.
    pub async fn update_department(
        &self,
        id: Uuid,
        patch: DepartmentPatch,
    ) -> AppResult<Department> {
        let mut department = self.get_department(id).await?;

        if let Some(Some(parent_id)) = patch.parent_id {
            if parent_id == id {
                return Err(AppError::validation(
                    "A department cannot be its own parent",
                ));
            }
            if self.departments.find_by_id(parent_id).await?.is_none() {
                return Err(AppError::validation("Parent department does not exist"));
            }
        }

        patch.apply(&mut department);
        let updated = self.departments.update(&department).await?;
        info!(department_id = %updated.id, "Department updated");
        Ok(updated)
    }

    /// Deletes a department; refused while users or child departments
    /// still reference it.
    pub async fn delete_department(&self, id: Uuid) -> AppResult<()> {
        let department = self.get_department(id).await?;

        if self.users.count_by_department(id).await? > 0 {
            return Err(AppError::validation(
                "Department still has members and cannot be deleted",
            ));
        }
        if self.departments.count_children(id).await? > 0 {
            return Err(AppError::validation(
                "Department still has child departments and cannot be deleted",
            ));
        }

        if !self.departments.delete(id).await? {
            return Err(AppError::not_found("Department not found"));
        }
        info!(department_id = %department.id, "Department deleted");
        Ok(())
    }
}
