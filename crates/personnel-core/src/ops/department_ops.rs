use super::context::{DeleteReport, StoreContext};
use crate::errors::{PersonnelError, Result};
use crate::model::{Department, DepartmentId, EntityKind};

/// Create a new Department with a store-assigned identity and no links
///
/// # Errors
/// * `AlreadyExists` - only if the counter collides with an explicitly inserted identity
pub fn create_department(ctx: &mut StoreContext, mut department: Department) -> Result<DepartmentId> {
    let id = ctx.departments.next_id();
    department.id = id;
    department.employee_link_ids.clear();

    ctx.departments.add(department)?;
    Ok(id)
}

pub fn read_department(ctx: &StoreContext, id: DepartmentId) -> Option<&Department> {
    ctx.departments.get(id)
}

pub fn list_departments(ctx: &StoreContext) -> &[Department] {
    ctx.departments.get_all()
}

/// Replace a Department, keeping its employee link list
///
/// # Errors
/// * `NotFound` - If no department has identity `id`; nothing is written
pub fn update_department(
    ctx: &mut StoreContext,
    id: DepartmentId,
    mut replacement: Department,
) -> Result<()> {
    let previous = ctx
        .departments
        .get(id)
        .ok_or_else(|| PersonnelError::not_found(EntityKind::Department, id))?;

    replacement.id = id;
    replacement.carry_relations_from(previous);

    ctx.departments.update(replacement)
}

/// Delete a Department; link records pointing at it are left in place
///
/// # Errors
/// * `NotFound` - If no department has identity `id`; the store is unchanged
pub fn delete_department(ctx: &mut StoreContext, id: DepartmentId) -> Result<DeleteReport> {
    if !ctx.departments.contains(id) {
        return Err(PersonnelError::not_found(EntityKind::Department, id));
    }
    let dangling = ctx.dependents_of_department(id);
    ctx.departments.delete(id)?;

    Ok(DeleteReport {
        kind: EntityKind::Department,
        id,
        dangling,
    })
}
