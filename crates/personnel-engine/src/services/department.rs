use personnel_core::model::{DepartmentId, EntityId};
use personnel_core::ops::department_ops;
use personnel_core::DeleteReport;
use personnel_core_types::RequestContext;
use personnel_store::errors::Result;

use super::{instrumented, CrudService};
use crate::context::{read, write, SharedContext};
use crate::dto::{DepartmentCreateUpdateDto, DepartmentDto};

/// Record mutation service for departments
#[derive(Debug, Clone)]
pub struct DepartmentService {
    ctx: SharedContext,
}

impl DepartmentService {
    pub fn new(ctx: SharedContext) -> Self {
        Self { ctx }
    }
}

impl CrudService for DepartmentService {
    type Dto = DepartmentDto;
    type Input = DepartmentCreateUpdateDto;

    fn create(
        &self,
        request: &RequestContext,
        input: DepartmentCreateUpdateDto,
    ) -> Result<DepartmentId> {
        instrumented("department_create", request, || {
            let mut ctx = write(&self.ctx)?;
            Ok(department_ops::create_department(&mut ctx, input.into_model(0))?)
        })
    }

    fn get(&self, request: &RequestContext, id: EntityId) -> Result<Option<DepartmentDto>> {
        instrumented("department_get", request, || {
            let ctx = read(&self.ctx)?;
            Ok(department_ops::read_department(&ctx, id)
                .map(|d| DepartmentDto::from_model(d, &ctx)))
        })
    }

    fn list(&self, request: &RequestContext) -> Result<Vec<DepartmentDto>> {
        instrumented("department_list", request, || {
            let ctx = read(&self.ctx)?;
            Ok(department_ops::list_departments(&ctx)
                .iter()
                .map(|d| DepartmentDto::from_model(d, &ctx))
                .collect())
        })
    }

    fn update(
        &self,
        request: &RequestContext,
        id: EntityId,
        input: DepartmentCreateUpdateDto,
    ) -> Result<()> {
        instrumented("department_update", request, || {
            let mut ctx = write(&self.ctx)?;
            Ok(department_ops::update_department(&mut ctx, id, input.into_model(id))?)
        })
    }

    fn delete(&self, request: &RequestContext, id: EntityId) -> Result<DeleteReport> {
        instrumented("department_delete", request, || {
            let mut ctx = write(&self.ctx)?;
            let report = department_ops::delete_department(&mut ctx, id)?;
            if !report.dangling.is_empty() {
                tracing::debug!(
                    department_id = id,
                    dangling = report.dangling.total() as u64,
                    "department deleted with dependents left in place"
                );
            }
            Ok(report)
        })
    }
}
