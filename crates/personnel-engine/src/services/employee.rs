use personnel_core::model::{EmployeeId, EntityId};
use personnel_core::ops::employee_ops;
use personnel_core::DeleteReport;
use personnel_core_types::RequestContext;
use personnel_store::errors::Result;

use super::{instrumented, CrudService};
use crate::context::{read, write, SharedContext};
use crate::dto::{EmployeeCreateUpdateDto, EmployeeDto};

/// Record mutation service for employees
#[derive(Debug, Clone)]
pub struct EmployeeService {
    ctx: SharedContext,
}

impl EmployeeService {
    pub fn new(ctx: SharedContext) -> Self {
        Self { ctx }
    }
}

impl CrudService for EmployeeService {
    type Dto = EmployeeDto;
    type Input = EmployeeCreateUpdateDto;

    fn create(
        &self,
        request: &RequestContext,
        input: EmployeeCreateUpdateDto,
    ) -> Result<EmployeeId> {
        instrumented("employee_create", request, || {
            let mut ctx = write(&self.ctx)?;
            Ok(employee_ops::create_employee(&mut ctx, input.into_model(0))?)
        })
    }

    fn get(&self, request: &RequestContext, id: EntityId) -> Result<Option<EmployeeDto>> {
        instrumented("employee_get", request, || {
            let ctx = read(&self.ctx)?;
            Ok(employee_ops::read_employee(&ctx, id)
                .map(|e| EmployeeDto::from_model(e, &ctx)))
        })
    }

    fn list(&self, request: &RequestContext) -> Result<Vec<EmployeeDto>> {
        instrumented("employee_list", request, || {
            let ctx = read(&self.ctx)?;
            Ok(employee_ops::list_employees(&ctx)
                .iter()
                .map(|e| EmployeeDto::from_model(e, &ctx))
                .collect())
        })
    }

    fn update(
        &self,
        request: &RequestContext,
        id: EntityId,
        input: EmployeeCreateUpdateDto,
    ) -> Result<()> {
        instrumented("employee_update", request, || {
            let mut ctx = write(&self.ctx)?;
            Ok(employee_ops::update_employee(&mut ctx, id, input.into_model(id))?)
        })
    }

    fn delete(&self, request: &RequestContext, id: EntityId) -> Result<DeleteReport> {
        instrumented("employee_delete", request, || {
            let mut ctx = write(&self.ctx)?;
            let report = employee_ops::delete_employee(&mut ctx, id)?;
            if !report.dangling.is_empty() {
                tracing::debug!(
                    employee_id = id,
                    dangling = report.dangling.total() as u64,
                    "employee deleted with dependents left in place"
                );
            }
            Ok(report)
        })
    }
}
