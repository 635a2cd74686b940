use chrono::NaiveDate;
use personnel_core::{FixedClock, StoreContext};
use personnel_engine::{
    shared_context, AnalyticsService, DepartmentService, EmployeeCreateUpdateDto,
    EmployeeService, RelationService, SharedContext,
};
use std::sync::Arc;

/// Reference date used by every analytics test
#[allow(dead_code)]
pub const TODAY: (i32, u32, u32) = (2024, 6, 1);

#[allow(dead_code)]
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[allow(dead_code)]
pub fn today() -> NaiveDate {
    date(TODAY.0, TODAY.1, TODAY.2)
}

/// All services built over one fresh context
#[allow(dead_code)]
pub struct Services {
    pub ctx: SharedContext,
    pub employees: EmployeeService,
    pub departments: DepartmentService,
    pub relations: RelationService,
    pub analytics: AnalyticsService,
}

#[allow(dead_code)]
pub fn services() -> Services {
    let ctx = shared_context(StoreContext::new());
    Services {
        employees: EmployeeService::new(ctx.clone()),
        departments: DepartmentService::new(ctx.clone()),
        relations: RelationService::new(ctx.clone()),
        analytics: AnalyticsService::new(ctx.clone(), Arc::new(FixedClock::new(today()))),
        ctx,
    }
}

#[allow(dead_code)]
pub fn employee_input(last: &str, first: &str) -> EmployeeCreateUpdateDto {
    EmployeeCreateUpdateDto::new(last, first, date(1985, 6, 15), date(2012, 9, 1))
}
