// Services sharing one context from several threads.

mod common;

use common::{employee_input, services};
use personnel_core_types::RequestContext;
use personnel_engine::CrudService;
use std::collections::HashSet;
use std::thread;

#[test]
fn test_parallel_creates_get_distinct_identities() {
    let s = services();

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let employees = s.employees.clone();
            thread::spawn(move || {
                let request = RequestContext::new();
                (0..25)
                    .map(|i| {
                        employees
                            .create(&request, employee_input(&format!("T{}", t), &i.to_string()))
                            .unwrap()
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let ids: Vec<u32> = handles
        .into_iter()
        .flat_map(|h| h.join().unwrap())
        .collect();
    let unique: HashSet<u32> = ids.iter().copied().collect();

    assert_eq!(ids.len(), 200);
    assert_eq!(unique.len(), 200);
    assert_eq!(s.employees.list(&RequestContext::new()).unwrap().len(), 200);
}
