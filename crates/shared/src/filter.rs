use crate::domain::EmployeeRecord;

/// Case-insensitive substring match against first or last name.
pub fn matches_name(employee: &EmployeeRecord, query: &str) -> bool {
    let needle = query.to_lowercase();
    employee.name.first.to_lowercase().contains(&needle)
        || employee.name.last.to_lowercase().contains(&needle)
}

/// Ordered subsequence of `employees` whose first or last name contains
/// `query`. The caller decides what an empty query means.
pub fn filter_by_name(employees: &[EmployeeRecord], query: &str) -> Vec<EmployeeRecord> {
    employees
        .iter()
        .filter(|employee| matches_name(employee, query))
        .cloned()
        .collect()
}
