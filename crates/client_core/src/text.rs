//! Plain-text rendering for terminals.

use shared::{domain::EmployeeRecord, format::birthday_or_raw};

use crate::{state::DirectoryState, view::NO_RESULTS_MESSAGE};

/// One gallery line. `number` is the 1-based card number shown to users.
pub fn card_line(number: usize, employee: &EmployeeRecord) -> String {
    format!(
        "{number:>3}. {name} <{email}> {city_state}",
        name = employee.full_name(),
        email = employee.email,
        city_state = employee.city_state(),
    )
}

pub fn gallery_text(list: &[EmployeeRecord]) -> String {
    if list.is_empty() {
        return NO_RESULTS_MESSAGE.to_string();
    }
    list.iter()
        .enumerate()
        .map(|(index, employee)| card_line(index + 1, employee))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn detail_text(list: &[EmployeeRecord], index: usize) -> Option<String> {
    let employee = list.get(index)?;
    Some(format!(
        "[{current}/{total}] {name}\n  email:    {email}\n  city:     {city}\n  phone:    {phone}\n  address:  {address}\n  birthday: {birthday}\n  picture:  {picture}",
        current = index + 1,
        total = list.len(),
        name = employee.full_name(),
        email = employee.email,
        city = employee.location.city,
        phone = employee.phone,
        address = employee.full_address(),
        birthday = birthday_or_raw(&employee.dob.date),
        picture = employee.picture.large,
    ))
}

/// Gallery followed by the detail block when one is open.
pub fn state_text(state: &DirectoryState) -> String {
    let mut out = gallery_text(state.active_list());
    if let Some(detail) = state
        .current_index()
        .and_then(|index| detail_text(state.active_list(), index))
    {
        out.push_str("\n\n");
        out.push_str(&detail);
    }
    out
}
