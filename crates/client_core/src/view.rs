//! HTML fragments for the gallery page.
//!
//! Markup follows the page the stylesheet was written for: a `#gallery`
//! grid of `.card` elements, a `.search-container` form and a single
//! `.modal-container` overlay.

use shared::{domain::EmployeeRecord, format::birthday_or_raw};

use crate::state::DirectoryState;

pub const NO_RESULTS_MESSAGE: &str = "No employee found";

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn render_search_form() -> String {
    r##"<form action="#" method="get">
    <input type="search" id="search-input" class="search-input" placeholder="Search...">
    <input type="submit" value="&#x1F50D;" id="search-submit" class="search-submit">
</form>"##
        .to_string()
}

pub fn render_card(employee: &EmployeeRecord) -> String {
    format!(
        r#"<div class="card">
    <div class="card-img-container">
        <img class="card-img" src="{picture}" alt="profile picture">
    </div>
    <div class="card-info-container">
        <h3 class="card-name cap">{name}</h3>
        <p class="card-text">{email}</p>
        <p class="card-text cap">{city_state}</p>
    </div>
</div>"#,
        picture = escape_html(&employee.picture.large),
        name = escape_html(&employee.full_name()),
        email = escape_html(&employee.email),
        city_state = escape_html(&employee.city_state()),
    )
}

/// Inner markup of `#gallery`: one card per record, or the no-results
/// heading when the list is empty.
pub fn render_gallery(list: &[EmployeeRecord]) -> String {
    if list.is_empty() {
        return format!("<h2>{NO_RESULTS_MESSAGE}</h2>");
    }
    list.iter().map(render_card).collect::<Vec<_>>().join("\n")
}

/// Detail overlay for `list[index]`, `None` when the index is out of range.
pub fn render_detail(list: &[EmployeeRecord], index: usize) -> Option<String> {
    let employee = list.get(index)?;
    Some(format!(
        r#"<div class="modal-container">
    <div class="modal">
        <button type="button" id="modal-close-btn" class="modal-close-btn"><strong>X</strong></button>
        <div class="modal-info-container">
            <img class="modal-img" src="{picture}" alt="profile picture">
            <h3 class="modal-name cap">{name}</h3>
            <p class="modal-text">{email}</p>
            <p class="modal-text cap">{city}</p>
            <hr>
            <p class="modal-text">{phone}</p>
            <p class="modal-text">{address}</p>
            <p class="modal-text">Birthday: {birthday}</p>
        </div>
    </div>
    <div class="modal-btn-container">
        <button type="button" id="modal-prev" class="modal-prev btn">Prev</button>
        <button type="button" id="modal-next" class="modal-next btn">Next</button>
    </div>
</div>"#,
        picture = escape_html(&employee.picture.large),
        name = escape_html(&employee.full_name()),
        email = escape_html(&employee.email),
        city = escape_html(&employee.location.city),
        phone = escape_html(&employee.phone),
        address = escape_html(&employee.full_address()),
        birthday = escape_html(&birthday_or_raw(&employee.dob.date)),
    ))
}

/// Standalone document for the current state.
pub fn render_page(state: &DirectoryState) -> String {
    let overlay = state
        .current_index()
        .and_then(|index| render_detail(state.active_list(), index))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Employee Directory</title>
</head>
<body>
<header>
<div class="header-inner-container">
<div class="header-text-container"><h1>AWESOME STARTUP EMPLOYEE DIRECTORY</h1></div>
<div class="search-container">
{search}
</div>
</div>
</header>
<div id="gallery" class="gallery">
{gallery}
</div>
{overlay}
</body>
</html>
"#,
        search = render_search_form(),
        gallery = render_gallery(state.active_list()),
    )
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;
