use super::*;
use shared::test_support::employee;

fn staff() -> Vec<EmployeeRecord> {
    vec![
        employee("Jane", "Doe"),
        employee("John", "Roe"),
        employee("Maria", "Johnson"),
        employee("Ahmed", "Khan"),
    ]
}

fn names(list: &[EmployeeRecord]) -> Vec<String> {
    list.iter().map(EmployeeRecord::full_name).collect()
}

#[test]
fn starts_pending_and_browsing() {
    let state = DirectoryState::new();
    assert_eq!(state.load, LoadStatus::Pending);
    assert_eq!(state.mode, Mode::Browsing);
    assert!(state.active_list().is_empty());
    assert!(state.current().is_none());
}

#[test]
fn loaded_populates_full_list_in_order() {
    let state = DirectoryState::with_employees(staff());
    assert_eq!(state.load, LoadStatus::Loaded);
    assert_eq!(
        names(state.active_list()),
        vec!["Jane Doe", "John Roe", "Maria Johnson", "Ahmed Khan"]
    );
}

#[test]
fn load_failure_is_recorded_without_touching_lists() {
    let state = DirectoryState::with_employees(staff())
        .apply(DirectoryEvent::LoadFailed("status 503".to_string()));
    assert_eq!(state.load, LoadStatus::Failed("status 503".to_string()));
    assert_eq!(state.active_list().len(), 4);
}

#[test]
fn card_click_opens_detail_for_that_position() {
    let state = DirectoryState::with_employees(staff()).apply(DirectoryEvent::CardClicked(2));
    assert_eq!(state.mode, Mode::Detail { index: 2 });
    assert_eq!(
        state.current().map(EmployeeRecord::full_name).as_deref(),
        Some("Maria Johnson")
    );
}

#[test]
fn out_of_range_card_click_is_ignored() {
    let state = DirectoryState::with_employees(staff()).apply(DirectoryEvent::CardClicked(4));
    assert_eq!(state.mode, Mode::Browsing);
}

#[test]
fn next_at_last_index_wraps_to_first() {
    let state = DirectoryState::with_employees(staff())
        .apply(DirectoryEvent::CardClicked(3))
        .apply(DirectoryEvent::Next);
    assert_eq!(state.current_index(), Some(0));
}

#[test]
fn prev_at_first_index_wraps_to_last() {
    let state = DirectoryState::with_employees(staff())
        .apply(DirectoryEvent::CardClicked(0))
        .apply(DirectoryEvent::Prev);
    assert_eq!(state.current_index(), Some(3));
}

#[test]
fn next_and_prev_step_through_the_middle() {
    let state = DirectoryState::with_employees(staff())
        .apply(DirectoryEvent::CardClicked(1))
        .apply(DirectoryEvent::Next)
        .apply(DirectoryEvent::Next);
    assert_eq!(state.current_index(), Some(3));
    let state = state.apply(DirectoryEvent::Prev);
    assert_eq!(state.current_index(), Some(2));
}

#[test]
fn navigation_is_ignored_while_browsing() {
    let state = DirectoryState::with_employees(staff())
        .apply(DirectoryEvent::Next)
        .apply(DirectoryEvent::Prev);
    assert_eq!(state.mode, Mode::Browsing);
}

#[test]
fn close_and_backdrop_return_to_browsing() {
    let opened = DirectoryState::with_employees(staff()).apply(DirectoryEvent::CardClicked(1));
    assert_eq!(
        opened.clone().apply(DirectoryEvent::Close).mode,
        Mode::Browsing
    );
    assert_eq!(
        opened.apply(DirectoryEvent::BackdropClicked).mode,
        Mode::Browsing
    );
}

#[test]
fn search_filters_by_first_or_last_name() {
    let state = DirectoryState::with_employees(staff())
        .apply(DirectoryEvent::SearchSubmitted("JO".to_string()));
    assert_eq!(names(state.active_list()), vec!["John Roe", "Maria Johnson"]);
    assert_eq!(state.query, "JO");
    assert!(state.is_search_active());
}

#[test]
fn detail_navigation_wraps_within_filtered_list() {
    let state = DirectoryState::with_employees(staff())
        .apply(DirectoryEvent::SearchSubmitted("jo".to_string()))
        .apply(DirectoryEvent::CardClicked(1))
        .apply(DirectoryEvent::Next);
    assert_eq!(state.current_index(), Some(0));
    assert_eq!(
        state.current().map(EmployeeRecord::full_name).as_deref(),
        Some("John Roe")
    );
}

#[test]
fn empty_search_restores_full_list() {
    let state = DirectoryState::with_employees(staff())
        .apply(DirectoryEvent::SearchSubmitted("khan".to_string()))
        .apply(DirectoryEvent::SearchSubmitted(String::new()));
    assert!(!state.is_search_active());
    assert_eq!(state.active_list().len(), 4);

    let state = state
        .apply(DirectoryEvent::SearchSubmitted("khan".to_string()))
        .apply(DirectoryEvent::SearchSubmitted("   ".to_string()));
    assert_eq!(state.active_list().len(), 4);
    assert!(state.query.is_empty());
}

#[test]
fn zero_match_search_is_an_empty_result() {
    let state = DirectoryState::with_employees(staff())
        .apply(DirectoryEvent::SearchSubmitted("zzz".to_string()));
    assert!(state.is_empty_result());
    assert!(state.active_list().is_empty());

    let state = state.apply(DirectoryEvent::CardClicked(0));
    assert_eq!(state.mode, Mode::Browsing);
}

#[test]
fn search_closes_an_open_detail_view() {
    let state = DirectoryState::with_employees(staff())
        .apply(DirectoryEvent::CardClicked(3))
        .apply(DirectoryEvent::SearchSubmitted("doe".to_string()));
    assert_eq!(state.mode, Mode::Browsing);
    assert!(state.current().is_none());
}

#[test]
fn reload_clears_an_active_search() {
    let state = DirectoryState::with_employees(staff())
        .apply(DirectoryEvent::SearchSubmitted("doe".to_string()))
        .apply(DirectoryEvent::Loaded(vec![employee("Lena", "Park")]));
    assert!(!state.is_search_active());
    assert_eq!(names(state.active_list()), vec!["Lena Park"]);
}

#[test]
fn event_names_are_stable() {
    assert_eq!(DirectoryEvent::Next.name(), "next");
    assert_eq!(
        DirectoryEvent::SearchSubmitted("x".into()).name(),
        "search_submitted"
    );
}
