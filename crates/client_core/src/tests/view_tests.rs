use super::*;
use crate::state::DirectoryEvent;
use shared::test_support::employee;

fn card_count(html: &str) -> usize {
    html.matches(r#"<div class="card">"#).count()
}

#[test]
fn card_shows_picture_name_email_and_city_state() {
    let html = render_card(&employee("Jane", "Doe"));
    assert!(html.contains(r#"src="https://randomuser.me/api/portraits/jane.doe.jpg""#));
    assert!(html.contains(">Jane Doe</h3>"));
    assert!(html.contains(">jane.doe@example.com</p>"));
    assert!(html.contains(">Springfield, Oregon</p>"));
}

#[test]
fn gallery_renders_one_card_per_record_in_order() {
    let list = vec![employee("Jane", "Doe"), employee("John", "Roe")];
    let html = render_gallery(&list);
    assert_eq!(card_count(&html), 2);
    let jane = html.find("Jane Doe").expect("jane");
    let john = html.find("John Roe").expect("john");
    assert!(jane < john);
}

#[test]
fn empty_gallery_renders_no_results_message_and_no_cards() {
    let html = render_gallery(&[]);
    assert!(html.contains(NO_RESULTS_MESSAGE));
    assert!(!html.contains("class=\"card"));
}

#[test]
fn detail_shows_full_fields_and_controls() {
    let list = vec![employee("Jane", "Doe"), employee("John", "Roe")];
    let html = render_detail(&list, 1).expect("detail");
    assert!(html.contains(r#"class="modal-container""#));
    assert!(html.contains(">John Roe</h3>"));
    assert!(html.contains(">(555) 010-0199</p>"));
    assert!(html.contains(">42, Main St, Springfield, Oregon 97403</p>"));
    assert!(html.contains("Birthday: 05/03/1990"));
    for control in ["modal-close-btn", "modal-prev", "modal-next"] {
        assert!(html.contains(&format!(r#"id="{control}""#)), "missing {control}");
    }
}

#[test]
fn detail_out_of_range_renders_nothing() {
    assert!(render_detail(&[employee("Jane", "Doe")], 1).is_none());
}

#[test]
fn detail_falls_back_to_raw_birthday() {
    let mut odd = employee("Jane", "Doe");
    odd.dob.date = "sometime".to_string();
    let html = render_detail(&[odd], 0).expect("detail");
    assert!(html.contains("Birthday: sometime"));
}

#[test]
fn interpolated_text_is_escaped() {
    let mut sneaky = employee("<script>", "O'Neil");
    sneaky.email = "a&b@example.com".to_string();
    let html = render_card(&sneaky);
    assert!(html.contains("&lt;script&gt; O&#39;Neil"));
    assert!(html.contains("a&amp;b@example.com"));
    assert!(!html.contains("<script>"));
}

#[test]
fn search_form_has_input_and_submit() {
    let html = render_search_form();
    assert!(html.contains(r#"id="search-input""#));
    assert!(html.contains(r#"id="search-submit""#));
}

#[test]
fn page_shows_overlay_only_in_detail_mode() {
    let state = DirectoryState::with_employees(vec![employee("Jane", "Doe")]);
    let page = render_page(&state);
    assert!(page.contains(r#"<div id="gallery" class="gallery">"#));
    assert!(page.contains(r#"<div class="search-container">"#));
    assert!(!page.contains("modal-container"));

    let page = render_page(&state.apply(DirectoryEvent::CardClicked(0)));
    assert!(page.contains("modal-container"));
}

#[test]
fn empty_search_rerenders_every_card() {
    let staff = vec![
        employee("Jane", "Doe"),
        employee("John", "Roe"),
        employee("Maria", "Johnson"),
    ];
    let state = DirectoryState::with_employees(staff)
        .apply(DirectoryEvent::SearchSubmitted("maria".to_string()));
    assert_eq!(card_count(&render_page(&state)), 1);

    let state = state.apply(DirectoryEvent::SearchSubmitted(String::new()));
    assert_eq!(card_count(&render_page(&state)), 3);
}

#[test]
fn zero_match_search_leaves_gallery_without_cards() {
    let state = DirectoryState::with_employees(vec![employee("Jane", "Doe")])
        .apply(DirectoryEvent::SearchSubmitted("nobody".to_string()));
    let page = render_page(&state);
    assert!(page.contains("<h2>No employee found</h2>"));
    assert_eq!(card_count(&page), 0);
}
