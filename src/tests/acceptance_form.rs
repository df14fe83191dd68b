//! Acceptance tests for the add/edit form: mode resolution, cancel,
//! related-object change links and popups.

use crate::config::ResolvedConfig;
use crate::model::{Effect, PageFixture};
use crate::test_harness::AcceptanceTestHarness;
use crossterm::event::KeyCode;

const BOOKS_FIXTURE: &str = "tests/fixtures/page.json";

fn books(url: &str) -> AcceptanceTestHarness {
    AcceptanceTestHarness::from_fixture(BOOKS_FIXTURE, url).expect("Should load books fixture")
}

#[test]
fn edit_url_opens_form_for_item() {
    // GIVEN: a URL asking to edit item 7
    let mut harness = books("/books/?page=2&o=edit&item=7");

    // THEN: the form is shown instead of the list
    let screen = harness.render_to_string();
    assert!(screen.contains("Edit item 7"), "{screen}");
    assert!(!screen.contains("Dune"), "{screen}");
    assert!(screen.contains("mode: edit"), "{screen}");
}

#[test]
fn cancel_returns_to_base_url() {
    let mut harness = books("/books/?page=2&o=edit&item=7");
    harness.send_key(KeyCode::Esc);

    assert_eq!(
        harness.transcript(),
        &[Effect::Navigate {
            url: "/books/?page=2".to_string()
        }]
    );
    assert!(harness.render_to_string().contains("Dune"));
}

#[test]
fn add_from_list_opens_empty_form() {
    let mut harness = books("/books/?page=2");
    harness.send_key(KeyCode::Char('n'));

    let screen = harness.render_to_string();
    assert!(screen.contains("/books/?page=2&o=add"), "{screen}");
    assert!(screen.contains("Add item"), "{screen}");
}

#[test]
fn change_link_follows_related_select() {
    // GIVEN: the form with author 12 preselected
    let mut harness = books("/books/?o=add");
    let link = harness.host().slots().change_link("author");
    assert_eq!(
        harness.host().page().href(&link),
        Some("/authors/?o=edit&item=12&_popup=1")
    );

    // WHEN: the author changes to 17
    harness.send_key(KeyCode::Char('r'));

    // THEN: the change link points at author 17
    assert_eq!(
        harness.host().page().href(&link),
        Some("/authors/?o=edit&item=17&_popup=1")
    );
    assert!(harness
        .render_to_string()
        .contains("change: /authors/?o=edit&item=17&_popup=1"));

    // WHEN: the select is cleared
    harness.send_key(KeyCode::Char('r'));

    // THEN: the link is disabled
    assert_eq!(harness.host().page().href(&link), None);
    assert!(harness.render_to_string().contains("change: disabled"));
}

#[test]
fn server_error_keeps_form_open() {
    // GIVEN: the server re-rendered the list URL after a failed save
    let mut fixture = PageFixture::demo(3);
    fixture.error_field = Some("1".to_string());
    fixture.alerts.push("Title is required".to_string());
    let mut harness =
        AcceptanceTestHarness::with_fixture(fixture, "/crud/").expect("harness");

    // THEN: the form is shown with the alert
    let screen = harness.render_to_string();
    assert!(screen.contains("Add item"), "{screen}");
    assert!(screen.contains("! Title is required"), "{screen}");
}

#[test]
fn popup_cancel_closes_the_host() {
    let mut harness = books("/books/?o=add&_popup=1");
    assert!(harness.render_to_string().contains("[popup]"));

    let quit = harness.send_key(KeyCode::Esc);

    assert!(quit, "closing the popup ends the host");
    assert_eq!(harness.transcript(), &[Effect::ClosePopup]);
}

#[test]
fn configured_popup_applies_without_query_flag() {
    let config = ResolvedConfig {
        start_url: "/books/?o=edit&item=3".to_string(),
        popup: true,
        ..ResolvedConfig::default()
    };
    let fixture = PageFixture::load(std::path::Path::new(BOOKS_FIXTURE)).expect("fixture");
    let mut harness =
        AcceptanceTestHarness::with_config(fixture, &config, 80, 24).expect("harness");

    assert!(harness.send_key(KeyCode::Esc));
    assert_eq!(harness.transcript(), &[Effect::ClosePopup]);
}

#[test]
fn keys_after_popup_close_are_ignored() {
    let mut harness = books("/books/?o=add&_popup=1");
    harness.send_key(KeyCode::Esc);
    harness.send_key(KeyCode::Char('n'));
    assert_eq!(harness.transcript().len(), 1);
}
