//! Acceptance tests for the list screen: selection, action menu, bulk actions.

use crate::model::Effect;
use crate::test_harness::AcceptanceTestHarness;
use crossterm::event::KeyCode;

const BOOKS_FIXTURE: &str = "tests/fixtures/page.json";

fn books(url: &str) -> AcceptanceTestHarness {
    AcceptanceTestHarness::from_fixture(BOOKS_FIXTURE, url).expect("Should load books fixture")
}

#[test]
fn list_renders_rows_and_disabled_menu() {
    // GIVEN: the list page
    let mut harness = books("/books/?page=2");

    // WHEN: it is rendered
    let screen = harness.render_to_string();

    // THEN: every row is listed unchecked and the action menu asks for a selection
    for title in ["Dune", "Solaris", "Kindred", "Untitled"] {
        assert!(screen.contains(title), "missing {title} in:\n{screen}");
    }
    assert!(screen.contains("[ ]"));
    assert!(!screen.contains("[x]"));
    assert!(screen.contains("Actions (select items)"), "{screen}");
    assert!(screen.contains("0/4 selected"), "{screen}");
}

#[test]
fn selecting_rows_enables_menu_and_select_all_follows() {
    // GIVEN: the list page with four rows
    let mut harness = books("/books/");

    // WHEN: the first row is selected
    harness.send_key(KeyCode::Char(' '));

    // THEN: the action menu is enabled
    let screen = harness.render_to_string();
    assert!(screen.contains("1/4 selected"), "{screen}");
    assert!(screen.contains("Actions: 1:Delete selected"), "{screen}");
    let slots = harness.host().slots().clone();
    assert!(!harness.host().page().is_checked(&slots.select_all));

    // WHEN: the remaining rows are selected one by one
    for _ in 0..3 {
        harness.send_keys(&[KeyCode::Char('j'), KeyCode::Char(' ')]);
    }

    // THEN: select-all becomes checked
    assert!(harness.host().page().is_checked(&slots.select_all));
    assert!(harness.render_to_string().contains("4/4 selected"));
}

#[test]
fn select_all_then_none_disables_menu_again() {
    let mut harness = books("/books/");

    harness.send_key(KeyCode::Char('*'));
    assert!(harness.render_to_string().contains("4/4 selected"));

    harness.send_key(KeyCode::Char('*'));
    let screen = harness.render_to_string();
    assert!(screen.contains("0/4 selected"), "{screen}");
    assert!(screen.contains("Actions (select items)"), "{screen}");
}

#[test]
fn bulk_delete_navigates_with_encoded_ids() {
    // GIVEN: rows "3" and "a,b" selected
    let mut harness = books("/books/?page=2");
    harness.send_key(KeyCode::Char(' '));
    harness.send_keys(&[KeyCode::Char('j'), KeyCode::Char('j'), KeyCode::Char('j')]);
    harness.send_key(KeyCode::Char(' '));

    // WHEN: "Delete selected" is chosen from the menu
    harness.send_key(KeyCode::Char('1'));

    // THEN: the browser navigates to the bulk delete confirmation,
    // with the comma inside an id escaped
    assert_eq!(
        harness.transcript(),
        &[Effect::Navigate {
            url: "/books/?page=2&o=delete_multiple&items=3,a%2Cb".to_string()
        }]
    );
    let screen = harness.render_to_string();
    assert!(screen.contains("Delete 2 selected items"), "{screen}");
}

#[test]
fn bulk_action_without_selection_is_ignored() {
    let mut harness = books("/books/");
    harness.send_key(KeyCode::Char('2'));
    assert!(harness.transcript().is_empty());
    assert!(harness.is_running());
}

#[test]
fn publish_submits_raw_ids() {
    let mut harness = books("/books/");
    harness.send_keys(&[KeyCode::Char('j'), KeyCode::Char(' ')]);
    harness.send_keys(&[KeyCode::Char('j'), KeyCode::Char(' ')]);
    harness.send_key(KeyCode::Char('2'));

    let [Effect::Submit(form)] = harness.transcript() else {
        panic!("expected one submission, got {:?}", harness.transcript());
    };
    assert_eq!(form.form_id, "id_form_action");
    assert_eq!(form.action_url, "/books/?o=action");
    assert_eq!(form.field("handler"), Some("publish"));
    assert_eq!(form.field("ids"), Some("5,8"));
}

#[test]
fn delete_confirmation_cancel_returns_to_list() {
    let mut harness = books("/books/?page=2");
    harness.send_key(KeyCode::Char('d'));
    assert!(harness.render_to_string().contains("Delete item 3?"));

    harness.send_key(KeyCode::Esc);
    let screen = harness.render_to_string();
    assert!(screen.contains("/books/?page=2"), "{screen}");
    assert!(screen.contains("Dune"), "{screen}");
    assert_eq!(harness.host().loads(), 3);
}

#[test]
fn row_action_submits_single_item() {
    let mut harness = books("/books/");
    harness.send_keys(&[KeyCode::Char('j'), KeyCode::Char('j'), KeyCode::F(1)]);

    let [Effect::Submit(form)] = harness.transcript() else {
        panic!("expected one submission, got {:?}", harness.transcript());
    };
    assert_eq!(form.action_url, "/books/?o=action&item=8");
    assert_eq!(form.field("id"), Some("8"));
}

#[test]
fn q_quits() {
    let mut harness = books("/books/");
    assert!(harness.send_key(KeyCode::Char('q')));
    assert!(!harness.is_running());
    assert!(harness.transcript().is_empty());
}

#[test]
fn typed_key_sequence_selects_and_publishes() {
    // GIVEN: the list page
    let mut harness = books("/books/");

    // WHEN: the first two rows are selected and "Publish" is chosen
    harness.type_text(" j 2");

    // THEN: one submission carries both ids
    let [Effect::Submit(form)] = harness.transcript() else {
        panic!("expected one submission, got {:?}", harness.transcript());
    };
    assert_eq!(form.field("handler"), Some("publish"));
    assert_eq!(form.field("ids"), Some("3,5"));
}
