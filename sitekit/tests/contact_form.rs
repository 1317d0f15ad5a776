//! Tests for contact form validation.

use sitedom::element::{query_all, sibling_position};
use sitedom::{Color, Element};
use sitekit::prelude::*;

const ERROR_RED: Color = Color::rgb(0xe7, 0x4c, 0x3c);

fn contact_form(with_message: bool) -> Element {
    let mut form = Element::form()
        .id("form")
        .class("contact-form")
        .child(Element::input("name").id("name"))
        .child(Element::input("email").id("email"));
    if with_message {
        form = form.child(Element::textarea("message").id("message"));
    }
    form.child(Element::button("Odeslat").id("send"))
}

fn form_page(form: Element) -> Page {
    let mut page = Page::new(Element::body().child(form))
        .behavior(ContactForm::new(ContactFormConfig::default()).unwrap());
    page.ready();
    page
}

fn fill(page: &mut Page, name: &str, email: &str, message: &str) {
    assert!(page.set_value("name", name));
    assert!(page.set_value("email", email));
    page.set_value("message", message);
}

fn errors(page: &Page) -> Vec<String> {
    query_all(page.root(), &Selector::class("error-message"))
        .iter()
        .map(|id| page.element(id).unwrap().text_content())
        .collect()
}

fn last_result(page: &Page) -> ValidationResult {
    page.behavior_ref::<ContactForm>()
        .unwrap()
        .last_result()
        .cloned()
        .unwrap()
}

// ============================================================================
// Invalid Submission Tests
// ============================================================================

#[test]
fn test_empty_form_shows_three_errors() {
    let mut page = form_page(contact_form(true));

    let outcome = page.submit("form");

    assert!(outcome.default_prevented);
    assert_eq!(
        errors(&page),
        vec![
            "Prosím vyplňte jméno",
            "Prosím vyplňte platný email",
            "Prosím vyplňte zprávu",
        ]
    );
    assert!(page.alerts().is_empty());
    for field in ["name", "email", "message"] {
        assert_eq!(page.element(field).unwrap().style.border_color, Some(ERROR_RED));
    }
}

#[test]
fn test_error_is_inserted_after_its_field() {
    let mut page = form_page(contact_form(true));
    page.submit("form");

    let error_ids = query_all(page.root(), &Selector::attr("data-error-for", "email"));
    assert_eq!(error_ids.len(), 1);
    let error = &error_ids[0];

    let field_position = sibling_position(page.root(), "email").unwrap();
    assert_eq!(sibling_position(page.root(), error), Some(field_position + 1));
    assert_eq!(page.element(error).unwrap().style.color, Some(ERROR_RED));
}

#[test]
fn test_whitespace_only_values_are_empty() {
    let mut page = form_page(contact_form(true));
    fill(&mut page, "   ", "a@b.co", "\n\t");

    page.submit("form");

    assert_eq!(errors(&page), vec!["Prosím vyplňte jméno", "Prosím vyplňte zprávu"]);
}

#[test]
fn test_invalid_email_only() {
    let mut page = form_page(contact_form(true));
    fill(&mut page, "Jan", "a@b", "Dobrý den");

    page.submit("form");

    assert_eq!(errors(&page), vec!["Prosím vyplňte platný email"]);
    assert_eq!(page.element("name").unwrap().style.border_color, None);
    assert_eq!(page.element("email").unwrap().value.as_deref(), Some("a@b"));
    let result = last_result(&page);
    assert_eq!(result.errors().len(), 1);
    assert_eq!(result.first_error().unwrap().field_name, "email");
}

#[test]
fn test_resubmitting_does_not_duplicate_errors() {
    let mut page = form_page(contact_form(true));

    page.submit("form");
    page.submit("form");

    assert_eq!(errors(&page).len(), 3);
}

#[test]
fn test_fixed_field_clears_its_error() {
    let mut page = form_page(contact_form(true));
    page.submit("form");

    page.set_value("name", "Jan");
    page.submit("form");

    assert_eq!(
        errors(&page),
        vec!["Prosím vyplňte platný email", "Prosím vyplňte zprávu"]
    );
    assert_eq!(page.element("name").unwrap().style.border_color, None);
}

#[test]
fn test_missing_field_blocks_submission() {
    let mut page = form_page(contact_form(false));
    fill(&mut page, "Jan", "jan@example.cz", "");

    page.submit("form");

    assert!(page.alerts().is_empty());
    assert!(errors(&page).is_empty());
    let result = last_result(&page);
    assert!(result.is_invalid());
    assert_eq!(result.error_for("message").unwrap().element_id, None);
}

// ============================================================================
// Valid Submission Tests
// ============================================================================

#[test]
fn test_valid_submission_alerts_and_resets() {
    let mut page = form_page(contact_form(true));
    page.submit("form");
    fill(&mut page, "Jan Novák", "jan.novak@example.cz", "Dobrý den");

    let outcome = page.submit("form");

    assert!(outcome.default_prevented);
    assert!(errors(&page).is_empty());
    assert_eq!(
        page.alerts(),
        ["Děkujeme za vaši zprávu! Brzy se vám ozveme."]
    );
    for field in ["name", "email", "message"] {
        let element = page.element(field).unwrap();
        assert_eq!(element.value.as_deref(), Some(""), "{field}");
        assert_eq!(element.style.border_color, None, "{field}");
    }
    assert!(last_result(&page).is_valid());
}

#[test]
fn test_reset_restores_initial_value() {
    let form = Element::form()
        .id("form")
        .class("contact-form")
        .child(Element::input("name").id("name"))
        .child(Element::input("email").id("email"))
        .child(
            Element::textarea("message")
                .id("message")
                .attr("value", "Mám zájem o nemovitost")
                .value("Mám zájem o nemovitost"),
        );
    let mut page = form_page(form);
    fill(&mut page, "Jan", "jan@example.cz", "Jiný text");

    page.submit("form");

    assert_eq!(
        page.element("message").unwrap().value.as_deref(),
        Some("Mám zájem o nemovitost")
    );
}

#[test]
fn test_textarea_text_content_is_not_its_reset_value() {
    let mut message = Element::textarea("message").id("message");
    message.set_text("Výchozí text");
    let form = Element::form()
        .id("form")
        .class("contact-form")
        .child(Element::input("name").id("name"))
        .child(Element::input("email").id("email"))
        .child(message);
    let mut page = form_page(form);
    fill(&mut page, "Jan", "jan@example.cz", "Dobrý den");

    page.submit("form");

    let message = page.element("message").unwrap();
    assert_eq!(message.value.as_deref(), Some(""));
    assert_eq!(message.text_content(), "Výchozí text");
}

// ============================================================================
// Wiring Tests
// ============================================================================

#[test]
fn test_other_forms_are_ignored() {
    let root = Element::body()
        .child(contact_form(true))
        .child(Element::form().id("search"));
    let mut page = Page::new(root).behavior(ContactForm::new(ContactFormConfig::default()).unwrap());
    page.ready();

    let outcome = page.submit("search");

    assert!(!outcome.is_handled());
    assert!(!outcome.default_prevented);
}

#[test]
fn test_page_without_form() {
    let mut page = form_page(Element::div().id("form"));

    assert!(!page.submit("form").is_handled());
    assert_eq!(page.behavior_ref::<ContactForm>().unwrap().form_id(), None);
}
