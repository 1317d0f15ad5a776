//! Tests for the navigation menu toggle.

use sitedom::{Element, Size};
use sitekit::prelude::*;

fn menu_item(href: &str, label: &str, id: &str) -> Element {
    Element::new("li").child(Element::link(href, label).id(id))
}

fn site(with_menu: bool) -> Element {
    let mut header = Element::new("header").child(
        Element::new("button")
            .id("toggle")
            .class("nav-toggle")
            .child(Element::new("span").id("toggle-icon")),
    );
    if with_menu {
        header = header.child(
            Element::new("ul")
                .id("menu")
                .class("nav-menu")
                .child(menu_item("#about", "O nás", "about-link"))
                .child(menu_item("/kontakt", "Kontakt", "contact-link")),
        );
    }
    Element::body()
        .child(header)
        .child(Element::section().id("about").height(Size::Px(600)))
        .child(Element::link("#about", "Nahoru").id("outside-link"))
}

fn nav_page(with_menu: bool) -> Page {
    let mut page = Page::new(site(with_menu))
        .behavior(NavMenu::new(NavConfig::default()).unwrap())
        .behavior(SmoothScroll::default());
    page.ready();
    page
}

fn is_active(page: &Page, id: &str) -> bool {
    page.element(id).unwrap().has_class("active")
}

// ============================================================================
// Toggle Tests
// ============================================================================

#[test]
fn test_toggle_opens_and_closes_menu() {
    let mut page = nav_page(true);
    assert!(!is_active(&page, "menu"));

    let outcome = page.click("toggle");
    assert_eq!(outcome.handled_by, vec!["nav"]);
    assert!(!outcome.default_prevented);
    assert!(is_active(&page, "menu"));
    assert!(is_active(&page, "toggle"));

    page.click("toggle");
    assert!(!is_active(&page, "menu"));
    assert!(!is_active(&page, "toggle"));
}

#[test]
fn test_click_inside_toggle_counts() {
    let mut page = nav_page(true);
    page.click("toggle-icon");
    assert!(is_active(&page, "menu"));
}

#[test]
fn test_menu_link_closes_menu() {
    let mut page = nav_page(true);
    page.click("toggle");

    page.click("contact-link");

    assert!(!is_active(&page, "menu"));
    assert!(!is_active(&page, "toggle"));
}

#[test]
fn test_fragment_link_in_menu_closes_and_scrolls() {
    let mut page = nav_page(true);
    page.click("toggle");

    let outcome = page.click("about-link");

    assert!(!is_active(&page, "menu"));
    assert_eq!(outcome.handled_by, vec!["nav", "smooth_scroll"]);
    assert!(outcome.default_prevented);
}

#[test]
fn test_link_outside_menu_leaves_it_open() {
    let mut page = nav_page(true);
    page.click("toggle");

    page.click("outside-link");

    assert!(is_active(&page, "menu"));
}

// ============================================================================
// Missing Element Tests
// ============================================================================

#[test]
fn test_missing_menu_disables_toggle() {
    let mut page = nav_page(false);

    let outcome = page.click("toggle");

    assert!(!outcome.is_handled());
    assert!(!is_active(&page, "toggle"));
}

#[test]
fn test_empty_class_is_rejected() {
    let config = NavConfig::new("", "nav-menu");
    assert_eq!(
        NavMenu::new(config).unwrap_err(),
        ConfigError::EmptyClass("toggle")
    );
}
