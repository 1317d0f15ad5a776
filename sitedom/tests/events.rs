use sitedom::{click_target, hit_test, hit_test_any, Element, Event, Key, LayoutResult, Modifiers, Rect};

fn create_layout(elements: &[(&str, Rect)]) -> LayoutResult {
    let mut layout = LayoutResult::new();
    for (id, rect) in elements {
        layout.insert(id.to_string(), *rect);
    }
    layout
}

// ============================================================================
// Hit Testing
// ============================================================================

#[test]
fn test_hit_test_point_inside() {
    let root = Element::body()
        .id("root")
        .clickable(true)
        .child(Element::button("Click me").id("btn"));

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 100, 50)),
        ("btn", Rect::new(10, 10, 30, 20)),
    ]);

    assert_eq!(hit_test(&layout, &root, 15, 11), Some("btn".to_string()));
    assert_eq!(hit_test(&layout, &root, 5, 5), Some("root".to_string()));
    assert_eq!(hit_test(&layout, &root, 150, 150), None);
}

#[test]
fn test_hit_test_later_children_on_top() {
    let root = Element::body()
        .id("root")
        .child(Element::div().id("bottom").clickable(true))
        .child(Element::div().id("top").clickable(true));

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 100, 100)),
        ("bottom", Rect::new(10, 10, 50, 50)),
        ("top", Rect::new(30, 30, 50, 50)),
    ]);

    assert_eq!(hit_test(&layout, &root, 40, 40), Some("top".to_string()));
    assert_eq!(hit_test(&layout, &root, 15, 15), Some("bottom".to_string()));
}

#[test]
fn test_hit_test_only_clickable() {
    let root = Element::body()
        .id("root")
        .child(Element::text("Not clickable").id("text"));

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 100, 50)),
        ("text", Rect::new(10, 10, 30, 20)),
    ]);

    assert_eq!(hit_test(&layout, &root, 15, 11), None);
    assert_eq!(hit_test_any(&layout, &root, 15, 11), Some("text".to_string()));
}

#[test]
fn test_hidden_elements_are_not_hit() {
    let root = Element::body()
        .id("root")
        .child(
            Element::button("Zavřít")
                .id("close")
                .style(sitedom::Style::new().display(sitedom::Display::None)),
        );
    let layout = sitedom::FlowLayout::new(400).layout(&root);

    assert_eq!(hit_test(&layout, &root, 5, 5), None);
    assert_eq!(hit_test_any(&layout, &root, 5, 5), None);
}

#[test]
fn test_click_target_falls_back_to_any_element() {
    let root = Element::body()
        .id("root")
        .child(
            Element::link("#kontakt", "")
                .id("link")
                .child(Element::text("Kontakt").id("inner")),
        )
        .child(Element::text("Plain").id("plain"));
    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 100, 40)),
        ("link", Rect::new(0, 0, 100, 20)),
        ("inner", Rect::new(0, 0, 100, 20)),
        ("plain", Rect::new(0, 20, 100, 20)),
    ]);

    assert_eq!(click_target(&layout, &root, 5, 5), Some("link".to_string()));
    assert_eq!(click_target(&layout, &root, 5, 25), Some("plain".to_string()));
    assert_eq!(click_target(&layout, &root, 5, 99), None);
}

#[test]
fn test_hit_test_uses_flow_layout() {
    let root = Element::body()
        .id("root")
        .child(Element::div().id("spacer").height(sitedom::Size::Px(100)))
        .child(Element::link("#contact", "Contact").id("link"));
    let layout = sitedom::FlowLayout::new(400).layout(&root);

    assert_eq!(hit_test(&layout, &root, 5, 105), Some("link".to_string()));
    assert_eq!(hit_test(&layout, &root, 5, 50), None);
}

// ============================================================================
// Event Construction
// ============================================================================

#[test]
fn test_event_helpers() {
    assert_eq!(
        Event::click("btn"),
        Event::Click {
            target: "btn".to_string()
        }
    );
    assert_eq!(
        Event::key(Key::Escape),
        Event::Key {
            key: Key::Escape,
            modifiers: Modifiers::new()
        }
    );
    assert!(Modifiers::new().none());
    assert!(!Modifiers::shift().none());
}
