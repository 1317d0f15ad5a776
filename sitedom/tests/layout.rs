use sitedom::{Display, Edges, Element, FlowLayout, LayoutMetrics, Measure, Rect, Size, Style};

fn layout_root(root: &Element, width: u32) -> std::collections::HashMap<String, Rect> {
    sitedom::layout::layout(root, width, &LayoutMetrics::default())
}

// ============================================================================
// Block Flow Tests
// ============================================================================

#[test]
fn test_children_stack_vertically() {
    let root = Element::body()
        .id("root")
        .child(Element::div().id("a").height(Size::Px(50)))
        .child(Element::div().id("b").height(Size::Px(30)));

    let layout = layout_root(&root, 400);

    assert_eq!(layout.get("a"), Some(&Rect::new(0, 0, 400, 50)));
    assert_eq!(layout.get("b"), Some(&Rect::new(0, 50, 400, 30)));
    assert_eq!(layout.get("root").unwrap().height, 80);
}

#[test]
fn test_margin_and_padding() {
    let root = Element::body()
        .id("root")
        .padding(Edges::all(10))
        .child(
            Element::div()
                .id("child")
                .height(Size::Px(20))
                .margin(Edges::new(5, 0, 5, 0)),
        );

    let layout = layout_root(&root, 200);
    let child = layout.get("child").unwrap();

    assert_eq!(child.x, 10, "padding left");
    assert_eq!(child.y, 15, "padding top + margin top");
    assert_eq!(child.width, 180);
    assert_eq!(layout.get("root").unwrap().height, 50, "10 + 5 + 20 + 5 + 10");
}

#[test]
fn test_text_wraps_by_words() {
    // 80px wide at 8px per column = 10 columns
    let root = Element::body()
        .id("root")
        .child(Element::text("aaaa bbbb cccc dddd").id("p"));

    let layout = layout_root(&root, 80);

    assert_eq!(layout.get("p").unwrap().height, 40, "two lines of 20px");
}

#[test]
fn test_empty_text_takes_no_space() {
    let root = Element::body().id("root").child(Element::text("   ").id("p"));

    let layout = layout_root(&root, 80);

    assert_eq!(layout.get("p").unwrap().height, 0);
}

#[test]
fn test_max_height_clamps() {
    let root = Element::body().id("root").child(
        Element::div()
            .id("clip")
            .max_height(100)
            .child(Element::div().height(Size::Px(300))),
    );

    let layout = layout_root(&root, 400);

    assert_eq!(layout.get("clip").unwrap().height, 100);
    assert_eq!(layout.get("root").unwrap().height, 100);
}

#[test]
fn test_hidden_subtree_has_no_boxes() {
    let root = Element::body().id("root").child(
        Element::div()
            .id("hidden")
            .style(Style::new().display(Display::None))
            .child(Element::div().id("inner").height(Size::Px(40))),
    );

    let layout = layout_root(&root, 400);

    assert!(layout.get("hidden").is_none());
    assert!(layout.get("inner").is_none());
    assert_eq!(layout.get("root").unwrap().height, 0);
}

// ============================================================================
// Measure Tests
// ============================================================================

#[test]
fn test_natural_height_ignores_own_constraints() {
    let root = Element::body().id("root").child(
        Element::div()
            .id("block")
            .max_height(120)
            .height(Size::Px(50))
            .padding(Edges::symmetric(5, 0))
            .child(Element::div().height(Size::Px(300))),
    );
    let host = FlowLayout::new(400);

    assert_eq!(host.natural_height(&root, "block"), 310);
    assert_eq!(host.rendered_height(&root, "block"), 50);
}

#[test]
fn test_natural_height_keeps_descendant_constraints() {
    let root = Element::body().id("root").child(
        Element::div()
            .id("block")
            .child(Element::div().max_height(40).child(Element::div().height(Size::Px(300)))),
    );
    let host = FlowLayout::new(400);

    assert_eq!(host.natural_height(&root, "block"), 40);
}

#[test]
fn test_natural_height_of_detached_element_is_zero() {
    let root = Element::body().id("root");
    let host = FlowLayout::new(400);

    assert_eq!(host.natural_height(&root, "missing"), 0);
    assert_eq!(host.rendered_height(&root, "missing"), 0);
    assert!(host.element_rect(&root, "missing").is_none());
}

#[test]
fn test_natural_height_of_hidden_element_is_zero() {
    let root = Element::body().id("root").child(
        Element::div()
            .style(Style::new().display(Display::None))
            .child(Element::text("long text ".repeat(50)).id("p")),
    );
    let host = FlowLayout::new(400);

    assert_eq!(host.natural_height(&root, "p"), 0);
}

#[test]
fn test_narrower_viewport_grows_text() {
    let root = Element::body()
        .id("root")
        .child(Element::text("word ".repeat(40)).id("p"));
    let mut host = FlowLayout::new(800);
    let wide = host.natural_height(&root, "p");

    host.set_viewport_width(200);
    let narrow = host.natural_height(&root, "p");

    assert!(narrow > wide, "{narrow} should exceed {wide}");
}

#[test]
fn test_document_height() {
    let root = Element::body()
        .id("root")
        .child(Element::div().height(Size::Px(700)))
        .child(Element::div().height(Size::Px(300)));
    let host = FlowLayout::new(400);

    assert_eq!(host.document_height(&root), 1000);
}
