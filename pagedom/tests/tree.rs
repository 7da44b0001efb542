use pagedom::{
    find_descendant_with_class, find_element, find_element_mut, query_class, Content, Element,
    Size,
};

fn page() -> Element {
    Element::box_()
        .id("root")
        .child(
            Element::box_()
                .id("a")
                .class("read-more")
                .child(
                    Element::box_()
                        .id("a-host")
                        .class("teaser")
                        .child(Element::text("Alpha").id("a-text")),
                ),
        )
        .child(
            Element::box_()
                .id("b")
                .class("read-more")
                .child(Element::text("Beta").id("b-text")),
        )
}

// ============================================================================
// Queries
// ============================================================================

#[test]
fn test_find_element() {
    let root = page();

    assert_eq!(find_element(&root, "a-text").map(|e| e.id.as_str()), Some("a-text"));
    assert_eq!(find_element(&root, "root").map(|e| e.id.as_str()), Some("root"));
    assert!(find_element(&root, "missing").is_none());
}

#[test]
fn test_find_element_mut_edits_in_place() {
    let mut root = page();

    let text = find_element_mut(&mut root, "b-text").unwrap();
    text.set_text_content("Gamma");

    assert_eq!(find_element(&root, "b-text").unwrap().text_content(), "Gamma");
}

#[test]
fn test_query_class_document_order() {
    let root = page();
    assert_eq!(query_class(&root, "read-more"), vec!["a", "b"]);
    assert!(query_class(&root, "nope").is_empty());
}

#[test]
fn test_query_class_includes_root() {
    let root = Element::box_().id("r").class("x").child(Element::box_().id("c").class("x"));
    assert_eq!(query_class(&root, "x"), vec!["r", "c"]);
}

#[test]
fn test_find_descendant_with_class() {
    let root = page();
    let a = find_element(&root, "a").unwrap();
    let b = find_element(&root, "b").unwrap();

    assert_eq!(
        find_descendant_with_class(a, "teaser").map(|e| e.id.as_str()),
        Some("a-host")
    );
    assert!(find_descendant_with_class(b, "teaser").is_none());
    // Strict descendants only
    assert!(find_descendant_with_class(a, "read-more").is_none());
}

// ============================================================================
// Classes
// ============================================================================

#[test]
fn test_classes_deduplicate() {
    let mut el = Element::box_().classes(["btn", "primary", "btn"]);
    assert_eq!(el.classes, vec!["btn", "primary"]);

    assert!(!el.add_class("primary"));
    assert!(el.add_class("wide"));
    assert!(el.remove_class("btn"));
    assert!(!el.remove_class("btn"));
    assert_eq!(el.classes, vec!["primary", "wide"]);
}

// ============================================================================
// Text
// ============================================================================

#[test]
fn test_text_content_concatenates_descendants() {
    let el = Element::box_()
        .child(Element::text("Hello, "))
        .child(Element::box_().child(Element::text("world")))
        .child(Element::box_());

    assert_eq!(el.text_content(), "Hello, world");
}

#[test]
fn test_set_text_content_replaces_children() {
    let mut el = Element::box_().child(Element::text("a")).child(Element::text("b"));
    el.set_text_content("plain");

    assert_eq!(el.content, Content::Text("plain".into()));
    assert!(el.first_child().is_none());
}

#[test]
fn test_push_child_replaces_text() {
    let mut el = Element::text("label");
    el.push_child(Element::text("inner").id("inner"));

    assert_eq!(el.first_child().map(|c| c.id.as_str()), Some("inner"));
}

#[test]
fn test_button_defaults() {
    let btn = Element::button("Go").width(Size::Fill).data("role", "toggle");

    assert!(btn.clickable);
    assert!(btn.focusable);
    assert!(btn.id.starts_with("button-"));
    assert_eq!(btn.width, Size::Fill);
    assert_eq!(btn.get_data("role").map(String::as_str), Some("toggle"));
    assert_eq!(btn.text_content(), "Go");

    let plain = Element::text("link").clickable(true).width(Size::Fixed(12));
    assert!(plain.clickable);
    assert!(!plain.focusable);
    assert!(!plain.clone().focusable(true).focusable(false).focusable);
}
