mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    for child in root.content.children() {
        if let Some(found) = find_element(child, id) {
            return Some(found);
        }
    }

    None
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &mut root.content {
        for child in children {
            if let Some(found) = find_element_mut(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Collect the IDs of every element carrying `class`, in document order.
/// The root itself is included when it matches.
pub fn query_class(root: &Element, class: &str) -> Vec<String> {
    let mut result = Vec::new();
    collect_class(root, class, &mut result);
    result
}

fn collect_class(element: &Element, class: &str, result: &mut Vec<String>) {
    if element.has_class(class) {
        result.push(element.id.clone());
    }

    for child in element.content.children() {
        collect_class(child, class, result);
    }
}

/// Find the first strict descendant of `element` carrying `class` (depth-first,
/// document order).
pub fn find_descendant_with_class<'a>(element: &'a Element, class: &str) -> Option<&'a Element> {
    for child in element.content.children() {
        if child.has_class(class) {
            return Some(child);
        }
        if let Some(found) = find_descendant_with_class(child, class) {
            return Some(found);
        }
    }

    None
}
