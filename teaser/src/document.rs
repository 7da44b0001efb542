//! The document seam.
//!
//! The widget never walks a concrete tree itself. Everything it needs from
//! the host page goes through [`Document`], with elements named by string IDs.

use pagedom::{find_descendant_with_class, find_element, find_element_mut, query_class, Element};

/// Handle to an element in a [`Document`].
pub type NodeId = String;

/// The operations the widget performs on a host document.
///
/// Mutators return `false` when `node` is not in the document.
pub trait Document {
    /// IDs of every element carrying `class`, in document order.
    fn query_class(&self, class: &str) -> Vec<NodeId>;

    /// First strict descendant of `node` carrying `class`.
    fn find_descendant_with_class(&self, node: &str, class: &str) -> Option<NodeId>;

    /// First child element of `node`.
    fn first_child_element(&self, node: &str) -> Option<NodeId>;

    /// Plain text of `node` and its descendants.
    fn text_content(&self, node: &str) -> Option<String>;

    /// Replace the content of `node` with a single text run.
    fn set_text_content(&mut self, node: &str, text: &str) -> bool;

    fn has_class(&self, node: &str, class: &str) -> bool;

    fn add_class(&mut self, node: &str, class: &str) -> bool;

    fn remove_class(&mut self, node: &str, class: &str) -> bool;

    /// Append `child` as the last child of `parent`, returning the child's ID.
    fn append_child(&mut self, parent: &str, child: Element) -> Option<NodeId>;

    /// True when `node` is `ancestor` or lies somewhere beneath it.
    fn contains(&self, ancestor: &str, node: &str) -> bool;

    fn exists(&self, node: &str) -> bool {
        self.contains(node, node)
    }
}

/// A pagedom tree is a document rooted at this element.
impl Document for Element {
    fn query_class(&self, class: &str) -> Vec<NodeId> {
        query_class(self, class)
    }

    fn find_descendant_with_class(&self, node: &str, class: &str) -> Option<NodeId> {
        let element = find_element(self, node)?;
        find_descendant_with_class(element, class).map(|found| found.id.clone())
    }

    fn first_child_element(&self, node: &str) -> Option<NodeId> {
        find_element(self, node)?
            .first_child()
            .map(|child| child.id.clone())
    }

    fn text_content(&self, node: &str) -> Option<String> {
        find_element(self, node).map(Element::text_content)
    }

    fn set_text_content(&mut self, node: &str, text: &str) -> bool {
        match find_element_mut(self, node) {
            Some(element) => {
                element.set_text_content(text);
                true
            }
            None => false,
        }
    }

    fn has_class(&self, node: &str, class: &str) -> bool {
        find_element(self, node).is_some_and(|element| element.has_class(class))
    }

    fn add_class(&mut self, node: &str, class: &str) -> bool {
        match find_element_mut(self, node) {
            Some(element) => {
                element.add_class(class);
                true
            }
            None => false,
        }
    }

    fn remove_class(&mut self, node: &str, class: &str) -> bool {
        match find_element_mut(self, node) {
            Some(element) => {
                element.remove_class(class);
                true
            }
            None => false,
        }
    }

    fn append_child(&mut self, parent: &str, child: Element) -> Option<NodeId> {
        let parent = find_element_mut(self, parent)?;
        let id = child.id.clone();
        parent.push_child(child);
        Some(id)
    }

    fn contains(&self, ancestor: &str, node: &str) -> bool {
        find_element(self, ancestor).is_some_and(|element| find_element(element, node).is_some())
    }
}
