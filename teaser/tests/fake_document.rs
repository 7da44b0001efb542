//! Drives the widget through a flat, hand-rolled `Document` to make sure it
//! relies on nothing beyond the trait.

use std::collections::BTreeMap;

use pagedom::Element;
use teaser::{Document, NodeId, TeaserConfig, TeaserError, TeaserToggle, ToggleState};

#[derive(Debug, Default)]
struct Node {
    classes: Vec<String>,
    text: String,
    children: Vec<NodeId>,
}

/// Nodes keyed by ID. `order` is document order; children lists hold IDs.
#[derive(Debug, Default)]
struct FlatDocument {
    nodes: BTreeMap<NodeId, Node>,
    order: Vec<NodeId>,
    appended: Vec<(NodeId, Element)>,
}

impl FlatDocument {
    fn add(&mut self, id: &str, parent: Option<&str>, classes: &[&str], text: &str) {
        self.nodes.insert(
            id.to_string(),
            Node {
                classes: classes.iter().map(|c| c.to_string()).collect(),
                text: text.to_string(),
                children: Vec::new(),
            },
        );
        self.order.push(id.to_string());
        if let Some(parent) = parent {
            self.nodes
                .get_mut(parent)
                .unwrap()
                .children
                .push(id.to_string());
        }
    }

    fn region(&mut self, id: &str, text: &str) {
        self.add(id, None, &["read-more"], "");
        self.add(&format!("{id}-host"), Some(id), &["read-more-teaser"], "");
        self.add(&format!("{id}-p"), Some(&format!("{id}-host")), &[], text);
    }

    fn text(&self, id: &str) -> &str {
        &self.nodes[id].text
    }

    fn descendants(&self, id: &str) -> Vec<NodeId> {
        let mut out = Vec::new();
        let children = self.nodes.get(id).map(|n| n.children.as_slice()).unwrap_or_default();
        for child in children {
            out.push(child.clone());
            out.extend(self.descendants(child));
        }
        out
    }
}

impl Document for FlatDocument {
    fn query_class(&self, class: &str) -> Vec<NodeId> {
        self.order
            .iter()
            .filter(|id| self.has_class(id, class))
            .cloned()
            .collect()
    }

    fn find_descendant_with_class(&self, node: &str, class: &str) -> Option<NodeId> {
        self.nodes.get(node)?;
        self.descendants(node)
            .into_iter()
            .find(|id| self.has_class(id, class))
    }

    fn first_child_element(&self, node: &str) -> Option<NodeId> {
        self.nodes.get(node)?.children.first().cloned()
    }

    fn text_content(&self, node: &str) -> Option<String> {
        self.nodes.get(node).map(|n| n.text.clone())
    }

    fn set_text_content(&mut self, node: &str, text: &str) -> bool {
        match self.nodes.get_mut(node) {
            Some(n) => {
                n.text = text.to_string();
                true
            }
            None => false,
        }
    }

    fn has_class(&self, node: &str, class: &str) -> bool {
        self.nodes
            .get(node)
            .is_some_and(|n| n.classes.iter().any(|c| c == class))
    }

    fn add_class(&mut self, node: &str, class: &str) -> bool {
        let Some(n) = self.nodes.get_mut(node) else {
            return false;
        };
        if !n.classes.iter().any(|c| c == class) {
            n.classes.push(class.to_string());
        }
        true
    }

    fn remove_class(&mut self, node: &str, class: &str) -> bool {
        let Some(n) = self.nodes.get_mut(node) else {
            return false;
        };
        n.classes.retain(|c| c != class);
        true
    }

    fn append_child(&mut self, parent: &str, child: Element) -> Option<NodeId> {
        self.nodes.get(parent)?;
        let id = child.id.clone();
        let classes: Vec<&str> = child.classes.iter().map(String::as_str).collect();
        let label = child.text_content();
        self.add(&id, Some(parent), &classes, &label);
        self.appended.push((parent.to_string(), child));
        Some(id)
    }

    fn contains(&self, ancestor: &str, node: &str) -> bool {
        if !self.nodes.contains_key(ancestor) {
            return false;
        }
        ancestor == node || self.descendants(ancestor).iter().any(|id| id == node)
    }
}

#[test]
fn test_widget_runs_on_any_document() {
    let mut doc = FlatDocument::default();
    doc.region("long", &"L".repeat(30));
    doc.region("short", "tiny");

    let config = TeaserConfig::new("More", "Less").teaser_length(10);
    let mut widget = TeaserToggle::new(&mut doc, config).unwrap();

    assert_eq!(doc.text("long-p"), format!("{}…", "L".repeat(10)));
    assert_eq!(doc.text("short-p"), "tiny");
    assert_eq!(doc.appended.len(), 1);
    assert_eq!(doc.appended[0].0, "long");

    let control = widget.control_id("long").unwrap().to_string();
    assert_eq!(doc.text(&control), "More");

    assert_eq!(widget.toggle(&mut doc, "long"), Ok(ToggleState::Expanded));
    assert_eq!(doc.text("long-p"), "L".repeat(30));
    assert_eq!(doc.text(&control), "Less");
    assert!(doc.has_class("long", "expanded"));
    assert!(!doc.has_class("long", "collapsed"));
}

#[test]
fn test_malformed_region_in_fake_document() {
    let mut doc = FlatDocument::default();
    doc.add("orphan", None, &["read-more"], "no host at all");

    let err = TeaserToggle::new(&mut doc, TeaserConfig::default()).unwrap_err();
    assert!(matches!(err, TeaserError::MalformedContainer { .. }));
    assert!(!doc.has_class("orphan", "collapsed"));
}

#[test]
fn test_missing_control_checked_before_writes() {
    let mut doc = FlatDocument::default();
    doc.region("a", &"A".repeat(30));

    let config = TeaserConfig::new("More", "Less").teaser_length(10);
    let mut widget = TeaserToggle::new(&mut doc, config).unwrap();
    let control = widget.control_id("a").unwrap().to_string();
    doc.nodes.remove(&control);

    assert_eq!(
        widget.toggle(&mut doc, "a"),
        Err(TeaserError::MissingElement(control))
    );
    assert_eq!(doc.text("a-p"), format!("{}…", "A".repeat(10)));
    assert!(doc.has_class("a", "collapsed"));
    assert_eq!(widget.state("a"), Some(ToggleState::Collapsed));
}
