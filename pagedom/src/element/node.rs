use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;
use crate::types::Size;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    // Identity
    pub id: String,
    /// Marker classes, in insertion order. Duplicates are never stored.
    pub classes: Vec<String>,

    // Content
    pub content: Content,

    // Presentation
    pub width: Size,

    // Interaction
    pub focusable: bool,
    pub clickable: bool,

    // Custom data storage (styling hooks, owner ids, etc.)
    pub data: HashMap<String, String>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            classes: Vec::new(),
            content: Content::None,
            width: Size::Auto,
            focusable: false,
            clickable: false,
            data: HashMap::new(),
        }
    }
}

impl Element {
    pub fn box_() -> Self {
        Self {
            id: generate_id("box"),
            ..Default::default()
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    /// Create an activatable element labelled with `label`.
    pub fn button(label: impl Into<String>) -> Self {
        Self {
            id: generate_id("button"),
            content: Content::Text(label.into()),
            focusable: true,
            clickable: true,
            ..Default::default()
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.add_class(class);
        self
    }

    pub fn classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for class in classes {
            self.add_class(class);
        }
        self
    }

    // Presentation
    pub fn width(mut self, width: Size) -> Self {
        self.width = width;
        self
    }

    // Interaction
    pub fn focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }

    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    // Custom data
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn get_data(&self, key: &str) -> Option<&String> {
        self.data.get(key)
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        self.push_child(child);
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => {
                // Replace content with children
                self.content = Content::Children(new_children.into_iter().collect());
            }
        }
        self
    }

    /// Append a child in place. Text content is replaced by the child.
    pub fn push_child(&mut self, child: Element) {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
    }

    // Classes

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Returns true if the class was added.
    pub fn add_class(&mut self, class: impl Into<String>) -> bool {
        let class = class.into();
        if self.has_class(&class) {
            return false;
        }
        self.classes.push(class);
        true
    }

    /// Returns true if the class was present.
    pub fn remove_class(&mut self, class: &str) -> bool {
        let before = self.classes.len();
        self.classes.retain(|c| c != class);
        self.classes.len() != before
    }

    // Text

    /// Plain text of this element and all descendants, concatenated in order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }

    /// Replace all content with a single text run.
    pub fn set_text_content(&mut self, text: impl Into<String>) {
        self.content = Content::Text(text.into());
    }

    /// The first child element. Text content has no element children.
    pub fn first_child(&self) -> Option<&Element> {
        self.content.children().first()
    }
}

fn collect_text(element: &Element, out: &mut String) {
    match &element.content {
        Content::None => {}
        Content::Text(text) => out.push_str(text),
        Content::Children(children) => {
            for child in children {
                collect_text(child, out);
            }
        }
    }
}
