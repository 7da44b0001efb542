use crate::element::Element;
use crate::event::{Event, Key, Modifiers};

/// Tracks which element is currently focused.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<String>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused element ID.
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Programmatically focus an element by ID.
    /// Returns true if focus changed.
    pub fn focus(&mut self, id: &str) -> bool {
        if self.focused.as_deref() == Some(id) {
            return false;
        }
        self.focused = Some(id.to_string());
        true
    }

    /// Clear focus.
    /// Returns true if there was something focused.
    pub fn blur(&mut self) -> bool {
        self.focused.take().is_some()
    }

    /// Focus the next focusable element (Tab navigation).
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_next(&mut self, root: &Element) -> Option<String> {
        let focusable = collect_focusable(root);
        let first = focusable.first()?;

        let new_focus = match &self.focused {
            None => first.clone(),
            Some(current) => match focusable.iter().position(|id| id == current) {
                Some(i) => focusable[(i + 1) % focusable.len()].clone(),
                None => first.clone(),
            },
        };

        self.apply(new_focus)
    }

    /// Focus the previous focusable element (Shift+Tab navigation).
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_prev(&mut self, root: &Element) -> Option<String> {
        let focusable = collect_focusable(root);
        let last = focusable.last()?;

        let new_focus = match &self.focused {
            None => last.clone(),
            Some(current) => match focusable.iter().position(|id| id == current) {
                Some(0) | None => last.clone(),
                Some(i) => focusable[i - 1].clone(),
            },
        };

        self.apply(new_focus)
    }

    /// Build a key event aimed at the focused element.
    pub fn key_event(&self, key: Key, modifiers: Modifiers) -> Event {
        Event::Key {
            target: self.focused.clone(),
            key,
            modifiers,
        }
    }

    fn apply(&mut self, new_focus: String) -> Option<String> {
        if self.focused.as_ref() != Some(&new_focus) {
            log::trace!("focus -> {new_focus}");
            self.focused = Some(new_focus.clone());
            Some(new_focus)
        } else {
            None
        }
    }
}

/// Collect all focusable element IDs in tree order.
pub fn collect_focusable(element: &Element) -> Vec<String> {
    let mut result = Vec::new();
    collect_focusable_recursive(element, &mut result);
    result
}

fn collect_focusable_recursive(element: &Element, result: &mut Vec<String>) {
    if element.focusable {
        result.push(element.id.clone());
    }
    for child in element.content.children() {
        collect_focusable_recursive(child, result);
    }
}
