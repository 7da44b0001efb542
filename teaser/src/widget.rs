//! The read-more toggle widget.

use std::collections::HashMap;

use log::{debug, trace, warn};
use pagedom::{Element, Event, Key, MouseButton, Size};

use crate::config::TeaserConfig;
use crate::document::{Document, NodeId};
use crate::error::{Result, TeaserError};
use crate::state::ToggleState;
use crate::truncate::{is_eligible, teaser_text};

/// Data key on a control naming the container it toggles.
pub const CONTAINER_DATA_KEY: &str = "data-container";

/// The three elements of one read-more region, resolved during discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerHandle {
    /// Element carrying the container marker.
    pub container: NodeId,
    /// Descendant carrying the text-host marker.
    pub text_host: NodeId,
    /// First child element of the text host. Its text is what gets truncated.
    pub display: NodeId,
}

/// Find and validate every marked container, in document order.
///
/// Nothing is mutated. A container without a text host, or a text host
/// without a child element, fails the whole discovery.
pub fn discover<D: Document + ?Sized>(
    doc: &D,
    config: &TeaserConfig,
) -> Result<Vec<ContainerHandle>> {
    let markers = &config.markers;

    doc.query_class(&markers.container)
        .into_iter()
        .map(|container| -> Result<ContainerHandle> {
            let text_host = doc
                .find_descendant_with_class(&container, &markers.text_host)
                .ok_or_else(|| TeaserError::MalformedContainer {
                    container: container.clone(),
                    reason: format!("no '{}' element inside", markers.text_host),
                })?;
            let display = doc.first_child_element(&text_host).ok_or_else(|| {
                TeaserError::MalformedContainer {
                    container: container.clone(),
                    reason: format!("text host '{text_host}' has no child element"),
                }
            })?;

            Ok(ContainerHandle {
                container,
                text_host,
                display,
            })
        })
        .collect()
}

/// Check discovered handles against each other before anything is written.
///
/// Repeated containers keep their first handle. A handle whose container or
/// display lies inside another handle's display is dropped: its text belongs
/// to that outer display and would be replaced along with it.
fn resolve<D: Document + ?Sized>(
    doc: &D,
    handles: Vec<ContainerHandle>,
) -> Result<Vec<ContainerHandle>> {
    let mut unique: Vec<ContainerHandle> = Vec::with_capacity(handles.len());
    for handle in handles {
        if unique.iter().any(|seen| seen.container == handle.container) {
            warn!("Container '{}' discovered twice, ignoring repeat", handle.container);
            continue;
        }
        if !doc.contains(&handle.container, &handle.display) {
            return Err(TeaserError::MalformedContainer {
                container: handle.container,
                reason: format!("display '{}' is not inside the container", handle.display),
            });
        }
        unique.push(handle);
    }

    let nested: Vec<bool> = unique
        .iter()
        .map(|inner| {
            unique.iter().any(|outer| {
                outer.container != inner.container
                    && (doc.contains(&outer.display, &inner.container)
                        || doc.contains(&outer.display, &inner.display))
            })
        })
        .collect();

    Ok(unique
        .into_iter()
        .zip(nested)
        .filter_map(|(handle, nested)| {
            if nested {
                debug!(
                    "Container '{}' sits inside another teaser's text, skipped",
                    handle.container
                );
                None
            } else {
                Some(handle)
            }
        })
        .collect())
}

#[derive(Debug)]
struct ManagedContainer {
    handle: ContainerHandle,
    full_text: String,
    state: ToggleState,
    control: Option<NodeId>,
}

/// Truncates read-more containers and switches them between teaser and full
/// text.
///
/// Each container's state lives here, never in the document: the classes and
/// labels written to the document only mirror it.
#[derive(Debug)]
pub struct TeaserToggle {
    config: TeaserConfig,
    containers: Vec<ManagedContainer>,
    /// Control ID -> index into `containers`.
    controls: HashMap<NodeId, usize>,
}

impl TeaserToggle {
    /// Validate `config`, discover containers in `doc` and initialize them.
    pub fn new<D: Document + ?Sized>(doc: &mut D, config: TeaserConfig) -> Result<Self> {
        Self::with_discovery(doc, config, discover)
    }

    /// Shorthand for [`TeaserToggle::new`] with default settings apart from
    /// the labels.
    pub fn with_labels<D: Document + ?Sized>(
        doc: &mut D,
        open_label: impl Into<String>,
        close_label: impl Into<String>,
    ) -> Result<Self> {
        Self::new(doc, TeaserConfig::new(open_label, close_label))
    }

    /// Like [`TeaserToggle::new`] but with a caller-supplied discovery step.
    pub fn with_discovery<D, F>(doc: &mut D, config: TeaserConfig, discover: F) -> Result<Self>
    where
        D: Document + ?Sized,
        F: FnOnce(&D, &TeaserConfig) -> Result<Vec<ContainerHandle>>,
    {
        config.validate()?;
        let handles = resolve(&*doc, discover(&*doc, &config)?)?;
        debug!("Discovered {} read-more containers", handles.len());

        // Capture every full text before the first mutation.
        let mut pending = Vec::with_capacity(handles.len());
        for handle in handles {
            let full_text = doc
                .text_content(&handle.display)
                .ok_or_else(|| TeaserError::MissingElement(handle.display.clone()))?;
            pending.push((handle, full_text));
        }

        let mut widget = Self {
            config,
            containers: Vec::with_capacity(pending.len()),
            controls: HashMap::new(),
        };
        for (handle, full_text) in pending {
            widget.initialize(doc, handle, full_text)?;
        }

        Ok(widget)
    }

    fn initialize<D: Document + ?Sized>(
        &mut self,
        doc: &mut D,
        handle: ContainerHandle,
        full_text: String,
    ) -> Result<()> {
        let markers = &self.config.markers;
        let container = handle.container.clone();
        ensure(doc.add_class(&container, &markers.collapsed), &container)?;
        doc.remove_class(&container, &markers.expanded);

        let mut control = None;
        if is_eligible(&full_text, self.config.teaser_length) {
            let teaser = self.teaser_for(&full_text);
            ensure(doc.set_text_content(&handle.display, &teaser), &handle.display)?;

            let button = Element::button(self.config.open_label.as_str())
                .classes(markers.control.iter().cloned())
                .width(Size::Fill)
                .data("style", "width: 100%")
                .data(CONTAINER_DATA_KEY, container.as_str());
            let id = doc
                .append_child(&container, button)
                .ok_or_else(|| TeaserError::MissingElement(container.clone()))?;

            debug!("Container '{container}': teaser applied, control '{id}'");
            self.controls.insert(id.clone(), self.containers.len());
            control = Some(id);
        } else {
            debug!("Container '{container}': text fits, left as is");
        }

        self.containers.push(ManagedContainer {
            handle,
            full_text,
            state: ToggleState::Collapsed,
            control,
        });
        Ok(())
    }

    /// Switch `container` to the other state. Returns the new state.
    pub fn toggle<D: Document + ?Sized>(
        &mut self,
        doc: &mut D,
        container: &str,
    ) -> Result<ToggleState> {
        let index = self.toggleable(container)?;
        self.toggle_index(doc, index)
    }

    /// Show the full text of `container`.
    pub fn expand<D: Document + ?Sized>(&mut self, doc: &mut D, container: &str) -> Result<()> {
        let index = self.toggleable(container)?;
        self.apply(doc, index, ToggleState::Expanded)
    }

    /// Show the teaser of `container`.
    pub fn collapse<D: Document + ?Sized>(&mut self, doc: &mut D, container: &str) -> Result<()> {
        let index = self.toggleable(container)?;
        self.apply(doc, index, ToggleState::Collapsed)
    }

    /// Route an input event to the control it targets.
    ///
    /// A left click, Enter or Space on a control toggles its container and
    /// returns `true`. Every other event is ignored and returns `false`.
    pub fn handle_event<D: Document + ?Sized>(
        &mut self,
        doc: &mut D,
        event: &Event,
    ) -> Result<bool> {
        let activates = match event {
            Event::Click { button, .. } => *button == MouseButton::Left,
            Event::Key { key, modifiers, .. } => {
                modifiers.none() && matches!(key, Key::Enter | Key::Char(' '))
            }
        };

        let Some(target) = event.target() else {
            return Ok(false);
        };
        let Some(&index) = self.controls.get(target) else {
            trace!("Event target '{target}' is not a read-more control");
            return Ok(false);
        };
        if !activates {
            return Ok(false);
        }

        self.toggle_index(doc, index)?;
        Ok(true)
    }

    /// Managed containers in document order, eligible or not.
    pub fn containers(&self) -> impl Iterator<Item = &ContainerHandle> {
        self.containers.iter().map(|managed| &managed.handle)
    }

    pub fn is_managed(&self, container: &str) -> bool {
        self.find(container).is_some()
    }

    pub fn state(&self, container: &str) -> Option<ToggleState> {
        self.find(container).map(|index| self.containers[index].state)
    }

    /// ID of the control injected into `container`, if it was eligible.
    pub fn control_id(&self, container: &str) -> Option<&str> {
        self.find(container)
            .and_then(|index| self.containers[index].control.as_deref())
    }

    /// Text captured from `container` at initialization.
    pub fn full_text(&self, container: &str) -> Option<&str> {
        self.find(container)
            .map(|index| self.containers[index].full_text.as_str())
    }

    pub fn config(&self) -> &TeaserConfig {
        &self.config
    }

    fn find(&self, container: &str) -> Option<usize> {
        self.containers
            .iter()
            .position(|managed| managed.handle.container == container)
    }

    fn toggleable(&self, container: &str) -> Result<usize> {
        self.find(container)
            .filter(|&index| self.containers[index].control.is_some())
            .ok_or_else(|| {
                warn!("'{container}' has no read-more control");
                TeaserError::UnknownContainer(container.to_string())
            })
    }

    fn toggle_index<D: Document + ?Sized>(
        &mut self,
        doc: &mut D,
        index: usize,
    ) -> Result<ToggleState> {
        let next = self.containers[index].state.toggled();
        self.apply(doc, index, next)?;
        Ok(next)
    }

    fn apply<D: Document + ?Sized>(
        &mut self,
        doc: &mut D,
        index: usize,
        state: ToggleState,
    ) -> Result<()> {
        let managed = &self.containers[index];
        let Some(control) = managed.control.as_deref() else {
            return Err(TeaserError::UnknownContainer(
                managed.handle.container.clone(),
            ));
        };

        // The teaser is recomputed from the captured text on every collapse.
        let (text, label) = match state {
            ToggleState::Expanded => (managed.full_text.clone(), &self.config.close_label),
            ToggleState::Collapsed => (
                self.teaser_for(&managed.full_text),
                &self.config.open_label,
            ),
        };

        let handle = &managed.handle;
        let markers = &self.config.markers;
        trace!("Container '{}' -> {:?}", handle.container, state);

        // Every target must be present before the first write, so a failure
        // leaves text, label and classes as they were.
        for node in [handle.display.as_str(), control, handle.container.as_str()] {
            ensure(doc.exists(node), node)?;
        }

        ensure(doc.set_text_content(&handle.display, &text), &handle.display)?;
        ensure(doc.set_text_content(control, label), control)?;
        ensure(
            doc.remove_class(&handle.container, state.toggled().class(markers)),
            &handle.container,
        )?;
        ensure(
            doc.add_class(&handle.container, state.class(markers)),
            &handle.container,
        )?;

        self.containers[index].state = state;
        Ok(())
    }

    fn teaser_for(&self, full_text: &str) -> String {
        teaser_text(full_text, self.config.teaser_length, &self.config.ellipsis)
    }
}

fn ensure(found: bool, node: &str) -> Result<()> {
    if found {
        Ok(())
    } else {
        Err(TeaserError::MissingElement(node.to_string()))
    }
}
