//! Widget configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TeaserError};

/// Default number of characters kept in a teaser.
pub const DEFAULT_TEASER_LENGTH: usize = 100;

/// Labels, teaser length and markup conventions for a [`TeaserToggle`](crate::TeaserToggle).
///
/// The widget takes its own copy at construction; there is no way to change
/// it afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeaserConfig {
    /// Control label while collapsed (the action on offer is "open").
    pub open_label: String,

    /// Control label while expanded.
    pub close_label: String,

    /// Characters of full text kept in the teaser. Must be positive.
    pub teaser_length: usize,

    /// Appended to the cut text. Counted in characters like the text itself.
    pub ellipsis: String,

    /// Class names the widget looks for and applies.
    pub markers: Markers,
}

impl Default for TeaserConfig {
    fn default() -> Self {
        Self {
            open_label: "Read More".into(),
            close_label: "Close".into(),
            teaser_length: DEFAULT_TEASER_LENGTH,
            ellipsis: "…".into(),
            markers: Markers::default(),
        }
    }
}

impl TeaserConfig {
    /// Create a config with the given labels and the default teaser length.
    pub fn new(open_label: impl Into<String>, close_label: impl Into<String>) -> Self {
        Self {
            open_label: open_label.into(),
            close_label: close_label.into(),
            ..Default::default()
        }
    }

    /// Set the teaser length.
    pub fn teaser_length(mut self, length: usize) -> Self {
        self.teaser_length = length;
        self
    }

    /// Set the ellipsis appended to teasers.
    pub fn ellipsis(mut self, ellipsis: impl Into<String>) -> Self {
        self.ellipsis = ellipsis.into();
        self
    }

    /// Set the markup conventions.
    pub fn markers(mut self, markers: Markers) -> Self {
        self.markers = markers;
        self
    }

    /// Reject configurations that would produce degenerate teasers or
    /// unmatchable markup.
    pub fn validate(&self) -> Result<()> {
        if self.teaser_length == 0 {
            return Err(invalid("teaser_length", "must be greater than zero"));
        }
        self.markers.validate()
    }
}

/// Markup conventions: which classes mark containers and text hosts, and
/// which classes the widget writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Markers {
    /// Marks a read-more container.
    pub container: String,
    /// Marks the text host nested in a container.
    pub text_host: String,
    /// Applied to every injected control (styling hooks).
    pub control: Vec<String>,
    /// Container class while collapsed.
    pub collapsed: String,
    /// Container class while expanded.
    pub expanded: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            container: "read-more".into(),
            text_host: "read-more-teaser".into(),
            control: vec!["btn".into(), "read-more-btn".into()],
            collapsed: "collapsed".into(),
            expanded: "expanded".into(),
        }
    }
}

impl Markers {
    fn validate(&self) -> Result<()> {
        let required = [
            ("markers.container", &self.container),
            ("markers.text_host", &self.text_host),
            ("markers.collapsed", &self.collapsed),
            ("markers.expanded", &self.expanded),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(invalid(field, "must not be empty"));
            }
        }

        if self.collapsed == self.expanded {
            return Err(invalid(
                "markers.expanded",
                "must differ from markers.collapsed",
            ));
        }
        if self.container == self.text_host {
            return Err(invalid(
                "markers.text_host",
                "must differ from markers.container",
            ));
        }

        Ok(())
    }
}

fn invalid(field: &'static str, reason: &str) -> TeaserError {
    TeaserError::InvalidConfiguration {
        field,
        reason: reason.to_string(),
    }
}
