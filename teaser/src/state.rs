use crate::config::Markers;

/// Expand/collapse state of one container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToggleState {
    /// Showing the teaser. The control offers to open.
    #[default]
    Collapsed,
    /// Showing the full text. The control offers to close.
    Expanded,
}

impl ToggleState {
    /// The opposite state.
    pub fn toggled(self) -> Self {
        match self {
            Self::Collapsed => Self::Expanded,
            Self::Expanded => Self::Collapsed,
        }
    }

    /// Presentational class mirrored onto the container.
    pub fn class(self, markers: &Markers) -> &str {
        match self {
            Self::Collapsed => &markers.collapsed,
            Self::Expanded => &markers.expanded,
        }
    }
}
