//! Read-more teasers for pagedom documents.
//!
//! [`TeaserToggle`] finds every container marked `read-more`, cuts the text
//! in its `read-more-teaser` host down to a configurable number of
//! characters, and appends a control that switches between the teaser and the
//! full text.
//!
//! ```
//! use pagedom::{Element, Event};
//! use teaser::{TeaserConfig, TeaserToggle, ToggleState};
//!
//! let mut page = Element::box_().child(
//!     Element::box_().id("intro").class("read-more").child(
//!         Element::box_()
//!             .class("read-more-teaser")
//!             .child(Element::text("A rather long introduction.")),
//!     ),
//! );
//!
//! let config = TeaserConfig::new("Read More", "Close").teaser_length(8);
//! let mut widget = TeaserToggle::new(&mut page, config)?;
//! assert_eq!(widget.state("intro"), Some(ToggleState::Collapsed));
//!
//! let control = widget.control_id("intro").unwrap().to_string();
//! widget.handle_event(&mut page, &Event::click(control))?;
//! assert_eq!(widget.state("intro"), Some(ToggleState::Expanded));
//! # Ok::<(), teaser::TeaserError>(())
//! ```

pub mod config;
pub mod document;
pub mod error;
pub mod state;
pub mod truncate;
pub mod widget;

pub use config::{Markers, TeaserConfig, DEFAULT_TEASER_LENGTH};
pub use document::{Document, NodeId};
pub use error::{Result, TeaserError};
pub use state::ToggleState;
pub use widget::{discover, ContainerHandle, TeaserToggle, CONTAINER_DATA_KEY};
