pub mod element;
pub mod event;
pub mod focus;
pub mod types;

pub use element::{
    find_descendant_with_class, find_element, find_element_mut, query_class, Content, Element,
};
pub use event::{Event, Key, Modifiers, MouseButton};
pub use focus::{collect_focusable, FocusState};
pub use types::*;
