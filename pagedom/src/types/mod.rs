mod enums;

pub use enums::Size;
