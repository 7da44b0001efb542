#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Size {
    Fixed(u16),
    /// Take the full width of the parent.
    Fill,
    #[default]
    Auto,
}
