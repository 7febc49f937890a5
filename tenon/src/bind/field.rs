//! Field descriptors driving the binder.

use super::slot::Slot;

/// Describes one bindable field: where to look, what to fall back to,
/// and the destination slot.
///
/// Built in declaration order by [`Bindable::fields`](super::Bindable);
/// usually through the [`bindable!`](crate::bindable) macro rather than
/// by hand.
///
/// # Examples
///
/// ```
/// use tenon::bind::{AsSlot, Field};
///
/// let mut port: u16 = 0;
/// let field = Field::new("server", "port", port.as_slot()).with_default("80");
/// assert_eq!(field.section(), "server");
/// assert_eq!(field.key(), "port");
/// ```
pub struct Field<'a> {
    pub(crate) section: &'a str,
    pub(crate) key: &'a str,
    pub(crate) default: Option<&'a str>,
    pub(crate) code_points: bool,
    pub(crate) slot: Slot<'a>,
}

impl<'a> Field<'a> {
    /// Creates a descriptor with no default and decimal semantics.
    #[must_use]
    pub fn new(section: &'a str, key: &'a str, slot: Slot<'a>) -> Self {
        Self {
            section,
            key,
            default: None,
            code_points: false,
            slot,
        }
    }

    /// Sets the default literal consulted when the lookup fails.
    #[must_use]
    pub fn with_default(mut self, literal: &'a str) -> Self {
        self.default = Some(literal);
        self
    }

    /// Switches signed-integer and list destinations to code-point
    /// semantics: the value's first Unicode scalar value is taken
    /// instead of a parsed decimal literal.
    #[must_use]
    pub fn code_points(mut self) -> Self {
        self.code_points = true;
        self
    }

    /// The section this field reads from.
    #[must_use]
    pub fn section(&self) -> &str {
        self.section
    }

    /// The key this field reads.
    #[must_use]
    pub fn key(&self) -> &str {
        self.key
    }

    /// The default literal, if any.
    #[must_use]
    pub fn default(&self) -> Option<&str> {
        self.default
    }
}
