//! Typed destinations for bound fields.
//!
//! [`Slot`] is the closed set of field kinds the binder understands.
//! Small store traits erase the concrete width of integer, float, and
//! complex destinations, so the dispatch in the resolver stays a single
//! match over kinds rather than a match per primitive type.

use num_complex::{Complex32, Complex64};

use crate::parser::{ConfigParser, RawValue};

/// A borrowed destination for one field of a binding target.
///
/// Composite (nested struct) fields are deliberately absent: they have
/// no slot representation and are skipped by never being listed.
pub enum Slot<'a> {
    /// A string field, assigned verbatim.
    Str(&'a mut String),
    /// A signed integer field of any width.
    Int(&'a mut dyn SignedSlot),
    /// An unsigned integer field of any width.
    Uint(&'a mut dyn UnsignedSlot),
    /// A float field of any width.
    Float(&'a mut dyn FloatSlot),
    /// A complex field of any width.
    Complex(&'a mut dyn ComplexSlot),
    /// A boolean field.
    Bool(&'a mut bool),
    /// A single-code-point field.
    Char(&'a mut char),
    /// An `Option` wrapping any scalar slot; materialized before use.
    Optional(&'a mut dyn OptionalSlot),
    /// A `Vec` of list-parseable elements.
    List(&'a mut dyn ListSlot),
}

/// Stores an `i64` into a signed integer field, truncating to its width.
pub trait SignedSlot {
    /// Writes the value, truncating as with an `as` cast.
    fn store(&mut self, value: i64);
}

/// Stores a `u64` into an unsigned integer field, truncating to its width.
pub trait UnsignedSlot {
    /// Writes the value, truncating as with an `as` cast.
    fn store(&mut self, value: u64);
}

/// Stores an `f64` into a float field of any width.
pub trait FloatSlot {
    /// Writes the value, narrowing as with an `as` cast.
    fn store(&mut self, value: f64);
}

/// Stores a `Complex64` into a complex field of any width.
pub trait ComplexSlot {
    /// Writes the value, narrowing each component as needed.
    fn store(&mut self, value: Complex64);
}

/// An `Option` field whose contained scalar can be bound in place.
///
/// Materializing allocates the zero value inside the `Option` (when not
/// already present) and hands back the inner slot; the resolver then
/// applies the ordinary scalar rule to it. The `Option` therefore ends
/// up `Some` even when every lookup for the field fails.
pub trait OptionalSlot {
    /// Ensures the contained value exists and returns its slot.
    fn materialize(&mut self) -> Slot<'_>;
}

/// A `Vec` field fillable from the comma-separated list grammar.
pub trait ListSlot {
    /// Replaces the vector with the parsed list for `(section, key)`.
    ///
    /// Returns false — leaving the vector untouched — when the lookup
    /// fails or when no entry survives parsing.
    fn fill_from(
        &mut self,
        parser: &ConfigParser,
        section: &str,
        key: &str,
        code_points: bool,
    ) -> bool;
}

/// A scalar type with a direct [`Slot`] representation.
///
/// Implemented for the leaf types only; `Option` and `Vec` are handled
/// by their own wrappers, which keeps `Option<Option<_>>`,
/// `Option<Vec<_>>`, and nested composites unbindable by construction.
pub trait Scalar {
    /// Returns the slot viewing this value.
    fn slot(&mut self) -> Slot<'_>;
}

/// Conversion from a struct field to its binding slot.
///
/// This is the entry point the [`bindable!`](crate::bindable) macro
/// uses; it is implemented for every scalar, for `Option` of a scalar,
/// and for `Vec` of a list-parseable element type.
pub trait AsSlot {
    /// Returns the slot viewing this field.
    fn as_slot(&mut self) -> Slot<'_>;
}

macro_rules! scalar_slots {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            impl Scalar for $ty {
                fn slot(&mut self) -> Slot<'_> {
                    Slot::$variant(self)
                }
            }

            impl AsSlot for $ty {
                fn as_slot(&mut self) -> Slot<'_> {
                    Scalar::slot(self)
                }
            }
        )+
    };
}

scalar_slots!(
    String => Str,
    bool => Bool,
    char => Char,
);

macro_rules! store_slots {
    ($trait_name:ident, $variant:ident, $value:ty, $($ty:ty),+ $(,)?) => {
        $(
            impl $trait_name for $ty {
                #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
                #[allow(clippy::cast_sign_loss, clippy::cast_precision_loss)]
                #[allow(clippy::unnecessary_cast)]
                fn store(&mut self, value: $value) {
                    *self = value as $ty;
                }
            }

            impl Scalar for $ty {
                fn slot(&mut self) -> Slot<'_> {
                    Slot::$variant(self)
                }
            }

            impl AsSlot for $ty {
                fn as_slot(&mut self) -> Slot<'_> {
                    Scalar::slot(self)
                }
            }
        )+
    };
}

store_slots!(SignedSlot, Int, i64, i8, i16, i32, i64, isize);
store_slots!(UnsignedSlot, Uint, u64, u8, u16, u32, u64, usize);
store_slots!(FloatSlot, Float, f64, f32, f64);

impl ComplexSlot for Complex64 {
    fn store(&mut self, value: Complex64) {
        *self = value;
    }
}

impl ComplexSlot for Complex32 {
    #[allow(clippy::cast_possible_truncation)]
    fn store(&mut self, value: Complex64) {
        *self = Complex32::new(value.re as f32, value.im as f32);
    }
}

impl Scalar for Complex64 {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Complex(self)
    }
}

impl Scalar for Complex32 {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Complex(self)
    }
}

impl AsSlot for Complex64 {
    fn as_slot(&mut self) -> Slot<'_> {
        Scalar::slot(self)
    }
}

impl AsSlot for Complex32 {
    fn as_slot(&mut self) -> Slot<'_> {
        Scalar::slot(self)
    }
}

impl<T: Scalar + Default> OptionalSlot for Option<T> {
    fn materialize(&mut self) -> Slot<'_> {
        self.get_or_insert_with(T::default).slot()
    }
}

impl<T: Scalar + Default> AsSlot for Option<T> {
    fn as_slot(&mut self) -> Slot<'_> {
        Slot::Optional(self)
    }
}

impl<T: RawValue> ListSlot for Vec<T> {
    fn fill_from(
        &mut self,
        parser: &ConfigParser,
        section: &str,
        key: &str,
        code_points: bool,
    ) -> bool {
        match parser.get_list::<T>(section, key, code_points) {
            Ok(items) if !items.is_empty() => {
                *self = items;
                true
            }
            _ => false,
        }
    }
}

impl<T: RawValue> AsSlot for Vec<T> {
    fn as_slot(&mut self) -> Slot<'_> {
        Slot::List(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_store_truncates() {
        let mut small: i8 = 0;
        SignedSlot::store(&mut small, 300);
        assert_eq!(small, 300i64 as i8);

        let mut wide: i64 = 0;
        SignedSlot::store(&mut wide, -42);
        assert_eq!(wide, -42);
    }

    #[test]
    fn test_unsigned_store() {
        let mut value: u16 = 0;
        UnsignedSlot::store(&mut value, 8080);
        assert_eq!(value, 8080);
    }

    #[test]
    fn test_float_store_narrows() {
        let mut value: f32 = 0.0;
        FloatSlot::store(&mut value, 1.5);
        assert!((value - 1.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_complex_store_narrows() {
        let mut value = Complex32::new(0.0, 0.0);
        ComplexSlot::store(&mut value, Complex64::new(1.0, -2.0));
        assert_eq!(value, Complex32::new(1.0, -2.0));
    }

    #[test]
    fn test_optional_materializes_zero() {
        let mut value: Option<i64> = None;
        let slot = value.materialize();
        assert!(matches!(slot, Slot::Int(_)));
        assert_eq!(value, Some(0));
    }

    #[test]
    fn test_optional_keeps_existing_value() {
        let mut value: Option<i64> = Some(7);
        match value.materialize() {
            Slot::Int(slot) => slot.store(9),
            _ => panic!("expected an integer slot"),
        }
        assert_eq!(value, Some(9));
    }

    #[test]
    fn test_list_fill_leaves_vec_on_failure() {
        let parser = ConfigParser::new();
        let mut items: Vec<i64> = vec![1, 2];
        let filled = items.fill_from(&parser, "s", "k", false);
        assert!(!filled);
        assert_eq!(items, vec![1, 2]);
    }
}
