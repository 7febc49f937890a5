//! Binding parsed configuration onto structs.
//!
//! A target type implements [`Bindable`] — usually through the
//! [`bindable!`](crate::bindable) macro — to describe its fields as
//! [`Field`] descriptors in declaration order. [`bind`] walks the
//! descriptors and applies one rule per field kind:
//!
//! | Kind | On lookup success | On lookup/conversion failure |
//! |------|-------------------|------------------------------|
//! | string | assign | assign non-empty default literal, else untouched |
//! | signed/unsigned integer | assign (zero included) | assign default if it parses, else untouched |
//! | integer with [`Field::code_points`] | assign first code point unless it is zero | untouched (default not consulted) |
//! | float / complex | assign (zero included) | assign default if it parses, else untouched |
//! | bool | assign | assign default if it is a recognized word, else untouched |
//! | char | assign first code point unless it is zero | untouched (default not consulted) |
//! | `Option` of scalar | materialized to `Some(zero)`, then the scalar rule runs on the contents | same — the `Option` still becomes `Some` |
//! | `Vec` of element | replace when at least one entry parses | untouched (no default fallback) |
//!
//! Every per-field failure is absorbed locally; once a parser exists,
//! binding cannot fail. Nested composite fields have no slot
//! representation and are simply never listed.
//!
//! # Examples
//!
//! ```
//! use tenon::{bindable, ConfigParser};
//!
//! #[derive(Default)]
//! struct Server {
//!     host: String,
//!     port: i64,
//!     timeout: i64,
//! }
//!
//! bindable! {
//!     Server {
//!         host: ("server", "host"),
//!         port: ("server", "port", default = "80"),
//!         timeout: ("server", "timeout", default = "30"),
//!     }
//! }
//!
//! let parser: ConfigParser = "[server]\nhost = localhost\nport = 8080\n"
//!     .parse()
//!     .unwrap();
//! let mut server = Server::default();
//! tenon::bind(&parser, &mut server);
//!
//! assert_eq!(server.host, "localhost");
//! assert_eq!(server.port, 8080);
//! assert_eq!(server.timeout, 30);
//! ```

mod field;
mod resolve;
mod slot;

pub use field::Field;
pub use slot::{
    AsSlot, ComplexSlot, FloatSlot, ListSlot, OptionalSlot, Scalar, SignedSlot, Slot,
    UnsignedSlot,
};

use std::path::Path;

use crate::error::Result;
use crate::parser::ConfigParser;

/// A type whose fields can be populated from parsed configuration.
///
/// Implementations return one [`Field`] per bindable field, in
/// declaration order. Prefer the [`bindable!`](crate::bindable) macro
/// over writing this by hand.
pub trait Bindable {
    /// Returns the field descriptors for this target.
    fn fields(&mut self) -> Vec<Field<'_>>;
}

/// Populates `target` from an existing parser.
///
/// Fields whose lookups fail keep their prior values; see the
/// [module documentation](self) for the per-kind rules. Binding takes
/// the target by unique reference, so passing anything else is a
/// compile error rather than a runtime one:
///
/// ```compile_fail
/// use tenon::{bindable, ConfigParser};
///
/// #[derive(Default)]
/// struct App {
///     name: String,
/// }
///
/// bindable! {
///     App {
///         name: ("app", "name"),
///     }
/// }
///
/// let parser = ConfigParser::new();
/// let app = App::default();
/// tenon::bind(&parser, &app); // not a `&mut App`
/// ```
pub fn bind<T: Bindable>(parser: &ConfigParser, target: &mut T) {
    for field in target.fields() {
        resolve::resolve(parser, field);
    }
}

/// Parses `text` and binds it onto `target`.
///
/// # Errors
///
/// Returns a parse error for a structurally invalid document; binding
/// itself cannot fail.
pub fn bind_str<T: Bindable>(text: &str, target: &mut T) -> Result<()> {
    let parser: ConfigParser = text.parse()?;
    bind(&parser, target);
    Ok(())
}

/// Parses a byte buffer and binds it onto `target`.
///
/// # Errors
///
/// Returns a parse error for a structurally invalid document.
pub fn bind_bytes<T: Bindable>(bytes: &[u8], target: &mut T) -> Result<()> {
    let parser = ConfigParser::from_bytes(bytes)?;
    bind(&parser, target);
    Ok(())
}

/// Parses the file at `path` and binds it onto `target`.
///
/// # Errors
///
/// Returns an I/O or parse error; binding itself cannot fail.
pub fn bind_file<T: Bindable>(path: impl AsRef<Path>, target: &mut T) -> Result<()> {
    let parser = ConfigParser::from_file(path)?;
    bind(&parser, target);
    Ok(())
}
