#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # tenon
//!
//! A library for parsing INI-style configuration text and binding it
//! onto plain structs.
//!
//! Documents are line-oriented: `[section]` headers group `key = value`
//! assignments, `#` starts a comment, and the reserved `[default]`
//! section supplies fallback values consulted whenever a key is missing
//! from the section that was asked. Typed lookups live on
//! [`ConfigParser`]; declarative struct population goes through the
//! [`bindable!`] macro and [`bind`].
//!
//! ## Core Types
//!
//! - [`ConfigParser`]: parsed document with layered, typed lookups
//! - [`Section`] and [`Dict`]: the underlying model
//! - [`Bindable`] and [`Field`]: struct binding descriptors
//! - [`Error`] and [`Result`]: error handling types
//!
//! ## Examples
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
//! let parser: ConfigParser = "\
//! [server]
//! host = localhost
//! port = 8080
//! "
//! .parse()
//! .unwrap();
//!
//! let mut server = Server::default();
//! tenon::bind(&parser, &mut server);
//!
//! assert_eq!(server.host, "localhost");
//! assert_eq!(server.port, 8080);
//! assert_eq!(server.timeout, 30);
//! ```

pub mod agent;
pub mod bind;
pub mod collections;
pub mod duration;
pub mod error;
pub mod logging;
pub mod model;
pub mod parser;
pub mod scan;
pub mod text;

mod macros;

// Re-export key types at crate root for convenience
pub use bind::{bind, bind_bytes, bind_file, bind_str, Bindable, Field, Slot};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel};
pub use model::{Dict, Section, SectionMap, DEFAULT_SECTION};
pub use parser::{ConfigParser, RawValue};
