//! JSON-Lite - a single-pass parser for a restricted object notation.
//!
//! JSON-Lite text is a brace-delimited mapping whose keys are quoted
//! strings and whose values are either quoted strings or nested objects of
//! the same kind. There are no arrays, numbers, booleans or null literals,
//! and escape sequences are carried through verbatim rather than decoded.
//! Structural characters (`{` `}` `:` `,`) inside a quoted span are plain
//! content and never influence the scan.
//!
//! # Architecture
//!
//! - [`object`] - the Object/Value tree the parser produces
//! - [`parser`] - state-machine recursive-descent parser (over an
//!   internal byte cursor)
//! - [`canon`] - canonical text form
//! - [`error`] - classified parse errors
//!
//! # Example
//!
//! ```
//! use json_lite::parse;
//!
//! let obj = parse(r#"{ "name": { "first": "sam", "last": "doe" } }"#).unwrap();
//! let name = obj.get_object("name").unwrap();
//! assert_eq!(name.get_string("first"), Some("sam"));
//! assert_eq!(name.get_string("age"), None);
//! ```
//!
//! Parsing is a pure, synchronous transformation: no I/O, no shared state,
//! no partial results on error. Recursion depth equals the nesting depth
//! of the input; no explicit depth limit is imposed, so call-stack size is
//! the practical bound on pathologically deep documents.

// Library code must not panic; every failure is a classified error.
// Tests are checked separately with `cargo test`.
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

pub mod canon;
pub mod error;
pub mod object;
pub mod parser;
mod scanner;

// Re-export the public surface
pub use canon::{canonicalize, is_canonical};
pub use error::{ParseError, ParseResult};
pub use object::{Object, Value};
pub use parser::parse;
