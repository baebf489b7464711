//! Path-based addressing into nested, heterogeneous data structures.
//!
//! A path expression such as `name->first` or `projects[php][0]` identifies
//! a location in a structure of mappings and sequences, without the caller
//! knowing ahead of time whether each step is a key or an index. An
//! [`ObjectPath`] bound to a subject resolves such expressions to read,
//! write, or remove the value at that location, in place.
//!
//! The contract is deliberately permissive: paths are normalized rather
//! than validated, unresolvable reads are `None`, and mutations through
//! missing containers are silent no-ops - nothing auto-vivifies and nothing
//! raises.
//!
//! # Example
//!
//! ```
//! use objectpath::{ObjectPath, Value};
//!
//! let mut person = Value::from(serde_json::json!({
//!     "name": {"first": "brian", "last": "scaturro"},
//!     "projects": {
//!         "php": ["peridot", "leo"],
//!         "coffeescript": ["alerts", "pressbox"],
//!     },
//! }));
//!
//! let mut path = ObjectPath::new(&mut person);
//!
//! let peridot = path.get("projects[php][0]").unwrap();
//! assert_eq!(peridot.value(), &Value::from("peridot"));
//!
//! path.write("name->first", "john");
//! path.delete("name->last");
//! drop(path);
//!
//! // Mutations land in the caller's original value.
//! assert_eq!(
//!     person.member("name").and_then(|name| name.member("first")),
//!     Some(&Value::from("john")),
//! );
//! ```

pub mod path;
pub mod resolver;
pub mod value;

pub use path::Path;
pub use resolver::{ObjectPath, ResolvedValue};
pub use value::{Number, Value};
