//! Subject value representation.
//!
//! This module provides the core data structures for the subject a resolver
//! is bound to. A [`Value`] is either a mapping (`Object`), an ordered
//! sequence (`Array`), or a terminal scalar. Objects preserve insertion
//! order, so a subject round-trips through edits without reshuffling keys.
//!
//! Every traversal step in the crate goes through the member capability
//! interface (`member`, `member_mut`, `has_member`, `set_member`,
//! `remove_member`) instead of inspecting variants at the call site. A
//! segment is looked up as a key on objects and as a decimal index on
//! arrays; scalars have no members.
//!
//! # Example
//!
//! ```
//! use objectpath::Value;
//! use indexmap::IndexMap;
//!
//! let mut fields = IndexMap::new();
//! fields.insert("first".to_string(), Value::from("brian"));
//! fields.insert("last".to_string(), Value::from("scaturro"));
//! let mut name = Value::Object(fields);
//!
//! assert_eq!(name.member("first"), Some(&Value::from("brian")));
//!
//! name.set_member("first", Value::from("john"));
//! assert_eq!(name.member("first"), Some(&Value::from("john")));
//! ```

use indexmap::IndexMap;

pub mod convert;

/// A number held by a subject structure (integer or float).
#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) => write!(f, "{}", fl),
        }
    }
}

impl Number {
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    fn is_zero(&self) -> bool {
        match self {
            Number::Integer(i) => *i == 0,
            Number::Float(f) => *f == 0.0,
        }
    }
}

/// A value in a subject structure.
///
/// The variant set is closed: a value is a mapping, a sequence, or one of
/// the terminal scalars. Mappings keep keys unique and in insertion order.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// A mapping of string keys to values
    Object(IndexMap<String, Value>),
    /// An ordered sequence of values
    Array(Vec<Value>),
    /// A string scalar
    String(String),
    /// A numeric scalar
    Number(Number),
    /// A boolean scalar
    Boolean(bool),
    /// The null scalar
    #[default]
    Null,
}

impl Value {
    /// Returns true if this value is an object.
    ///
    /// # Example
    ///
    /// ```
    /// use objectpath::Value;
    /// use indexmap::IndexMap;
    ///
    /// let obj = Value::Object(IndexMap::new());
    /// assert!(obj.is_object());
    /// assert!(!Value::Null.is_object());
    /// ```
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Returns true if this value is an array.
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns true if this value is a container (object or array).
    pub fn is_container(&self) -> bool {
        matches!(self, Value::Object(_) | Value::Array(_))
    }

    /// Returns true if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the contained string if this is a string value.
    ///
    /// # Example
    ///
    /// ```
    /// use objectpath::Value;
    ///
    /// assert_eq!(Value::from("peridot").as_str(), Some("peridot"));
    /// assert_eq!(Value::Boolean(true).as_str(), None);
    /// ```
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the contained bool if this is a boolean value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the numeric value as an f64 if this is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(n.as_f64()),
            _ => None,
        }
    }

    /// Returns the underlying entries if this is an object.
    pub fn as_object(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Object(entries) => Some(entries),
            _ => None,
        }
    }

    /// Returns the underlying elements if this is an array.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns whether this value counts as "present" to [`ObjectPath::get`].
    ///
    /// Null, `false`, numeric zero, the empty string, and empty containers
    /// are falsy; everything else is truthy.
    ///
    /// [`ObjectPath::get`]: crate::ObjectPath::get
    ///
    /// # Example
    ///
    /// ```
    /// use objectpath::Value;
    ///
    /// assert!(Value::from("peridot").is_truthy());
    /// assert!(!Value::from("").is_truthy());
    /// assert!(!Value::from(0).is_truthy());
    /// assert!(!Value::Null.is_truthy());
    /// ```
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Object(entries) => !entries.is_empty(),
            Value::Array(items) => !items.is_empty(),
            Value::String(s) => !s.is_empty(),
            Value::Number(n) => !n.is_zero(),
            Value::Boolean(b) => *b,
            Value::Null => false,
        }
    }

    /// Looks up a member by segment: a key on objects, a decimal index on
    /// arrays. Scalars have no members.
    ///
    /// # Example
    ///
    /// ```
    /// use objectpath::Value;
    ///
    /// let subject = Value::from(serde_json::json!({
    ///     "name": "brian",
    ///     "hobbies": ["programming", "reading"],
    /// }));
    ///
    /// assert_eq!(subject.member("name"), Some(&Value::from("brian")));
    /// let hobbies = subject.member("hobbies").unwrap();
    /// assert_eq!(hobbies.member("1"), Some(&Value::from("reading")));
    /// assert_eq!(subject.member("nickname"), None);
    /// ```
    pub fn member(&self, segment: &str) -> Option<&Value> {
        match self {
            Value::Object(entries) => entries.get(segment),
            Value::Array(items) => parse_index(segment).and_then(|index| items.get(index)),
            _ => None,
        }
    }

    /// Mutable variant of [`member`](Self::member).
    pub fn member_mut(&mut self, segment: &str) -> Option<&mut Value> {
        match self {
            Value::Object(entries) => entries.get_mut(segment),
            Value::Array(items) => parse_index(segment).and_then(|index| items.get_mut(index)),
            _ => None,
        }
    }

    /// Returns true if the segment resolves to an existing member.
    pub fn has_member(&self, segment: &str) -> bool {
        self.member(segment).is_some()
    }

    /// Assigns a member in place.
    ///
    /// On objects the key is inserted or overwritten. On arrays an in-bounds
    /// index is replaced and an index equal to the length appends; any other
    /// index is dropped, matching native indexed-assignment semantics.
    /// Scalars ignore the assignment.
    pub fn set_member(&mut self, segment: &str, value: Value) {
        match self {
            Value::Object(entries) => {
                entries.insert(segment.to_string(), value);
            }
            Value::Array(items) => {
                if let Some(index) = parse_index(segment) {
                    if index < items.len() {
                        items[index] = value;
                    } else if index == items.len() {
                        items.push(value);
                    }
                }
            }
            _ => {}
        }
    }

    /// Removes a member and returns it, if present.
    ///
    /// Object removal preserves the order of the remaining keys; array
    /// removal shifts later elements down.
    pub fn remove_member(&mut self, segment: &str) -> Option<Value> {
        match self {
            Value::Object(entries) => entries.shift_remove(segment),
            Value::Array(items) => match parse_index(segment) {
                Some(index) if index < items.len() => Some(items.remove(index)),
                _ => None,
            },
            _ => None,
        }
    }
}

/// Parses a segment as a sequence index. Only plain decimal digits qualify,
/// so signed forms like `-1` never index an array.
fn parse_index(segment: &str) -> Option<usize> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(Number::Integer(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(Number::Float(value))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Number(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(value: IndexMap<String, Value>) -> Self {
        Value::Object(value)
    }
}
