//! Path-bound resolver over a subject structure.

use crate::path::Path;
use crate::value::Value;

use super::resolved::ResolvedValue;

/// Resolves path expressions against a single subject structure.
///
/// A resolver is bound to one subject for its whole lifetime and holds a
/// non-owning mutable borrow of it, so every write and delete lands in the
/// caller's original value. Each operation is independent; the resolver
/// keeps no state beyond the binding.
///
/// Absence is never an error: reads of unresolvable paths return `None`,
/// and writes or deletes through missing containers silently do nothing.
///
/// # Example
///
/// ```
/// use objectpath::{ObjectPath, Value};
///
/// let mut person = Value::from(serde_json::json!({
///     "name": {"first": "brian", "last": "scaturro"},
///     "hobbies": ["programming", "reading", "board games"],
/// }));
///
/// let mut path = ObjectPath::new(&mut person);
///
/// assert_eq!(path.read("name->first"), Some(&Value::from("brian")));
/// assert_eq!(path.read("hobbies[0]"), Some(&Value::from("programming")));
///
/// path.write("name->first", "john");
/// assert_eq!(path.read("name->first"), Some(&Value::from("john")));
///
/// path.delete("hobbies[1]");
/// assert_eq!(path.read("hobbies[1]"), Some(&Value::from("board games")));
/// ```
pub struct ObjectPath<'s> {
    subject: &'s mut Value,
}

impl<'s> ObjectPath<'s> {
    /// Binds a resolver to a subject.
    pub fn new(subject: &'s mut Value) -> Self {
        Self { subject }
    }

    /// Resolves a path to the value at its final segment, auto-digging
    /// through single-entry wrapper mappings.
    ///
    /// After the final segment resolves, any chain of mappings holding
    /// exactly one entry is transparently descended, and the resolved name
    /// follows the keys down. A falsy result (null, `false`, zero, the
    /// empty string, an empty container) reads as not found - use
    /// [`read`](Self::read) when that distinction matters.
    ///
    /// # Example
    ///
    /// ```
    /// use objectpath::{ObjectPath, Value};
    ///
    /// let mut person = Value::from(serde_json::json!({
    ///     "name": {"origin": {"country": "Ireland"}},
    /// }));
    /// let path = ObjectPath::new(&mut person);
    ///
    /// // `origin` holds a single entry, so the resolution digs through it.
    /// let origin = path.get("name->origin").unwrap();
    /// assert_eq!(origin.name(), "country");
    /// assert_eq!(origin.value(), &Value::from("Ireland"));
    /// ```
    pub fn get(&self, path: impl Into<Path>) -> Option<ResolvedValue<'_>> {
        let path = path.into();
        let (parents, last) = path.split_last()?;
        let container = descend(self.subject, parents)?;

        let mut name = last.to_string();
        let mut value = container.member(last)?;

        // Nested single-property wrappers are dug out.
        while let Value::Object(entries) = value {
            match entries.first() {
                Some((key, child)) if entries.len() == 1 => {
                    name = key.clone();
                    value = child;
                }
                _ => break,
            }
        }

        if !value.is_truthy() {
            return None;
        }

        Some(ResolvedValue::new(name, value))
    }

    /// Resolves a path to the raw value at its final segment.
    ///
    /// Unlike [`get`](Self::get) there is no auto-digging and no falsiness
    /// suppression: a stored `false`, `0`, or empty container comes back as
    /// `Some`. `None` means the path did not resolve.
    pub fn read(&self, path: impl Into<Path>) -> Option<&Value> {
        let path = path.into();
        let (parents, last) = path.split_last()?;
        descend(self.subject, parents)?.member(last)
    }

    /// Assigns a value at the path, in place.
    ///
    /// The containers along the path must already exist: a missing
    /// intermediate drops the write entirely - nothing is created and
    /// nothing is partially mutated. When the container resolves, a mapping
    /// key is inserted or overwritten; a sequence index is replaced
    /// in-bounds or appended at the length.
    pub fn write(&mut self, path: impl Into<Path>, value: impl Into<Value>) {
        let path = path.into();
        let Some((parents, last)) = path.split_last() else {
            return;
        };
        if let Some(container) = descend_mut(self.subject, parents) {
            container.set_member(last, value.into());
        }
    }

    /// Removes the value at the path, in place.
    ///
    /// A path that does not resolve is a no-op. Removing the last entry of
    /// a mapping leaves the now-empty mapping in place; ancestors are never
    /// cascaded.
    pub fn delete(&mut self, path: impl Into<Path>) {
        let path = path.into();
        let Some((parents, last)) = path.split_last() else {
            return;
        };
        if let Some(container) = descend_mut(self.subject, parents) {
            container.remove_member(last);
        }
    }

    /// Returns the bound subject.
    pub fn root(&self) -> &Value {
        self.subject
    }

    /// Returns the bound subject mutably.
    pub fn root_mut(&mut self) -> &mut Value {
        self.subject
    }
}

/// Walks the container path, one member lookup per segment. Any miss -
/// absent key, bad index, scalar in the middle - yields `None`, and every
/// caller treats `None` as absent rather than an error. Never mutates and
/// never creates intermediate structure.
fn descend<'v>(root: &'v Value, segments: &[String]) -> Option<&'v Value> {
    let mut current = root;
    for segment in segments {
        current = current.member(segment)?;
    }
    Some(current)
}

/// Mutable twin of [`descend`], used by the mutating operations to reach
/// the container their final segment acts on.
fn descend_mut<'v>(root: &'v mut Value, segments: &[String]) -> Option<&'v mut Value> {
    let mut current = root;
    for segment in segments {
        current = current.member_mut(segment)?;
    }
    Some(current)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subject() -> Value {
        Value::from(serde_json::json!({
            "name": {"first": "brian", "last": "scaturro"},
            "projects": {
                "php": ["peridot", "leo"],
                "coffeescript": ["alerts", "pressbox"],
            },
        }))
    }

    #[test]
    fn test_get_digs_single_entry_wrappers_repeatedly() {
        let mut value = Value::from(serde_json::json!({
            "a": {"b": {"c": {"d": "deep"}}},
        }));
        let path = ObjectPath::new(&mut value);

        let resolved = path.get("a").unwrap();
        assert_eq!(resolved.name(), "d");
        assert_eq!(resolved.value(), &Value::from("deep"));
    }

    #[test]
    fn test_get_stops_digging_at_multi_entry_mapping() {
        let mut value = subject();
        let path = ObjectPath::new(&mut value);

        let resolved = path.get("name").unwrap();
        assert_eq!(resolved.name(), "name");
        assert!(resolved.value().is_object());
    }

    #[test]
    fn test_empty_expression_resolves_nothing() {
        let mut value = subject();
        let mut path = ObjectPath::new(&mut value);

        assert!(path.get("").is_none());
        assert!(path.read("").is_none());
        path.write("", "ignored");
        path.delete("");
        assert_eq!(*path.root(), subject());
    }

    #[test]
    fn test_descend_rejects_scalar_in_the_middle() {
        let mut value = subject();
        let path = ObjectPath::new(&mut value);

        assert!(path.read("name->first->deeper").is_none());
    }

    #[test]
    fn test_root_exposes_binding() {
        let mut value = subject();
        let mut path = ObjectPath::new(&mut value);

        assert!(path.root().is_object());
        *path.root_mut() = Value::Null;
        assert!(path.root().is_null());
    }
}
