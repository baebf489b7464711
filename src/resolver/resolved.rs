//! Successful resolution result.

use crate::value::Value;

/// The outcome of a successful [`get`](crate::ObjectPath::get): the final
/// segment name paired with a read-view of the value found there.
///
/// The name is owned because auto-digging can replace it with a key from
/// deeper in the subject; the value stays a shared borrow, so a resolved
/// value can never mutate the structure it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedValue<'a> {
    name: String,
    value: &'a Value,
}

impl<'a> ResolvedValue<'a> {
    pub(crate) fn new(name: String, value: &'a Value) -> Self {
        Self { name, value }
    }

    /// The name of the resolved property - the final path segment, or the
    /// key auto-digging stopped at.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The resolved value.
    pub fn value(&self) -> &'a Value {
        self.value
    }
}
