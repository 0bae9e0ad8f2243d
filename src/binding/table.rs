//! The kind → description → method binding table.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::BindingError;
use crate::normalize::normalize_key;

/// A reference to a target method, identified by its declared name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MethodHandle(String);

impl MethodHandle {
    /// Creates a handle for the named method.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The method's declared name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MethodHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One entry of a [`BindingTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding<'a> {
    /// The step kind.
    pub kind: &'a str,
    /// The normalised description.
    pub key: &'a str,
    /// The bound method.
    pub method: &'a MethodHandle,
}

/// Immutable map from step kind and normalised description to method.
///
/// Tables are produced by [`BindingTableBuilder`] and are read-only once
/// built.
#[derive(Debug, Clone, Default)]
pub struct BindingTable {
    target: String,
    entries: BTreeMap<String, BTreeMap<String, MethodHandle>>,
}

impl BindingTable {
    /// Starts an empty table for the named target type.
    #[must_use]
    pub fn builder(target: impl Into<String>) -> BindingTableBuilder {
        BindingTableBuilder {
            table: Self {
                target: target.into(),
                entries: BTreeMap::new(),
            },
        }
    }

    /// The target type name the table was built for.
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Looks up the method bound to `kind` and an already normalised `key`.
    #[must_use]
    pub fn lookup(&self, kind: &str, key: &str) -> Option<&MethodHandle> {
        self.entries.get(kind)?.get(key)
    }

    /// Looks up the method bound to `kind` and a raw description.
    #[must_use]
    pub fn resolve(&self, kind: &str, description: &str) -> Option<&MethodHandle> {
        self.lookup(kind, &normalize_key(description))
    }

    /// The number of (kind, key) bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.values().map(BTreeMap::len).sum()
    }

    /// Whether the table holds no bindings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.values().all(BTreeMap::is_empty)
    }

    /// The step kinds with at least one binding, in sorted order.
    #[must_use]
    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Every binding, sorted by kind and then by key.
    #[must_use]
    pub fn iter(&self) -> impl Iterator<Item = Binding<'_>> {
        self.entries.iter().flat_map(|(kind, keys)| {
            keys.iter().map(move |(key, method)| Binding {
                kind: kind.as_str(),
                key: key.as_str(),
                method,
            })
        })
    }
}

/// Accumulates bindings and enforces one method per (kind, key).
#[derive(Debug)]
pub struct BindingTableBuilder {
    table: BindingTable,
}

/// Result of registering a single binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    /// The binding was new and has been stored.
    Added,
    /// The same method was already bound to the pair.
    AlreadyBound,
}

impl BindingTableBuilder {
    /// Binds `method` to `kind` and the normalised form of `description`.
    ///
    /// Rebinding a pair to the method it already points at is accepted and
    /// changes nothing, which lets one method answer several kinds or
    /// descriptions.
    ///
    /// # Errors
    ///
    /// Returns [`BindingError::DuplicateBinding`] when a different method
    /// already owns the pair.
    pub fn register(
        &mut self,
        kind: &str,
        description: &str,
        method: &MethodHandle,
    ) -> Result<Registration, BindingError> {
        let key = normalize_key(description);
        let keys = self.table.entries.entry(kind.to_owned()).or_default();

        match keys.get(&key) {
            Some(existing) if existing == method => Ok(Registration::AlreadyBound),
            Some(existing) => Err(BindingError::DuplicateBinding {
                target: self.table.target.clone(),
                existing: existing.name().to_owned(),
                duplicate: method.name().to_owned(),
                kind: kind.to_owned(),
                description: description.to_owned(),
            }),
            None => {
                keys.insert(key, method.clone());
                Ok(Registration::Added)
            }
        }
    }

    /// Finishes the table.
    #[must_use]
    pub fn build(self) -> BindingTable {
        self.table
    }
}
