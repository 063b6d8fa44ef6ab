//! Host lookups for keybindings and translations.
//!
//! The hosting page owns both tables; this crate only asks. "Not found" is a
//! plain `None`, never an error.

use std::sync::Arc;

use compact_str::CompactString;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

// =============================================================================
// Resolver traits
// =============================================================================

/// Resolves a keybinding id (e.g. `key.jump`) to its display name
pub trait KeybindResolver: Send + Sync {
    fn resolve_keybind(&self, key: &str) -> Option<String>;
}

/// Resolves a translation key to its template string
pub trait TranslationResolver: Send + Sync {
    fn resolve_translation(&self, key: &str) -> Option<String>;
}

/// Resolver that never finds anything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLookup;

impl KeybindResolver for NoLookup {
    fn resolve_keybind(&self, _key: &str) -> Option<String> {
        None
    }
}

impl TranslationResolver for NoLookup {
    fn resolve_translation(&self, _key: &str) -> Option<String> {
        None
    }
}

// =============================================================================
// LookupTable
// =============================================================================

/// Non-thread-safe lookup map.
pub type LookupMap = FxHashMap<CompactString, CompactString>;

/// Thread-safe shared key/value table.
///
/// Cloning is cheap and yields a handle to the same table, so the host can keep
/// filling it (e.g. when a language pack finishes loading) after handing it to
/// a constructor. Implements both resolver traits.
#[derive(Debug, Default, Clone)]
pub struct LookupTable {
    inner: Arc<RwLock<LookupMap>>,
}

impl LookupTable {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(self, key: &str, value: &str) -> Self {
        self.insert(key, value);
        self
    }

    /// Execute a closure with read access to the table.
    pub fn with_read<R>(&self, f: impl FnOnce(&LookupMap) -> R) -> R {
        let guard = self.inner.read();
        f(&guard)
    }

    /// Execute a closure with write access to the table.
    pub fn with_write<R>(&self, f: impl FnOnce(&mut LookupMap) -> R) -> R {
        let mut guard = self.inner.write();
        f(&mut guard)
    }

    /// Get a copy of a value.
    pub fn get(&self, key: &str) -> Option<String> {
        self.with_read(|t| t.get(key).map(|v| v.to_string()))
    }

    /// Insert or update an entry.
    pub fn insert(&self, key: &str, value: &str) {
        self.with_write(|t| {
            t.insert(key.into(), value.into());
        });
    }

    /// Insert many entries under one write lock.
    pub fn extend<'a>(&self, entries: impl IntoIterator<Item = (&'a str, &'a str)>) {
        self.with_write(|t| t.extend(entries.into_iter().map(|(k, v)| (k.into(), v.into()))));
    }

    /// Remove an entry, returning its value.
    pub fn remove(&self, key: &str) -> Option<String> {
        self.with_write(|t| t.remove(key).map(|v| v.to_string()))
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.with_read(|t| t.len())
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all entries.
    pub fn clear(&self) {
        self.with_write(|t| t.clear());
    }
}

impl KeybindResolver for LookupTable {
    fn resolve_keybind(&self, key: &str) -> Option<String> {
        self.get(key)
    }
}

impl TranslationResolver for LookupTable {
    fn resolve_translation(&self, key: &str) -> Option<String> {
        self.get(key)
    }
}

// =============================================================================
// HostLookups
// =============================================================================

/// The pair of host lookups a constructor consults
#[derive(Clone)]
pub struct HostLookups {
    pub keybinds: Arc<dyn KeybindResolver>,
    pub translations: Arc<dyn TranslationResolver>,
}

impl HostLookups {
    pub fn new(
        keybinds: impl KeybindResolver + 'static,
        translations: impl TranslationResolver + 'static,
    ) -> Self {
        Self {
            keybinds: Arc::new(keybinds),
            translations: Arc::new(translations),
        }
    }

    /// Lookups that resolve nothing
    pub fn none() -> Self {
        Self::new(NoLookup, NoLookup)
    }

    pub fn keybind(&self, key: &str) -> Option<String> {
        self.keybinds.resolve_keybind(key)
    }

    pub fn translation(&self, key: &str) -> Option<String> {
        self.translations.resolve_translation(key)
    }
}

impl Default for HostLookups {
    fn default() -> Self {
        Self::none()
    }
}

impl std::fmt::Debug for HostLookups {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostLookups").finish_non_exhaustive()
    }
}

// =============================================================================
// Tests
// =============================================================================
