//! Lock-guarded containers for shared configuration state.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

#[derive(Debug)]
struct SafeMapInner<K, V> {
    values: HashMap<K, V>,
    order: Vec<K>,
}

/// A mutex-guarded map that remembers insertion order.
///
/// All operations lock internally, so a `SafeMap` can be shared across
/// threads behind an `Arc` without further coordination. Reads hand out
/// clones, never references into the guarded state.
///
/// # Examples
///
/// ```
/// use tenon::collections::SafeMap;
///
/// let map = SafeMap::new();
/// map.insert("b", 2);
/// map.insert("a", 1);
///
/// assert_eq!(map.get(&"a"), Some(1));
/// assert_eq!(map.keys(), vec!["b", "a"]);
/// ```
#[derive(Debug)]
pub struct SafeMap<K, V> {
    inner: Mutex<SafeMapInner<K, V>>,
}

impl<K, V> SafeMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(SafeMapInner {
                values: HashMap::new(),
                order: Vec::new(),
            }),
        }
    }

    /// Inserts a value, keeping the key's original position when it is
    /// already present.
    pub fn insert(&self, key: K, value: V) {
        let mut inner = self.inner.lock();
        if inner.values.insert(key.clone(), value).is_none() {
            inner.order.push(key);
        }
    }

    /// Returns a clone of the value for `key`.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<V> {
        self.inner.lock().values.get(key).cloned()
    }

    /// Removes and returns the value for `key`.
    pub fn remove(&self, key: &K) -> Option<V> {
        let mut inner = self.inner.lock();
        let removed = inner.values.remove(key);
        if removed.is_some() {
            if let Some(position) = inner.order.iter().position(|k| k == key) {
                inner.order.remove(position);
            }
        }
        removed
    }

    /// Returns true if `key` is present.
    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.inner.lock().values.contains_key(key)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().values.len()
    }

    /// Returns true if the map is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().values.is_empty()
    }

    /// Returns the keys in insertion order.
    #[must_use]
    pub fn keys(&self) -> Vec<K> {
        self.inner.lock().order.clone()
    }

    /// Removes all entries.
    pub fn clear(&self) {
        let mut inner = self.inner.lock();
        inner.values.clear();
        inner.order.clear();
    }
}

impl<K, V> Default for SafeMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

/// A value stamped with the instant it was set.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use tenon::collections::ExpiringValue;
///
/// let value = ExpiringValue::new("token");
/// assert_eq!(*value.get(), "token");
/// assert!(!value.is_expired(Duration::from_secs(60)));
/// ```
#[derive(Debug, Clone)]
pub struct ExpiringValue<T> {
    value: T,
    set_at: Instant,
}

impl<T> ExpiringValue<T> {
    /// Wraps a value, stamping it with the current instant.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            value,
            set_at: Instant::now(),
        }
    }

    /// Returns the wrapped value regardless of age.
    #[must_use]
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Replaces the value and resets its timestamp.
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.set_at = Instant::now();
    }

    /// Returns true once the value has outlived `ttl`.
    #[must_use]
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.set_at.elapsed() > ttl
    }

    /// Time since the value was set.
    #[must_use]
    pub fn age(&self) -> Duration {
        self.set_at.elapsed()
    }

    /// Unwraps the value.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.value
    }
}
