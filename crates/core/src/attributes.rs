//! Per-instance attribute memoization.
//!
//! Every entity composes an [`AttributeCache`]: a private map from attribute
//! name to the value its accessor computed on first read. Once a key is
//! cached it is never recomputed or evicted for the lifetime of the instance.
//! Failed computations propagate to the caller and are **not** cached, so the
//! next read retries.

use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde_json::Value;

use crate::error::DomainResult;

/// Memoization cache keyed by attribute name.
///
/// Values are stored type-erased and recovered by downcast on read. Cloning
/// the cache shares the underlying storage: clones of an entity wrap the same
/// record and keep the same instance identity.
///
/// The execution model is single-threaded and request-scoped, so interior
/// mutability is `RefCell` with no locking. The borrow is never held across a
/// compute closure, which keeps the cache reentrant (an accessor may read
/// other attributes of the same entity while computing).
#[derive(Clone, Default)]
pub struct AttributeCache {
    values: Rc<RefCell<HashMap<&'static str, Rc<dyn Any>>>>,
}

impl AttributeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached value for `key`, computing and caching it on first
    /// read.
    pub fn get_or_compute<T, F>(&self, key: &'static str, compute: F) -> T
    where
        T: Clone + 'static,
        F: FnOnce() -> T,
    {
        if let Some(hit) = self.lookup::<T>(key) {
            return hit;
        }
        let value = compute();
        self.values.borrow_mut().insert(key, Rc::new(value.clone()));
        value
    }

    /// Fallible variant of [`get_or_compute`](Self::get_or_compute).
    ///
    /// An `Err` from `compute` is returned to the caller without touching the
    /// cache; a later read for the same key invokes the computation again.
    pub fn try_get_or_compute<T, F>(&self, key: &'static str, compute: F) -> DomainResult<T>
    where
        T: Clone + 'static,
        F: FnOnce() -> DomainResult<T>,
    {
        if let Some(hit) = self.lookup::<T>(key) {
            return Ok(hit);
        }
        let value = compute()?;
        self.values.borrow_mut().insert(key, Rc::new(value.clone()));
        Ok(value)
    }

    /// Dynamic-read bridge: the cached value for `key` rendered as JSON, if
    /// it is a JSON-representable primitive. Entity-valued attributes (and
    /// misses) yield `None`, letting the caller fall through to the wrapped
    /// raw record's field set.
    pub fn json_value(&self, key: &str) -> Option<Value> {
        let values = self.values.borrow();
        let value = values.get(key)?;
        if let Some(v) = value.downcast_ref::<Value>() {
            return Some(v.clone());
        }
        if let Some(s) = value.downcast_ref::<String>() {
            return Some(Value::String(s.clone()));
        }
        if let Some(s) = value.downcast_ref::<Option<String>>() {
            return s.clone().map(Value::String);
        }
        if let Some(b) = value.downcast_ref::<bool>() {
            return Some(Value::Bool(*b));
        }
        if let Some(n) = value.downcast_ref::<i64>() {
            return Some(Value::from(*n));
        }
        if let Some(n) = value.downcast_ref::<u64>() {
            return Some(Value::from(*n));
        }
        None
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.borrow().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.borrow().is_empty()
    }

    fn lookup<T: Clone + 'static>(&self, key: &str) -> Option<T> {
        self.values
            .borrow()
            .get(key)
            .and_then(|v| v.downcast_ref::<T>())
            .cloned()
    }
}

impl core::fmt::Debug for AttributeCache {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let values = self.values.borrow();
        let mut keys: Vec<_> = values.keys().collect();
        keys.sort();
        f.debug_struct("AttributeCache").field("keys", &keys).finish()
    }
}
