//! Map collectors with a pluggable duplicate-key policy.
//!
//! A resolver is called on every insert as `resolve(key, old, new)`, where `old` is
//! the value already stored for `key` (`None` on first sight), and returns the value to store.
//! The functions of this module are the common policies; any closure with the same shape works.
//!
//! The map keeps the key instance it saw first, like [`HashMap::insert()`]. If the resolver
//! panics on a duplicate key, that key is left out of the map, since the resolver owned its
//! old value.
//!
//! ```
//! use seqflow::{prelude::*, pull, collect::resolve};
//!
//! let pairs = [("a", 1), ("b", 2), ("a", 3)];
//!
//! let first = pull::of(pairs).to_map_resolv(resolve::first_wins);
//! let last = pull::of(pairs).to_map_resolv(resolve::last_wins);
//! let sum = pull::of(pairs).to_map_resolv(resolve::sum);
//! let all = pull::of(pairs).to_map_resolv(resolve::append);
//!
//! assert_eq!(first["a"], 1);
//! assert_eq!(last["a"], 3);
//! assert_eq!(sum["a"], 4);
//! assert_eq!(all["a"], [1, 3]);
//! ```

use std::{
    collections::{HashMap, hash_map::Entry},
    fmt::Debug,
    hash::Hash,
    ops::ControlFlow,
};

use super::{Addable, Collector};

/// Keeps the value stored first.
#[inline]
pub fn first_wins<K, V>(_key: &K, old: Option<V>, new: V) -> V {
    old.unwrap_or(new)
}

/// Keeps the value stored last.
#[inline]
pub fn last_wins<K, V>(_key: &K, _old: Option<V>, new: V) -> V {
    new
}

/// Accumulates every value of a key, in insertion order.
#[inline]
pub fn append<K, V>(_key: &K, old: Option<Vec<V>>, new: V) -> Vec<V> {
    let mut values = old.unwrap_or_default();
    values.push(new);
    values
}

/// Adds the values of a key up.
#[inline]
pub fn sum<K, V: Addable>(_key: &K, old: Option<V>, new: V) -> V {
    match old {
        Some(old) => old.add(new),
        None => new,
    }
}

/// A collector that inserts `(K, V)` pairs into a [`HashMap<K, R>`] through a resolver.
///
/// This `struct` is created by [`Resolve::new()`] or by the `to_map_resolv()` method of
/// the key/value flavors. See the [module documentation](self) for the resolver contract.
#[derive(Clone)]
pub struct Resolve<K, R, F> {
    map: HashMap<K, R>,
    resolve: F,
}

impl<K, R, F> Resolve<K, R, F> {
    /// Creates a new instance of this collector with a given resolver.
    #[inline]
    pub fn new<V>(resolve: F) -> Self
    where
        F: FnMut(&K, Option<R>, V) -> R,
    {
        Self {
            map: HashMap::new(),
            resolve,
        }
    }
}

impl<K, V, R, F> Collector<(K, V)> for Resolve<K, R, F>
where
    K: Eq + Hash,
    F: FnMut(&K, Option<R>, V) -> R,
{
    type Output = HashMap<K, R>;

    fn collect(&mut self, item: (K, V)) -> ControlFlow<()> {
        resolve_into(&mut self.map, item, &mut self.resolve, |_| {});
        ControlFlow::Continue(())
    }

    #[inline]
    fn finish(self) -> Self::Output {
        self.map
    }
}

impl<K: Debug, R: Debug, F> Debug for Resolve<K, R, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolve").field("map", &self.map).finish()
    }
}

fn resolve_into<K, V, R, F>(
    map: &mut HashMap<K, R>,
    (key, value): (K, V),
    resolve: &mut F,
    first_sight: impl FnOnce(&K),
) where
    K: Eq + Hash,
    F: FnMut(&K, Option<R>, V) -> R,
{
    match map.entry(key) {
        Entry::Vacant(slot) => {
            first_sight(slot.key());
            let resolved = resolve(slot.key(), None, value);
            slot.insert(resolved);
        }
        Entry::Occupied(slot) => {
            // The resolver takes the old value by value, so the entry is out until it returns.
            let (key, old) = slot.remove_entry();
            let resolved = resolve(&key, Some(old), value);
            map.insert(key, resolved);
        }
    }
}

/// A collector like [`Resolve`] that also records the order in which keys were first seen.
///
/// Its [`Output`](Collector::Output) is `(keys, map)`.
#[derive(Clone)]
pub struct OrderedResolve<K, R, F> {
    order: Vec<K>,
    map: HashMap<K, R>,
    resolve: F,
}

impl<K, R, F> OrderedResolve<K, R, F> {
    /// Creates a new instance of this collector with a given resolver.
    #[inline]
    pub fn new<V>(resolve: F) -> Self
    where
        F: FnMut(&K, Option<R>, V) -> R,
    {
        Self {
            order: Vec::new(),
            map: HashMap::new(),
            resolve,
        }
    }
}

impl<K, V, R, F> Collector<(K, V)> for OrderedResolve<K, R, F>
where
    K: Eq + Hash + Clone,
    F: FnMut(&K, Option<R>, V) -> R,
{
    type Output = (Vec<K>, HashMap<K, R>);

    fn collect(&mut self, item: (K, V)) -> ControlFlow<()> {
        let order = &mut self.order;
        resolve_into(&mut self.map, item, &mut self.resolve, |key| {
            order.push(key.clone());
        });
        ControlFlow::Continue(())
    }

    #[inline]
    fn finish(self) -> Self::Output {
        (self.order, self.map)
    }
}

impl<K: Debug, R: Debug, F> Debug for OrderedResolve<K, R, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderedResolve")
            .field("order", &self.order)
            .field("map", &self.map)
            .finish()
    }
}
