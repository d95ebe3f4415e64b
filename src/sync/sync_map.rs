use std::{
    collections::HashMap,
    fmt::Debug,
    hash::Hash,
    ops::ControlFlow,
    sync::{Mutex, MutexGuard},
};

use crate::{Error, collect::Collector, pull};

/// A key/value map that can be shared between threads.
///
/// Every operation takes one lock on the whole map, so each of them is atomic on its own,
/// but there is no way to group several of them into one transaction.
/// The map is an ordinary value: create one, then share it by reference or through an
/// [`Arc`](std::sync::Arc).
///
/// If a thread panics while holding the lock, the map is poisoned and every later
/// operation returns [`Error::Poisoned`].
///
/// # Examples
///
/// ```
/// use std::thread;
/// use seqflow::{prelude::*, pull, sync::SyncMap};
///
/// let lengths = SyncMap::new();
///
/// thread::scope(|s| {
///     for chunk in [["ant", "bee"], ["cicada", "dragonfly"]] {
///         let lengths = &lengths;
///         s.spawn(move || pull::of(chunk).key_by(|w| *w).convert_value(str::len).feed(lengths));
///     }
/// });
///
/// assert_eq!(lengths.len(), Ok(4));
/// assert_eq!(lengths.load(&"cicada"), Ok(Some(6)));
/// ```
pub struct SyncMap<K, V> {
    map: Mutex<HashMap<K, V>>,
}

impl<K, V> SyncMap<K, V> {
    /// Creates an empty map.
    #[inline]
    pub fn new() -> Self {
        Self {
            map: Mutex::new(HashMap::new()),
        }
    }

    fn lock(&self, operation: &'static str) -> Result<MutexGuard<'_, HashMap<K, V>>, Error> {
        self.map.lock().map_err(|_| {
            log::warn!("`SyncMap::{operation}()` found the map poisoned");
            Error::Poisoned { operation }
        })
    }

    /// Returns the number of entries.
    pub fn len(&self) -> Result<usize, Error> {
        Ok(self.lock("len")?.len())
    }

    /// Returns `true` if the map has no entries.
    pub fn is_empty(&self) -> Result<bool, Error> {
        Ok(self.lock("is_empty")?.is_empty())
    }
}

impl<K: Eq + Hash, V> SyncMap<K, V> {
    /// Stores `value` under `key`, and returns the value it replaced.
    pub fn store(&self, key: K, value: V) -> Result<Option<V>, Error> {
        Ok(self.lock("store")?.insert(key, value))
    }

    /// Removes the entry of `key`, and returns its value.
    pub fn delete(&self, key: &K) -> Result<Option<V>, Error> {
        Ok(self.lock("delete")?.remove(key))
    }

    /// Stores `value` under `key` unless the key is already present.
    ///
    /// Returns the value stored under `key` after the call, and whether it was already there.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqflow::sync::SyncMap;
    ///
    /// let owners = SyncMap::new();
    ///
    /// assert_eq!(owners.load_or_store("lock", "worker-1"), Ok(("worker-1", false)));
    /// assert_eq!(owners.load_or_store("lock", "worker-2"), Ok(("worker-1", true)));
    /// ```
    pub fn load_or_store(&self, key: K, value: V) -> Result<(V, bool), Error>
    where
        V: Clone,
    {
        let mut map = self.lock("load_or_store")?;
        if let Some(existing) = map.get(&key) {
            return Ok((existing.clone(), true));
        }

        map.insert(key, value.clone());
        Ok((value, false))
    }
}

impl<K: Eq + Hash, V: Clone> SyncMap<K, V> {
    /// Returns a clone of the value stored under `key`.
    pub fn load(&self, key: &K) -> Result<Option<V>, Error> {
        Ok(self.lock("load")?.get(key).cloned())
    }
}

impl<K: Clone, V: Clone> SyncMap<K, V> {
    /// Returns a loop over a copy of the entries, taken under one lock.
    ///
    /// Later changes to the map do not show up in the loop. The order of the entries is unspecified.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqflow::{prelude::*, sync::SyncMap};
    ///
    /// let scores = SyncMap::new();
    /// scores.store("a", 1)?;
    /// scores.store("b", 2)?;
    ///
    /// let snapshot = scores.snapshot()?;
    /// scores.store("c", 3)?;
    ///
    /// assert_eq!(snapshot.values().sum(), 3);
    /// # Ok::<(), seqflow::Error>(())
    /// ```
    pub fn snapshot(&self) -> Result<pull::FromIter<std::vec::IntoIter<(K, V)>>, Error> {
        let entries: Vec<(K, V)> = self
            .lock("snapshot")?
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        Ok(pull::from_iter(entries))
    }
}

impl<K, V> Default for SyncMap<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Debug, V: Debug> Debug for SyncMap<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.map.try_lock() {
            Ok(map) => f.debug_struct("SyncMap").field("map", &*map).finish(),
            Err(_) => f.debug_struct("SyncMap").finish_non_exhaustive(),
        }
    }
}

/// Stores every collected pair, replacing the value of an existing key.
///
/// It returns [`Break(())`](ControlFlow::Break) once the map is poisoned, and its output is then
/// [`Error::Poisoned`]: the pairs collected after that are lost.
/// Poisoning is permanent, so the error also comes back if another thread poisoned the map
/// after the last pair was stored.
impl<'a, K: Eq + Hash, V> Collector<(K, V)> for &'a SyncMap<K, V> {
    type Output = Result<&'a SyncMap<K, V>, Error>;

    #[inline]
    fn collect(&mut self, (key, value): (K, V)) -> ControlFlow<()> {
        match self.store(key, value) {
            Ok(_) => ControlFlow::Continue(()),
            Err(_) => ControlFlow::Break(()),
        }
    }

    fn finish(self) -> Self::Output {
        if self.map.is_poisoned() {
            return Err(Error::Poisoned {
                operation: "collect",
            });
        }

        Ok(self)
    }

    fn collect_many(&mut self, items: impl IntoIterator<Item = (K, V)>) -> ControlFlow<()> {
        match self.lock("collect_many") {
            Ok(mut map) => {
                map.extend(items);
                ControlFlow::Continue(())
            }
            Err(_) => ControlFlow::Break(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, thread};

    use super::*;
    use crate::{prelude::*, push};

    #[test]
    fn basic_operations() {
        let map = SyncMap::new();

        assert_eq!(map.is_empty(), Ok(true));
        assert_eq!(map.store(1, "one"), Ok(None));
        assert_eq!(map.store(1, "uno"), Ok(Some("one")));
        assert_eq!(map.load(&1), Ok(Some("uno")));
        assert_eq!(map.delete(&1), Ok(Some("uno")));
        assert_eq!(map.delete(&1), Ok(None));
        assert_eq!(map.load(&1), Ok(None));
    }

    #[test]
    fn concurrent_stores_all_land() {
        let map = Arc::new(SyncMap::new());

        let handles: Vec<_> = (0..4)
            .map(|t| {
                let map = Arc::clone(&map);
                thread::spawn(move || {
                    for i in 0..100 {
                        let _ = map.store(t * 100 + i, t);
                    }
                })
            })
            .collect();
        for handle in handles {
            assert!(handle.join().is_ok());
        }

        assert_eq!(map.len(), Ok(400));
        assert_eq!(map.load(&250), Ok(Some(2)));
    }

    #[test]
    fn load_or_store_is_atomic() {
        let map = SyncMap::new();

        let winners: usize = thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|t| {
                    let map = &map;
                    s.spawn(move || map.load_or_store("key", t).map(|(_, loaded)| !loaded))
                })
                .collect();

            handles
                .into_iter()
                .map(|handle| matches!(handle.join(), Ok(Ok(true))) as usize)
                .sum()
        });

        assert_eq!(winners, 1);
    }

    #[test]
    fn poisoned_map_reports_the_operation() {
        let map = Arc::new(SyncMap::<i32, i32>::new());

        let poisoner = Arc::clone(&map);
        let result = thread::spawn(move || {
            let _guard = poisoner.map.lock();
            panic!("poisoning the map on purpose");
        })
        .join();
        assert!(result.is_err());

        assert_eq!(map.store(1, 1), Err(Error::Poisoned { operation: "store" }));
        assert_eq!(map.len(), Err(Error::Poisoned { operation: "len" }));

        let mut sink = &*map;
        assert!(sink.collect((2, 2)).is_break());
    }

    #[test]
    fn feeding_a_poisoned_map_fails() {
        let map = Arc::new(SyncMap::<i32, i32>::new());

        let poisoner = Arc::clone(&map);
        let _ = thread::spawn(move || {
            let _guard = poisoner.map.lock();
            panic!("poisoning the map on purpose");
        })
        .join();

        let fed = pull::of([(1, 1), (2, 2), (3, 3)]).feed(&*map);
        assert_eq!(fed.err(), Some(Error::Poisoned { operation: "collect" }));

        let fed = push::from_iter([(4, 4)]).feed(&*map);
        assert_eq!(fed.err(), Some(Error::Poisoned { operation: "collect" }));
    }

    #[test]
    fn feeding_a_healthy_map_hands_it_back() {
        let map = SyncMap::new();

        let fed = pull::of([("a", 1), ("b", 2), ("a", 3)]).feed(&map);
        assert!(fed.is_ok_and(|map| map.len() == Ok(2)));
        assert_eq!(map.load(&"a"), Ok(Some(3)));
    }
}
