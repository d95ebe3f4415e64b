/// An immutable key/value pair.
///
/// Key/value sequences emit plain `(K, V)` tuples; `KV` is the storable form for when
/// the pair itself is the element, e.g. after [`pairs()`](crate::pull::KvLoop::pairs).
///
/// # Examples
///
/// ```
/// use seqflow::KV;
///
/// let kv = KV::new("one", 1);
///
/// assert_eq!(kv.key(), &"one");
/// assert_eq!(kv.value(), &1);
/// assert_eq!(kv.get(), (&"one", &1));
/// assert_eq!(kv.into_parts(), ("one", 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct KV<K, V> {
    key: K,
    value: V,
}

impl<K, V> KV<K, V> {
    /// Creates a pair.
    #[inline]
    pub const fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// Returns the key.
    #[inline]
    pub const fn key(&self) -> &K {
        &self.key
    }

    /// Returns the value.
    #[inline]
    pub const fn value(&self) -> &V {
        &self.value
    }

    /// Returns references to both the key and the value.
    #[inline]
    pub const fn get(&self) -> (&K, &V) {
        (&self.key, &self.value)
    }

    /// Splits the pair into its key and value.
    #[inline]
    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> From<(K, V)> for KV<K, V> {
    #[inline]
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

impl<K, V> From<KV<K, V>> for (K, V) {
    #[inline]
    fn from(kv: KV<K, V>) -> Self {
        kv.into_parts()
    }
}

#[inline]
pub(crate) fn key_of<K, V>((key, _): (K, V)) -> K {
    key
}

#[inline]
pub(crate) fn value_of<K, V>((_, value): (K, V)) -> V {
    value
}
