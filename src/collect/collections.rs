//! [`Collector`]s for the collections of the standard library.
//!
//! Maps collect `(K, V)` pairs with last-write-wins semantics. Use a
//! [`Resolve`](crate::collect::Resolve) collector for any other duplicate-key policy.

use std::{
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque},
    hash::{BuildHasher, Hash},
    ops::ControlFlow,
};

use super::Collector;

macro_rules! collector_impl {
    (
        $coll_name:ident<$($generic:ident),*>, $item_ty:ty,
        $item_pat:pat_param => $push_method_name:ident($($item_args:expr),*)
        $(, $gen_bound:ident: $bound:path)* $(,)?
    ) => {
        impl<$($generic),*> Collector<$item_ty> for $coll_name<$($generic),*>
        where
            $($gen_bound: $bound,)*
        {
            type Output = Self;

            #[inline]
            fn collect(&mut self, $item_pat: $item_ty) -> ControlFlow<()> {
                self.$push_method_name($($item_args),*);
                ControlFlow::Continue(())
            }

            #[inline]
            fn finish(self) -> Self::Output {
                self
            }

            #[inline]
            fn collect_many(
                &mut self,
                items: impl IntoIterator<Item = $item_ty>,
            ) -> ControlFlow<()> {
                self.extend(items);
                ControlFlow::Continue(())
            }
        }
    };
}

collector_impl!(Vec<T>, T, item => push(item));
collector_impl!(VecDeque<T>, T, item => push_back(item));
collector_impl!(HashSet<T, S>, T, item => insert(item), T: Eq, T: Hash, S: BuildHasher);
collector_impl!(BTreeSet<T>, T, item => insert(item), T: Ord);
collector_impl!(
    HashMap<K, V, S>, (K, V), (key, value) => insert(key, value),
    K: Eq, K: Hash, S: BuildHasher
);
collector_impl!(BTreeMap<K, V>, (K, V), (key, value) => insert(key, value), K: Ord);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_keep_the_last_value() {
        let mut map = HashMap::new();
        let _ = map.collect_many([(1, "a"), (2, "b"), (1, "c")]);

        assert_eq!(map.len(), 2);
        assert_eq!(map[&1], "c");
        assert_eq!(map[&2], "b");

        let mut map = BTreeMap::new();
        let _ = map.collect_many([(1, "a"), (1, "c")]);
        assert_eq!(map.into_iter().collect::<Vec<_>>(), [(1, "c")]);
    }

    #[test]
    fn sets_drop_duplicates() {
        let mut set = BTreeSet::new();
        for num in [3, 1, 3, 2, 1] {
            assert!(set.collect(num).is_continue());
        }

        assert_eq!(set.finish().into_iter().collect::<Vec<_>>(), [1, 2, 3]);
    }

    #[test]
    fn sequences_keep_order() {
        let mut deque = VecDeque::new();
        let _ = deque.collect_many([1, 2]);
        let _ = deque.collect(3);

        assert_eq!(deque.finish(), [1, 2, 3]);
    }
}
