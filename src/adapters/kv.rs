use std::{fmt::Debug, ops::ControlFlow};

use crate::{fallible::BreakLoop, pull::Loop, push::Seq};

/// A key/value sequence that only yields the pairs whose key satisfies a predicate.
///
/// This `struct` is created by the `filter_key()` method of the key/value flavors.
#[derive(Clone)]
pub struct FilterKey<S, P> {
    source: S,
    pred: P,
}

/// A key/value sequence that only yields the pairs whose value satisfies a predicate.
///
/// This `struct` is created by the `filter_value()` method of the key/value flavors.
#[derive(Clone)]
pub struct FilterValue<S, P> {
    source: S,
    pred: P,
}

/// A key/value sequence that converts the keys and keeps the values.
///
/// This `struct` is created by the `convert_key()` method of the key/value flavors.
#[derive(Clone)]
pub struct ConvertKey<S, F> {
    source: S,
    f: F,
}

/// A key/value sequence that converts the values and keeps the keys.
///
/// This `struct` is created by the `convert_value()` method of the key/value flavors.
#[derive(Clone)]
pub struct ConvertValue<S, F> {
    source: S,
    f: F,
}

macro_rules! kv_adapter_base {
    ($($name:ident { $fn_field:ident }),* $(,)?) => {
        $(
            impl<S, F> $name<S, F> {
                pub(crate) fn new(source: S, $fn_field: F) -> Self {
                    Self { source, $fn_field }
                }
            }

            impl<S: Debug, F> Debug for $name<S, F> {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.debug_struct(stringify!($name))
                        .field("source", &self.source)
                        .finish()
                }
            }
        )*
    };
}

kv_adapter_base!(
    FilterKey { pred },
    FilterValue { pred },
    ConvertKey { f },
    ConvertValue { f },
);

impl<K, V, L, P> Loop for FilterKey<L, P>
where
    L: Loop<Item = (K, V)>,
    P: FnMut(&K) -> bool,
{
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((key, value)) = self.source.next() {
            if (self.pred)(&key) {
                return Some((key, value));
            }
        }

        None
    }
}

impl<K, V, B, P> BreakLoop for FilterKey<B, P>
where
    B: BreakLoop<Item = (K, V)>,
    P: FnMut(&K) -> bool,
{
    type Item = (K, V);
    type Error = B::Error;

    fn try_next(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        while let Some((key, value)) = self.source.try_next()? {
            if (self.pred)(&key) {
                return Ok(Some((key, value)));
            }
        }

        Ok(None)
    }
}

impl<K, V, S, P> Seq for FilterKey<S, P>
where
    S: Seq<Item = (K, V)>,
    P: FnMut(&K) -> bool,
{
    type Item = (K, V);

    fn drive<C>(&mut self, mut consumer: C) -> ControlFlow<()>
    where
        C: FnMut(Self::Item) -> ControlFlow<()>,
    {
        let pred = &mut self.pred;
        self.source.drive(|(key, value)| {
            if pred(&key) {
                consumer((key, value))
            } else {
                ControlFlow::Continue(())
            }
        })
    }
}

impl<K, V, L, P> Loop for FilterValue<L, P>
where
    L: Loop<Item = (K, V)>,
    P: FnMut(&V) -> bool,
{
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((key, value)) = self.source.next() {
            if (self.pred)(&value) {
                return Some((key, value));
            }
        }

        None
    }
}

impl<K, V, B, P> BreakLoop for FilterValue<B, P>
where
    B: BreakLoop<Item = (K, V)>,
    P: FnMut(&V) -> bool,
{
    type Item = (K, V);
    type Error = B::Error;

    fn try_next(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        while let Some((key, value)) = self.source.try_next()? {
            if (self.pred)(&value) {
                return Ok(Some((key, value)));
            }
        }

        Ok(None)
    }
}

impl<K, V, S, P> Seq for FilterValue<S, P>
where
    S: Seq<Item = (K, V)>,
    P: FnMut(&V) -> bool,
{
    type Item = (K, V);

    fn drive<C>(&mut self, mut consumer: C) -> ControlFlow<()>
    where
        C: FnMut(Self::Item) -> ControlFlow<()>,
    {
        let pred = &mut self.pred;
        self.source.drive(|(key, value)| {
            if pred(&value) {
                consumer((key, value))
            } else {
                ControlFlow::Continue(())
            }
        })
    }
}

impl<K, V, R, L, F> Loop for ConvertKey<L, F>
where
    L: Loop<Item = (K, V)>,
    F: FnMut(K) -> R,
{
    type Item = (R, V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let (key, value) = self.source.next()?;
        Some(((self.f)(key), value))
    }
}

impl<K, V, R, B, F> BreakLoop for ConvertKey<B, F>
where
    B: BreakLoop<Item = (K, V)>,
    F: FnMut(K) -> R,
{
    type Item = (R, V);
    type Error = B::Error;

    #[inline]
    fn try_next(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        Ok(self
            .source
            .try_next()?
            .map(|(key, value)| ((self.f)(key), value)))
    }
}

impl<K, V, R, S, F> Seq for ConvertKey<S, F>
where
    S: Seq<Item = (K, V)>,
    F: FnMut(K) -> R,
{
    type Item = (R, V);

    #[inline]
    fn drive<C>(&mut self, mut consumer: C) -> ControlFlow<()>
    where
        C: FnMut(Self::Item) -> ControlFlow<()>,
    {
        let f = &mut self.f;
        self.source.drive(|(key, value)| consumer((f(key), value)))
    }
}

impl<K, V, R, L, F> Loop for ConvertValue<L, F>
where
    L: Loop<Item = (K, V)>,
    F: FnMut(V) -> R,
{
    type Item = (K, R);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let (key, value) = self.source.next()?;
        Some((key, (self.f)(value)))
    }
}

impl<K, V, R, B, F> BreakLoop for ConvertValue<B, F>
where
    B: BreakLoop<Item = (K, V)>,
    F: FnMut(V) -> R,
{
    type Item = (K, R);
    type Error = B::Error;

    #[inline]
    fn try_next(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        Ok(self
            .source
            .try_next()?
            .map(|(key, value)| (key, (self.f)(value))))
    }
}

impl<K, V, R, S, F> Seq for ConvertValue<S, F>
where
    S: Seq<Item = (K, V)>,
    F: FnMut(V) -> R,
{
    type Item = (K, R);

    #[inline]
    fn drive<C>(&mut self, mut consumer: C) -> ControlFlow<()>
    where
        C: FnMut(Self::Item) -> ControlFlow<()>,
    {
        let f = &mut self.f;
        self.source.drive(|(key, value)| consumer((key, f(value))))
    }
}

#[cfg(test)]
mod tests {
    use crate::{KV, fallible, prelude::*, pull, push};

    #[test]
    fn key_operators() {
        let pairs = pull::of([(1, 'a'), (2, 'b'), (3, 'c')])
            .filter_key(|&k| k != 2)
            .convert_key(|k| k * 10)
            .pairs()
            .to_vec();

        assert_eq!(pairs, [KV::new(10, 'a'), KV::new(30, 'c')]);
    }

    #[test]
    fn value_operators_on_every_flavor() {
        let stock = [("apple", 3), ("pear", 0), ("plum", 7)];

        let pulled = pull::of(stock)
            .filter_value(|&n| n > 0)
            .convert_value(|n| n * 2)
            .to_map();
        let pushed = push::from_iter(stock)
            .filter_value(|&n| n > 0)
            .convert_value(|n| n * 2)
            .to_map();
        let fallible = fallible::from_results(stock.map(Ok::<_, ()>))
            .filter_value(|&n| n > 0)
            .convert_value(|n| n * 2)
            .try_to_map();

        assert_eq!(pulled.len(), 2);
        assert_eq!(pulled["plum"], 14);
        assert_eq!(pulled, pushed);
        assert_eq!(Ok(pulled), fallible);
    }
}
