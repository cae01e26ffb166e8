//! Picking the most informative of several `RemoteData` values.
//!
//! Two monoids are provided. `First` follows the historical combination
//! table: any `Success` wins (the leftmost one if both are), `Idle` is
//! neutral, and every other pair collapses to `Idle`. That table is not
//! associative. `Ranked` orders the states `Success > Failure > Loading >
//! Idle` and keeps the left value on ties, which is associative.

use std::marker::PhantomData;

use crate::algebra::{ Monoid, Semigroup };
use crate::remote_data::RemoteData;
use crate::status::Tag;


/// `RemoteData` under the first-success combination table.
///
/// ```
/// # use remote_data::{First, RemoteData};
/// # use remote_data::algebra::Semigroup;
/// let a: First<&str, i32> = First(RemoteData::Loading);
/// let b = First(RemoteData::Success(1));
/// assert_eq!(a.combine(b).0, RemoteData::Success(1));
/// ```
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub struct First<E, T>(pub RemoteData<E, T>);

/// `RemoteData` ordered by how far the fetch has got.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub struct Ranked<E, T>(pub RemoteData<E, T>);

/// Not associative: `Loading` with `Failure` collapses to `Idle`, so the
/// grouping of a fold over both can change its result. Use `Ranked` when
/// that matters.
impl<E, T> Semigroup for First<E, T> {
    fn combine(self, other: First<E, T>) -> First<E, T> {
        use crate::remote_data::RemoteData::*;
        First(match (self.0, other.0) {
            (a @ Success(_), _) => a,
            (_, b @ Success(_)) => b,
            (Idle, b) => b,
            (a, Idle) => a,
            _ => Idle,
        })
    }
}

impl<E, T> Monoid for First<E, T> {
    fn empty() -> First<E, T> { First(RemoteData::Idle) }
}

fn rank(tag: Tag) -> u8 {
    match tag {
        Tag::Idle => 0,
        Tag::Loading => 1,
        Tag::Failure => 2,
        Tag::Success => 3,
    }
}

impl<E, T> Semigroup for Ranked<E, T> {
    fn combine(self, other: Ranked<E, T>) -> Ranked<E, T> {
        if rank(other.0.tag()) > rank(self.0.tag()) { other } else { self }
    }
}

impl<E, T> Monoid for Ranked<E, T> {
    fn empty() -> Ranked<E, T> { Ranked(RemoteData::Idle) }
}

impl<E, T> From<RemoteData<E, T>> for First<E, T> {
    fn from(rd: RemoteData<E, T>) -> First<E, T> { First(rd) }
}

impl<E, T> From<RemoteData<E, T>> for Ranked<E, T> {
    fn from(rd: RemoteData<E, T>) -> Ranked<E, T> { Ranked(rd) }
}


/// The first-success monoid as a dictionary over plain `RemoteData` values.
pub struct FirstMonoid<E, T> {
    marker: PhantomData<fn() -> (E, T)>,
}

impl<E, T> FirstMonoid<E, T> {
    /// The neutral element, `Idle`.
    pub fn empty(&self) -> RemoteData<E, T> {
        First::empty().0
    }

    /// Combine two values under the first-success table.
    pub fn concat(&self, a: RemoteData<E, T>, b: RemoteData<E, T>) -> RemoteData<E, T> {
        First(a).combine(First(b)).0
    }

    /// Combine any number of values, starting from `empty`.
    pub fn concat_all<I>(&self, items: I) -> RemoteData<E, T>
        where I: IntoIterator<Item = RemoteData<E, T>>,
    {
        items.into_iter().fold(self.empty(), |acc, rd| self.concat(acc, rd))
    }
}

/// Get the first-success monoid for `RemoteData<E, T>`.
///
/// ```
/// # use remote_data::{get_first_monoid, RemoteData};
/// let m = get_first_monoid::<&str, i32>();
/// assert_eq!(m.concat(RemoteData::Success(1), RemoteData::Success(2)), RemoteData::Success(1));
/// assert_eq!(m.concat(RemoteData::Loading, RemoteData::Failure("a")), RemoteData::Idle);
/// ```
pub fn get_first_monoid<E, T>() -> FirstMonoid<E, T> {
    FirstMonoid { marker: PhantomData }
}
