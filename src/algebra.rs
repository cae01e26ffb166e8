//! Combinable types.
//!
//! A `Semigroup` can be combined pairwise, a `Monoid` additionally has a
//! neutral element. Together they allow folding any number of values, which
//! is how both the first-result rule for `RemoteData` and the accumulation of
//! validation errors are expressed.

use nonempty::NonEmpty;


/// A type whose values can be combined.
///
/// Lawful instances are associative:
/// `a.combine(b).combine(c) == a.combine(b.combine(c))`.
pub trait Semigroup {
    /// Combine two values into one.
    fn combine(self, other: Self) -> Self;
}

/// A `Semigroup` with a neutral element.
///
/// Lawful instances satisfy
/// `M::empty().combine(a) == a == a.combine(M::empty())`.
pub trait Monoid: Semigroup {
    /// The neutral element.
    fn empty() -> Self;
}

/// Fold all values with `combine`, starting from `empty`.
///
/// ```
/// # use remote_data::algebra::concat_all;
/// let joined: String = concat_all(vec!["a".to_string(), "b".to_string()]);
/// assert_eq!(joined, "ab");
/// ```
pub fn concat_all<M, I>(items: I) -> M
    where M: Monoid,
          I: IntoIterator<Item = M>,
{
    items.into_iter().fold(M::empty(), Semigroup::combine)
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Vec<T>) -> Vec<T> {
        self.append(&mut other);
        self
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Vec<T> { vec![] }
}

impl Semigroup for String {
    fn combine(mut self, other: String) -> String {
        self.push_str(&other);
        self
    }
}

impl Monoid for String {
    fn empty() -> String { String::new() }
}

/// Non-empty lists concatenate; there is no empty one, so no `Monoid`.
impl<T> Semigroup for NonEmpty<T> {
    fn combine(mut self, other: NonEmpty<T>) -> NonEmpty<T> {
        let rest: Vec<T> = other.into();
        for item in rest {
            self.push(item);
        }
        self
    }
}


#[cfg(test)]
mod test {
    use nonempty::NonEmpty;
    use quickcheck::quickcheck;

    use super::*;

    #[test]
    fn nonempty_keeps_order() {
        let mut a = NonEmpty::new(1);
        a.push(2);
        let mut b = NonEmpty::new(3);
        b.push(4);
        let joined: Vec<i32> = a.combine(b).into();
        assert_eq!(joined, vec![1, 2, 3, 4]);
    }

    #[test]
    fn concat_all_empty() {
        let none: Vec<Vec<u8>> = vec![];
        assert_eq!(concat_all(none), Vec::<u8>::new());
    }

    #[test]
    fn vec_monoid_identity() {
        fn check(a: Vec<i32>) -> bool {
            Vec::empty().combine(a.clone()) == a
                && a.clone().combine(Vec::empty()) == a
        }
        quickcheck(check as fn(Vec<i32>) -> bool);
    }

    #[test]
    fn string_associative() {
        fn check(a: String, b: String, c: String) -> bool {
            a.clone().combine(b.clone()).combine(c.clone()) == a.combine(b.combine(c))
        }
        quickcheck(check as fn(String, String, String) -> bool);
    }
}
