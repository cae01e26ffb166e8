//! The `RemoteData` sum type and its combinators.
//!
//! Every combinator is defined in terms of `fold`, so adding a variant forces
//! each of them to be revisited. The free functions at the bottom of this
//! module mirror the methods for callers who prefer a pipeline of functions
//! over method chaining.

use std::convert::Infallible;

use crate::status::{Status, Tag};


/// The state of a value fetched from a remote resource.
///
/// Exactly one of the four states is active at any time. Values are never
/// mutated by the combinators; a state change is represented by producing a
/// new value.
///
/// ```
/// # use remote_data::RemoteData;
/// let user: RemoteData<String, u32> = RemoteData::Loading;
/// let next = user.chain(|_| RemoteData::Success(1234));
/// assert_eq!(next, RemoteData::Loading);
/// ```
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum RemoteData<E, T> {
    /// No fetch has been initiated.
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The fetch completed with a value.
    Success(T),
    /// The fetch completed with an error.
    Failure(E),
}

impl<E, T> Default for RemoteData<E, T> {
    fn default() -> RemoteData<E, T> {
        RemoteData::Idle
    }
}

impl<E, T> From<Result<T, E>> for RemoteData<E, T> {
    fn from(result: Result<T, E>) -> RemoteData<E, T> {
        RemoteData::from_either(result)
    }
}

impl<E, T> RemoteData<E, T> {
    /// Wrap a value in `Success`. Alias of `RemoteData::Success`.
    pub fn of(data: T) -> RemoteData<E, T> {
        RemoteData::Success(data)
    }

    /// Wrap an error in `Failure`. Alias of `RemoteData::Failure`.
    pub fn throw_error(error: E) -> RemoteData<E, T> {
        RemoteData::Failure(error)
    }

    /// Convert a `Result`: `Ok` becomes `Success`, `Err` becomes `Failure`.
    pub fn from_either(result: Result<T, E>) -> RemoteData<E, T> {
        match result {
            Ok(data) => RemoteData::Success(data),
            Err(error) => RemoteData::Failure(error),
        }
    }

    /// Convert an `Option`, producing the error for `None` lazily.
    pub fn from_option<F>(option: Option<T>, on_none: F) -> RemoteData<E, T>
        where F: FnOnce() -> E,
    {
        match option {
            Some(data) => RemoteData::Success(data),
            None => RemoteData::Failure(on_none()),
        }
    }

    /// `Success(value)` if the predicate holds, `Failure(on_false(value))`
    /// otherwise.
    pub fn from_predicate<P, F>(value: T, predicate: P, on_false: F) -> RemoteData<E, T>
        where P: FnOnce(&T) -> bool,
              F: FnOnce(T) -> E,
    {
        if predicate(&value) {
            RemoteData::Success(value)
        } else {
            RemoteData::Failure(on_false(value))
        }
    }

    /// Extract a value by pattern matching on the four states.
    ///
    /// Exactly one of the handlers is invoked.
    ///
    /// ```
    /// # use remote_data::RemoteData;
    /// let render = |user: RemoteData<&str, &str>| user.fold(
    ///     || "nothing yet".to_string(),
    ///     || "loading...".to_string(),
    ///     |name| format!("hello {}", name),
    ///     |error| format!("oops: {}", error),
    /// );
    /// assert_eq!(render(RemoteData::Success("Jane")), "hello Jane");
    /// assert_eq!(render(RemoteData::Failure("404")), "oops: 404");
    /// ```
    pub fn fold<R, FI, FL, FS, FF>(self, on_idle: FI, on_loading: FL, on_success: FS, on_failure: FF) -> R
        where FI: FnOnce() -> R,
              FL: FnOnce() -> R,
              FS: FnOnce(T) -> R,
              FF: FnOnce(E) -> R,
    {
        match self {
            RemoteData::Idle => on_idle(),
            RemoteData::Loading => on_loading(),
            RemoteData::Success(data) => on_success(data),
            RemoteData::Failure(error) => on_failure(error),
        }
    }

    /// Borrow the payload.
    pub fn as_ref(&self) -> RemoteData<&E, &T> {
        match *self {
            RemoteData::Idle => RemoteData::Idle,
            RemoteData::Loading => RemoteData::Loading,
            RemoteData::Success(ref data) => RemoteData::Success(data),
            RemoteData::Failure(ref error) => RemoteData::Failure(error),
        }
    }

    /// The active state, without its payload.
    pub fn tag(&self) -> Tag {
        self.as_ref().fold(
            || Tag::Idle,
            || Tag::Loading,
            |_| Tag::Success,
            |_| Tag::Failure,
        )
    }

    /// Whether no fetch has been initiated.
    pub fn is_idle(&self) -> bool { self.tag() == Tag::Idle }

    /// Whether a fetch is in flight.
    pub fn is_loading(&self) -> bool { self.tag() == Tag::Loading }

    /// Whether the fetch completed with a value.
    pub fn is_success(&self) -> bool { self.tag() == Tag::Success }

    /// Whether the fetch completed with an error.
    pub fn is_failure(&self) -> bool { self.tag() == Tag::Failure }

    /// Transform the data of a `Success`; other states pass through.
    pub fn map<U, F>(self, f: F) -> RemoteData<E, U>
        where F: FnOnce(T) -> U,
    {
        self.fold(
            || RemoteData::Idle,
            || RemoteData::Loading,
            |data| RemoteData::Success(f(data)),
            RemoteData::Failure,
        )
    }

    /// Apply a wrapped function to a wrapped value.
    ///
    /// The state of the value `rda` is inspected first: if it is not a
    /// `Success`, it is returned regardless of `self`. Only then is a
    /// non-success state of the function taken.
    pub fn ap<A, U>(self, rda: RemoteData<E, A>) -> RemoteData<E, U>
        where T: FnOnce(A) -> U,
    {
        rda.fold(
            || RemoteData::Idle,
            || RemoteData::Loading,
            |a| self.map(|f| f(a)),
            RemoteData::Failure,
        )
    }

    /// Combine with `other`, keeping this side's data when both succeed.
    ///
    /// The states are combined as by `ap`, so `other` is inspected first.
    pub fn ap_first<U>(self, other: RemoteData<E, U>) -> RemoteData<E, T> {
        self.map(|a| move |_: U| a).ap(other)
    }

    /// Combine with `other`, keeping the other side's data when both succeed.
    ///
    /// The states are combined as by `ap`, so `other` is inspected first.
    pub fn ap_second<U>(self, other: RemoteData<E, U>) -> RemoteData<E, U> {
        self.map(|_| |b: U| b).ap(other)
    }

    /// Continue with a new `RemoteData` computed from the data of a
    /// `Success`; other states pass through.
    ///
    /// ```
    /// # use remote_data::RemoteData;
    /// let f = |s: &str| -> RemoteData<&str, u8> {
    ///     if s == "foo" { RemoteData::Loading } else { RemoteData::Idle }
    /// };
    /// assert_eq!(RemoteData::Success("foo").chain(f), RemoteData::Loading);
    /// assert_eq!(RemoteData::Success("bar").chain(f), RemoteData::Idle);
    /// assert_eq!(RemoteData::Failure("error").chain(f), RemoteData::Failure("error"));
    /// ```
    pub fn chain<U, F>(self, f: F) -> RemoteData<E, U>
        where F: FnOnce(T) -> RemoteData<E, U>,
    {
        self.fold(
            || RemoteData::Idle,
            || RemoteData::Loading,
            f,
            RemoteData::Failure,
        )
    }

    /// Like `chain`, but keep the data it was called on if `f` succeeds.
    pub fn chain_first<U, F>(self, f: F) -> RemoteData<E, T>
        where F: FnOnce(&T) -> RemoteData<E, U>,
    {
        self.chain(|data| f(&data).map(|_| data))
    }

    /// Turn a `Success` whose data fails the predicate into a `Failure`.
    pub fn filter_or_else<P, F>(self, predicate: P, on_false: F) -> RemoteData<E, T>
        where P: FnOnce(&T) -> bool,
              F: FnOnce(T) -> E,
    {
        self.chain(|data| RemoteData::from_predicate(data, predicate, on_false))
    }

    /// Recover a `Failure` into a `Success`. No failure remains reachable, so
    /// the error type of the result is uninhabited.
    pub fn map_failure_to_success<F>(self, f: F) -> RemoteData<Infallible, T>
        where F: FnOnce(E) -> T,
    {
        self.fold(
            || RemoteData::Idle,
            || RemoteData::Loading,
            RemoteData::Success,
            |error| RemoteData::Success(f(error)),
        )
    }

    /// The data of a `Success`, `None` in any other state.
    pub fn to_nullable(&self) -> Option<&T> {
        self.as_ref().fold(|| None, || None, Some, |_| None)
    }

    /// The error of a `Failure`, `None` in any other state.
    pub fn error(&self) -> Option<&E> {
        self.as_ref().fold(|| None, || None, |_| None, Some)
    }

    /// The owned counterpart of `to_nullable`: `Some(data)` on `Success`,
    /// `None` otherwise.
    pub fn to_option(self) -> Option<T> {
        self.fold(|| None, || None, Some, |_| None)
    }

    /// Convert into a `Result`.
    ///
    /// `Success` becomes `Ok`. `Idle` and `Loading` become an `Err` built by
    /// `on_idle_or_loading` from the corresponding `Status`; `Failure` becomes
    /// an `Err` built by `on_failure` from its error.
    ///
    /// ```
    /// # use remote_data::RemoteData;
    /// let to_error = |rd: RemoteData<&'static str, &'static str>| rd.to_either(
    ///     |status| status.to_string(),
    ///     |error| error.to_string(),
    /// );
    /// assert_eq!(to_error(RemoteData::Success("foo")), Ok("foo"));
    /// assert_eq!(to_error(RemoteData::Idle), Err("idle".to_string()));
    /// assert_eq!(to_error(RemoteData::Loading), Err("loading".to_string()));
    /// assert_eq!(to_error(RemoteData::Failure("error")), Err("error".to_string()));
    /// ```
    pub fn to_either<L, FN, FF>(self, on_idle_or_loading: FN, on_failure: FF) -> Result<T, L>
        where FN: FnOnce(Status) -> L,
              FF: FnOnce(E) -> L,
    {
        match self.settle() {
            Ok(Ok(data)) => Ok(data),
            Ok(Err(error)) => Err(on_failure(error)),
            Err(status) => Err(on_idle_or_loading(status)),
        }
    }

    /// The outcome of a completed fetch, or the status of a pending one.
    fn settle(self) -> Result<Result<T, E>, Status> {
        self.fold(
            || Err(Status::Idle),
            || Err(Status::Loading),
            |data| Ok(Ok(data)),
            |error| Ok(Err(error)),
        )
    }
}

impl<E, T> RemoteData<E, RemoteData<E, T>> {
    /// Remove one level of nesting.
    pub fn flatten(self) -> RemoteData<E, T> {
        self.chain(|inner| inner)
    }
}


/// Create an `Idle` value.
pub fn idle<E, T>() -> RemoteData<E, T> { RemoteData::Idle }

/// Create a `Loading` value.
pub fn loading<E, T>() -> RemoteData<E, T> { RemoteData::Loading }

/// Create a `Success` value.
pub fn success<E, T>(data: T) -> RemoteData<E, T> { RemoteData::Success(data) }

/// Create a `Failure` value.
pub fn failure<E, T>(error: E) -> RemoteData<E, T> { RemoteData::Failure(error) }

/// Alias of `success`.
pub fn of<E, T>(data: T) -> RemoteData<E, T> { RemoteData::of(data) }

/// Alias of `failure`.
pub fn throw_error<E, T>(error: E) -> RemoteData<E, T> { RemoteData::throw_error(error) }

/// See `RemoteData::is_idle`.
pub fn is_idle<E, T>(rd: &RemoteData<E, T>) -> bool { rd.is_idle() }

/// See `RemoteData::is_loading`.
pub fn is_loading<E, T>(rd: &RemoteData<E, T>) -> bool { rd.is_loading() }

/// See `RemoteData::is_success`.
pub fn is_success<E, T>(rd: &RemoteData<E, T>) -> bool { rd.is_success() }

/// See `RemoteData::is_failure`.
pub fn is_failure<E, T>(rd: &RemoteData<E, T>) -> bool { rd.is_failure() }

/// See `RemoteData::fold`.
pub fn fold<E, T, R, FI, FL, FS, FF>(rd: RemoteData<E, T>, on_idle: FI, on_loading: FL, on_success: FS, on_failure: FF) -> R
    where FI: FnOnce() -> R,
          FL: FnOnce() -> R,
          FS: FnOnce(T) -> R,
          FF: FnOnce(E) -> R,
{
    rd.fold(on_idle, on_loading, on_success, on_failure)
}

/// See `RemoteData::map`.
pub fn map<E, T, U, F>(rd: RemoteData<E, T>, f: F) -> RemoteData<E, U>
    where F: FnOnce(T) -> U,
{
    rd.map(f)
}

/// Apply a wrapped function to a wrapped value. See `RemoteData::ap` for the
/// order in which the two states are inspected.
pub fn ap<E, A, U, F>(rdf: RemoteData<E, F>, rda: RemoteData<E, A>) -> RemoteData<E, U>
    where F: FnOnce(A) -> U,
{
    rdf.ap(rda)
}

/// See `RemoteData::ap_first`.
pub fn ap_first<E, T, U>(a: RemoteData<E, T>, b: RemoteData<E, U>) -> RemoteData<E, T> {
    a.ap_first(b)
}

/// See `RemoteData::ap_second`.
pub fn ap_second<E, T, U>(a: RemoteData<E, T>, b: RemoteData<E, U>) -> RemoteData<E, U> {
    a.ap_second(b)
}

/// See `RemoteData::chain`.
pub fn chain<E, T, U, F>(rd: RemoteData<E, T>, f: F) -> RemoteData<E, U>
    where F: FnOnce(T) -> RemoteData<E, U>,
{
    rd.chain(f)
}

/// See `RemoteData::chain_first`.
pub fn chain_first<E, T, U, F>(rd: RemoteData<E, T>, f: F) -> RemoteData<E, T>
    where F: FnOnce(&T) -> RemoteData<E, U>,
{
    rd.chain_first(f)
}

/// See `RemoteData::flatten`.
pub fn flatten<E, T>(rd: RemoteData<E, RemoteData<E, T>>) -> RemoteData<E, T> {
    rd.flatten()
}

/// See `RemoteData::from_either`.
pub fn from_either<E, T>(result: Result<T, E>) -> RemoteData<E, T> {
    RemoteData::from_either(result)
}

/// See `RemoteData::from_option`.
pub fn from_option<E, T, F>(option: Option<T>, on_none: F) -> RemoteData<E, T>
    where F: FnOnce() -> E,
{
    RemoteData::from_option(option, on_none)
}

/// See `RemoteData::from_predicate`.
pub fn from_predicate<E, T, P, F>(value: T, predicate: P, on_false: F) -> RemoteData<E, T>
    where P: FnOnce(&T) -> bool,
          F: FnOnce(T) -> E,
{
    RemoteData::from_predicate(value, predicate, on_false)
}

/// See `RemoteData::filter_or_else`.
pub fn filter_or_else<E, T, P, F>(rd: RemoteData<E, T>, predicate: P, on_false: F) -> RemoteData<E, T>
    where P: FnOnce(&T) -> bool,
          F: FnOnce(T) -> E,
{
    rd.filter_or_else(predicate, on_false)
}

/// See `RemoteData::map_failure_to_success`.
pub fn map_failure_to_success<E, T, F>(rd: RemoteData<E, T>, f: F) -> RemoteData<Infallible, T>
    where F: FnOnce(E) -> T,
{
    rd.map_failure_to_success(f)
}

/// See `RemoteData::to_nullable`.
pub fn to_nullable<E, T>(rd: &RemoteData<E, T>) -> Option<&T> {
    rd.to_nullable()
}

/// See `RemoteData::to_option`.
pub fn to_option<E, T>(rd: RemoteData<E, T>) -> Option<T> {
    rd.to_option()
}

/// See `RemoteData::to_either`.
pub fn to_either<E, T, L, FN, FF>(rd: RemoteData<E, T>, on_idle_or_loading: FN, on_failure: FF) -> Result<T, L>
    where FN: FnOnce(Status) -> L,
          FF: FnOnce(E) -> L,
{
    rd.to_either(on_idle_or_loading, on_failure)
}

/// Collect the data of many values into one.
///
/// The values are combined from left to right with `ap`, so when several are
/// not a `Success`, the last of them wins.
///
/// ```
/// # use remote_data::{sequence, RemoteData};
/// let all: RemoteData<(), Vec<i32>> = sequence(vec![RemoteData::Success(1), RemoteData::Success(2)]);
/// assert_eq!(all, RemoteData::Success(vec![1, 2]));
/// ```
pub fn sequence<E, T, I>(items: I) -> RemoteData<E, Vec<T>>
    where I: IntoIterator<Item = RemoteData<E, T>>,
{
    items.into_iter().fold(RemoteData::Success(Vec::new()), |acc, rd| {
        acc.map(|mut items: Vec<T>| move |item: T| { items.push(item); items })
            .ap(rd)
    })
}
