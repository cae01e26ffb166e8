//! The lifecycle of remotely fetched data as a sum type
//!
//! Data that has to be fetched from somewhere else goes through a handful of
//! states: nothing has been requested yet, a request is in flight, or the
//! request completed with either a value or an error. Modelling these as a
//! record of booleans and optional fields invites impossible combinations
//! (loading *and* failed, or succeeded without data). *RemoteData* models them
//! as a closed enum instead, so that exactly one state is active at any time.
//!
//!
//! # Combinators
//!
//! `RemoteData<E, T>` is a functor, an applicative and a monad over its data:
//!
//! - `map` transforms the data of a `Success`,
//! - `ap` combines independent fetches, inspecting the value side first,
//! - `chain` continues with another `RemoteData` computed from the data,
//! - `fold` pattern-matches on all four states, and every other combinator is
//!   built on it.
//!
//! All of them pass `Idle`, `Loading` and `Failure` through unchanged. They
//! are available as methods, to ease chaining, and as free functions in the
//! crate root for callers who prefer the latter.
//!
//! Conversions collapse the pending and failed states when they no longer
//! matter: `to_nullable` and `to_option` keep only the data, `to_either`
//! produces a `Result` and tells the caller which pending `Status` it saw.
//!
//!
//! # Example
//!
//! ```
//! # // NOTE: If you change this example, please update the README.md
//! # // accordingly, so that they remain in sync!
//! use remote_data::{ RemoteData, get_first_monoid };
//!
//! #[derive(Debug, PartialEq)]
//! struct User { id: u32, name: String }
//!
//! let user: RemoteData<String, User> = RemoteData::Success(User { id: 1234, name: "Jane".into() });
//!
//! // Render every state
//! let greeting = user.as_ref().fold(
//!     || "nobody asked".to_string(),
//!     || "loading...".to_string(),
//!     |user| format!("hello {}", user.name),
//!     |error| format!("failed: {}", error),
//! );
//! assert_eq!(greeting, "hello Jane");
//!
//! // Transform the data, leaving other states alone
//! assert_eq!(user.map(|u| u.id), RemoteData::Success(1234));
//!
//! // Pick the first fetch that succeeded
//! let mirrors = get_first_monoid::<String, u32>();
//! let fastest = mirrors.concat_all(vec![
//!     RemoteData::Loading,
//!     RemoteData::Success(2),
//!     RemoteData::Success(3),
//! ]);
//! assert_eq!(fastest, RemoteData::Success(2));
//! ```
//!
//!
//! # Validation
//!
//! The `validation` module carries the companion pattern: checks that keep
//! every error instead of stopping at the first one, for single values and
//! for whole forms. A finished validation converts into a settled
//! `RemoteData` with `validation::to_remote_data`.
//!
//!
//! # Features
//!
//! - `serde` (on by default) serialises `RemoteData` in the tagged form
//!   `{"tag": "success", "data": ...}` and `{"tag": "failure", "error": ...}`.

#![warn(missing_docs)]

pub use crate::eq::{ get_eq, EqBy };
pub use crate::first::{ get_first_monoid, First, FirstMonoid, Ranked };
pub use crate::remote_data::{
    ap, ap_first, ap_second, chain, chain_first, failure, filter_or_else, flatten, fold,
    from_either, from_option, from_predicate, idle, is_failure, is_idle, is_loading,
    is_success, loading, map, map_failure_to_success, of, sequence, success, throw_error,
    to_either, to_nullable, to_option, RemoteData,
};
pub use crate::status::{ ParseStatusError, Status, Tag };
pub use crate::tracker::Tracker;

pub mod algebra;
pub mod validation;
mod eq;
mod first;
mod remote_data;
mod status;
mod tracker;
#[cfg(feature = "serde")]
mod serde_impl;
#[cfg(test)]
mod testing;
