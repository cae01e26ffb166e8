//! Equality of `RemoteData` values under caller-supplied payload equality.

use crate::remote_data::RemoteData;


/// An equivalence on `RemoteData<E, T>` built from equivalences on `E` and
/// `T`. Obtained through `get_eq`.
pub struct EqBy<FE, FT> {
    eq_err: FE,
    eq_data: FT,
}

impl<FE, FT> EqBy<FE, FT> {
    /// Two values are equal if they are in the same state and, for `Success`
    /// and `Failure`, their payloads are equal.
    pub fn equals<E, T>(&self, x: &RemoteData<E, T>, y: &RemoteData<E, T>) -> bool
        where FE: Fn(&E, &E) -> bool,
              FT: Fn(&T, &T) -> bool,
    {
        x.as_ref().fold(
            || y.is_idle(),
            || y.is_loading(),
            |a| y.to_nullable().map_or(false, |b| (self.eq_data)(a, b)),
            |e| y.error().map_or(false, |f| (self.eq_err)(e, f)),
        )
    }
}

/// Build an equality for `RemoteData` from equalities for its payloads.
///
/// The result is reflexive, symmetric and transitive whenever `eq_err` and
/// `eq_data` are.
///
/// ```
/// # use remote_data::{get_eq, RemoteData};
/// let eq = get_eq(|a: &String, b: &String| a == b, |a: &i32, b: &i32| a == b);
/// assert!(eq.equals(&RemoteData::Idle, &RemoteData::Idle));
/// assert!(!eq.equals(&RemoteData::Loading, &RemoteData::Success(1)));
/// assert!(eq.equals(&RemoteData::Success(1), &RemoteData::Success(1)));
/// assert!(!eq.equals(&RemoteData::Success(1), &RemoteData::Success(2)));
/// ```
pub fn get_eq<E, T, FE, FT>(eq_err: FE, eq_data: FT) -> EqBy<FE, FT>
    where FE: Fn(&E, &E) -> bool,
          FT: Fn(&T, &T) -> bool,
{
    EqBy { eq_err, eq_data }
}
