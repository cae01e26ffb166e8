//! Holder for the current state of one remote resource.

use std::mem;

use log::{ debug, trace, warn };

use crate::remote_data::RemoteData;
use crate::status::Tag;


/// Tracks a `RemoteData` value as a fetch progresses.
///
/// The tracker replaces its snapshot on every transition and never refuses
/// one; transitions off the usual `Idle -> Loading -> Success | Failure`
/// path are logged as warnings. While a refetch is in flight, the outcome of
/// the previous fetch stays available through `latest_settled`.
///
/// ```
/// # use remote_data::{RemoteData, Tracker};
/// let mut user = Tracker::new();
/// user.start();
/// user.succeed("Jane");
/// user.start();
/// assert_eq!(user.current(), &RemoteData::<(), _>::Loading);
/// assert_eq!(user.latest_settled(), Some(&RemoteData::Success("Jane")));
/// ```
#[derive(Debug)]
pub struct Tracker<E, T> {
    current: RemoteData<E, T>,
    previous: Option<RemoteData<E, T>>,
}

impl<E, T> Default for Tracker<E, T> {
    fn default() -> Tracker<E, T> {
        Tracker::new()
    }
}

fn is_usual(from: Tag, to: Tag) -> bool {
    match (from, to) {
        (_, Tag::Idle) => true,
        (Tag::Idle, Tag::Loading) => true,
        (Tag::Loading, Tag::Success) | (Tag::Loading, Tag::Failure) => true,
        (Tag::Success, Tag::Loading) | (Tag::Failure, Tag::Loading) => true,
        _ => false,
    }
}

impl<E, T> Tracker<E, T> {
    /// A tracker for a resource that has not been fetched.
    pub fn new() -> Tracker<E, T> {
        Tracker { current: RemoteData::Idle, previous: None }
    }

    /// The current snapshot.
    pub fn current(&self) -> &RemoteData<E, T> {
        &self.current
    }

    /// The outcome of the most recent completed fetch, if it has not been
    /// reset since.
    pub fn latest_settled(&self) -> Option<&RemoteData<E, T>> {
        if self.current.tag().is_settled() {
            Some(&self.current)
        } else {
            self.previous.as_ref()
        }
    }

    /// Mark a fetch as started.
    pub fn start(&mut self) {
        let old = self.swap(RemoteData::Loading);
        if old.tag().is_settled() {
            self.previous = Some(old);
        }
    }

    /// Record the data of a completed fetch.
    pub fn succeed(&mut self, data: T) {
        self.swap(RemoteData::Success(data));
    }

    /// Record the error of a completed fetch.
    pub fn fail(&mut self, error: E) {
        self.swap(RemoteData::Failure(error));
    }

    /// Forget everything, returning the snapshot that was current.
    pub fn reset(&mut self) -> RemoteData<E, T> {
        self.swap(RemoteData::Idle)
    }

    /// Install an arbitrary snapshot, returning the one it replaces.
    ///
    /// Entering `Loading` from a settled state keeps a copy of that state
    /// for `latest_settled`, as `start` does.
    pub fn replace(&mut self, next: RemoteData<E, T>) -> RemoteData<E, T>
        where E: Clone, T: Clone,
    {
        let old = self.swap(next);
        if self.current.is_loading() && old.tag().is_settled() {
            self.previous = Some(old.clone());
        }
        old
    }

    fn swap(&mut self, next: RemoteData<E, T>) -> RemoteData<E, T> {
        let from = self.current.tag();
        let to = next.tag();
        if from == to && !to.is_settled() {
            trace!("remote data stays {}", to);
        } else if is_usual(from, to) {
            debug!("remote data {} -> {}", from, to);
        } else {
            warn!("unusual remote data transition {} -> {}", from, to);
        }
        if to != Tag::Loading {
            self.previous = None;
        }
        mem::replace(&mut self.current, next)
    }

    /// Give up the tracker, keeping its current snapshot.
    pub fn into_inner(self) -> RemoteData<E, T> {
        self.current
    }
}
