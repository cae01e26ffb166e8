//! Names for the states of a `RemoteData` value.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;


/// The variant a `RemoteData` value is in, without its payload.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Tag {
    /// No fetch has been initiated.
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The fetch completed with a value.
    Success,
    /// The fetch completed with an error.
    Failure,
}

/// The two payload-free states, handed to the callback of `to_either`.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Status {
    /// No fetch has been initiated.
    Idle,
    /// A fetch is in flight.
    Loading,
}

/// Parsing a state name failed.
#[derive(Error, PartialEq, Eq, Clone, Debug)]
#[error("unknown remote data state {0:?}")]
pub struct ParseStatusError(pub String);

impl Tag {
    /// The lower-case name used in the serialised form.
    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Idle => "idle",
            Tag::Loading => "loading",
            Tag::Success => "success",
            Tag::Failure => "failure",
        }
    }

    /// Whether the fetch has completed, either way.
    pub fn is_settled(self) -> bool {
        match self {
            Tag::Success | Tag::Failure => true,
            Tag::Idle | Tag::Loading => false,
        }
    }
}

impl Status {
    /// The lower-case name used in the serialised form.
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Idle => "idle",
            Status::Loading => "loading",
        }
    }
}

impl From<Status> for Tag {
    fn from(status: Status) -> Tag {
        match status {
            Status::Idle => Tag::Idle,
            Status::Loading => Tag::Loading,
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tag {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Tag, ParseStatusError> {
        match s {
            "idle" => Ok(Tag::Idle),
            "loading" => Ok(Tag::Loading),
            "success" => Ok(Tag::Success),
            "failure" => Ok(Tag::Failure),
            other => Err(ParseStatusError(other.to_owned())),
        }
    }
}

impl FromStr for Status {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Status, ParseStatusError> {
        match s.parse::<Tag>()? {
            Tag::Idle => Ok(Status::Idle),
            Tag::Loading => Ok(Status::Loading),
            Tag::Success | Tag::Failure => Err(ParseStatusError(s.to_owned())),
        }
    }
}
