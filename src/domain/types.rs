//! Strongly-typed value objects parsed from route input.
//!
//! Route parameters arrive as raw strings. These wrappers accept only base-10
//! integers (surrounding whitespace is tolerated) so that once a value reaches
//! the service layer it can be forwarded to the backend as is.
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided string was empty or not an integer.
    #[error("value is not a number")]
    NotANumber,
    /// Provided page number is zero or negative.
    #[error("page must be greater than zero")]
    NonPositivePage,
    /// Provided value does not fit the backing integer.
    #[error("value out of range")]
    OutOfRange,
}

/// Parses a trimmed base-10 integer, rejecting empty input.
fn parse_integer(raw: &str) -> Result<i64, TypeConstraintError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TypeConstraintError::NotANumber);
    }
    trimmed
        .parse::<i64>()
        .map_err(|_| TypeConstraintError::NotANumber)
}

/// Identifier of a tag as it appears in the route.
///
/// Any integer is accepted; whether the tag exists is for the backend to say.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct TagId(i32);

impl TagId {
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Returns the raw `i32` backing this identifier.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl Display for TagId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TagId {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = parse_integer(s)?;
        i32::try_from(value)
            .map(Self)
            .map_err(|_| TypeConstraintError::OutOfRange)
    }
}

/// One-based page number.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct PageNumber(u32);

impl PageNumber {
    pub const FIRST: PageNumber = PageNumber(1);

    /// Creates a page number ensuring it is at least one.
    pub fn new(value: i64) -> Result<Self, TypeConstraintError> {
        if value < 1 {
            return Err(TypeConstraintError::NonPositivePage);
        }
        u32::try_from(value)
            .map(Self)
            .map_err(|_| TypeConstraintError::OutOfRange)
    }

    /// Returns the raw `u32` backing this page number.
    pub const fn get(self) -> u32 {
        self.0
    }

    /// The page before this one, if any.
    pub fn previous(self) -> Option<Self> {
        (self.0 > 1).then(|| Self(self.0 - 1))
    }

    /// The page after this one.
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl Display for PageNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PageNumber {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(parse_integer(s)?)
    }
}
