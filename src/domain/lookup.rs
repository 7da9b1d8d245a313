//! Result of resolving a name against the database.

use crate::error::AppError;

/// Outcome of a single lookup. A miss is not an error; callers decide
/// whether to skip it or abort with [`Lookup::found_or_not_found`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lookup<T> {
    Found(T),
    NotFound,
}

impl<T> Lookup<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn found(self) -> Option<T> {
        match self {
            Self::Found(v) => Some(v),
            Self::NotFound => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Lookup<U> {
        match self {
            Self::Found(v) => Lookup::Found(f(v)),
            Self::NotFound => Lookup::NotFound,
        }
    }

    /// Turn a miss into `AppError::NotFound(what)`.
    pub fn found_or_not_found(self, what: impl Into<String>) -> Result<T, AppError> {
        match self {
            Self::Found(v) => Ok(v),
            Self::NotFound => Err(AppError::NotFound(what.into())),
        }
    }
}

impl<T> From<Option<T>> for Lookup<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Self::Found(v),
            None => Self::NotFound,
        }
    }
}
