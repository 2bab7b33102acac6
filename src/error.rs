//! This module implements `CalendarError`.

use alloc::borrow::Cow;
use core::fmt;

/// `ErrorKind` classifies a [`CalendarError`].
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A malformed Gregorian (year, month, day) triple.
    InvalidDate,
    /// A date or epoch day outside the supported span.
    OutOfRange,
    /// The calibration constants failed validation.
    InvalidConstants,
    /// A bounded search exhausted its window without a match.
    NotFound,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::InvalidDate => "InvalidDate",
            Self::OutOfRange => "OutOfRange",
            Self::InvalidConstants => "InvalidConstants",
            Self::NotFound => "NotFound",
        };
        f.write_str(s)
    }
}

/// The error type returned by all fallible calendar operations.
///
/// Every error is reported synchronously to the caller; there is no
/// transient failure mode and therefore no retry policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarError {
    kind: ErrorKind,
    msg: Cow<'static, str>,
}

impl CalendarError {
    #[inline]
    const fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            msg: Cow::Borrowed(""),
        }
    }

    /// Creates an `InvalidDate` error.
    #[must_use]
    pub const fn invalid_date() -> Self {
        Self::new(ErrorKind::InvalidDate)
    }

    /// Creates an `OutOfRange` error.
    #[must_use]
    pub const fn out_of_range() -> Self {
        Self::new(ErrorKind::OutOfRange)
    }

    /// Creates an `InvalidConstants` error.
    #[must_use]
    pub const fn invalid_constants() -> Self {
        Self::new(ErrorKind::InvalidConstants)
    }

    /// Creates a `NotFound` error.
    #[must_use]
    pub const fn not_found() -> Self {
        Self::new(ErrorKind::NotFound)
    }

    /// Returns this error's kind.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Attaches a message to this error.
    #[must_use]
    pub fn with_message(mut self, msg: &'static str) -> Self {
        self.msg = Cow::Borrowed(msg);
        self
    }

    /// Returns the error message, which may be empty.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.msg
    }
}

impl fmt::Display for CalendarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if !self.msg.is_empty() {
            write!(f, ": {}", self.msg)?;
        }
        Ok(())
    }
}

impl core::error::Error for CalendarError {}
