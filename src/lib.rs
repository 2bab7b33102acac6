//! The `wariga` crate computes Balinese calendar coordinates and religious
//! observances from Gregorian dates.
//!
//! ```rust
//! use wariga::{nyepi_date, observances_at, saka_day, Observance, Sasih};
//!
//! // The Saka new year's day of silence.
//! let nyepi = nyepi_date(2024).unwrap();
//! assert_eq!(nyepi.to_string(), "2024-03-11");
//!
//! // Resolve the full coordinates of that day.
//! let day = saka_day(nyepi);
//! assert_eq!(day.sasih().sasih(), Sasih::Kadasa);
//! assert_eq!(day.sasih().tithi(), 1);
//! assert_eq!(day.sasih().saka_year(), 1946);
//! assert!(observances_at(&day).contains(Observance::Nyepi));
//! ```
//!
//! Two independent cycles underlie the computations: the 210-day Pawukon
//! with its ten concurrent sub-cycles, and the lunisolar Saka year of
//! twelve (occasionally thirteen) 30-tithi months. Both reduce to integer
//! arithmetic over a single epoch-day count, anchored and calibrated by
//! [`CalendarConstants`].
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod constants;
pub mod date;
pub mod error;
pub mod observance;
pub mod pawukon;
pub mod saka;
pub mod sasih;
pub mod scan;

#[doc(inline)]
pub use error::{CalendarError, ErrorKind};

/// The result type of all fallible calendar operations.
pub type CalendarResult<T> = Result<T, CalendarError>;

pub use crate::constants::CalendarConstants;
pub use crate::date::{BaliDate, Weekday, MAX_YEAR, MIN_YEAR};
pub use crate::observance::{observances_at, Observance, ObservanceSet, ObservanceSetIter};
pub use crate::pawukon::{
    Pancawara, PawukonDay, Saptawara, Triwara, Wuku, PAWUKON_CYCLE_DAYS,
};
pub use crate::saka::{saka_day, SakaDay};
pub use crate::sasih::{MoonPhase, Sasih, SasihDay, SkippedTithi};
pub use crate::scan::{
    find_next, nyepi_date, siwaratri_date, year_observances, Observances, SEARCH_WINDOW_DAYS,
};
