//! Civil Gregorian dates and the epoch day counter.
//!
//! Every cyclic computation in this crate reduces a date to a single signed
//! count of days since 1970-01-01 (the "epoch day"). `BaliDate` is the
//! validated civil value type; the forward and backward conversions are a
//! bijection over the supported span.

use core::fmt;
use core::str::FromStr;

use ixdtf::parsers::IxdtfParser;
use writeable::{impl_display_with_writeable, LengthHint, Writeable};

use crate::{CalendarError, CalendarResult};

/// First supported Gregorian year.
pub const MIN_YEAR: i32 = 1;
/// Last supported Gregorian year.
pub const MAX_YEAR: i32 = 3000;

/// Epoch day of 0001-01-01.
pub(crate) const MIN_EPOCH_DAY: i64 = -719_162;
/// Epoch day of 3000-12-31.
pub(crate) const MAX_EPOCH_DAY: i64 = 376_564;

/// Julian day number of 1970-01-01.
const JDN_UNIX_EPOCH: i64 = 2_440_588;

/// A proleptic Gregorian calendar date with no time-of-day component.
///
/// Ordering is calendar order, which coincides with epoch-day order.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BaliDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl BaliDate {
    /// Creates a `BaliDate` without validating the fields.
    pub(crate) const fn new_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Creates a new validated `BaliDate`.
    ///
    /// Returns `OutOfRange` for years outside 1..=3000 and `InvalidDate`
    /// for a month/day pair invalid under the proleptic Gregorian rules.
    pub fn try_new(year: i32, month: i32, day: i32) -> CalendarResult<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(CalendarError::out_of_range()
                .with_message("year outside the supported 1..=3000 span"));
        }
        if !(1..=12).contains(&month) {
            return Err(CalendarError::invalid_date().with_message("month must be in 1..=12"));
        }
        if day < 1 || day > days_in_month(year, month) {
            return Err(CalendarError::invalid_date().with_message("day out of range for month"));
        }
        Ok(Self::new_unchecked(year, month as u8, day as u8))
    }

    /// Returns the number of days between this date and 1970-01-01.
    ///
    /// Strictly increasing in calendar order.
    pub fn to_epoch_day(self) -> i64 {
        // Fliegel-Van Flandern; the divisions must truncate toward zero.
        let (y, m, d) = (i64::from(self.year), i64::from(self.month), i64::from(self.day));
        let t = (m - 14) / 12;
        let jdn = (1461 * (y + 4800 + t)) / 4 + (367 * (m - 2 - 12 * t)) / 12
            - (3 * ((y + 4900 + t) / 100)) / 4
            + d
            - 32075;
        jdn - JDN_UNIX_EPOCH
    }

    /// Converts an epoch day back to a calendar date.
    ///
    /// Total over the supported span; `OutOfRange` otherwise.
    pub fn from_epoch_day(n: i64) -> CalendarResult<Self> {
        if !(MIN_EPOCH_DAY..=MAX_EPOCH_DAY).contains(&n) {
            return Err(CalendarError::out_of_range()
                .with_message("epoch day outside the supported span"));
        }
        // Richards' inverse; all intermediates are positive here.
        let j = n + JDN_UNIX_EPOCH;
        let f = j + 1401 + (((4 * j + 274_277) / 146_097) * 3) / 4 - 38;
        let e = 4 * f + 3;
        let g = (e % 1461) / 4;
        let h = 5 * g + 2;
        let day = (h % 153) / 5 + 1;
        let month = (h / 153 + 2) % 12 + 1;
        let year = e / 1461 - 4716 + (12 + 2 - month) / 12;
        Ok(Self::new_unchecked(year as i32, month as u8, day as u8))
    }

    /// Returns the Gregorian day of the week.
    pub fn weekday(self) -> Weekday {
        Weekday::from_epoch_day(self.to_epoch_day())
    }
}

impl Writeable for BaliDate {
    fn write_to<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        write!(sink, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        LengthHint::exact(10)
    }
}

impl_display_with_writeable!(BaliDate);

impl FromStr for BaliDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let record = IxdtfParser::from_utf8(s.as_bytes()).parse().map_err(|_| {
            CalendarError::invalid_date().with_message("not a valid ISO-8601 date string")
        })?;
        let date = record.date.ok_or(
            CalendarError::invalid_date().with_message("string must contain a date component"),
        )?;
        Self::try_new(date.year, i32::from(date.month), i32::from(date.day))
    }
}

/// Returns whether `year` is a Gregorian leap year.
pub(crate) fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && year % 100 != 0 || year % 400 == 0
}

fn days_in_month(year: i32, month: i32) -> i32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => 28 + i32::from(is_leap_year(year)),
    }
}

/// A Gregorian day of the week.
///
/// Derived from the epoch day with its own anchor (1970-01-01 was a
/// Thursday), independently of the Pawukon Saptawara.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl Weekday {
    pub(crate) fn from_epoch_day(n: i64) -> Self {
        match (n + 4).rem_euclid(7) {
            0 => Self::Sunday,
            1 => Self::Monday,
            2 => Self::Tuesday,
            3 => Self::Wednesday,
            4 => Self::Thursday,
            5 => Self::Friday,
            _ => Self::Saturday,
        }
    }

    /// Days since the most recent Sunday, 0..=6.
    #[inline]
    #[must_use]
    pub const fn days_from_sunday(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Sunday => "Sunday",
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use alloc::string::ToString;

    fn date(year: i32, month: i32, day: i32) -> BaliDate {
        BaliDate::try_new(year, month, day).unwrap()
    }

    #[test]
    fn known_epoch_days() {
        assert_eq!(date(1970, 1, 1).to_epoch_day(), 0);
        assert_eq!(date(2000, 1, 1).to_epoch_day(), 10_957);
        assert_eq!(date(2024, 3, 11).to_epoch_day(), 19_793);
        assert_eq!(date(1, 1, 1).to_epoch_day(), MIN_EPOCH_DAY);
        assert_eq!(date(3000, 12, 31).to_epoch_day(), MAX_EPOCH_DAY);
    }

    #[test]
    fn epoch_day_bijection_and_monotonicity() {
        let mut prev = None;
        for n in MIN_EPOCH_DAY..=MAX_EPOCH_DAY {
            let d = BaliDate::from_epoch_day(n).unwrap();
            assert_eq!(d.to_epoch_day(), n, "{d}");
            if let Some(p) = prev {
                assert!(p < d, "{p} not before {d}");
            }
            prev = Some(d);
        }
    }

    #[test]
    fn validation() {
        assert!(BaliDate::try_new(2024, 2, 29).is_ok());
        assert_eq!(
            BaliDate::try_new(2023, 2, 29).unwrap_err().kind(),
            ErrorKind::InvalidDate
        );
        assert_eq!(
            BaliDate::try_new(1900, 2, 29).unwrap_err().kind(),
            ErrorKind::InvalidDate
        );
        assert!(BaliDate::try_new(2000, 2, 29).is_ok());
        assert_eq!(
            BaliDate::try_new(2024, 13, 1).unwrap_err().kind(),
            ErrorKind::InvalidDate
        );
        assert_eq!(
            BaliDate::try_new(2024, 4, 31).unwrap_err().kind(),
            ErrorKind::InvalidDate
        );
        assert_eq!(
            BaliDate::try_new(0, 6, 15).unwrap_err().kind(),
            ErrorKind::OutOfRange
        );
        assert_eq!(
            BaliDate::try_new(3001, 1, 1).unwrap_err().kind(),
            ErrorKind::OutOfRange
        );
        assert_eq!(
            BaliDate::from_epoch_day(MAX_EPOCH_DAY + 1).unwrap_err().kind(),
            ErrorKind::OutOfRange
        );
    }

    #[test]
    fn weekdays() {
        assert_eq!(date(1970, 1, 1).weekday(), Weekday::Thursday);
        assert_eq!(date(2000, 1, 1).weekday(), Weekday::Saturday);
        assert_eq!(date(2024, 3, 11).weekday(), Weekday::Monday);
        assert_eq!(date(2023, 12, 17).weekday(), Weekday::Sunday);
    }

    #[test]
    fn parse_and_display() {
        let parsed: BaliDate = "2024-03-11".parse().unwrap();
        assert_eq!(parsed, date(2024, 3, 11));
        // Time-of-day components are accepted and ignored.
        let parsed: BaliDate = "2024-03-11T08:30:00".parse().unwrap();
        assert_eq!(parsed, date(2024, 3, 11));
        assert_eq!(
            "boda".parse::<BaliDate>().unwrap_err().kind(),
            ErrorKind::InvalidDate
        );
        assert_eq!(
            "2024-02-30".parse::<BaliDate>().unwrap_err().kind(),
            ErrorKind::InvalidDate
        );
        assert_eq!(date(800, 5, 3).to_string(), "0800-05-03");
    }
}
