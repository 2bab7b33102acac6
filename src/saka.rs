//! The combined day snapshot: one Gregorian date resolved into every
//! coordinate the holiday rules consume.

use crate::constants::CalendarConstants;
use crate::date::{BaliDate, Weekday};
use crate::pawukon::PawukonDay;
use crate::sasih::SasihDay;
use crate::CalendarResult;

/// A fully resolved calendar day: the civil date plus its Pawukon and Saka
/// lunar coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SakaDay {
    date: BaliDate,
    epoch_day: i64,
    weekday: Weekday,
    pawukon: PawukonDay,
    sasih: SasihDay,
}

impl SakaDay {
    /// Resolves a validated civil date.
    ///
    /// Infallible: every date representable by [`BaliDate`] has a position
    /// in both cycles.
    pub fn from_date(date: BaliDate, constants: &CalendarConstants) -> Self {
        let epoch_day = date.to_epoch_day();
        let weekday = date.weekday();
        let pawukon = PawukonDay::from_epoch_day(epoch_day, constants);
        // A Sunday-anchored pawukon keeps Saptawara and weekday in lock step.
        debug_assert_eq!(
            pawukon.saptawara().number() - 1,
            weekday.days_from_sunday()
        );
        Self {
            date,
            epoch_day,
            weekday,
            pawukon,
            sasih: SasihDay::from_epoch_day(epoch_day, constants),
        }
    }

    /// Resolves an epoch day, validating that it is within the supported
    /// span.
    pub fn from_epoch_day(n: i64, constants: &CalendarConstants) -> CalendarResult<Self> {
        Ok(Self::from_date(BaliDate::from_epoch_day(n)?, constants))
    }

    /// The civil date.
    #[inline]
    #[must_use]
    pub const fn date(&self) -> BaliDate {
        self.date
    }

    /// Days since 1970-01-01.
    #[inline]
    #[must_use]
    pub const fn epoch_day(&self) -> i64 {
        self.epoch_day
    }

    /// The Gregorian day of the week.
    #[inline]
    #[must_use]
    pub const fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// The Pawukon coordinates.
    #[inline]
    #[must_use]
    pub const fn pawukon(&self) -> PawukonDay {
        self.pawukon
    }

    /// The Saka lunar coordinates.
    #[inline]
    #[must_use]
    pub const fn sasih(&self) -> SasihDay {
        self.sasih
    }
}

/// Resolves a civil date against the default calibration table.
#[must_use]
pub fn saka_day(date: BaliDate) -> SakaDay {
    SakaDay::from_date(date, &CalendarConstants::DEFAULT)
}
