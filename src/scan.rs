//! Scanning date ranges for observances.
//!
//! The scanners walk the epoch-day line one day at a time; every rule is
//! O(1) per day, so a year scan touches at most 366 days and a bounded
//! search never runs unbounded.

use crate::constants::CalendarConstants;
use crate::date::BaliDate;
use crate::observance::{observances_at, Observance, ObservanceSetIter};
use crate::saka::SakaDay;
use crate::{CalendarError, CalendarResult};

/// Upper bound, in days, on a [`find_next`] search.
///
/// Every observance recurs at least once per 400 days: the rarest are
/// annual (solar year 366, lunar year at most 384 with a repeated month).
pub const SEARCH_WINDOW_DAYS: i64 = 400;

/// A lazy iterator over the observances in a date range, in date order.
///
/// Days carrying several observances yield one item per observance, in
/// [`Observance`] declaration order. The iterator is `Clone`, so a scan can
/// be restarted from any saved position.
#[derive(Debug, Clone)]
pub struct Observances<'a> {
    cursor: i64,
    end: i64,
    pending: Option<(BaliDate, ObservanceSetIter)>,
    constants: &'a CalendarConstants,
}

impl<'a> Observances<'a> {
    /// Scans the inclusive date range `first..=last`.
    pub fn range(first: BaliDate, last: BaliDate, constants: &'a CalendarConstants) -> Self {
        Self {
            cursor: first.to_epoch_day(),
            end: last.to_epoch_day() + 1,
            pending: None,
            constants,
        }
    }

    /// Scans one Gregorian year.
    pub fn year(year: i32, constants: &'a CalendarConstants) -> CalendarResult<Self> {
        let first = BaliDate::try_new(year, 1, 1)?;
        let last = BaliDate::new_unchecked(year, 12, 31);
        Ok(Self::range(first, last, constants))
    }
}

impl Iterator for Observances<'_> {
    type Item = (BaliDate, Observance);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((date, iter)) = &mut self.pending {
                if let Some(observance) = iter.next() {
                    return Some((*date, observance));
                }
                self.pending = None;
            }
            if self.cursor >= self.end {
                return None;
            }
            // The range came from validated dates, so the cursor stays in
            // span.
            let day = SakaDay::from_epoch_day(self.cursor, self.constants).ok()?;
            self.cursor += 1;
            let set = observances_at(&day);
            if !set.is_empty() {
                self.pending = Some((day.date(), set.iter()));
            }
        }
    }
}

/// Returns every observance in a Gregorian year, lazily and in date order,
/// using the default calibration table.
pub fn year_observances(year: i32) -> CalendarResult<Observances<'static>> {
    Observances::year(year, &CalendarConstants::DEFAULT)
}

/// Finds the first day on or after `from` carrying `observance`.
///
/// The search window is [`SEARCH_WINDOW_DAYS`] long, clamped to the
/// supported span; `NotFound` if the window holds no match.
pub fn find_next(
    from: BaliDate,
    observance: Observance,
    constants: &CalendarConstants,
) -> CalendarResult<BaliDate> {
    let start = from.to_epoch_day();
    let end = (start + SEARCH_WINDOW_DAYS).min(crate::date::MAX_EPOCH_DAY + 1);
    for n in start..end {
        let day = SakaDay::from_epoch_day(n, constants)?;
        if observances_at(&day).contains(observance) {
            return Ok(day.date());
        }
    }
    #[cfg(feature = "log")]
    log::debug!(
        "no {} within {} days of {}",
        observance.name(),
        end - start,
        from
    );
    Err(CalendarError::not_found().with_message("observance not found in the search window"))
}

/// The date of Nyepi in a Gregorian year.
///
/// Every supported year holds exactly one Nyepi: when Kadasa Penanggal 1
/// is the skipped tithi of a doubled ngunaratri day, that day carries it.
/// `NotFound` is reserved for a misconfigured constants table.
pub fn nyepi_date(year: i32) -> CalendarResult<BaliDate> {
    match year_observances(year)?.find(|(_, o)| *o == Observance::Nyepi) {
        Some((date, _)) => Ok(date),
        None => Err(CalendarError::not_found().with_message("no Nyepi in this Gregorian year")),
    }
}

/// The date of Siwaratri in a Gregorian year, or `None` for a year without
/// one.
///
/// Siwaratri falls close to the Gregorian year boundary; a year can hold
/// zero, one or two. The first occurrence is returned.
pub fn siwaratri_date(year: i32) -> CalendarResult<Option<BaliDate>> {
    Ok(year_observances(year)?
        .find(|(_, o)| *o == Observance::Siwaratri)
        .map(|(date, _)| date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use alloc::vec::Vec;

    fn date(year: i32, month: i32, day: i32) -> BaliDate {
        BaliDate::try_new(year, month, day).unwrap()
    }

    #[test]
    fn published_nyepi_dates() {
        let expected = [
            (2015, 3, 21),
            (2016, 3, 9),
            (2017, 3, 28),
            (2018, 3, 17),
            (2019, 3, 7),
            (2020, 3, 25),
            (2021, 3, 14),
            (2022, 3, 3),
            (2023, 3, 22),
            (2024, 3, 11),
            (2025, 3, 29),
            (2026, 3, 19),
        ];
        for (y, m, d) in expected {
            assert_eq!(nyepi_date(y).unwrap(), date(y, m, d), "Nyepi {y}");
        }
    }

    #[test]
    fn nyepi_drift_follows_the_lunar_year() {
        // A common lunar year steps back ~10 days, a year with a repeated
        // month jumps forward ~19.
        let d23 = nyepi_date(2023).unwrap().to_epoch_day();
        let d24 = nyepi_date(2024).unwrap().to_epoch_day();
        let d25 = nyepi_date(2025).unwrap().to_epoch_day();
        assert_eq!(d24 - d23, 355);
        assert_eq!(d25 - d24, 383);
    }

    #[test]
    fn siwaratri_dates() {
        assert_eq!(siwaratri_date(2023).unwrap(), Some(date(2023, 1, 20)));
        // 2024 holds two (January and December); the first is returned.
        assert_eq!(siwaratri_date(2024).unwrap(), Some(date(2024, 1, 10)));
        assert_eq!(siwaratri_date(2025).unwrap(), None);
        assert_eq!(siwaratri_date(2026).unwrap(), Some(date(2026, 1, 17)));
    }

    #[test]
    fn year_scan_2024() {
        let events: Vec<_> = year_observances(2024).unwrap().collect();
        assert_eq!(events.len(), 58);
        assert_eq!(events[0], (date(2024, 1, 9), Observance::KajengKliwon));

        // Dates are non-decreasing and (date, observance) pairs are unique.
        for pair in events.windows(2) {
            assert!(pair[0].0 <= pair[1].0);
            assert_ne!(pair[0], pair[1]);
        }

        let count = |o: Observance| events.iter().filter(|(_, e)| *e == o).count();
        assert_eq!(count(Observance::KajengKliwon), 24);
        assert_eq!(count(Observance::Tilem), 13);
        assert_eq!(count(Observance::Purnama), 12);
        assert_eq!(count(Observance::Siwaratri), 2);
        assert_eq!(count(Observance::SugihanJawa), 2);
        assert_eq!(count(Observance::SugihanBali), 2);
        assert_eq!(count(Observance::Nyepi), 1);
        assert_eq!(count(Observance::Saraswati), 1);
        assert_eq!(count(Observance::Pagerwesi), 1);
    }

    #[test]
    fn moons_alternate() {
        // 2025 holds a full moon whose tithi is skipped by a doubled day
        // (2025-12-05); alternation must survive it.
        for year in 2024..=2026 {
            let moons: Vec<_> = year_observances(year)
                .unwrap()
                .filter(|(_, o)| matches!(o, Observance::Purnama | Observance::Tilem))
                .collect();
            for pair in moons.windows(2) {
                assert_ne!(pair[0].1, pair[1].1, "consecutive {:?} in {year}", pair[0].1);
                let gap = pair[1].0.to_epoch_day() - pair[0].0.to_epoch_day();
                assert!((14..=15).contains(&gap), "moon gap {gap} in {year}");
            }
        }
    }

    #[test]
    fn nyepi_on_a_doubled_ngunaratri_day() {
        // Kadasa Penanggal 1 of Saka 1951 is a skipped tithi; the doubled
        // day carrying it is Nyepi.
        assert_eq!(nyepi_date(2029).unwrap(), date(2029, 3, 16));
        assert_eq!(
            nyepi_date(2029).unwrap().to_epoch_day() - nyepi_date(2028).unwrap().to_epoch_day(),
            355
        );
    }

    #[test]
    fn every_year_holds_exactly_one_nyepi() {
        for year in 1800..=2200 {
            let count = year_observances(year)
                .unwrap()
                .filter(|(_, o)| *o == Observance::Nyepi)
                .count();
            assert_eq!(count, 1, "Nyepi count in {year}");
        }
    }

    #[test]
    fn find_next_purnama() {
        let found = find_next(
            date(2024, 1, 1),
            Observance::Purnama,
            &CalendarConstants::DEFAULT,
        )
        .unwrap();
        assert_eq!(found, date(2024, 1, 25));

        // A day carrying the observance is its own answer.
        let same = find_next(found, Observance::Purnama, &CalendarConstants::DEFAULT).unwrap();
        assert_eq!(same, found);
    }

    #[test]
    fn find_next_clamps_at_the_span_end() {
        let err = find_next(
            date(3000, 12, 1),
            Observance::Nyepi,
            &CalendarConstants::DEFAULT,
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn nyepi_at_the_span_end() {
        assert_eq!(nyepi_date(3000).unwrap(), date(3000, 4, 5));
    }

    #[test]
    fn scan_is_restartable() {
        let mut scan = year_observances(2024).unwrap();
        let first = scan.next().unwrap();
        let resumed = scan.clone();
        let rest: Vec<_> = scan.collect();
        let rest_again: Vec<_> = resumed.collect();
        assert_eq!(rest, rest_again);
        assert_eq!(first.0, date(2024, 1, 9));
        assert_eq!(rest.len(), 57);
    }
}
