//! The Saka lunar coordinates: Sasih, Tithi and the nampih correction.
//!
//! The engine is pure integer arithmetic over the epoch day:
//!
//! - Lunar days elapse by the ngunaratri rule — every 63rd solar day carries
//!   two tithis — giving the mean month 63/64 x 30 = 29.53125 days.
//! - Thirty tithis make a month: indices 0..15 are the waxing Penanggal
//!   half, 15..30 the waning Pangelong half. A doubled day carries both of
//!   its tithis: the later one is displayed, the earlier is exposed as the
//!   skipped tithi so nothing anchored to it falls off the calendar.
//! - The month counter drifts about 0.9 days per month against the solar
//!   year; the nampih sasih correction repeats a month seven times per 235
//!   synodic months, so month numbers are never skipped. The repeated month
//!   keeps its predecessor's Sasih and carries an explicit flag.

use tinystr::{tinystr, TinyAsciiStr};

use crate::constants::CalendarConstants;

/// Tithis per lunar month.
const TITHIS_PER_MONTH: i64 = 30;

/// A lunar month of the Saka year.
///
/// The Saka year begins with Kadasa (Penanggal 1 Kadasa is Nyepi); the
/// numbering wraps 12 -> 1 independently of the Gregorian year.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sasih {
    Kasa = 1,
    Karo = 2,
    Katiga = 3,
    Kapat = 4,
    Kalima = 5,
    Kanem = 6,
    Kapitu = 7,
    Kawolu = 8,
    Kasanga = 9,
    Kadasa = 10,
    Destha = 11,
    Sadha = 12,
}

impl Sasih {
    const ALL: [Self; 12] = [
        Self::Kasa,
        Self::Karo,
        Self::Katiga,
        Self::Kapat,
        Self::Kalima,
        Self::Kanem,
        Self::Kapitu,
        Self::Kawolu,
        Self::Kasanga,
        Self::Kadasa,
        Self::Destha,
        Self::Sadha,
    ];

    /// Month number, 1..=12.
    #[inline]
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// The traditional month name.
    #[must_use]
    pub const fn name(self) -> TinyAsciiStr<8> {
        match self {
            Self::Kasa => tinystr!(8, "Kasa"),
            Self::Karo => tinystr!(8, "Karo"),
            Self::Katiga => tinystr!(8, "Katiga"),
            Self::Kapat => tinystr!(8, "Kapat"),
            Self::Kalima => tinystr!(8, "Kalima"),
            Self::Kanem => tinystr!(8, "Kanem"),
            Self::Kapitu => tinystr!(8, "Kapitu"),
            Self::Kawolu => tinystr!(8, "Kawolu"),
            Self::Kasanga => tinystr!(8, "Kasanga"),
            Self::Kadasa => tinystr!(8, "Kadasa"),
            Self::Destha => tinystr!(8, "Destha"),
            Self::Sadha => tinystr!(8, "Sadha"),
        }
    }
}

/// Waxing or waning half of the lunar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoonPhase {
    /// The waxing half, Penanggal 1..=15; Penanggal 15 is Purnama.
    Penanggal,
    /// The waning half, Pangelong 1..=15; Pangelong 15 is Tilem.
    Pangelong,
}

impl MoonPhase {
    #[inline]
    #[must_use]
    pub const fn is_waxing(self) -> bool {
        matches!(self, Self::Penanggal)
    }
}

/// The earlier tithi of a doubled ngunaratri day.
///
/// A doubled day carries two consecutive lunar days. [`SasihDay`] displays
/// the later one; this slot holds the earlier, which may belong to the
/// previous month when the doubling straddles a month boundary. Observances
/// anchored to a tithi are held on the doubled day that carries it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SkippedTithi {
    sasih: Sasih,
    tithi: u8,
    phase: MoonPhase,
    is_nampih: bool,
}

impl SkippedTithi {
    /// The lunar month of the skipped tithi.
    #[inline]
    #[must_use]
    pub const fn sasih(&self) -> Sasih {
        self.sasih
    }

    /// The lunar day within its half-month, 1..=15.
    #[inline]
    #[must_use]
    pub const fn tithi(&self) -> u8 {
        self.tithi
    }

    /// Waxing (Penanggal) or waning (Pangelong).
    #[inline]
    #[must_use]
    pub const fn phase(&self) -> MoonPhase {
        self.phase
    }

    /// Whether the skipped tithi falls in a repeated (nampih) month.
    #[inline]
    #[must_use]
    pub const fn is_nampih(&self) -> bool {
        self.is_nampih
    }
}

/// One day's position in the Saka lunar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SasihDay {
    sasih: Sasih,
    tithi: u8,
    phase: MoonPhase,
    is_nampih: bool,
    saka_year: i32,
    skipped: Option<SkippedTithi>,
}

/// Month, tithi and year coordinates of one lunar day count.
struct LunarCoords {
    sasih: Sasih,
    tithi: u8,
    phase: MoonPhase,
    is_nampih: bool,
    saka_year: i32,
}

fn lunar_coords(lunar_days: i64, constants: &CalendarConstants) -> LunarCoords {
    let month = lunar_days.div_euclid(TITHIS_PER_MONTH);
    let tithi_index = lunar_days.rem_euclid(TITHIS_PER_MONTH) as u8;

    let repeats_through = |m: i64| {
        (constants.nampih_cycle_repeats * m + constants.nampih_phase)
            .div_euclid(constants.nampih_cycle_months)
    };
    let repeats = repeats_through(month) - repeats_through(0);
    let is_nampih = repeats_through(month) > repeats_through(month - 1);

    // 0-based absolute Sasih label; a repeated month shares its
    // predecessor's label.
    let label = i64::from(constants.anchor_sasih) - 1 + month - repeats;
    let sasih = Sasih::ALL[label.rem_euclid(12) as usize];

    // The Saka year increments at Kadasa (label 9 mod 12).
    let anchor_label = i64::from(constants.anchor_sasih) - 1;
    let elapsed_years = (label - 9).div_euclid(12) - (anchor_label - 9).div_euclid(12);
    let saka_year = constants.anchor_saka_year + elapsed_years as i32;

    let (tithi, phase) = if tithi_index < 15 {
        (tithi_index + 1, MoonPhase::Penanggal)
    } else {
        (tithi_index - 14, MoonPhase::Pangelong)
    };

    LunarCoords {
        sasih,
        tithi,
        phase,
        is_nampih,
        saka_year,
    }
}

impl SasihDay {
    /// Derives the lunar position of an epoch day.
    pub fn from_epoch_day(n: i64, constants: &CalendarConstants) -> Self {
        let d = n - constants.lunar_anchor;
        // Ngunaratri: every `period`-th day carries two tithis. The later
        // one is displayed; the earlier survives in the skipped slot.
        let carried = d + constants.ngunaratri_offset;
        let lunar_days = d + carried.div_euclid(constants.ngunaratri_period);
        let is_doubled = carried.rem_euclid(constants.ngunaratri_period) == 0;

        let cur = lunar_coords(lunar_days, constants);
        let skipped = if is_doubled {
            let prev = lunar_coords(lunar_days - 1, constants);
            Some(SkippedTithi {
                sasih: prev.sasih,
                tithi: prev.tithi,
                phase: prev.phase,
                is_nampih: prev.is_nampih,
            })
        } else {
            None
        };

        Self {
            sasih: cur.sasih,
            tithi: cur.tithi,
            phase: cur.phase,
            is_nampih: cur.is_nampih,
            saka_year: cur.saka_year,
            skipped,
        }
    }

    /// The lunar month.
    #[inline]
    #[must_use]
    pub const fn sasih(&self) -> Sasih {
        self.sasih
    }

    /// The lunar day within the current half-month, 1..=15.
    #[inline]
    #[must_use]
    pub const fn tithi(&self) -> u8 {
        self.tithi
    }

    /// Waxing (Penanggal) or waning (Pangelong).
    #[inline]
    #[must_use]
    pub const fn phase(&self) -> MoonPhase {
        self.phase
    }

    /// Whether this day falls in a repeated (nampih) month.
    #[inline]
    #[must_use]
    pub const fn is_nampih(&self) -> bool {
        self.is_nampih
    }

    /// The Saka era year.
    #[inline]
    #[must_use]
    pub const fn saka_year(&self) -> i32 {
        self.saka_year
    }

    /// The earlier tithi of a doubled ngunaratri day, if this is one.
    #[inline]
    #[must_use]
    pub const fn skipped_tithi(&self) -> Option<SkippedTithi> {
        self.skipped
    }

    /// Whether this day is a doubled ngunaratri day carrying two tithis.
    #[inline]
    #[must_use]
    pub const fn is_doubled(&self) -> bool {
        self.skipped.is_some()
    }
}
