//! The 210-day Pawukon cycle and its sub-cycles.
//!
//! The Pawukon runs ten concurrent day-count cycles of lengths 1 through 10
//! plus the composite 30-week Wuku cycle (210 = 30 x 7 days). All positions
//! derive from a single day index `(epoch_day - anchor) mod 210`. The cycles
//! that holiday rules consume — Triwara, Pancawara, Saptawara and the Wuku —
//! carry their traditional names; the rest are exposed as plain `1..=k`
//! positions.

use tinystr::{tinystr, TinyAsciiStr};

use crate::constants::CalendarConstants;

/// Length of the full Pawukon cycle in days.
pub const PAWUKON_CYCLE_DAYS: u16 = 210;

/// The three-day cycle.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Triwara {
    Pasah = 1,
    Beteng = 2,
    Kajeng = 3,
}

impl Triwara {
    const ALL: [Self; 3] = [Self::Pasah, Self::Beteng, Self::Kajeng];

    /// Position in the three-day cycle, 1..=3.
    #[inline]
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8
    }
}

/// The five-day cycle.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pancawara {
    Umanis = 1,
    Paing = 2,
    Pon = 3,
    Wage = 4,
    Kliwon = 5,
}

impl Pancawara {
    const ALL: [Self; 5] = [
        Self::Umanis,
        Self::Paing,
        Self::Pon,
        Self::Wage,
        Self::Kliwon,
    ];

    /// Position in the five-day cycle, 1..=5.
    #[inline]
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8
    }
}

/// The seven-day cycle, anchored so that Redite is Sunday.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Saptawara {
    Redite = 1,
    Soma = 2,
    Anggara = 3,
    Buda = 4,
    Wraspati = 5,
    Sukra = 6,
    Saniscara = 7,
}

impl Saptawara {
    const ALL: [Self; 7] = [
        Self::Redite,
        Self::Soma,
        Self::Anggara,
        Self::Buda,
        Self::Wraspati,
        Self::Sukra,
        Self::Saniscara,
    ];

    /// Position in the seven-day cycle, 1..=7.
    #[inline]
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8
    }
}

/// One of the thirty named seven-day weeks of the Pawukon.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Wuku {
    Sinta = 1,
    Landep = 2,
    Ukir = 3,
    Kulantir = 4,
    Tolu = 5,
    Gumbreg = 6,
    Wariga = 7,
    Warigadean = 8,
    Julungwangi = 9,
    Sungsang = 10,
    Dungulan = 11,
    Kuningan = 12,
    Langkir = 13,
    Medangsia = 14,
    Pujut = 15,
    Pahang = 16,
    Krulut = 17,
    Merakih = 18,
    Tambir = 19,
    Medangkungan = 20,
    Matal = 21,
    Uye = 22,
    Menail = 23,
    Parangbakat = 24,
    Bala = 25,
    Ugu = 26,
    Wayang = 27,
    Kelawu = 28,
    Dukut = 29,
    Watugunung = 30,
}

impl Wuku {
    const ALL: [Self; 30] = [
        Self::Sinta,
        Self::Landep,
        Self::Ukir,
        Self::Kulantir,
        Self::Tolu,
        Self::Gumbreg,
        Self::Wariga,
        Self::Warigadean,
        Self::Julungwangi,
        Self::Sungsang,
        Self::Dungulan,
        Self::Kuningan,
        Self::Langkir,
        Self::Medangsia,
        Self::Pujut,
        Self::Pahang,
        Self::Krulut,
        Self::Merakih,
        Self::Tambir,
        Self::Medangkungan,
        Self::Matal,
        Self::Uye,
        Self::Menail,
        Self::Parangbakat,
        Self::Bala,
        Self::Ugu,
        Self::Wayang,
        Self::Kelawu,
        Self::Dukut,
        Self::Watugunung,
    ];

    /// Position in the thirty-week cycle, 1..=30.
    #[inline]
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// The traditional week name.
    #[must_use]
    pub const fn name(self) -> TinyAsciiStr<16> {
        match self {
            Self::Sinta => tinystr!(16, "Sinta"),
            Self::Landep => tinystr!(16, "Landep"),
            Self::Ukir => tinystr!(16, "Ukir"),
            Self::Kulantir => tinystr!(16, "Kulantir"),
            Self::Tolu => tinystr!(16, "Tolu"),
            Self::Gumbreg => tinystr!(16, "Gumbreg"),
            Self::Wariga => tinystr!(16, "Wariga"),
            Self::Warigadean => tinystr!(16, "Warigadean"),
            Self::Julungwangi => tinystr!(16, "Julungwangi"),
            Self::Sungsang => tinystr!(16, "Sungsang"),
            Self::Dungulan => tinystr!(16, "Dungulan"),
            Self::Kuningan => tinystr!(16, "Kuningan"),
            Self::Langkir => tinystr!(16, "Langkir"),
            Self::Medangsia => tinystr!(16, "Medangsia"),
            Self::Pujut => tinystr!(16, "Pujut"),
            Self::Pahang => tinystr!(16, "Pahang"),
            Self::Krulut => tinystr!(16, "Krulut"),
            Self::Merakih => tinystr!(16, "Merakih"),
            Self::Tambir => tinystr!(16, "Tambir"),
            Self::Medangkungan => tinystr!(16, "Medangkungan"),
            Self::Matal => tinystr!(16, "Matal"),
            Self::Uye => tinystr!(16, "Uye"),
            Self::Menail => tinystr!(16, "Menail"),
            Self::Parangbakat => tinystr!(16, "Parangbakat"),
            Self::Bala => tinystr!(16, "Bala"),
            Self::Ugu => tinystr!(16, "Ugu"),
            Self::Wayang => tinystr!(16, "Wayang"),
            Self::Kelawu => tinystr!(16, "Kelawu"),
            Self::Dukut => tinystr!(16, "Dukut"),
            Self::Watugunung => tinystr!(16, "Watugunung"),
        }
    }
}

/// One day's position within the 210-day Pawukon cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PawukonDay {
    cycle_day: u8,
}

impl PawukonDay {
    /// Derives the Pawukon position of an epoch day.
    pub fn from_epoch_day(n: i64, constants: &CalendarConstants) -> Self {
        let cycle_day = (n - constants.pawukon_anchor).rem_euclid(i64::from(PAWUKON_CYCLE_DAYS));
        Self {
            cycle_day: cycle_day as u8,
        }
    }

    /// The previous day's position, wrapping across the cycle boundary.
    pub(crate) const fn pred(self) -> Self {
        Self {
            cycle_day: ((self.cycle_day as u16 + PAWUKON_CYCLE_DAYS - 1) % PAWUKON_CYCLE_DAYS)
                as u8,
        }
    }

    /// Zero-based day index within the 210-day cycle.
    #[inline]
    #[must_use]
    pub const fn cycle_day(self) -> u8 {
        self.cycle_day
    }

    /// The week this day falls in.
    #[must_use]
    pub const fn wuku(self) -> Wuku {
        Wuku::ALL[(self.cycle_day / 7) as usize]
    }

    #[must_use]
    pub const fn triwara(self) -> Triwara {
        Triwara::ALL[(self.cycle_day % 3) as usize]
    }

    /// Day 0 of the cycle (Redite Sinta) is Paing: the five-day cycle leads
    /// the wuku start by one step.
    #[must_use]
    pub const fn pancawara(self) -> Pancawara {
        Pancawara::ALL[((self.cycle_day + 1) % 5) as usize]
    }

    #[must_use]
    pub const fn saptawara(self) -> Saptawara {
        Saptawara::ALL[(self.cycle_day % 7) as usize]
    }

    /// The one-day cycle, always 1.
    #[must_use]
    pub const fn ekawara(self) -> u8 {
        1
    }

    #[must_use]
    pub const fn dwiwara(self) -> u8 {
        self.cycle_day % 2 + 1
    }

    #[must_use]
    pub const fn caturwara(self) -> u8 {
        self.cycle_day % 4 + 1
    }

    #[must_use]
    pub const fn sadwara(self) -> u8 {
        self.cycle_day % 6 + 1
    }

    #[must_use]
    pub const fn astawara(self) -> u8 {
        self.cycle_day % 8 + 1
    }

    #[must_use]
    pub const fn sangawara(self) -> u8 {
        self.cycle_day % 9 + 1
    }

    #[must_use]
    pub const fn dasawara(self) -> u8 {
        self.cycle_day % 10 + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BaliDate;

    const C: CalendarConstants = CalendarConstants::DEFAULT;

    fn pawukon(year: i32, month: i32, day: i32) -> PawukonDay {
        let date = BaliDate::try_new(year, month, day).unwrap();
        PawukonDay::from_epoch_day(date.to_epoch_day(), &C)
    }

    #[test]
    fn anchor_day_opens_the_cycle() {
        let p = pawukon(2023, 12, 17);
        assert_eq!(p.cycle_day(), 0);
        assert_eq!(p.wuku(), Wuku::Sinta);
        assert_eq!(p.saptawara(), Saptawara::Redite);
        assert_eq!(p.pancawara(), Pancawara::Paing);
        assert_eq!(p.triwara(), Triwara::Pasah);
    }

    #[test]
    fn galungan_2024_is_buda_kliwon_dungulan() {
        let p = pawukon(2024, 2, 28);
        assert_eq!(p.cycle_day(), 73);
        assert_eq!(p.wuku(), Wuku::Dungulan);
        assert_eq!(p.saptawara(), Saptawara::Buda);
        assert_eq!(p.pancawara(), Pancawara::Kliwon);
        assert_eq!(p.triwara(), Triwara::Beteng);
        assert_eq!(p.dwiwara(), 2);
        assert_eq!(p.caturwara(), 2);
        assert_eq!(p.sadwara(), 2);
        assert_eq!(p.astawara(), 2);
        assert_eq!(p.sangawara(), 2);
        assert_eq!(p.dasawara(), 4);
        assert_eq!(p.ekawara(), 1);
    }

    #[test]
    fn kuningan_2024_is_saniscara_kliwon_kuningan() {
        let p = pawukon(2024, 3, 9);
        assert_eq!(p.wuku(), Wuku::Kuningan);
        assert_eq!(p.saptawara(), Saptawara::Saniscara);
        assert_eq!(p.pancawara(), Pancawara::Kliwon);
    }

    #[test]
    fn saraswati_2023_is_saniscara_umanis_watugunung() {
        let p = pawukon(2023, 5, 20);
        assert_eq!(p.cycle_day(), 209);
        assert_eq!(p.wuku(), Wuku::Watugunung);
        assert_eq!(p.saptawara(), Saptawara::Saniscara);
        assert_eq!(p.pancawara(), Pancawara::Umanis);
        assert_eq!(p.wuku().name().as_str(), "Watugunung");
    }

    #[test]
    fn cycle_repeats_every_210_days() {
        let a = PawukonDay::from_epoch_day(19_793, &C);
        let b = PawukonDay::from_epoch_day(19_793 + 210, &C);
        let c = PawukonDay::from_epoch_day(19_793 - 210 * 1000, &C);
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn pred_wraps_the_cycle_boundary() {
        let first = pawukon(2023, 12, 17);
        assert_eq!(first.pred().cycle_day(), 209);
        assert_eq!(pawukon(2023, 12, 16).cycle_day(), 209);
    }
}
