//! Religious observances and the rules that derive them from a day's
//! calendar coordinates.
//!
//! Every rule is a pure predicate over a resolved [`SakaDay`]; a single day
//! can satisfy several rules at once (Kajeng Kliwon in particular overlaps
//! freely), so the result is a set.

use core::fmt;
use core::iter::FusedIterator;

use tinystr::{tinystr, TinyAsciiStr};
use writeable::{impl_display_with_writeable, LengthHint, Writeable};

use crate::pawukon::{Pancawara, PawukonDay, Saptawara, Triwara, Wuku};
use crate::saka::SakaDay;
use crate::sasih::{MoonPhase, Sasih, SasihDay};

/// A Balinese religious observance derivable from calendar coordinates
/// alone.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Observance {
    /// The Saka new year day of silence: Penanggal 1 Kadasa.
    Nyepi = 0,
    /// The night of Siwa: Pangelong 14 Kapitu.
    Siwaratri = 1,
    /// Saniscara Umanis Watugunung, the close of the Pawukon cycle.
    Saraswati = 2,
    /// Buda Kliwon Sinta, three days after Saraswati.
    Pagerwesi = 3,
    /// The recurring Kajeng Kliwon conjunction, every 15 days.
    KajengKliwon = 4,
    /// Wraspati Wage Sungsang, six days before Galungan.
    SugihanJawa = 5,
    /// The day after Sugihan Jawa.
    SugihanBali = 6,
    /// Full moon: Penanggal 15 of any sasih.
    Purnama = 7,
    /// New moon: Pangelong 15 of any sasih.
    Tilem = 8,
}

impl Observance {
    /// All observances, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::Nyepi,
        Self::Siwaratri,
        Self::Saraswati,
        Self::Pagerwesi,
        Self::KajengKliwon,
        Self::SugihanJawa,
        Self::SugihanBali,
        Self::Purnama,
        Self::Tilem,
    ];

    /// The customary name.
    #[must_use]
    pub const fn name(self) -> TinyAsciiStr<16> {
        match self {
            Self::Nyepi => tinystr!(16, "Nyepi"),
            Self::Siwaratri => tinystr!(16, "Siwaratri"),
            Self::Saraswati => tinystr!(16, "Saraswati"),
            Self::Pagerwesi => tinystr!(16, "Pagerwesi"),
            Self::KajengKliwon => tinystr!(16, "Kajeng Kliwon"),
            Self::SugihanJawa => tinystr!(16, "Sugihan Jawa"),
            Self::SugihanBali => tinystr!(16, "Sugihan Bali"),
            Self::Purnama => tinystr!(16, "Purnama"),
            Self::Tilem => tinystr!(16, "Tilem"),
        }
    }
}

impl Writeable for Observance {
    fn write_to<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        sink.write_str(self.name().as_str())
    }

    fn writeable_length_hint(&self) -> LengthHint {
        LengthHint::exact(self.name().len())
    }
}

impl_display_with_writeable!(Observance);

/// A set of observances, packed into a bitfield.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObservanceSet(u16);

impl ObservanceSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// A set holding a single observance.
    #[inline]
    #[must_use]
    pub const fn single(observance: Observance) -> Self {
        Self(1 << observance as u16)
    }

    /// Adds an observance to the set.
    #[inline]
    pub fn insert(&mut self, observance: Observance) {
        self.0 |= 1 << observance as u16;
    }

    /// Returns whether the set contains the observance.
    #[inline]
    #[must_use]
    pub const fn contains(self, observance: Observance) -> bool {
        self.0 & (1 << observance as u16) != 0
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of observances in the set.
    #[inline]
    #[must_use]
    pub const fn len(self) -> u8 {
        self.0.count_ones() as u8
    }

    /// Iterates the contents in declaration order.
    #[inline]
    pub fn iter(self) -> ObservanceSetIter {
        ObservanceSetIter(self)
    }
}

impl fmt::Debug for ObservanceSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl IntoIterator for ObservanceSet {
    type Item = Observance;
    type IntoIter = ObservanceSetIter;

    fn into_iter(self) -> Self::IntoIter {
        ObservanceSetIter(self)
    }
}

impl FromIterator<Observance> for ObservanceSet {
    fn from_iter<T: IntoIterator<Item = Observance>>(iter: T) -> Self {
        let mut set = Self::EMPTY;
        for o in iter {
            set.insert(o);
        }
        set
    }
}

/// Iterator over an [`ObservanceSet`], in declaration order.
#[derive(Debug, Clone)]
pub struct ObservanceSetIter(ObservanceSet);

impl Iterator for ObservanceSetIter {
    type Item = Observance;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0.is_empty() {
            return None;
        }
        let index = self.0 .0.trailing_zeros() as usize;
        self.0 .0 &= self.0 .0 - 1;
        Some(Observance::ALL[index])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::from(self.0.len());
        (len, Some(len))
    }
}

impl ExactSizeIterator for ObservanceSetIter {}
impl FusedIterator for ObservanceSetIter {}

/// Returns every observance falling on the given day.
#[must_use]
pub fn observances_at(day: &SakaDay) -> ObservanceSet {
    let mut set = ObservanceSet::EMPTY;
    let p = day.pawukon();
    let l = day.sasih();

    // Nyepi opens the Saka year; a repeated Kadasa does not repeat it.
    if carries_tithi(&l, Some(Sasih::Kadasa), 1, MoonPhase::Penanggal, false) {
        set.insert(Observance::Nyepi);
    }
    if carries_tithi(&l, Some(Sasih::Kapitu), 14, MoonPhase::Pangelong, false) {
        set.insert(Observance::Siwaratri);
    }
    if p.wuku() == Wuku::Watugunung
        && p.pancawara() == Pancawara::Umanis
        && p.saptawara() == Saptawara::Saniscara
    {
        set.insert(Observance::Saraswati);
    }
    if p.wuku() == Wuku::Sinta
        && p.pancawara() == Pancawara::Kliwon
        && p.saptawara() == Saptawara::Buda
    {
        set.insert(Observance::Pagerwesi);
    }
    if p.pancawara() == Pancawara::Kliwon && p.triwara() == Triwara::Kajeng {
        set.insert(Observance::KajengKliwon);
    }
    if is_sugihan_jawa(p) {
        set.insert(Observance::SugihanJawa);
    }
    if is_sugihan_jawa(p.pred()) {
        set.insert(Observance::SugihanBali);
    }
    if carries_tithi(&l, None, 15, MoonPhase::Penanggal, true) {
        set.insert(Observance::Purnama);
    }
    if carries_tithi(&l, None, 15, MoonPhase::Pangelong, true) {
        set.insert(Observance::Tilem);
    }
    set
}

/// A tithi-anchored rule matches the displayed tithi or, on a doubled
/// ngunaratri day, the skipped one; the observance is held on the day that
/// carries the tithi either way.
fn carries_tithi(
    l: &SasihDay,
    sasih: Option<Sasih>,
    tithi: u8,
    phase: MoonPhase,
    in_nampih: bool,
) -> bool {
    let hit = |s: Sasih, t: u8, p: MoonPhase, nampih: bool| {
        sasih.is_none_or(|want| want == s) && t == tithi && p == phase && (in_nampih || !nampih)
    };
    hit(l.sasih(), l.tithi(), l.phase(), l.is_nampih())
        || l
            .skipped_tithi()
            .is_some_and(|s| hit(s.sasih(), s.tithi(), s.phase(), s.is_nampih()))
}

fn is_sugihan_jawa(p: PawukonDay) -> bool {
    p.wuku() == Wuku::Sungsang
        && p.pancawara() == Pancawara::Wage
        && p.saptawara() == Saptawara::Wraspati
}
