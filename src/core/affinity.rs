use crate::models::ZodiacSign::{self, *};
use serde::{Deserialize, Serialize};

/// How one sign's row rates another sign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AffinityTier {
    Best,
    Good,
    Neutral,
    /// Any sign not listed in the row
    Challenging,
}

impl AffinityTier {
    #[inline]
    pub fn delta(self) -> i32 {
        match self {
            AffinityTier::Best => 10,
            AffinityTier::Good => 5,
            AffinityTier::Neutral => 0,
            AffinityTier::Challenging => -5,
        }
    }
}

/// One row of the affinity table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Affinity {
    pub sign: ZodiacSign,
    pub best: [ZodiacSign; 2],
    pub good: [ZodiacSign; 2],
    pub neutral: [ZodiacSign; 2],
}

impl Affinity {
    /// Classify `other` against this row; best, good and neutral are
    /// checked in that order.
    pub fn tier_of(&self, other: ZodiacSign) -> AffinityTier {
        if self.best.contains(&other) {
            AffinityTier::Best
        } else if self.good.contains(&other) {
            AffinityTier::Good
        } else if self.neutral.contains(&other) {
            AffinityTier::Neutral
        } else {
            AffinityTier::Challenging
        }
    }
}

const fn row(
    sign: ZodiacSign,
    best: [ZodiacSign; 2],
    good: [ZodiacSign; 2],
    neutral: [ZodiacSign; 2],
) -> Affinity {
    Affinity { sign, best, good, neutral }
}

/// Indexed by [`ZodiacSign::index`].
pub static AFFINITY_TABLE: [Affinity; 12] = [
    row(Aries, [Leo, Sagittarius], [Gemini, Libra], [Aquarius, Taurus]),
    row(Taurus, [Virgo, Capricorn], [Cancer, Scorpio], [Pisces, Aries]),
    row(Gemini, [Libra, Aquarius], [Aries, Leo], [Sagittarius, Virgo]),
    row(Cancer, [Scorpio, Pisces], [Taurus, Virgo], [Capricorn, Aries]),
    row(Leo, [Aries, Sagittarius], [Gemini, Libra], [Aquarius, Taurus]),
    row(Virgo, [Taurus, Capricorn], [Cancer, Scorpio], [Pisces, Aries]),
    row(Libra, [Gemini, Aquarius], [Leo, Sagittarius], [Aries, Scorpio]),
    row(Scorpio, [Cancer, Pisces], [Taurus, Virgo], [Capricorn, Aries]),
    row(Sagittarius, [Aries, Leo], [Gemini, Libra], [Aquarius, Taurus]),
    row(Capricorn, [Taurus, Virgo], [Scorpio, Pisces], [Cancer, Aries]),
    row(Aquarius, [Gemini, Libra], [Aries, Sagittarius], [Leo, Virgo]),
    row(Pisces, [Cancer, Scorpio], [Taurus, Capricorn], [Virgo, Aries]),
];

#[inline]
pub fn affinity_for(sign: ZodiacSign) -> &'static Affinity {
    &AFFINITY_TABLE[sign.index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_sign_has_its_own_row() {
        for sign in ZodiacSign::ALL {
            assert_eq!(affinity_for(sign).sign, sign);
        }
    }

    #[test]
    fn test_rows_are_disjoint_and_exclude_self() {
        for entry in AFFINITY_TABLE.iter() {
            let listed: Vec<ZodiacSign> = entry
                .best
                .iter()
                .chain(entry.good.iter())
                .chain(entry.neutral.iter())
                .copied()
                .collect();

            assert!(!listed.contains(&entry.sign), "{} lists itself", entry.sign);
            for (i, a) in listed.iter().enumerate() {
                for b in &listed[i + 1..] {
                    assert_ne!(a, b, "{} lists {} twice", entry.sign, a);
                }
            }
        }
    }

    #[test]
    fn test_five_other_signs_are_challenging_per_row() {
        for entry in AFFINITY_TABLE.iter() {
            let challenging = ZodiacSign::ALL
                .iter()
                .filter(|s| **s != entry.sign)
                .filter(|s| entry.tier_of(**s) == AffinityTier::Challenging)
                .count();
            assert_eq!(challenging, 5, "row {}", entry.sign);
        }
    }

    #[test]
    fn test_tier_lookup() {
        let aries = affinity_for(Aries);
        assert_eq!(aries.tier_of(Leo), AffinityTier::Best);
        assert_eq!(aries.tier_of(Libra), AffinityTier::Good);
        assert_eq!(aries.tier_of(Taurus), AffinityTier::Neutral);
        assert_eq!(aries.tier_of(Cancer), AffinityTier::Challenging);
    }

    #[test]
    fn test_tier_deltas() {
        assert_eq!(AffinityTier::Best.delta(), 10);
        assert_eq!(AffinityTier::Good.delta(), 5);
        assert_eq!(AffinityTier::Neutral.delta(), 0);
        assert_eq!(AffinityTier::Challenging.delta(), -5);
    }
}
