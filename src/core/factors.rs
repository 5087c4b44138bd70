use crate::core::affinity::{affinity_for, AffinityTier};
use crate::core::text;
use crate::models::{FactorCategory, FactorResult, Profile};

/// Score adjustment contributed by one factor
pub type ScoreDelta = i32;

/// Bands for the absolute age difference, narrowest first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeGapTier {
    Close,
    Ideal,
    Moderate,
    Wide,
}

impl AgeGapTier {
    pub fn from_gap(gap: u8) -> Self {
        if gap <= 3 {
            AgeGapTier::Close
        } else if gap <= 5 {
            AgeGapTier::Ideal
        } else if gap <= 10 {
            AgeGapTier::Moderate
        } else {
            AgeGapTier::Wide
        }
    }

    #[inline]
    pub fn delta(self) -> ScoreDelta {
        match self {
            AgeGapTier::Close => 10,
            AgeGapTier::Ideal => 5,
            AgeGapTier::Moderate => 0,
            AgeGapTier::Wide => -10,
        }
    }

    fn text(self) -> (&'static str, &'static str) {
        match self {
            AgeGapTier::Close => (text::AGE_CLOSE_REMARK, text::AGE_CLOSE_SUGGESTION),
            AgeGapTier::Ideal => (text::AGE_IDEAL_REMARK, text::AGE_IDEAL_SUGGESTION),
            AgeGapTier::Moderate => (text::AGE_MODERATE_REMARK, text::AGE_MODERATE_SUGGESTION),
            AgeGapTier::Wide => (text::AGE_WIDE_REMARK, text::AGE_WIDE_SUGGESTION),
        }
    }
}

/// Age-gap factor: smaller gaps score higher
pub fn evaluate_age_gap(user: &Profile, partner: &Profile) -> (ScoreDelta, FactorResult) {
    let gap = user.age.abs_diff(partner.age);
    let tier = AgeGapTier::from_gap(gap);
    let (remark, suggestion) = tier.text();

    let factor = FactorResult::new(
        FactorCategory::AgeGap,
        text::age_gap_content(gap, remark),
        suggestion,
    );

    (tier.delta(), factor)
}

/// Zodiac factor, read from the user's affinity row only
///
/// `evaluate_zodiac(a, b)` and `evaluate_zodiac(b, a)` can disagree.
pub fn evaluate_zodiac(user: &Profile, partner: &Profile) -> (ScoreDelta, FactorResult) {
    let tier = affinity_for(user.zodiac).tier_of(partner.zodiac);

    let (remark, suggestion) = match tier {
        AffinityTier::Best => (text::ZODIAC_BEST_REMARK, text::ZODIAC_BEST_SUGGESTION),
        AffinityTier::Good => (text::ZODIAC_GOOD_REMARK, text::ZODIAC_GOOD_SUGGESTION),
        AffinityTier::Neutral => (text::ZODIAC_NEUTRAL_REMARK, text::ZODIAC_NEUTRAL_SUGGESTION),
        AffinityTier::Challenging => (
            text::ZODIAC_CHALLENGING_REMARK,
            text::ZODIAC_CHALLENGING_SUGGESTION,
        ),
    };

    let factor = FactorResult::new(
        FactorCategory::ZodiacAffinity,
        text::zodiac_content(user.zodiac, partner.zodiac, remark),
        suggestion,
    );

    (tier.delta(), factor)
}

/// Gender factor; descriptive only, never moves the score
pub fn evaluate_gender(user: &Profile, partner: &Profile) -> (ScoreDelta, FactorResult) {
    let suggestion = if user.gender != partner.gender {
        text::GENDER_DIFFERENT_SUGGESTION
    } else {
        text::GENDER_SAME_SUGGESTION
    };

    let factor = FactorResult::new(
        FactorCategory::GenderPairing,
        text::gender_content(user.gender.display_name(), partner.gender.display_name()),
        suggestion,
    );

    (0, factor)
}
