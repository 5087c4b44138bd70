use crate::core::factors::{evaluate_age_gap, evaluate_gender, evaluate_zodiac, ScoreDelta};
use crate::models::{CompatibilityReport, FactorResult, Profile, Verdict};

/// Score every pair starts from before factor adjustments
pub const BASE_SCORE: ScoreDelta = 70;

type FactorEvaluator = fn(&Profile, &Profile) -> (ScoreDelta, FactorResult);

/// Evaluators in report order
const FACTORS: [FactorEvaluator; 3] = [evaluate_age_gap, evaluate_zodiac, evaluate_gender];

/// Evaluate compatibility between `user` and `partner`
///
/// # Pipeline Stages
/// 1. Per-factor evaluation (age gap, zodiac affinity, gender pairing)
/// 2. Delta aggregation over [`BASE_SCORE`], clamped to 0-100
/// 3. Verdict and advice selection from the final score
///
/// Both profiles must already be validated. The result depends only on
/// the inputs.
pub fn evaluate(user: &Profile, partner: &Profile) -> CompatibilityReport {
    let (deltas, factors): (Vec<ScoreDelta>, Vec<FactorResult>) = FACTORS
        .iter()
        .map(|evaluator| evaluator(user, partner))
        .unzip();

    let raw = BASE_SCORE + deltas.iter().sum::<ScoreDelta>();
    let score = raw.clamp(0, 100) as u8;
    let verdict = Verdict::from_score(score);

    tracing::debug!(
        "Evaluated pair: score={}, verdict={:?}, deltas={:?}",
        score,
        verdict,
        deltas
    );

    CompatibilityReport {
        score,
        factors,
        verdict,
        verdict_label: verdict.title().to_string(),
        overall_advice: verdict.advice(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FactorCategory, Gender, ZodiacSign};

    #[test]
    fn test_end_to_end_destined_match() {
        let user = Profile::new(25, Gender::Male, ZodiacSign::Aries);
        let partner = Profile::new(27, Gender::Female, ZodiacSign::Leo);

        let report = evaluate(&user, &partner);

        assert_eq!(report.score, 90);
        assert_eq!(report.verdict, Verdict::DestinedMatch);
        assert_eq!(report.verdict_label, "天生一对");
    }

    #[test]
    fn test_factor_order() {
        let user = Profile::new(40, Gender::Female, ZodiacSign::Pisces);
        let partner = Profile::new(33, Gender::Female, ZodiacSign::Gemini);

        let report = evaluate(&user, &partner);
        let categories: Vec<FactorCategory> =
            report.factors.iter().map(|f| f.category).collect();

        assert_eq!(
            categories,
            vec![
                FactorCategory::AgeGap,
                FactorCategory::ZodiacAffinity,
                FactorCategory::GenderPairing,
            ]
        );
    }

    #[test]
    fn test_lowest_possible_score() {
        // Wide gap (-10) and challenging signs (-5)
        let user = Profile::new(18, Gender::Male, ZodiacSign::Aries);
        let partner = Profile::new(100, Gender::Male, ZodiacSign::Virgo);

        let report = evaluate(&user, &partner);

        assert_eq!(report.score, 55);
        assert_eq!(report.verdict, Verdict::NeedsMoreUnderstanding);
        assert_eq!(report.overall_advice, Verdict::NeedsMoreUnderstanding.advice());
    }
}
