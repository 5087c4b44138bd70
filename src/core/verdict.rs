use crate::core::text;
use crate::models::Verdict;

/// Lower bounds, highest first; the first bound the score reaches wins
const VERDICT_THRESHOLDS: [(u8, Verdict); 3] = [
    (85, Verdict::DestinedMatch),
    (70, Verdict::FairlyCompatible),
    (0, Verdict::NeedsMoreUnderstanding),
];

impl Verdict {
    pub fn from_score(score: u8) -> Self {
        VERDICT_THRESHOLDS
            .iter()
            .find(|(floor, _)| score >= *floor)
            .map(|(_, verdict)| *verdict)
            .unwrap_or(Verdict::NeedsMoreUnderstanding)
    }

    /// Numbered advice block, one line per point
    pub fn advice(&self) -> String {
        let lines = match self {
            Verdict::DestinedMatch => &text::ADVICE_DESTINED,
            Verdict::FairlyCompatible => &text::ADVICE_FAIRLY,
            Verdict::NeedsMoreUnderstanding => &text::ADVICE_NEEDS_UNDERSTANDING,
        };
        lines.join("\n")
    }
}
