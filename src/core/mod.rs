// Core algorithm exports
pub mod affinity;
pub mod engine;
pub mod factors;
pub mod share;
pub mod text;
pub mod verdict;

pub use affinity::{affinity_for, Affinity, AffinityTier, AFFINITY_TABLE};
pub use engine::{evaluate, BASE_SCORE};
pub use factors::{evaluate_age_gap, evaluate_gender, evaluate_zodiac, AgeGapTier, ScoreDelta};
pub use share::ShareMessage;
