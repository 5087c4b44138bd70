use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Youngest age accepted for a profile
pub const MIN_AGE: u8 = 18;
/// Oldest age accepted for a profile
pub const MAX_AGE: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Display form used in analysis text
    pub fn display_name(&self) -> &'static str {
        match self {
            Gender::Male => "男",
            Gender::Female => "女",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown gender: {0}")]
pub struct ParseGenderError(pub String);

impl FromStr for Gender {
    type Err = ParseGenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "男" => Ok(Gender::Male),
            "female" | "女" => Ok(Gender::Female),
            other => Err(ParseGenderError(other.to_string())),
        }
    }
}

/// The twelve zodiac signs, in canonical order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    #[serde(rename = "白羊座", alias = "aries")]
    Aries,
    #[serde(rename = "金牛座", alias = "taurus")]
    Taurus,
    #[serde(rename = "双子座", alias = "gemini")]
    Gemini,
    #[serde(rename = "巨蟹座", alias = "cancer")]
    Cancer,
    #[serde(rename = "狮子座", alias = "leo")]
    Leo,
    #[serde(rename = "处女座", alias = "virgo")]
    Virgo,
    #[serde(rename = "天秤座", alias = "libra")]
    Libra,
    #[serde(rename = "天蝎座", alias = "scorpio")]
    Scorpio,
    #[serde(rename = "射手座", alias = "sagittarius")]
    Sagittarius,
    #[serde(rename = "摩羯座", alias = "capricorn")]
    Capricorn,
    #[serde(rename = "水瓶座", alias = "aquarius")]
    Aquarius,
    #[serde(rename = "双鱼座", alias = "pisces")]
    Pisces,
}

impl ZodiacSign {
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    /// Position in [`ZodiacSign::ALL`]
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Chinese name, used in analysis text and on the wire
    pub fn name(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "白羊座",
            ZodiacSign::Taurus => "金牛座",
            ZodiacSign::Gemini => "双子座",
            ZodiacSign::Cancer => "巨蟹座",
            ZodiacSign::Leo => "狮子座",
            ZodiacSign::Virgo => "处女座",
            ZodiacSign::Libra => "天秤座",
            ZodiacSign::Scorpio => "天蝎座",
            ZodiacSign::Sagittarius => "射手座",
            ZodiacSign::Capricorn => "摩羯座",
            ZodiacSign::Aquarius => "水瓶座",
            ZodiacSign::Pisces => "双鱼座",
        }
    }

    pub fn english(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "aries",
            ZodiacSign::Taurus => "taurus",
            ZodiacSign::Gemini => "gemini",
            ZodiacSign::Cancer => "cancer",
            ZodiacSign::Leo => "leo",
            ZodiacSign::Virgo => "virgo",
            ZodiacSign::Libra => "libra",
            ZodiacSign::Scorpio => "scorpio",
            ZodiacSign::Sagittarius => "sagittarius",
            ZodiacSign::Capricorn => "capricorn",
            ZodiacSign::Aquarius => "aquarius",
            ZodiacSign::Pisces => "pisces",
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown zodiac sign: {0}")]
pub struct ParseZodiacError(pub String);

impl FromStr for ZodiacSign {
    type Err = ParseZodiacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        ZodiacSign::ALL
            .iter()
            .copied()
            .find(|sign| sign.name() == needle || sign.english().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ParseZodiacError(needle.to_string()))
    }
}

/// One person's validated attributes
///
/// Callers guarantee `age` lies in `MIN_AGE..=MAX_AGE`; the engine does
/// not re-check it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub age: u8,
    pub gender: Gender,
    pub zodiac: ZodiacSign,
}

impl Profile {
    pub fn new(age: u8, gender: Gender, zodiac: ZodiacSign) -> Self {
        Self { age, gender, zodiac }
    }
}

/// Dimension a [`FactorResult`] describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorCategory {
    AgeGap,
    ZodiacAffinity,
    GenderPairing,
}

impl FactorCategory {
    pub fn label(&self) -> &'static str {
        match self {
            FactorCategory::AgeGap => "Age Gap",
            FactorCategory::ZodiacAffinity => "Zodiac Affinity",
            FactorCategory::GenderPairing => "Gender Pairing",
        }
    }

    /// Heading shown above the factor
    pub fn title(&self) -> &'static str {
        match self {
            FactorCategory::AgeGap => "年龄差异",
            FactorCategory::ZodiacAffinity => "星座相性",
            FactorCategory::GenderPairing => "性别组合",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            FactorCategory::AgeGap => "🎂",
            FactorCategory::ZodiacAffinity => "⭐",
            FactorCategory::GenderPairing => "💑",
        }
    }
}

/// One evaluated dimension of a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorResult {
    pub category: FactorCategory,
    pub title: String,
    pub icon: String,
    pub content: String,
    pub suggestion: String,
}

impl FactorResult {
    pub fn new(category: FactorCategory, content: String, suggestion: &str) -> Self {
        Self {
            category,
            title: category.title().to_string(),
            icon: category.icon().to_string(),
            content,
            suggestion: suggestion.to_string(),
        }
    }
}

/// Overall compatibility tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    DestinedMatch,
    FairlyCompatible,
    NeedsMoreUnderstanding,
}

impl Verdict {
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::DestinedMatch => "Destined Match",
            Verdict::FairlyCompatible => "Fairly Compatible",
            Verdict::NeedsMoreUnderstanding => "Needs More Understanding",
        }
    }

    /// Display form shown with the score
    pub fn title(&self) -> &'static str {
        match self {
            Verdict::DestinedMatch => "天生一对",
            Verdict::FairlyCompatible => "较为般配",
            Verdict::NeedsMoreUnderstanding => "需要更多了解",
        }
    }
}

/// Engine output for one pair of profiles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityReport {
    pub score: u8,
    pub factors: Vec<FactorResult>,
    pub verdict: Verdict,
    #[serde(rename = "verdictLabel")]
    pub verdict_label: String,
    #[serde(rename = "overallAdvice")]
    pub overall_advice: String,
}
