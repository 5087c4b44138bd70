//! zh-CN analysis text shown to users.
//!
//! Every user-facing string the engine emits lives here so the scoring
//! code stays free of prose.

use crate::models::ZodiacSign;

pub fn age_gap_content(gap: u8, remark: &str) -> String {
    format!("你们的年龄差为{}岁，{}", gap, remark)
}

pub const AGE_CLOSE_REMARK: &str = "年龄差异很小，容易产生共鸣。";
pub const AGE_CLOSE_SUGGESTION: &str = "可以多分享同时代的共同话题，增进感情。";

pub const AGE_IDEAL_REMARK: &str = "属于比较理想的范围。";
pub const AGE_IDEAL_SUGGESTION: &str = "可以互相学习对方不同年代的经历和见解，让关系更加丰富。";

pub const AGE_MODERATE_REMARK: &str = "需要更多理解和包容。";
pub const AGE_MODERATE_SUGGESTION: &str = "建议多沟通彼此的人生经历和价值观，找到共同话题。";

pub const AGE_WIDE_REMARK: &str = "可能面临一些代沟问题。";
pub const AGE_WIDE_SUGGESTION: &str =
    "建议多了解对方的成长背景，保持开放和包容的心态。重点关注共同的兴趣爱好，而不是年龄差异。";

pub fn zodiac_content(user: ZodiacSign, partner: ZodiacSign, remark: &str) -> String {
    format!("{}和{}{}", user.name(), partner.name(), remark)
}

pub const ZODIAC_BEST_REMARK: &str = "是非常理想的星座组合！";
pub const ZODIAC_BEST_SUGGESTION: &str = "你们的性格特点非常互补，建议发挥各自优势，相互支持。";

pub const ZODIAC_GOOD_REMARK: &str = "是不错的星座组合。";
pub const ZODIAC_GOOD_SUGGESTION: &str = "适当关注对方的性格特点，在相处中互相迁就，感情会更加稳定。";

pub const ZODIAC_NEUTRAL_REMARK: &str = "的星座组合需要更多理解。";
pub const ZODIAC_NEUTRAL_SUGGESTION: &str = "建议多观察对方的性格特点，适当调整自己的沟通方式。";

pub const ZODIAC_CHALLENGING_REMARK: &str = "的星座组合可能需要更多努力。";
pub const ZODIAC_CHALLENGING_SUGGESTION: &str =
    "虽然星座相性不是最理想，但真诚的沟通和理解可以克服这些差异。建议多关注对方的想法和感受。";

pub fn gender_content(user: &str, partner: &str) -> String {
    format!("{}生和{}生组合", user, partner)
}

pub const GENDER_DIFFERENT_SUGGESTION: &str = "异性相吸是很自然的，建议多了解对方的思维方式和情感需求。";
pub const GENDER_SAME_SUGGESTION: &str = "相同性别可能更容易理解对方，但也要注意保持适当的独立空间。";

pub const ADVICE_DESTINED: [&str; 5] = [
    "你们的匹配度非常高！建议：",
    "1. 保持真诚的沟通和理解",
    "2. 共同规划未来，制定共同目标",
    "3. 在保持甜蜜的同时，也要保持适当的个人空间",
    "4. 多创造共同的美好回忆",
];

pub const ADVICE_FAIRLY: [&str; 5] = [
    "你们有着不错的匹配度！建议：",
    "1. 多关注对方的需求和感受",
    "2. 培养共同的兴趣爱好",
    "3. 遇到分歧时保持开放和包容的心态",
    "4. 给予对方足够的成长空间",
];

pub const ADVICE_NEEDS_UNDERSTANDING: [&str; 5] = [
    "虽然匹配度不是最理想，但真爱可以超越一切！建议：",
    "1. 保持耐心，给予彼此更多的理解和包容",
    "2. 多进行深入的沟通，了解对方的想法和感受",
    "3. 寻找并珍惜共同的兴趣和价值观",
    "4. 适当调整自己的期望，专注于感情的成长",
];

pub const SHARE_TITLE: &str = "AI恋爱契合度测试结果";

pub fn share_text(score: u8, verdict_label: &str) -> String {
    format!(
        "我和TA的契合度测试结果：{}%\n{}\n\n快来测试你们的缘分吧！",
        score, verdict_label
    )
}
