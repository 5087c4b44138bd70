use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::Validate;

use crate::models::domain::{Gender, Profile, ZodiacSign, MAX_AGE, MIN_AGE};

/// Age as submitted by a form: a JSON integer, a JSON float, or text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AgeField {
    Number(i64),
    Float(f64),
    Text(String),
}

/// Raw, unvalidated form fields for one person
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileInput {
    #[serde(default)]
    pub age: Option<AgeField>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub zodiac: Option<String>,
}

/// Reasons a [`ProfileInput`] field is rejected
///
/// The display text is the message shown next to the field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("年龄不能为空")]
    MissingAge,

    #[error("年龄必须在18-100岁之间")]
    InvalidAge(String),

    #[error("年龄必须在18-100岁之间")]
    AgeOutOfRange(i64),

    #[error("请选择性别")]
    MissingGender,

    #[error("请选择性别")]
    UnknownGender(String),

    #[error("请选择星座")]
    MissingZodiac,

    #[error("请选择星座")]
    UnknownZodiac(String),
}

/// Form field a [`ProfileError`] belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Age,
    Gender,
    Zodiac,
}

impl ProfileError {
    pub fn field(&self) -> Field {
        match self {
            ProfileError::MissingAge
            | ProfileError::InvalidAge(_)
            | ProfileError::AgeOutOfRange(_) => Field::Age,
            ProfileError::MissingGender | ProfileError::UnknownGender(_) => Field::Gender,
            ProfileError::MissingZodiac | ProfileError::UnknownZodiac(_) => Field::Zodiac,
        }
    }
}

/// Field-level messages for one person; absent fields are valid
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zodiac: Option<String>,
}

impl PersonErrors {
    pub fn is_empty(&self) -> bool {
        self.age.is_none() && self.gender.is_none() && self.zodiac.is_none()
    }

    fn record(&mut self, error: &ProfileError) {
        let message = Some(error.to_string());
        match error.field() {
            Field::Age => self.age = message,
            Field::Gender => self.gender = message,
            Field::Zodiac => self.zodiac = message,
        }
    }
}

impl From<&[ProfileError]> for PersonErrors {
    fn from(errors: &[ProfileError]) -> Self {
        let mut person = PersonErrors::default();
        for error in errors {
            person.record(error);
        }
        person
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors {
    pub user: PersonErrors,
    pub partner: PersonErrors,
}

impl ProfileInput {
    pub fn parse_age(&self) -> Result<u8, ProfileError> {
        let age = match &self.age {
            None => return Err(ProfileError::MissingAge),
            Some(AgeField::Number(n)) => *n,
            Some(AgeField::Float(f)) => whole_age(*f, &f.to_string())?,
            Some(AgeField::Text(s)) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Err(ProfileError::MissingAge);
                }
                match trimmed.parse::<i64>() {
                    Ok(n) => n,
                    Err(_) => trimmed
                        .parse::<f64>()
                        .map_err(|_| ProfileError::InvalidAge(trimmed.to_string()))
                        .and_then(|f| whole_age(f, trimmed))?,
                }
            }
        };

        if age < i64::from(MIN_AGE) || age > i64::from(MAX_AGE) {
            return Err(ProfileError::AgeOutOfRange(age));
        }
        Ok(age as u8)
    }

    pub fn parse_gender(&self) -> Result<Gender, ProfileError> {
        match self.gender.as_deref().map(str::trim) {
            None | Some("") => Err(ProfileError::MissingGender),
            Some(raw) => raw
                .parse()
                .map_err(|_| ProfileError::UnknownGender(raw.to_string())),
        }
    }

    pub fn parse_zodiac(&self) -> Result<ZodiacSign, ProfileError> {
        match self.zodiac.as_deref().map(str::trim) {
            None | Some("") => Err(ProfileError::MissingZodiac),
            Some(raw) => raw
                .parse()
                .map_err(|_| ProfileError::UnknownZodiac(raw.to_string())),
        }
    }

    /// Validate every field, reporting all failures rather than the first
    pub fn to_profile(&self) -> Result<Profile, Vec<ProfileError>> {
        match (self.parse_age(), self.parse_gender(), self.parse_zodiac()) {
            (Ok(age), Ok(gender), Ok(zodiac)) => Ok(Profile::new(age, gender, zodiac)),
            (age, gender, zodiac) => Err([age.err(), gender.err(), zodiac.err()]
                .into_iter()
                .flatten()
                .collect()),
        }
    }
}

/// Ages must be whole years; `raw` is kept for the error
fn whole_age(value: f64, raw: &str) -> Result<i64, ProfileError> {
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(ProfileError::InvalidAge(raw.to_string()));
    }
    // saturates for magnitudes past i64, which the range check rejects
    Ok(value as i64)
}

/// Request to evaluate a pair
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EvaluateRequest {
    #[serde(default)]
    pub user: ProfileInput,
    #[serde(default)]
    pub partner: ProfileInput,
}

impl EvaluateRequest {
    /// Convert both inputs into profiles, or the messages for every bad field
    pub fn to_profiles(&self) -> Result<(Profile, Profile), FieldErrors> {
        match (self.user.to_profile(), self.partner.to_profile()) {
            (Ok(user), Ok(partner)) => Ok((user, partner)),
            (user, partner) => Err(FieldErrors {
                user: user.err().as_deref().map(PersonErrors::from).unwrap_or_default(),
                partner: partner.err().as_deref().map(PersonErrors::from).unwrap_or_default(),
            }),
        }
    }
}

/// Request to format a result for sharing
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ShareRequest {
    #[validate(range(max = 100))]
    pub score: u8,
    #[validate(length(min = 1))]
    #[serde(alias = "verdict_label", rename = "verdictLabel")]
    pub verdict_label: String,
}
