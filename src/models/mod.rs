// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    CompatibilityReport, FactorCategory, FactorResult, Gender, Profile, Verdict, ZodiacSign,
    MAX_AGE, MIN_AGE,
};
pub use requests::{AgeField, EvaluateRequest, Field, FieldErrors, PersonErrors, ProfileError, ProfileInput, ShareRequest};
pub use responses::{ErrorResponse, EvaluateResponse, HealthResponse, ZodiacEntry, ZodiacListResponse};
