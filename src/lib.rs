//! Compat Algo - rule-based compatibility scoring
//!
//! This library provides a deterministic engine that scores two people's
//! compatibility from their age, gender and zodiac sign, together with the
//! input validation and HTTP surface that wrap it.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{evaluate, ShareMessage};
pub use models::{CompatibilityReport, FactorResult, Gender, Profile, Verdict, ZodiacSign};
