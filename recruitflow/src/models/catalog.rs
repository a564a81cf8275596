//! Shared skill and language reference data.

use serde::{Deserialize, Serialize};

/// A skill that candidates can have and vacancies can require.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    /// Skill identifier.
    pub id: i64,
    /// Skill name.
    pub name: String,
}

/// Request body for creating a skill.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCreateRequest {
    /// Skill name.
    pub name: String,
}

/// A spoken language with an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    /// Language identifier.
    pub id: i64,
    /// Language name.
    pub name: String,
}

/// Request body for creating a language.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageCreateRequest {
    /// Language name.
    pub name: String,
}
