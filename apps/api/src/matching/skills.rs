//! Boundary codec for skill lists.
//!
//! Storage rows and inbound JSON carry skills as a single `", "`-joined string
//! (`"Python, Flask, SQL"`). Inside the crate a skill list is always a `Vec<String>`.

use serde::{Deserialize, Deserializer, Serializer};

pub const SKILL_DELIMITER: &str = ", ";

/// Splits a joined skill string on the literal `", "`.
///
/// No trimming or case folding is applied. Empty segments are dropped, so an
/// empty column decodes to an empty list rather than `[""]`.
pub fn split_skills(joined: &str) -> Vec<String> {
    joined
        .split(SKILL_DELIMITER)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn join_skills(skills: &[String]) -> String {
    skills.join(SKILL_DELIMITER)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SkillsRepr {
    Joined(String),
    List(Vec<String>),
}

/// `#[serde(deserialize_with)]` helper accepting either the joined string or a JSON array.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match SkillsRepr::deserialize(deserializer).map_err(|_| {
        serde::de::Error::custom("skills must be a \", \"-joined string or an array of strings")
    })? {
        SkillsRepr::Joined(joined) => Ok(split_skills(&joined)),
        SkillsRepr::List(list) => Ok(list),
    }
}

/// `#[serde(serialize_with)]` helper emitting the joined string form.
pub fn serialize<S>(skills: &[String], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&join_skills(skills))
}
