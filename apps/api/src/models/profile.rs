use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Ordered career stage. `Unknown` sits outside the scale and never matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SeniorityLevel {
    Junior,
    Mid,
    Senior,
    Staff,
    #[default]
    Unknown,
}

impl SeniorityLevel {
    /// Lenient parse: trims, case-folds, accepts a few common abbreviations.
    /// Anything unrecognized degrades to `Unknown`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "junior" | "jr" | "entry" => Self::Junior,
            "mid" | "mid-level" | "intermediate" => Self::Mid,
            "senior" | "sr" => Self::Senior,
            "staff" => Self::Staff,
            _ => Self::Unknown,
        }
    }

    /// Position on the junior < mid < senior < staff scale.
    pub fn rank(self) -> Option<u8> {
        match self {
            Self::Junior => Some(0),
            Self::Mid => Some(1),
            Self::Senior => Some(2),
            Self::Staff => Some(3),
            Self::Unknown => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Junior => "junior",
            Self::Mid => "mid",
            Self::Senior => "senior",
            Self::Staff => "staff",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for SeniorityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SeniorityLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SeniorityLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        Ok(raw.as_str().map(Self::parse).unwrap_or_default())
    }
}

/// Keeps the string entries of a list. `null`, scalars, and non-string
/// entries degrade to nothing rather than failing the request.
fn lenient_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        _ => return Ok(Vec::new()),
    };
    Ok(items
        .into_iter()
        .filter_map(|item| match item {
            Value::String(s) => Some(s),
            _ => None,
        })
        .collect())
}

/// A non-string location is treated as absent.
fn lenient_location<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

/// Job ids are opaque: strings pass through, numbers are stringified.
/// Anything else, `null` included, is rejected.
fn opaque_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(de::Error::invalid_type(
            unexpected(&other),
            &"a string or numeric job id",
        )),
    }
}

fn unexpected(value: &Value) -> de::Unexpected<'_> {
    match value {
        Value::Null => de::Unexpected::Unit,
        Value::Bool(b) => de::Unexpected::Bool(*b),
        Value::Array(_) => de::Unexpected::Seq,
        Value::Object(_) => de::Unexpected::Map,
        Value::String(s) => de::Unexpected::Str(s),
        Value::Number(_) => de::Unexpected::Other("number"),
    }
}

/// Candidate side of a scoring call, as loaded by the caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(default, deserialize_with = "lenient_list")]
    pub resume_skills: Vec<String>,
    #[serde(default)]
    pub seniority_level: SeniorityLevel,
    #[serde(default, deserialize_with = "lenient_location")]
    pub location: Option<String>,
}

/// A job posting. `id` is opaque and required; everything else may be absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobPosting {
    #[serde(deserialize_with = "opaque_id")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_list")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub must_have_skills: Vec<String>,
    #[serde(default)]
    pub seniority_level: SeniorityLevel,
    #[serde(default, deserialize_with = "lenient_location")]
    pub location: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seniority_parse_is_case_insensitive() {
        assert_eq!(SeniorityLevel::parse("  Senior "), SeniorityLevel::Senior);
        assert_eq!(SeniorityLevel::parse("STAFF"), SeniorityLevel::Staff);
        assert_eq!(SeniorityLevel::parse("jr"), SeniorityLevel::Junior);
    }

    #[test]
    fn test_unrecognized_seniority_is_unknown() {
        assert_eq!(SeniorityLevel::parse("wizard"), SeniorityLevel::Unknown);
        assert_eq!(SeniorityLevel::parse(""), SeniorityLevel::Unknown);
        assert_eq!(SeniorityLevel::Unknown.rank(), None);
    }

    #[test]
    fn test_profile_missing_fields_default() {
        let profile: CandidateProfile = serde_json::from_str("{}").unwrap();
        assert!(profile.resume_skills.is_empty());
        assert_eq!(profile.seniority_level, SeniorityLevel::Unknown);
        assert!(profile.location.is_none());
    }

    #[test]
    fn test_null_fields_default() {
        let json = r#"{"resume_skills": null, "seniority_level": null, "location": null}"#;
        let profile: CandidateProfile = serde_json::from_str(json).unwrap();
        assert!(profile.resume_skills.is_empty());
        assert_eq!(profile.seniority_level, SeniorityLevel::Unknown);
    }

    #[test]
    fn test_job_requires_id() {
        let result = serde_json::from_str::<JobPosting>(r#"{"skills": ["Go"]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_job_deserializes_with_mixed_case_seniority() {
        let json = r#"{"id": "job-1", "skills": ["Go"], "seniority_level": "Mid"}"#;
        let job: JobPosting = serde_json::from_str(json).unwrap();
        assert_eq!(job.seniority_level, SeniorityLevel::Mid);
        assert!(job.must_have_skills.is_empty());
    }

    #[test]
    fn test_non_string_seniority_is_unknown() {
        let json = r#"{"seniority_level": 3}"#;
        let profile: CandidateProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.seniority_level, SeniorityLevel::Unknown);
    }

    #[test]
    fn test_non_string_skill_entries_are_dropped() {
        let json = r#"{"resume_skills": ["Go", null, 5, {"name": "Rust"}, "SQL"]}"#;
        let profile: CandidateProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.resume_skills, vec!["Go", "SQL"]);
    }

    #[test]
    fn test_scalar_skill_list_becomes_empty() {
        let json = r#"{"id": "job-1", "skills": "Go", "must_have_skills": 7}"#;
        let job: JobPosting = serde_json::from_str(json).unwrap();
        assert!(job.skills.is_empty());
        assert!(job.must_have_skills.is_empty());
    }

    #[test]
    fn test_non_string_location_is_absent() {
        let json = r#"{"id": "job-1", "location": {"city": "Berlin"}}"#;
        let job: JobPosting = serde_json::from_str(json).unwrap();
        assert!(job.location.is_none());
    }

    #[test]
    fn test_numeric_job_id_is_stringified() {
        let job: JobPosting = serde_json::from_str(r#"{"id": 42}"#).unwrap();
        assert_eq!(job.id, "42");
    }

    #[test]
    fn test_null_job_id_rejected() {
        assert!(serde_json::from_str::<JobPosting>(r#"{"id": null}"#).is_err());
        assert!(serde_json::from_str::<JobPosting>(r#"{"id": ["a"]}"#).is_err());
    }
}
