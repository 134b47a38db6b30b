use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

pub type RequestId = u64;

/// A resume chosen for upload: its display name and raw content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeFile {
    pub name: String,
    pub data: Bytes,
}

impl ResumeFile {
    pub fn new(name: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
        }
    }

    pub fn size(&self) -> u64 {
        self.data.len() as u64
    }

    /// Size in megabytes with two decimals, e.g. `"1.25 MB"`.
    pub fn size_label(&self) -> String {
        format!("{:.2} MB", self.size() as f64 / 1024.0 / 1024.0)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ContactInfo {
    pub fn email(&self) -> Option<&str> {
        non_empty(self.email.as_deref())
    }

    pub fn phone(&self) -> Option<&str> {
        non_empty(self.phone.as_deref())
    }

    pub fn is_empty(&self) -> bool {
        self.email().is_none() && self.phone().is_none()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Scoring outcome for one resume of a batch.
///
/// The typed fields are a tolerant reading of the payload: a field that is
/// missing, `null` or of the wrong type reads as empty. `source` keeps the
/// object exactly as the collaborator sent it, and serialization emits it
/// unchanged, so exports are lossless. Values built in code have an empty
/// `source` and serialize from the typed fields.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnalysisResult {
    pub filename: String,
    pub match_score: f64,
    pub contact_info: Option<ContactInfo>,
    pub common_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub suggestions: String,
    pub source: Map<String, Value>,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct AnalysisFields {
    #[serde(deserialize_with = "lenient")]
    filename: String,
    #[serde(deserialize_with = "lenient")]
    match_score: f64,
    #[serde(deserialize_with = "lenient")]
    contact_info: Option<ContactInfo>,
    #[serde(deserialize_with = "lenient")]
    common_skills: Vec<String>,
    #[serde(deserialize_with = "lenient")]
    missing_skills: Vec<String>,
    #[serde(deserialize_with = "lenient")]
    suggestions: String,
}

#[derive(Serialize)]
struct AnalysisFieldsRef<'a> {
    filename: &'a str,
    match_score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    contact_info: Option<&'a ContactInfo>,
    common_skills: &'a [String],
    missing_skills: &'a [String],
    suggestions: &'a str,
}

impl<'de> Deserialize<'de> for AnalysisResult {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let source = match Value::deserialize(deserializer)? {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        let fields = AnalysisFields::deserialize(Value::Object(source.clone()))
            .map_err(serde::de::Error::custom)?;
        Ok(Self {
            filename: fields.filename,
            match_score: fields.match_score,
            contact_info: fields.contact_info,
            common_skills: fields.common_skills,
            missing_skills: fields.missing_skills,
            suggestions: fields.suggestions,
            source,
        })
    }
}

impl Serialize for AnalysisResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if !self.source.is_empty() {
            return self.source.serialize(serializer);
        }
        AnalysisFieldsRef {
            filename: &self.filename,
            match_score: self.match_score,
            contact_info: self.contact_info.as_ref(),
            common_skills: &self.common_skills,
            missing_skills: &self.missing_skills,
            suggestions: &self.suggestions,
        }
        .serialize(serializer)
    }
}

/// One batch response: results in collaborator order (descending score).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BatchResultSet {
    #[serde(default, deserialize_with = "lenient")]
    pub total_resumes: usize,
    #[serde(default)]
    pub results: Vec<AnalysisResult>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SkillsAnalysis {
    #[serde(default, deserialize_with = "lenient")]
    pub common_skills: Vec<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub missing_skills: Vec<String>,
}

/// Scoring outcome for the single-resume flow.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SingleAnalysis {
    #[serde(default, deserialize_with = "lenient")]
    pub match_score: f64,
    #[serde(default, deserialize_with = "lenient")]
    pub skills_analysis: SkillsAnalysis,
    #[serde(default, deserialize_with = "lenient")]
    pub suggestions: String,
    #[serde(default, deserialize_with = "lenient")]
    pub contact_info: Option<ContactInfo>,
    /// Base64-encoded PNG chart, when the collaborator produced one.
    #[serde(default, deserialize_with = "lenient")]
    pub visualization: Option<String>,
}

/// Reads any JSON value; one that does not fit `T` (including `null`)
/// becomes `T::default()`.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}
