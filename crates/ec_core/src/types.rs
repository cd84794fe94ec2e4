use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Literal stored in any field the transcript does not cover. The enum
/// "not mentioned" variants serialize to the same string.
pub const NOT_MENTIONED: &str = "Not mentioned in transcript";

/// An uploaded file, held in memory for the duration of one request.
#[derive(Debug, Clone)]
pub struct Document {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl Document {
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            bytes,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ManagementTone {
    Optimistic,
    Neutral,
    Cautious,
    Pessimistic,
    #[serde(rename = "Not mentioned in transcript")]
    NotMentioned,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
    #[serde(rename = "Not mentioned in transcript")]
    NotMentioned,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ForwardGuidance {
    #[schemars(
        description = "Forward guidance regarding revenue. If missing, output 'Not mentioned in transcript'"
    )]
    pub revenue: String,
    #[schemars(
        description = "Forward guidance regarding margins. If missing, output 'Not mentioned in transcript'"
    )]
    pub margin: String,
    #[schemars(
        description = "Forward guidance regarding capital expenditures (capex). If missing, output 'Not mentioned in transcript'"
    )]
    pub capex: String,
}

/// Structured summary of an earnings call or management commentary.
///
/// This is the shape the model provider is asked to produce; every field is
/// required and none are nullable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct EarningsCallSummary {
    #[schemars(description = "Overall tone of the management.")]
    pub management_tone: ManagementTone,
    #[schemars(description = "Level of confidence expressed by management.")]
    pub confidence_level: ConfidenceLevel,
    #[schemars(description = "3-5 key positive points mentioned.", length(min = 1))]
    pub key_positives: Vec<String>,
    #[schemars(description = "3-5 key concerns or risks mentioned.", length(min = 1))]
    pub key_concerns: Vec<String>,
    #[schemars(description = "Forward guidance details.")]
    pub forward_guidance: ForwardGuidance,
    #[schemars(
        description = "Information regarding capacity utilization. If missing, output 'Not mentioned in transcript'"
    )]
    pub capacity_utilization: String,
    #[schemars(description = "2-3 specific growth initiatives mentioned.", length(min = 1))]
    pub growth_initiatives: Vec<String>,
    #[schemars(description = "Limitations, headwinds or challenges discussed.", length(min = 1))]
    pub limitations: Vec<String>,
}

impl EarningsCallSummary {
    /// A summary where every field carries the sentinel value.
    pub fn not_mentioned() -> Self {
        Self {
            management_tone: ManagementTone::NotMentioned,
            confidence_level: ConfidenceLevel::NotMentioned,
            key_positives: vec![NOT_MENTIONED.to_string()],
            key_concerns: vec![NOT_MENTIONED.to_string()],
            forward_guidance: ForwardGuidance {
                revenue: NOT_MENTIONED.to_string(),
                margin: NOT_MENTIONED.to_string(),
                capex: NOT_MENTIONED.to_string(),
            },
            capacity_utilization: NOT_MENTIONED.to_string(),
            growth_initiatives: vec![NOT_MENTIONED.to_string()],
            limitations: vec![NOT_MENTIONED.to_string()],
        }
    }
}

pub fn is_mentioned(value: &str) -> bool {
    value.trim() != NOT_MENTIONED
}
