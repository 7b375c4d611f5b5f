use serde::{Deserialize, Serialize};

/// ========================================
/// Blueprint data and outbound request shapes
/// ========================================

/// The ten-field blueprint produced by the first generation call.
/// Fields are optional so a partially filled response survives parsing;
/// the default value has every field absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answers {
    #[serde(default)]
    pub main_purpose: Option<String>,
    #[serde(default)]
    pub target_audience: Option<String>,
    #[serde(default)]
    pub desired_vibe: Option<String>,
    #[serde(default)]
    pub core_message: Option<String>,
    #[serde(default)]
    pub audience_details: Option<String>,
    #[serde(default)]
    pub visual_inspirations: Option<String>,
    #[serde(default)]
    pub essential_actions: Option<String>,
    #[serde(default)]
    pub user_journeys: Option<String>,
    #[serde(default)]
    pub content_strategy: Option<String>,
    #[serde(default)]
    pub responsiveness_accessibility: Option<String>,
}

impl Answers {
    /// Wire names of the ten fields, in declaration order.
    pub const FIELDS: [&'static str; 10] = [
        "mainPurpose",
        "targetAudience",
        "desiredVibe",
        "coreMessage",
        "audienceDetails",
        "visualInspirations",
        "essentialActions",
        "userJourneys",
        "contentStrategy",
        "responsivenessAccessibility",
    ];
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectOverview {
    pub primary_goal: Option<String>,
    pub target_audience: Option<String>,
    pub desired_vibe: Option<String>,
    pub core_message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Details {
    pub details: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionsAndFlows {
    pub actions: Option<String>,
    pub journeys: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionStyle {
    pub inspiration: Option<String>,
}

/// Six-section review grouping over [`Answers`]. Always derived, never edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MasterplanData {
    pub project_overview: ProjectOverview,
    pub target_audience_analysis: Details,
    pub key_ui_sections_and_flows: SectionsAndFlows,
    pub content_strategy: Details,
    pub visual_and_interaction_style: InteractionStyle,
    pub responsiveness_and_accessibility: Details,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Instruction {
    pub system: String,
    pub user: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    Json,
    Text,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationParams {
    pub temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
    pub response_format: ResponseFormat,
}

/// One outbound call to the collaborator. The credential never lives here,
/// so the whole request can be saved as an artifact.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationRequest {
    pub model: String,
    pub instruction: Instruction,
    pub params: GenerationParams,
}
