use crate::wire::{
    Answers, Details, InteractionStyle, MasterplanData, ProjectOverview, SectionsAndFlows,
};

/// Regroup the flat answers into the six review sections. Total: absent
/// fields stay absent.
pub fn to_review_view(answers: &Answers) -> MasterplanData {
    MasterplanData {
        project_overview: ProjectOverview {
            primary_goal: answers.main_purpose.clone(),
            target_audience: answers.target_audience.clone(),
            desired_vibe: answers.desired_vibe.clone(),
            core_message: answers.core_message.clone(),
        },
        target_audience_analysis: Details {
            details: answers.audience_details.clone(),
        },
        key_ui_sections_and_flows: SectionsAndFlows {
            actions: answers.essential_actions.clone(),
            journeys: answers.user_journeys.clone(),
        },
        content_strategy: Details {
            details: answers.content_strategy.clone(),
        },
        visual_and_interaction_style: InteractionStyle {
            inspiration: answers.visual_inspirations.clone(),
        },
        responsiveness_and_accessibility: Details {
            details: answers.responsiveness_accessibility.clone(),
        },
    }
}

fn or_na(v: &Option<String>) -> &str {
    match v.as_deref() {
        Some(s) if !s.is_empty() => s,
        _ => "N/A",
    }
}

/// Labelled text block embedded in the design-prompt request.
pub fn to_prompt_block(m: &MasterplanData) -> String {
    let o = &m.project_overview;
    format!(
"**Project Overview & Core Message:**
- Primary Goal: {goal}
- Target Audience: {audience}
- Desired Vibe/Emotional Impact: {vibe}
- Single Most Important Message: {message}

**Target Audience Deep Dive:**
- Behaviors, Comfort Levels, Expectations, Accessibility: {audience_details}

**Key UI Sections, Functionality & User Flows:**
- Essential Actions/Tasks: {actions}
- Typical User Journeys: {journeys}

**Content Strategy:**
- Primary Content Types & Organization: {content}

**Visual & Emotional Direction (Vibe Coding):**
- Visual Inspirations, Colors, Typography, Imagery: {inspiration}

**Responsiveness & Accessibility Basics:**
- Cross-Device Adaptation & Specific Needs: {responsive}",
        goal = or_na(&o.primary_goal),
        audience = or_na(&o.target_audience),
        vibe = or_na(&o.desired_vibe),
        message = or_na(&o.core_message),
        audience_details = or_na(&m.target_audience_analysis.details),
        actions = or_na(&m.key_ui_sections_and_flows.actions),
        journeys = or_na(&m.key_ui_sections_and_flows.journeys),
        content = or_na(&m.content_strategy.details),
        inspiration = or_na(&m.visual_and_interaction_style.inspiration),
        responsive = or_na(&m.responsiveness_and_accessibility.details),
    )
}
