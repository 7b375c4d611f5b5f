use tracing::{error, info};

use crate::errors::BlueprintError;
use crate::log::Artifacts;
use crate::parse;
use crate::prompt;
use crate::provider::Collaborator;
use crate::wire::{Answers, MasterplanData};

pub const INVALID_KEY_MSG: &str = "Gemini API key is not valid. Please check your configuration.";
pub const FORMAT_TROUBLE_MSG: &str =
    "The AI had trouble formatting its response. Please try again, or rephrase your request.";
pub const EMPTY_DESIGN_MSG: &str =
    "Received an empty response from Gemini API when generating UI design prompt.";

const BLUEPRINT_FALLBACK: &str = "An unknown error occurred while communicating with the Gemini API.";
const DESIGN_FALLBACK: &str =
    "An unknown error occurred while communicating with the Gemini API for UI design prompt generation.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Blueprint,
    DesignPrompt,
}

impl Call {
    pub fn stage_name(self) -> &'static str {
        match self {
            Call::Blueprint => "blueprint",
            Call::DesignPrompt => "design",
        }
    }
}

/// Map a failure message to what the user sees. The credential rule applies to
/// both calls; the structured-output rule only to the blueprint call.
pub fn remap_message(call: Call, message: &str) -> String {
    if message.contains("API key not valid") {
        return INVALID_KEY_MSG.to_string();
    }
    if call == Call::Blueprint && message.contains("json") {
        return FORMAT_TROUBLE_MSG.to_string();
    }
    if message.trim().is_empty() {
        return match call {
            Call::Blueprint => BLUEPRINT_FALLBACK,
            Call::DesignPrompt => DESIGN_FALLBACK,
        }
        .to_string();
    }
    message.to_string()
}

fn remap(call: Call, err: BlueprintError) -> BlueprintError {
    match err {
        BlueprintError::Collaborator(m) => BlueprintError::Collaborator(remap_message(call, &m)),
        BlueprintError::DataShape(m) => BlueprintError::DataShape(remap_message(call, &m)),
        other => other,
    }
}

/// Description in, parsed blueprint out.
pub async fn blueprint(
    collab: &dyn Collaborator,
    model: &str,
    description: &str,
    artifacts: Option<&Artifacts>,
) -> Result<Answers, BlueprintError> {
    let req = prompt::blueprint_request(model, description);
    info!(model, chars = description.chars().count(), "requesting blueprint");

    let outcome = match collab.send(&req).await {
        Ok(raw) => {
            if let Some(a) = artifacts {
                a.record(Call::Blueprint.stage_name(), &req, Ok(raw.as_str()));
            }
            parse::parse_blueprint(&raw)
        }
        Err(e) => {
            let msg = format!("{e:#}");
            if let Some(a) = artifacts {
                a.record(Call::Blueprint.stage_name(), &req, Err(msg.as_str()));
            }
            error!(error = %msg, "blueprint generation failed");
            Err(BlueprintError::Collaborator(msg))
        }
    };

    outcome.map_err(|e| remap(Call::Blueprint, e))
}

/// Masterplan in, long-form specification text out.
pub async fn design_prompt(
    collab: &dyn Collaborator,
    model: &str,
    masterplan: Option<&MasterplanData>,
    artifacts: Option<&Artifacts>,
) -> Result<String, BlueprintError> {
    let req = prompt::design_prompt_request(model, masterplan)?;
    info!(model, "requesting UI design prompt");

    let outcome = match collab.send(&req).await {
        Ok(text) => {
            if let Some(a) = artifacts {
                a.record(Call::DesignPrompt.stage_name(), &req, Ok(text.as_str()));
            }
            let text = text.trim();
            if text.is_empty() {
                Err(BlueprintError::Collaborator(EMPTY_DESIGN_MSG.into()))
            } else {
                Ok(text.to_string())
            }
        }
        Err(e) => {
            let msg = format!("{e:#}");
            if let Some(a) = artifacts {
                a.record(Call::DesignPrompt.stage_name(), &req, Err(msg.as_str()));
            }
            error!(error = %msg, "design prompt generation failed");
            Err(BlueprintError::Collaborator(msg))
        }
    };

    outcome.map_err(|e| remap(Call::DesignPrompt, e))
}
