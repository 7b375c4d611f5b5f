use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use std::sync::LazyLock;
use tracing::warn;

use crate::errors::BlueprintError;
use crate::wire::Answers;

/// Fields that must be present as strings for a response to count as a blueprint.
const REQUIRED: [&str; 2] = ["mainPurpose", "targetAudience"];

static CODE_FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^```(\w*)?\s*\n?(.*?)\n?\s*```$").expect("code fence pattern compiles")
});

/// Outcome of checking a parsed object against the ten-field schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Valid(Answers),
    Invalid(String),
}

/// Turn the raw text of the blueprint call into [`Answers`].
pub fn parse_blueprint(raw: &str) -> Result<Answers, BlueprintError> {
    let body = strip_code_fence(raw.trim());

    let value: Value = match serde_json::from_str(&body) {
        Ok(v) => v,
        Err(e) => {
            warn!(error = %e, raw = %body, "blueprint response is not valid JSON");
            return Err(BlueprintError::data_shape());
        }
    };

    match validate(&value) {
        Validation::Valid(answers) => Ok(answers),
        Validation::Invalid(reason) => {
            warn!(%reason, raw = %body, "blueprint response failed schema validation");
            Err(BlueprintError::data_shape())
        }
    }
}

/// Remove a surrounding ```lang ... ``` fence, keeping only the inner content.
/// Text that is not fenced comes back unchanged.
pub fn strip_code_fence(text: &str) -> String {
    match CODE_FENCE.captures(text).and_then(|c| c.get(2)) {
        Some(inner) if !inner.as_str().is_empty() => inner.as_str().trim().to_string(),
        _ => text.to_string(),
    }
}

/// Check presence and text type of every expected field. The first two are
/// mandatory; the rest may be absent or null but must be strings when given.
/// Unknown keys are ignored.
pub fn validate(value: &Value) -> Validation {
    let obj = match value.as_object() {
        Some(o) => o,
        None => return Validation::Invalid("response is not a JSON object".into()),
    };

    for key in REQUIRED {
        match obj.get(key) {
            Some(Value::String(_)) => {}
            Some(_) => return Validation::Invalid(format!("field `{key}` is not a string")),
            None => return Validation::Invalid(format!("field `{key}` is missing")),
        }
    }

    for key in Answers::FIELDS {
        match obj.get(key) {
            None | Some(Value::Null) | Some(Value::String(_)) => {}
            Some(_) => return Validation::Invalid(format!("field `{key}` is not a string")),
        }
    }

    match Answers::deserialize(value) {
        Ok(answers) => Validation::Valid(answers),
        Err(e) => Validation::Invalid(e.to_string()),
    }
}
