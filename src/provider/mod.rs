use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use crate::config::Config;
use crate::wire::GenerationRequest;

pub mod gemini;

/// The external generative-language service. Returns the raw generated text.
#[async_trait]
pub trait Collaborator: Send + Sync {
    async fn send(&self, req: &GenerationRequest) -> Result<String>;
}

pub type DynCollaborator = Arc<dyn Collaborator>;

/// Whether the collaborator could be constructed, resolved once at startup.
#[derive(Clone)]
pub enum Availability {
    Available(DynCollaborator),
    /// No credential was supplied.
    NotConfigured,
    /// A credential was supplied but the client could not be built.
    InitFailed(String),
}

impl Availability {
    pub fn is_available(&self) -> bool {
        matches!(self, Availability::Available(_))
    }

    pub fn collaborator(&self) -> Option<&DynCollaborator> {
        match self {
            Availability::Available(c) => Some(c),
            _ => None,
        }
    }

    /// Why the session cannot reach the input stage; `None` when available.
    pub fn unavailable_reason(&self) -> Option<String> {
        match self {
            Availability::Available(_) => None,
            Availability::NotConfigured => Some(
                "AI Service is not configured. Set GEMINI_API_KEY (or API_KEY), pass --api-key, or add api_key to the config file."
                    .into(),
            ),
            Availability::InitFailed(reason) => Some(format!(
                "Failed to initialize AI services. Please check API_KEY and network. ({reason})"
            )),
        }
    }
}

impl std::fmt::Debug for Availability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Availability::Available(_) => f.write_str("Available"),
            Availability::NotConfigured => f.write_str("NotConfigured"),
            Availability::InitFailed(r) => f.debug_tuple("InitFailed").field(r).finish(),
        }
    }
}

/// Build the Gemini client from configuration. Never fails outright: problems
/// are reported through the returned capability.
pub fn connect(cfg: &Config) -> Availability {
    let key = match cfg.api_key.as_deref().map(str::trim) {
        Some(k) if !k.is_empty() => k,
        _ => {
            tracing::warn!("no API key configured; generation calls are unavailable");
            return Availability::NotConfigured;
        }
    };

    match gemini::Gemini::new(key, &cfg.api_base, cfg.timeout_secs) {
        Ok(client) => Availability::Available(Arc::new(client)),
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "failed to initialize Gemini client");
            Availability::InitFailed(format!("{e:#}"))
        }
    }
}
