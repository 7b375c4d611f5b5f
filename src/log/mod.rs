use chrono::{DateTime, Utc};
use fs_err as fs;
use serde::Serialize;
use serde_json::to_string_pretty;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use crate::config::Config;
use crate::wire::GenerationRequest;

/// Install the stderr subscriber. `RUST_LOG` wins over the `--debug` default.
pub fn init(debug: bool) {
    let default = if debug { "vibe_blueprint=debug" } else { "vibe_blueprint=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Raw response captured for one stage.
#[derive(Debug, Serialize)]
pub struct StageResponse<'a> {
    pub received_at: DateTime<Utc>,
    pub ok: bool,
    pub text: &'a str,
}

#[derive(Debug, Clone)]
pub struct SavedPaths {
    pub dir: PathBuf,
    pub request: Option<PathBuf>,
    pub response: Option<PathBuf>,
}

/// Per-session artifact directory; disabled when neither flag is set.
#[derive(Debug, Clone)]
pub struct Artifacts {
    root: PathBuf,
    session: Uuid,
    save_request: bool,
    save_response: bool,
}

pub fn session_dir(root: &Path, session: Uuid) -> PathBuf {
    root.join(".vibe").join("blueprint").join(session.to_string())
}

impl Artifacts {
    pub fn new(cfg: &Config, session: Uuid) -> Self {
        Self {
            root: PathBuf::from(&cfg.root),
            session,
            save_request: cfg.save_request,
            save_response: cfg.save_response,
        }
    }

    pub fn enabled(&self) -> bool {
        self.save_request || self.save_response
    }

    pub fn dir(&self) -> PathBuf {
        session_dir(&self.root, self.session)
    }

    pub fn save_stage(
        &self,
        stage: &str,
        req: &GenerationRequest,
        resp: Result<&str, &str>,
    ) -> anyhow::Result<SavedPaths> {
        let dir = self.dir();
        fs::create_dir_all(&dir)?;

        let mut request_path = None;
        let mut response_path = None;

        if self.save_request {
            let p = dir.join(format!("{stage}.request.json"));
            fs::write(&p, to_string_pretty(req)?)?;
            request_path = Some(p);
        }

        if self.save_response {
            let (ok, text) = match resp {
                Ok(t) => (true, t),
                Err(t) => (false, t),
            };
            let body = StageResponse { received_at: Utc::now(), ok, text };
            let p = dir.join(format!("{stage}.response.json"));
            fs::write(&p, to_string_pretty(&body)?)?;
            response_path = Some(p);
        }

        Ok(SavedPaths { dir, request: request_path, response: response_path })
    }

    /// Save and log the outcome; artifact problems never interrupt the workflow.
    pub fn record(&self, stage: &str, req: &GenerationRequest, resp: Result<&str, &str>) {
        if !self.enabled() {
            return;
        }
        match self.save_stage(stage, req, resp) {
            Ok(saved) => print_saved_paths(stage, &saved),
            Err(e) => tracing::warn!(stage, error = %format!("{e:#}"), "failed to save artifacts"),
        }
    }
}

pub fn print_saved_paths(stage: &str, saved: &SavedPaths) {
    tracing::debug!(stage, dir = %saved.dir.display(), "artifacts directory");
    match &saved.request {
        Some(p) => tracing::debug!(stage, path = %p.display(), "request saved"),
        None => tracing::debug!(stage, "request not saved (flag off)"),
    }
    match &saved.response {
        Some(p) => tracing::debug!(stage, path = %p.display(), "response saved"),
        None => tracing::debug!(stage, "response not saved (flag off)"),
    }
}
