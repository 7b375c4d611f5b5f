use anyhow::{Context, Result};
use fs_err as fs;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::cli::Args;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-preview-04-17";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// Environment variables consulted for the credential, in order.
pub const KEY_ENV_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub schema_version: String,
    /// Directory under which `.vibe/blueprint/<session>` artifacts are written.
    pub root: String,
    pub model: String,
    pub api_base: String,
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    pub timeout_secs: u64,
    pub save_request: bool,
    pub save_response: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schema_version: "2025-05-01".into(),
            root: ".".into(),
            model: DEFAULT_MODEL.into(),
            api_base: DEFAULT_API_BASE.into(),
            api_key: None,
            timeout_secs: 300,
            save_request: false,
            save_response: false,
        }
    }
}

impl Config {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("invalid config file")
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text).with_context(|| format!("while reading {}", path.display()))
    }

    /// Defaults, then the optional TOML file, then environment, then flags.
    pub fn load(args: &Args) -> Result<Self> {
        let mut cfg = match &args.config {
            Some(p) => Self::from_file(Path::new(p))?,
            None => Self::default(),
        };
        cfg.apply_env(|k| std::env::var(k).ok());
        cfg.apply_args(args);
        Ok(cfg)
    }

    /// Environment keys win over a key stored in the config file.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(key) = KEY_ENV_VARS
            .iter()
            .filter_map(|k| lookup(*k))
            .find(|v| !v.trim().is_empty())
        {
            self.api_key = Some(key);
        }
    }

    pub fn apply_args(&mut self, args: &Args) {
        if let Some(root) = &args.root {
            self.root = root.clone();
        }
        if let Some(model) = &args.model {
            self.model = model.clone();
        }
        if let Some(base) = &args.api_base {
            self.api_base = base.clone();
        }
        if let Some(key) = &args.api_key {
            self.api_key = Some(key.clone());
        }
        if let Some(t) = args.timeout_secs {
            self.timeout_secs = t;
        }
        self.save_request |= args.save_request;
        self.save_response |= args.save_response;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.model, DEFAULT_MODEL);
        assert!(cfg.api_key.is_none());
        assert!(!cfg.save_request);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let cfg = Config::from_toml_str("model = \"gemini-pro\"\nsave_response = true\n").expect("parse");
        assert_eq!(cfg.model, "gemini-pro");
        assert!(cfg.save_response);
        assert_eq!(cfg.timeout_secs, 300);
        assert_eq!(cfg.api_base, DEFAULT_API_BASE);
    }

    #[test]
    fn loads_from_file() {
        let mut f = tempfile::NamedTempFile::new().expect("tmp");
        writeln!(f, "api_key = \"from-file\"\ntimeout_secs = 12").expect("write");
        let cfg = Config::from_file(f.path()).expect("load");
        assert_eq!(cfg.api_key.as_deref(), Some("from-file"));
        assert_eq!(cfg.timeout_secs, 12);
    }

    #[test]
    fn api_key_is_never_serialized() {
        let cfg = Config { api_key: Some("secret".into()), ..Config::default() };
        let out = toml::to_string(&cfg).expect("serialize");
        assert!(!out.contains("secret"));
    }

    #[test]
    fn key_precedence_flag_then_env_then_file() {
        let env: HashMap<&str, &str> =
            [("GEMINI_API_KEY", ""), ("API_KEY", "from-env")].into_iter().collect();
        let lookup = |k: &str| env.get(k).map(|v| v.to_string());

        let mut cfg = Config { api_key: Some("from-file".into()), ..Config::default() };
        cfg.apply_env(lookup);
        assert_eq!(cfg.api_key.as_deref(), Some("from-env"));

        let args = Args::parse_from(["vibe_blueprint", "--api-key", "from-flag", "--save-request"]);
        cfg.apply_args(&args);
        assert_eq!(cfg.api_key.as_deref(), Some("from-flag"));
        assert!(cfg.save_request);
    }

    #[test]
    fn gemini_key_wins_over_generic_key() {
        let mut cfg = Config::default();
        cfg.apply_env(|k| match k {
            "GEMINI_API_KEY" => Some("gemini".into()),
            "API_KEY" => Some("generic".into()),
            _ => None,
        });
        assert_eq!(cfg.api_key.as_deref(), Some("gemini"));
    }
}
