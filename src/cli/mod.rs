use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "vibe_blueprint",
    version,
    about = "Turn a project description into a UI blueprint, then into a full UI design specification"
)]
pub struct Args {
    /// Project description. When omitted it is read interactively.
    #[arg(long, short)]
    pub description: Option<String>,

    /// TOML config file.
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long)]
    pub model: Option<String>,

    /// Overrides GEMINI_API_KEY / API_KEY.
    #[arg(long)]
    pub api_key: Option<String>,

    #[arg(long)]
    pub api_base: Option<String>,

    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Where request/response artifacts are written.
    #[arg(long)]
    pub root: Option<String>,

    #[arg(long, default_value_t = false)]
    pub save_request: bool,

    #[arg(long, default_value_t = false)]
    pub save_response: bool,

    /// Confirm the generated blueprint without asking.
    #[arg(long, default_value_t = false)]
    pub auto_approve: bool,

    /// Write the final design specification to this file.
    #[arg(long)]
    pub out: Option<String>,

    /// Copy the final design specification to the clipboard.
    #[arg(long, default_value_t = false)]
    pub copy: bool,

    #[arg(long, default_value_t = false)]
    pub debug: bool,
}

impl Args {
    /// Run straight through without prompts: description given and review skipped.
    pub fn non_interactive(&self) -> bool {
        self.description.is_some() && self.auto_approve
    }
}
