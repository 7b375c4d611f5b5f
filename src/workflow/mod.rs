//! Session state machine for the blueprint wizard.
//!
//! Every outbound call is split in three steps so the caller can render
//! between them: `begin_*` applies the guards and moves to a generating stage,
//! [`Workflow::run`] performs the call, and [`Workflow::complete`] applies the
//! result. Each begin bumps a generation token; a completion whose token is no
//! longer current (for example after a restart) is discarded.

use tracing::{debug, info, warn};

use crate::errors::BlueprintError;
use crate::formatter;
use crate::generate;
use crate::log::Artifacts;
use crate::provider::Availability;
use crate::wire::{Answers, MasterplanData};

pub const BLANK_INPUT_MSG: &str = "Please describe your UI project first.";
pub const UNAVAILABLE_MSG: &str =
    "AI Service is not available. Please ensure your API_KEY is correctly configured.";
pub const MISSING_MASTERPLAN_MSG: &str =
    "Masterplan data is missing. Please generate a blueprint first.";
pub const NO_BLUEPRINT_MSG: &str = "No blueprint data found. Please start over.";
pub const INVALID_STATE_MSG: &str = "Invalid application state. Resetting...";
pub const UNKNOWN_ERROR_MSG: &str = "An unknown error occurred.";

pub const BLUEPRINT_PROGRESS_MSG: &str =
    "AI is crafting your UI blueprint... This might take a few seconds.";
pub const DESIGN_PROGRESS_MSG: &str =
    "AI is generating your detailed UI Design Prompt... Please wait.";

/// Descriptions shorter than this get a nudge for more detail.
pub const RECOMMENDED_MIN_CHARS: usize = 100;

/// Non-empty but shorter than [`RECOMMENDED_MIN_CHARS`].
pub fn is_brief(text: &str) -> bool {
    let n = text.chars().count();
    n > 0 && n < RECOMMENDED_MIN_CHARS
}

/// Character count of a description, with a nudge when it is brief.
pub fn length_hint(text: &str) -> String {
    let n = text.chars().count();
    if is_brief(text) {
        format!("{n} characters (more detail is helpful!)")
    } else {
        format!("{n} characters")
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Stage {
    #[default]
    Input,
    GeneratingBlueprint,
    ReviewMasterplan,
    GeneratingDesignPrompt,
    DisplayDesignPrompt,
    Error,
}

/// Everything the session owns. Only the workflow mutates it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub stage: Stage,
    pub input: String,
    pub answers: Answers,
    pub masterplan: Option<MasterplanData>,
    pub design_prompt: String,
    pub error: Option<String>,
    pub busy: bool,
}

/// What the presentation layer should show for the current state.
#[derive(Debug, Clone, PartialEq)]
pub enum View<'a> {
    Input { text: &'a str, error: Option<&'a str> },
    Progress { message: &'static str },
    Review { masterplan: &'a MasterplanData },
    Display { document: &'a str },
    Error { message: &'a str },
    /// The state is inconsistent; call [`Workflow::recover`].
    NeedsReset { message: &'static str },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Job {
    Blueprint { description: String },
    DesignPrompt { masterplan: MasterplanData },
}

/// Handed out by a successful begin; required to complete the call.
#[derive(Debug)]
pub struct Ticket {
    token: u64,
    job: Job,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Blueprint(Answers),
    DesignPrompt(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    Discarded,
}

pub struct Workflow {
    availability: Availability,
    model: String,
    artifacts: Option<Artifacts>,
    session: Session,
    token: u64,
}

impl Workflow {
    pub fn new(availability: Availability, model: impl Into<String>, artifacts: Option<Artifacts>) -> Self {
        let mut wf = Self {
            availability,
            model: model.into(),
            artifacts,
            session: Session::default(),
            token: 0,
        };
        wf.restart();
        wf
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn stage(&self) -> Stage {
        self.session.stage
    }

    pub fn is_available(&self) -> bool {
        self.availability.is_available()
    }

    /// Update the free-text description while on the input stage.
    pub fn set_input(&mut self, text: impl Into<String>) {
        if self.session.stage == Stage::Input && !self.session.busy {
            self.session.input = text.into();
        }
    }

    pub fn input_hint(&self) -> String {
        length_hint(&self.session.input)
    }

    fn fail(&mut self, err: BlueprintError) {
        let msg = err.user_message();
        warn!(error = ?err, stage = ?self.session.stage, "moving to error stage");
        self.session.error = Some(if msg.trim().is_empty() { UNKNOWN_ERROR_MSG.to_string() } else { msg });
        self.session.stage = Stage::Error;
        self.session.busy = false;
    }

    fn reject_if_busy(&self, intent: &str) -> bool {
        if self.session.busy {
            warn!(intent, stage = ?self.session.stage, "rejected: a generation call is already in flight");
            return true;
        }
        false
    }

    fn next_ticket(&mut self, job: Job) -> Ticket {
        self.token += 1;
        Ticket { token: self.token, job }
    }

    /// Submit the current description from the input stage.
    pub fn begin_submit(&mut self) -> Option<Ticket> {
        if self.reject_if_busy("submit") {
            return None;
        }
        if self.session.stage != Stage::Input {
            warn!(stage = ?self.session.stage, "submit ignored outside the input stage");
            return None;
        }

        if self.session.input.trim().is_empty() {
            self.session.error = Some(BlueprintError::Validation(BLANK_INPUT_MSG.into()).user_message());
            return None;
        }
        if !self.availability.is_available() {
            self.fail(BlueprintError::Configuration(UNAVAILABLE_MSG.into()));
            return None;
        }

        self.session.stage = Stage::GeneratingBlueprint;
        self.session.error = None;
        self.session.busy = true;
        let description = self.session.input.clone();
        Some(self.next_ticket(Job::Blueprint { description }))
    }

    /// Go back from review to the input stage, keeping the description.
    pub fn edit(&mut self) -> bool {
        if self.reject_if_busy("edit") || self.session.stage != Stage::ReviewMasterplan {
            return false;
        }
        self.session.stage = Stage::Input;
        true
    }

    /// Confirm the reviewed masterplan and request the design prompt.
    pub fn begin_confirm(&mut self) -> Option<Ticket> {
        if self.reject_if_busy("confirm") {
            return None;
        }
        if self.session.stage != Stage::ReviewMasterplan {
            warn!(stage = ?self.session.stage, "confirm ignored outside the review stage");
            return None;
        }
        let masterplan = match &self.session.masterplan {
            Some(m) => m.clone(),
            None => {
                self.fail(BlueprintError::Validation(MISSING_MASTERPLAN_MSG.into()));
                return None;
            }
        };
        if !self.availability.is_available() {
            self.fail(BlueprintError::Configuration(UNAVAILABLE_MSG.into()));
            return None;
        }

        self.session.stage = Stage::GeneratingDesignPrompt;
        self.session.error = None;
        self.session.busy = true;
        Some(self.next_ticket(Job::DesignPrompt { masterplan }))
    }

    /// Perform the collaborator call for a ticket. Does not touch session state.
    pub async fn run(&self, ticket: &Ticket) -> Result<Outcome, BlueprintError> {
        let collab = self
            .availability
            .collaborator()
            .ok_or_else(|| BlueprintError::Configuration(UNAVAILABLE_MSG.into()))?;
        let artifacts = self.artifacts.as_ref();

        match &ticket.job {
            Job::Blueprint { description } => {
                generate::blueprint(collab.as_ref(), &self.model, description, artifacts)
                    .await
                    .map(Outcome::Blueprint)
            }
            Job::DesignPrompt { masterplan } => {
                generate::design_prompt(collab.as_ref(), &self.model, Some(masterplan), artifacts)
                    .await
                    .map(Outcome::DesignPrompt)
            }
        }
    }

    /// Apply the result of a call. Exactly one transition per applied completion.
    pub fn complete(&mut self, ticket: Ticket, result: Result<Outcome, BlueprintError>) -> Completion {
        if ticket.token != self.token || !self.session.busy {
            debug!(ticket = ticket.token, current = self.token, "discarding stale generation result");
            return Completion::Discarded;
        }

        match (self.session.stage, result) {
            (Stage::GeneratingBlueprint, Ok(Outcome::Blueprint(answers))) => {
                let masterplan = formatter::to_review_view(&answers);
                self.session.answers = answers;
                self.session.masterplan = Some(masterplan);
                self.session.stage = Stage::ReviewMasterplan;
                self.session.busy = false;
                info!("blueprint ready for review");
            }
            (Stage::GeneratingDesignPrompt, Ok(Outcome::DesignPrompt(text))) => {
                self.session.design_prompt = text;
                self.session.stage = Stage::DisplayDesignPrompt;
                self.session.busy = false;
                info!(chars = self.session.design_prompt.len(), "design prompt ready");
            }
            (stage, Ok(_)) => {
                warn!(?stage, "generation result does not match the current stage");
                self.fail(BlueprintError::InvalidState(INVALID_STATE_MSG.into()));
            }
            (_, Err(e)) => self.fail(e),
        }
        Completion::Applied
    }

    pub async fn submit(&mut self, description: impl Into<String>) -> Option<Completion> {
        self.set_input(description);
        let ticket = self.begin_submit()?;
        let result = self.run(&ticket).await;
        Some(self.complete(ticket, result))
    }

    pub async fn confirm(&mut self) -> Option<Completion> {
        let ticket = self.begin_confirm()?;
        let result = self.run(&ticket).await;
        Some(self.complete(ticket, result))
    }

    /// Clear all session state. Lands on `Input` when the collaborator is
    /// available, otherwise on `Error` explaining why.
    pub fn restart(&mut self) {
        self.session = Session::default();
        self.token += 1;
        if let Some(reason) = self.availability.unavailable_reason() {
            self.session.stage = Stage::Error;
            self.session.error = Some(reason);
        }
    }

    /// Pure view selection. `Error` always wins; a busy generating stage shows progress.
    pub fn view(&self) -> View<'_> {
        let s = &self.session;
        match s.stage {
            Stage::Error => View::Error {
                message: s.error.as_deref().unwrap_or(UNKNOWN_ERROR_MSG),
            },
            Stage::GeneratingBlueprint if s.busy => View::Progress { message: BLUEPRINT_PROGRESS_MSG },
            Stage::GeneratingDesignPrompt if s.busy => View::Progress { message: DESIGN_PROGRESS_MSG },
            Stage::GeneratingBlueprint | Stage::GeneratingDesignPrompt => {
                View::NeedsReset { message: INVALID_STATE_MSG }
            }
            Stage::Input => View::Input {
                text: &s.input,
                error: s.error.as_deref(),
            },
            Stage::ReviewMasterplan => match &s.masterplan {
                Some(masterplan) => View::Review { masterplan },
                None => View::NeedsReset { message: NO_BLUEPRINT_MSG },
            },
            Stage::DisplayDesignPrompt => View::Display { document: &s.design_prompt },
        }
    }

    /// Act on a needs-reset view. Returns the transient message to show once.
    pub fn recover(&mut self) -> Option<&'static str> {
        let message = match self.view() {
            View::NeedsReset { message } => message,
            _ => return None,
        };
        warn!(stage = ?self.session.stage, message, "invalid application state detected; restarting");
        self.restart();
        if self.session.stage == Stage::Error {
            let reason = self.session.error.take().unwrap_or_default();
            self.session.error = Some(format!("{INVALID_STATE_MSG} {reason}").trim_end().to_string());
        }
        Some(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::INVALID_SHAPE_MSG;
    use crate::provider::Collaborator;
    use crate::wire::GenerationRequest;
    use anyhow::anyhow;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    const FITNESS_JSON: &str = r#"{
        "mainPurpose": "Help busy professionals fit workouts into their day",
        "targetAudience": "Professionals aged 25-45 with packed schedules",
        "desiredVibe": "Energetic, focused, encouraging",
        "coreMessage": "Fitness that fits your calendar",
        "audienceDetails": "Mobile-first, short sessions, needs high contrast",
        "visualInspirations": "Clean sans-serif type, bold accent colors",
        "essentialActions": "Log workout, schedule session, view progress",
        "userJourneys": "Open app -> pick 15-minute routine -> start -> log",
        "contentStrategy": "Short routines, progress charts, reminders",
        "responsivenessAccessibility": "Responsive, keyboard navigable, ARIA landmarks"
    }"#;

    const DESIGN_DOC: &str = "I. Project Overview and Core Objective:\nA focused fitness companion.\n\nII. Key UI Sections and Conceptual Content Outline:\nDashboard, Routines, Progress.";

    #[derive(Default)]
    struct Scripted {
        replies: Mutex<VecDeque<Result<String, String>>>,
        calls: Mutex<Vec<GenerationRequest>>,
    }

    impl Scripted {
        fn new(replies: Vec<Result<&str, &str>>) -> Arc<Self> {
            Arc::new(Self {
                replies: Mutex::new(
                    replies
                        .into_iter()
                        .map(|r| r.map(str::to_string).map_err(str::to_string))
                        .collect(),
                ),
                calls: Mutex::new(Vec::new()),
            })
        }

        fn call_count(&self) -> usize {
            self.calls.lock().expect("lock").len()
        }
    }

    #[async_trait]
    impl Collaborator for Scripted {
        async fn send(&self, req: &GenerationRequest) -> anyhow::Result<String> {
            self.calls.lock().expect("lock").push(req.clone());
            match self.replies.lock().expect("lock").pop_front() {
                Some(Ok(s)) => Ok(s),
                Some(Err(e)) => Err(anyhow!(e)),
                None => Err(anyhow!("no scripted reply left")),
            }
        }
    }

    fn begin_with(wf: &mut Workflow, description: &str) -> Option<Ticket> {
        wf.set_input(description);
        wf.begin_submit()
    }

    fn workflow(collab: &Arc<Scripted>) -> Workflow {
        Workflow::new(Availability::Available(collab.clone()), "gemini-test", None)
    }

    fn assert_fresh(wf: &Workflow) {
        let s = wf.session();
        assert_eq!(s.stage, Stage::Input);
        assert_eq!(s.input, "");
        assert_eq!(s.answers, Answers::default());
        assert!(s.masterplan.is_none());
        assert_eq!(s.design_prompt, "");
        assert!(s.error.is_none());
        assert!(!s.busy);
    }

    #[test]
    fn starts_on_input_when_available() {
        let collab = Scripted::new(vec![]);
        let wf = workflow(&collab);
        assert_fresh(&wf);
        assert_eq!(wf.view(), View::Input { text: "", error: None });
    }

    #[test]
    fn starts_on_error_when_unavailable() {
        let wf = Workflow::new(Availability::NotConfigured, "m", None);
        assert_eq!(wf.stage(), Stage::Error);
        let missing = wf.session().error.clone().expect("error");
        assert!(missing.contains("not configured"));

        let wf = Workflow::new(Availability::InitFailed("bad header".into()), "m", None);
        let failed = wf.session().error.clone().expect("error");
        assert!(failed.contains("Failed to initialize"));
        assert_ne!(missing, failed);
    }

    #[tokio::test]
    async fn fitness_scenario_end_to_end() {
        let collab = Scripted::new(vec![Ok(FITNESS_JSON), Ok(DESIGN_DOC)]);
        let mut wf = workflow(&collab);

        let ticket = begin_with(&mut wf, "A fitness tracking app for busy professionals").expect("ticket");
        assert_eq!(wf.stage(), Stage::GeneratingBlueprint);
        assert_eq!(wf.view(), View::Progress { message: BLUEPRINT_PROGRESS_MSG });
        let result = wf.run(&ticket).await;
        assert_eq!(wf.complete(ticket, result), Completion::Applied);

        assert_eq!(wf.stage(), Stage::ReviewMasterplan);
        let s = wf.session();
        let expected = crate::parse::parse_blueprint(FITNESS_JSON).expect("parse");
        assert_eq!(s.answers, expected);
        let m = s.masterplan.as_ref().expect("masterplan");
        assert_eq!(m, &formatter::to_review_view(&expected));
        assert_eq!(m.project_overview.primary_goal, expected.main_purpose);
        assert_eq!(m.key_ui_sections_and_flows.journeys, expected.user_journeys);
        assert!(!s.busy);

        assert_eq!(wf.confirm().await, Some(Completion::Applied));
        assert_eq!(wf.stage(), Stage::DisplayDesignPrompt);
        match wf.view() {
            View::Display { document } => assert!(document.contains("Project Overview")),
            other => panic!("unexpected view {other:?}"),
        }
        assert_eq!(collab.call_count(), 2);

        let calls = collab.calls.lock().expect("lock");
        assert!(calls[1].instruction.user.contains("Fitness that fits your calendar"));
    }

    #[tokio::test]
    async fn blank_description_makes_no_call() {
        let collab = Scripted::new(vec![Ok(FITNESS_JSON)]);
        let mut wf = workflow(&collab);
        for blank in ["", "   ", "\n\t "] {
            assert_eq!(wf.submit(blank).await, None);
            assert_eq!(wf.stage(), Stage::Input);
            assert_eq!(wf.session().error.as_deref(), Some(BLANK_INPUT_MSG));
        }
        assert_eq!(collab.call_count(), 0);
    }

    #[tokio::test]
    async fn submit_while_unavailable_goes_to_error() {
        let mut wf = Workflow::new(Availability::NotConfigured, "m", None);
        wf.session.stage = Stage::Input;
        wf.session.error = None;
        assert!(begin_with(&mut wf, "An app").is_none());
        assert_eq!(wf.stage(), Stage::Error);
        assert_eq!(wf.session().error.as_deref(), Some(UNAVAILABLE_MSG));
    }

    #[tokio::test]
    async fn invalid_blueprint_response_goes_to_error() {
        let collab = Scripted::new(vec![Ok("not json at all")]);
        let mut wf = workflow(&collab);
        wf.submit("A recipe site").await;
        assert_eq!(wf.stage(), Stage::Error);
        assert_eq!(wf.session().error.as_deref(), Some(INVALID_SHAPE_MSG));
        assert_eq!(wf.session().answers, Answers::default());
        assert!(wf.session().masterplan.is_none());
        assert!(!wf.session().busy);
        assert_eq!(wf.view(), View::Error { message: INVALID_SHAPE_MSG });
    }

    #[tokio::test]
    async fn collaborator_failure_is_remapped() {
        let collab = Scripted::new(vec![Err("Gemini API error (400): API key not valid.")]);
        let mut wf = workflow(&collab);
        wf.submit("A recipe site").await;
        assert_eq!(wf.session().error.as_deref(), Some(generate::INVALID_KEY_MSG));
    }

    #[tokio::test]
    async fn confirm_without_masterplan_makes_no_call() {
        let collab = Scripted::new(vec![Ok(DESIGN_DOC)]);
        let mut wf = workflow(&collab);
        wf.session.stage = Stage::ReviewMasterplan;
        assert_eq!(wf.view(), View::NeedsReset { message: NO_BLUEPRINT_MSG });

        assert_eq!(wf.confirm().await, None);
        assert_eq!(wf.stage(), Stage::Error);
        assert_eq!(wf.session().error.as_deref(), Some(MISSING_MASTERPLAN_MSG));
        assert_eq!(collab.call_count(), 0);
    }

    #[tokio::test]
    async fn design_failure_then_restart() {
        let collab = Scripted::new(vec![Ok(FITNESS_JSON), Err("upstream timed out")]);
        let mut wf = workflow(&collab);
        wf.submit("A fitness app").await;
        wf.confirm().await;
        assert_eq!(wf.stage(), Stage::Error);
        assert_eq!(wf.session().error.as_deref(), Some("upstream timed out"));

        wf.restart();
        assert_fresh(&wf);
    }

    #[tokio::test]
    async fn edit_returns_to_input_with_text() {
        let collab = Scripted::new(vec![Ok(FITNESS_JSON), Ok(FITNESS_JSON)]);
        let mut wf = workflow(&collab);
        wf.submit("A fitness app").await;
        assert!(wf.edit());
        assert_eq!(wf.stage(), Stage::Input);
        assert_eq!(wf.session().input, "A fitness app");
        assert!(wf.session().masterplan.is_some());

        wf.submit("A fitness app with social challenges").await;
        assert_eq!(wf.stage(), Stage::ReviewMasterplan);
        assert_eq!(collab.call_count(), 2);
    }

    #[tokio::test]
    async fn restart_from_every_stage_resets_everything() {
        let collab = Scripted::new(vec![Ok(FITNESS_JSON), Ok(DESIGN_DOC)]);
        let mut wf = workflow(&collab);
        wf.restart();
        assert_fresh(&wf);

        wf.submit("A fitness app").await;
        wf.restart();
        assert_fresh(&wf);

        let collab = Scripted::new(vec![Ok(FITNESS_JSON), Ok(DESIGN_DOC)]);
        let mut wf = workflow(&collab);
        wf.submit("A fitness app").await;
        wf.confirm().await;
        assert_eq!(wf.stage(), Stage::DisplayDesignPrompt);
        wf.restart();
        wf.restart();
        assert_fresh(&wf);

        let mut wf = workflow(&collab);
        let _ticket = begin_with(&mut wf, "in flight").expect("ticket");
        wf.restart();
        assert_fresh(&wf);
    }

    #[test]
    fn restart_without_collaborator_lands_on_error() {
        let mut wf = Workflow::new(Availability::NotConfigured, "m", None);
        wf.restart();
        assert_eq!(wf.stage(), Stage::Error);
        assert!(!wf.session().busy);
        assert!(wf.session().error.as_deref().expect("error").contains("not configured"));
    }

    #[tokio::test]
    async fn stale_completion_is_discarded() {
        let collab = Scripted::new(vec![Ok(FITNESS_JSON)]);
        let mut wf = workflow(&collab);
        let ticket = begin_with(&mut wf, "A fitness app").expect("ticket");
        let result = wf.run(&ticket).await;
        wf.restart();
        assert_eq!(wf.complete(ticket, result), Completion::Discarded);
        assert_fresh(&wf);
    }

    #[test]
    fn busy_rejects_new_calls() {
        let collab = Scripted::new(vec![]);
        let mut wf = workflow(&collab);
        let _ticket = begin_with(&mut wf, "A fitness app").expect("ticket");
        assert!(begin_with(&mut wf, "Another").is_none());
        assert!(wf.begin_confirm().is_none());
        assert!(!wf.edit());
        assert_eq!(wf.session().input, "A fitness app");
        assert_eq!(wf.stage(), Stage::GeneratingBlueprint);
        assert_eq!(collab.call_count(), 0);
    }

    #[test]
    fn error_view_wins_over_busy() {
        let collab = Scripted::new(vec![]);
        let mut wf = workflow(&collab);
        wf.session.busy = true;
        wf.session.stage = Stage::Error;
        wf.session.error = None;
        assert_eq!(wf.view(), View::Error { message: UNKNOWN_ERROR_MSG });
    }

    #[test]
    fn generating_without_busy_needs_reset() {
        let collab = Scripted::new(vec![]);
        let mut wf = workflow(&collab);
        wf.session.stage = Stage::GeneratingDesignPrompt;
        wf.session.input = "leftover".into();
        assert_eq!(wf.view(), View::NeedsReset { message: INVALID_STATE_MSG });

        assert_eq!(wf.recover(), Some(INVALID_STATE_MSG));
        assert_fresh(&wf);
        assert_eq!(wf.recover(), None);
    }

    #[test]
    fn recover_without_collaborator_reports_invalid_state() {
        let mut wf = Workflow::new(Availability::NotConfigured, "m", None);
        wf.session.stage = Stage::ReviewMasterplan;
        assert_eq!(wf.recover(), Some(NO_BLUEPRINT_MSG));
        assert_eq!(wf.stage(), Stage::Error);
        let msg = wf.session().error.as_deref().expect("error");
        assert!(msg.starts_with(INVALID_STATE_MSG));
        assert!(msg.contains("not configured"));
    }

    #[test]
    fn input_hint_nudges_short_descriptions() {
        let collab = Scripted::new(vec![]);
        let mut wf = workflow(&collab);
        assert_eq!(wf.input_hint(), "0 characters");
        wf.set_input("A todo app");
        assert_eq!(wf.input_hint(), "10 characters (more detail is helpful!)");
        wf.set_input("x".repeat(120));
        assert_eq!(wf.input_hint(), "120 characters");
    }

    #[test]
    fn brief_descriptions_are_flagged_on_their_own_text() {
        assert!(!is_brief(""));
        assert!(is_brief("A todo app"));
        assert!(!is_brief(&"y".repeat(RECOMMENDED_MIN_CHARS)));
        // counted in characters, not bytes
        assert!(is_brief(&"é".repeat(60)));
        assert_eq!(length_hint("Habit tracker"), "13 characters (more detail is helpful!)");
    }
}
