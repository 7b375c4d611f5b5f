use anyhow::{Context, Result};
use clap::Parser;
use fs_err as fs;
use uuid::Uuid;

mod cli;
mod clipboard;
mod config;
mod errors;
mod formatter;
mod generate;
mod log;
mod parse;
mod prompt;
mod provider;
mod ux;
mod wire;
mod workflow;

use workflow::{Stage, View, Workflow};

fn save_document(path: &str, doc: &str) -> Result<()> {
    fs::write(path, doc).with_context(|| format!("failed to write design prompt to {path}"))?;
    println!("Saved design prompt to {path}");
    Ok(())
}

/// Interactive save: a failed write is reported and the session carries on.
fn save_and_report(path: &str, doc: &str) -> bool {
    match save_document(path, doc) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(path, error = %format!("{e:#}"), "saving design prompt failed");
            ux::show_error(&format!("{e:#}"));
            false
        }
    }
}

fn copy_document(doc: &str) {
    match clipboard::copy(doc) {
        Ok(()) => println!("UI Design Prompt copied to clipboard!"),
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "clipboard copy failed");
            ux::show_error(&format!("Failed to copy: {e}"));
        }
    }
}

/// Drive one pending call: show progress, await the collaborator, apply the result.
async fn drive(wf: &mut Workflow, ticket: workflow::Ticket) {
    let pb = match wf.view() {
        View::Progress { message } => Some(ux::spinner(message)),
        _ => None,
    };
    let result = wf.run(&ticket).await;
    if let Some(pb) = pb {
        pb.finish_and_clear();
    }
    wf.complete(ticket, result);
}

/// Both calls back to back, no prompts. Prints the document to stdout.
async fn run_once(wf: &mut Workflow, args: &cli::Args, description: &str) -> Result<()> {
    wf.submit(description).await;
    if wf.stage() == Stage::ReviewMasterplan {
        wf.confirm().await;
    }

    tracing::debug!(stage = ?wf.session().stage, busy = wf.session().busy, "generation finished");
    match wf.view() {
        View::Display { document } => {
            let doc = document.to_string();
            match &args.out {
                Some(path) => save_document(path, &doc)?,
                None => println!("{doc}"),
            }
            if args.copy {
                copy_document(&doc);
            }
            Ok(())
        }
        View::Error { message } => anyhow::bail!("{message}"),
        View::Input { error: Some(message), .. } => anyhow::bail!("{message}"),
        other => anyhow::bail!("generation stopped unexpectedly ({other:?})"),
    }
}

async fn run_interactive(wf: &mut Workflow, args: &cli::Args) -> Result<()> {
    ux::show_banner();
    let mut initial = args.description.clone();

    loop {
        if let Some(notice) = wf.recover() {
            ux::show_notice(notice);
        }

        match wf.view() {
            View::Input { text, error } => {
                let description = match initial.take() {
                    Some(d) => d,
                    None => {
                        let previous = text.to_string();
                        let error = error.map(str::to_string);
                        let hint = wf.input_hint();
                        match ux::ask_description(&previous, &hint, error.as_deref())? {
                            Some(d) => d,
                            None => return Ok(()),
                        }
                    }
                };
                wf.set_input(description);
                if let Some(ticket) = wf.begin_submit() {
                    drive(wf, ticket).await;
                }
            }
            View::Review { masterplan } => {
                ux::show_masterplan(masterplan);
                let choice = if args.auto_approve {
                    ux::Choice::Confirm
                } else {
                    ux::choose(&ux::REVIEW_CHOICES)?
                };
                match choice {
                    ux::Choice::Confirm => {
                        if let Some(ticket) = wf.begin_confirm() {
                            drive(wf, ticket).await;
                        }
                    }
                    ux::Choice::Edit => {
                        wf.edit();
                    }
                    ux::Choice::Restart => wf.restart(),
                    _ => return Ok(()),
                }
            }
            View::Display { document } => {
                let doc = document.to_string();
                ux::show_document(&doc);
                if let Some(path) = &args.out {
                    save_and_report(path, &doc);
                }
                if args.copy {
                    copy_document(&doc);
                }
                loop {
                    match ux::choose(&ux::DISPLAY_CHOICES)? {
                        ux::Choice::Copy => copy_document(&doc),
                        ux::Choice::Save => {
                            if let Some(path) = ux::prompt_line("File path")? {
                                save_and_report(&path, &doc);
                            }
                        }
                        ux::Choice::Restart => {
                            wf.restart();
                            break;
                        }
                        _ => return Ok(()),
                    }
                }
            }
            View::Error { message } => {
                ux::show_error(message);
                match ux::choose(&ux::ERROR_CHOICES)? {
                    ux::Choice::Restart => wf.restart(),
                    _ => return Ok(()),
                }
            }
            // Calls are always driven to completion above; landing here means a
            // stale generating stage, which recover() handles on the next pass.
            View::Progress { .. } | View::NeedsReset { .. } => {
                if wf.recover().is_none() {
                    wf.restart();
                }
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Args::parse();
    log::init(args.debug);

    let cfg = config::Config::load(&args)?;
    let session = Uuid::new_v4();
    let artifacts = log::Artifacts::new(&cfg, session);
    if artifacts.enabled() {
        tracing::debug!(dir = %artifacts.dir().display(), "planned artifacts directory");
    }

    let availability = provider::connect(&cfg);
    let mut wf = Workflow::new(availability, cfg.model.clone(), Some(artifacts));
    tracing::info!(%session, model = %cfg.model, available = wf.is_available(), "session started");

    if args.non_interactive() {
        let description = args.description.clone().unwrap_or_default();
        return run_once(&mut wf, &args, &description).await;
    }
    run_interactive(&mut wf, &args).await
}
