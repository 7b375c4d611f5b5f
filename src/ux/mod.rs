use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, BufRead, Write};
use std::time::Duration;

use crate::wire::MasterplanData;
use crate::workflow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Confirm,
    Edit,
    Copy,
    Save,
    Restart,
    Quit,
}

impl Choice {
    fn key(self) -> &'static str {
        match self {
            Choice::Confirm => "c",
            Choice::Edit => "e",
            Choice::Copy => "y",
            Choice::Save => "s",
            Choice::Restart => "r",
            Choice::Quit => "q",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Choice::Confirm => "confirm & generate",
            Choice::Edit => "edit description",
            Choice::Copy => "copy to clipboard",
            Choice::Save => "save to file",
            Choice::Restart => "start over",
            Choice::Quit => "quit",
        }
    }
}

pub const REVIEW_CHOICES: [Choice; 4] = [Choice::Confirm, Choice::Edit, Choice::Restart, Choice::Quit];
pub const DISPLAY_CHOICES: [Choice; 4] = [Choice::Copy, Choice::Save, Choice::Restart, Choice::Quit];
pub const ERROR_CHOICES: [Choice; 2] = [Choice::Restart, Choice::Quit];

/// Match a typed answer against the offered choices by key or first word of the label.
pub fn parse_choice(answer: &str, offered: &[Choice]) -> Option<Choice> {
    let a = answer.trim().to_lowercase();
    if a.is_empty() {
        return None;
    }
    offered
        .iter()
        .copied()
        .find(|c| a == c.key() || c.label().split_whitespace().next() == Some(a.as_str()))
}

/// Read lines until an empty line or EOF. `None` means EOF before any text.
pub fn read_block<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut lines = Vec::new();
    let mut saw_eof = true;
    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        saw_eof = false;
        let trimmed = line.trim_end_matches(['\r', '\n']);
        if trimmed.is_empty() {
            break;
        }
        lines.push(trimmed.to_string());
    }
    if saw_eof && lines.is_empty() {
        return Ok(None);
    }
    Ok(Some(lines.join("\n")))
}

pub fn show_banner() {
    println!("\n{}", "UI Blueprint Architect".bold().magenta());
    println!("{}\n", "Describe a UI project, review the AI blueprint, get a full design specification.".dimmed());
}

/// Input view. An empty answer keeps `previous` when there is one; a brief
/// new description gets the length nudge before it is submitted.
pub fn ask_description(previous: &str, hint: &str, error: Option<&str>) -> io::Result<Option<String>> {
    println!("{}", "Describe Your UI Project".bold().cyan());
    println!(
        "{}",
        "What is its main purpose? Who is it for? What's the desired look and feel? Finish with an empty line."
            .dimmed()
    );
    if let Some(e) = error {
        println!("{}", e.red());
    }
    if !previous.is_empty() {
        println!("{}\n{}", "Current description (press Enter to keep it):".dimmed(), previous);
        println!("{}", hint.dimmed());
    }
    print!("> ");
    io::stdout().flush()?;

    let stdin = io::stdin();
    let mut lock = stdin.lock();
    match read_block(&mut lock)? {
        None => Ok(None),
        Some(text) if text.trim().is_empty() && !previous.is_empty() => Ok(Some(previous.to_string())),
        Some(text) => {
            if let Some(nudge) = brevity_nudge(&text) {
                println!("{}", nudge.yellow());
            }
            Ok(Some(text))
        }
    }
}

fn brevity_nudge(text: &str) -> Option<String> {
    workflow::is_brief(text.trim()).then(|| workflow::length_hint(text.trim()))
}

pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.magenta} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

fn field(label: &str, value: &Option<String>) {
    let v = value.as_deref().filter(|s| !s.is_empty()).unwrap_or("N/A");
    println!("  {} {}", format!("{label}:").bold(), v);
}

pub fn show_masterplan(m: &MasterplanData) {
    println!("\n=== {} ===", "UI MASTERPLAN".bold());

    println!("\n{}", "Project Overview".cyan().bold());
    field("Primary Goal", &m.project_overview.primary_goal);
    field("Target Audience", &m.project_overview.target_audience);
    field("Desired Vibe", &m.project_overview.desired_vibe);
    field("Core Message", &m.project_overview.core_message);

    println!("\n{}", "Target Audience Analysis".cyan().bold());
    field("Details", &m.target_audience_analysis.details);

    println!("\n{}", "Key UI Sections & Flows".cyan().bold());
    field("Essential Actions", &m.key_ui_sections_and_flows.actions);
    field("User Journeys", &m.key_ui_sections_and_flows.journeys);

    println!("\n{}", "Content Strategy".cyan().bold());
    field("Details", &m.content_strategy.details);

    println!("\n{}", "Visual & Interaction Style".cyan().bold());
    field("Inspiration", &m.visual_and_interaction_style.inspiration);

    println!("\n{}", "Responsiveness & Accessibility".cyan().bold());
    field("Details", &m.responsiveness_and_accessibility.details);
    println!();
}

pub fn show_document(doc: &str) {
    println!("\n{}", "Your AI-Generated UI Design Prompt!".green().bold());
    println!("{}", "━".repeat(60).dimmed());
    println!("{doc}");
    println!("{}", "━".repeat(60).dimmed());
}

pub fn show_error(message: &str) {
    println!("\n{} {}", "Error:".red().bold(), message);
}

pub fn show_notice(message: &str) {
    println!("{}", message.yellow());
}

/// Ask until one of `offered` is chosen. EOF counts as quit.
pub fn choose(offered: &[Choice]) -> io::Result<Choice> {
    let menu = offered
        .iter()
        .map(|c| format!("[{}] {}", c.key().bold(), c.label()))
        .collect::<Vec<_>>()
        .join("  ");
    loop {
        print!("{menu}: ");
        io::stdout().flush()?;
        let mut s = String::new();
        if io::stdin().read_line(&mut s)? == 0 {
            return Ok(Choice::Quit);
        }
        match parse_choice(&s, offered) {
            Some(c) => return Ok(c),
            None => println!("{}", "Please pick one of the listed options.".dimmed()),
        }
    }
}

pub fn prompt_line(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;
    let mut s = String::new();
    if io::stdin().read_line(&mut s)? == 0 {
        return Ok(None);
    }
    let s = s.trim();
    Ok(if s.is_empty() { None } else { Some(s.to_string()) })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn choices_by_key_or_word() {
        assert_eq!(parse_choice("c", &REVIEW_CHOICES), Some(Choice::Confirm));
        assert_eq!(parse_choice(" Edit \n", &REVIEW_CHOICES), Some(Choice::Edit));
        assert_eq!(parse_choice("y", &DISPLAY_CHOICES), Some(Choice::Copy));
        assert_eq!(parse_choice("copy", &DISPLAY_CHOICES), Some(Choice::Copy));
        assert_eq!(parse_choice("c", &ERROR_CHOICES), None);
        assert_eq!(parse_choice("", &ERROR_CHOICES), None);
        assert_eq!(parse_choice("start", &ERROR_CHOICES), Some(Choice::Restart));
    }

    #[test]
    fn read_block_stops_at_blank_line() {
        let mut input = Cursor::new("A fitness app\nfor busy people\n\nignored\n");
        assert_eq!(
            read_block(&mut input).expect("read"),
            Some("A fitness app\nfor busy people".to_string())
        );
    }

    #[test]
    fn brief_first_description_gets_a_nudge() {
        assert_eq!(
            brevity_nudge("A todo app\n").as_deref(),
            Some("10 characters (more detail is helpful!)")
        );
        assert_eq!(brevity_nudge(""), None);
        assert_eq!(brevity_nudge(&"z".repeat(150)), None);
    }

    #[test]
    fn read_block_handles_eof() {
        assert_eq!(read_block(&mut Cursor::new("")).expect("read"), None);
        assert_eq!(read_block(&mut Cursor::new("last line")).expect("read"), Some("last line".into()));
        assert_eq!(read_block(&mut Cursor::new("\n")).expect("read"), Some(String::new()));
    }
}
