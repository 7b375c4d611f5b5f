use anyhow::{bail, Context, Result};
use std::io::Write;
use std::process::{Command, Stdio};

/// Clipboard writers to try, in order, for the current platform.
fn candidates() -> Vec<(&'static str, Vec<&'static str>)> {
    #[cfg(target_os = "macos")]
    {
        vec![("pbcopy", vec![])]
    }
    #[cfg(target_os = "windows")]
    {
        vec![("clip", vec![])]
    }
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        vec![
            ("wl-copy", vec![]),
            ("xclip", vec!["-selection", "clipboard"]),
            ("xsel", vec!["--clipboard", "--input"]),
        ]
    }
}

fn pipe_into(program: &str, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .with_context(|| format!("failed to spawn {program}"))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .with_context(|| format!("failed to write to {program}"))?;
    }

    let out = child.wait_with_output()?;
    if !out.status.success() {
        bail!(
            "{program} exited with {}: {}",
            out.status,
            String::from_utf8_lossy(&out.stderr).trim()
        );
    }
    Ok(())
}

/// Copy `text` verbatim to the system clipboard.
pub fn copy(text: &str) -> Result<()> {
    let mut failures = Vec::new();
    for (program, args) in candidates() {
        match pipe_into(program, &args, text) {
            Ok(()) => {
                tracing::debug!(program, bytes = text.len(), "copied to clipboard");
                return Ok(());
            }
            Err(e) => failures.push(format!("{e:#}")),
        }
    }
    bail!("no clipboard tool succeeded ({})", failures.join("; "))
}
