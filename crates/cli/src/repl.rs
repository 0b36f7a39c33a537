//! Interactive shell: type an event, get its profile back.
//!
//! Accepts either a JSON object or the `title | description | category | city`
//! shorthand on each line.

use anyhow::Context;
use eventvibe_core::{EventInput, enrich};
use rustyline::error::ReadlineError;
use tokio::sync::oneshot;
use tokio_util::sync::CancellationToken;

use crate::batch::render;
use crate::config::{CliCfg, OutputFormat};

const BANNER: &str = "eventvibe shell: enter `title | description | category | city` \
                      or a JSON object, /q to quit";

/// Run the shell until quit, EOF, Ctrl-C or cancellation of `token`.
///
/// The editor loop blocks, so it lives on its own thread; a cancelled token
/// returns right away and leaves that thread to die with the process.
pub async fn run(cfg: &CliCfg, token: CancellationToken) -> anyhow::Result<()> {
    println!("{BANNER}");

    let shell = Shell {
        prompt: cfg.prompt.clone(),
        format: cfg.output,
        token: token.clone(),
    };
    let (done_tx, done_rx) = oneshot::channel();
    std::thread::spawn(move || {
        let _ = done_tx.send(shell.run_blocking());
    });

    tokio::select! {
        biased;
        _ = token.cancelled() => Ok(()),
        outcome = done_rx => outcome.context("shell thread exited without a result")?,
    }
}

struct Shell {
    prompt: String,
    format: OutputFormat,
    token: CancellationToken,
}

impl Shell {
    fn run_blocking(self) -> anyhow::Result<()> {
        let mut editor = rustyline::DefaultEditor::new().context("failed to start line editor")?;

        while !self.token.is_cancelled() {
            let line = match editor.readline(&self.prompt) {
                Ok(line) => line,
                Err(ReadlineError::Interrupted) => {
                    self.token.cancel();
                    break;
                }
                Err(ReadlineError::Eof) => break,
                Err(e) => return Err(e).context("failed to read shell input"),
            };

            match step(&line, self.format) {
                Step::Skip => continue,
                Step::Quit => break,
                Step::Reply(out) => println!("{out}"),
            }
            let _ = editor.add_history_entry(line.as_str());
        }
        Ok(())
    }
}

/// What the shell does with one input line.
#[derive(Debug, PartialEq, Eq)]
enum Step {
    Skip,
    Quit,
    Reply(String),
}

fn step(line: &str, format: OutputFormat) -> Step {
    let text = line.trim();
    if text.is_empty() {
        return Step::Skip;
    }
    if matches!(text, "/q" | "/exit" | "/quit") {
        return Step::Quit;
    }
    match respond(text, format) {
        Ok(out) => Step::Reply(out),
        Err(e) => Step::Reply(format!("error: {e}")),
    }
}

/// Parse one shell line and render its profile.
fn respond(text: &str, format: OutputFormat) -> anyhow::Result<String> {
    let input = if text.starts_with('{') {
        EventInput::from_json(text)?
    } else {
        EventInput::from_fields(text)?
    };
    let profile = enrich(&input);
    tracing::debug!(event_type = %profile.event_type, "shell event enriched");
    Ok(render(&profile, format)?)
}
