//! Streaming enrichment: JSON lines in, profile JSON lines out.

use std::io::{self, BufRead};
use std::path::Path;

use anyhow::Context;
use eventvibe_core::{EnrichedProfile, EventInput, enrich};
use tokio::io::{AsyncWrite, AsyncWriteExt, BufWriter};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::config::OutputFormat;

const LINE_BUFFER: usize = 256;

/// Lines produced by [`spawn_line_reader`].
pub type LineRx = mpsc::Receiver<io::Result<String>>;

/// Outcome counts for one batch run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchStats {
    pub enriched: usize,
    pub rejected: usize,
}

/// Enrich every event in `path` (stdin when `None`) and print to stdout.
pub async fn run(
    path: Option<&Path>,
    format: OutputFormat,
    token: CancellationToken,
) -> anyhow::Result<BatchStats> {
    let lines = match path {
        Some(path) => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            spawn_line_reader(io::BufReader::new(file))
        }
        None => spawn_line_reader(io::BufReader::new(io::stdin())),
    };

    let mut out = BufWriter::new(tokio::io::stdout());
    let stats = process(lines, &mut out, format, token).await?;
    out.flush().await?;
    Ok(stats)
}

/// Read `reader` line by line on a detached thread.
///
/// A blocking read cannot be interrupted, so the thread is never joined: on
/// cancellation the receiver is dropped and the process exits around it.
pub fn spawn_line_reader<R>(reader: R) -> LineRx
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = mpsc::channel(LINE_BUFFER);
    std::thread::spawn(move || {
        for line in reader.lines() {
            let failed = line.is_err();
            if tx.blocking_send(line).is_err() || failed {
                break;
            }
        }
    });
    rx
}

/// Drain `lines`, write one rendered profile per line.
/// Blank lines are skipped; malformed lines are reported and skipped.
pub async fn process<W>(
    mut lines: LineRx,
    writer: &mut W,
    format: OutputFormat,
    token: CancellationToken,
) -> anyhow::Result<BatchStats>
where
    W: AsyncWrite + Unpin,
{
    let mut stats = BatchStats::default();
    let mut line_no = 0usize;

    loop {
        let line = tokio::select! {
            biased;
            _ = token.cancelled() => {
                tracing::info!(line = line_no, "batch cancelled");
                break;
            }
            line = lines.recv() => line,
        };
        let Some(line) = line else {
            break;
        };
        let line = line.context("failed to read input")?;
        line_no += 1;
        if line.trim().is_empty() {
            continue;
        }

        match EventInput::from_json(&line) {
            Ok(input) => {
                let rendered = render(&enrich(&input), format)?;
                writer.write_all(rendered.as_bytes()).await?;
                writer.write_all(b"\n").await?;
                stats.enriched += 1;
            }
            Err(e) => {
                stats.rejected += 1;
                tracing::warn!(line = line_no, error = %e, "skipping malformed event");
                eprintln!("line {line_no}: {e}");
            }
        }
    }

    Ok(stats)
}

pub fn render(profile: &EnrichedProfile, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string(profile),
        OutputFormat::Pretty => serde_json::to_string_pretty(profile),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn run_lines(input: &str, format: OutputFormat) -> (BatchStats, String) {
        let mut out = Vec::new();
        let lines = spawn_line_reader(io::Cursor::new(input.to_string()));
        let stats = process(lines, &mut out, format, CancellationToken::new())
            .await
            .unwrap();
        (stats, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn one_profile_per_line() {
        let input = concat!(
            r#"{"title":"Techno Rave","category":"club"}"#,
            "\n\n",
            r#"{}"#,
            "\n",
        );
        let (stats, out) = run_lines(input, OutputFormat::Json).await;
        assert_eq!(stats, BatchStats { enriched: 2, rejected: 0 });

        let profiles: Vec<serde_json::Value> = out
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(profiles.len(), 2);
        assert_eq!(profiles[0]["eventType"], "club-night");
        assert_eq!(profiles[0]["genre"], serde_json::json!(["techno"]));
        assert_eq!(profiles[1]["eventType"], "other");
    }

    #[tokio::test]
    async fn malformed_lines_are_skipped() {
        let input = "{\"title\":\"ok\"}\nnot json\n{\"title\": 5}\n";
        let (stats, out) = run_lines(input, OutputFormat::Json).await;
        assert_eq!(stats, BatchStats { enriched: 1, rejected: 2 });
        assert_eq!(out.lines().count(), 1);
    }

    #[tokio::test]
    async fn cancelled_token_stops_early() {
        let token = CancellationToken::new();
        token.cancel();
        let mut out = Vec::new();
        let lines = spawn_line_reader(io::Cursor::new("{}\n{}\n"));
        let stats = process(lines, &mut out, OutputFormat::Json, token)
            .await
            .unwrap();
        assert_eq!(stats.enriched, 0);
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn cancel_returns_while_reader_is_blocked() {
        // sender stays alive and silent, like a terminal nobody types into
        let (_tx, lines) = mpsc::channel(1);
        let token = CancellationToken::new();
        let canceller = token.clone();
        tokio::spawn(async move {
            tokio::time::sleep(std::time::Duration::from_millis(20)).await;
            canceller.cancel();
        });

        let mut out = Vec::new();
        let result = tokio::time::timeout(
            std::time::Duration::from_secs(5),
            process(lines, &mut out, OutputFormat::Json, token),
        )
        .await;
        let stats = result.expect("cancellation should end the batch").unwrap();
        assert_eq!(stats, BatchStats::default());
    }

    #[tokio::test]
    async fn read_error_ends_the_batch() {
        let (tx, lines) = mpsc::channel(2);
        tx.send(Ok("{}".to_string())).await.unwrap();
        tx.send(Err(io::Error::other("disk gone"))).await.unwrap();
        let mut out = Vec::new();
        let err = process(lines, &mut out, OutputFormat::Json, CancellationToken::new())
            .await
            .unwrap_err();
        assert!(format!("{err:#}").contains("disk gone"));
        assert_eq!(out.iter().filter(|b| **b == b'\n').count(), 1);
    }

    #[test]
    fn pretty_render_is_multiline() {
        let profile = enrich(&EventInput::default());
        let pretty = render(&profile, OutputFormat::Pretty).unwrap();
        assert!(pretty.lines().count() > 1);
        let compact = render(&profile, OutputFormat::Json).unwrap();
        assert_eq!(compact.lines().count(), 1);
    }
}
