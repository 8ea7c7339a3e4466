use std::collections::BTreeSet;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use gsflog_core::{
    CombatEvent, LogError, Match, parse_log_filename, player_ids, read_log_file, split_events,
};
use rayon::prelude::*;
use serde::Serialize;

use crate::config::{AppConfig, resolve_log_path};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Matches,
    Events,
    Players,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    pub view: View,
    pub json: bool,
}

/// Everything the CLI can show for one combat log.
#[derive(Debug, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub started_at: NaiveDateTime,
    pub events: Vec<CombatEvent>,
    pub matches: Vec<Match>,
    pub player_ids: BTreeSet<String>,
}

/// Parse a single log file. `Ok(None)` if the name isn't a combat log name.
pub fn analyze_file(path: &Path) -> Result<Option<FileReport>, LogError> {
    let Some(started_at) = parse_log_filename(path) else {
        return Ok(None);
    };
    let Some(events) = read_log_file(path)? else {
        return Ok(None);
    };

    let player_ids = player_ids(&events).into_iter().collect();
    let matches = split_events(events.iter().cloned());

    Ok(Some(FileReport {
        path: path.to_path_buf(),
        started_at,
        events,
        matches,
        player_ids,
    }))
}

/// Parse every file (in parallel) and print the results in argument order.
///
/// Returns an error if any file could not be read.
pub fn run(config: &AppConfig, paths: &[PathBuf], options: RenderOptions) -> Result<(), String> {
    let resolved: Vec<PathBuf> = paths
        .iter()
        .map(|p| resolve_log_path(config, p))
        .collect();

    let results: Vec<(PathBuf, Result<Option<FileReport>, LogError>)> = resolved
        .into_par_iter()
        .map(|path| {
            let result = analyze_file(&path);
            (path, result)
        })
        .collect();

    let mut stdout = std::io::stdout().lock();
    let mut failed = 0usize;

    for (path, result) in results {
        match result {
            Ok(Some(report)) => {
                render(&mut stdout, &report, options).map_err(|e| e.to_string())?;
            }
            Ok(None) => {
                tracing::warn!(path = %path.display(), "Not a combat log file name, skipped");
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to parse combat log");
                failed += 1;
            }
        }
    }
    stdout.flush().map_err(|e| e.to_string())?;

    if failed > 0 {
        return Err(format!("{failed} file(s) could not be read"));
    }
    Ok(())
}

pub fn render<W: Write>(
    out: &mut W,
    report: &FileReport,
    options: RenderOptions,
) -> std::io::Result<()> {
    if options.json {
        return render_json(out, report, options.view);
    }

    writeln!(out, "{} ({})", report.path.display(), report.started_at)?;
    match options.view {
        View::Matches => {
            if report.matches.is_empty() {
                writeln!(out, "  no matches")?;
            }
            for (idx, m) in report.matches.iter().enumerate() {
                writeln!(
                    out,
                    "  Match {}: {} events, {}s",
                    idx + 1,
                    m.len(),
                    m.duration().num_seconds()
                )?;
                for event in m.events() {
                    writeln!(out, "    {event}")?;
                }
            }
        }
        View::Events => {
            for event in &report.events {
                writeln!(out, "  {event}")?;
            }
        }
        View::Players => {
            let ids: Vec<&str> = report.player_ids.iter().map(String::as_str).collect();
            writeln!(out, "  players: {}", ids.join(", "))?;
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    path: String,
    started_at: NaiveDateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    matches: Option<&'a [Match]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    events: Option<&'a [CombatEvent]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    player_ids: Option<&'a BTreeSet<String>>,
}

fn render_json<W: Write>(out: &mut W, report: &FileReport, view: View) -> std::io::Result<()> {
    let json = JsonReport {
        path: report.path.display().to_string(),
        started_at: report.started_at,
        matches: (view == View::Matches).then_some(report.matches.as_slice()),
        events: (view == View::Events).then_some(report.events.as_slice()),
        player_ids: (view == View::Players).then_some(&report.player_ids),
    };
    serde_json::to_writer(&mut *out, &json)?;
    writeln!(out)
}
