use std::io::{IsTerminal, Write};

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use crate::args::{Invocation, Origin};
use crate::scoring::{Score, ScoreResult};

const RESULT_PREFIX: &str = "Calculated Pokemon TCG Battle Points";

/// Format the single result line printed on success
pub fn format_result(score: &Score) -> String {
    format!("{}: {}", RESULT_PREFIX, score)
}

/// Write the result line to `out`
pub fn write_result<W: Write>(out: &mut W, score: &Score) -> Result<()> {
    writeln!(out, "{}", format_result(score)).context("Failed to write result")?;
    out.flush().context("Failed to flush output")?;
    Ok(())
}

/// Usage line for a missing-argument error
pub fn format_usage(program: &str) -> String {
    format!(
        "Usage: {} <twins> <tpoints> <mdamage> [--multi X] [--divi Y] [--plevel Z]",
        program
    )
}

/// Check if stderr is a TTY (verbose diagnostics go there)
pub fn should_use_colors() -> bool {
    std::io::stderr().is_terminal()
}

fn origin_note(origin: Origin) -> &'static str {
    match origin {
        Origin::Default => "default",
        Origin::Flag => "flag",
    }
}

/// Format resolved parameters and ignored tokens for verbose mode
pub fn format_invocation(inv: &Invocation, use_colors: bool) -> String {
    let mut lines = vec![
        format!(
            "Parameters: multi={} ({}), divi={} ({})",
            inv.params.multi,
            origin_note(inv.multi_origin),
            inv.params.divi,
            origin_note(inv.divi_origin)
        ),
    ];
    if let Some(plevel) = inv.plevel {
        lines.push(format!("Player level: {}", plevel));
    }
    for ignored in &inv.ignored {
        let line = format!("Ignored: {}", ignored);
        if use_colors {
            lines.push(line.yellow().to_string());
        } else {
            lines.push(line);
        }
    }
    lines.join("\n")
}

/// Format the term-by-term breakdown for verbose mode
pub fn format_breakdown(result: &ScoreResult, use_colors: bool) -> String {
    let label_width = result
        .breakdown
        .terms
        .iter()
        .map(|t| t.label.len())
        .max()
        .unwrap_or(0);

    result
        .breakdown
        .terms
        .iter()
        .map(|term| {
            let label = format!("{:<width$}", term.label, width = label_width);
            let totals = format!("{} -> {}", term.before, term.after);
            if use_colors {
                format!("  {}  {}  ({})", label.bold(), term.description, totals.dimmed())
            } else {
                format!("  {}  {}  ({})", label, term.description, totals)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
