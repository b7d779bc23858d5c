//! Output formatting for shortest-time reports and travel plans.

use std::fmt::Write;

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use fastroute_lib::{ReportMode, TimesReport, TravelSummary, TIMES_REPORT_HEADER};

use crate::terminal::{format_clock, ColorPalette};

/// Output formats accepted by `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain report, one line per station.
    #[default]
    Text,
    /// Markdown suitable for chat or notes.
    Rich,
    /// Colored terminal output with clock times.
    Enhanced,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    /// Render a shortest-times report in this format.
    pub fn render_times(self, report: &TimesReport) -> Result<String> {
        Ok(match self {
            OutputFormat::Text => report.render(ReportMode::PlainText),
            OutputFormat::Rich => report.render(ReportMode::RichText),
            OutputFormat::Enhanced => format_times_enhanced(report, &ColorPalette::detect()),
            OutputFormat::Json => to_json(report)?,
        })
    }

    /// Render a travel summary in this format.
    pub fn render_travel(self, summary: &TravelSummary) -> Result<String> {
        Ok(match self {
            OutputFormat::Text => summary.render(ReportMode::PlainText),
            OutputFormat::Rich => summary.render(ReportMode::RichText),
            OutputFormat::Enhanced => format_travel_enhanced(summary, &ColorPalette::detect()),
            OutputFormat::Json => to_json(summary)?,
        })
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}

/// Colored shortest-times table.
pub fn format_times_enhanced(report: &TimesReport, palette: &ColorPalette) -> String {
    let mut buffer = String::new();
    let _ = writeln!(
        buffer,
        "{}{TIMES_REPORT_HEADER}{} {} {} {}",
        palette.white_bold, palette.reset, palette.tag_start, report.source, palette.reset
    );
    let last = report.stations.len().saturating_sub(1);
    for (index, row) in report.stations.iter().enumerate() {
        let branch = if index == last { "└─" } else { "├─" };
        let time = match row.minutes {
            Some(minutes) => format!("{}{minutes} min{}", palette.green, palette.reset),
            None => format!("{}unreachable{}", palette.red, palette.reset),
        };
        let _ = writeln!(
            buffer,
            "{}{branch}{} {}{:>3}{} {time}",
            palette.gray, palette.reset, palette.white_bold, row.station, palette.reset
        );
    }
    buffer
}

/// Colored travel plan with wall-clock times.
pub fn format_travel_enhanced(summary: &TravelSummary, palette: &ColorPalette) -> String {
    let plan = &summary.plan;
    let mut buffer = String::new();
    let _ = writeln!(
        buffer,
        "{} {} {} -> {} {} {}  {}depart {} (clock: {}){}",
        palette.tag_start,
        plan.source,
        palette.reset,
        palette.tag_goal,
        plan.target,
        palette.reset,
        palette.gray,
        format_clock(plan.start_time),
        plan.clock,
        palette.reset
    );

    for leg in &plan.legs {
        let _ = writeln!(
            buffer,
            "{}│{} {}{:>3}{} → {}{:<3}{} {}wait {:>2}{} ride {:>2}  {} → {}",
            palette.gray,
            palette.reset,
            palette.white_bold,
            leg.from,
            palette.reset,
            palette.white_bold,
            leg.to,
            palette.reset,
            palette.cyan,
            leg.wait,
            palette.reset,
            leg.ride,
            format_clock(leg.departs_at()),
            format_clock(leg.arrive_at)
        );
    }

    match plan.total {
        Some(total) => {
            let _ = writeln!(
                buffer,
                "{}└─{} {}{total} minutes{} (arrive {})",
                palette.gray,
                palette.reset,
                palette.green,
                palette.reset,
                format_clock(plan.start_time + total)
            );
        }
        None => {
            let _ = writeln!(
                buffer,
                "{}└─{} {}unreachable{}",
                palette.gray, palette.reset, palette.red, palette.reset
            );
        }
    }
    buffer
}
