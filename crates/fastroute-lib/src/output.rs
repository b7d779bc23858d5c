use std::fmt::Write;

use serde::Serialize;

use crate::network::{Minutes, StationId};
use crate::path::ShortestTimes;
use crate::routing::TravelPlan;

/// Header line of the shortest-times report.
pub const TIMES_REPORT_HEADER: &str = "Vertex Distances (time) from Source";

/// Presentation style for turning a report into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportMode {
    PlainText,
    RichText,
}

/// Shortest time from the report's source to one station.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StationTime {
    pub station: StationId,
    /// `None` when the station cannot be reached.
    pub minutes: Option<Minutes>,
}

impl StationTime {
    fn display_minutes(&self) -> String {
        match self.minutes {
            Some(minutes) => format!("{minutes} minutes"),
            None => "unreachable".to_string(),
        }
    }
}

/// Table of shortest times from one source station.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TimesReport {
    pub source: StationId,
    pub stations: Vec<StationTime>,
}

impl TimesReport {
    /// Convert search results into a report, one row per station.
    pub fn from_times(times: &ShortestTimes) -> Self {
        let stations = times
            .times
            .iter()
            .enumerate()
            .map(|(station, minutes)| StationTime {
                station,
                minutes: *minutes,
            })
            .collect();

        Self {
            source: times.source,
            stations,
        }
    }

    /// Minutes per station in index order; `None` for unreachable stations.
    pub fn minutes(&self) -> Vec<Option<Minutes>> {
        self.stations.iter().map(|row| row.minutes).collect()
    }

    /// Render the report using the requested textual mode.
    pub fn render(&self, mode: ReportMode) -> String {
        match mode {
            ReportMode::PlainText => self.render_plain(),
            ReportMode::RichText => self.render_rich(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(buffer, "{TIMES_REPORT_HEADER}");
        for row in &self.stations {
            let _ = writeln!(buffer, "{}: {}", row.station, row.display_minutes());
        }
        buffer
    }

    fn render_rich(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(buffer, "**Shortest times** from station `{}`", self.source);
        let _ = writeln!(buffer);
        let _ = writeln!(buffer, "| Station | Time |");
        let _ = writeln!(buffer, "|--------:|-----:|");
        for row in &self.stations {
            let _ = writeln!(buffer, "| {} | {} |", row.station, row.display_minutes());
        }
        buffer
    }
}

/// Structured representation of a travel plan for display.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TravelSummary {
    #[serde(flatten)]
    pub plan: TravelPlan,
}

impl TravelSummary {
    pub fn from_plan(plan: TravelPlan) -> Self {
        Self { plan }
    }

    /// Closing line in the historical report format.
    pub fn headline(&self) -> String {
        let plan = &self.plan;
        match plan.total {
            Some(total) => format!(
                "Vertex Distances (time) from {} to {}: {} minutes",
                plan.source, plan.target, total
            ),
            None => format!(
                "Vertex Distances (time) from {} to {}: unreachable",
                plan.source, plan.target
            ),
        }
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: ReportMode) -> String {
        match mode {
            ReportMode::PlainText => self.render_plain(),
            ReportMode::RichText => self.render_rich(),
        }
    }

    fn render_plain(&self) -> String {
        let plan = &self.plan;
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Travel: {} -> {} (start {}, {} rides, mode: {}, clock: {})",
            plan.source,
            plan.target,
            plan.start_time,
            plan.hop_count(),
            plan.mode,
            plan.clock
        );
        for leg in &plan.legs {
            let _ = writeln!(
                buffer,
                "{:>3} -> {:<3} ready {:>4}, wait {:>3}, ride {:>3}, arrive {:>4}",
                leg.from, leg.to, leg.ready_at, leg.wait, leg.ride, leg.arrive_at
            );
        }
        let _ = writeln!(buffer, "{}", self.headline());
        buffer
    }

    fn render_rich(&self) -> String {
        let plan = &self.plan;
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "**Travel** — _{} → {}_ (start `{}`, mode: `{}`, clock: `{}`)",
            plan.source, plan.target, plan.start_time, plan.mode, plan.clock
        );
        for (index, leg) in plan.legs.iter().enumerate() {
            let _ = writeln!(
                buffer,
                "* {:>2}. **{} → {}** wait {} min, ride {} min, arrive at {}",
                index + 1,
                leg.from,
                leg.to,
                leg.wait,
                leg.ride,
                leg.arrive_at
            );
        }
        match plan.total {
            Some(total) => {
                let _ = writeln!(
                    buffer,
                    "\nTotal: **{total} minutes** ({} waiting)",
                    plan.total_wait()
                );
            }
            None => {
                let _ = writeln!(buffer, "\nTarget is **unreachable**");
            }
        }
        buffer
    }
}
