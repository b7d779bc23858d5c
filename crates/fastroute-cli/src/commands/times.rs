//! Times command handler: fixed-weight shortest times from one station.

use anyhow::Result;

use fastroute_lib::{shortest_time, StationId, TransitNetwork};

use crate::commands::friendly_error;
use crate::output::OutputFormat;

/// Arguments for the times command.
#[derive(Debug, Clone)]
pub struct TimesCommandArgs {
    /// Station the report is measured from.
    pub source: StationId,
}

/// Handle the times subcommand.
///
/// Prints the shortest ride time from the source to every station, ignoring
/// the timetable.
pub fn handle_times_command(
    network: &TransitNetwork,
    format: OutputFormat,
    args: &TimesCommandArgs,
) -> Result<()> {
    let report = shortest_time(network, args.source).map_err(friendly_error)?;
    print!("{}", format.render_times(&report)?);
    Ok(())
}
