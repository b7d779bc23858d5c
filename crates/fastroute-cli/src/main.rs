use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use fastroute_cli::commands::times::{handle_times_command, TimesCommandArgs};
use fastroute_cli::commands::travel::{handle_travel_command, ClockArg, TravelCommandArgs};
use fastroute_cli::commands::{load_network, network_path};
use fastroute_cli::output::OutputFormat;
use fastroute_lib::{Minutes, StationId};

#[derive(Parser, Debug)]
#[command(author, version, about = "Schedule-aware transit travel times")]
struct Cli {
    /// Network JSON file. Falls back to FASTROUTE_NETWORK, then the built-in sample.
    #[arg(long)]
    network: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Shortest ride times from one station to every station, ignoring the timetable.
    Times {
        /// Station to measure from.
        #[arg(long)]
        source: StationId,
    },
    /// Timetable-aware travel time between two stations.
    Travel {
        /// Starting station.
        #[arg(long = "from")]
        from: StationId,
        /// Destination station.
        #[arg(long = "to")]
        to: StationId,
        /// Minutes from the service epoch at which you are ready to leave.
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        start: Minutes,
        /// Clock used to look up departures.
        #[arg(long, value_enum, default_value_t = ClockArg::PerStation)]
        clock: ClockArg,
        /// Use ride lengths only and never wait for a departure.
        #[arg(long)]
        ignore_schedule: bool,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let path = network_path(cli.network.as_deref());
    let network = load_network(path.as_deref())?;

    match cli.command {
        Command::Times { source } => {
            handle_times_command(&network, cli.format, &TimesCommandArgs { source })
        }
        Command::Travel {
            from,
            to,
            start,
            clock,
            ignore_schedule,
        } => {
            let args = TravelCommandArgs {
                from,
                to,
                start,
                clock,
                ignore_schedule,
            };
            handle_travel_command(&network, cli.format, &args)
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
