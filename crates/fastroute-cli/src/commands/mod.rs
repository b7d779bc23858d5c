// Module exports for CLI subcommands
//
// Each module handles one subcommand; main.rs parses arguments and dispatches here.

pub mod times;
pub mod travel;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use fastroute_lib::{sample, Error as LibError, TransitNetwork};

/// Environment variable consulted when `--network` is not given.
pub const NETWORK_ENV: &str = "FASTROUTE_NETWORK";

/// Resolve the network file from the flag, then the environment.
pub fn network_path(flag: Option<&Path>) -> Option<PathBuf> {
    flag.map(Path::to_path_buf)
        .or_else(|| std::env::var_os(NETWORK_ENV).map(PathBuf::from))
}

/// Load the network at `path`, or the built-in sample when none is given.
pub fn load_network(path: Option<&Path>) -> Result<TransitNetwork> {
    match path {
        Some(path) => {
            let network = TransitNetwork::load(path)
                .with_context(|| format!("failed to load network from {}", path.display()))?;
            info!(
                path = %path.display(),
                stations = network.station_count(),
                "loaded network"
            );
            Ok(network)
        }
        None => {
            debug!("no network file given; using the built-in sample network");
            sample::network().context("failed to build the sample network")
        }
    }
}

/// Turn library errors into messages that point at the offending argument.
pub fn friendly_error(err: LibError) -> anyhow::Error {
    match err {
        LibError::StationOutOfRange { station, count, .. } => anyhow::anyhow!(
            "Unknown station {}. The network has {} stations (0-{}).",
            station,
            count,
            count.saturating_sub(1)
        ),
        other => anyhow::Error::new(other),
    }
}
