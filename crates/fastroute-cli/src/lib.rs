//! fastroute CLI library.
//!
//! Subcommand handlers, output formatting and terminal styling for the
//! transit travel-time command-line interface.

pub mod commands;
pub mod output;
pub mod terminal;
