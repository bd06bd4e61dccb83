//! CLI shim over fetch/clean.
//!
//! The statics table can only come from the embedding program, so the CLI
//! is a method on [`Staticfetcher`] rather than a standalone binary: the
//! program builds its table and hands its process arguments over.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::ffi::OsString;

use crate::logging;
use crate::statics::Staticfetcher;

/// Top-level CLI for a staticfetcher-driven program.
#[derive(Debug, Parser)]
#[command(name = "staticfetcher")]
#[command(about = "Fetches static files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch static files.
    Fetch {
        /// Fetches even already existing files.
        #[arg(long)]
        force: bool,
    },

    /// Deletes static files.
    Clean,
}

impl Staticfetcher {
    /// Parses the process arguments and runs the selected action.
    ///
    /// Installs the default logging subscriber first (a no-op when the
    /// embedding program set one up). Errors from the action propagate to
    /// the caller, which decides the exit code.
    pub fn run(&self) -> Result<()> {
        logging::init();
        self.dispatch(Cli::parse())
    }

    /// Like [`Staticfetcher::run`], but over an explicit argument list.
    /// Argument zero is the program name, as with `std::env::args`.
    pub fn run_from<I, T>(&self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        self.dispatch(Cli::parse_from(args))
    }

    fn dispatch(&self, cli: Cli) -> Result<()> {
        match cli.command {
            CliCommand::Fetch { force } => self.fetch(force),
            CliCommand::Clean => self.clean(),
        }
    }
}
