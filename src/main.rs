#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! runner-args — split runner command lines into options and arguments.

mod cli;
mod cmdline;
mod commands;
mod types;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, OutputCtx, write_error};
use types::ErrorOutput;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let ctx = OutputCtx::new(cli.output, cli.json, cli.no_header, cli.debug);

    match commands::dispatch(&cli.command, cli.base_dir.as_deref(), &ctx) {
        Ok(()) => {}
        Err(err) => {
            write_error(&ErrorOutput::from(&err), cli.output, cli.json);
            std::process::exit(err.exit_code());
        }
    }
}

/// Log to stderr. `RUST_LOG` overrides the level picked by `--debug`.
fn init_tracing(debug: bool) {
    let default = if debug {
        "runner_args=debug"
    } else {
        "runner_args=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
