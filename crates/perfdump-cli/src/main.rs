mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};

fn main() -> Result<()> {
    let args = Cli::parse();

    // Initialize logging
    let level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(format!("perfdump={level}").parse()?)
                .add_directive(format!("perfdump_core={level}").parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    debug!("perfdump {} starting", env!("CARGO_PKG_VERSION"));

    match args.command {
        Command::Hexdump {
            image,
            offset,
            length,
            width,
            max,
        } => commands::hexdump::run(&image, offset, length, width, max),
        Command::Decode {
            image,
            offset,
            count,
            stride,
            config,
            json,
            sysex_parts,
        } => commands::decode::run(
            &image,
            offset,
            count,
            stride,
            config.as_deref(),
            json.as_deref(),
            sysex_parts,
        ),
        Command::Compare {
            image,
            a,
            b,
            other,
            length,
            limit,
        } => commands::compare::run(&image, a, b, other.as_deref(), length, limit),
        Command::Search {
            image,
            text,
            limit,
            context,
        } => commands::search::run(&image, &text, limit, context),
        Command::Banks {
            config,
            rom_dir,
            json,
        } => commands::banks::run(&config, &rom_dir, json.as_deref()),
    }
}
