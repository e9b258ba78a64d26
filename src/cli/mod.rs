/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Command-line interface structs, functions, and methods.
//!
//! Each module correspond to a group of commands, and each command is
//! implemented as a submodule.

use crate::par::DEFAULT_THRESHOLD;
use anyhow::{ensure, Result};
use clap::{Args, Parser, Subcommand};
use std::io::Write;
use std::time::Instant;

pub mod bench;

/// Parses the number of threads from a string.
///
/// This function is meant to be used with `#[arg(...,  value_parser =
/// num_threads_parser)]`.
pub fn num_threads_parser(arg: &str) -> Result<usize> {
    let num_threads = arg.parse::<usize>()?;
    ensure!(num_threads > 0, "Number of threads must be greater than 0");
    Ok(num_threads)
}

/// Shared CLI arguments for commands that specify a number of threads.
#[derive(Args, Debug)]
pub struct NumThreadsArg {
    #[arg(short = 'j', long, default_value_t = rayon::current_num_threads().max(1), value_parser = num_threads_parser)]
    /// The number of threads to use.
    pub num_threads: usize,
}

/// Shared CLI arguments for commands that specify a sequential threshold.
#[derive(Args, Debug)]
pub struct ThresholdArg {
    #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
    /// The input size below which parallel loops and prefix sums run
    /// sequentially (advanced option).
    pub threshold: usize,
}

/// Initializes the `env_logger` logger.
///
/// Each line starts with the current UTC time and the time elapsed since
/// initialization; the default filter is `info`.
///
/// # Errors
///
/// If a logger has already been installed.
pub fn init_env_logger() -> Result<()> {
    let start = Instant::now();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(move |buf, record| {
            let style = buf.default_level_style(record.level());
            writeln!(
                buf,
                "{} +{:.3}s {style}{}{style:#} [{:?}] {} - {}",
                jiff::Timestamp::now().strftime("%F %T%.3f"),
                start.elapsed().as_secs_f64(),
                record.level(),
                std::thread::current().id(),
                record.target(),
                record.args()
            )
        })
        .try_init()?;
    Ok(())
}

/// Arguments shared by all commands.
#[derive(Args, Debug)]
pub struct GlobalArgs {
    #[arg(long, global = true, display_order = 1000)]
    /// Log the progress of each visit with a progress logger.
    pub progress: bool,
}

#[derive(Subcommand, Debug)]
pub enum SubCommands {
    #[command(subcommand)]
    Bench(bench::SubCommands),
}

#[derive(Parser, Debug)]
#[command(name = "parbfs", version)]
/// Sequential and parallel breadth-first visits.
///
/// Noteworthy environment variables:
///
/// - RUST_LOG: configuration for env_logger, pass `debug` to see the size of
///   each layer of parallel visits;
///
/// - RUST_MIN_STACK: minimum thread stack size (in bytes).
pub struct Cli {
    #[command(subcommand)]
    command: SubCommands,
    #[clap(flatten)]
    args: GlobalArgs,
}

/// Parses the command-line arguments and runs the selected command.
pub fn main<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let start = Instant::now();
    let cli = Cli::parse_from(args);
    match cli.command {
        SubCommands::Bench(args) => bench::main(cli.args, args)?,
    }

    log::info!("The command took {:.3}s", start.elapsed().as_secs_f64());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_num_threads_parser() {
        assert_eq!(num_threads_parser("3").unwrap(), 3);
        assert!(num_threads_parser("0").is_err());
        assert!(num_threads_parser("x").is_err());
    }

    #[test]
    fn test_init_env_logger() {
        assert!(init_env_logger().is_ok());
        log::info!("Logger initialized");
        // A second logger cannot be installed
        assert!(init_env_logger().is_err());
    }
}
