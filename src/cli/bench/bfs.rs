/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::cli::{GlobalArgs, NumThreadsArg, ThresholdArg};
use crate::graphs::lattice;
use crate::thread_pool;
use crate::traits::RandomAccessGraph;
use crate::visits::{ParLayered, Seq};
use anyhow::{ensure, Result};
use clap::Parser;
use dsi_progress_logger::prelude::*;
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[command(name = "bfs", about = "Benchmarks sequential and parallel breadth-first visits on a cubic lattice.", long_about = None)]
pub struct CliArgs {
    /// The side of the lattice.
    #[arg(short, long, default_value_t = 300)]
    pub side: usize,
    /// The node to start the visits from.
    #[arg(long, default_value_t = 0)]
    pub start: usize,
    /// Number of repeats; the first one is considered a warm-up and it is
    /// not included in the averages, unless it is the only one.
    #[arg(short = 'R', long, default_value_t = 6)]
    pub repeats: usize,
    /// Check that the two visits compute the same distances.
    #[arg(long)]
    pub check: bool,

    #[clap(flatten)]
    pub num_threads: NumThreadsArg,

    #[clap(flatten)]
    pub threshold: ThresholdArg,
}

pub fn main(global_args: GlobalArgs, args: CliArgs) -> Result<()> {
    ensure!(args.repeats > 0, "The number of repeats must be greater than 0");

    log::info!("Building lattice of side {}...", args.side);
    let graph = lattice::cube(args.side);
    log::info!(
        "The lattice has {} nodes and {} arcs",
        graph.num_nodes(),
        graph.num_arcs()
    );

    let thread_pool = thread_pool![args.num_threads.num_threads];
    let mut seq = Seq::new(&graph);
    let mut par = ParLayered::with_threshold(&graph, args.threshold.threshold);
    let mut pl = global_args.progress.then(|| {
        let mut pl = ProgressLogger::default();
        pl.display_memory(true).local_speed(true);
        pl
    });

    let mut seq_times = Vec::with_capacity(args.repeats);
    let mut par_times = Vec::with_capacity(args.repeats);

    for run in 0..args.repeats {
        let start = Instant::now();
        let seq_distances = seq.visit(args.start, &mut pl)?;
        seq_times.push(start.elapsed());

        let start = Instant::now();
        let par_distances = par.visit(args.start, &thread_pool, &mut pl)?;
        par_times.push(start.elapsed());

        log::info!(
            "Run {}: sequential {:.3}s, parallel {:.3}s",
            run + 1,
            seq_times[run].as_secs_f64(),
            par_times[run].as_secs_f64()
        );

        if args.check {
            ensure!(
                seq_distances == par_distances,
                "Sequential and parallel distances differ"
            );
        }
    }

    let seq_avg = average(&seq_times);
    let par_avg = average(&par_times);
    log::info!(
        "Sequential average: {:.3}s, parallel average ({} threads): {:.3}s",
        seq_avg.as_secs_f64(),
        args.num_threads.num_threads,
        par_avg.as_secs_f64()
    );
    log::info!(
        "Speedup: {:.3}",
        seq_avg.as_secs_f64() / par_avg.as_secs_f64()
    );

    Ok(())
}

/// Averages all times but the first, unless it is the only one.
fn average(times: &[Duration]) -> Duration {
    let times = if times.len() > 1 { &times[1..] } else { times };
    times.iter().sum::<Duration>() / times.len() as u32
}
